//! # Capacity Summary
//!
//! Assembles the per-link capacity planning report: descriptive
//! statistics plus both capacity figures (peak-rate and buffer-aware)
//! for every link the topology names.

use linkcap_common::config::PlannerConfig;
use linkcap_common::models::{CapacitySummaryRow, Topology, TrafficSample};

use crate::search::{PlanError, min_feasible_capacity};
use crate::stats::{mean, p95, peak, round4};

/// Build one summary row per topology link that has traffic data.
///
/// Links are processed in topology order, which fixes the row order of
/// the report. A link without any matching samples is skipped with a
/// warning; one data-less link never aborts the batch. Per-link
/// computations touch no shared state, so identical traffic, topology,
/// and configuration yield identical rows.
pub fn build_capacity_summary(
    traffic: &[TrafficSample],
    topology: &Topology,
    cfg: &PlannerConfig,
) -> Result<Vec<CapacitySummaryRow>, PlanError> {
    let mut rows = Vec::with_capacity(topology.links.len());

    for link_id in &topology.links {
        let series = link_series(traffic, link_id);
        if series.is_empty() {
            tracing::warn!(%link_id, "no traffic data for link, skipping");
            continue;
        }

        let peak_gbps = peak(&series);
        // The empty-series error cannot fire after the filter above;
        // if it ever does, propagate it rather than masking a bug.
        let with_buffer = min_feasible_capacity(&series, cfg)?;

        rows.push(CapacitySummaryRow {
            link_id: link_id.clone(),
            avg_gbps: round4(mean(&series)),
            peak_gbps: round4(peak_gbps),
            p95_gbps: round4(p95(&series)),
            capacity_no_buffer_gbps: round4(peak_gbps),
            capacity_with_buffer_gbps: round4(with_buffer),
        });
    }

    Ok(rows)
}

/// Throughput series for one link, in dataset order.
pub(crate) fn link_series(traffic: &[TrafficSample], link_id: &str) -> Vec<f64> {
    traffic
        .iter()
        .filter(|s| s.link_id == link_id)
        .map(|s| s.aggregated_gbps)
        .collect()
}
