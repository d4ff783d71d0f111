//! # Headroom Heuristic
//!
//! Quick capacity estimates used by the ingestion path when regenerating
//! datasets in bulk: peak-rate provisioning with 10% headroom, and a
//! burstiness-ratio discount standing in for the full overflow search.
//!
//! This is a deliberately separate path from [`crate::search`]. The two
//! serve different callers with different accuracy/cost trade-offs and
//! must not be conflated; the bisection search remains the authoritative
//! figure in the capacity report.

use linkcap_common::models::{CapacitySummaryRow, Topology, TrafficSample};

use crate::stats::{mean, p95, peak, round4};
use crate::summary::link_series;

/// Peak-rate capacity with 10% headroom, no buffering assumed.
pub fn headroom_no_buffer(peak_gbps: f64) -> f64 {
    peak_gbps * 1.1
}

/// Buffer-aware quick estimate.
///
/// Bursty links (peak more than 1.5x the average) get a 20% savings
/// factor, steady links 5%. The `+0.001` in the burstiness ratio guards
/// a zero average; existing datasets bake this exact epsilon in, so it
/// must stay as an unconditional addend.
pub fn headroom_with_buffer(avg_gbps: f64, peak_gbps: f64) -> f64 {
    let burstiness = peak_gbps / (avg_gbps + 0.001);
    let savings_factor = if burstiness > 1.5 { 0.2 } else { 0.05 };
    peak_gbps * (1.0 - savings_factor) * 1.1
}

/// Capacity summary built entirely from the headroom estimates.
///
/// Same row shape, statistics, topology ordering, and skip-empty-link
/// rule as [`crate::summary::build_capacity_summary`], with the capacity
/// columns replaced by the heuristic figures. Cannot fail: there is no
/// search to violate a precondition.
pub fn quick_summary(traffic: &[TrafficSample], topology: &Topology) -> Vec<CapacitySummaryRow> {
    let mut rows = Vec::with_capacity(topology.links.len());

    for link_id in &topology.links {
        let series = link_series(traffic, link_id);
        if series.is_empty() {
            tracing::warn!(%link_id, "no traffic data for link, skipping");
            continue;
        }

        let avg = mean(&series);
        let peak_gbps = peak(&series);

        rows.push(CapacitySummaryRow {
            link_id: link_id.clone(),
            avg_gbps: round4(avg),
            peak_gbps: round4(peak_gbps),
            p95_gbps: round4(p95(&series)),
            capacity_no_buffer_gbps: round4(headroom_no_buffer(peak_gbps)),
            capacity_with_buffer_gbps: round4(headroom_with_buffer(avg, peak_gbps)),
        });
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_buffer_adds_ten_percent_headroom() {
        assert!((headroom_no_buffer(10.0) - 11.0).abs() < 1e-12);
    }

    #[test]
    fn bursty_link_gets_twenty_percent_savings() {
        // burstiness = 9 / 3.001 ≈ 3.0 → 20% savings
        let cap = headroom_with_buffer(3.0, 9.0);
        assert!((cap - 9.0 * 0.8 * 1.1).abs() < 1e-12, "got {cap}");
    }

    #[test]
    fn steady_link_gets_five_percent_savings() {
        // burstiness = 5 / 4.001 ≈ 1.25 → 5% savings
        let cap = headroom_with_buffer(4.0, 5.0);
        assert!((cap - 5.0 * 0.95 * 1.1).abs() < 1e-12, "got {cap}");
    }

    #[test]
    fn burstiness_branch_flips_just_above_ratio_of_1_5() {
        // 3.0 / 2.001 ≈ 1.4993 → steady; 3.01 / 2.001 ≈ 1.5042 → bursty.
        let cap_steady = headroom_with_buffer(2.0, 3.0);
        assert!((cap_steady - 3.0 * 0.95 * 1.1).abs() < 1e-12);

        let cap_bursty = headroom_with_buffer(2.0, 3.01);
        assert!((cap_bursty - 3.01 * 0.8 * 1.1).abs() < 1e-12);
    }

    #[test]
    fn zero_average_is_defused_by_the_epsilon() {
        // avg = 0 would divide by zero without the +0.001 addend.
        let cap = headroom_with_buffer(0.0, 1.0);
        assert!(cap.is_finite());
        // burstiness = 1000 → bursty branch
        assert!((cap - 1.0 * 0.8 * 1.1).abs() < 1e-12);
    }

    #[test]
    fn quick_summary_uses_heuristic_columns() {
        let traffic = vec![
            TrafficSample {
                time_seconds: 0.0,
                link_id: "l".to_string(),
                aggregated_gbps: 2.0,
            },
            TrafficSample {
                time_seconds: 0.1,
                link_id: "l".to_string(),
                aggregated_gbps: 8.0,
            },
        ];
        let topology = Topology::from_links(["l".to_string()]);
        let rows = quick_summary(&traffic, &topology);

        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.peak_gbps, 8.0);
        assert!((row.capacity_no_buffer_gbps - 8.8).abs() < 1e-12);
        // burstiness = 8 / 5.001 ≈ 1.6 → bursty
        assert!((row.capacity_with_buffer_gbps - round4(8.0 * 0.8 * 1.1)).abs() < 1e-12);
    }

    #[test]
    fn quick_summary_skips_links_without_data() {
        let topology = Topology::from_links(["ghost".to_string()]);
        let rows = quick_summary(&[], &topology);
        assert!(rows.is_empty());
    }
}
