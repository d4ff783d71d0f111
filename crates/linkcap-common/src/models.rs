//! Data models for the linkcap planner.
//!
//! These types are shared between the planning core (which consumes traffic
//! and topology and produces summary rows) and the tooling around it
//! (scenario generation, the report binary).

use serde::{Deserialize, Serialize};

// ── Traffic ─────────────────────────────────────────────────────────

/// One traffic telemetry row: aggregated throughput observed on a link
/// during a single sampling slot.
///
/// Rows for a link form a time-ordered sequence. The overflow simulation
/// consumes them as a stream, so order matters; an unordered bag of the
/// same values is not equivalent input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficSample {
    pub time_seconds: f64,
    pub link_id: String,
    /// Aggregated throughput for the slot, Gbps. Never negative.
    pub aggregated_gbps: f64,
}

// ── Topology ────────────────────────────────────────────────────────

/// The set of links the planner must report on, in report order.
///
/// Supplied by an external topology source. A link listed here without
/// any traffic data is skipped with a diagnostic rather than failing the
/// batch. Order is significant: summary rows follow it exactly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Topology {
    pub links: Vec<String>,
}

impl Topology {
    /// Build from an ordered sequence of link ids, dropping duplicates
    /// (first occurrence wins).
    pub fn from_links(ids: impl IntoIterator<Item = String>) -> Self {
        let mut links = Vec::new();
        for id in ids {
            if !links.contains(&id) {
                links.push(id);
            }
        }
        Topology { links }
    }
}

// ── Capacity Summary ────────────────────────────────────────────────

/// One row of the capacity planning report.
///
/// All numeric fields carry 4 decimal places; the row serializes
/// directly to the JSON shape the reporting layer expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacitySummaryRow {
    pub link_id: String,
    pub avg_gbps: f64,
    pub peak_gbps: f64,
    pub p95_gbps: f64,
    /// Capacity required with no buffering: the observed peak.
    pub capacity_no_buffer_gbps: f64,
    /// Capacity required with burst buffering, per the configured loss bound.
    pub capacity_with_buffer_gbps: f64,
}
