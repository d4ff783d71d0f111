//! # Linkcap Planner
//!
//! The algorithmic core of linkcap: given per-link traffic telemetry and a
//! link topology, computes the minimum sustainable capacity per link under
//! two regimes, no buffering (peak-rate provisioning) and bounded burst
//! buffering (overflow simulation driven by a bisection search), along
//! with descriptive statistics for the report.
//!
//! Everything here is pure computation: no I/O, no shared state across
//! invocations beyond the read-only configuration. Identical input and
//! configuration yield bit-identical output.

pub mod heuristic;
pub mod overflow;
pub mod search;
pub mod stats;
pub mod summary;

pub use search::PlanError;
