//! Traffic simulation toolkit for the linkcap planner.
//!
//! Provides deterministic, seeded generation of per-link traffic
//! datasets for testing the capacity pipeline and for demo reports when
//! no real telemetry is available.

pub mod scenario;
