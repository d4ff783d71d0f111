//! Shared types for the linkcap capacity planner.
//!
//! This crate contains:
//! - **Data models** — traffic samples, link topology, capacity summary rows
//! - **Configuration** — planner constants loaded from TOML with validated resolve

pub mod config;
pub mod models;
