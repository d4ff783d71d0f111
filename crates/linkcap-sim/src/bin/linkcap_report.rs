//! # Linkcap Report
//!
//! Command-line entry point for the capacity planner: computes the
//! per-link capacity summary from a traffic dataset and topology, or
//! from a generated scenario when no dataset is supplied.
//!
//! ## Usage
//!
//! ```bash
//! # Generated 5-link scenario, authoritative (bisection) capacities
//! linkcap-report --seed 7 --links 5
//!
//! # Real dataset + topology, quick heuristic capacities
//! linkcap-report --traffic traffic.json --topology topology.json --quick
//!
//! # Planner constants from a TOML file, report written to disk
//! linkcap-report --config planner.toml --output report.json
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use linkcap_common::config::PlannerConfig;
use linkcap_common::models::{Topology, TrafficSample};
use linkcap_planner::heuristic::quick_summary;
use linkcap_planner::summary::build_capacity_summary;
use linkcap_sim::scenario::{TrafficScenario, TrafficScenarioConfig};

/// Per-link capacity planning report.
#[derive(Parser, Debug)]
#[command(name = "linkcap-report", about = "Per-link capacity planning report")]
struct Cli {
    /// Planner configuration TOML (defaults used when omitted).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Traffic dataset, JSON array of samples. Generated when omitted.
    #[arg(long)]
    traffic: Option<PathBuf>,

    /// Topology JSON (`{"links": [...]}`). Derived from the traffic
    /// dataset when omitted.
    #[arg(long)]
    topology: Option<PathBuf>,

    /// Scenario seed for generated traffic.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of generated links.
    #[arg(long, default_value_t = 5)]
    links: usize,

    /// Generated scenario duration in seconds.
    #[arg(long, default_value_t = 600.0)]
    duration_s: f64,

    /// Generated scenario sampling step in seconds.
    #[arg(long, default_value_t = 0.1)]
    step_s: f64,

    /// Use the quick headroom heuristic instead of the overflow search.
    #[arg(long, default_value_t = false)]
    quick: bool,

    /// Write the JSON report here instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // ── Logging ─────────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .compact()
        .init();

    let cli = Cli::parse();

    // ── Planner configuration ───────────────────────────────────
    let cfg = match &cli.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            PlannerConfig::from_toml_str(&raw)?
        }
        None => PlannerConfig::default(),
    };
    tracing::info!(
        buffer_duration_s = cfg.buffer_duration_s,
        max_loss_frac = cfg.max_loss_frac,
        "planner configured"
    );

    // ── Traffic + topology ──────────────────────────────────────
    let (traffic, topology) = match &cli.traffic {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading traffic dataset {}", path.display()))?;
            let traffic: Vec<TrafficSample> =
                serde_json::from_str(&raw).context("parsing traffic dataset")?;

            let topology = match &cli.topology {
                Some(tp) => {
                    let raw = fs::read_to_string(tp)
                        .with_context(|| format!("reading topology {}", tp.display()))?;
                    let parsed: Topology =
                        serde_json::from_str(&raw).context("parsing topology")?;
                    Topology::from_links(parsed.links)
                }
                None => Topology::from_links(traffic.iter().map(|s| s.link_id.clone())),
            };

            tracing::info!(
                rows = traffic.len(),
                links = topology.links.len(),
                "dataset loaded"
            );
            (traffic, topology)
        }
        None => {
            tracing::info!(
                seed = cli.seed,
                links = cli.links,
                duration_s = cli.duration_s,
                "no dataset supplied, generating scenario traffic"
            );
            let mut scenario = TrafficScenario::new(TrafficScenarioConfig::with_default_links(
                cli.seed,
                cli.links,
                cli.duration_s,
                cli.step_s,
            ));
            let topology = scenario.topology();
            (scenario.samples(), topology)
        }
    };

    // ── Summary ─────────────────────────────────────────────────
    let rows = if cli.quick {
        quick_summary(&traffic, &topology)
    } else {
        build_capacity_summary(&traffic, &topology, &cfg)?
    };
    tracing::info!(
        rows = rows.len(),
        quick = cli.quick,
        "capacity summary built"
    );

    // ── Emit ────────────────────────────────────────────────────
    let json = serde_json::to_string_pretty(&rows).context("serializing report")?;
    match &cli.output {
        Some(path) => {
            fs::write(path, &json)
                .with_context(|| format!("writing report {}", path.display()))?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => println!("{json}"),
    }

    Ok(())
}
