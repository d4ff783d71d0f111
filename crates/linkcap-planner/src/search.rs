//! # Capacity Search
//!
//! Bisection over candidate capacities to find the smallest one whose
//! overflow fraction stays within the configured loss bound.
//!
//! The search brackets `[mean, peak]`. At the peak no sample generates
//! excess, so the bracket always contains a feasible point; the mean is
//! checked first as a fast path because steady links are safe there and
//! need no search at all.

use thiserror::Error;

use linkcap_common::config::PlannerConfig;

use crate::overflow::overflow_fraction;
use crate::stats;

/// Errors from the planning core's search primitives.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    /// [`min_feasible_capacity`] was called with no samples. The summary
    /// builder filters sample-less links before searching, so hitting
    /// this indicates a caller bug, not bad telemetry.
    #[error("capacity search requires a non-empty traffic series")]
    EmptySeries,
}

/// Smallest capacity (Gbps) whose overflow fraction is within
/// `cfg.max_loss_frac`, for a time-ordered series of throughput samples.
///
/// Returns the mean immediately when it is already safe. Otherwise
/// bisects `[mean, peak]` until the bracket is narrower than `cfg.tol`
/// or `cfg.max_iters` is exhausted, and returns the upper bound: the
/// best known-feasible candidate, biased safe by up to `tol`. The fast
/// path returns the raw mean rather than a symmetric bound; callers
/// depend on that asymmetry.
///
/// # Contract
///
/// The overflow fraction must be non-increasing in candidate capacity
/// for the caller's traffic model. A violation is not detected
/// mid-search and silently yields a feasible-looking but possibly
/// non-minimal result; the returned candidate is re-simulated once and
/// a warning is logged if it misses the loss bound.
pub fn min_feasible_capacity(samples: &[f64], cfg: &PlannerConfig) -> Result<f64, PlanError> {
    if samples.is_empty() {
        return Err(PlanError::EmptySeries);
    }

    let mut lo = stats::mean(samples);
    let mut hi = stats::peak(samples);

    if overflow_fraction(samples, lo, cfg.buffer_duration_s) <= cfg.max_loss_frac {
        return Ok(lo); // mean already safe
    }

    for _ in 0..cfg.max_iters {
        if hi - lo < cfg.tol {
            break;
        }
        let mid = (lo + hi) / 2.0;
        if overflow_fraction(samples, mid, cfg.buffer_duration_s) <= cfg.max_loss_frac {
            hi = mid; // feasible, tighten the upper bound
        } else {
            lo = mid; // too lossy, raise the floor
        }
    }

    let residual = overflow_fraction(samples, hi, cfg.buffer_duration_s);
    if residual > cfg.max_loss_frac {
        tracing::warn!(
            capacity_gbps = hi,
            overflow_frac = residual,
            max_loss_frac = cfg.max_loss_frac,
            "search result misses the loss bound; overflow curve is not monotonic in capacity"
        );
    }

    Ok(hi)
}
