//! # Burst Overflow Simulation
//!
//! Models a link buffer absorbing traffic bursts above a candidate
//! capacity and reports how often the buffer overflows.
//!
//! The buffer holds `candidate_gbps * buffer_duration_s` gigabits. Each
//! sample's excess above the candidate capacity accumulates into a scalar
//! backlog; the moment the backlog exceeds the buffer, one overflow event
//! is recorded and the backlog resets to zero. The reset, rather than a
//! continuous drain at line rate, treats a burst that beat the buffer as
//! a single loss incident followed by full recovery. Downstream consumers
//! were calibrated against this exact behavior, so it must not be swapped
//! for a leaky-bucket model.

/// Fraction of samples that overflowed a burst buffer at the given
/// candidate capacity.
///
/// Samples are consumed in order as a stream. An empty slice returns
/// `0.0`: no traffic, no loss.
pub fn overflow_fraction(samples: &[f64], candidate_gbps: f64, buffer_duration_s: f64) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }

    // Buffer size in Gb: Gbps of capacity times seconds of absorption.
    let buffer_gb = candidate_gbps * buffer_duration_s;

    let mut backlog_gb = 0.0_f64;
    let mut overflows = 0usize;

    for &gbps in samples {
        backlog_gb += (gbps - candidate_gbps).max(0.0);
        if backlog_gb > buffer_gb {
            overflows += 1;
            backlog_gb = 0.0;
        }
    }

    overflows as f64 / samples.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_series_never_overflows() {
        assert_eq!(overflow_fraction(&[], 0.0, 0.05), 0.0);
        assert_eq!(overflow_fraction(&[], 100.0, 1.0), 0.0);
    }

    #[test]
    fn capacity_at_or_above_peak_never_overflows() {
        let samples = [3.0, 7.5, 1.2, 7.5, 4.0];
        assert_eq!(overflow_fraction(&samples, 7.5, 0.05), 0.0);
        assert_eq!(overflow_fraction(&samples, 20.0, 0.05), 0.0);
    }

    #[test]
    fn constant_overload_overflows_every_slot() {
        // Each slot brings 1 Gb of excess against a 0.2 Gb buffer, so the
        // backlog bursts through on every slot and resets each time.
        let samples = [5.0; 5];
        assert_eq!(overflow_fraction(&samples, 4.0, 0.05), 1.0);
    }

    #[test]
    fn backlog_accumulates_across_slots() {
        // Buffer: 2.0 * 1.0 = 2 Gb. Excess per slot: 1 Gb. The backlog
        // reaches 3 Gb on the third slot, overflows, resets, then climbs
        // again and overflows on the sixth.
        let samples = [3.0; 6];
        let frac = overflow_fraction(&samples, 2.0, 1.0);
        assert!((frac - 2.0 / 6.0).abs() < 1e-12, "got {frac}");
    }

    #[test]
    fn zero_capacity_with_idle_traffic_is_safe() {
        let samples = [0.0, 0.0, 0.0];
        assert_eq!(overflow_fraction(&samples, 0.0, 0.05), 0.0);
    }

    #[test]
    fn zero_capacity_with_any_traffic_always_overflows() {
        // Buffer collapses to 0 Gb, so any positive sample is an event.
        let samples = [0.5, 0.5];
        assert_eq!(overflow_fraction(&samples, 0.0, 0.05), 1.0);
    }
}
