//! Descriptive statistics over throughput series.
//!
//! The percentile uses linear interpolation between order statistics.
//! Existing capacity datasets were produced with that exact definition,
//! and reports must keep matching them digit-for-digit, so the
//! interpolation must not be replaced with a nearest-rank variant.

/// Arithmetic mean. Returns `0.0` for an empty slice.
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Largest sample. Returns `0.0` for an empty slice.
///
/// Throughput is non-negative, so folding against `0.0` yields the
/// series maximum.
pub fn peak(samples: &[f64]) -> f64 {
    samples.iter().copied().fold(0.0_f64, f64::max)
}

/// 95th percentile via linear interpolation on the sorted values.
pub fn p95(samples: &[f64]) -> f64 {
    quantile(samples, 0.95)
}

/// Quantile `q` in `[0, 1]` with linear interpolation between order
/// statistics. Returns `0.0` for an empty slice.
pub fn quantile(samples: &[f64], q: f64) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let mut sorted: Vec<f64> = samples.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let rank = (sorted.len() - 1) as f64 * q;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let frac = rank - lower as f64;

    sorted[lower] + frac * (sorted[upper] - sorted[lower])
}

/// Round to 4 decimal places, the precision of every report field.
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
