//! Planner configuration.
//!
//! Follows the input/resolve split used across the platform: a raw
//! `PlannerConfigInput` is deserialized from TOML with every field
//! optional, then `resolve()` fills defaults and range-checks the values
//! into a [`PlannerConfig`] the planning core can trust.

use serde::Deserialize;
use thiserror::Error;

/// Errors from loading or validating planner configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{field} out of range: {reason}")]
    OutOfRange {
        field: &'static str,
        reason: String,
    },
}

/// Raw planner configuration as parsed from TOML.
///
/// Missing fields fall back to defaults on resolve.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlannerConfigInput {
    pub buffer_duration_s: Option<f64>,
    pub max_loss_frac: Option<f64>,
    pub tol: Option<f64>,
    pub max_iters: Option<u32>,
}

/// Validated planner configuration, immutable for the lifetime of a
/// computation.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    /// Seconds of burst traffic a link buffer can absorb above nominal
    /// capacity before declaring loss.
    pub buffer_duration_s: f64,
    /// Maximum tolerated fraction of slots with an overflow event.
    pub max_loss_frac: f64,
    /// Bisection termination tolerance, Gbps.
    pub tol: f64,
    /// Bisection iteration cap.
    pub max_iters: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            buffer_duration_s: 0.05,
            max_loss_frac: 0.001,
            tol: 1e-6,
            max_iters: 60,
        }
    }
}

impl PlannerConfigInput {
    pub fn resolve(self) -> Result<PlannerConfig, ConfigError> {
        let defaults = PlannerConfig::default();

        let buffer_duration_s = self.buffer_duration_s.unwrap_or(defaults.buffer_duration_s);
        if !(buffer_duration_s > 0.0 && buffer_duration_s.is_finite()) {
            return Err(ConfigError::OutOfRange {
                field: "buffer_duration_s",
                reason: format!("must be a positive finite number, got {buffer_duration_s}"),
            });
        }

        let max_loss_frac = self.max_loss_frac.unwrap_or(defaults.max_loss_frac);
        if !(0.0..=1.0).contains(&max_loss_frac) {
            return Err(ConfigError::OutOfRange {
                field: "max_loss_frac",
                reason: format!("must be within [0, 1], got {max_loss_frac}"),
            });
        }

        let tol = self.tol.unwrap_or(defaults.tol);
        if !(tol > 0.0 && tol.is_finite()) {
            return Err(ConfigError::OutOfRange {
                field: "tol",
                reason: format!("must be a positive finite number, got {tol}"),
            });
        }

        let max_iters = self.max_iters.unwrap_or(defaults.max_iters);
        if max_iters == 0 {
            return Err(ConfigError::OutOfRange {
                field: "max_iters",
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(PlannerConfig {
            buffer_duration_s,
            max_loss_frac,
            tol,
            max_iters,
        })
    }
}

impl PlannerConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        if input.trim().is_empty() {
            return Ok(PlannerConfig::default());
        }
        let parsed: PlannerConfigInput = toml::from_str(input)?;
        parsed.resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_resolves_to_defaults() {
        let cfg = PlannerConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, PlannerConfig::default());
        assert!((cfg.buffer_duration_s - 0.05).abs() < 1e-12);
        assert!((cfg.max_loss_frac - 0.001).abs() < 1e-12);
    }

    #[test]
    fn partial_toml_keeps_remaining_defaults() {
        let cfg = PlannerConfig::from_toml_str("max_loss_frac = 0.01").unwrap();
        assert!((cfg.max_loss_frac - 0.01).abs() < 1e-12);
        assert!((cfg.buffer_duration_s - 0.05).abs() < 1e-12);
        assert_eq!(cfg.max_iters, 60);
    }

    #[test]
    fn rejects_non_positive_buffer_duration() {
        let err = PlannerConfig::from_toml_str("buffer_duration_s = 0.0").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::OutOfRange {
                field: "buffer_duration_s",
                ..
            }
        ));
    }

    #[test]
    fn rejects_loss_fraction_above_one() {
        let err = PlannerConfig::from_toml_str("max_loss_frac = 1.5").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::OutOfRange {
                field: "max_loss_frac",
                ..
            }
        ));
    }

    #[test]
    fn rejects_zero_iterations() {
        let err = PlannerConfig::from_toml_str("max_iters = 0").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::OutOfRange {
                field: "max_iters",
                ..
            }
        ));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = PlannerConfig::from_toml_str("buffer_duration_s = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
