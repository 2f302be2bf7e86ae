//! Calculator configuration.

use crate::core::{DEFAULT_SIGNIFICANT_DIGITS, MAX_SIGNIFICANT_DIGITS};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Tunables for evaluation, display and the history chart.
///
/// Missing fields take their defaults, so `{}` is a valid configuration.
///
/// # Example
///
/// ```rust
/// use calcflow::CalculatorConfig;
///
/// let config = CalculatorConfig::from_json_str(r#"{ "chart_window": 5 }"#).unwrap();
/// assert_eq!(config.chart_window, 5);
/// assert_eq!(config.significant_digits, 15);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Significant digits kept in every result (1..=17)
    pub significant_digits: usize,
    /// Number of recent results plotted in the history chart
    pub chart_window: usize,
    /// Readout switches to exponent form above this magnitude
    pub exponential_upper: f64,
    /// Readout switches to exponent form below this non-zero magnitude
    pub exponential_lower: f64,
    /// Mantissa fraction digits of the exponent form (0..=20)
    pub exponential_digits: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            significant_digits: DEFAULT_SIGNIFICANT_DIGITS,
            chart_window: 10,
            exponential_upper: 1e12,
            exponential_lower: 1e-7,
            exponential_digits: 6,
        }
    }
}

impl CalculatorConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json_str(&text)?;
        debug!(path = %path.display(), ?config, "loaded calculator config");
        Ok(config)
    }

    /// Check every field is within range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_SIGNIFICANT_DIGITS).contains(&self.significant_digits) {
            return Err(ConfigError::Invalid {
                field: "significant_digits",
                reason: format!(
                    "{} is outside 1..={MAX_SIGNIFICANT_DIGITS}",
                    self.significant_digits
                ),
            });
        }
        if self.chart_window == 0 {
            return Err(ConfigError::Invalid {
                field: "chart_window",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.exponential_digits > 20 {
            return Err(ConfigError::Invalid {
                field: "exponential_digits",
                reason: format!("{} is above 20", self.exponential_digits),
            });
        }
        if !(self.exponential_lower >= 0.0 && self.exponential_lower < self.exponential_upper) {
            return Err(ConfigError::Invalid {
                field: "exponential_lower",
                reason: format!(
                    "{} must be non-negative and below exponential_upper ({})",
                    self.exponential_lower, self.exponential_upper
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(CalculatorConfig::default().validate().is_ok());
    }

    #[test]
    fn empty_object_uses_defaults() {
        let config = CalculatorConfig::from_json_str("{}").unwrap();
        assert_eq!(config, CalculatorConfig::default());
    }

    #[test]
    fn partial_object_overrides_fields() {
        let json = r#"{ "significant_digits": 10, "exponential_digits": 3 }"#;
        let config = CalculatorConfig::from_json_str(json).unwrap();
        assert_eq!(config.significant_digits, 10);
        assert_eq!(config.exponential_digits, 3);
        assert_eq!(config.chart_window, 10);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let result = CalculatorConfig::from_json_str("{ chart_window: ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn out_of_range_fields_are_rejected() {
        let result = CalculatorConfig::from_json_str(r#"{ "significant_digits": 0 }"#);
        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                field: "significant_digits",
                ..
            })
        ));

        let result = CalculatorConfig::from_json_str(r#"{ "chart_window": 0 }"#);
        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                field: "chart_window",
                ..
            })
        ));

        let json = r#"{ "exponential_lower": 5.0, "exponential_upper": 1.0 }"#;
        let result = CalculatorConfig::from_json_str(json);
        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                field: "exponential_lower",
                ..
            })
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = CalculatorConfig::from_path("/nonexistent/calcflow.json");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn config_file_round_trip() {
        let name = format!("calcflow-config-{}.json", std::process::id());
        let path = std::env::temp_dir().join(name);
        let config = CalculatorConfig {
            chart_window: 4,
            ..CalculatorConfig::default()
        };
        std::fs::write(&path, serde_json::to_string(&config).unwrap()).unwrap();

        let loaded = CalculatorConfig::from_path(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, config);
    }
}
