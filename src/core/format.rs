//! Display formatting for the main calculator readout.
//!
//! Formatting is pure: it takes the raw display buffer and returns what the
//! readout shows. Buffers that are mid-entry or not numerals pass through.

use super::numeral::{group_thousands, parse_numeral, to_exponential};
use crate::config::CalculatorConfig;

/// Readout text for the error state.
pub const ERROR_TEXT: &str = "Error";

/// Thresholds and precision for the readout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayFormat {
    /// Magnitudes strictly above this use exponent form.
    pub exponential_upper: f64,
    /// Non-zero magnitudes strictly below this use exponent form.
    pub exponential_lower: f64,
    /// Fraction digits of the exponent form mantissa.
    pub exponential_digits: usize,
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self {
            exponential_upper: 1e12,
            exponential_lower: 1e-7,
            exponential_digits: 6,
        }
    }
}

impl From<&CalculatorConfig> for DisplayFormat {
    fn from(config: &CalculatorConfig) -> Self {
        Self {
            exponential_upper: config.exponential_upper,
            exponential_lower: config.exponential_lower,
            exponential_digits: config.exponential_digits,
        }
    }
}

impl DisplayFormat {
    /// Format a raw display buffer.
    ///
    /// # Example
    ///
    /// ```rust
    /// use calcflow::core::DisplayFormat;
    ///
    /// let format = DisplayFormat::default();
    /// assert_eq!(format.format("1234567.891"), "1,234,567.891");
    /// assert_eq!(format.format("12."), "12.");
    /// assert_eq!(format.format("2000000000000"), "2.000000e+12");
    /// ```
    pub fn format(&self, raw: &str) -> String {
        if raw == ERROR_TEXT || raw.ends_with('.') {
            return raw.to_string();
        }
        let Some(value) = parse_numeral(raw) else {
            return raw.to_string();
        };

        let magnitude = value.abs();
        if magnitude > self.exponential_upper
            || (magnitude < self.exponential_lower && magnitude > 0.0)
        {
            return to_exponential(value, self.exponential_digits);
        }

        match raw.split_once('.') {
            Some((int_part, fraction)) => format!("{}.{}", group_integer(int_part), fraction),
            None => group_integer(raw),
        }
    }
}

/// Format a raw display buffer with the default thresholds.
pub fn format_display(raw: &str) -> String {
    DisplayFormat::default().format(raw)
}

fn group_integer(int_part: &str) -> String {
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", int_part),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return int_part.to_string();
    }
    format!("{sign}{}", group_thousands(digits))
}
