//! Single-step binary evaluation.
//!
//! Results are rounded to a fixed number of significant decimal digits so
//! that IEEE-754 noise (`0.1 + 0.2 == 0.30000000000000004`) never reaches the
//! display.

use super::operator::Operator;

/// Significant digits kept by [`calculate`].
pub const DEFAULT_SIGNIFICANT_DIGITS: usize = 15;

/// Enough significant digits to round-trip any `f64`.
pub const MAX_SIGNIFICANT_DIGITS: usize = 17;

/// Evaluate `first op second`, rounded to 15 significant digits.
///
/// Division by zero yields `0` instead of infinity.
///
/// # Example
///
/// ```rust
/// use calcflow::core::{calculate, Operator};
///
/// assert_eq!(calculate(0.1, 0.2, Operator::Add), 0.3);
/// assert_eq!(calculate(5.0, 0.0, Operator::Divide), 0.0);
/// ```
pub fn calculate(first: f64, second: f64, op: Operator) -> f64 {
    calculate_with_precision(first, second, op, DEFAULT_SIGNIFICANT_DIGITS)
}

/// Evaluate `first op second`, rounded to `digits` significant digits.
pub fn calculate_with_precision(first: f64, second: f64, op: Operator, digits: usize) -> f64 {
    let raw = match op {
        Operator::Add => first + second,
        Operator::Subtract => first - second,
        Operator::Multiply => first * second,
        Operator::Divide => {
            if second == 0.0 {
                return 0.0;
            }
            first / second
        }
    };
    round_significant(raw, digits)
}

/// Round `value` to `digits` significant decimal digits.
///
/// Non-finite values and zero pass through. `digits` is clamped to
/// `1..=MAX_SIGNIFICANT_DIGITS`.
pub fn round_significant(value: f64, digits: usize) -> f64 {
    if !value.is_finite() || value == 0.0 {
        return value;
    }
    let precision = digits.clamp(1, MAX_SIGNIFICANT_DIGITS) - 1;
    format!("{:.*e}", precision, value)
        .parse()
        .unwrap_or(value)
}
