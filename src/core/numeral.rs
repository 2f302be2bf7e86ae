//! Conversions between display buffers and `f64` values.
//!
//! Numbers are stringified the way a calculator display expects: shortest
//! round-trip decimal in the everyday range, exponent notation with an
//! explicit sign (`1e+21`, `1.5e-7`) outside it, and never `-0`.

use tracing::warn;

/// Values at or above this magnitude are stringified in exponent form.
const EXPONENT_ABOVE: f64 = 1e21;

/// Non-zero values below this magnitude are stringified in exponent form.
const EXPONENT_BELOW: f64 = 1e-6;

/// Fraction digits kept by [`to_locale_string`].
const LOCALE_FRACTION_DIGITS: usize = 3;

/// Upper bound on requested fraction digits for [`to_fixed`] and
/// [`to_exponential`].
pub const MAX_FRACTION_DIGITS: usize = 100;

/// Parse a display buffer.
///
/// Accepts partial numerals such as `"5."` and `"-0.25"`.
pub fn parse_numeral(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}

/// Parse a display buffer as an operand, treating garbage as zero.
pub fn operand_value(raw: &str) -> f64 {
    parse_numeral(raw).unwrap_or_else(|| {
        warn!(buffer = raw, "display buffer is not a numeral, using 0");
        0.0
    })
}

/// Canonical text for a number.
///
/// # Example
///
/// ```rust
/// use calcflow::core::numeral::to_numeral;
///
/// assert_eq!(to_numeral(0.3), "0.3");
/// assert_eq!(to_numeral(-0.0), "0");
/// assert_eq!(to_numeral(1e21), "1e+21");
/// assert_eq!(to_numeral(1.5e-7), "1.5e-7");
/// ```
pub fn to_numeral(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if magnitude >= EXPONENT_ABOVE || magnitude < EXPONENT_BELOW {
        signed_exponent(format!("{:e}", value))
    } else {
        value.to_string()
    }
}

/// Exponent form with a fixed number of fraction digits (`1.234568e+13`).
///
/// `fraction_digits` is capped at [`MAX_FRACTION_DIGITS`]. Non-finite values
/// render as [`to_numeral`] does.
pub fn to_exponential(value: f64, fraction_digits: usize) -> String {
    if !value.is_finite() {
        return to_numeral(value);
    }
    let fraction_digits = fraction_digits.min(MAX_FRACTION_DIGITS);
    signed_exponent(format!("{:.*e}", fraction_digits, value))
}

/// Fixed-point form with exactly `fraction_digits` digits after the point.
///
/// `fraction_digits` is capped at [`MAX_FRACTION_DIGITS`].
pub fn to_fixed(value: f64, fraction_digits: usize) -> String {
    if !value.is_finite() || value.abs() >= EXPONENT_ABOVE {
        return to_numeral(value);
    }
    let value = if value == 0.0 { 0.0 } else { value };
    let fraction_digits = fraction_digits.min(MAX_FRACTION_DIGITS);
    format!("{:.*}", fraction_digits, value)
}

/// Number of characters after the leading `-?digits.` prefix of a buffer.
///
/// For plain decimals this is the count of fraction digits.
pub fn fraction_len(raw: &str) -> usize {
    let rest = raw.strip_prefix('-').unwrap_or(raw);
    let rest = rest.trim_start_matches(|c: char| c.is_ascii_digit());
    let rest = rest.strip_prefix('.').unwrap_or(rest);
    rest.chars().count()
}

/// Grouped rendering used by the history list (`1234.5678` → `1,234.568`).
pub fn to_locale_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }
    let fixed = format!("{:.*}", LOCALE_FRACTION_DIGITS, value);
    let (int_part, fraction) = match fixed.split_once('.') {
        Some((int_part, fraction)) => (int_part, fraction.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", int_part),
    };
    let sign = if digits.chars().all(|c| c == '0') && fraction.is_empty() {
        ""
    } else {
        sign
    };
    let grouped = group_thousands(digits);
    if fraction.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{fraction}")
    }
}

/// Insert `,` every three digits from the right of a digit run.
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn signed_exponent(text: String) -> String {
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}
