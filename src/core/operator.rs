//! Binary operators understood by the calculator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four binary operators.
///
/// Each operator renders with the symbol shown on the keypad, which is also
/// the symbol written into history expressions.
///
/// # Example
///
/// ```rust
/// use calcflow::core::Operator;
///
/// assert_eq!(Operator::Multiply.symbol(), "×");
/// assert_eq!(Operator::from_symbol("÷"), Some(Operator::Divide));
/// assert_eq!(Operator::from_symbol("*"), Some(Operator::Multiply));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators in keypad order (top to bottom).
    pub const ALL: [Operator; 4] = [
        Operator::Divide,
        Operator::Multiply,
        Operator::Subtract,
        Operator::Add,
    ];

    /// Symbol used on the keypad and in history expressions.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Parse a keypad symbol or its ASCII keyboard spelling.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "×" | "*" => Some(Self::Multiply),
            "÷" | "/" => Some(Self::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_round_trip_through_from_symbol() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
    }

    #[test]
    fn ascii_spellings_are_accepted() {
        assert_eq!(Operator::from_symbol("*"), Some(Operator::Multiply));
        assert_eq!(Operator::from_symbol("/"), Some(Operator::Divide));
        assert_eq!(Operator::from_symbol("x"), None);
        assert_eq!(Operator::from_symbol(""), None);
    }

    #[test]
    fn display_uses_symbol() {
        assert_eq!(Operator::Subtract.to_string(), "-");
        assert_eq!(format!("{}", Operator::Divide), "÷");
    }
}
