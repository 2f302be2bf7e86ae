//! Commands shared by every input surface.

use crate::core::Operator;
use serde::{Deserialize, Serialize};

/// One entry action. Keypad buttons and keyboard keys both resolve to these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Type a digit (0-9)
    Digit(u8),
    /// Type a decimal point
    Decimal,
    /// Choose a binary operator
    Operator(Operator),
    /// Evaluate the pending operation
    Equals,
    /// Reset the entry state
    Clear,
    /// Negate the displayed value
    ToggleSign,
    /// Divide the displayed value by 100
    Percent,
    /// Erase the last typed character
    Backspace,
}

impl Command {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Digit(_) => "digit",
            Self::Decimal => "decimal",
            Self::Operator(_) => "operator",
            Self::Equals => "equals",
            Self::Clear => "clear",
            Self::ToggleSign => "toggle_sign",
            Self::Percent => "percent",
            Self::Backspace => "backspace",
        }
    }
}
