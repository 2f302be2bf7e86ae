//! On-screen button grid.
//!
//! ```text
//! [ AC ] [+/-] [ % ] [ ÷ ]
//! [ 7  ] [ 8 ] [ 9 ] [ × ]
//! [ 4  ] [ 5 ] [ 6 ] [ - ]
//! [ 1  ] [ 2 ] [ 3 ] [ + ]
//! [    0     ] [ . ] [ = ]
//! ```

use crate::core::Operator;
use crate::machine::Command;
use serde::Serialize;

/// Visual class of a button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ButtonVariant {
    /// Digits and the decimal point
    Default,
    /// Binary operators
    Operator,
    /// Clear, sign toggle, percent
    Action,
    /// Equals
    Featured,
}

/// A single keypad button.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Button {
    pub label: &'static str,
    pub command: Command,
    pub variant: ButtonVariant,
    /// Spans two grid columns
    pub double_width: bool,
}

impl Button {
    fn new(label: &'static str, command: Command, variant: ButtonVariant) -> Self {
        Self {
            label,
            command,
            variant,
            double_width: false,
        }
    }

    fn digit(digit: u8) -> Self {
        const LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        Self::new(
            LABELS[usize::from(digit % 10)],
            Command::Digit(digit % 10),
            ButtonVariant::Default,
        )
    }

    fn operator(op: Operator) -> Self {
        Self::new(op.symbol(), Command::Operator(op), ButtonVariant::Operator)
    }
}

/// The button grid, row by row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Keypad {
    rows: Vec<Vec<Button>>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::standard()
    }
}

impl Keypad {
    /// The four-column calculator layout.
    pub fn standard() -> Self {
        use ButtonVariant::{Action, Featured};

        let zero = Button {
            double_width: true,
            ..Button::digit(0)
        };
        let rows = vec![
            vec![
                Button::new("AC", Command::Clear, Action),
                Button::new("+/-", Command::ToggleSign, Action),
                Button::new("%", Command::Percent, Action),
                Button::operator(Operator::Divide),
            ],
            vec![
                Button::digit(7),
                Button::digit(8),
                Button::digit(9),
                Button::operator(Operator::Multiply),
            ],
            vec![
                Button::digit(4),
                Button::digit(5),
                Button::digit(6),
                Button::operator(Operator::Subtract),
            ],
            vec![
                Button::digit(1),
                Button::digit(2),
                Button::digit(3),
                Button::operator(Operator::Add),
            ],
            vec![
                zero,
                Button::new(".", Command::Decimal, ButtonVariant::Default),
                Button::new("=", Command::Equals, Featured),
            ],
        ];
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<Button>] {
        &self.rows
    }

    /// All buttons in reading order.
    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.rows.iter().flatten()
    }

    /// Find the button with this label.
    pub fn button(&self, label: &str) -> Option<&Button> {
        self.buttons().find(|button| button.label == label)
    }

    /// Command triggered by clicking the button with this label.
    pub fn press(&self, label: &str) -> Option<Command> {
        self.button(label).map(|button| button.command)
    }

    pub fn len(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
