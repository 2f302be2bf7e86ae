//! Entry state of the calculator.
//!
//! The entry machine is modelled as an explicit tagged [`Phase`] rather than
//! a bag of nullable fields, so "an operator is pending only when a first
//! operand is held" holds by construction.

use super::operator::Operator;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. States are immutable values describing the current
/// position in a state machine.
pub trait State: Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> {
    /// Name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a terminal state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

/// Position of the entry machine.
///
/// ```text
/// FirstOperand --op--> OperatorPending --digit--> SecondOperand --=--> Result
///                          ^   |op (replace)          |op (evaluate)
///                          +---+----------------------+
/// ```
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum Phase {
    /// Typing the first operand.
    FirstOperand,
    /// Operator chosen, no digits typed since.
    OperatorPending { first: f64, operator: Operator },
    /// Typing the second operand.
    SecondOperand { first: f64, operator: Operator },
    /// Showing a result; the next digit starts a fresh number.
    Result,
}

impl State for Phase {
    fn name(&self) -> &str {
        match self {
            Self::FirstOperand => "FirstOperand",
            Self::OperatorPending { .. } => "OperatorPending",
            Self::SecondOperand { .. } => "SecondOperand",
            Self::Result => "Result",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Result)
    }
}

/// Display buffer plus entry phase.
///
/// Handlers never mutate a `CalculatorState` in place; they build the next
/// one.
///
/// # Example
///
/// ```rust
/// use calcflow::core::CalculatorState;
///
/// let state = CalculatorState::default();
/// assert_eq!(state.display, "0");
/// assert_eq!(state.first_operand(), None);
/// assert_eq!(state.operator(), None);
/// assert!(!state.waiting_for_second_operand());
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Raw display buffer: a complete or partial decimal numeral.
    pub display: String,
    /// Entry phase.
    pub phase: Phase,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            phase: Phase::FirstOperand,
        }
    }
}

impl CalculatorState {
    /// Build a state from its parts.
    pub fn new(display: impl Into<String>, phase: Phase) -> Self {
        Self {
            display: display.into(),
            phase,
        }
    }

    /// Same phase, different display buffer.
    pub fn with_display(&self, display: impl Into<String>) -> Self {
        Self::new(display, self.phase)
    }

    /// Value captured before the pending operator, if any.
    pub fn first_operand(&self) -> Option<f64> {
        match self.phase {
            Phase::OperatorPending { first, .. } | Phase::SecondOperand { first, .. } => {
                Some(first)
            }
            Phase::FirstOperand | Phase::Result => None,
        }
    }

    /// Pending operator, if any.
    pub fn operator(&self) -> Option<Operator> {
        match self.phase {
            Phase::OperatorPending { operator, .. } | Phase::SecondOperand { operator, .. } => {
                Some(operator)
            }
            Phase::FirstOperand | Phase::Result => None,
        }
    }

    /// Whether the next digit replaces the display instead of extending it.
    pub fn waiting_for_second_operand(&self) -> bool {
        matches!(self.phase, Phase::OperatorPending { .. } | Phase::Result)
    }
}
