//! The calculator state machine.
//!
//! This module is the shell around the pure core: `transitions` holds the
//! entry logic as pure functions over `CalculatorState`, and `Calculator`
//! owns the current state plus history and swaps in each new value.

mod calculator;
mod command;
pub mod transitions;

pub use calculator::Calculator;
pub use command::Command;
pub use transitions::{Evaluation, Step};
