//! Core calculator types and logic.
//!
//! This module contains the pure core of the calculator:
//! - Operators and single-step evaluation
//! - Numeral parsing, stringification and display formatting
//! - The explicit entry phase via the `State` trait
//! - Immutable calculation history and its chart series
//!
//! Nothing in this module performs I/O or holds mutable state.

mod arithmetic;
mod format;
mod history;
pub mod numeral;
mod operator;
mod state;

pub use arithmetic::{
    calculate, calculate_with_precision, round_significant, DEFAULT_SIGNIFICANT_DIGITS,
    MAX_SIGNIFICANT_DIGITS,
};
pub use format::{format_display, DisplayFormat, ERROR_TEXT};
pub use history::{BarTone, ChartPoint, History, HistoryItem};
pub use operator::Operator;
pub use state::{CalculatorState, Phase, State};
