//! CalcFlow: a four-function calculator core
//!
//! CalcFlow follows a "pure core, imperative shell" layout. The core
//! (evaluation, formatting, entry transitions, history) is made of pure
//! functions over immutable values, while a thin shell owns the current
//! state, listens to input and produces render models.
//!
//! # Core Concepts
//!
//! - **Evaluation**: single-step binary arithmetic rounded to 15 significant
//!   digits, with division by zero yielding `0`
//! - **Entry phases**: an explicit tagged state for digit entry, pending
//!   operators and results
//! - **History**: immutable, newest-first record of completed calculations
//!   and the chart series derived from it
//! - **Input**: keypad buttons and keyboard keys resolve to one `Command` set
//!
//! # Example
//!
//! ```rust
//! use calcflow::core::Operator;
//! use calcflow::machine::{Calculator, Command};
//!
//! let mut calculator = Calculator::new();
//! calculator.execute(Command::Digit(0));
//! calculator.execute(Command::Decimal);
//! calculator.execute(Command::Digit(1));
//! calculator.execute(Command::Operator(Operator::Add));
//! calculator.execute(Command::Digit(0));
//! calculator.execute(Command::Decimal);
//! calculator.execute(Command::Digit(2));
//! calculator.execute(Command::Equals);
//!
//! assert_eq!(calculator.display_text(), "0.3");
//! assert_eq!(calculator.history().items()[0].expression, "0.1 + 0.2 =");
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod input;
pub mod machine;
pub mod view;

// Re-export commonly used types
pub use config::CalculatorConfig;
pub use crate::core::{
    calculate, format_display, CalculatorState, History, HistoryItem, Operator, Phase,
};
pub use error::ConfigError;
pub use machine::{Calculator, Command};
pub use view::CalculatorView;
