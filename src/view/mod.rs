//! Root composition of the calculator UI.
//!
//! `CalculatorView` wires the calculator to the keypad and the keyboard hub
//! and produces plain render models; it holds no calculator logic itself.

mod calculator_view;
mod models;

pub use calculator_view::CalculatorView;
pub use models::{DisplayModel, EmptyState, HistoryPanelModel, HistoryRow, Screen};
