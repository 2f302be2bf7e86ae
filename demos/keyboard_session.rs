//! Keyboard Session
//!
//! Drives a mounted calculator with keyboard events and keypad clicks, then
//! prints the readout and the history panel.
//!
//! Run with: RUST_LOG=calcflow=debug cargo run --example keyboard_session

use calcflow::input::{KeyEvent, KeyboardHub};
use calcflow::view::CalculatorView;
use calcflow::{CalculatorConfig, ConfigError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ConfigError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    println!("=== Keyboard Session Example ===\n");

    let hub = KeyboardHub::new();
    let mut view = CalculatorView::mount(&hub, CalculatorConfig::default())?;

    for key in ["1", "2", "5", "0", "*", "8", "+", "0", ".", "1", "Enter"] {
        let consumed = hub.dispatch(&KeyEvent::new(key));
        println!("key {key:>6} consumed={consumed}");
    }
    for label in ["÷", "4", "="] {
        view.click(label);
    }

    let screen = view.render();
    println!("\nDisplay: {}", screen.display.value);
    println!("History:");
    for row in &screen.history.rows {
        println!("  {:<24} {}", row.expression, row.result_text);
    }
    println!("Chart (oldest first):");
    for point in &screen.history.chart {
        println!("  #{} {:>12} {:?}", point.index, point.value, point.tone);
    }

    if let Some(oldest) = screen.history.rows.last() {
        view.select_history(&oldest.id);
        println!("\nRecalled: {}", view.render().display.value);
    }

    drop(view);
    println!("Listeners after unmount: {}", hub.listener_count());

    println!("\n=== Example Complete ===");
    Ok(())
}
