//! End-to-end calculator sessions driven through the public API.

use calcflow::core::{Operator, Phase};
use calcflow::input::{KeyEvent, KeyboardHub};
use calcflow::machine::{Calculator, Command};
use calcflow::view::CalculatorView;
use calcflow::CalculatorConfig;

fn press(calculator: &mut Calculator, keys: &str) {
    for key in keys.split_whitespace() {
        let command = match key {
            "+" => Command::Operator(Operator::Add),
            "-" => Command::Operator(Operator::Subtract),
            "×" => Command::Operator(Operator::Multiply),
            "÷" => Command::Operator(Operator::Divide),
            "=" => Command::Equals,
            "." => Command::Decimal,
            "±" => Command::ToggleSign,
            "%" => Command::Percent,
            "⌫" => Command::Backspace,
            "AC" => Command::Clear,
            digits => {
                for c in digits.chars() {
                    match c {
                        '.' => calculator.execute(Command::Decimal),
                        _ => calculator.execute(Command::Digit(c.to_digit(10).unwrap() as u8)),
                    }
                }
                continue;
            }
        };
        calculator.execute(command);
    }
}

#[test]
fn chained_operations_evaluate_left_to_right() {
    let mut calculator = Calculator::new();
    press(&mut calculator, "2 + 3 + 4 =");

    assert_eq!(calculator.state().display, "9");
    let expressions: Vec<&str> = calculator
        .history()
        .items()
        .iter()
        .map(|item| item.expression.as_str())
        .collect();
    assert_eq!(expressions, vec!["5 + 4 =", "2 + 3 ="]);
}

#[test]
fn no_operator_precedence() {
    let mut calculator = Calculator::new();
    press(&mut calculator, "2 + 3 × 4 =");
    assert_eq!(calculator.state().display, "20");
}

#[test]
fn division_by_zero_shows_zero() {
    let mut calculator = Calculator::new();
    press(&mut calculator, "5 ÷ 0 =");

    assert_eq!(calculator.display_text(), "0");
    assert_eq!(calculator.history().len(), 1);
    let item = &calculator.history().items()[0];
    assert_eq!(item.expression, "5 ÷ 0 =");
    assert_eq!(item.result, 0.0);
}

#[test]
fn floating_point_noise_is_cleaned() {
    let mut calculator = Calculator::new();
    press(&mut calculator, "0.1 + 0.2 =");

    assert_eq!(calculator.state().display, "0.3");
    assert_eq!(calculator.history().items()[0].result, 0.3);
}

#[test]
fn leading_zero_rules() {
    let mut calculator = Calculator::new();
    press(&mut calculator, "0 7");
    assert_eq!(calculator.state().display, "7");

    let mut calculator = Calculator::new();
    press(&mut calculator, "0 .");
    assert_eq!(calculator.state().display, "0.");
}

#[test]
fn equals_without_pending_operator_changes_nothing() {
    let mut calculator = Calculator::new();
    press(&mut calculator, "12");
    let before = calculator.state().clone();
    press(&mut calculator, "=");
    assert_eq!(calculator.state(), &before);
    assert!(calculator.history().is_empty());
}

#[test]
fn result_is_reused_by_next_operator() {
    let mut calculator = Calculator::new();
    press(&mut calculator, "6 × 7 = - 2 =");
    assert_eq!(calculator.state().display, "40");
    assert_eq!(calculator.history().len(), 2);
}

#[test]
fn digit_after_result_starts_fresh() {
    let mut calculator = Calculator::new();
    press(&mut calculator, "6 × 7 = 5");
    assert_eq!(calculator.state().display, "5");
    assert_eq!(calculator.state().phase, Phase::FirstOperand);
}

#[test]
fn recalled_result_waits_for_new_input() {
    let mut calculator = Calculator::new();
    press(&mut calculator, "40 + 2 = AC");
    let item = calculator.history().items()[0].clone();

    calculator.recall_item(&item);

    let state = calculator.state();
    assert_eq!(state.display, "42");
    assert_eq!(state.operator(), None);
    assert_eq!(state.first_operand(), None);
    assert!(state.waiting_for_second_operand());
}

#[test]
fn clearing_history_keeps_display() {
    let mut calculator = Calculator::new();
    press(&mut calculator, "9 - 4 = 3");
    let before = calculator.state().clone();

    calculator.clear_history();

    assert!(calculator.history().is_empty());
    assert_eq!(calculator.state(), &before);
}

#[test]
fn sign_toggle_and_percent() {
    let mut calculator = Calculator::new();
    press(&mut calculator, "25 ± %");
    assert_eq!(calculator.state().display, "-0.25");

    press(&mut calculator, "× 4 =");
    assert_eq!(calculator.state().display, "-1");
}

#[test]
fn backspace_edits_current_entry_only() {
    let mut calculator = Calculator::new();
    press(&mut calculator, "123 ⌫");
    assert_eq!(calculator.state().display, "12");

    press(&mut calculator, "+ ⌫");
    assert_eq!(calculator.state().display, "12");

    press(&mut calculator, "7 ⌫ ⌫");
    assert_eq!(calculator.state().display, "0");
}

#[test]
fn large_results_switch_to_exponent_form() {
    let mut calculator = Calculator::new();
    press(&mut calculator, "1000000 × 10000000 =");
    assert_eq!(calculator.state().display, "10000000000000");
    assert_eq!(calculator.display_text(), "1.000000e+13");
}

#[test]
fn overflowing_results_read_as_infinity() {
    let mut calculator = Calculator::new();
    press(&mut calculator, "999999999");
    for _ in 0..12 {
        press(&mut calculator, "× =");
    }
    assert_eq!(calculator.state().display, "Infinity");
    assert_eq!(calculator.display_text(), "Infinity");
}

#[test]
fn keyboard_session_through_view() {
    let hub = KeyboardHub::new();
    let view = CalculatorView::mount(&hub, CalculatorConfig::default()).unwrap();

    for key in ["1", "2", "*", "3", "Enter"] {
        assert!(hub.dispatch(&KeyEvent::new(key)));
    }
    let screen = view.render();
    assert_eq!(screen.display.value, "36");
    assert_eq!(screen.history.chart.len(), 1);

    assert!(hub.dispatch(&KeyEvent::new("Escape")));
    assert_eq!(view.render().display.value, "0");
    assert_eq!(view.render().history.rows.len(), 1);

    drop(view);
    assert_eq!(hub.listener_count(), 0);
    assert!(!hub.dispatch(&KeyEvent::new("1")));
}
