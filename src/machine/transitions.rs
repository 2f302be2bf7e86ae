//! Pure entry transitions.
//!
//! Each function maps the current [`CalculatorState`] to the next one. The
//! two transitions that may evaluate (operator selection and equals) also
//! report the [`Evaluation`] so the caller can record it in history.

use crate::core::numeral::{fraction_len, operand_value, parse_numeral, to_fixed, to_numeral};
use crate::core::{calculate_with_precision, CalculatorState, Operator, Phase};

/// A completed `first op second = result` computation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Evaluation {
    pub first: f64,
    pub second: f64,
    pub operator: Operator,
    pub result: f64,
}

/// Next state plus the computation performed on the way, if any.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub state: CalculatorState,
    pub evaluation: Option<Evaluation>,
}

impl Step {
    fn quiet(state: CalculatorState) -> Self {
        Self {
            state,
            evaluation: None,
        }
    }
}

/// Phase entered when a waiting phase receives its first keystroke.
fn fresh_entry(phase: Phase) -> Phase {
    match phase {
        Phase::OperatorPending { first, operator } => Phase::SecondOperand { first, operator },
        Phase::Result => Phase::FirstOperand,
        typing => typing,
    }
}

/// Type a digit (0-9). Other values leave the state unchanged.
pub fn input_digit(state: &CalculatorState, digit: u8) -> CalculatorState {
    let Some(digit) = char::from_digit(u32::from(digit), 10) else {
        return state.clone();
    };
    if state.waiting_for_second_operand() {
        return CalculatorState::new(digit.to_string(), fresh_entry(state.phase));
    }
    if state.display == "0" {
        state.with_display(digit.to_string())
    } else {
        state.with_display(format!("{}{digit}", state.display))
    }
}

/// Type a decimal point. A second point in the same numeral is ignored.
pub fn input_decimal(state: &CalculatorState) -> CalculatorState {
    if state.waiting_for_second_operand() {
        return CalculatorState::new("0.", fresh_entry(state.phase));
    }
    if state.display.contains('.') {
        return state.clone();
    }
    state.with_display(format!("{}.", state.display))
}

/// Choose an operator.
///
/// With a second operand typed, the pending operation is evaluated first and
/// its result becomes the new first operand (left-to-right chaining). Right
/// after another operator, the pending operator is simply replaced.
pub fn select_operator(state: &CalculatorState, next: Operator, digits: usize) -> Step {
    match state.phase {
        Phase::FirstOperand | Phase::Result => Step::quiet(CalculatorState::new(
            state.display.clone(),
            Phase::OperatorPending {
                first: operand_value(&state.display),
                operator: next,
            },
        )),
        Phase::OperatorPending { first, .. } => Step::quiet(CalculatorState::new(
            state.display.clone(),
            Phase::OperatorPending {
                first,
                operator: next,
            },
        )),
        Phase::SecondOperand { first, operator } => {
            let evaluation = evaluate(first, &state.display, operator, digits);
            Step {
                state: CalculatorState::new(
                    to_numeral(evaluation.result),
                    Phase::OperatorPending {
                        first: evaluation.result,
                        operator: next,
                    },
                ),
                evaluation: Some(evaluation),
            }
        }
    }
}

/// Evaluate the pending operation. Without one this is a no-op.
pub fn equals(state: &CalculatorState, digits: usize) -> Step {
    match state.phase {
        Phase::OperatorPending { first, operator } | Phase::SecondOperand { first, operator } => {
            let evaluation = evaluate(first, &state.display, operator, digits);
            Step {
                state: CalculatorState::new(to_numeral(evaluation.result), Phase::Result),
                evaluation: Some(evaluation),
            }
        }
        Phase::FirstOperand | Phase::Result => Step::quiet(state.clone()),
    }
}

/// Reset to the initial state.
pub fn clear() -> CalculatorState {
    CalculatorState::default()
}

/// Negate the displayed value.
pub fn toggle_sign(state: &CalculatorState) -> CalculatorState {
    match parse_numeral(&state.display) {
        Some(value) => state.with_display(to_numeral(-value)),
        None => state.clone(),
    }
}

/// Divide the displayed value by 100.
///
/// The result keeps two more fraction digits than the buffer had, so
/// repeated presses do not lose precision. Zero is left alone.
pub fn percent(state: &CalculatorState) -> CalculatorState {
    match parse_numeral(&state.display) {
        Some(value) if value != 0.0 => {
            let digits = fraction_len(&state.display) + 2;
            state.with_display(to_fixed(value / 100.0, digits))
        }
        _ => state.clone(),
    }
}

/// Erase the last typed character.
///
/// Nothing is erased while waiting for a fresh number. A buffer that would
/// become empty or a bare `-` resets to `0`.
pub fn backspace(state: &CalculatorState) -> CalculatorState {
    if state.waiting_for_second_operand() {
        return state.clone();
    }
    let mut display = state.display.clone();
    display.pop();
    if display.is_empty() || display == "-" {
        display = "0".to_string();
    }
    state.with_display(display)
}

/// State showing a past result, ready to be reused as a first operand.
pub fn recall(result: f64) -> CalculatorState {
    CalculatorState::new(to_numeral(result), Phase::Result)
}

fn evaluate(first: f64, display: &str, operator: Operator, digits: usize) -> Evaluation {
    let second = operand_value(display);
    Evaluation {
        first,
        second,
        operator,
        result: calculate_with_precision(first, second, operator, digits),
    }
}
