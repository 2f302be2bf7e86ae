//! Calculator that applies entry transitions and records history.

use crate::config::CalculatorConfig;
use crate::core::numeral::to_numeral;
use crate::core::{CalculatorState, ChartPoint, DisplayFormat, History, HistoryItem, State};
use crate::error::ConfigError;
use crate::machine::command::Command;
use crate::machine::transitions::{self, Step};
use tracing::debug;

/// Calculator owning the entry state and the calculation history.
///
/// Every handler replaces the state wholesale with the value returned by the
/// matching pure transition; history is replaced the same way.
///
/// # Example
///
/// ```rust
/// use calcflow::core::Operator;
/// use calcflow::machine::{Calculator, Command};
///
/// let mut calculator = Calculator::new();
/// for command in [
///     Command::Digit(2),
///     Command::Operator(Operator::Add),
///     Command::Digit(3),
///     Command::Equals,
/// ] {
///     calculator.execute(command);
/// }
///
/// assert_eq!(calculator.state().display, "5");
/// assert_eq!(calculator.history().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Calculator {
    state: CalculatorState,
    history: History,
    config: CalculatorConfig,
    format: DisplayFormat,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create a calculator with the default configuration.
    pub fn new() -> Self {
        Self::from_valid(CalculatorConfig::default())
    }

    /// Create a calculator with a custom configuration.
    ///
    /// Fails with [`ConfigError::Invalid`] when a field is out of range.
    pub fn with_config(config: CalculatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: CalculatorConfig) -> Self {
        Self {
            state: CalculatorState::default(),
            history: History::new(),
            format: DisplayFormat::from(&config),
            config,
        }
    }

    /// Current entry state (pure)
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Calculation history, newest first (pure)
    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Run one command.
    pub fn execute(&mut self, command: Command) {
        let digits = self.config.significant_digits;
        let step = match command {
            Command::Digit(digit) => quiet(transitions::input_digit(&self.state, digit)),
            Command::Decimal => quiet(transitions::input_decimal(&self.state)),
            Command::Operator(op) => transitions::select_operator(&self.state, op, digits),
            Command::Equals => transitions::equals(&self.state, digits),
            Command::Clear => quiet(transitions::clear()),
            Command::ToggleSign => quiet(transitions::toggle_sign(&self.state)),
            Command::Percent => quiet(transitions::percent(&self.state)),
            Command::Backspace => quiet(transitions::backspace(&self.state)),
        };
        self.apply(command.name(), step);
    }

    /// Load a past result into the display, ready for reuse.
    ///
    /// Returns `false` when no history item has this id.
    pub fn recall(&mut self, id: &str) -> bool {
        let Some(result) = self.history.find(id).map(|item| item.result) else {
            return false;
        };
        self.apply("recall", quiet(transitions::recall(result)));
        true
    }

    /// Load the result of `item` into the display.
    pub fn recall_item(&mut self, item: &HistoryItem) {
        self.apply("recall", quiet(transitions::recall(item.result)));
    }

    /// Forget every history item. The entry state is untouched.
    pub fn clear_history(&mut self) {
        debug!(items = self.history.len(), "clearing history");
        self.history = self.history.cleared();
    }

    /// Formatted readout text.
    pub fn display_text(&self) -> String {
        self.format.format(&self.state.display)
    }

    /// Secondary readout line: `"<first> <op>"` while an operator is pending.
    pub fn expression_text(&self) -> String {
        match (self.state.first_operand(), self.state.operator()) {
            (Some(first), Some(op)) => format!("{} {}", to_numeral(first), op),
            _ => String::new(),
        }
    }

    /// Chart series over the configured window of recent results.
    pub fn chart(&self) -> Vec<ChartPoint> {
        self.history.chart(self.config.chart_window)
    }

    fn apply(&mut self, command: &str, step: Step) {
        if let Some(evaluation) = step.evaluation {
            let item = HistoryItem::new(
                evaluation.first,
                evaluation.second,
                evaluation.operator,
                evaluation.result,
            );
            debug!(expression = %item.expression, result = item.result, "recorded calculation");
            self.history = self.history.record(item);
        }
        log_transition(command, &self.state.phase, &step.state.phase);
        self.state = step.state;
    }
}

fn quiet(state: CalculatorState) -> Step {
    Step {
        state,
        evaluation: None,
    }
}

fn log_transition<S: State>(command: &str, from: &S, to: &S) {
    if from != to {
        debug!(command, from = from.name(), to = to.name(), "phase transition");
    }
}
