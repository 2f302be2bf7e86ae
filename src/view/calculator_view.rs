//! Root composition: calculator, keypad, keyboard and history panel.

use crate::config::CalculatorConfig;
use crate::core::CalculatorState;
use crate::error::ConfigError;
use crate::input::{command_for_key, KeyboardHub, Keypad, ListenerGuard};
use crate::machine::{Calculator, Command};
use crate::view::models::{DisplayModel, HistoryPanelModel, Screen};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, trace};

/// A mounted calculator.
///
/// Mounting subscribes to the keyboard hub; dropping the view releases the
/// subscription.
///
/// # Example
///
/// ```rust
/// use calcflow::input::{KeyEvent, KeyboardHub};
/// use calcflow::view::CalculatorView;
/// use calcflow::CalculatorConfig;
///
/// let hub = KeyboardHub::new();
/// let mut view = CalculatorView::mount(&hub, CalculatorConfig::default())?;
///
/// view.click("7");
/// hub.dispatch(&KeyEvent::new("*"));
/// view.click("6");
/// hub.dispatch(&KeyEvent::new("Enter"));
///
/// assert_eq!(view.render().display.value, "42");
///
/// drop(view);
/// assert_eq!(hub.listener_count(), 0);
/// # Ok::<(), calcflow::ConfigError>(())
/// ```
pub struct CalculatorView {
    calculator: Rc<RefCell<Calculator>>,
    keypad: Keypad,
    history_open: bool,
    _keyboard: ListenerGuard,
}

impl CalculatorView {
    /// Create a calculator and subscribe it to `hub`.
    ///
    /// Nothing is registered when `config` is invalid.
    pub fn mount(hub: &Rc<KeyboardHub>, config: CalculatorConfig) -> Result<Self, ConfigError> {
        let calculator = Rc::new(RefCell::new(Calculator::with_config(config)?));
        let keyboard = {
            let calculator = Rc::clone(&calculator);
            hub.listen(move |event| match command_for_key(&event.key) {
                Some(command) => {
                    calculator.borrow_mut().execute(command);
                    true
                }
                None => false,
            })
        };
        debug!(listener = keyboard.id(), "calculator view mounted");
        Ok(Self {
            calculator,
            keypad: Keypad::standard(),
            history_open: false,
            _keyboard: keyboard,
        })
    }

    /// Click the keypad button with this label.
    ///
    /// Returns `false` for unknown labels.
    pub fn click(&self, label: &str) -> bool {
        match self.keypad.press(label) {
            Some(command) => {
                trace!(label, "keypad click");
                self.execute(command);
                true
            }
            None => false,
        }
    }

    /// Run a command directly.
    pub fn execute(&self, command: Command) {
        self.calculator.borrow_mut().execute(command);
    }

    /// Recall a history item into the display and close the history panel.
    pub fn select_history(&mut self, id: &str) -> bool {
        let recalled = self.calculator.borrow_mut().recall(id);
        if recalled {
            self.history_open = false;
        }
        recalled
    }

    pub fn clear_history(&self) {
        self.calculator.borrow_mut().clear_history();
    }

    /// Show or hide the history panel on compact layouts.
    pub fn toggle_history(&mut self) {
        self.history_open = !self.history_open;
    }

    pub fn history_open(&self) -> bool {
        self.history_open
    }

    /// Snapshot of the entry state.
    pub fn state(&self) -> CalculatorState {
        self.calculator.borrow().state().clone()
    }

    /// Build the render models for the current frame.
    pub fn render(&self) -> Screen {
        let calculator = self.calculator.borrow();
        Screen {
            display: DisplayModel {
                value: calculator.display_text(),
                expression: calculator.expression_text(),
            },
            keypad: self.keypad.clone(),
            history: HistoryPanelModel::build(
                calculator.history(),
                calculator.config().chart_window,
            ),
            history_open: self.history_open,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyEvent;

    fn mounted() -> (Rc<KeyboardHub>, CalculatorView) {
        let hub = KeyboardHub::new();
        let view = CalculatorView::mount(&hub, CalculatorConfig::default()).unwrap();
        (hub, view)
    }

    #[test]
    fn mount_registers_one_listener() {
        let (hub, view) = mounted();
        assert_eq!(hub.listener_count(), 1);
        drop(view);
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn keyboard_and_keypad_drive_the_same_calculator() {
        let (hub, view) = mounted();
        assert!(view.click("1"));
        assert!(hub.dispatch(&KeyEvent::new("2")));
        assert!(view.click("+"));
        assert!(hub.dispatch(&KeyEvent::new("8")));
        assert!(view.click("="));

        let screen = view.render();
        assert_eq!(screen.display.value, "20");
        assert_eq!(screen.history.rows.len(), 1);
        assert_eq!(screen.history.rows[0].expression, "12 + 8 =");
    }

    #[test]
    fn unmapped_keys_are_not_consumed() {
        let (hub, view) = mounted();
        assert!(!hub.dispatch(&KeyEvent::new("Shift")));
        assert_eq!(view.state(), CalculatorState::default());
    }

    #[test]
    fn unknown_label_is_ignored() {
        let (_hub, view) = mounted();
        assert!(!view.click("sqrt"));
    }

    #[test]
    fn expression_line_shows_pending_operation() {
        let (_hub, view) = mounted();
        view.click("9");
        view.click("÷");
        assert_eq!(view.render().display.expression, "9 ÷");
        view.click("3");
        view.click("=");
        assert_eq!(view.render().display.expression, "");
    }

    #[test]
    fn selecting_history_recalls_and_closes_panel() {
        let (_hub, mut view) = mounted();
        for label in ["4", "×", "5", "=", "AC"] {
            view.click(label);
        }
        view.toggle_history();
        assert!(view.history_open());

        let id = view.render().history.rows[0].id.clone();
        assert!(view.select_history(&id));
        assert!(!view.history_open());
        assert_eq!(view.state().display, "20");
        assert!(view.state().waiting_for_second_operand());
    }

    #[test]
    fn selecting_unknown_history_keeps_panel_open() {
        let (_hub, mut view) = mounted();
        view.toggle_history();
        assert!(!view.select_history("missing"));
        assert!(view.history_open());
    }

    #[test]
    fn clearing_history_leaves_display() {
        let (_hub, view) = mounted();
        for label in ["3", "-", "5", "="] {
            view.click(label);
        }
        view.clear_history();
        let screen = view.render();
        assert_eq!(screen.display.value, "-2");
        assert!(screen.history.rows.is_empty());
        assert!(!screen.history.can_clear);
    }

    #[test]
    fn two_views_on_one_hub_both_receive_keys() {
        let hub = KeyboardHub::new();
        let first = CalculatorView::mount(&hub, CalculatorConfig::default()).unwrap();
        let second = CalculatorView::mount(&hub, CalculatorConfig::default()).unwrap();
        hub.dispatch(&KeyEvent::new("5"));
        assert_eq!(first.state().display, "5");
        assert_eq!(second.state().display, "5");

        drop(first);
        hub.dispatch(&KeyEvent::new("6"));
        assert_eq!(second.state().display, "56");
        assert_eq!(hub.listener_count(), 1);
    }

    #[test]
    fn invalid_config_mounts_nothing() {
        let hub = KeyboardHub::new();
        let config = CalculatorConfig {
            exponential_digits: 70_000,
            ..CalculatorConfig::default()
        };
        let result = CalculatorView::mount(&hub, config);
        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                field: "exponential_digits",
                ..
            })
        ));
        assert_eq!(hub.listener_count(), 0);
    }
}
