//! Input surfaces: the on-screen keypad and the keyboard.
//!
//! Both resolve user actions to the same [`Command`](crate::machine::Command)
//! set consumed by the calculator.

mod keyboard;
mod keypad;

pub use keyboard::{command_for_key, KeyEvent, KeyboardHub, ListenerGuard, ListenerId};
pub use keypad::{Button, ButtonVariant, Keypad};
