//! Keyboard input.
//!
//! Key names follow the DOM `KeyboardEvent.key` convention (`"7"`, `"Enter"`,
//! `"Escape"`). A [`KeyboardHub`] is the process-wide event source; views
//! subscribe with [`KeyboardHub::listen`] and stay subscribed for as long as
//! they hold the returned [`ListenerGuard`].

use crate::core::Operator;
use crate::machine::Command;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use tracing::trace;

/// A key press.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: String,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// Map a key name to a calculator command.
///
/// # Example
///
/// ```rust
/// use calcflow::core::Operator;
/// use calcflow::input::command_for_key;
/// use calcflow::machine::Command;
///
/// assert_eq!(command_for_key("7"), Some(Command::Digit(7)));
/// assert_eq!(command_for_key("*"), Some(Command::Operator(Operator::Multiply)));
/// assert_eq!(command_for_key("Escape"), Some(Command::Clear));
/// assert_eq!(command_for_key("Tab"), None);
/// ```
pub fn command_for_key(key: &str) -> Option<Command> {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if let Some(digit) = c.to_digit(10) {
            return u8::try_from(digit).ok().map(Command::Digit);
        }
    }
    match key {
        "." => Some(Command::Decimal),
        "+" => Some(Command::Operator(Operator::Add)),
        "-" => Some(Command::Operator(Operator::Subtract)),
        "*" => Some(Command::Operator(Operator::Multiply)),
        "/" => Some(Command::Operator(Operator::Divide)),
        "Enter" | "=" => Some(Command::Equals),
        "Backspace" => Some(Command::Backspace),
        "Escape" | "c" | "C" => Some(Command::Clear),
        _ => None,
    }
}

/// Identifier of a registered listener.
pub type ListenerId = u64;

type Handler = Box<dyn FnMut(&KeyEvent) -> bool>;

/// Process-wide source of key events.
///
/// Listeners run in registration order. Handlers may call back into the hub:
///
/// - dropping a [`ListenerGuard`] takes effect once the current dispatch
///   finishes;
/// - [`listen`](Self::listen) registers a listener that first sees the next
///   event;
/// - a nested [`dispatch`](Self::dispatch) is ignored and returns `false`;
/// - [`listener_count`](Self::listener_count) already reflects deferred
///   changes.
#[derive(Default)]
pub struct KeyboardHub {
    listeners: RefCell<Vec<(ListenerId, Handler)>>,
    pending_additions: RefCell<Vec<(ListenerId, Handler)>>,
    pending_removals: RefCell<Vec<ListenerId>>,
    live: Cell<usize>,
    next_id: Cell<ListenerId>,
}

impl KeyboardHub {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Register a handler. It returns `true` when it consumed the event.
    ///
    /// The handler stays registered until the guard is dropped.
    pub fn listen<F>(self: &Rc<Self>, handler: F) -> ListenerGuard
    where
        F: FnMut(&KeyEvent) -> bool + 'static,
    {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let entry: (ListenerId, Handler) = (id, Box::new(handler));
        match self.listeners.try_borrow_mut() {
            Ok(mut listeners) => listeners.push(entry),
            Err(_) => self.pending_additions.borrow_mut().push(entry),
        }
        self.live.set(self.live.get() + 1);
        trace!(listener = id, "keyboard listener registered");
        ListenerGuard {
            hub: Rc::downgrade(self),
            id,
        }
    }

    /// Deliver an event to every listener.
    ///
    /// Returns `true` if any listener consumed it, meaning the host should
    /// suppress its default handling.
    pub fn dispatch(&self, event: &KeyEvent) -> bool {
        let mut consumed = false;
        {
            let Ok(mut listeners) = self.listeners.try_borrow_mut() else {
                trace!(key = %event.key, "nested dispatch ignored");
                return false;
            };
            for (_, handler) in listeners.iter_mut() {
                consumed |= handler(event);
            }
        }
        self.flush_pending();
        trace!(key = %event.key, consumed, "key dispatched");
        consumed
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.live.get()
    }

    fn flush_pending(&self) {
        let additions: Vec<(ListenerId, Handler)> =
            self.pending_additions.borrow_mut().drain(..).collect();
        self.listeners.borrow_mut().extend(additions);
        let removals: Vec<ListenerId> = self.pending_removals.borrow_mut().drain(..).collect();
        for id in removals {
            self.remove(id);
        }
    }

    fn remove(&self, id: ListenerId) {
        match self.listeners.try_borrow_mut() {
            Ok(mut listeners) => {
                listeners.retain(|(listener, _)| *listener != id);
                trace!(listener = id, "keyboard listener released");
            }
            Err(_) => self.pending_removals.borrow_mut().push(id),
        }
    }
}

/// Keeps a listener registered; unregisters it on drop.
#[must_use = "the listener is removed as soon as the guard is dropped"]
pub struct ListenerGuard {
    hub: Weak<KeyboardHub>,
    id: ListenerId,
}

impl ListenerGuard {
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(hub) = self.hub.upgrade() {
            hub.live.set(hub.live.get().saturating_sub(1));
            hub.remove(self.id);
        }
    }
}
