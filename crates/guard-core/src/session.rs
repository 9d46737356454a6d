//! Session state holder
//!
//! One boolean login flag shared by every component that holds a clone of
//! [`Session`]. Writes notify subscribers synchronously; nothing is persisted,
//! so a new `Session` always starts logged out.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use tracing::debug;

/// Read/write access to the login flag
///
/// Implemented by the headless [`Session`] and by the browser's signal-backed context.
pub trait SessionFlag {
    fn is_login(&self) -> bool;

    fn set_login(&self, value: bool);

    fn toggle(&self) {
        self.set_login(!self.is_login());
    }
}

/// Handle returned by [`Session::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(bool)>;

#[derive(Default)]
struct Inner {
    is_login: Cell<bool>,
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
}

/// Shared login flag; clones point at the same state
#[derive(Clone, Default)]
pub struct Session {
    inner: Rc<Inner>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener called with the new value after every change
    pub fn subscribe(&self, listener: impl Fn(bool) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        self.inner.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Returns false if the id was not subscribed
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.inner.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    fn notify(&self, value: bool) {
        // Snapshot so listeners may subscribe/unsubscribe while being called
        let listeners: Vec<Listener> = self.inner.listeners.borrow().iter().map(|(_, l)| Rc::clone(l)).collect();
        for listener in listeners {
            listener(value);
        }
    }
}

impl SessionFlag for Session {
    fn is_login(&self) -> bool {
        self.inner.is_login.get()
    }

    fn set_login(&self, value: bool) {
        let previous = self.inner.is_login.replace(value);
        if previous == value {
            return;
        }
        debug!(is_login = value, "session flag changed");
        self.notify(value);
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("is_login", &self.is_login())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_logged_out() {
        assert!(!Session::new().is_login());
    }

    #[test]
    fn test_toggle_twice_restores() {
        let session = Session::new();
        session.toggle();
        assert!(session.is_login());
        session.toggle();
        assert!(!session.is_login());
    }

    #[test]
    fn test_clones_share_state() {
        let session = Session::new();
        let reader = session.clone();
        session.set_login(true);
        assert!(reader.is_login());
    }

    #[test]
    fn test_notifies_only_on_change() {
        let session = Session::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        session.subscribe(move |value| sink.borrow_mut().push(value));

        session.set_login(true);
        session.set_login(true);
        session.set_login(false);

        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn test_unsubscribe() {
        let session = Session::new();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let id = session.subscribe(move |_| counter.set(counter.get() + 1));

        session.toggle();
        assert!(session.unsubscribe(id));
        assert!(!session.unsubscribe(id));
        session.toggle();

        assert_eq!(calls.get(), 1);
        assert_eq!(session.subscriber_count(), 0);
    }

    #[test]
    fn test_listener_can_unsubscribe_itself() {
        let session = Session::new();
        let slot: Rc<Cell<Option<SubscriptionId>>> = Rc::new(Cell::new(None));
        let handle = session.clone();
        let own_id = Rc::clone(&slot);
        let id = session.subscribe(move |_| {
            if let Some(id) = own_id.get() {
                handle.unsubscribe(id);
            }
        });
        slot.set(Some(id));

        session.toggle();
        assert_eq!(session.subscriber_count(), 0);
    }
}
