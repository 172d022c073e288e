//! Escape-key listener registry
//!
//! The host forwards every document-level Escape press to
//! [`EscapeListeners::dispatch`]. Only the most recently subscribed live
//! listener receives it, and it receives it exactly once.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Identifier of one subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Callback = Rc<dyn Fn()>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    entries: Vec<(ListenerId, Callback)>,
}

/// Registry of Escape handlers for open dialogs
#[derive(Clone, Default)]
pub struct EscapeListeners {
    registry: Rc<RefCell<Registry>>,
}

impl std::fmt::Debug for EscapeListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EscapeListeners")
            .field("active", &self.active())
            .finish()
    }
}

impl EscapeListeners {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback`; it stays registered until the returned
    /// subscription is dropped
    pub fn subscribe(&self, callback: impl Fn() + 'static) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = ListenerId(registry.next_id);
        registry.next_id += 1;
        registry.entries.push((id, Rc::new(callback)));
        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Deliver one Escape press. Returns whether a listener handled it.
    pub fn dispatch(&self) -> bool {
        // Release the borrow before running the callback: it may close the
        // dialog, which unsubscribes.
        let callback = self
            .registry
            .borrow()
            .entries
            .last()
            .map(|(_, cb)| Rc::clone(cb));

        match callback {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    /// Number of registered listeners
    pub fn active(&self) -> usize {
        self.registry.borrow().entries.len()
    }
}

/// A live registration in [`EscapeListeners`]; dropping it unsubscribes
#[must_use = "dropping the subscription unregisters the listener immediately"]
pub struct Subscription {
    id: ListenerId,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .borrow_mut()
                .entries
                .retain(|(id, _)| *id != self.id);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counter() -> (Rc<Cell<usize>>, impl Fn() + 'static) {
        let count = Rc::new(Cell::new(0));
        let handle = Rc::clone(&count);
        (count, move || handle.set(handle.get() + 1))
    }

    #[test]
    fn test_dispatch_without_listeners() {
        let listeners = EscapeListeners::new();
        assert!(!listeners.dispatch());
    }

    #[test]
    fn test_single_dispatch_fires_once() {
        let listeners = EscapeListeners::new();
        let (count, callback) = counter();
        let _sub = listeners.subscribe(callback);

        assert!(listeners.dispatch());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let listeners = EscapeListeners::new();
        let (count, callback) = counter();
        let sub = listeners.subscribe(callback);
        assert_eq!(listeners.active(), 1);

        drop(sub);
        assert_eq!(listeners.active(), 0);
        assert!(!listeners.dispatch());
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_latest_listener_wins() {
        let listeners = EscapeListeners::new();
        let (first_count, first) = counter();
        let (second_count, second) = counter();

        let _first = listeners.subscribe(first);
        let second_sub = listeners.subscribe(second);

        listeners.dispatch();
        assert_eq!(first_count.get(), 0);
        assert_eq!(second_count.get(), 1);

        drop(second_sub);
        listeners.dispatch();
        assert_eq!(first_count.get(), 1);
        assert_eq!(second_count.get(), 1);
    }

    #[test]
    fn test_callback_may_unsubscribe_itself() {
        let listeners = EscapeListeners::new();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let inner = Rc::clone(&slot);
        let sub = listeners.subscribe(move || {
            inner.borrow_mut().take();
        });
        *slot.borrow_mut() = Some(sub);

        assert!(listeners.dispatch());
        assert_eq!(listeners.active(), 0);
    }

    #[test]
    fn test_ids_are_unique() {
        let listeners = EscapeListeners::new();
        let a = listeners.subscribe(|| {});
        let b = listeners.subscribe(|| {});
        assert_ne!(a.id(), b.id());
    }
}
