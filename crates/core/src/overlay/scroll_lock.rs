//! Reference-counted page scroll lock
//!
//! Each open dialog holds one [`ScrollLockGuard`]. The first guard locks the
//! surface and the last one to drop restores it, so sibling dialogs never
//! clobber each other's lock.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::traits::ScrollSurface;

struct LockState {
    holders: usize,
    surface: Box<dyn ScrollSurface>,
}

/// Shared scroll lock over a single page surface
#[derive(Clone)]
pub struct ScrollLock {
    state: Rc<RefCell<LockState>>,
}

impl std::fmt::Debug for ScrollLock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollLock")
            .field("holders", &self.holders())
            .finish()
    }
}

impl ScrollLock {
    /// Create a lock over `surface`; the surface starts unlocked
    pub fn new(surface: impl ScrollSurface + 'static) -> Self {
        Self {
            state: Rc::new(RefCell::new(LockState {
                holders: 0,
                surface: Box::new(surface),
            })),
        }
    }

    /// Take a hold on the lock, locking the surface if this is the first
    pub fn acquire(&self) -> ScrollLockGuard {
        let mut state = self.state.borrow_mut();
        state.holders += 1;
        if state.holders == 1 {
            tracing::trace!("scroll lock applied");
            state.surface.apply(true);
        }
        ScrollLockGuard {
            state: Rc::downgrade(&self.state),
        }
    }

    /// Whether any guard is currently held
    pub fn is_locked(&self) -> bool {
        self.holders() > 0
    }

    /// Number of live guards
    pub fn holders(&self) -> usize {
        self.state.borrow().holders
    }
}

/// A single hold on a [`ScrollLock`]; dropping it releases the hold
#[must_use = "dropping the guard releases the scroll lock immediately"]
pub struct ScrollLockGuard {
    state: Weak<RefCell<LockState>>,
}

impl std::fmt::Debug for ScrollLockGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollLockGuard")
            .field("attached", &(self.state.strong_count() > 0))
            .finish()
    }
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        // The lock may already be gone if its host was torn down first.
        let Some(state) = self.state.upgrade() else {
            return;
        };
        let mut state = state.borrow_mut();
        state.holders = state.holders.saturating_sub(1);
        if state.holders == 0 {
            tracing::trace!("scroll lock restored");
            state.surface.apply(false);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
