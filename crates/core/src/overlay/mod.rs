//! # Overlay Resources
//!
//! Process-wide state touched by open dialogs: the page scroll lock and the
//! Escape-key listener slot. Both are owned by an [`OverlayHost`] that the
//! application shell creates once and shares with every dialog.

pub mod listeners;
pub mod scroll_lock;

pub use listeners::{EscapeListeners, ListenerId, Subscription};
pub use scroll_lock::{ScrollLock, ScrollLockGuard};

use crate::traits::{MemorySurface, ScrollSurface};

/// DOM key names treated as Escape
const ESCAPE_KEYS: [&str; 2] = ["Escape", "Esc"];

/// Shared overlay resources for one window
#[derive(Debug, Clone)]
pub struct OverlayHost {
    scroll_lock: ScrollLock,
    escape: EscapeListeners,
}

impl OverlayHost {
    /// Create a host over the given page surface
    pub fn new(surface: impl ScrollSurface + 'static) -> Self {
        Self {
            scroll_lock: ScrollLock::new(surface),
            escape: EscapeListeners::new(),
        }
    }

    /// Host backed by an in-memory surface, for dialogs rendered without an
    /// application shell
    pub fn detached() -> Self {
        Self::new(MemorySurface::new())
    }

    pub fn scroll_lock(&self) -> &ScrollLock {
        &self.scroll_lock
    }

    pub fn escape_listeners(&self) -> &EscapeListeners {
        &self.escape
    }

    /// Route a DOM `KeyboardEvent.key` value. Returns whether a dialog
    /// handled it.
    pub fn handle_key(&self, key: &str) -> bool {
        if ESCAPE_KEYS.contains(&key) {
            let handled = self.escape.dispatch();
            tracing::trace!(handled, "escape key dispatched");
            handled
        } else {
            false
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
