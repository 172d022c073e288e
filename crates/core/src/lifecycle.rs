//! Modal open/close lifecycle
//!
//! [`ModalLifecycle`] binds one dialog's `open` flag to the overlay
//! resources: while open it holds exactly one Escape subscription and one
//! scroll-lock guard, and while closed it holds neither. The UI calls
//! [`ModalLifecycle::sync`] on every render and [`ModalLifecycle::teardown`]
//! on unmount.

use crate::overlay::{OverlayHost, ScrollLockGuard, Subscription};

/// What a call to [`ModalLifecycle::sync`] changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Opened,
    Closed,
    Unchanged,
}

/// Resources held while a dialog is open
#[derive(Debug)]
struct Held {
    _escape: Subscription,
    _scroll: ScrollLockGuard,
}

/// Lifecycle binding for a single dialog instance
#[derive(Debug)]
pub struct ModalLifecycle {
    host: OverlayHost,
    held: Option<Held>,
}

impl ModalLifecycle {
    pub fn new(host: OverlayHost) -> Self {
        Self { host, held: None }
    }

    /// Reconcile the held resources with `open`.
    ///
    /// `on_escape` is only registered on a closed-to-open transition; while
    /// the dialog stays open the first registration is kept.
    pub fn sync(&mut self, open: bool, on_escape: impl Fn() + 'static) -> Transition {
        match (open, self.held.is_some()) {
            (true, false) => {
                // Subscribe before locking so a host that dispatches
                // synchronously never sees a locked page without a listener.
                let escape = self.host.escape_listeners().subscribe(on_escape);
                let scroll = self.host.scroll_lock().acquire();
                self.held = Some(Held {
                    _escape: escape,
                    _scroll: scroll,
                });
                tracing::debug!("modal opened");
                Transition::Opened
            }
            (false, true) => {
                self.held = None;
                tracing::debug!("modal closed");
                Transition::Closed
            }
            _ => Transition::Unchanged,
        }
    }

    /// Release everything. Safe to call any number of times.
    pub fn teardown(&mut self) {
        if self.held.take().is_some() {
            tracing::debug!("modal torn down while open");
        }
    }

    /// Whether the dialog currently holds its resources
    pub fn is_open(&self) -> bool {
        self.held.is_some()
    }

    pub fn host(&self) -> &OverlayHost {
        &self.host
    }
}

impl Drop for ModalLifecycle {
    fn drop(&mut self) {
        self.teardown();
    }
}

// ============================================================================
// Tests
// ============================================================================
