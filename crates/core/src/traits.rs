//! Core traits for unidoc
//!
//! Seams between the headless dialog contracts and whatever host renders
//! them.

use std::cell::Cell;
use std::rc::Rc;

// ============================================================================
// ScrollSurface Trait
// ============================================================================

/// The scrollable page underneath every dialog
///
/// A surface is told when the page must stop scrolling and when it may
/// scroll again. Implementations restore whatever scroll behavior the page
/// had before the lock was applied.
///
/// # Example
///
/// ```rust,ignore
/// use unidoc_core::ScrollSurface;
///
/// struct BodyStyle;
///
/// impl ScrollSurface for BodyStyle {
///     fn apply(&self, locked: bool) {
///         if locked {
///             // overflow: hidden
///         } else {
///             // restore previous overflow
///         }
///     }
/// }
/// ```
pub trait ScrollSurface {
    /// Lock (`true`) or restore (`false`) page scrolling
    fn apply(&self, locked: bool);
}

// ============================================================================
// Memory Surface
// ============================================================================

/// In-memory scroll surface
///
/// Records the current lock state and how many times it changed. Clones
/// share the same record, so a caller can keep one clone for inspection and
/// hand the other to a [`crate::ScrollLock`].
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    locked: Rc<Cell<bool>>,
    transitions: Rc<Cell<usize>>,
}

impl MemorySurface {
    /// Create an unlocked surface
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether scrolling is currently locked
    pub fn is_locked(&self) -> bool {
        self.locked.get()
    }

    /// Number of lock/restore transitions applied so far
    pub fn transitions(&self) -> usize {
        self.transitions.get()
    }
}

impl ScrollSurface for MemorySurface {
    fn apply(&self, locked: bool) {
        if self.locked.get() != locked {
            self.locked.set(locked);
            self.transitions.set(self.transitions.get() + 1);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_surface_records_transitions() {
        let surface = MemorySurface::new();
        let observer = surface.clone();
        assert!(!observer.is_locked());

        surface.apply(true);
        assert!(observer.is_locked());
        assert_eq!(observer.transitions(), 1);

        // Applying the same state is not a transition
        surface.apply(true);
        assert_eq!(observer.transitions(), 1);

        surface.apply(false);
        assert!(!observer.is_locked());
        assert_eq!(observer.transitions(), 2);
    }
}
