//! # UI Hooks
//!
//! Custom Dioxus hooks for the unidoc UI.
//!
//! - Overlay host lookup
//! - Modal lifecycle (Escape listener and scroll lock while open)

// ============================================================================
// Module Declarations
// ============================================================================

pub mod use_modal;

// ============================================================================
// Re-exports
// ============================================================================

pub use use_modal::{use_modal_lifecycle, use_overlay_host};
