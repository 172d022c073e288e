//! # UI Components
//!
//! Reusable Dioxus components for the unidoc desktop UI.
//!
//! - **Button**: Themed action button
//! - **Inputs**: Text input and select
//! - **Dialogs**: The modal primitive and the confirm, alert and form dialogs
//!
//! ## Component Hierarchy
//!
//! ```text
//! Modal
//! ├── ConfirmModal (two buttons, always small)
//! ├── AlertModal (toned body, one dismiss button)
//! └── FormModal (form theme, close + submit)
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod button;
pub mod dialogs;
pub mod inputs;

// ============================================================================
// Re-exports
// ============================================================================

pub use button::{Button, ButtonVariant};
pub use dialogs::{AlertModal, ConfirmModal, FormModal, Modal};
pub use inputs::{Select, SelectOption, TextInput};
