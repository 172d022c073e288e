//! # Dialog Components
//!
//! The modal primitive and the dialogs composed from it.
//!
//! ## Dialogs
//!
//! - **Modal**: Blocking dialog with backdrop, Escape handling and scroll lock
//! - **ConfirmModal**: Yes/no confirmation
//! - **AlertModal**: Toned notice with a dismiss button
//! - **FormModal**: Form wrapper with close and submit controls
//!
//! ## Usage
//!
//! ```rust,ignore
//! use unidoc_ui::components::dialogs::{AlertModal, ConfirmModal};
//!
//! fn MyComponent() -> Element {
//!     rsx! {
//!         ConfirmModal {
//!             open: true,
//!             message: "¿Desea continuar?",
//!             on_confirm: move |_| {},
//!             on_close: move |_| {},
//!         }
//!         AlertModal { open: false, kind: AlertKind::Success, message: "Listo" }
//!     }
//! }
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod alert_modal;
pub mod confirm_modal;
pub mod form_modal;
pub mod modal;

#[cfg(test)]
mod test_support;

// ============================================================================
// Re-exports
// ============================================================================

pub use alert_modal::{AlertModal, AlertModalProps};
pub use confirm_modal::{ConfirmModal, ConfirmModalProps};
pub use form_modal::{FormModal, FormModalProps};
pub use modal::{Modal, ModalProps};
