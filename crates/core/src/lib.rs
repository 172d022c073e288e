//! # unidoc Core
//!
//! Headless building blocks for the unidoc dialog family.
//!
//! This crate has no UI framework dependency. It provides:
//!
//! - **Types**: closed enums for modal size, variant and alert kind
//! - **Chrome**: header composition rules and default control labels
//! - **Overlay**: the shared scroll lock and Escape-listener registry
//! - **Lifecycle**: binding of a dialog's `open` flag to those resources
//! - **Config**: TOML application configuration
//! - **Errors**: `DocsError` and `DocsResult`
//!

pub mod chrome;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod overlay;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use chrome::HeaderPlan;
pub use config::{AppConfig, LoggingConfig, ServiceConfig, WindowConfig};
pub use error::{DocsError, DocsResult};
pub use lifecycle::{ModalLifecycle, Transition};
pub use overlay::{EscapeListeners, OverlayHost, ScrollLock, ScrollLockGuard, Subscription};
pub use traits::{MemorySurface, ScrollSurface};
pub use types::{AlertKind, AlertTone, ConfirmDecision, Dismissal, ModalSize, ModalVariant};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
