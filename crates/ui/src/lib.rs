//! # unidoc UI
//!
//! Dioxus Desktop UI for the university document-management back office.
//!
//! ## Features
//!
//! - Modal dialog family (base, confirm, alert, form) with Escape handling
//!   and page scroll locking
//! - Staff account management page backed by a mock service
//!

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod components;
pub mod hooks;
pub mod host;
pub mod pages;
pub mod services;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

pub use unidoc_core;

pub use app::App;
pub use components::{
    AlertModal, Button, ButtonVariant, ConfirmModal, FormModal, Modal, Select, SelectOption,
    TextInput,
};
pub use hooks::{use_modal_lifecycle, use_overlay_host};
pub use host::BodyScrollSurface;
pub use pages::UsersPage;
pub use services::{Role, UserDraft, UserRecord, UserService};
pub use state::{APP_STATE, AppState, StatusLevel, StatusMessage};

use unidoc_core::AppConfig;

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "unidoc";

/// Stylesheet embedded at build time
const STYLES: &str = include_str!("../../../assets/styles/main.css");

// ============================================================================
// Launch Functions
// ============================================================================

/// Launch the desktop application with default settings
///
/// ```rust,ignore
/// fn main() {
///     unidoc_ui::launch();
/// }
/// ```
pub fn launch() {
    launch_with_config(&AppConfig::default());
}

/// Launch with a loaded configuration
///
/// Window title and sizes come from `[window]`; the whole config is also
/// provided to the component tree as context.
pub fn launch_with_config(config: &AppConfig) {
    tracing::info!("Starting {} v{}", NAME, VERSION);

    let window = &config.window;
    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(window.title.clone())
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(
                            window.width,
                            window.height,
                        ))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(
                            window.min_width,
                            window.min_height,
                        )),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .with_context(config.clone())
        .launch(App);
}

/// The embedded stylesheet
pub fn get_styles() -> &'static str {
    STYLES
}

// ============================================================================
// Tests
// ============================================================================
