//! Main Application Component for unidoc
//!
//! The root component: provides the overlay host and the user service to
//! the tree, runs the document key bridge, and lays out the header, the
//! users page and the status bar.

use dioxus::prelude::*;
use unidoc_core::{AppConfig, OverlayHost};

use crate::host::{BodyScrollSurface, run_key_bridge};
use crate::pages::UsersPage;
use crate::services::UserService;
use crate::state::APP_STATE;

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    let config = try_use_context::<AppConfig>().unwrap_or_default();

    let host = use_context_provider(|| OverlayHost::new(BodyScrollSurface));
    use_future(move || run_key_bridge(host.clone()));

    let latency = config.services.latency();
    use_context_provider(move || {
        UserService::seeded(latency).unwrap_or_else(|err| {
            tracing::error!(error = %err, "seed data rejected, starting with no users");
            UserService::with_users(Vec::new(), latency)
        })
    });

    use_effect(|| {
        tracing::info!("unidoc UI initialized");
    });

    rsx! {
        div {
            class: "app-container",

            AppHeader { title: config.window.title.clone() }

            main {
                class: "app-content",
                UsersPage {}
            }

            StatusBar {}
        }
    }
}

// ============================================================================
// Header
// ============================================================================

#[component]
fn AppHeader(title: String) -> Element {
    rsx! {
        header {
            class: "app-header",
            span { class: "app-header-mark", "UD" }
            h1 { class: "app-header-title", "{title}" }
        }
    }
}

// ============================================================================
// Status Bar
// ============================================================================

/// Bottom status bar
#[component]
fn StatusBar() -> Element {
    let state = APP_STATE.read();
    let status = state.status_message.clone();
    let user_count = state.users.len();
    drop(state);

    rsx! {
        footer {
            class: "status-bar",

            if let Some(msg) = status {
                span { class: "{msg.level.class()}", "{msg.text}" }
            } else {
                span { "Listo" }
            }

            div { class: "status-bar-spacer" }

            span { "Usuarios: {user_count}" }
        }
    }
}
