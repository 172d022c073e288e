//! Desktop host bindings
//!
//! Connects the headless overlay resources to the webview document: the
//! scroll lock styles `document.body`, and a single document-level
//! `keydown` listener forwards Escape presses back into Rust.

use dioxus::prelude::*;
use unidoc_core::{DocsError, OverlayHost, ScrollSurface};

/// Saves the body's inline overflow once, then hides overflow
const LOCK_SCRIPT: &str = r#"
const body = document.body;
if (body.dataset.unidocOverflow === undefined) {
    body.dataset.unidocOverflow = body.style.overflow;
}
body.style.overflow = "hidden";
"#;

/// Restores the overflow saved by `LOCK_SCRIPT`
const RESTORE_SCRIPT: &str = r#"
const body = document.body;
if (body.dataset.unidocOverflow !== undefined) {
    body.style.overflow = body.dataset.unidocOverflow;
    delete body.dataset.unidocOverflow;
}
"#;

/// Forwards Escape presses over the eval channel for the lifetime of the
/// window
const KEY_BRIDGE_SCRIPT: &str = r#"
const forward = (event) => {
    if (event.key === "Escape" || event.key === "Esc") {
        dioxus.send(event.key);
    }
};
document.addEventListener("keydown", forward);
await new Promise(() => {});
"#;

// ============================================================================
// Body Scroll Surface
// ============================================================================

/// Scroll surface backed by the webview's `<body>` element
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyScrollSurface;

impl BodyScrollSurface {
    /// Script that moves the body into the given state
    pub fn script(locked: bool) -> &'static str {
        if locked { LOCK_SCRIPT } else { RESTORE_SCRIPT }
    }
}

impl ScrollSurface for BodyScrollSurface {
    fn apply(&self, locked: bool) {
        tracing::trace!(locked, "applying body scroll state");
        document::eval(Self::script(locked));
    }
}

// ============================================================================
// Key Bridge
// ============================================================================

/// Install the document key listener and dispatch forwarded keys on `host`.
///
/// Runs until the eval channel closes, which happens when the window goes
/// away.
pub async fn run_key_bridge(host: OverlayHost) {
    let mut bridge = document::eval(KEY_BRIDGE_SCRIPT);
    tracing::debug!("document key bridge installed");

    loop {
        match bridge.recv::<String>().await {
            Ok(key) => {
                host.handle_key(&key);
            }
            Err(e) => {
                let err = DocsError::host(format!("key bridge closed: {e:?}"));
                tracing::warn!("{}", err);
                break;
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
