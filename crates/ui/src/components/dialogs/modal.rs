//! # Modal Component
//!
//! The dialog primitive every other dialog is built on.
//!
//! ## Behavior
//!
//! - Renders nothing, and holds no global resource, while `open` is false
//! - Renders into a fixed, full-viewport overlay layer above the page
//! - Escape and backdrop clicks request closure through `on_close`
//! - Clicks inside the box never reach the backdrop
//! - Locks page scrolling while open and restores it on close or unmount
//!
//! ## Usage
//!
//! ```rust,ignore
//! let mut open = use_signal(|| false);
//!
//! rsx! {
//!     Modal {
//!         open: open(),
//!         title: "Documentos pendientes",
//!         size: ModalSize::Large,
//!         on_close: move |_| open.set(false),
//!         p { "Contenido" }
//!     }
//! }
//! ```

use dioxus::prelude::*;
use unidoc_core::{Dismissal, HeaderPlan, ModalSize, ModalVariant};

use crate::hooks::use_modal_lifecycle;

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct ModalProps {
    /// Whether the modal is shown; owned by the caller
    pub open: bool,

    /// Requested closure (Escape, backdrop, or a close control)
    #[props(default)]
    pub on_close: EventHandler<Dismissal>,

    /// Heading text
    #[props(default)]
    pub title: Option<String>,

    /// Heading text used when no title is given
    #[props(default)]
    pub label: Option<String>,

    /// Small tag shown in the backdrop layer (form variant only)
    #[props(default)]
    pub corner_label: Option<String>,

    /// Width class of the box
    #[props(default)]
    pub size: ModalSize,

    /// Theme and header composition rule
    #[props(default)]
    pub variant: ModalVariant,

    /// Custom header content
    #[props(default)]
    pub header_content: Option<Element>,

    /// Footer content; no footer region without it
    #[props(default)]
    pub footer_content: Option<Element>,

    /// Body content
    pub children: Element,
}

// ============================================================================
// Main Component
// ============================================================================

/// Blocking, centered dialog
#[component]
pub fn Modal(props: ModalProps) -> Element {
    let on_close = props.on_close;
    use_modal_lifecycle(props.open, move || {
        tracing::debug!(reason = %Dismissal::Escape, "modal dismissal requested");
        on_close.call(Dismissal::Escape);
    });

    if !props.open {
        return rsx! {};
    }

    let header_plan = HeaderPlan::resolve(
        props.variant,
        props.title.as_deref(),
        props.label.as_deref(),
        props.header_content.is_some(),
    );
    let corner_label = props
        .corner_label
        .clone()
        .filter(|_| props.variant.supports_corner_label());
    let backdrop_class = props.variant.backdrop_class();
    let box_class = format!("{} {}", props.variant.box_class(), props.size.class());
    let header_content = props.header_content.clone();
    let footer_content = props.footer_content.clone();
    let body = props.children.clone();

    rsx! {
        div {
            class: "modal-layer {backdrop_class}",
            "data-layer": "modal",
            onclick: move |_| {
                tracing::debug!(reason = %Dismissal::Backdrop, "modal dismissal requested");
                on_close.call(Dismissal::Backdrop);
            },

            if let Some(tag) = corner_label {
                span { class: "modal-corner-label", "{tag}" }
            }

            div {
                class: "{box_class}",
                role: "dialog",
                aria_modal: "true",
                onclick: move |e| e.stop_propagation(),

                if header_plan.is_visible() {
                    header {
                        class: "modal-header",
                        if let Some(text) = header_plan.heading() {
                            h2 { class: "modal-title", "{text}" }
                        }
                        if header_plan.shows_custom() {
                            div {
                                class: "modal-header-content",
                                {header_content}
                            }
                        }
                    }
                }

                div {
                    class: "modal-body",
                    {body}
                }

                if let Some(footer_body) = footer_content {
                    footer {
                        class: "modal-footer",
                        {footer_body}
                    }
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
