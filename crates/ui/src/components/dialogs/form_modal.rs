//! # Form Modal Component
//!
//! Form-themed dialog: a heading, a close control in the header, the
//! caller's fields in the body and a single submit control in the footer.

use dioxus::prelude::*;
use unidoc_core::chrome::{DEFAULT_CLOSE_LABEL, DEFAULT_SUBMIT_LABEL};
use unidoc_core::{Dismissal, ModalSize, ModalVariant};

use super::Modal;
use crate::components::button::{Button, ButtonVariant};

#[derive(Props, Clone, PartialEq)]
pub struct FormModalProps {
    /// Whether the form is shown
    pub open: bool,

    /// Heading text
    pub label: String,

    /// Submit control label
    #[props(default = DEFAULT_SUBMIT_LABEL.to_string())]
    pub submit_label: String,

    /// Close control label
    #[props(default = DEFAULT_CLOSE_LABEL.to_string())]
    pub close_label: String,

    #[props(default)]
    pub size: ModalSize,

    /// Small tag shown in the backdrop layer
    #[props(default)]
    pub corner_label: Option<String>,

    /// The submit control was activated
    #[props(default)]
    pub on_submit: EventHandler<()>,

    /// Dismissed (Escape, backdrop, or the close control)
    #[props(default)]
    pub on_close: EventHandler<Dismissal>,

    /// Form fields
    pub children: Element,
}

/// Dialog wrapping a form
#[component]
pub fn FormModal(props: FormModalProps) -> Element {
    let on_submit = props.on_submit;
    let on_close = props.on_close;
    let submit_label = props.submit_label.clone();
    let close_label = props.close_label.clone();
    let fields = props.children.clone();

    rsx! {
        Modal {
            open: props.open,
            variant: ModalVariant::Form,
            size: props.size,
            label: props.label.clone(),
            corner_label: props.corner_label.clone(),
            on_close: move |reason: Dismissal| on_close.call(reason),
            header_content: rsx! {
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| on_close.call(Dismissal::CloseControl),
                    "{close_label}"
                }
            },
            footer_content: rsx! {
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| {
                        tracing::debug!("form submitted");
                        on_submit.call(());
                    },
                    "{submit_label}"
                }
            },

            div {
                class: "form-modal-fields",
                {fields}
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
