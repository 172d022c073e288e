//! # Confirm Modal Component
//!
//! Yes/no confirmation built on [`Modal`]. Escape, backdrop and the cancel
//! button all end in `on_close`; only the confirm button reaches
//! `on_confirm`.

use dioxus::prelude::*;
use unidoc_core::chrome::{DEFAULT_CANCEL_LABEL, DEFAULT_CONFIRM_LABEL};
use unidoc_core::{ConfirmDecision, Dismissal, ModalSize};

use super::Modal;
use crate::components::button::{Button, ButtonVariant};

#[derive(Props, Clone, PartialEq)]
pub struct ConfirmModalProps {
    /// Whether the dialog is shown
    pub open: bool,

    /// Question shown to the user
    pub message: String,

    /// Optional heading
    #[props(default)]
    pub title: Option<String>,

    /// Confirm control label
    #[props(default = DEFAULT_CONFIRM_LABEL.to_string())]
    pub confirm_label: String,

    /// Cancel control label
    #[props(default = DEFAULT_CANCEL_LABEL.to_string())]
    pub cancel_label: String,

    /// The confirm control was activated
    #[props(default)]
    pub on_confirm: EventHandler<()>,

    /// Dismissed without confirming
    #[props(default)]
    pub on_close: EventHandler<Dismissal>,
}

/// Confirmation dialog with exactly two controls
#[component]
pub fn ConfirmModal(props: ConfirmModalProps) -> Element {
    let on_confirm = props.on_confirm;
    let on_close = props.on_close;
    let confirm_label = props.confirm_label.clone();
    let cancel_label = props.cancel_label.clone();
    let message = props.message.clone();

    let decide = move |decision: ConfirmDecision| {
        tracing::debug!(?decision, "confirmation decided");
        match decision {
            ConfirmDecision::Confirmed => on_confirm.call(()),
            ConfirmDecision::Declined(reason) => on_close.call(reason),
        }
    };

    rsx! {
        Modal {
            open: props.open,
            size: ModalSize::Small,
            title: props.title.clone(),
            on_close: move |reason: Dismissal| decide(ConfirmDecision::from(reason)),
            footer_content: rsx! {
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| decide(ConfirmDecision::from(Dismissal::CloseControl)),
                    "{cancel_label}"
                }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| decide(ConfirmDecision::Confirmed),
                    "{confirm_label}"
                }
            },

            p { class: "confirm-message", "{message}" }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
