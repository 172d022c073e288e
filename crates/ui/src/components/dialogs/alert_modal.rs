//! # Alert Modal Component
//!
//! Informational dialog with a tone (info, warning, error, success). The
//! tone drives the icon, the color class and the fallback heading; the
//! surrounding modal renders without a header of its own.

use dioxus::prelude::*;
use unidoc_core::chrome::DEFAULT_ALERT_BUTTON_LABEL;
use unidoc_core::{AlertKind, Dismissal, ModalSize};

use super::Modal;
use crate::components::button::{Button, ButtonVariant};

#[derive(Props, Clone, PartialEq)]
pub struct AlertModalProps {
    /// Whether the alert is shown
    pub open: bool,

    /// Tone of the alert
    #[props(default)]
    pub kind: AlertKind,

    /// Heading; falls back to the tone's heading
    #[props(default)]
    pub title: Option<String>,

    /// Main text
    #[props(default)]
    pub message: Option<String>,

    /// Label of the dismiss button
    #[props(default = DEFAULT_ALERT_BUTTON_LABEL.to_string())]
    pub button_label: String,

    /// Extra controls placed before the dismiss button
    #[props(default)]
    pub actions: Option<Element>,

    /// Extra body content below the message
    #[props(default = VNode::empty())]
    pub children: Element,

    /// Dismissed (Escape, backdrop, or the dismiss button)
    #[props(default)]
    pub on_close: EventHandler<Dismissal>,

    #[props(default = ModalSize::Small)]
    pub size: ModalSize,
}

/// Toned alert with a single dismiss button
#[component]
pub fn AlertModal(props: AlertModalProps) -> Element {
    let on_close = props.on_close;
    let tone = props.kind.tone();
    let heading = props
        .title
        .clone()
        .unwrap_or_else(|| tone.heading.to_string());
    let message = props.message.clone();
    let extra = props.children.clone();
    let actions = props.actions.clone();
    let button_label = props.button_label.clone();

    rsx! {
        Modal {
            open: props.open,
            size: props.size,
            on_close: move |reason: Dismissal| on_close.call(reason),
            footer_content: rsx! {
                {actions}
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| on_close.call(Dismissal::CloseControl),
                    "{button_label}"
                }
            },

            div {
                class: "alert {tone.class}",
                role: "alert",

                span { class: "alert-icon", aria_hidden: "true", "{tone.glyph}" }

                div {
                    class: "alert-content",
                    h3 { class: "alert-title", "{heading}" }
                    if let Some(text) = message {
                        p { class: "alert-message", "{text}" }
                    }
                    {extra}
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::dialogs::test_support::{Harness, Recorder};

    fn alert_root((rec, kind): (Recorder, AlertKind)) -> Element {
        let open = rec.use_open();
        rsx! {
            AlertModal {
                open,
                kind,
                message: "Faltan campos obligatorios",
                on_close: move |reason: Dismissal| rec.close(reason),
            }
        }
    }

    #[test]
    fn test_each_kind_renders_its_tone() {
        for kind in AlertKind::ALL {
            let tone = kind.tone();
            let harness = Harness::mount(alert_root, (Recorder::opened(), kind));
            assert_eq!(harness.class_writes(tone.class), 1, "{kind:?}");
            assert_eq!(harness.text_writes(tone.heading), 1, "{kind:?}");
            assert_eq!(harness.text_writes(tone.glyph), 1, "{kind:?}");
        }
    }

    #[test]
    fn test_alert_is_small_with_one_dismiss_control() {
        let harness = Harness::mount(alert_root, (Recorder::opened(), AlertKind::Warning));
        assert_eq!(harness.class_writes("modal-box--small"), 1);
        assert_eq!(harness.class_writes("btn--"), 1);
        assert_eq!(harness.text_writes("Aceptar"), 1);
        assert_eq!(harness.text_writes("Faltan campos obligatorios"), 1);
    }

    #[test]
    fn test_dismiss_control_closes() {
        let rec = Recorder::opened();
        let mut harness = Harness::mount(alert_root, (rec.clone(), AlertKind::Success));

        harness.click("btn--primary");
        assert_eq!(rec.closes(), vec![Dismissal::CloseControl]);
        assert_eq!(harness.listeners(), 0);
        assert!(!harness.locked());
    }

    #[test]
    fn test_escape_closes_once() {
        let rec = Recorder::opened();
        let mut harness = Harness::mount(alert_root, (rec.clone(), AlertKind::Error));

        harness.press("Escape");
        harness.press("Escape");
        assert_eq!(rec.closes(), vec![Dismissal::Escape]);
    }

    #[test]
    fn test_click_on_alert_body_stays_open() {
        let rec = Recorder::opened();
        let mut harness = Harness::mount(alert_root, (rec.clone(), AlertKind::Info));

        harness.click("alert alert--");
        assert!(rec.closes().is_empty());
        assert!(harness.locked());
    }
}
