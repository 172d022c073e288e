//! # Button Component
//!
//! The single clickable control used by pages and dialog footers.

use dioxus::prelude::*;

/// Visual emphasis of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    /// Main action of a view or dialog
    #[default]
    Primary,
    /// Secondary action (cancel, close)
    Secondary,
    /// Destructive action
    Danger,
}

impl ButtonVariant {
    /// CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn--primary",
            ButtonVariant::Secondary => "btn btn--secondary",
            ButtonVariant::Danger => "btn btn--danger",
        }
    }
}

/// Properties for Button component
#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    /// Visual variant
    #[props(default)]
    pub variant: ButtonVariant,

    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Tooltip text
    #[props(default)]
    pub title: Option<String>,

    /// Click handler
    #[props(default)]
    pub onclick: EventHandler<MouseEvent>,

    /// Button content
    pub children: Element,
}

/// Styled button
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let state_class = if props.disabled { "btn--disabled" } else { "" };

    rsx! {
        button {
            r#type: "button",
            class: "{props.variant.class()} {state_class}",
            disabled: props.disabled,
            title: props.title.clone().unwrap_or_default(),
            onclick: move |e| {
                if !props.disabled {
                    props.onclick.call(e);
                }
            },
            {props.children}
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
