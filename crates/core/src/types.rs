//! Core types used throughout unidoc
//!
//! Closed enums configuring the dialog family. Every variant maps to a
//! presentation class through an exhaustive `match`, so an unknown size or
//! tone cannot be silently ignored.

use serde::{Deserialize, Serialize};

// ============================================================================
// Modal Size
// ============================================================================

/// Width class of a modal box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ModalSize {
    /// All sizes, narrowest first
    pub const ALL: [ModalSize; 3] = [ModalSize::Small, ModalSize::Medium, ModalSize::Large];

    /// CSS class applied to the modal box
    pub fn class(&self) -> &'static str {
        match self {
            ModalSize::Small => "modal-box--small",
            ModalSize::Medium => "modal-box--medium",
            ModalSize::Large => "modal-box--large",
        }
    }
}

impl std::fmt::Display for ModalSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModalSize::Small => write!(f, "small"),
            ModalSize::Medium => write!(f, "medium"),
            ModalSize::Large => write!(f, "large"),
        }
    }
}

// ============================================================================
// Modal Variant
// ============================================================================

/// Visual theme and header composition rule of a modal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalVariant {
    /// Neutral dark backdrop, neutral box
    #[default]
    Default,
    /// Themed backdrop and box for data-entry dialogs
    Form,
}

impl ModalVariant {
    /// CSS class applied to the backdrop layer
    pub fn backdrop_class(&self) -> &'static str {
        match self {
            ModalVariant::Default => "modal-backdrop",
            ModalVariant::Form => "modal-backdrop modal-backdrop--form",
        }
    }

    /// CSS class applied to the modal box
    pub fn box_class(&self) -> &'static str {
        match self {
            ModalVariant::Default => "modal-box",
            ModalVariant::Form => "modal-box modal-box--form",
        }
    }

    /// Whether a corner label may be shown in the backdrop layer
    pub fn supports_corner_label(&self) -> bool {
        matches!(self, ModalVariant::Form)
    }
}

// ============================================================================
// Alert Kind
// ============================================================================

/// Severity of an alert notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    #[default]
    Info,
    Warning,
    Error,
    Success,
}

/// Presentation of an alert kind: tone class, glyph and default heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertTone {
    pub class: &'static str,
    pub glyph: &'static str,
    pub heading: &'static str,
}

impl AlertKind {
    /// All alert kinds
    pub const ALL: [AlertKind; 4] = [
        AlertKind::Info,
        AlertKind::Warning,
        AlertKind::Error,
        AlertKind::Success,
    ];

    /// Tone used to render this kind
    pub fn tone(&self) -> AlertTone {
        match self {
            AlertKind::Info => AlertTone {
                class: "alert--info",
                glyph: "ℹ",
                heading: "Información",
            },
            AlertKind::Warning => AlertTone {
                class: "alert--warning",
                glyph: "!",
                heading: "Advertencia",
            },
            AlertKind::Error => AlertTone {
                class: "alert--error",
                glyph: "✕",
                heading: "Error",
            },
            AlertKind::Success => AlertTone {
                class: "alert--success",
                glyph: "✓",
                heading: "Éxito",
            },
        }
    }
}

impl std::fmt::Display for AlertKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertKind::Info => write!(f, "info"),
            AlertKind::Warning => write!(f, "warning"),
            AlertKind::Error => write!(f, "error"),
            AlertKind::Success => write!(f, "success"),
        }
    }
}

// ============================================================================
// Dismissal
// ============================================================================

/// How a modal was asked to close
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dismissal {
    /// Escape pressed while the modal was open
    Escape,
    /// Pointer click on the backdrop outside the box
    Backdrop,
    /// A close/cancel/acknowledge control inside the modal
    CloseControl,
}

impl std::fmt::Display for Dismissal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dismissal::Escape => write!(f, "escape"),
            Dismissal::Backdrop => write!(f, "backdrop"),
            Dismissal::CloseControl => write!(f, "close control"),
        }
    }
}

/// Outcome of a yes/no confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmDecision {
    /// The explicit confirm control was activated
    Confirmed,
    /// The dialog was dismissed by any other means
    Declined(Dismissal),
}

impl ConfirmDecision {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, ConfirmDecision::Confirmed)
    }
}

/// Every dismissal path declines; none confirms.
impl From<Dismissal> for ConfirmDecision {
    fn from(dismissal: Dismissal) -> Self {
        ConfirmDecision::Declined(dismissal)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn test_size_classes_distinct() {
        let classes: HashSet<&str> = ModalSize::ALL.iter().map(|s| s.class()).collect();
        assert_eq!(classes.len(), 3);
    }

    #[test]
    fn test_size_serde_names() {
        #[derive(Deserialize)]
        struct Holder {
            size: ModalSize,
        }
        let holder: Holder = toml::from_str(r#"size = "large""#).unwrap();
        assert_eq!(holder.size, ModalSize::Large);

        let bad = toml::from_str::<Holder>(r#"size = "huge""#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_variant_classes() {
        assert_eq!(ModalVariant::default(), ModalVariant::Default);
        assert!(ModalVariant::Form.box_class().contains("modal-box--form"));
        assert!(!ModalVariant::Default.box_class().contains("--form"));
        assert!(ModalVariant::Form.supports_corner_label());
        assert!(!ModalVariant::Default.supports_corner_label());
    }

    #[test]
    fn test_alert_tones_pairwise_distinct() {
        let tones: Vec<AlertTone> = AlertKind::ALL.iter().map(|k| k.tone()).collect();
        for (i, a) in tones.iter().enumerate() {
            for b in tones.iter().skip(i + 1) {
                assert_ne!(a.class, b.class);
                assert_ne!(a.glyph, b.glyph);
                assert_ne!(a.heading, b.heading);
            }
        }
    }

    #[test]
    fn test_alert_kind_display() {
        let names: Vec<String> = AlertKind::ALL.iter().map(|k| k.to_string()).collect();
        assert_eq!(names, ["info", "warning", "error", "success"]);
    }

    #[test]
    fn test_dismissal_never_confirms() {
        for dismissal in [Dismissal::Escape, Dismissal::Backdrop, Dismissal::CloseControl] {
            let decision = ConfirmDecision::from(dismissal);
            assert!(!decision.is_confirmed());
            assert_eq!(decision, ConfirmDecision::Declined(dismissal));
        }
        assert!(ConfirmDecision::Confirmed.is_confirmed());
    }
}
