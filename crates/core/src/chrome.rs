//! Dialog chrome rules
//!
//! Which header a modal shows for a given variant and set of optional
//! inputs, plus the default control labels of the specialized dialogs.

use crate::types::ModalVariant;

// ============================================================================
// Default Labels
// ============================================================================

/// Confirm control of a confirmation dialog
pub const DEFAULT_CONFIRM_LABEL: &str = "Sí";

/// Cancel control of a confirmation dialog
pub const DEFAULT_CANCEL_LABEL: &str = "No";

/// Acknowledge control of an alert
pub const DEFAULT_ALERT_BUTTON_LABEL: &str = "Aceptar";

/// Submit control of a form dialog
pub const DEFAULT_SUBMIT_LABEL: &str = "Aplicar cambios";

/// Header close control of a form dialog
pub const DEFAULT_CLOSE_LABEL: &str = "Cerrar";

// ============================================================================
// Header Plan
// ============================================================================

/// Header region of a modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderPlan {
    /// No header region at all
    None,
    /// Heading text only
    Heading(String),
    /// Caller-supplied header content only
    Custom,
    /// Heading text followed by caller-supplied content (form variant)
    HeadingWithCustom(String),
}

impl HeaderPlan {
    /// Decide the header for a modal.
    ///
    /// The heading text is the title, falling back to the label. In the
    /// default variant custom content replaces the heading; in the form
    /// variant both are shown.
    pub fn resolve(
        variant: ModalVariant,
        title: Option<&str>,
        label: Option<&str>,
        has_custom: bool,
    ) -> Self {
        let heading = title.or(label).map(str::to_string);

        match (variant, heading, has_custom) {
            (_, None, false) => HeaderPlan::None,
            (_, None, true) => HeaderPlan::Custom,
            (ModalVariant::Default, Some(_), true) => HeaderPlan::Custom,
            (ModalVariant::Form, Some(text), true) => HeaderPlan::HeadingWithCustom(text),
            (_, Some(text), false) => HeaderPlan::Heading(text),
        }
    }

    /// Whether a header region is rendered
    pub fn is_visible(&self) -> bool {
        !matches!(self, HeaderPlan::None)
    }

    /// Heading text, if any
    pub fn heading(&self) -> Option<&str> {
        match self {
            HeaderPlan::Heading(text) | HeaderPlan::HeadingWithCustom(text) => Some(text),
            HeaderPlan::None | HeaderPlan::Custom => None,
        }
    }

    /// Whether caller-supplied header content is rendered
    pub fn shows_custom(&self) -> bool {
        matches!(self, HeaderPlan::Custom | HeaderPlan::HeadingWithCustom(_))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_inputs_no_header() {
        for variant in [ModalVariant::Default, ModalVariant::Form] {
            let plan = HeaderPlan::resolve(variant, None, None, false);
            assert_eq!(plan, HeaderPlan::None);
            assert!(!plan.is_visible());
        }
    }

    #[test]
    fn test_title_wins_over_label() {
        let plan = HeaderPlan::resolve(
            ModalVariant::Default,
            Some("Documentos"),
            Some("Etiqueta"),
            false,
        );
        assert_eq!(plan, HeaderPlan::Heading("Documentos".to_string()));
    }

    #[test]
    fn test_label_alone_is_heading() {
        let plan = HeaderPlan::resolve(ModalVariant::Default, None, Some("Tareas"), false);
        assert_eq!(plan.heading(), Some("Tareas"));
        assert!(!plan.shows_custom());
    }

    #[test]
    fn test_default_variant_custom_replaces_heading() {
        let plan = HeaderPlan::resolve(ModalVariant::Default, Some("Título"), None, true);
        assert_eq!(plan, HeaderPlan::Custom);
        assert_eq!(plan.heading(), None);
        assert!(plan.shows_custom());
    }

    #[test]
    fn test_form_variant_keeps_both() {
        let plan = HeaderPlan::resolve(ModalVariant::Form, None, Some("Crear Usuario"), true);
        assert_eq!(
            plan,
            HeaderPlan::HeadingWithCustom("Crear Usuario".to_string())
        );
        assert_eq!(plan.heading(), Some("Crear Usuario"));
        assert!(plan.shows_custom());
    }

    #[test]
    fn test_custom_only() {
        for variant in [ModalVariant::Default, ModalVariant::Form] {
            assert_eq!(
                HeaderPlan::resolve(variant, None, None, true),
                HeaderPlan::Custom
            );
        }
    }

    #[test]
    fn test_default_labels() {
        assert_eq!(DEFAULT_CONFIRM_LABEL, "Sí");
        assert_eq!(DEFAULT_CANCEL_LABEL, "No");
        assert_eq!(DEFAULT_SUBMIT_LABEL, "Aplicar cambios");
    }
}
