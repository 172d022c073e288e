//! Users Page Component
//!
//! Staff account management: a searchable table of users, a creation form
//! in a `FormModal`, delete confirmation through a `ConfirmModal`, and an
//! `AlertModal` for validation problems and completed actions.

use dioxus::prelude::*;
use unidoc_core::{AlertKind, DocsError, ModalSize};

use crate::components::button::{Button, ButtonVariant};
use crate::components::dialogs::{AlertModal, ConfirmModal, FormModal};
use crate::components::inputs::{Select, SelectOption, TextInput};
use crate::services::{
    EMAIL_LABEL, NAME_LABEL, ROLE_LABEL, Role, UserDraft, UserRecord, UserService,
};
use crate::state::{APP_STATE, StatusLevel};

// ============================================================================
// Notices
// ============================================================================

/// Content of the page's alert dialog
#[derive(Debug, Clone, PartialEq)]
struct Notice {
    kind: AlertKind,
    title: String,
    message: String,
    details: Vec<String>,
}

impl Notice {
    fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Success,
            title: title.into(),
            message: message.into(),
            details: Vec::new(),
        }
    }

    fn from_error(err: &DocsError) -> Self {
        match err {
            DocsError::MissingFields(fields) => Self {
                kind: AlertKind::Warning,
                title: "Campos incompletos".to_string(),
                message: "Complete los siguientes campos antes de continuar:".to_string(),
                details: fields.clone(),
            },
            DocsError::Validation(message) => Self {
                kind: AlertKind::Warning,
                title: "Datos no válidos".to_string(),
                message: message.clone(),
                details: Vec::new(),
            },
            other => Self {
                kind: AlertKind::Error,
                title: "No se pudo completar la operación".to_string(),
                message: other.to_string(),
                details: Vec::new(),
            },
        }
    }
}

/// Shown under a required control left empty
const REQUIRED_MESSAGE: &str = "Este campo es obligatorio";

/// Messages shown under the creation form's controls
#[derive(Debug, Clone, Default, PartialEq)]
struct FieldErrors {
    name: Option<String>,
    email: Option<String>,
    role: Option<String>,
}

impl FieldErrors {
    /// Place a rejected draft's error under the controls it concerns.
    ///
    /// Validation errors from the service are all about the e-mail address.
    fn from_error(err: &DocsError) -> Self {
        let mut errors = Self::default();
        match err {
            DocsError::MissingFields(fields) => {
                for field in fields {
                    let slot = match field.as_str() {
                        NAME_LABEL => &mut errors.name,
                        EMAIL_LABEL => &mut errors.email,
                        ROLE_LABEL => &mut errors.role,
                        _ => continue,
                    };
                    *slot = Some(REQUIRED_MESSAGE.to_string());
                }
            }
            DocsError::Validation(message) => errors.email = Some(message.clone()),
            _ => {}
        }
        errors
    }
}

fn role_options() -> Vec<SelectOption> {
    Role::ALL
        .into_iter()
        .map(|role| SelectOption::new(role.label(), role.label()))
        .collect()
}

async fn refresh_users(service: &UserService) {
    APP_STATE.write().loading = true;
    let users = service.list().await;
    APP_STATE.write().set_users(users);
}

// ============================================================================
// Users Page
// ============================================================================

/// Staff accounts page
#[component]
pub fn UsersPage() -> Element {
    let service = use_context::<UserService>();

    let mut form_open = use_signal(|| false);
    let mut draft = use_signal(UserDraft::default);
    let mut saving = use_signal(|| false);
    let mut notice = use_signal(|| None::<Notice>);
    let mut pending_delete = use_signal(|| None::<UserRecord>);
    let mut field_errors = use_signal(FieldErrors::default);

    let load_service = service.clone();
    use_future(move || {
        let service = load_service.clone();
        async move { refresh_users(&service).await }
    });

    let create_service = service.clone();
    let submit = move |_| {
        if saving() {
            return;
        }
        let current = draft.read().clone();
        if let Err(err) = current.validate() {
            tracing::debug!(error = %err, "user draft rejected");
            field_errors.set(FieldErrors::from_error(&err));
            notice.set(Some(Notice::from_error(&err)));
            return;
        }

        let service = create_service.clone();
        spawn(async move {
            saving.set(true);
            match service.create(current).await {
                Ok(record) => {
                    form_open.set(false);
                    draft.set(UserDraft::default());
                    field_errors.set(FieldErrors::default());
                    notice.set(Some(Notice::success(
                        "Usuario creado",
                        format!("{} fue registrado como {}.", record.name, record.role),
                    )));
                    APP_STATE
                        .write()
                        .set_status(format!("Usuario {} creado", record.name), StatusLevel::Success);
                    refresh_users(&service).await;
                }
                Err(err) => {
                    tracing::warn!(error = %err, "user creation failed");
                    field_errors.set(FieldErrors::from_error(&err));
                    notice.set(Some(Notice::from_error(&err)));
                }
            }
            saving.set(false);
        });
    };

    let delete_service = service.clone();
    let confirm_delete = move |_| {
        let Some(user) = pending_delete.write().take() else {
            return;
        };
        let service = delete_service.clone();
        spawn(async move {
            match service.delete(user.id).await {
                Ok(removed) => {
                    notice.set(Some(Notice::success(
                        "Usuario eliminado",
                        format!("{} ya no tiene acceso al sistema.", removed.name),
                    )));
                    APP_STATE
                        .write()
                        .set_status(format!("Usuario {} eliminado", removed.name), StatusLevel::Info);
                    refresh_users(&service).await;
                }
                Err(err) => {
                    tracing::warn!(error = %err, "user deletion failed");
                    APP_STATE.write().set_status(err.to_string(), StatusLevel::Error);
                    notice.set(Some(Notice::from_error(&err)));
                }
            }
        });
    };

    let state = APP_STATE.read();
    let users = state.visible_users();
    let loading = state.loading;
    let search = state.search.clone();
    drop(state);

    let current = draft.read().clone();
    let role_value = current.role.map(|r| r.label().to_string()).unwrap_or_default();
    let errors = field_errors.read().clone();
    let delete_message = pending_delete
        .read()
        .as_ref()
        .map(|user| format!("¿Desea eliminar al usuario {}?", user.name))
        .unwrap_or_default();
    let shown_notice = notice.read().clone();

    rsx! {
        section {
            class: "page page--users",

            div {
                class: "page-toolbar",
                h1 { class: "page-title", "Usuarios" }
                div {
                    class: "page-toolbar-actions",
                    TextInput {
                        value: search,
                        placeholder: "Buscar por nombre, correo o rol",
                        on_change: move |value: String| APP_STATE.write().search = value,
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| form_open.set(true),
                        "Crear Usuario"
                    }
                }
            }

            if loading && users.is_empty() {
                p { class: "page-empty", "Cargando usuarios…" }
            } else if users.is_empty() {
                p { class: "page-empty", "No hay usuarios que coincidan con la búsqueda." }
            } else {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Nombre" }
                            th { "Correo electrónico" }
                            th { "Rol" }
                            th { "Fecha de creación" }
                            th { class: "data-table-actions", "Acciones" }
                        }
                    }
                    tbody {
                        for user in users {
                            tr {
                                key: "{user.id}",
                                td { "{user.name}" }
                                td { "{user.email}" }
                                td { span { class: "role-badge", "{user.role}" } }
                                td { {user.created_on.format("%d/%m/%Y").to_string()} }
                                td {
                                    class: "data-table-actions",
                                    Button {
                                        variant: ButtonVariant::Danger,
                                        title: "Eliminar usuario",
                                        onclick: {
                                            let user = user.clone();
                                            move |_| pending_delete.set(Some(user.clone()))
                                        },
                                        "Eliminar"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            FormModal {
                open: form_open(),
                label: "Crear Usuario",
                corner_label: "Usuarios",
                size: ModalSize::Medium,
                on_submit: submit,
                on_close: move |_| {
                    form_open.set(false);
                    field_errors.set(FieldErrors::default());
                },

                TextInput {
                    label: NAME_LABEL,
                    value: current.name.clone(),
                    placeholder: "Nombre completo",
                    error: errors.name.clone(),
                    required: true,
                    disabled: saving(),
                    on_change: move |value: String| {
                        draft.write().name = value;
                        field_errors.write().name = None;
                    },
                }
                TextInput {
                    label: EMAIL_LABEL,
                    value: current.email.clone(),
                    input_type: "email",
                    placeholder: "usuario@universidad.edu",
                    help_text: "Se usará para iniciar sesión",
                    error: errors.email.clone(),
                    required: true,
                    disabled: saving(),
                    on_change: move |value: String| {
                        draft.write().email = value;
                        field_errors.write().email = None;
                    },
                }
                Select {
                    label: ROLE_LABEL,
                    value: role_value,
                    options: role_options(),
                    placeholder: "Seleccione un rol",
                    error: errors.role.clone(),
                    required: true,
                    disabled: saving(),
                    on_change: move |value: String| {
                        draft.write().role = Role::from_label(&value);
                        field_errors.write().role = None;
                    },
                }
            }

            ConfirmModal {
                open: pending_delete.read().is_some(),
                title: "Eliminar usuario",
                message: delete_message,
                on_confirm: confirm_delete,
                on_close: move |_| pending_delete.set(None),
            }

            if let Some(shown) = shown_notice {
                AlertModal {
                    open: true,
                    kind: shown.kind,
                    title: shown.title.clone(),
                    message: shown.message.clone(),
                    on_close: move |_| notice.set(None),

                    if !shown.details.is_empty() {
                        ul {
                            class: "alert-details",
                            for field in shown.details.iter() {
                                li { key: "{field}", "{field}" }
                            }
                        }
                    }
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

    #[test]
    fn test_missing_fields_become_warning_with_details() {
        let err = UserDraft::default().validate().unwrap_err();
        let notice = Notice::from_error(&err);
        assert_eq!(notice.kind, AlertKind::Warning);
        assert_eq!(notice.details, vec!["Nombre", "Correo electrónico", "Rol"]);
    }

    #[test]
    fn test_validation_message_is_shown_verbatim() {
        let notice = Notice::from_error(&DocsError::validation("correo repetido"));
        assert_eq!(notice.kind, AlertKind::Warning);
        assert_eq!(notice.message, "correo repetido");
        assert!(notice.details.is_empty());
    }

    #[test]
    fn test_other_errors_use_error_tone() {
        let notice = Notice::from_error(&DocsError::NotFound("42".to_string()));
        assert_eq!(notice.kind, AlertKind::Error);
        assert!(notice.message.contains("42"));
    }

    #[test]
    fn test_missing_fields_mark_each_empty_control() {
        let err = UserDraft {
            name: "Ana Pérez".to_string(),
            ..UserDraft::default()
        }
        .validate()
        .unwrap_err();
        let errors = FieldErrors::from_error(&err);
        assert_eq!(errors.name, None);
        assert_eq!(errors.email.as_deref(), Some(REQUIRED_MESSAGE));
        assert_eq!(errors.role.as_deref(), Some(REQUIRED_MESSAGE));
    }

    #[test]
    fn test_validation_error_lands_under_email() {
        let err = UserDraft {
            name: "Ana Pérez".to_string(),
            email: "ana@".to_string(),
            role: Some(Role::Verificador),
        }
        .validate()
        .unwrap_err();
        let errors = FieldErrors::from_error(&err);
        assert!(errors.email.is_some_and(|m| m.contains("ana@")));
        assert_eq!(errors.name, None);
        assert_eq!(errors.role, None);
    }

    #[test]
    fn test_service_failures_mark_no_control() {
        let errors = FieldErrors::from_error(&DocsError::NotFound("42".to_string()));
        assert_eq!(errors, FieldErrors::default());
    }

    #[test]
    fn test_role_options_cover_every_role() {
        let options = role_options();
        assert_eq!(options.len(), Role::ALL.len());
        assert_eq!(options[0].value, "Administrador");
    }
}
