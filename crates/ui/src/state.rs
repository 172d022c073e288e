//! Application State Management for unidoc
//!
//! Centralized state using Dioxus 0.7 Signals: the cached user list, the
//! search filter and the status bar line. Dialog visibility is not kept
//! here; each page owns the `open` flags of its own dialogs.

use dioxus::prelude::*;

use crate::services::UserRecord;

// ============================================================================
// Status Line
// ============================================================================

/// Status message for the status bar
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
}

/// Status message severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl StatusLevel {
    pub fn class(&self) -> &'static str {
        match self {
            StatusLevel::Info => "status--info",
            StatusLevel::Success => "status--success",
            StatusLevel::Warning => "status--warning",
            StatusLevel::Error => "status--error",
        }
    }
}

// ============================================================================
// Application State
// ============================================================================

/// Main application state container
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Users as last returned by the service
    pub users: Vec<UserRecord>,
    /// Whether a service call is in flight
    pub loading: bool,
    /// Current search text on the users page
    pub search: String,
    /// Status bar message
    pub status_message: Option<StatusMessage>,
}

impl AppState {
    /// Create new application state
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cached users after a successful load
    pub fn set_users(&mut self, users: Vec<UserRecord>) {
        self.users = users;
        self.loading = false;
    }

    /// Users matching the current search text
    pub fn visible_users(&self) -> Vec<UserRecord> {
        self.users
            .iter()
            .filter(|user| user.matches(&self.search))
            .cloned()
            .collect()
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>, level: StatusLevel) {
        self.status_message = Some(StatusMessage {
            text: message.into(),
            level,
        });
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

// ============================================================================
// Global State Context
// ============================================================================

/// Global application state signal
pub static APP_STATE: GlobalSignal<AppState> = Signal::global(AppState::new);

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::Role;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn user(name: &str, role: Role) -> UserRecord {
        UserRecord {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: format!("{}@universidad.edu", name.to_lowercase()),
            role,
            created_on: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    #[test]
    fn test_visible_users_follow_search() {
        let mut state = AppState::new();
        state.loading = true;
        state.set_users(vec![user("Ana", Role::Asistente), user("Jorge", Role::Verificador)]);
        assert!(!state.loading);
        assert_eq!(state.visible_users().len(), 2);

        state.search = "jor".to_string();
        let visible = state.visible_users();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Jorge");
    }

    #[test]
    fn test_status_message() {
        let mut state = AppState::new();
        state.set_status("Usuario creado", StatusLevel::Success);
        assert_eq!(
            state.status_message,
            Some(StatusMessage {
                text: "Usuario creado".to_string(),
                level: StatusLevel::Success,
            })
        );

        state.clear_status();
        assert!(state.status_message.is_none());
    }
}
