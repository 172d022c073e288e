//! Mock user service
//!
//! Stands in for the back office API. Records are seeded from an embedded
//! JSON file and every call waits for a configurable latency before
//! answering, so the UI exercises its pending states.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::LazyLock;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use unidoc_core::{DocsError, DocsResult};
use uuid::Uuid;

/// Seed records bundled with the binary
const SEED_USERS: &str = include_str!("../../../assets/mock/users.json");

/// Loose shape check: something@something.tld, no whitespace
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Form labels of the draft fields, also used in missing-field reports
pub const NAME_LABEL: &str = "Nombre";
pub const EMAIL_LABEL: &str = "Correo electrónico";
pub const ROLE_LABEL: &str = "Rol";

/// Compiled once on first use; `None` only if the pattern itself is broken
static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(EMAIL_PATTERN).ok());

// ============================================================================
// Role
// ============================================================================

/// Access role of a staff account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Administrador,
    Verificador,
    Asistente,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Administrador, Role::Verificador, Role::Asistente];

    pub fn label(&self) -> &'static str {
        match self {
            Role::Administrador => "Administrador",
            Role::Verificador => "Verificador",
            Role::Asistente => "Asistente",
        }
    }

    /// Parse a select value back into a role
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.label() == label)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Records
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_on: NaiveDate,
}

impl UserRecord {
    /// Case-insensitive match on name, e-mail or role
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query)
            || self.email.to_lowercase().contains(&query)
            || self.role.label().to_lowercase().contains(&query)
    }
}

/// Unsaved user, as typed into the creation form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub role: Option<Role>,
}

impl UserDraft {
    /// Labels of the required fields left empty, in form order
    pub fn missing_fields(&self) -> Vec<String> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push(NAME_LABEL.to_string());
        }
        if self.email.trim().is_empty() {
            missing.push(EMAIL_LABEL.to_string());
        }
        if self.role.is_none() {
            missing.push(ROLE_LABEL.to_string());
        }
        missing
    }

    pub fn validate(&self) -> DocsResult<()> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(DocsError::MissingFields(missing));
        }

        let email = EMAIL_RE
            .as_ref()
            .ok_or_else(|| DocsError::internal("e-mail pattern failed to compile"))?;
        if !email.is_match(self.email.trim()) {
            return Err(DocsError::validation(format!(
                "'{}' no es un correo electrónico válido",
                self.email.trim()
            )));
        }

        Ok(())
    }

    fn into_record(self, created_on: NaiveDate) -> DocsResult<UserRecord> {
        let role = self
            .role
            .ok_or_else(|| DocsError::MissingFields(vec![ROLE_LABEL.to_string()]))?;
        Ok(UserRecord {
            id: Uuid::new_v4(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            role,
            created_on,
        })
    }
}

// ============================================================================
// Service
// ============================================================================

/// In-memory user store with simulated latency
#[derive(Debug, Clone)]
pub struct UserService {
    store: Rc<RefCell<Vec<UserRecord>>>,
    latency: Duration,
}

impl PartialEq for UserService {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store) && self.latency == other.latency
    }
}

impl UserService {
    pub const DEFAULT_LATENCY: Duration = Duration::from_millis(400);

    /// Service seeded with the bundled records
    pub fn seeded(latency: Duration) -> DocsResult<Self> {
        Self::from_seed(SEED_USERS, latency)
    }

    pub fn from_seed(json: &str, latency: Duration) -> DocsResult<Self> {
        let users: Vec<UserRecord> =
            serde_json::from_str(json).map_err(|e| DocsError::SeedData(e.to_string()))?;
        tracing::debug!(count = users.len(), "user store seeded");
        Ok(Self::with_users(users, latency))
    }

    pub fn with_users(users: Vec<UserRecord>, latency: Duration) -> Self {
        Self {
            store: Rc::new(RefCell::new(users)),
            latency,
        }
    }

    async fn wait(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    /// All users, newest first
    pub async fn list(&self) -> Vec<UserRecord> {
        self.wait().await;
        let mut users = self.store.borrow().clone();
        users.sort_by(|a, b| b.created_on.cmp(&a.created_on).then(a.name.cmp(&b.name)));
        users
    }

    /// Validate and store a new user
    pub async fn create(&self, draft: UserDraft) -> DocsResult<UserRecord> {
        self.wait().await;
        draft.validate()?;

        let email = draft.email.trim().to_lowercase();
        if self.store.borrow().iter().any(|u| u.email == email) {
            return Err(DocsError::validation(format!(
                "Ya existe un usuario con el correo '{email}'"
            )));
        }

        let record = draft.into_record(Local::now().date_naive())?;
        tracing::info!(id = %record.id, role = %record.role, "user created");
        self.store.borrow_mut().push(record.clone());
        Ok(record)
    }

    /// Remove a user and return the removed record
    pub async fn delete(&self, id: Uuid) -> DocsResult<UserRecord> {
        self.wait().await;
        let mut store = self.store.borrow_mut();
        let index = store
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| DocsError::NotFound(id.to_string()))?;
        let removed = store.remove(index);
        tracing::info!(id = %removed.id, "user deleted");
        Ok(removed)
    }
}

// ============================================================================
// Tests
// ============================================================================
