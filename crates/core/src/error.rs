//! Error types for unidoc
//!
//! Presentation primitives never fail; the errors here come from the
//! surrounding application: configuration loading, the desktop host
//! bridge, and the mock data services.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for unidoc
#[derive(Debug, Error)]
pub enum DocsError {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Configuration file could not be read
    #[error("Failed to read config file '{path}': {message}")]
    ConfigRead { path: PathBuf, message: String },

    /// Configuration file is not valid TOML for the expected schema
    #[error("Invalid config format: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration parsed but holds unusable values
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ========================================================================
    // Host Errors
    // ========================================================================
    /// The desktop host bridge (script evaluation, key forwarding) failed
    #[error("Host bridge error: {0}")]
    Host(String),

    // ========================================================================
    // Data Errors
    // ========================================================================
    /// A draft record failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Required fields are missing from a draft record
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    /// A record was not found
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Seed data could not be decoded
    #[error("Invalid seed data: {0}")]
    SeedData(String),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DocsError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        DocsError::Validation(msg.into())
    }

    /// Create an invalid configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        DocsError::InvalidConfig(msg.into())
    }

    /// Create a host bridge error
    pub fn host(msg: impl Into<String>) -> Self {
        DocsError::Host(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        DocsError::Internal(msg.into())
    }

    /// Check if this error is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            DocsError::ConfigRead { .. } | DocsError::ConfigParse(_) | DocsError::InvalidConfig(_)
        )
    }

    /// Check if this error is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DocsError::Validation(_) | DocsError::MissingFields(_)
        )
    }

    /// Field labels the user still has to fill in, if this is a
    /// missing-fields error
    pub fn missing_fields(&self) -> &[String] {
        match self {
            DocsError::MissingFields(fields) => fields,
            _ => &[],
        }
    }
}

/// Result type alias using DocsError
pub type DocsResult<T> = Result<T, DocsError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_validation_error() {
        let err = DocsError::validation("Correo inválido");
        assert!(err.is_validation());
        assert!(!err.is_config());
        assert_eq!(err.to_string(), "Validation error: Correo inválido");
    }

    #[test]
    fn test_missing_fields_message() {
        let err = DocsError::MissingFields(vec!["Nombre".to_string(), "Correo".to_string()]);
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Missing required fields: Nombre, Correo");
        assert_eq!(err.missing_fields(), ["Nombre", "Correo"]);
    }

    #[test]
    fn test_missing_fields_empty_for_other_errors() {
        let err = DocsError::NotFound("user".to_string());
        assert!(err.missing_fields().is_empty());
    }

    #[test]
    fn test_config_classification() {
        let err = DocsError::invalid_config("window.width must be positive");
        assert!(err.is_config());

        let err = DocsError::ConfigRead {
            path: PathBuf::from("/nope/unidoc.toml"),
            message: "not found".to_string(),
        };
        assert!(err.is_config());
        assert_eq!(
            err.to_string(),
            "Failed to read config file '/nope/unidoc.toml': not found"
        );
    }

    #[test]
    fn test_toml_error_converts() {
        let parse_err = toml::from_str::<toml::Value>("window = [").unwrap_err();
        let err: DocsError = parse_err.into();
        assert!(err.is_config());
    }
}
