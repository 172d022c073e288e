//! Application configuration
//!
//! Loaded from a TOML file; every key is optional and falls back to the
//! defaults below.
//!
//! ```toml
//! [window]
//! title = "Gestión Documental"
//! width = 1280.0
//! height = 800.0
//!
//! [logging]
//! filter = "unidoc=debug,info"
//!
//! [services]
//! latency_ms = 250
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{DocsError, DocsResult};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "UNIDOC_CONFIG";

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "unidoc.toml";

// ============================================================================
// Config Sections
// ============================================================================

/// Desktop window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub min_width: f64,
    pub min_height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Gestión Documental Universitaria".to_string(),
            width: 1280.0,
            height: 800.0,
            min_width: 800.0,
            min_height: 600.0,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Mock data service settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Simulated round-trip time of every service call
    pub latency_ms: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self { latency_ms: 400 }
    }
}

impl ServiceConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub logging: LoggingConfig,
    pub services: ServiceConfig,
}

impl AppConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> DocsResult<Self> {
        let config: AppConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> DocsResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| DocsError::ConfigRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&source)
    }

    /// Locate the config file: `$UNIDOC_CONFIG`, then `./unidoc.toml`.
    ///
    /// Returns the defaults when neither exists. An explicitly named file
    /// that cannot be read is an error.
    pub fn discover() -> DocsResult<(Self, Option<PathBuf>)> {
        if let Ok(explicit) = std::env::var(CONFIG_ENV_VAR) {
            let path = PathBuf::from(explicit);
            return Self::load(&path).map(|config| (config, Some(path)));
        }

        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            return Self::load(&local).map(|config| (config, Some(local)));
        }

        Ok((Self::default(), None))
    }

    /// Reject values the window system cannot honor
    pub fn validate(&self) -> DocsResult<()> {
        let w = &self.window;
        if w.title.trim().is_empty() {
            return Err(DocsError::invalid_config("window.title must not be empty"));
        }
        for (name, value) in [
            ("window.width", w.width),
            ("window.height", w.height),
            ("window.min_width", w.min_width),
            ("window.min_height", w.min_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(DocsError::invalid_config(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        if w.min_width > w.width || w.min_height > w.height {
            return Err(DocsError::invalid_config(
                "window minimum size exceeds initial size",
            ));
        }
        if self.logging.filter.trim().is_empty() {
            return Err(DocsError::invalid_config("logging.filter must not be empty"));
        }
        if self.services.latency_ms > 10_000 {
            return Err(DocsError::invalid_config(format!(
                "services.latency_ms must be at most 10000, got {}",
                self.services.latency_ms
            )));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
