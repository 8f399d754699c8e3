//! Configuration validation for vex-tools.

use super::types::{CanonicalConfig, DocumentDefaults, VexConfig};
use crate::error::{Result, VexError};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

impl Validatable for VexConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = self.document.validate();
        errors.extend(self.canonical.validate());
        errors
    }
}

impl Validatable for DocumentDefaults {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.context.is_empty() {
            errors.push(ConfigError {
                field: "document.context".to_string(),
                message: "Context must not be empty".to_string(),
            });
        } else if !(self.context.starts_with("https://") || self.context.starts_with("http://")) {
            errors.push(ConfigError {
                field: "document.context".to_string(),
                message: format!("Context must be an http(s) URL, got '{}'", self.context),
            });
        }

        if self.author.trim().is_empty() {
            errors.push(ConfigError {
                field: "document.author".to_string(),
                message: "Author must not be empty".to_string(),
            });
        }

        errors
    }
}

impl Validatable for CanonicalConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.id_prefix.is_empty() {
            errors.push(ConfigError {
                field: "canonical.id_prefix".to_string(),
                message: "Id prefix must not be empty".to_string(),
            });
        }
        errors
    }
}

impl VexConfig {
    /// Validate and fold every problem into a single [`VexError::Config`].
    pub fn ensure_valid(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            return Ok(());
        }
        let joined = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Err(VexError::config(joined))
    }
}
