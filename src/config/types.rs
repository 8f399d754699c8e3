//! Configuration types for vex-tools.

use super::defaults::{DEFAULT_AUTHOR, DEFAULT_CONTEXT, DEFAULT_ID_PREFIX, DEFAULT_ROLE};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// Unified Configuration
// ============================================================================

/// Top-level configuration, loadable from a YAML file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct VexConfig {
    /// Defaults stamped onto newly created documents
    pub document: DocumentDefaults,
    /// Canonical identifier generation
    pub canonical: CanonicalConfig,
}

impl VexConfig {
    /// Create a builder starting from the defaults.
    #[must_use]
    pub fn builder() -> VexConfigBuilder {
        VexConfigBuilder::default()
    }
}

/// Values used by [`Document::from_defaults`](crate::model::Document::from_defaults).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DocumentDefaults {
    /// JSON-LD context of new documents
    pub context: String,
    /// Author of new documents
    pub author: String,
    /// Role of the author
    pub role: String,
    /// Tool that produced the document
    pub tooling: String,
}

impl Default for DocumentDefaults {
    fn default() -> Self {
        Self {
            context: DEFAULT_CONTEXT.to_string(),
            author: DEFAULT_AUTHOR.to_string(),
            role: DEFAULT_ROLE.to_string(),
            tooling: String::new(),
        }
    }
}

/// Canonical identifier settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CanonicalConfig {
    /// Prefix placed before the content hash in generated ids
    pub id_prefix: String,
}

impl Default for CanonicalConfig {
    fn default() -> Self {
        Self {
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
        }
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for [`VexConfig`].
#[derive(Debug, Default)]
#[must_use]
pub struct VexConfigBuilder {
    config: VexConfig,
}

impl VexConfigBuilder {
    /// Set the JSON-LD context of new documents.
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.config.document.context = context.into();
        self
    }

    /// Set the author of new documents.
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.config.document.author = author.into();
        self
    }

    /// Set the author role of new documents.
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.config.document.role = role.into();
        self
    }

    /// Set the tooling string of new documents.
    pub fn tooling(mut self, tooling: impl Into<String>) -> Self {
        self.config.document.tooling = tooling.into();
        self
    }

    /// Set the canonical id prefix.
    pub fn id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.canonical.id_prefix = prefix.into();
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> VexConfig {
        self.config
    }
}
