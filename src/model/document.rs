//! The OpenVEX document container.

use super::{sort_statements, Statement};
use crate::config::DocumentDefaults;
use crate::error::{Result, VexError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Base IRI of the OpenVEX JSON-LD vocabulary.
pub const OPENVEX_CONTEXT: &str = "https://openvex.dev/ns";

/// Versioned context written into newly created documents.
pub const OPENVEX_CONTEXT_V0_2_0: &str = "https://openvex.dev/ns/v0.2.0";

/// Authorship and provenance fields of a document.
///
/// None of these take part in the canonical hash except `timestamp`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub author: String,
    #[serde(rename = "role", default, skip_serializing_if = "String::is_empty")]
    pub author_role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub version: u32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tooling: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub supplier: String,
}

/// A VEX document: metadata plus an ordered list of statements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// JSON-LD context, e.g. `https://openvex.dev/ns/v0.2.0`
    #[serde(rename = "@context", default)]
    pub context: String,
    /// Document identifier; empty until assigned
    #[serde(rename = "@id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(flatten)]
    pub metadata: Metadata,
    #[serde(default)]
    pub statements: Vec<Statement>,
}

impl Document {
    /// Create an empty document using the built-in defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::from_defaults(&DocumentDefaults::default())
    }

    /// Create an empty document stamped now, at version 1.
    #[must_use]
    pub fn from_defaults(defaults: &DocumentDefaults) -> Self {
        Self {
            context: defaults.context.clone(),
            id: String::new(),
            metadata: Metadata {
                author: defaults.author.clone(),
                author_role: defaults.role.clone(),
                timestamp: Some(Utc::now()),
                last_updated: None,
                version: 1,
                tooling: defaults.tooling.clone(),
                supplier: String::new(),
            },
            statements: Vec::new(),
        }
    }

    /// The document timestamp.
    #[must_use]
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.metadata.timestamp
    }

    /// Append a statement, keeping declaration order.
    pub fn add_statement(&mut self, statement: Statement) {
        self.statements.push(statement);
    }

    /// Effective timestamp of `statement` within this document.
    #[must_use]
    pub fn effective_timestamp(&self, statement: &Statement) -> Option<DateTime<Utc>> {
        statement.effective_timestamp(self.metadata.timestamp)
    }

    /// Statements whose vulnerability is designated by `vulnerability_id`,
    /// in document order.
    #[must_use]
    pub fn statements_by_vulnerability(&self, vulnerability_id: &str) -> Vec<&Statement> {
        self.statements
            .iter()
            .filter(|s| s.vulnerability.matches(vulnerability_id))
            .collect()
    }

    /// Sort the statements oldest first by effective timestamp.
    pub fn sort_statements(&mut self) {
        let timestamp = self.metadata.timestamp;
        sort_statements(&mut self.statements, timestamp);
    }

    /// Validate every statement, reporting the first failure with its index.
    pub fn validate(&self) -> Result<()> {
        for (index, statement) in self.statements.iter().enumerate() {
            statement.validate().map_err(|err| match err {
                VexError::Validation(msg) => {
                    VexError::validation(format!("statement #{index}: {msg}"))
                }
                other => other,
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Product, Status, Vulnerability};
    use chrono::TimeZone;

    #[test]
    fn test_new_document_defaults() {
        let doc = Document::new();
        assert_eq!(doc.context, OPENVEX_CONTEXT_V0_2_0);
        assert_eq!(doc.metadata.author, "Unknown Author");
        assert_eq!(doc.metadata.author_role, "Document Creator");
        assert_eq!(doc.metadata.version, 1);
        assert!(doc.timestamp().is_some());
        assert!(doc.id.is_empty());
    }

    #[test]
    fn test_metadata_is_flattened_on_the_wire() {
        let mut doc = Document::default();
        doc.metadata.author = "John Doe".to_string();
        doc.metadata.author_role = "VEX Writer Extraordinaire".to_string();
        doc.metadata.timestamp = Some(Utc.with_ymd_and_hms(2023, 1, 8, 18, 2, 3).unwrap());

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["author"], "John Doe");
        assert_eq!(json["role"], "VEX Writer Extraordinaire");
        assert_eq!(json["timestamp"], "2023-01-08T18:02:03Z");
        assert!(json.get("@id").is_none());
        assert!(json.get("metadata").is_none());
    }

    #[test]
    fn test_statements_by_vulnerability_uses_aliases() {
        let mut doc = Document::default();
        doc.add_statement(Statement::new(
            Vulnerability::new("CVE-2014-123456").with_alias("ghsa-92xj-mqp7-vmcj"),
            Status::UnderInvestigation,
        ));
        doc.add_statement(Statement::new(
            Vulnerability::with_id("CVE-2020-0001"),
            Status::Fixed,
        ));

        assert_eq!(doc.statements_by_vulnerability("ghsa-92xj-mqp7-vmcj").len(), 1);
        assert_eq!(doc.statements_by_vulnerability("CVE-2020-0001").len(), 1);
        assert!(doc.statements_by_vulnerability("CVE-1999-0001").is_empty());
    }

    #[test]
    fn test_validate_reports_statement_index() {
        let mut doc = Document::new();
        let mut ok = Statement::new(Vulnerability::new("CVE-1"), Status::Fixed);
        ok.products.push(Product::new("pkg:deb/pkg@1.0"));
        doc.add_statement(ok);
        doc.add_statement(Statement::new(Vulnerability::new("CVE-2"), Status::Affected));

        match doc.validate() {
            Err(VexError::Validation(msg)) => assert!(msg.starts_with("statement #1:"), "{msg}"),
            other => panic!("Expected validation error, got {other:?}"),
        }
    }
}
