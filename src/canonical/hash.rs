//! Canonical encoding and content hash of a document.
//!
//! The canonical form keeps only the fields that define what a document
//! asserts:
//!
//! - the document timestamp, as unix seconds plus a sub-second nanosecond
//!   part that is only written when non-zero
//! - per statement, in order: vulnerability id, name and sorted aliases; the
//!   status; the statement timestamp (same encoding) only when it differs
//!   from the document's; per product, in order, the product id and its
//!   subcomponent ids
//!
//! Identifier, version, authorship, tooling, supplier and all free-text
//! statement fields are left out, so editing them never changes the hash.
//! The form is encoded as compact JSON with a fixed field order and hashed
//! with SHA-256.

use crate::error::{EncodingErrorKind, Result, VexError};
use crate::model::{Document, Product, Statement, Status, Vulnerability};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};

#[derive(Debug, Serialize)]
struct CanonicalDocument<'a> {
    timestamp: i64,
    #[serde(skip_serializing_if = "is_zero")]
    timestamp_nanos: u32,
    statements: Vec<CanonicalStatement<'a>>,
}

#[derive(Debug, Serialize)]
struct CanonicalStatement<'a> {
    vulnerability: CanonicalVulnerability<'a>,
    status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp_nanos: Option<u32>,
    products: Vec<CanonicalProduct<'a>>,
}

#[derive(Debug, Serialize)]
struct CanonicalVulnerability<'a> {
    id: &'a str,
    name: &'a str,
    aliases: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
struct CanonicalProduct<'a> {
    id: &'a str,
    subcomponents: Vec<&'a str>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero(nanos: &u32) -> bool {
    *nanos == 0
}

impl<'a> CanonicalVulnerability<'a> {
    fn from_vulnerability(vuln: &'a Vulnerability) -> Self {
        let mut aliases: Vec<&str> = vuln.aliases.iter().map(String::as_str).collect();
        aliases.sort_unstable();
        Self {
            id: &vuln.id,
            name: &vuln.name,
            aliases,
        }
    }
}

impl<'a> CanonicalProduct<'a> {
    fn from_product(product: &'a Product) -> Self {
        Self {
            id: product.id(),
            subcomponents: product
                .subcomponents
                .iter()
                .map(|sc| sc.component.id.as_str())
                .collect(),
        }
    }
}

impl<'a> CanonicalStatement<'a> {
    fn from_statement(statement: &'a Statement, document_timestamp: DateTime<Utc>) -> Self {
        let timestamp = statement.timestamp.filter(|ts| *ts != document_timestamp);
        Self {
            vulnerability: CanonicalVulnerability::from_vulnerability(&statement.vulnerability),
            status: statement.status,
            timestamp: timestamp.map(|ts| ts.timestamp()),
            timestamp_nanos: timestamp
                .map(|ts| ts.timestamp_subsec_nanos())
                .filter(|nanos| *nanos != 0),
            products: statement.products.iter().map(CanonicalProduct::from_product).collect(),
        }
    }
}

/// Deterministic byte encoding of the identity-relevant parts of `document`.
///
/// Fails with an encoding error when the document has no timestamp.
pub fn canonical_bytes(document: &Document) -> Result<Vec<u8>> {
    let timestamp = document.timestamp().ok_or_else(|| {
        VexError::encoding("building canonical form", EncodingErrorKind::MissingTimestamp)
    })?;

    let canonical = CanonicalDocument {
        timestamp: timestamp.timestamp(),
        timestamp_nanos: timestamp.timestamp_subsec_nanos(),
        statements: document
            .statements
            .iter()
            .map(|s| CanonicalStatement::from_statement(s, timestamp))
            .collect(),
    };

    serde_json::to_vec(&canonical).map_err(|err| {
        VexError::encoding(
            "serializing canonical form",
            EncodingErrorKind::Serialization(err.to_string()),
        )
    })
}

/// Lowercase hex SHA-256 of [`canonical_bytes`].
pub fn canonical_hash(document: &Document) -> Result<String> {
    let bytes = canonical_bytes(document)?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    let digest = format!("{:x}", hasher.finalize());

    tracing::debug!(
        statements = document.statements.len(),
        canonical_len = bytes.len(),
        digest = %digest,
        "computed canonical hash"
    );
    Ok(digest)
}

impl Document {
    /// Content hash over the identity-relevant fields of this document.
    pub fn canonical_hash(&self) -> Result<String> {
        canonical_hash(self)
    }
}
