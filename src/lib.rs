//! **A library for working with OpenVEX documents.**
//!
//! `vex-tools` reads OpenVEX (Vulnerability Exploitability eXchange) documents,
//! answers the question "what does this document say about vulnerability V in
//! product P?", and derives a stable content-based identifier for a document.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: The [`Document`] / [`Statement`] / [`Product`] /
//!   [`Vulnerability`] data model, with serde mappings for the OpenVEX JSON
//!   wire format.
//! - **[`matching`]**: Package URL matching ([`PurlMatcher`]), vulnerability
//!   identity, statement selection ([`Document::matches`]) and effective
//!   statement resolution ([`Document::effective_statement`]).
//! - **[`canonical`]**: The canonical reduction of a document, its SHA-256
//!   hash ([`canonical_hash`]) and the public identifier derived from it.
//! - **[`parsers`]**: Loading documents and sniffing the JSON-LD `@context`.
//! - **[`config`]**: Document defaults and canonical id settings, loadable
//!   from `.vex-tools.yaml`.
//!
//! ## Getting Started
//!
//! ```no_run
//! use vex_tools::Document;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut doc = Document::load("path/to/vex.openvex.json")?;
//!
//!     if let Some(stmt) = doc.effective_statement("pkg:oci/alpine", "CVE-2023-1255") {
//!         println!("{}: {}", stmt.vulnerability.name, stmt.status);
//!     }
//!
//!     let id = doc.generate_canonical_id()?;
//!     println!("document id: {id}");
//!     Ok(())
//! }
//! ```
//!
//! ### Matching Package URLs
//!
//! A query purl matches a candidate when every component the query states
//! agrees with the candidate. Components the query leaves out are wildcards.
//!
//! ```
//! use vex_tools::purl_matches;
//!
//! assert!(purl_matches("pkg:oci/curl", "pkg:oci/curl@sha256:a1b2?arch=amd64"));
//! assert!(!purl_matches("pkg:oci/curl@sha256:a1b2?arch=amd64", "pkg:oci/curl"));
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod canonical;
pub mod config;
pub mod error;
pub mod matching;
pub mod model;
pub mod parsers;

// Re-export main types for convenience
pub use canonical::{canonical_bytes, canonical_hash, PUBLIC_ID_PREFIX};
pub use config::{CanonicalConfig, ConfigError, DocumentDefaults, Validatable, VexConfig};
pub use error::{ErrorContext, Result, VexError};
pub use matching::{alias_class, purl_matches, vulnerability_matches, PurlMatcher, StatementQuery};
pub use model::{
    Component, Document, Justification, Metadata, Product, Statement, Status, Subcomponent,
    Vulnerability,
};
pub use parsers::{
    is_openvex_context, load_document, parse_context, parse_document, parse_openvex_context,
};
