//! Statement matching and effective statement resolution.
//!
//! Everything in this module is total: no function here returns an error.
//! Unparsable package URLs degrade to "no match" (unless byte-identical), and
//! a query that selects nothing yields an empty vector or `None`.
//!
//! # Example
//!
//! ```ignore
//! use vex_tools::Document;
//!
//! let doc = Document::load("vex.openvex.json")?;
//!
//! // Every statement about the subject, in document order
//! let all = doc.matches("CVE-2023-1255", "pkg:oci/alpine", &["pkg:apk/alpine/libcrypto3"]);
//!
//! // The statement currently in force
//! if let Some(stmt) = doc.effective_statement("pkg:oci/alpine", "CVE-2023-1255") {
//!     println!("{}", stmt.status);
//! }
//! ```

mod effective;
mod purl;
mod statements;
mod vulnerability;

pub use effective::alias_class;
pub use purl::{purl_matches, PurlMatcher};
pub use statements::StatementQuery;
pub use vulnerability::vulnerability_matches;
