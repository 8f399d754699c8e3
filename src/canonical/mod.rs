//! Content-derived identity for VEX documents.
//!
//! [`canonical_hash`] reduces a document to the fields that define what it
//! asserts and hashes that reduction. [`Document::generate_canonical_id`]
//! turns the hash into a public identifier when the document has none.
//!
//! [`Document::generate_canonical_id`]: crate::model::Document::generate_canonical_id

mod hash;
mod id;

pub use hash::{canonical_bytes, canonical_hash};
pub use id::PUBLIC_ID_PREFIX;
