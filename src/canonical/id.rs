//! Canonical document identifiers derived from the content hash.

use super::canonical_hash;
use crate::config::CanonicalConfig;
use crate::error::Result;
use crate::model::Document;

/// Prefix of identifiers for documents published in the OpenVEX public namespace.
pub const PUBLIC_ID_PREFIX: &str = "https://openvex.dev/docs/public/vex-";

impl Document {
    /// The identifier this document has or would get, without assigning it.
    ///
    /// An existing non-empty `@id` is returned unchanged; otherwise the id is
    /// [`PUBLIC_ID_PREFIX`] followed by the canonical hash.
    pub fn canonical_id(&self) -> Result<String> {
        self.canonical_id_with(PUBLIC_ID_PREFIX)
    }

    /// Like [`Document::canonical_id`] with a custom prefix.
    pub fn canonical_id_with(&self, prefix: &str) -> Result<String> {
        if !self.id.is_empty() {
            return Ok(self.id.clone());
        }
        Ok(format!("{prefix}{}", canonical_hash(self)?))
    }

    /// Return the document id, assigning the canonical id first if missing.
    ///
    /// An existing identifier is never overwritten. Callers sharing one
    /// document across threads must serialize this call themselves.
    pub fn generate_canonical_id(&mut self) -> Result<String> {
        self.generate_canonical_id_with(&CanonicalConfig::default())
    }

    /// Like [`Document::generate_canonical_id`] using the configured prefix.
    pub fn generate_canonical_id_with(&mut self, config: &CanonicalConfig) -> Result<String> {
        if self.id.is_empty() {
            self.id = self.canonical_id_with(&config.id_prefix)?;
            tracing::debug!(id = %self.id, "assigned canonical document id");
        }
        Ok(self.id.clone())
    }
}
