//! Vulnerability references inside VEX statements.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// The vulnerability a statement talks about.
///
/// The primary id, the name and every alias form one identity class: a query
/// for any of them selects the statement. Some producers only fill `name`, so
/// it is treated as an identifier too.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vulnerability {
    /// Primary identifier, usually an IRI or a CVE id
    #[serde(rename = "@id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Human name, e.g. `CVE-2023-1255`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Alternate identifiers; insertion order is kept for serialization
    #[serde(default, skip_serializing_if = "IndexSet::is_empty")]
    pub aliases: IndexSet<String>,
}

impl Vulnerability {
    /// Create a vulnerability known by `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Create a vulnerability with a primary `@id`.
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Builder-style helper to add an alias.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.insert(alias.into());
        self
    }

    /// True when the vulnerability can be selected by a query at all.
    #[must_use]
    pub fn is_matchable(&self) -> bool {
        !self.id.is_empty() || !self.name.is_empty()
    }

    /// Every non-empty identifier of this vulnerability: id, name, aliases.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        [self.id.as_str(), self.name.as_str()]
            .into_iter()
            .chain(self.aliases.iter().map(String::as_str))
            .filter(|id| !id.is_empty())
    }

    /// Exact, case-sensitive identity check against a query id.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        crate::matching::vulnerability_matches(query, &self.id, &self.name, &self.aliases)
    }
}
