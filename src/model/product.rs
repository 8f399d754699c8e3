//! Products, components and subcomponents referenced by statements.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Well-known keys of the `identifiers` map.
pub const IDENTIFIER_PURL: &str = "purl";
pub const IDENTIFIER_CPE22: &str = "cpe22";
pub const IDENTIFIER_CPE23: &str = "cpe23";

/// A software artifact, identified by its `@id` (typically a package URL).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    #[serde(rename = "@id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Additional identifiers keyed by type (`purl`, `cpe22`, `cpe23`)
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub identifiers: IndexMap<String, String>,
    /// Content hashes keyed by algorithm (`sha-256`, ...)
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub hashes: IndexMap<String, String>,
}

impl Component {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Does `identifier` designate this component?
    ///
    /// The `@id` is compared with package-URL semantics, where `identifier`
    /// is the (possibly less specific) query side. Other identifiers and
    /// hashes only match exactly.
    #[must_use]
    pub fn matches(&self, identifier: &str) -> bool {
        if identifier.is_empty() {
            return false;
        }
        if !self.id.is_empty() && crate::matching::purl_matches(identifier, &self.id) {
            return true;
        }
        self.identifiers
            .values()
            .chain(self.hashes.values())
            .any(|value| value == identifier)
    }

    /// The package URL of this component: the `@id` when it is one, else the
    /// `purl` identifier.
    #[must_use]
    pub fn purl(&self) -> Option<&str> {
        if self.id.starts_with("pkg:") {
            return Some(self.id.as_str());
        }
        self.identifiers.get(IDENTIFIER_PURL).map(String::as_str)
    }
}

/// An artifact embedded in a product, e.g. an OS package in a container image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subcomponent {
    #[serde(flatten)]
    pub component: Component,
}

impl Subcomponent {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            component: Component::new(id),
        }
    }
}

/// A product a statement applies to. Its identity is its component `@id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(flatten)]
    pub component: Component,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subcomponents: Vec<Subcomponent>,
}

impl Product {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            component: Component::new(id),
            subcomponents: Vec::new(),
        }
    }

    /// Builder-style helper to add a subcomponent.
    #[must_use]
    pub fn with_subcomponent(mut self, id: impl Into<String>) -> Self {
        self.subcomponents.push(Subcomponent::new(id));
        self
    }

    /// The product identifier used for matching.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.component.id
    }

    /// True if any subcomponent is designated by any of `subcomponent_ids`.
    #[must_use]
    pub fn matches_subcomponent<S: AsRef<str>>(&self, subcomponent_ids: &[S]) -> bool {
        self.subcomponents.iter().any(|sc| {
            subcomponent_ids
                .iter()
                .any(|query| crate::matching::purl_matches(query.as_ref(), &sc.component.id))
        })
    }
}
