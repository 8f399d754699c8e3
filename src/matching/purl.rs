//! Package URL matching.
//!
//! Two purls match when the first one is a compatible, possibly less
//! specific, description of the second:
//!
//! - type, namespace and name must be equal
//! - an empty version on the query side matches any version
//! - every qualifier of the query must be present with the same value on the
//!   candidate; extra candidate qualifiers are ignored
//!
//! The relation is deliberately asymmetric:
//! `pkg:apk/wolfi/curl@8.1.2-r0` matches `pkg:apk/wolfi/curl@8.1.2-r0?arch=x86_64`
//! but not the other way round.

use packageurl::PackageUrl;
use std::collections::BTreeMap;
use std::str::FromStr;

/// The parts of a package URL that take part in matching.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PurlParts {
    ty: String,
    namespace: String,
    name: String,
    version: String,
    qualifiers: BTreeMap<String, String>,
}

impl PurlParts {
    fn parse(purl: &str) -> Option<Self> {
        match PackageUrl::from_str(purl) {
            Ok(parsed) => Some(Self {
                ty: parsed.ty().to_string(),
                namespace: parsed.namespace().unwrap_or_default().to_string(),
                name: parsed.name().to_string(),
                version: parsed.version().unwrap_or_default().to_string(),
                qualifiers: parsed
                    .qualifiers()
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            }),
            Err(err) => {
                tracing::debug!(purl, error = %err, "not a package URL, treating as no-match");
                None
            }
        }
    }

    fn accepts(&self, candidate: &Self) -> bool {
        if self.ty != candidate.ty
            || self.namespace != candidate.namespace
            || self.name != candidate.name
        {
            return false;
        }

        if !self.version.is_empty() && self.version != candidate.version {
            return false;
        }

        self.qualifiers
            .iter()
            .all(|(key, value)| candidate.qualifiers.get(key) == Some(value))
    }
}

/// A parsed query purl, reusable against many candidates.
///
/// Matching never fails: a query or candidate that is not a valid package
/// URL only matches a byte-identical string.
#[derive(Debug, Clone)]
pub struct PurlMatcher {
    raw: String,
    parts: Option<PurlParts>,
}

impl PurlMatcher {
    /// Parse `query` once for repeated matching.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        let raw = query.into();
        let parts = PurlParts::parse(&raw);
        Self { raw, parts }
    }

    /// The query string this matcher was built from.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.raw
    }

    /// Does the query designate `candidate`?
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        if self.raw == candidate {
            return true;
        }
        let Some(query) = &self.parts else {
            return false;
        };
        PurlParts::parse(candidate).is_some_and(|candidate| query.accepts(&candidate))
    }
}

/// Check whether purl `a` matches purl `b` (see module docs for the rules).
#[must_use]
pub fn purl_matches(a: &str, b: &str) -> bool {
    PurlMatcher::new(a).matches(b)
}
