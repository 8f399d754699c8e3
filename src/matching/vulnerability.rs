//! Vulnerability identity: primary id, name and aliases as one class.

use indexmap::IndexSet;

/// Does `query` name the vulnerability described by `id`, `name` and `aliases`?
///
/// Comparison is exact and case-sensitive. Empty fields never match, so a
/// vulnerability without any identifier cannot be selected.
#[must_use]
pub fn vulnerability_matches(
    query: &str,
    id: &str,
    name: &str,
    aliases: &IndexSet<String>,
) -> bool {
    if query.is_empty() {
        return false;
    }
    id == query || name == query || aliases.contains(query)
}
