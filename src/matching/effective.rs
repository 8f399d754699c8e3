//! Effective statement resolution.
//!
//! Among all statements about one (vulnerability, product) subject, the most
//! recent one governs. Recency is the statement timestamp, or the document
//! timestamp for statements without one. On equal timestamps the statement
//! declared last wins.
//!
//! Vulnerability identity is widened to the alias class of the query inside
//! the document: if one statement says `CVE-X` has alias `GHSA-Y` and another
//! statement is keyed by `GHSA-Y` alone, both are about the same subject.

use super::StatementQuery;
use crate::model::{Document, Statement};
use indexmap::IndexSet;

/// Every identifier reachable from `vulnerability_id` through statements of
/// `document` that share an identifier with the class, up to a fixed point.
#[must_use]
pub fn alias_class<'d>(document: &'d Document, vulnerability_id: &'d str) -> IndexSet<&'d str> {
    let mut class: IndexSet<&str> = IndexSet::new();
    if vulnerability_id.is_empty() {
        return class;
    }
    class.insert(vulnerability_id);

    loop {
        let mut grew = false;
        for statement in &document.statements {
            let vuln = &statement.vulnerability;
            if vuln.identifiers().any(|id| class.contains(id)) {
                for id in vuln.identifiers() {
                    grew |= class.insert(id);
                }
            }
        }
        if !grew {
            return class;
        }
    }
}

impl Document {
    /// The statement currently governing `vulnerability_id` for `product_id`.
    ///
    /// Products are selected exactly as [`Document::matches`] selects them,
    /// without subcomponents; only the vulnerability side is widened to its
    /// alias class. Returns `None` when no statement matches.
    #[must_use]
    pub fn effective_statement(
        &self,
        product_id: &str,
        vulnerability_id: &str,
    ) -> Option<&Statement> {
        let class = alias_class(self, vulnerability_id);
        if class.is_empty() {
            return None;
        }
        let query = StatementQuery::new(vulnerability_id, product_id);

        let mut effective: Option<&Statement> = None;
        for statement in &self.statements {
            let about_vulnerability = statement
                .vulnerability
                .identifiers()
                .any(|id| class.contains(id));
            if !about_vulnerability
                || !statement.products.iter().any(|p| query.matches_product(p))
            {
                continue;
            }

            let replaces = effective.map_or(true, |current| {
                self.effective_timestamp(statement) >= self.effective_timestamp(current)
            });
            if replaces {
                effective = Some(statement);
            }
        }

        if let Some(statement) = effective {
            tracing::debug!(
                vulnerability = vulnerability_id,
                product = product_id,
                status = %statement.status,
                aliases = class.len(),
                "resolved effective statement"
            );
        }
        effective
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Product, Status, Vulnerability};
    use chrono::{DateTime, TimeZone, Utc};

    const PKG_1: &str = "pkg:deb/pkg@1.0";
    const PKG_2: &str = "pkg:deb/pkg@2.0";

    fn date1() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 4, 17, 20, 34, 58).unwrap()
    }

    fn date2() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 4, 18, 20, 34, 58).unwrap()
    }

    fn statement(
        vuln: Vulnerability,
        ts: Option<DateTime<Utc>>,
        product: &str,
        status: Status,
    ) -> Statement {
        let mut s = Statement::new(vuln, status).with_product(Product::new(product));
        s.timestamp = ts;
        s
    }

    fn cve(name: &str) -> Vulnerability {
        Vulnerability::new(name)
    }

    fn doc(statements: Vec<Statement>) -> Document {
        Document {
            statements,
            ..Document::default()
        }
    }

    #[test]
    fn test_single_statement() {
        let d = doc(vec![statement(
            cve("CVE-2014-123456"),
            Some(date1()),
            PKG_1,
            Status::NotAffected,
        )]);
        let s = d.effective_statement(PKG_1, "CVE-2014-123456").unwrap();
        assert_eq!(s.timestamp, Some(date1()));
        assert_eq!(s.status, Status::NotAffected);
    }

    #[test]
    fn test_later_statement_supersedes() {
        let d = doc(vec![
            statement(
                cve("CVE-2014-123456"),
                Some(date1()),
                PKG_1,
                Status::UnderInvestigation,
            ),
            statement(
                cve("CVE-2014-123456"),
                Some(date2()),
                PKG_1,
                Status::NotAffected,
            ),
        ]);
        let s = d.effective_statement(PKG_1, "CVE-2014-123456").unwrap();
        assert_eq!(s.timestamp, Some(date2()));
        assert_eq!(s.status, Status::NotAffected);
    }

    #[test]
    fn test_recency_not_position() {
        let d = doc(vec![
            statement(cve("CVE-1"), Some(date2()), PKG_1, Status::Fixed),
            statement(cve("CVE-1"), Some(date1()), PKG_1, Status::Affected),
        ]);
        let s = d.effective_statement(PKG_1, "CVE-1").unwrap();
        assert_eq!(s.status, Status::Fixed);
    }

    #[test]
    fn test_different_products_resolve_independently() {
        let d = doc(vec![
            statement(
                cve("CVE-2014-123456"),
                Some(date1()),
                PKG_1,
                Status::UnderInvestigation,
            ),
            statement(
                cve("CVE-2014-123456"),
                Some(date2()),
                PKG_2,
                Status::NotAffected,
            ),
        ]);
        let s = d.effective_statement(PKG_1, "CVE-2014-123456").unwrap();
        assert_eq!(s.timestamp, Some(date1()));
        assert_eq!(s.status, Status::UnderInvestigation);

        let s = d.effective_statement(PKG_2, "CVE-2014-123456").unwrap();
        assert_eq!(s.status, Status::NotAffected);
    }

    #[test]
    fn test_query_by_alias() {
        let d = doc(vec![
            statement(
                cve("CVE-2014-123456").with_alias("ghsa-92xj-mqp7-vmcj"),
                Some(date1()),
                PKG_1,
                Status::UnderInvestigation,
            ),
            statement(
                Vulnerability::with_id("CVE-2014-123456"),
                Some(date2()),
                PKG_2,
                Status::NotAffected,
            ),
        ]);
        let s = d.effective_statement(PKG_1, "ghsa-92xj-mqp7-vmcj").unwrap();
        assert_eq!(s.timestamp, Some(date1()));
        assert_eq!(s.status, Status::UnderInvestigation);
    }

    #[test]
    fn test_alias_and_primary_forms_compete_by_recency() {
        let d = doc(vec![
            statement(
                Vulnerability::with_id("CVE-2023-1").with_alias("GHSA-aaaa-bbbb-cccc"),
                Some(date1()),
                PKG_1,
                Status::UnderInvestigation,
            ),
            statement(
                cve("GHSA-aaaa-bbbb-cccc"),
                Some(date2()),
                PKG_1,
                Status::Fixed,
            ),
        ]);

        for query in ["CVE-2023-1", "GHSA-aaaa-bbbb-cccc"] {
            let s = d.effective_statement(PKG_1, query).unwrap();
            assert_eq!(s.status, Status::Fixed, "query {query}");
        }
    }

    #[test]
    fn test_tie_goes_to_last_declared() {
        let d = doc(vec![
            statement(cve("CVE-1"), Some(date1()), PKG_1, Status::Affected),
            statement(cve("CVE-1"), Some(date1()), PKG_1, Status::Fixed),
        ]);
        let s = d.effective_statement(PKG_1, "CVE-1").unwrap();
        assert_eq!(s.status, Status::Fixed);
    }

    #[test]
    fn test_document_timestamp_fills_in() {
        let mut d = doc(vec![
            statement(cve("CVE-1"), Some(date1()), PKG_1, Status::Affected),
            statement(cve("CVE-1"), None, PKG_1, Status::Fixed),
            statement(cve("CVE-1"), Some(date2()), PKG_1, Status::NotAffected),
        ]);
        d.metadata.timestamp = Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let s = d.effective_statement(PKG_1, "CVE-1").unwrap();
        assert_eq!(s.status, Status::Fixed);

        d.metadata.timestamp = Some(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap());
        let s = d.effective_statement(PKG_1, "CVE-1").unwrap();
        assert_eq!(s.status, Status::NotAffected);
    }

    #[test]
    fn test_no_match_is_none() {
        let d = doc(vec![statement(
            cve("CVE-1"),
            Some(date1()),
            PKG_1,
            Status::Affected,
        )]);
        assert!(d.effective_statement(PKG_1, "CVE-2").is_none());
        assert!(d.effective_statement("pkg:deb/other@1.0", "CVE-1").is_none());
        assert!(d.effective_statement(PKG_1, "").is_none());
    }

    #[test]
    fn test_empty_product_id_resolves_nothing() {
        let mut stmt = Statement::new(cve("CVE-1"), Status::Fixed);
        stmt.products.push(Product::default());
        let d = doc(vec![stmt]);

        assert!(d.matches("CVE-1", "", &[] as &[&str]).is_empty());
        assert!(d.effective_statement("", "CVE-1").is_none());
    }

    #[test]
    fn test_alias_class_is_transitive() {
        let d = doc(vec![
            statement(
                Vulnerability::with_id("A").with_alias("B"),
                None,
                "pkg:deb/x",
                Status::Fixed,
            ),
            statement(
                Vulnerability::with_id("C").with_alias("B"),
                None,
                "pkg:deb/y",
                Status::Fixed,
            ),
            statement(Vulnerability::with_id("D"), None, "pkg:deb/z", Status::Fixed),
        ]);
        let class: Vec<_> = alias_class(&d, "A").into_iter().collect();
        assert_eq!(class, ["A", "B", "C"]);
        assert!(alias_class(&d, "").is_empty());
    }
}
