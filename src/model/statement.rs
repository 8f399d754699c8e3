//! VEX statements and their closed status/justification vocabularies.

use super::{Product, Vulnerability};
use crate::error::{ParseErrorKind, Result, VexError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Exploitability status asserted by a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Status {
    NotAffected,
    Affected,
    Fixed,
    UnderInvestigation,
}

impl Status {
    /// All statuses, in wire-vocabulary order.
    pub const ALL: [Self; 4] = [
        Self::NotAffected,
        Self::Affected,
        Self::Fixed,
        Self::UnderInvestigation,
    ];

    /// Wire representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotAffected => "not_affected",
            Self::Affected => "affected",
            Self::Fixed => "fixed",
            Self::UnderInvestigation => "under_investigation",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = VexError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| VexError::invalid_value("status", format!("unknown status '{s}'")))
    }
}

impl TryFrom<String> for Status {
    type Error = ParseErrorKind;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        s.parse().map_err(VexError::into_parse_kind)
    }
}

/// Reason a product is `not_affected` by a vulnerability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Justification {
    ComponentNotPresent,
    VulnerableCodeNotPresent,
    VulnerableCodeNotInExecutePath,
    VulnerableCodeCannotBeControlledByAdversary,
    InlineMitigationsAlreadyExist,
}

impl Justification {
    pub const ALL: [Self; 5] = [
        Self::ComponentNotPresent,
        Self::VulnerableCodeNotPresent,
        Self::VulnerableCodeNotInExecutePath,
        Self::VulnerableCodeCannotBeControlledByAdversary,
        Self::InlineMitigationsAlreadyExist,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ComponentNotPresent => "component_not_present",
            Self::VulnerableCodeNotPresent => "vulnerable_code_not_present",
            Self::VulnerableCodeNotInExecutePath => "vulnerable_code_not_in_execute_path",
            Self::VulnerableCodeCannotBeControlledByAdversary => {
                "vulnerable_code_cannot_be_controlled_by_adversary"
            }
            Self::InlineMitigationsAlreadyExist => "inline_mitigations_already_exist",
        }
    }
}

impl fmt::Display for Justification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Justification {
    type Err = VexError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|j| j.as_str() == s)
            .ok_or_else(|| {
                VexError::invalid_value("justification", format!("unknown justification '{s}'"))
            })
    }
}

impl TryFrom<String> for Justification {
    type Error = ParseErrorKind;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        s.parse().map_err(VexError::into_parse_kind)
    }
}

/// A single VEX assertion: a vulnerability, the products it concerns and
/// their status.
///
/// Only the vulnerability, products, status and (when it differs from the
/// document's) the timestamp take part in document identity. The free-text
/// fields are descriptive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    /// Optional statement identifier
    #[serde(rename = "@id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub vulnerability: Vulnerability,
    /// Statement time; the document timestamp applies when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub products: Vec<Product>,
    pub status: Status,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub status_notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justification: Option<Justification>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub impact_statement: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub action_statement: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_statement_timestamp: Option<DateTime<Utc>>,
}

impl Statement {
    /// Create a statement about `vulnerability` with the given status and no products.
    #[must_use]
    pub fn new(vulnerability: Vulnerability, status: Status) -> Self {
        Self {
            id: String::new(),
            vulnerability,
            timestamp: None,
            last_updated: None,
            products: Vec::new(),
            status,
            status_notes: String::new(),
            justification: None,
            impact_statement: String::new(),
            action_statement: String::new(),
            action_statement_timestamp: None,
        }
    }

    /// Builder-style helper to add a product.
    #[must_use]
    pub fn with_product(mut self, product: Product) -> Self {
        self.products.push(product);
        self
    }

    /// Builder-style helper to set the statement timestamp.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// The statement's own timestamp, or `document_timestamp` when unset.
    #[must_use]
    pub fn effective_timestamp(
        &self,
        document_timestamp: Option<DateTime<Utc>>,
    ) -> Option<DateTime<Utc>> {
        self.timestamp.or(document_timestamp)
    }

    /// Check the status-dependent field rules of an OpenVEX statement.
    pub fn validate(&self) -> Result<()> {
        if !self.vulnerability.is_matchable() {
            return Err(VexError::validation(
                "vulnerability must have an id or a name",
            ));
        }

        match self.status {
            Status::NotAffected => {
                if self.justification.is_none() && self.impact_statement.is_empty() {
                    return Err(VexError::validation(
                        "either justification or impact statement must be set when status is not_affected",
                    ));
                }
                if !self.action_statement.is_empty() {
                    return Err(VexError::validation(
                        "action statement must not be set when status is not_affected",
                    ));
                }
            }
            status => {
                if self.justification.is_some() {
                    return Err(VexError::validation(format!(
                        "justification is only valid with not_affected (status is {status})"
                    )));
                }
                if !self.impact_statement.is_empty() {
                    return Err(VexError::validation(format!(
                        "impact statement is only valid with not_affected (status is {status})"
                    )));
                }
                if status == Status::Affected && self.action_statement.is_empty() {
                    return Err(VexError::validation(
                        "action statement must be set when status is affected",
                    ));
                }
            }
        }

        Ok(())
    }
}

/// Stable sort of statements by effective timestamp, oldest first.
///
/// Statements without any effective timestamp sort before dated ones.
pub fn sort_statements(statements: &mut [Statement], document_timestamp: Option<DateTime<Utc>>) {
    statements.sort_by_key(|s| s.effective_timestamp(document_timestamp));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn cve() -> Vulnerability {
        Vulnerability::new("CVE-2023-1255")
    }

    #[test]
    fn test_status_wire_mapping() {
        for status in Status::ALL {
            assert_eq!(status.as_str().parse::<Status>().unwrap(), status);
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
        assert!("maybe".parse::<Status>().is_err());
        assert!(serde_json::from_str::<Status>("\"Affected\"").is_err());
    }

    #[test]
    fn test_justification_wire_mapping() {
        for j in Justification::ALL {
            assert_eq!(j.as_str().parse::<Justification>().unwrap(), j);
        }
        assert!("because".parse::<Justification>().is_err());
        assert_eq!(
            serde_json::from_str::<Justification>("\"component_not_present\"").unwrap(),
            Justification::ComponentNotPresent
        );
    }

    #[test]
    fn test_unknown_wire_value_is_invalid_value() {
        match Status::try_from("maybe".to_string()) {
            Err(ParseErrorKind::InvalidValue { field, message }) => {
                assert_eq!(field, "status");
                assert_eq!(message, "unknown status 'maybe'");
            }
            other => panic!("Expected InvalidValue, got {other:?}"),
        }

        let err = serde_json::from_str::<Justification>("\"because\"").unwrap_err();
        assert!(
            err.to_string()
                .starts_with("Invalid field value for 'justification'"),
            "{err}"
        );
    }

    #[test]
    fn test_effective_timestamp_falls_back_to_document() {
        let doc_ts = Utc.with_ymd_and_hms(2023, 4, 17, 20, 34, 58).unwrap();
        let own_ts = Utc.with_ymd_and_hms(2023, 4, 18, 20, 34, 58).unwrap();

        let stmt = Statement::new(cve(), Status::Fixed);
        assert_eq!(stmt.effective_timestamp(Some(doc_ts)), Some(doc_ts));
        assert_eq!(stmt.effective_timestamp(None), None);

        let stmt = stmt.with_timestamp(own_ts);
        assert_eq!(stmt.effective_timestamp(Some(doc_ts)), Some(own_ts));
    }

    #[test]
    fn test_validate_not_affected_rules() {
        let mut stmt = Statement::new(cve(), Status::NotAffected);
        assert!(stmt.validate().is_err());

        stmt.justification = Some(Justification::ComponentNotPresent);
        assert!(stmt.validate().is_ok());

        stmt.action_statement = "Upgrade".to_string();
        assert!(stmt.validate().is_err());
    }

    #[test]
    fn test_validate_affected_requires_action() {
        let mut stmt = Statement::new(cve(), Status::Affected);
        assert!(stmt.validate().is_err());

        stmt.action_statement = "Upgrade to 1.2.3".to_string();
        assert!(stmt.validate().is_ok());

        stmt.impact_statement = "not reachable".to_string();
        assert!(stmt.validate().is_err());
    }

    #[test]
    fn test_validate_requires_vulnerability_identity() {
        let stmt = Statement::new(Vulnerability::default(), Status::Fixed);
        assert!(matches!(stmt.validate(), Err(VexError::Validation(_))));
    }

    #[test]
    fn test_sort_statements_is_stable_and_uses_document_time() {
        let early = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let doc_ts = Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2023, 12, 1, 0, 0, 0).unwrap();

        let mut statements = vec![
            Statement::new(Vulnerability::new("A"), Status::Fixed).with_timestamp(late),
            Statement::new(Vulnerability::new("B"), Status::Fixed),
            Statement::new(Vulnerability::new("C"), Status::Fixed).with_timestamp(early),
            Statement::new(Vulnerability::new("D"), Status::Fixed),
        ];
        sort_statements(&mut statements, Some(doc_ts));

        let order: Vec<_> = statements
            .iter()
            .map(|s| s.vulnerability.name.as_str())
            .collect();
        assert_eq!(order, ["C", "B", "D", "A"]);
    }
}
