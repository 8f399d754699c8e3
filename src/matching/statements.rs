//! Selecting the statements of a document that talk about a subject.

use super::PurlMatcher;
use crate::model::{Document, Product, Statement};

/// A (vulnerability, product, subcomponents) query against statements.
///
/// A statement is selected when its vulnerability is designated by the
/// query id and at least one of its products either matches the product
/// purl or contains a subcomponent matching one of the subcomponent purls.
#[derive(Debug, Clone)]
pub struct StatementQuery {
    vulnerability_id: String,
    product: PurlMatcher,
    subcomponents: Vec<PurlMatcher>,
}

impl StatementQuery {
    /// Query by vulnerability and product only.
    #[must_use]
    pub fn new(vulnerability_id: impl Into<String>, product_id: impl Into<String>) -> Self {
        Self {
            vulnerability_id: vulnerability_id.into(),
            product: PurlMatcher::new(product_id),
            subcomponents: Vec::new(),
        }
    }

    /// Also accept products carrying one of these subcomponents.
    #[must_use]
    pub fn with_subcomponents<S: AsRef<str>>(mut self, subcomponent_ids: &[S]) -> Self {
        self.subcomponents = subcomponent_ids
            .iter()
            .map(|id| PurlMatcher::new(id.as_ref()))
            .collect();
        self
    }

    #[must_use]
    pub fn vulnerability_id(&self) -> &str {
        &self.vulnerability_id
    }

    /// Does `product` satisfy the product or subcomponent part of the query?
    #[must_use]
    pub fn matches_product(&self, product: &Product) -> bool {
        if !self.product.query().is_empty() && self.product.matches(product.id()) {
            return true;
        }
        !self.subcomponents.is_empty()
            && product.subcomponents.iter().any(|sc| {
                self.subcomponents
                    .iter()
                    .any(|query| query.matches(&sc.component.id))
            })
    }

    /// Full statement check using the query's own vulnerability id.
    #[must_use]
    pub fn matches_statement(&self, statement: &Statement) -> bool {
        statement.vulnerability.matches(&self.vulnerability_id)
            && statement.products.iter().any(|p| self.matches_product(p))
    }

    /// Statements of `document` selected by this query, in document order.
    #[must_use]
    pub fn select<'d>(&self, document: &'d Document) -> Vec<&'d Statement> {
        document
            .statements
            .iter()
            .filter(|s| self.matches_statement(s))
            .collect()
    }
}

impl Document {
    /// All statements about `vulnerability_id` for `product_id`, or for a
    /// product containing one of `subcomponent_ids`.
    ///
    /// Results keep document order and are not deduplicated. No match is an
    /// empty vector.
    #[must_use]
    pub fn matches<S: AsRef<str>>(
        &self,
        vulnerability_id: &str,
        product_id: &str,
        subcomponent_ids: &[S],
    ) -> Vec<&Statement> {
        StatementQuery::new(vulnerability_id, product_id)
            .with_subcomponents(subcomponent_ids)
            .select(self)
    }
}
