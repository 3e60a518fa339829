// crates/goshanta-core/src/query.rs

//! Compound boolean predicates over document fields.
//!
//! A [`Predicate`] is a small AST of field tests combined with AND / OR. It
//! is the only thing the search layer hands to a [`crate::Collection`], so any
//! store able to evaluate these primitives can back a search.

use crate::text::TokenMatcher;
use crate::traits::Document;
use serde::Serialize;

/// A node of a predicate tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Predicate {
    /// Matches every document.
    All,
    /// Some value of `field` is exactly `value`.
    Equals { field: String, value: String },
    /// Some value of `field` is hit by `matcher` (case-insensitive substring).
    Matches {
        field: String,
        matcher: TokenMatcher,
    },
    /// Some value of `field` is one of `values`.
    ///
    /// On a sequence field this is a membership test: `tags ∋ "nature"` is
    /// `AnyOf { field: "tags", values: ["nature"] }`.
    AnyOf { field: String, values: Vec<String> },
    /// True only if every child is true. Empty is true.
    And(Vec<Predicate>),
    /// True if at least one child is true. Empty is false.
    Or(Vec<Predicate>),
}

impl Predicate {
    pub fn equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        Predicate::Equals {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn matches(field: impl Into<String>, matcher: TokenMatcher) -> Self {
        Predicate::Matches {
            field: field.into(),
            matcher,
        }
    }

    pub fn any_of<I, V>(field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Predicate::AnyOf {
            field: field.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn and(children: Vec<Predicate>) -> Self {
        Predicate::And(children)
    }

    pub fn or(children: Vec<Predicate>) -> Self {
        Predicate::Or(children)
    }

    /// Evaluate the tree against one document.
    pub fn evaluate<D: Document>(&self, doc: &D) -> bool {
        match self {
            Predicate::All => true,
            Predicate::Equals { field, value } => {
                doc.field_values(field).iter().any(|v| v == value)
            }
            Predicate::Matches { field, matcher } => doc
                .field_values(field)
                .iter()
                .any(|v| matcher.is_match(v)),
            Predicate::AnyOf { field, values } => doc
                .field_values(field)
                .iter()
                .any(|v| values.iter().any(|candidate| candidate == v)),
            Predicate::And(children) => children.iter().all(|p| p.evaluate(doc)),
            Predicate::Or(children) => children.iter().any(|p| p.evaluate(doc)),
        }
    }

    /// Number of field tests in the tree (for logging).
    pub fn leaf_count(&self) -> usize {
        match self {
            Predicate::And(children) | Predicate::Or(children) => {
                children.iter().map(Predicate::leaf_count).sum()
            }
            _ => 1,
        }
    }
}
