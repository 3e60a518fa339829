// crates/goshanta-core/src/search/mod.rs

//! # Search
//!
//! Runs an interpreted query against a [`TravelStore`]:
//!
//! - [`spots`]: token matchers OR-ed over spot text fields, AND-ed with the
//!   inferred filters;
//! - [`geo`]: the same matchers over countries, embedded divisions and
//!   districts, without filters;
//! - [`response`]: packaging into a [`SearchOutcome`].

pub mod geo;
pub mod response;
pub mod spots;

pub use geo::{cross_reference, DivisionMatch, GeoMatches};
pub use response::{SearchOutcome, SearchResponse, EMPTY_QUERY_MESSAGE};
pub use spots::{search_spots, spot_predicate};

use crate::error::Result;
use crate::text::{
    extract_filters, normalize, SearchFilters, TokenMatcherSet, Vocabulary, DEFAULT_VOCABULARY,
};
use crate::traits::TravelStore;

/// A raw query after interpretation, before any store is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    pub cleaned: String,
    pub filters: SearchFilters,
    pub matchers: TokenMatcherSet,
}

impl ParsedQuery {
    /// `true` when nothing searchable is left after stop-word removal.
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

/// Interprets raw phrases and runs them against a store.
///
/// The engine holds no per-request state; it can be shared freely and
/// called from several threads at once.
///
/// ```rust
/// use goshanta_core::prelude::*;
///
/// let db = TravelDb::default();
/// let engine = QueryEngine::new(&db);
/// assert!(engine.search_spots_and_geo("i want to go").unwrap().is_empty_query());
/// ```
pub struct QueryEngine<'a, S: TravelStore + ?Sized> {
    store: &'a S,
    vocabulary: &'a Vocabulary,
}

impl<'a, S: TravelStore + ?Sized> QueryEngine<'a, S> {
    /// An engine using [`DEFAULT_VOCABULARY`].
    pub fn new(store: &'a S) -> Self {
        QueryEngine {
            store,
            vocabulary: &DEFAULT_VOCABULARY,
        }
    }

    pub fn with_vocabulary(mut self, vocabulary: &'a Vocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        self.vocabulary
    }

    /// Normalize, infer filters and compile matchers.
    ///
    /// Filters are inferred from the original text, not the cleaned one.
    pub fn parse(&self, raw: &str) -> ParsedQuery {
        let raw = raw.trim();
        let cleaned = normalize(raw, &self.vocabulary.stop_words);
        let filters = extract_filters(raw, self.vocabulary);
        let matchers = TokenMatcherSet::build(&cleaned);
        ParsedQuery {
            cleaned,
            filters,
            matchers,
        }
    }

    /// Search spots and cross-reference geo entities for one raw phrase.
    ///
    /// Returns [`SearchOutcome::EmptyQuery`] without querying anything when
    /// the phrase has no searchable tokens. Any collection failure aborts
    /// the whole search.
    pub fn search_spots_and_geo(&self, raw: &str) -> Result<SearchOutcome> {
        let parsed = self.parse(raw);
        if parsed.is_empty() {
            tracing::debug!(raw, "query has no searchable tokens");
            return Ok(SearchOutcome::empty_query());
        }
        tracing::debug!(
            cleaned = %parsed.cleaned,
            filters = ?parsed.filters,
            "interpreted query"
        );
        self.execute(parsed)
    }

    /// Run an already parsed, non-empty query.
    pub fn execute(&self, parsed: ParsedQuery) -> Result<SearchOutcome> {
        if parsed.is_empty() {
            return Ok(SearchOutcome::empty_query());
        }
        let ParsedQuery {
            cleaned,
            filters,
            matchers,
        } = parsed;

        #[cfg(feature = "parallel")]
        let (spots, geo) = {
            let (spots, geo) = rayon::join(
                || search_spots(self.store.spots(), &matchers, &filters),
                || cross_reference(self.store, &matchers),
            );
            (spots?, geo?)
        };

        #[cfg(not(feature = "parallel"))]
        let (spots, geo) = (
            search_spots(self.store.spots(), &matchers, &filters)?,
            cross_reference(self.store, &matchers)?,
        );

        Ok(SearchOutcome::Matches(SearchResponse::assemble(
            cleaned, filters, spots, geo,
        )))
    }
}
