// crates/goshanta-core/src/search/response.rs
use super::geo::{DivisionMatch, GeoMatches};
use crate::model::{Country, District, Spot};
use crate::text::SearchFilters;
use serde::{Deserialize, Serialize};

pub const EMPTY_QUERY_MESSAGE: &str = "Empty or invalid search query";

/// Everything one search found.
///
/// All four sequences are always present; a query that matches nothing
/// produces four empty lists, never a missing field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// The cleaned query the matchers were built from.
    pub query: String,
    pub filters: SearchFilters,
    pub spots: Vec<Spot>,
    pub divisions: Vec<DivisionMatch>,
    pub countries: Vec<Country>,
    pub districts: Vec<District>,
}

impl SearchResponse {
    /// Package the spot and geo results. No filtering happens here.
    pub fn assemble(
        query: impl Into<String>,
        filters: SearchFilters,
        spots: Vec<Spot>,
        geo: GeoMatches,
    ) -> Self {
        SearchResponse {
            query: query.into(),
            filters,
            spots,
            divisions: geo.divisions,
            countries: geo.countries,
            districts: geo.districts,
        }
    }

    pub fn total_hits(&self) -> usize {
        self.spots.len() + self.divisions.len() + self.countries.len() + self.districts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_hits() == 0
    }
}

/// Result of interpreting and running one raw query.
///
/// Serializes untagged: either `{"message": "..."}` for a query with nothing
/// left after stop-word removal, or the [`SearchResponse`] object itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SearchOutcome {
    /// Normalization left no tokens; no collection was queried.
    EmptyQuery { message: &'static str },
    Matches(SearchResponse),
}

impl SearchOutcome {
    pub fn empty_query() -> Self {
        SearchOutcome::EmptyQuery {
            message: EMPTY_QUERY_MESSAGE,
        }
    }

    pub fn is_empty_query(&self) -> bool {
        matches!(self, SearchOutcome::EmptyQuery { .. })
    }

    pub fn response(&self) -> Option<&SearchResponse> {
        match self {
            SearchOutcome::Matches(r) => Some(r),
            SearchOutcome::EmptyQuery { .. } => None,
        }
    }

    pub fn into_response(self) -> Option<SearchResponse> {
        match self {
            SearchOutcome::Matches(r) => Some(r),
            SearchOutcome::EmptyQuery { .. } => None,
        }
    }
}
