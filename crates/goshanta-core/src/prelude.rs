//! goshanta prelude: bring common types and traits into scope.

pub use crate::browse::{districts_of, divisions_of, list_countries, spots_in};
pub use crate::common::StoreStats;
pub use crate::db::{MemoryCollection, TravelDb};
pub use crate::error::{Result, TravelError};
pub use crate::model::{BudgetLevel, Country, District, Review, Spot};
pub use crate::query::Predicate;
pub use crate::search::{
    DivisionMatch, GeoMatches, ParsedQuery, QueryEngine, SearchOutcome, SearchResponse,
    EMPTY_QUERY_MESSAGE,
};
pub use crate::text::{
    extract_filters, normalize, KeywordBucket, KeywordTable, SearchFilters, TokenMatcher,
    TokenMatcherSet, Vocabulary, DEFAULT_VOCABULARY,
};
pub use crate::traits::{Collection, Document, TravelStore};
