// crates/goshanta-core/src/text/mod.rs

//! # Query Text
//!
//! Everything that happens to the raw phrase before a store is touched:
//! stop-word removal ([`normalize`]), keyword-table filter inference
//! ([`extract_filters`]) and token matcher compilation ([`TokenMatcherSet`]).
//! All of it is pure and total over any `&str`.

mod category;
mod matcher;
mod normalize;
mod vocabulary;

pub use category::{extract_filters, SearchFilters};
pub use matcher::{TokenMatcher, TokenMatcherSet};
pub use normalize::normalize;
pub use vocabulary::{KeywordBucket, KeywordTable, Vocabulary, DEFAULT_VOCABULARY};
