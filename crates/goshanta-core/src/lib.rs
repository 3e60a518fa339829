// crates/goshanta-core/src/lib.rs

//! # goshanta-core
//!
//! Free-text discovery of travel spots, countries, divisions and districts.
//!
//! A raw phrase such as `"cheap lake trip for family"` is interpreted in two
//! independent passes:
//!
//! - the [`text`] module lowercases it, drops stop words and compiles the
//!   remaining tokens into case-insensitive substring matchers;
//! - the same module scans the original phrase against ordered keyword
//!   tables to infer budget / hobby / ideal-for filters.
//!
//! The [`search`] module then turns both into [`query::Predicate`] trees and
//! runs them against every collection of a [`traits::TravelStore`]: spots get
//! text matching *and* filters, geo entities get text matching only.
//!
//! ```rust
//! use goshanta_core::prelude::*;
//!
//! let db = TravelDb::load_json_str(r#"{
//!     "countries": [{ "name": "Bangladesh", "divisions": ["Sylhet", "Chittagong"] }]
//! }"#).unwrap();
//!
//! let outcome = db.search("I want to visit Sylhet").unwrap();
//! let response = outcome.response().unwrap();
//! assert_eq!(response.divisions[0].division, "Sylhet");
//! assert_eq!(response.divisions[0].country, "Bangladesh");
//! ```

pub mod browse;
pub mod common;
pub mod db;
pub mod error;
pub mod loader;
pub mod model;
pub mod prelude;
pub mod query;
pub mod search;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::StoreStats;
pub use crate::db::{MemoryCollection, TravelDb};
pub use crate::error::{Result, TravelError};
pub use crate::model::{BudgetLevel, Country, District, Review, Spot};
pub use crate::search::{QueryEngine, SearchOutcome, SearchResponse};
pub use crate::text::{SearchFilters, TokenMatcher, TokenMatcherSet, Vocabulary};
pub use crate::traits::{Collection, Document, TravelStore};
