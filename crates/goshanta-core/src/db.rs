// crates/goshanta-core/src/db.rs

//! In-memory backend.
//!
//! [`TravelDb`] holds the three collections as plain vectors and evaluates
//! [`Predicate`] trees directly. It is what the dataset loader produces and
//! what the CLI searches.

use crate::common::StoreStats;
use crate::error::Result;
use crate::model::{Country, District, Spot};
use crate::query::Predicate;
use crate::search::{QueryEngine, SearchOutcome};
use crate::traits::{Collection, Document, TravelStore};
use serde::{Deserialize, Serialize};

/// A vector of documents answering predicates by linear scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryCollection<D> {
    documents: Vec<D>,
}

impl<D> Default for MemoryCollection<D> {
    fn default() -> Self {
        MemoryCollection {
            documents: Vec::new(),
        }
    }
}

impl<D> MemoryCollection<D> {
    pub fn new(documents: Vec<D>) -> Self {
        MemoryCollection { documents }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Documents in store order.
    pub fn documents(&self) -> &[D] {
        &self.documents
    }
}

impl<D: Document> Collection<D> for MemoryCollection<D> {
    fn find(&self, predicate: &Predicate) -> Result<Vec<D>> {
        Ok(self
            .documents
            .iter()
            .filter(|doc| predicate.evaluate(*doc))
            .cloned()
            .collect())
    }

    fn find_one(&self, predicate: &Predicate) -> Result<Option<D>> {
        Ok(self
            .documents
            .iter()
            .find(|doc| predicate.evaluate(*doc))
            .cloned())
    }
}

/// The full dataset: spots, countries (with embedded divisions) and districts.
///
/// Deserializes from `{ "spots": [...], "countries": [...], "districts": [...] }`;
/// any missing collection is empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TravelDb {
    #[serde(default)]
    pub spots: MemoryCollection<Spot>,
    #[serde(default)]
    pub countries: MemoryCollection<Country>,
    #[serde(default)]
    pub districts: MemoryCollection<District>,
}

impl TravelDb {
    pub fn new(spots: Vec<Spot>, countries: Vec<Country>, districts: Vec<District>) -> Self {
        TravelDb {
            spots: MemoryCollection::new(spots),
            countries: MemoryCollection::new(countries),
            districts: MemoryCollection::new(districts),
        }
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            spots: self.spots.len(),
            countries: self.countries.len(),
            divisions: self
                .countries
                .documents()
                .iter()
                .map(|c| c.divisions().len())
                .sum(),
            districts: self.districts.len(),
        }
    }

    /// Search with the built-in vocabulary.
    ///
    /// Shorthand for `QueryEngine::new(self).search_spots_and_geo(raw)`.
    pub fn search(&self, raw: &str) -> Result<SearchOutcome> {
        QueryEngine::new(self).search_spots_and_geo(raw)
    }
}

impl TravelStore for TravelDb {
    type Spots = MemoryCollection<Spot>;
    type Countries = MemoryCollection<Country>;
    type Districts = MemoryCollection<District>;

    fn spots(&self) -> &Self::Spots {
        &self.spots
    }

    fn countries(&self) -> &Self::Countries {
        &self.countries
    }

    fn districts(&self) -> &Self::Districts {
        &self.districts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::field;

    fn db() -> TravelDb {
        TravelDb::new(
            vec![],
            vec![
                Country::new("Bangladesh", vec!["Dhaka".into(), "Sylhet".into()]),
                Country::new("Nepal", vec!["Bagmati".into()]),
            ],
            vec![
                District::new("Gazipur", "Dhaka"),
                District::new("Moulvibazar", "Sylhet"),
                District::new("Sylhet", "Sylhet"),
            ],
        )
    }

    #[test]
    fn find_keeps_store_order() {
        let db = db();
        let hits = db
            .districts
            .find(&Predicate::equals(field::DIVISION, "Sylhet"))
            .unwrap();
        let names: Vec<_> = hits.iter().map(District::name).collect();
        assert_eq!(names, ["Moulvibazar", "Sylhet"]);
    }

    #[test]
    fn find_one_returns_first_hit() {
        let db = db();
        let first = db.countries.find_one(&Predicate::All).unwrap();
        assert_eq!(first.unwrap().name(), "Bangladesh");
        let none = db
            .countries
            .find_one(&Predicate::equals(field::NAME, "India"))
            .unwrap();
        assert!(none.is_none());
    }

    #[test]
    fn stats_count_embedded_divisions() {
        let stats = db().stats();
        assert_eq!(
            stats,
            StoreStats {
                spots: 0,
                countries: 2,
                divisions: 3,
                districts: 3
            }
        );
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let db: TravelDb = serde_json::from_str(r#"{ "districts": [] }"#).unwrap();
        assert!(db.spots.is_empty());
        assert!(db.countries.is_empty());
    }
}
