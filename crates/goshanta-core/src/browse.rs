// crates/goshanta-core/src/browse.rs

//! Hierarchy browsing: country → divisions → districts → spots.
//!
//! Plain lookups by exact name through the same [`Collection`] seam the
//! search uses, so they work against any [`TravelStore`].

use crate::error::Result;
use crate::model::{field, Country, District, Spot};
use crate::query::Predicate;
use crate::traits::{Collection, TravelStore};

/// Every country, in store order.
pub fn list_countries<S: TravelStore + ?Sized>(store: &S) -> Result<Vec<Country>> {
    store.countries().find(&Predicate::All)
}

/// Division names of the country called `country`.
///
/// `Ok(None)` means no such country, or a country stored without a
/// division list (missing or `null`). An explicit empty list gives
/// `Ok(Some(vec![]))`.
pub fn divisions_of<S: TravelStore + ?Sized>(
    store: &S,
    country: &str,
) -> Result<Option<Vec<String>>> {
    let found = store
        .countries()
        .find_one(&Predicate::equals(field::NAME, country))?;
    Ok(found.and_then(|c| c.divisions))
}

/// Districts whose owning division is named `division`.
pub fn districts_of<S: TravelStore + ?Sized>(store: &S, division: &str) -> Result<Vec<District>> {
    store
        .districts()
        .find(&Predicate::equals(field::DIVISION, division))
}

/// Spots located in the district named `district`.
pub fn spots_in<S: TravelStore + ?Sized>(store: &S, district: &str) -> Result<Vec<Spot>> {
    store
        .spots()
        .find(&Predicate::equals(field::DISTRICT, district))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::TravelDb;

    fn db() -> TravelDb {
        TravelDb::load_json_str(
            r#"{
                "spots": [
                    { "name": "Ratargul Swamp Forest", "district": "Sylhet" },
                    { "name": "Lalbagh Fort", "district": "Dhaka" }
                ],
                "countries": [
                    { "name": "Bangladesh", "divisions": ["Dhaka", "Sylhet"] },
                    { "name": "Atlantis", "divisions": [] },
                    { "name": "Lemuria" },
                    { "name": "Mu", "divisions": null }
                ],
                "districts": [
                    { "name": "Sylhet", "division": "Sylhet" },
                    { "name": "Dhaka", "division": "Dhaka" }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn divisions_distinguish_unknown_from_empty() {
        let db = db();
        assert_eq!(
            divisions_of(&db, "Bangladesh").unwrap(),
            Some(vec!["Dhaka".to_string(), "Sylhet".to_string()])
        );
        assert_eq!(divisions_of(&db, "Atlantis").unwrap(), Some(vec![]));
        assert_eq!(divisions_of(&db, "Lemuria").unwrap(), None);
        assert_eq!(divisions_of(&db, "Mu").unwrap(), None);
        assert_eq!(divisions_of(&db, "bangladesh").unwrap(), None);
    }

    #[test]
    fn lookups_are_exact() {
        let db = db();
        assert_eq!(list_countries(&db).unwrap().len(), 4);
        assert_eq!(districts_of(&db, "Sylhet").unwrap().len(), 1);
        let spots = spots_in(&db, "Dhaka").unwrap();
        assert_eq!(spots.len(), 1);
        assert_eq!(spots[0].name(), "Lalbagh Fort");
        assert!(spots_in(&db, "Dhak").unwrap().is_empty());
    }
}
