mod common;

use common::{fixture, BrokenDistricts, Unreachable};
use goshanta_core::prelude::*;

#[test]
fn walks_country_to_spot() {
    let db = fixture();

    let countries: Vec<_> = list_countries(&db)
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(countries, ["Bangladesh", "Nepal"]);

    let divisions = divisions_of(&db, "Bangladesh").unwrap().unwrap();
    assert_eq!(divisions, ["Dhaka", "Chittagong", "Sylhet"]);

    let districts: Vec<_> = districts_of(&db, "Dhaka")
        .unwrap()
        .into_iter()
        .map(|d| d.name)
        .collect();
    assert_eq!(districts, ["Dhaka", "Gazipur"]);

    let spots = spots_in(&db, "Gazipur").unwrap();
    assert_eq!(spots.len(), 1);
    assert_eq!(spots[0].name(), "Quiet Garden");
}

#[test]
fn unknown_country_is_none() {
    assert_eq!(divisions_of(&fixture(), "Atlantis").unwrap(), None);
}

#[test]
fn browse_propagates_backend_errors() {
    let store = BrokenDistricts {
        db: fixture(),
        districts: Unreachable,
    };
    assert!(list_countries(&store).is_ok());
    let err = districts_of(&store, "Sylhet").unwrap_err();
    assert!(err.is_data_access());
}
