#![allow(dead_code)]

use goshanta_core::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const FIXTURE: &str = r#"{
    "spots": [
        {
            "name": "Ratargul Swamp Forest",
            "description": "Freshwater swamp forest",
            "district": "Sylhet", "division": "Sylhet", "country": "Bangladesh",
            "tags": ["nature", "boating", "photography"],
            "type": "forest", "budget_level": "low",
            "ideal_for": ["friends", "couple"],
            "user_reviews": [{ "user": "nadia", "comment": "Magical boat ride" }]
        },
        {
            "name": "Lalbagh Fort",
            "description": "Mughal fort with a small Museum inside",
            "district": "Dhaka", "division": "Dhaka", "country": "Bangladesh",
            "tags": ["history", "heritage"],
            "type": "fort", "budget_level": "low",
            "ideal_for": ["family", "solo"]
        },
        {
            "name": "Kaptai Lake",
            "description": "Man-made lake among green hills",
            "district": "Rangamati", "division": "Chittagong", "country": "Bangladesh",
            "tags": ["nature", "family trip"],
            "type": "lake", "budget_level": "medium",
            "ideal_for": ["family", "friends"]
        },
        {
            "name": "Phewa Lake",
            "description": "Boating under the Annapurna range",
            "district": "Kaski", "division": "Gandaki", "country": "Nepal",
            "tags": ["nature", "adventure"],
            "type": "lake", "budget_level": "high",
            "ideal_for": ["couple"]
        },
        {
            "name": "Quiet Garden",
            "description": "A calm garden",
            "district": "Gazipur", "division": "Dhaka", "country": "Bangladesh",
            "tags": ["nature", "family trip"],
            "type": "garden", "budget_level": "low",
            "ideal_for": ["family"]
        }
    ],
    "countries": [
        { "name": "Bangladesh", "divisions": ["Dhaka", "Chittagong", "Sylhet"] },
        { "name": "Nepal", "divisions": ["Bagmati", "Gandaki"] }
    ],
    "districts": [
        { "name": "Sylhet", "division": "Sylhet" },
        { "name": "Moulvibazar", "division": "Sylhet" },
        { "name": "Dhaka", "division": "Dhaka" },
        { "name": "Gazipur", "division": "Dhaka" },
        { "name": "Rangamati", "division": "Chittagong" },
        { "name": "Kaski", "division": "Gandaki" }
    ]
}"#;

pub fn fixture() -> TravelDb {
    TravelDb::load_json_str(FIXTURE).expect("fixture parses")
}

pub fn spot_names(response: &SearchResponse) -> Vec<&str> {
    response.spots.iter().map(Spot::name).collect()
}

/// Wraps a collection and counts every query sent to it.
pub struct Counting<'a, D: Document> {
    inner: &'a MemoryCollection<D>,
    calls: &'a AtomicUsize,
}

impl<D: Document> Collection<D> for Counting<'_, D> {
    fn find(&self, predicate: &Predicate) -> Result<Vec<D>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.find(predicate)
    }
}

pub struct CountingStore<'a> {
    spots: Counting<'a, Spot>,
    countries: Counting<'a, Country>,
    districts: Counting<'a, District>,
}

impl<'a> CountingStore<'a> {
    pub fn new(db: &'a TravelDb, calls: &'a AtomicUsize) -> Self {
        CountingStore {
            spots: Counting { inner: &db.spots, calls },
            countries: Counting { inner: &db.countries, calls },
            districts: Counting { inner: &db.districts, calls },
        }
    }
}

impl<'a> TravelStore for CountingStore<'a> {
    type Spots = Counting<'a, Spot>;
    type Countries = Counting<'a, Country>;
    type Districts = Counting<'a, District>;

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

/// A collection whose backend is down.
pub struct Unreachable;

impl<D: Document> Collection<D> for Unreachable {
    fn find(&self, _predicate: &Predicate) -> Result<Vec<D>> {
        Err(TravelError::data_access(D::COLLECTION, "connection reset"))
    }
}

/// Healthy spots and countries, failing districts.
pub struct BrokenDistricts {
    pub db: TravelDb,
    pub districts: Unreachable,
}

impl TravelStore for BrokenDistricts {
    type Spots = MemoryCollection<Spot>;
    type Countries = MemoryCollection<Country>;
    type Districts = Unreachable;

    fn spots(&self) -> &Self::Spots {
        &self.db.spots
    }
    fn countries(&self) -> &Self::Countries {
        &self.db.countries
    }
    fn districts(&self) -> &Self::Districts {
        &self.districts
    }
}
