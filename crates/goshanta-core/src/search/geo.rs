// crates/goshanta-core/src/search/geo.rs
use crate::error::Result;
use crate::model::{field, Country, District};
use crate::query::Predicate;
use crate::text::TokenMatcherSet;
use crate::traits::{Collection, TravelStore};
use serde::{Deserialize, Serialize};

/// A division name hit, denormalized with the country that embeds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivisionMatch {
    pub division: String,
    pub country: String,
}

/// Geo entities matching a query. Categorical filters never apply here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoMatches {
    pub divisions: Vec<DivisionMatch>,
    pub countries: Vec<Country>,
    pub districts: Vec<District>,
}

pub fn country_predicate(matchers: &TokenMatcherSet) -> Predicate {
    Predicate::or(
        matchers
            .iter()
            .map(|m| Predicate::matches(field::NAME, m.clone()))
            .collect(),
    )
}

pub fn district_predicate(matchers: &TokenMatcherSet) -> Predicate {
    Predicate::or(
        matchers
            .iter()
            .flat_map(|m| {
                [
                    Predicate::matches(field::NAME, m.clone()),
                    Predicate::matches(field::DIVISION, m.clone()),
                ]
            })
            .collect(),
    )
}

/// Scan the divisions embedded in `countries`, in order.
///
/// One pair is emitted per hit; the same division name under two countries
/// yields two pairs.
pub fn matching_divisions(countries: &[Country], matchers: &TokenMatcherSet) -> Vec<DivisionMatch> {
    let mut out = Vec::new();
    for country in countries {
        for division in country.divisions() {
            if matchers.any_match(division) {
                out.push(DivisionMatch {
                    division: division.clone(),
                    country: country.name.clone(),
                });
            }
        }
    }
    out
}

/// Fetch every country and scan its divisions.
pub fn find_divisions<C>(countries: &C, matchers: &TokenMatcherSet) -> Result<Vec<DivisionMatch>>
where
    C: Collection<Country> + ?Sized,
{
    let all = countries.find(&Predicate::All)?;
    Ok(matching_divisions(&all, matchers))
}

pub fn find_countries<C>(countries: &C, matchers: &TokenMatcherSet) -> Result<Vec<Country>>
where
    C: Collection<Country> + ?Sized,
{
    countries.find(&country_predicate(matchers))
}

pub fn find_districts<C>(districts: &C, matchers: &TokenMatcherSet) -> Result<Vec<District>>
where
    C: Collection<District> + ?Sized,
{
    districts.find(&district_predicate(matchers))
}

/// Look the query up in countries, their divisions and districts.
///
/// With the `parallel` feature the three lookups run concurrently; the first
/// failure (in the order divisions, countries, districts) is returned and
/// nothing is assembled.
pub fn cross_reference<S>(store: &S, matchers: &TokenMatcherSet) -> Result<GeoMatches>
where
    S: TravelStore + ?Sized,
{
    if matchers.is_empty() {
        return Ok(GeoMatches::default());
    }

    #[cfg(feature = "parallel")]
    let (divisions, (countries, districts)) = rayon::join(
        || find_divisions(store.countries(), matchers),
        || {
            rayon::join(
                || find_countries(store.countries(), matchers),
                || find_districts(store.districts(), matchers),
            )
        },
    );

    #[cfg(not(feature = "parallel"))]
    let (divisions, countries, districts) = (
        find_divisions(store.countries(), matchers)?,
        find_countries(store.countries(), matchers)?,
        find_districts(store.districts(), matchers)?,
    );

    #[cfg(feature = "parallel")]
    let (divisions, countries, districts) = (divisions?, countries?, districts?);

    tracing::debug!(
        divisions = divisions.len(),
        countries = countries.len(),
        districts = districts.len(),
        "geo cross-reference"
    );

    Ok(GeoMatches {
        divisions,
        countries,
        districts,
    })
}
