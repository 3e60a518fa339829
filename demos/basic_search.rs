//! Basic search example for goshanta-rs
//!
//! This example demonstrates how to:
//! - Load the bundled travel dataset
//! - Run free-text searches and read the inferred filters
//! - Swap in a custom vocabulary
//! - Browse the country → division → district → spot hierarchy

use goshanta_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== goshanta-rs Basic Search Example ===\n");

    println!("Loading travel dataset...");
    let db = TravelDb::load()?;
    let stats = db.stats();
    println!(
        "✓ {} spots, {} countries, {} divisions, {} districts\n",
        stats.spots, stats.countries, stats.divisions, stats.districts
    );

    // Example 1: plain searches with the built-in vocabulary
    println!("--- Example 1: Free-text searches ---");
    for raw in [
        "I want to visit Sylhet",
        "cheap historical museum trip for family",
        "luxury lake for couple",
        "i want to go",
    ] {
        println!("> {raw}");
        match db.search(raw)? {
            SearchOutcome::EmptyQuery { message } => println!("  {message}"),
            SearchOutcome::Matches(r) => {
                println!("  cleaned: {:?}  filters: {:?}", r.query, r.filters);
                for s in &r.spots {
                    println!("  spot: {} ({})", s.name(), s.district);
                }
                for d in &r.divisions {
                    println!("  division: {}, {}", d.division, d.country);
                }
                for c in &r.countries {
                    println!("  country: {}", c.name());
                }
                for d in &r.districts {
                    println!("  district: {} ({})", d.name(), d.division());
                }
            }
        }
    }
    println!();

    // Example 2: a custom vocabulary
    println!("--- Example 2: Custom vocabulary ---");
    let vocabulary = Vocabulary::from_json_str(
        r#"{
            "stop_words": ["show", "me", "some", "in"],
            "hobby": [{ "key": "adventure", "triggers": ["thrill", "paragliding"] }]
        }"#,
    )?;
    let engine = QueryEngine::new(&db).with_vocabulary(&vocabulary);
    if let Some(r) = engine.search_spots_and_geo("show me some thrill in Kaski")?.response() {
        println!("filters: {:?}", r.filters);
        for s in &r.spots {
            println!("- {}", s.name());
        }
    }
    println!();

    // Example 3: hierarchy browsing
    println!("--- Example 3: Browsing ---");
    for country in list_countries(&db)? {
        println!("{}", country.name());
        if let Some(divisions) = divisions_of(&db, country.name())? {
            for division in divisions.iter().take(2) {
                let districts = districts_of(&db, division)?;
                println!("  {division}: {} districts", districts.len());
                for d in districts.iter().take(2) {
                    let spots = spots_in(&db, d.name())?;
                    println!("    {} ({} spots)", d.name(), spots.len());
                }
            }
        }
    }

    Ok(())
}
