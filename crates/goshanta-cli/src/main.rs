//! goshanta-cli: search and browse a travel dataset from the terminal.
//!
//! By default the dataset bundled with `goshanta-core` is loaded and a
//! binary snapshot is cached next to it for fast subsequent runs.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use goshanta_core::prelude::*;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let vocabulary = match &args.vocabulary {
        Some(path) => Vocabulary::from_json_path(path)
            .with_context(|| format!("loading vocabulary from {}", path.display()))?,
        None => Vocabulary::builtin(),
    };

    let input_path = args
        .input
        .clone()
        .unwrap_or_else(|| TravelDb::default_data_dir().join(TravelDb::default_dataset_filename()));
    let db = TravelDb::load_from_path(&input_path)
        .with_context(|| format!("loading dataset from {}", input_path.display()))?;

    let engine = QueryEngine::new(&db).with_vocabulary(&vocabulary);

    match args.command {
        Commands::Stats => {
            let stats = db.stats();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Dataset statistics:");
                println!("  Spots: {}", stats.spots);
                println!("  Countries: {}", stats.countries);
                println!("  Divisions: {}", stats.divisions);
                println!("  Districts: {}", stats.districts);
            }
        }

        Commands::Search { query } => {
            let raw = query.join(" ");
            let outcome = match engine.search_spots_and_geo(&raw) {
                Ok(outcome) => outcome,
                Err(e) => return Err(server_error(e)),
            };
            if args.json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                print_outcome(&outcome);
            }
        }

        Commands::Explain { query } => {
            let parsed = engine.parse(&query.join(" "));
            let predicate = goshanta_core::search::spot_predicate(&parsed.matchers, &parsed.filters);
            if args.json {
                let value = serde_json::json!({
                    "query": parsed.cleaned,
                    "tokens": parsed.matchers.tokens(),
                    "filters": parsed.filters,
                    "spotPredicate": predicate,
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else if parsed.is_empty() {
                println!("{EMPTY_QUERY_MESSAGE}");
            } else {
                println!("Cleaned query: {}", parsed.cleaned);
                println!("Tokens: {}", parsed.matchers.tokens().join(", "));
                println!("Budget: {}", parsed.filters.budget.as_deref().unwrap_or("-"));
                println!("Hobby: {}", parsed.filters.hobby.as_deref().unwrap_or("-"));
                println!("Ideal for: {}", parsed.filters.ideal_for.as_deref().unwrap_or("-"));
                println!("Spot predicate: {} field tests", predicate.leaf_count());
            }
        }

        Commands::Countries => {
            let countries = list_countries(&db).map_err(server_error)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&countries)?);
            } else {
                for c in &countries {
                    println!("{} ({} divisions)", c.name(), c.divisions().len());
                }
            }
        }

        Commands::Divisions { country } => match divisions_of(&db, &country).map_err(server_error)? {
            Some(divisions) if args.json => {
                println!("{}", serde_json::to_string_pretty(&divisions)?);
            }
            Some(divisions) => {
                println!("Divisions in {country}:");
                for d in divisions {
                    println!("- {d}");
                }
            }
            None => eprintln!("Country {country} not found"),
        },

        Commands::Districts { division } => {
            let districts = districts_of(&db, &division).map_err(server_error)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&districts)?);
            } else if districts.is_empty() {
                println!("No districts found for division: {division}");
            } else {
                for d in &districts {
                    println!("- {}", d.name());
                }
            }
        }

        Commands::Spots { district } => {
            let spots = spots_in(&db, &district).map_err(server_error)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&spots)?);
            } else if spots.is_empty() {
                println!("No spots found in district: {district}");
            } else {
                for s in &spots {
                    println!("- {} ({})", s.name(), s.kind());
                }
            }
        }
    }

    Ok(())
}

/// Log the backend failure and hand the user a generic message.
fn server_error(e: TravelError) -> anyhow::Error {
    tracing::error!(error = %e, "query failed");
    anyhow::anyhow!("Server error")
}

fn print_outcome(outcome: &SearchOutcome) {
    let response = match outcome {
        SearchOutcome::EmptyQuery { message } => {
            println!("{message}");
            return;
        }
        SearchOutcome::Matches(response) => response,
    };

    let filters = &response.filters;
    println!("Query: {}", response.query);
    if !filters.is_empty() {
        println!(
            "Filters: budget={} hobby={} idealFor={}",
            filters.budget.as_deref().unwrap_or("-"),
            filters.hobby.as_deref().unwrap_or("-"),
            filters.ideal_for.as_deref().unwrap_or("-"),
        );
    }
    if response.is_empty() {
        println!("No results.");
        return;
    }

    if !response.spots.is_empty() {
        println!("Spots:");
        for s in &response.spots {
            let budget = s.budget_level.map(|b| b.as_str()).unwrap_or("-");
            println!("- {} ({}, {}, {}) [{budget}]", s.name(), s.district, s.division, s.country);
        }
    }
    if !response.divisions.is_empty() {
        println!("Divisions:");
        for d in &response.divisions {
            println!("- {}, {}", d.division, d.country);
        }
    }
    if !response.countries.is_empty() {
        println!("Countries:");
        for c in &response.countries {
            println!("- {}", c.name());
        }
    }
    if !response.districts.is_empty() {
        println!("Districts:");
        for d in &response.districts {
            println!("- {} ({})", d.name(), d.division());
        }
    }
}
