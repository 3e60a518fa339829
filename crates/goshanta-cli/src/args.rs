use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for goshanta-cli
#[derive(Debug, Parser)]
#[command(
    name = "goshanta",
    version,
    about = "Natural-language search over travel spots, countries, divisions and districts"
)]
pub struct CliArgs {
    /// Path to the dataset JSON (optionally .json.gz). Defaults to the bundled dataset.
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<PathBuf>,

    /// JSON vocabulary replacing the built-in stop words and keyword tables
    #[arg(long = "vocabulary", global = true)]
    pub vocabulary: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Increase log verbosity (-v debug, -vv trace). Overrides RUST_LOG.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the dataset contents
    Stats,

    /// Search spots and geo entities with a free-text phrase
    Search {
        /// The phrase, e.g. `cheap lake trip for family`
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Show how a phrase is interpreted without searching
    Explain {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// List all countries
    Countries,

    /// List the divisions of a country
    Divisions {
        /// Exact country name (e.g. Bangladesh)
        country: String,
    },

    /// List the districts of a division
    Districts {
        /// Exact division name (e.g. Sylhet)
        division: String,
    },

    /// List the spots in a district
    Spots {
        /// Exact district name (e.g. Moulvibazar)
        district: String,
    },
}
