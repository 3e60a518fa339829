// crates/goshanta-core/src/loader/mod.rs

//! # Data Loader
//!
//! Reads a dataset document (`{ spots, countries, districts }`, optionally
//! gzipped) into a [`TravelDb`], keeping a bincode snapshot beside the
//! source so later loads skip JSON parsing.

use crate::db::TravelDb;
use crate::error::Result;
use once_cell::sync::OnceCell;
use std::io::Read;
use std::path::{Path, PathBuf};

mod common_io;
mod snapshot;

pub use common_io::{get_cache_path, is_cache_fresh, open_stream};
pub use snapshot::{read_snapshot, write_snapshot};

static TRAVEL_DB_CACHE: OnceCell<TravelDb> = OnceCell::new();

pub const SNAPSHOT_SUFFIX: &str = "bin";

impl TravelDb {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "goshanta.json"
    }

    /// Load the bundled dataset, once per process.
    pub fn load() -> Result<Self> {
        TRAVEL_DB_CACHE
            .get_or_try_init(|| {
                let path = Self::default_data_dir().join(Self::default_dataset_filename());
                Self::load_from_path(path)
            })
            .cloned()
    }

    /// **Smart Load:** use a fresh snapshot if there is one, otherwise parse
    /// the source and refresh the snapshot.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let cache_path = get_cache_path(path, SNAPSHOT_SUFFIX)?;

        if is_cache_fresh(path, &cache_path) {
            match read_snapshot(&cache_path) {
                Ok(db) => {
                    tracing::debug!(snapshot = %cache_path.display(), "loaded dataset snapshot");
                    return Ok(db);
                }
                Err(e) => {
                    tracing::debug!(snapshot = %cache_path.display(), error = %e, "snapshot unreadable, rebuilding");
                }
            }
        }

        let db = Self::load_json_file(path)?;

        if let Err(e) = write_snapshot(&cache_path, &db) {
            tracing::warn!(snapshot = %cache_path.display(), error = %e, "could not write dataset snapshot");
        }

        Ok(db)
    }

    /// Parse the source dataset, ignoring any snapshot.
    pub fn load_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let db = Self::from_reader(open_stream(path)?)?;
        let stats = db.stats();
        tracing::debug!(
            source = %path.display(),
            spots = stats.spots,
            countries = stats.countries,
            districts = stats.districts,
            "parsed dataset"
        );
        Ok(db)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn load_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write a snapshot of this dataset to `path`.
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        write_snapshot(path.as_ref(), self)
    }
}
