// crates/goshanta-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a loaded store.
///
/// Returned by [`crate::TravelDb::stats`]. `divisions` counts the embedded
/// division names across all countries, duplicates included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    pub spots: usize,
    pub countries: usize,
    pub divisions: usize,
    pub districts: usize,
}
