// crates/goshanta-core/src/loader/snapshot.rs

//! Bincode snapshot of a parsed [`TravelDb`].
//!
//! Gzip-wrapped when the `compact` feature is on. A snapshot written with
//! one feature set is not readable with the other; the loader treats an
//! unreadable snapshot as stale.

use crate::db::TravelDb;
use crate::error::Result;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

pub fn read_snapshot(path: &Path) -> Result<TravelDb> {
    let reader = BufReader::new(File::open(path)?);

    #[cfg(feature = "compact")]
    let db = bincode::deserialize_from(GzDecoder::new(reader))?;

    #[cfg(not(feature = "compact"))]
    let db = bincode::deserialize_from(reader)?;

    Ok(db)
}

pub fn write_snapshot(path: &Path, db: &TravelDb) -> Result<()> {
    let writer = BufWriter::new(File::create(path)?);

    #[cfg(feature = "compact")]
    {
        let mut encoder = GzEncoder::new(writer, Compression::default());
        bincode::serialize_into(&mut encoder, db)?;
        encoder.finish()?.flush()?;
    }

    #[cfg(not(feature = "compact"))]
    {
        let mut writer = writer;
        bincode::serialize_into(&mut writer, db)?;
        writer.flush()?;
    }

    Ok(())
}
