// crates/goshanta-core/src/loader/common_io.rs
use crate::error::{Result, TravelError};
use std::fs::{self, File};
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Open a dataset file, transparently decompressing `*.gz`.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        TravelError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if !is_gzip(path) {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(TravelError::Io(io::Error::new(
            io::ErrorKind::Unsupported,
            format!(
                "{} is gzip-compressed but the 'compact' feature is disabled",
                path.display()
            ),
        )))
    }
}

fn is_gzip(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("gz"))
        .unwrap_or(false)
}

/// `<dir>/<file>.<suffix>`, next to the source dataset.
pub fn get_cache_path(source: &Path, suffix: &str) -> Result<PathBuf> {
    let filename = source.file_name().ok_or_else(|| {
        TravelError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} does not name a file", source.display()),
        ))
    })?;
    Ok(source.with_file_name(format!("{}.{suffix}", filename.to_string_lossy())))
}

/// A snapshot is fresh when it exists and is not older than its source.
pub fn is_cache_fresh(source: &Path, cache: &Path) -> bool {
    let cache_time = match fs::metadata(cache).and_then(|m| m.modified()) {
        Ok(t) => t,
        Err(_) => return false,
    };
    match fs::metadata(source).and_then(|m| m.modified()) {
        Ok(source_time) => source_time <= cache_time,
        Err(_) => false,
    }
}
