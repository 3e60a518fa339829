// crates/goshanta-core/src/error.rs
use thiserror::Error;

/// Errors produced while loading data or querying a collection.
#[derive(Debug, Error)]
pub enum TravelError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot error: {0}")]
    Bincode(#[from] bincode::Error),

    /// A collection backend failed to answer a query.
    ///
    /// The whole search is aborted; no partial response is ever assembled.
    #[error("query against `{collection}` failed: {message}")]
    DataAccess {
        collection: &'static str,
        message: String,
    },

    #[error("invalid vocabulary: {0}")]
    InvalidVocabulary(String),
}

impl TravelError {
    /// Shorthand used by collection backends.
    pub fn data_access(collection: &'static str, message: impl Into<String>) -> Self {
        TravelError::DataAccess {
            collection,
            message: message.into(),
        }
    }

    /// `true` for failures raised by a backend while answering a query.
    pub fn is_data_access(&self) -> bool {
        matches!(self, TravelError::DataAccess { .. })
    }
}

pub type Result<T> = std::result::Result<T, TravelError>;
