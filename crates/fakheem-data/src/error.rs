//! Fetch error type.

/// Error type for catalog fetches.
///
/// Every variant is the same failure from the view's point of view: the
/// catalog could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),

    #[error("Invalid product record {id}: {reason}")]
    InvalidRecord { id: String, reason: String },

    #[error("Product source unavailable: {0}")]
    Unavailable(String),
}
