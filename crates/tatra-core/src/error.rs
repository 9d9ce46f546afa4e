// crates/tatra-core/src/error.rs
use thiserror::Error;

/// Errors raised at the data boundary (loading, caching, fetching).
///
/// The filter engine itself never fails: unknown slugs, empty sets and
/// missing coordinates are handled by exclusion.
#[derive(Debug, Error)]
pub enum TrailError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid configuration for {key}: {message}")]
    Config { key: String, message: String },

    #[cfg(feature = "fetch")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GraphQL error: {}", messages.join("; "))]
    GraphQl { messages: Vec<String> },
}

pub type Result<T> = std::result::Result<T, TrailError>;
