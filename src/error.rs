//! Error types for the record store, its configuration and the lounge API.

use thiserror::Error;

/// Errors surfaced by mutating store operations.
///
/// Collection reads never produce these: an unreadable or corrupt collection
/// is logged and replaced by the caller's default. The seeding flag is the
/// exception, see [`StoreError::Read`]. Unknown ids are not errors at this
/// layer either; they show up as `None`/`false` results.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The durable area rejected a write (quota exceeded, storage disabled, I/O).
    #[error("failed to persist '{key}' to {location}: {source}")]
    Persist {
        key: String,
        location: String,
        #[source]
        source: std::io::Error,
    },

    /// A value that gates a destructive step could not be read.
    #[error("failed to read '{key}' from {location}: {source}")]
    Read {
        key: String,
        location: String,
        #[source]
        source: std::io::Error,
    },

    /// A collection could not be serialized.
    #[error("failed to encode '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    /// True when the failure came from the durable area rather than the data.
    pub fn is_persist_failure(&self) -> bool {
        matches!(self, Self::Persist { .. } | Self::Read { .. })
    }
}

/// Errors raised while loading a [`StoreConfig`](crate::config::StoreConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("no storage location: set `storage_dir` or run where a data directory exists")]
    NoStorageLocation,

    #[error("remote mode selected but no [remote] section configured")]
    MissingRemote,

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

/// Failure reasons of the lounge API, shared by local and remote modes.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Update or delete referenced an unknown booking.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Non-2xx response; `message` comes from the body's `message` field when present.
    #[error("{message} (HTTP {status})")]
    Status { status: u16, message: String },

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body did not have the expected shape.
    #[error("Invalid response: {0}")]
    Decode(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for lounge API operations
pub type ApiResult<T> = Result<T, ApiError>;
