//! Error types for manifest splitting.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for manifest splitting operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for manifest splitting.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors (e.g. a shard count of zero).
    #[error("config error: {0}")]
    Config(String),

    /// Failed to decode a manifest file.
    #[error("failed to parse manifest {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Failed to encode a shard manifest.
    #[error("failed to serialize shard {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// File read/write failure.
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
