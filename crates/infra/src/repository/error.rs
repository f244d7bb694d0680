use std::path::PathBuf;

use thiserror::Error;

use stockroom_core::DomainError;

/// Persistence failure. A missing file is not an error (see `LoadSource::Missing`).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read inventory file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write inventory file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed inventory file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Well-formed JSON that is not a `name -> integer` object.
    #[error("invalid inventory file {}: {source}", path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: DomainError,
    },

    #[error("failed to serialize inventory: {0}")]
    Serialize(#[source] serde_json::Error),
}
