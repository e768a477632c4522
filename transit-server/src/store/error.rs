//! Reference data error types.

use std::path::PathBuf;

use crate::domain::DomainError;

/// Errors that can occur when loading reference data.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Seed file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Seed file is not valid JSON for the expected shape
    #[error("JSON parse error in {}: {message}", .path.display())]
    Json { path: PathBuf, message: String },

    /// Data parsed but violates a domain invariant
    #[error("invalid reference data: {0}")]
    Invalid(#[from] DomainError),
}
