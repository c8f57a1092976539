//! Error types for report persistence.
//!
//! Building, combining and formatting reports never fail. Only reading and
//! writing the persisted JSON form can.

use std::path::PathBuf;

/// Errors raised while loading or exporting reports.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The bytes are not a valid encoding of the expected document.
    #[error("invalid report data: {0}")]
    Deserialization(#[source] serde_json::Error),

    #[error("failed to serialize report: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ReportError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReportError::Io { path: path.into(), source }
    }
}
