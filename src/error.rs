//! Error types for loading stats documents.

use thiserror::Error;

/// Why a stats document could not be turned into a record.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The request never produced a body (connection refused, missing file, ...).
    #[error("fetching {path}: {reason}")]
    Network { path: String, reason: String },
    /// The server answered with a non-success status.
    #[error("fetching {path}: server answered {status}")]
    Status { path: String, status: u16 },
    /// The body is not JSON.
    #[error("parsing {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    /// The body is JSON but not shaped like the expected record.
    #[error("decoding {path}: {source}")]
    Shape {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Resource path the failed load was aimed at.
    pub fn path(&self) -> &str {
        match self {
            Self::Network { path, .. }
            | Self::Status { path, .. }
            | Self::Parse { path, .. }
            | Self::Shape { path, .. } => path,
        }
    }
}
