use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the FontSrcAudit application
#[derive(Debug, Error)]
pub enum Error {
    /// IO operations errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Sources root is missing or not a directory
    #[error("Invalid path: {}", .0.display())]
    InvalidPath(PathBuf),
    /// A sidecar file exists but could not be read
    #[error("Could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The metadata sidecar is present but is not valid JSON for our schema
    #[error("Corrupt metadata in {}: {source}", path.display())]
    MetadataCorrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Filesystem failure while walking a family tree
    #[error("Traversal error at {}: {source}", path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for FontSrcAudit operations
pub type Result<T> = std::result::Result<T, Error>;
