//! Error type for sync operations.

use std::path::PathBuf;

use thiserror::Error;

/// Failures that stop a sync run.
///
/// The first four variants are raised before anything is written, so a run
/// that fails with one of them leaves every output file untouched.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The named source file does not exist.
    #[error("{} not found.", .path.display())]
    FileAbsent { path: PathBuf },

    /// The source file could not be read or is not a JSON object.
    #[error("Could not decode {}: {reason}", .path.display())]
    MalformedJson { path: PathBuf, reason: String },

    /// Auto mode found no candidate file that loads.
    #[error("No valid configuration files found in {}.", .dir.display())]
    NoValidSourceFound { dir: PathBuf },

    /// The source filename matches none of the known dialect filenames.
    #[error("Unsupported source file: {}", .path.display())]
    UnsupportedSourceFilename { path: PathBuf },

    /// Writing a translated document failed.
    #[error("Failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rendering a translated document failed.
    #[error("Failed to serialize JSON config")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SyncError>;
