//! Error types for caddie-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the caddie-io crate.
///
/// Bad rows inside an otherwise readable shot log are not errors; they are
/// skipped and counted in the import summary.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Returned when a required CSV column is absent from the header.
    #[error("column '{name}' not found in shot log header")]
    MissingColumn {
        /// Name of the missing column.
        name: &'static str,
    },

    /// Wraps an error originating from the CSV reader.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Wraps an error originating from JSON serialization.
    #[error("json error: {reason}")]
    Json {
        /// Description of the underlying serialization failure.
        reason: String,
    },

    /// Returned when writing to an output stream fails.
    #[error("write failed: {reason}")]
    Output {
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Returned when an output file cannot be written.
    #[error("failed to write {}: {reason}", path.display())]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        IoError::Csv {
            reason: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        if e.is_io() {
            IoError::Output {
                reason: e.to_string(),
            }
        } else {
            IoError::Json {
                reason: e.to_string(),
            }
        }
    }
}
