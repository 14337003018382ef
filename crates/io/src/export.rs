//! JSON export.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::error::IoError;

/// Writes `value` as pretty-printed JSON followed by a newline.
///
/// # Errors
///
/// Returns [`IoError::Json`] if serialization fails, or
/// [`IoError::Output`] if the writer does.
pub fn write_json<T: Serialize + ?Sized, W: Write>(mut writer: W, value: &T) -> Result<(), IoError> {
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.write_all(b"\n").map_err(|e| IoError::Output {
        reason: e.to_string(),
    })?;
    Ok(())
}

/// Writes `value` as pretty-printed JSON to `path`, replacing any existing
/// file.
///
/// # Errors
///
/// Returns [`IoError::Write`] if the file cannot be created or flushed, or
/// [`IoError::Json`] if serialization fails.
pub fn write_json_file<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), IoError> {
    let write_err = |e: std::io::Error| IoError::Write {
        path: path.to_path_buf(),
        reason: e.to_string(),
    };
    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    write_json(&mut writer, value).map_err(|e| match e {
        IoError::Output { reason } => IoError::Write {
            path: path.to_path_buf(),
            reason,
        },
        other => other,
    })?;
    writer.flush().map_err(write_err)?;
    info!(path = %path.display(), "json written");
    Ok(())
}
