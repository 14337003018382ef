//! Shot-log CSV import.
//!
//! Expected header columns (any order, extra columns ignored):
//!
//! | column        | required | default    |
//! |---------------|----------|------------|
//! | `club_name`   | yes      |            |
//! | `distance`    | yes      |            |
//! | `shot_shape`  | no       | `Straight` |
//! | `lie`         | no       | `Fairway`  |
//! | `user`        | no       | `default`  |
//! | `course_name` | no       | `Imported` |
//!
//! A row with a blank or non-integer distance, an empty club name or an
//! unrecognised category is skipped with a warning, not a failure.

use std::io::Read;
use std::path::Path;

use caddie_shot::{Lie, Shot, ShotShape};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::IoError;
use crate::shot_log::ShotLog;

/// User assigned to rows without a `user` column.
pub const DEFAULT_USER: &str = "default";
/// Course assigned to rows without a `course_name` column.
pub const DEFAULT_COURSE: &str = "Imported";

const REQUIRED_COLUMNS: [&str; 2] = ["club_name", "distance"];

/// Outcome counts for one import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    /// Data rows read (header excluded).
    pub total_records: usize,
    /// Rows that became shots.
    pub imported: usize,
    /// Rows dropped as invalid.
    pub skipped: usize,
}

#[derive(Debug, Deserialize)]
struct ShotRow {
    club_name: String,
    #[serde(default)]
    distance: String,
    #[serde(default)]
    shot_shape: Option<String>,
    #[serde(default)]
    lie: Option<String>,
    #[serde(default)]
    user: Option<String>,
    #[serde(default)]
    course_name: Option<String>,
}

/// Blank cells count as absent.
fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl ShotRow {
    fn to_shot(&self) -> Result<Shot, String> {
        let distance = self.distance.trim();
        if distance.is_empty() {
            return Err("missing distance".to_string());
        }
        let distance: u32 = distance
            .parse()
            .map_err(|_| format!("distance '{distance}' is not a whole number of yards"))?;
        let lie = match non_blank(&self.lie) {
            Some(s) => s.parse::<Lie>().map_err(|e| e.to_string())?,
            None => Lie::Fairway,
        };
        let shape = match non_blank(&self.shot_shape) {
            Some(s) => s.parse::<ShotShape>().map_err(|e| e.to_string())?,
            None => ShotShape::Straight,
        };
        Shot::new(self.club_name.trim(), distance, lie, shape).map_err(|e| e.to_string())
    }
}

/// Reads a shot log from a CSV file.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if `path` does not exist, and
/// otherwise as [`read_shots`].
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn read_shots_csv(path: &Path) -> Result<(ShotLog, ImportSummary), IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = std::fs::File::open(path).map_err(|e| IoError::Csv {
        reason: format!("cannot open {}: {e}", path.display()),
    })?;
    read_shots(file)
}

/// Reads a shot log from any CSV source.
///
/// # Errors
///
/// Returns [`IoError::MissingColumn`] if `club_name` or `distance` is not
/// in the header, or [`IoError::Csv`] if the header cannot be read.
pub fn read_shots<R: Read>(source: R) -> Result<(ShotLog, ImportSummary), IoError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    for name in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == name) {
            return Err(IoError::MissingColumn { name });
        }
    }
    debug!(columns = headers.len(), "shot log header ok");

    let mut log = ShotLog::new();
    let mut summary = ImportSummary::default();

    for (i, row) in reader.deserialize::<ShotRow>().enumerate() {
        summary.total_records += 1;
        // Header is line 1.
        let line = i + 2;
        let parsed = row
            .map_err(|e| e.to_string())
            .and_then(|row| row.to_shot().map(|shot| (row, shot)));
        match parsed {
            Ok((row, shot)) => {
                let user = non_blank(&row.user).unwrap_or(DEFAULT_USER);
                let course = non_blank(&row.course_name).unwrap_or(DEFAULT_COURSE);
                log.push(user, course, shot);
                summary.imported += 1;
            }
            Err(reason) => {
                warn!(line, %reason, "skipping shot log row");
                summary.skipped += 1;
            }
        }
    }

    info!(
        imported = summary.imported,
        skipped = summary.skipped,
        "shot log imported"
    );
    Ok((log, summary))
}
