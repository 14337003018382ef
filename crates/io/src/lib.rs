//! Shot-log import and JSON export for the caddie command line.
//!
//! Reads a CSV shot log into a [`ShotLog`] (users, their rounds, and the
//! shots in each round), which serves as the [`ShotSource`] for the
//! recommendation engine, and writes result payloads as JSON.
//!
//! [`ShotSource`]: caddie_shot::ShotSource

mod error;
mod export;
mod import;
mod shot_log;

pub use error::IoError;
pub use export::{write_json, write_json_file};
pub use import::{DEFAULT_COURSE, DEFAULT_USER, ImportSummary, read_shots, read_shots_csv};
pub use shot_log::{Round, ShotLog};
