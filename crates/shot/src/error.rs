//! Error types for the caddie-shot crate.

/// Error type for all fallible operations in the caddie-shot crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShotError {
    /// Returned when one or more query or shot fields fail validation.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures, joined by `"; "`.
        details: String,
    },

    /// Returned when a category name does not match any known value.
    #[error("unrecognised {kind} '{value}' (expected one of: {expected})")]
    UnknownCategory {
        /// Which category was being parsed (`lie`, `bend`, `shot shape`).
        kind: &'static str,
        /// The rejected input.
        value: String,
        /// Comma-separated list of accepted names.
        expected: &'static str,
    },

    /// Returned when a shot distance is not a positive number of yards.
    #[error("distance must be a positive number of yards, got {distance}")]
    InvalidDistance {
        /// The rejected distance.
        distance: i64,
    },

    /// Returned when a shot has an empty club name.
    #[error("club name must not be empty")]
    EmptyClubName,
}
