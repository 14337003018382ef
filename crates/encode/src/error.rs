//! Error types for the caddie-encode crate.

/// Error type for all fallible operations in the caddie-encode crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EncodeError {
    /// Returned when the shot history is too small for a neighbor vote.
    #[error("insufficient shot history: got {n} shots, need at least {min}")]
    InsufficientData {
        /// Number of historical shots supplied.
        n: usize,
        /// Minimum required.
        min: usize,
    },

    /// Returned when a category value has no code in the request's mapping.
    #[error("{kind} '{value}' has no code in the label mapping")]
    UnmappedCategory {
        /// Which feature was being encoded.
        kind: &'static str,
        /// The value that could not be encoded.
        value: &'static str,
    },
}
