//! Error types for the caddie-confidence crate.

/// Error type for all fallible operations in the caddie-confidence crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfidenceError {
    /// Returned when there are no neighbors to score.
    #[error("no neighbors to score")]
    NoNeighbors,

    /// Returned when distances and labels differ in length.
    #[error("{distances} neighbor distances but {labels} labels")]
    LengthMismatch {
        /// Number of distances.
        distances: usize,
        /// Number of labels.
        labels: usize,
    },

    /// Returned when a neighbor distance is negative, NaN or infinite.
    #[error("neighbor distance must be finite and non-negative, got {distance}")]
    InvalidDistance {
        /// The rejected distance.
        distance: f64,
    },

    /// Returned when configuration is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_no_neighbors() {
        assert_eq!(ConfidenceError::NoNeighbors.to_string(), "no neighbors to score");
    }

    #[test]
    fn display_length_mismatch() {
        let e = ConfidenceError::LengthMismatch {
            distances: 3,
            labels: 2,
        };
        assert_eq!(e.to_string(), "3 neighbor distances but 2 labels");
    }

    #[test]
    fn display_invalid_config() {
        let e = ConfidenceError::InvalidConfig {
            reason: "bad".to_string(),
        };
        assert_eq!(e.to_string(), "invalid configuration: bad");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<ConfidenceError>();
    }
}
