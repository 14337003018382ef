//! Error types for the caddie-recommend crate.

use caddie_confidence::ConfidenceError;
use caddie_encode::EncodeError;
use caddie_knn::KnnError;
use caddie_projection::ProjectionError;
use caddie_shot::ShotError;

/// Error type for all fallible operations in the caddie-recommend crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecommendError {
    /// Returned when the caller's query is malformed. Nothing is computed.
    #[error(transparent)]
    Validation(#[from] ShotError),

    /// Returned when the user has too few historical shots.
    #[error("insufficient shot history: got {n} shots, need at least {min}")]
    InsufficientData {
        /// Number of historical shots found.
        n: usize,
        /// Minimum required.
        min: usize,
    },

    /// Returned when the shot store cannot be read.
    #[error("failed to load shots for user '{user}': {message}")]
    Source {
        /// User whose shots were requested.
        user: String,
        /// Underlying error message.
        message: String,
    },

    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Wrapped error from the caddie-encode crate.
    #[error(transparent)]
    Encode(EncodeError),

    /// Wrapped error from the caddie-knn crate.
    #[error(transparent)]
    Knn(#[from] KnnError),

    /// Wrapped error from the caddie-confidence crate.
    #[error(transparent)]
    Confidence(#[from] ConfidenceError),

    /// Wrapped error from the caddie-projection crate.
    #[error(transparent)]
    Projection(#[from] ProjectionError),
}

impl From<EncodeError> for RecommendError {
    fn from(e: EncodeError) -> Self {
        match e {
            EncodeError::InsufficientData { n, min } => Self::InsufficientData { n, min },
            other => Self::Encode(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_insufficient_data() {
        let e = RecommendError::InsufficientData { n: 2, min: 3 };
        assert_eq!(
            e.to_string(),
            "insufficient shot history: got 2 shots, need at least 3"
        );
    }

    #[test]
    fn validation_is_transparent() {
        let e = RecommendError::from(ShotError::EmptyClubName);
        assert_eq!(e.to_string(), ShotError::EmptyClubName.to_string());
    }

    #[test]
    fn encoder_shortfall_maps_to_insufficient_data() {
        let e = RecommendError::from(EncodeError::InsufficientData { n: 1, min: 3 });
        assert_eq!(e, RecommendError::InsufficientData { n: 1, min: 3 });
    }

    #[test]
    fn display_source() {
        let e = RecommendError::Source {
            user: "alex".to_string(),
            message: "disk on fire".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "failed to load shots for user 'alex': disk on fire"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<RecommendError>();
    }
}
