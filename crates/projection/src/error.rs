//! Error types for the caddie-projection crate.

/// Error type for all fallible operations in the caddie-projection crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProjectionError {
    /// Returned when fewer than two rows are available to project.
    #[error("need at least 2 points to project, got {n}")]
    TooFewPoints {
        /// Number of rows supplied.
        n: usize,
    },

    /// Returned when the feature count is below the output dimension.
    #[error("need at least {min} features to project, got {n_features}")]
    TooFewFeatures {
        /// Number of features supplied.
        n_features: usize,
        /// Minimum number of features.
        min: usize,
    },

    /// Returned when a flat matrix length is not a multiple of its width.
    #[error("feature length {len} is not a multiple of n_features ({n_features})")]
    ShapeMismatch {
        /// Length of the flat slice.
        len: usize,
        /// Expected row width.
        n_features: usize,
    },

    /// Returned when an input contains NaN or infinity.
    #[error("non-finite value in {input}")]
    NonFiniteInput {
        /// Which input contained the value.
        input: &'static str,
    },
}
