//! Error types for the caddie-knn crate.

/// Error type for all fallible operations in the caddie-knn crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KnnError {
    /// Returned when the candidates slice is empty.
    #[error("no candidates provided")]
    EmptyCandidates,

    /// Returned when k is zero.
    #[error("k must be >= 1, got {k}")]
    InvalidK {
        /// The invalid k value.
        k: usize,
    },

    /// Returned when the neighborhood bounds are empty or leave `3..=10`.
    #[error("k bounds must satisfy 3 <= k_min <= k_max <= 10, got {k_min}..={k_max}")]
    InvalidKBounds {
        /// Lower bound.
        k_min: usize,
        /// Upper bound.
        k_max: usize,
    },

    /// Returned when epsilon is non-finite or non-positive.
    #[error("epsilon must be finite and positive, got {epsilon}")]
    InvalidEpsilon {
        /// The invalid epsilon value.
        epsilon: f64,
    },

    /// Returned when the target slice length does not match n_vars.
    #[error("target length {target} does not match n_vars {n_vars}")]
    TargetDimensionMismatch {
        /// Length of the target slice.
        target: usize,
        /// Expected number of variables.
        n_vars: usize,
    },

    /// Returned when the weights slice length does not match n_vars.
    #[error("weights length {weights} does not match n_vars {n_vars}")]
    WeightsDimensionMismatch {
        /// Length of the weights slice.
        weights: usize,
        /// Expected number of variables.
        n_vars: usize,
    },

    /// Returned when the candidates slice length is not divisible by n_vars.
    #[error("candidates length {len} is not divisible by n_vars {n_vars}")]
    CandidatesShapeMismatch {
        /// Length of the candidates slice.
        len: usize,
        /// Expected number of variables.
        n_vars: usize,
    },

    /// Returned when there is not exactly one label per candidate row.
    #[error("{labels} labels for {candidates} candidates")]
    LabelsLengthMismatch {
        /// Number of labels supplied.
        labels: usize,
        /// Number of candidate rows.
        candidates: usize,
    },

    /// Returned when a required input contains NaN or infinity.
    #[error("non-finite value in {input}")]
    NonFiniteInput {
        /// Name of the input containing the non-finite value.
        input: &'static str,
    },

    /// Returned when a feature weight is negative.
    #[error("feature weights must be non-negative")]
    NegativeWeight,
}
