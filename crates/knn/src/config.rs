//! Configuration for KNN classification queries.

use crate::error::KnnError;

/// Default inverse-distance offset. Keeps an exact match (distance 0) at a
/// finite weight of `1 / epsilon`.
pub const DEFAULT_EPSILON: f64 = 1e-4;

/// Configuration for a KNN classification query.
///
/// # Example
///
/// ```
/// use caddie_knn::KnnConfig;
///
/// let config = KnnConfig::new(5).with_epsilon(1e-3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct KnnConfig {
    /// Number of nearest neighbors that vote.
    k: usize,
    /// Offset in `1 / (distance + epsilon)`.
    epsilon: f64,
}

impl KnnConfig {
    /// Creates a new configuration with the given k and `epsilon = 1e-4`.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            epsilon: DEFAULT_EPSILON,
        }
    }

    /// Sets the inverse-distance offset.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Returns the number of nearest neighbors.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Returns the inverse-distance offset.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Validates this configuration.
    ///
    /// Returns an error if k < 1 or epsilon is non-finite / non-positive.
    pub fn validate(&self) -> Result<(), KnnError> {
        if self.k < 1 {
            return Err(KnnError::InvalidK { k: self.k });
        }
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(KnnError::InvalidEpsilon {
                epsilon: self.epsilon,
            });
        }
        Ok(())
    }
}

impl Default for KnnConfig {
    fn default() -> Self {
        Self::new(crate::DEFAULT_K_MIN)
    }
}
