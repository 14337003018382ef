//! Orchestrator configuration.

use caddie_confidence::ConfidenceConfig;
use caddie_encode::N_FEATURES;
use caddie_knn::{DEFAULT_EPSILON, DEFAULT_K_MAX, DEFAULT_K_MIN, validate_k_bounds};

use crate::error::RecommendError;

/// Configuration for one recommendation or visualization request.
///
/// `epsilon` is shared by the neighbor vote and the confidence weights, so
/// setting it here overrides the value inside the confidence config.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendConfig {
    k_min: usize,
    k_max: usize,
    epsilon: f64,
    /// Squared-distance weights for distance, lie, bend, shape.
    feature_weights: [f64; N_FEATURES],
    confidence: ConfidenceConfig,
}

impl RecommendConfig {
    /// Creates a configuration with defaults.
    ///
    /// Defaults: `k` in `[3, 10]`, `epsilon = 1e-4`, unit feature weights
    /// (plain, unscaled Euclidean distance), default [`ConfidenceConfig`].
    pub fn new() -> Self {
        Self {
            k_min: DEFAULT_K_MIN,
            k_max: DEFAULT_K_MAX,
            epsilon: DEFAULT_EPSILON,
            feature_weights: [1.0; N_FEATURES],
            confidence: ConfidenceConfig::new().with_epsilon(DEFAULT_EPSILON),
        }
    }

    /// Sets the neighborhood size bounds.
    pub fn with_k_bounds(mut self, k_min: usize, k_max: usize) -> Self {
        self.k_min = k_min;
        self.k_max = k_max;
        self
    }

    /// Sets the inverse-distance offset.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self.confidence = self.confidence.with_epsilon(epsilon);
        self
    }

    /// Sets per-feature distance weights.
    pub fn with_feature_weights(mut self, weights: [f64; N_FEATURES]) -> Self {
        self.feature_weights = weights;
        self
    }

    /// Sets the confidence policy.
    pub fn with_confidence(mut self, confidence: ConfidenceConfig) -> Self {
        self.confidence = confidence.with_epsilon(self.epsilon);
        self
    }

    /// Returns the smallest neighborhood size.
    pub fn k_min(&self) -> usize {
        self.k_min
    }

    /// Returns the largest neighborhood size.
    pub fn k_max(&self) -> usize {
        self.k_max
    }

    /// Returns the inverse-distance offset.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the per-feature distance weights (distance, lie, bend, shape).
    pub fn feature_weights(&self) -> &[f64; N_FEATURES] {
        &self.feature_weights
    }

    /// Returns the confidence scoring policy.
    pub fn confidence(&self) -> &ConfidenceConfig {
        &self.confidence
    }

    /// Validates this configuration and the nested confidence policy.
    pub fn validate(&self) -> Result<(), RecommendError> {
        validate_k_bounds(self.k_min, self.k_max)?;
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(RecommendError::InvalidConfig {
                reason: format!("epsilon must be positive, got {}", self.epsilon),
            });
        }
        if let Some(w) = self
            .feature_weights
            .iter()
            .find(|w| !w.is_finite() || **w < 0.0)
        {
            return Err(RecommendError::InvalidConfig {
                reason: format!("feature weights must be finite and >= 0, got {w}"),
            });
        }
        if self.feature_weights.iter().all(|&w| w == 0.0) {
            return Err(RecommendError::InvalidConfig {
                reason: "at least one feature weight must be positive".to_string(),
            });
        }
        self.confidence.validate()?;
        Ok(())
    }
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self::new()
    }
}
