//! Confidence scoring policy.

use crate::error::ConfidenceError;

/// Highest probability any candidate may be reported with.
pub const MAX_PROBABILITY: f64 = 0.95;

/// Thresholds and shape parameters for turning neighbor votes into
/// probabilities and tiers.
///
/// Tier boundaries are policy, not derived values; the defaults are tuned
/// for unscaled yardage distances.
///
/// # Example
///
/// ```
/// use caddie_confidence::ConfidenceConfig;
///
/// let config = ConfidenceConfig::new()
///     .with_high(0.75, 70.0)
///     .with_max_candidates(2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConfidenceConfig {
    epsilon: f64,
    base_factor: f64,
    distance_scale: f64,
    probability_cap: f64,
    high_probability: f64,
    high_agreement: f64,
    medium_probability: f64,
    medium_agreement: f64,
    closeness_band: f64,
    max_candidates: usize,
}

impl ConfidenceConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `epsilon = 1e-4`, `base_factor = 0.7`,
    /// `distance_scale = 10.0`, `probability_cap = 0.95`,
    /// High at `p >= 0.70` with `agreement >= 60%`, Medium at `p >= 0.40`
    /// with `agreement >= 30%`, `closeness_band = 0.30`,
    /// `max_candidates = 3`.
    pub fn new() -> Self {
        Self {
            epsilon: 1e-4,
            base_factor: 0.7,
            distance_scale: 10.0,
            probability_cap: MAX_PROBABILITY,
            high_probability: 0.70,
            high_agreement: 60.0,
            medium_probability: 0.40,
            medium_agreement: 30.0,
            closeness_band: 0.30,
            max_candidates: 3,
        }
    }

    /// Sets the inverse-distance offset used for neighbor weights.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Sets the confidence-factor floor (the factor ranges `[base, 1]`).
    pub fn with_base_factor(mut self, base: f64) -> Self {
        self.base_factor = base;
        self
    }

    /// Sets the mean neighbor distance at which distance confidence halves.
    pub fn with_distance_scale(mut self, scale: f64) -> Self {
        self.distance_scale = scale;
        self
    }

    /// Sets the ceiling on any reported probability.
    ///
    /// The ceiling may be lowered below [`MAX_PROBABILITY`] but not raised.
    pub fn with_probability_cap(mut self, cap: f64) -> Self {
        self.probability_cap = cap;
        self
    }

    /// Sets the High tier thresholds (probability, agreement percent).
    pub fn with_high(mut self, probability: f64, agreement: f64) -> Self {
        self.high_probability = probability;
        self.high_agreement = agreement;
        self
    }

    /// Sets the Medium tier thresholds (probability, agreement percent).
    pub fn with_medium(mut self, probability: f64, agreement: f64) -> Self {
        self.medium_probability = probability;
        self.medium_agreement = agreement;
        self
    }

    /// Sets how far below the top probability a candidate may be and still
    /// be listed.
    pub fn with_closeness_band(mut self, band: f64) -> Self {
        self.closeness_band = band;
        self
    }

    /// Sets the maximum number of listed candidates.
    pub fn with_max_candidates(mut self, n: usize) -> Self {
        self.max_candidates = n;
        self
    }

    /// Returns the inverse-distance offset.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the confidence-factor floor.
    pub fn base_factor(&self) -> f64 {
        self.base_factor
    }

    /// Returns the mean distance at which distance confidence halves.
    pub fn distance_scale(&self) -> f64 {
        self.distance_scale
    }

    /// Returns the ceiling on reported probabilities.
    pub fn probability_cap(&self) -> f64 {
        self.probability_cap
    }

    /// Returns the High tier probability threshold.
    pub fn high_probability(&self) -> f64 {
        self.high_probability
    }

    /// Returns the High tier agreement threshold, in percent.
    pub fn high_agreement(&self) -> f64 {
        self.high_agreement
    }

    /// Returns the Medium tier probability threshold.
    pub fn medium_probability(&self) -> f64 {
        self.medium_probability
    }

    /// Returns the Medium tier agreement threshold, in percent.
    pub fn medium_agreement(&self) -> f64 {
        self.medium_agreement
    }

    /// Returns how far below the top probability a listed candidate may be.
    pub fn closeness_band(&self) -> f64 {
        self.closeness_band
    }

    /// Returns the maximum number of listed candidates.
    pub fn max_candidates(&self) -> usize {
        self.max_candidates
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfidenceError::InvalidConfig`] if a parameter is out of
    /// range or the Medium thresholds exceed the High ones.
    pub fn validate(&self) -> Result<(), ConfidenceError> {
        let invalid = |reason: String| Err(ConfidenceError::InvalidConfig { reason });

        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return invalid(format!("epsilon must be positive, got {}", self.epsilon));
        }
        if !(0.0..=1.0).contains(&self.base_factor) {
            return invalid(format!(
                "base_factor must be in [0, 1], got {}",
                self.base_factor
            ));
        }
        if !self.distance_scale.is_finite() || self.distance_scale <= 0.0 {
            return invalid(format!(
                "distance_scale must be positive, got {}",
                self.distance_scale
            ));
        }
        if !(self.probability_cap > 0.0 && self.probability_cap <= MAX_PROBABILITY) {
            return invalid(format!(
                "probability_cap must be in (0, {MAX_PROBABILITY}], got {}",
                self.probability_cap
            ));
        }
        if !(0.0..=1.0).contains(&self.medium_probability)
            || !(0.0..=1.0).contains(&self.high_probability)
        {
            return invalid("tier probabilities must be in [0, 1]".to_string());
        }
        if !(0.0..=100.0).contains(&self.medium_agreement)
            || !(0.0..=100.0).contains(&self.high_agreement)
        {
            return invalid("tier agreements must be in [0, 100]".to_string());
        }
        if self.medium_probability > self.high_probability
            || self.medium_agreement > self.high_agreement
        {
            return invalid("medium thresholds must not exceed high thresholds".to_string());
        }
        if !self.closeness_band.is_finite() || self.closeness_band < 0.0 {
            return invalid(format!(
                "closeness_band must be non-negative, got {}",
                self.closeness_band
            ));
        }
        if self.max_candidates == 0 {
            return invalid("max_candidates must be >= 1".to_string());
        }
        Ok(())
    }
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self::new()
    }
}
