//! Coarse confidence labels.

use std::fmt;

use serde::Serialize;

use crate::config::ConfidenceConfig;

/// High/Medium/Low summary of a probability and neighbor agreement.
///
/// Ordered from weakest to strongest, so `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ConfidenceTier {
    Low,
    Medium,
    High,
}

impl ConfidenceTier {
    /// Assigns a tier from an adjusted probability and an agreement
    /// percentage.
    ///
    /// High needs both the high probability and the high agreement
    /// threshold; Medium needs both medium thresholds. Raising either input
    /// never lowers the tier.
    pub fn assign(probability: f64, agreement: f64, config: &ConfidenceConfig) -> Self {
        if probability >= config.high_probability() && agreement >= config.high_agreement() {
            Self::High
        } else if probability >= config.medium_probability()
            && agreement >= config.medium_agreement()
        {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Returns the display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
