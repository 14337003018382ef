use std::path::PathBuf;

use serde::Deserialize;

/// Top-level caddie configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaddieConfig {
    /// Shot-log settings.
    #[serde(default)]
    pub io: IoToml,

    /// Neighbor model settings.
    #[serde(default)]
    pub model: ModelToml,

    /// Confidence scoring policy.
    #[serde(default)]
    pub confidence: ConfidenceToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    #[serde(default = "default_shots")]
    pub shots: PathBuf,
    #[serde(default = "default_user")]
    pub user: String,
}

impl Default for IoToml {
    fn default() -> Self {
        Self {
            shots: default_shots(),
            user: default_user(),
        }
    }
}

fn default_shots() -> PathBuf {
    PathBuf::from("shots.csv")
}
fn default_user() -> String {
    "default".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelToml {
    #[serde(default = "default_k_min")]
    pub k_min: usize,
    #[serde(default = "default_k_max")]
    pub k_max: usize,
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
    /// Distance, lie, bend, shape.
    #[serde(default = "default_feature_weights")]
    pub feature_weights: [f64; 4],
}

impl Default for ModelToml {
    fn default() -> Self {
        Self {
            k_min: default_k_min(),
            k_max: default_k_max(),
            epsilon: default_epsilon(),
            feature_weights: default_feature_weights(),
        }
    }
}

fn default_k_min() -> usize {
    3
}
fn default_k_max() -> usize {
    10
}
fn default_epsilon() -> f64 {
    1e-4
}
fn default_feature_weights() -> [f64; 4] {
    [1.0; 4]
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfidenceToml {
    #[serde(default = "default_base_factor")]
    pub base_factor: f64,
    #[serde(default = "default_distance_scale")]
    pub distance_scale: f64,
    #[serde(default = "default_probability_cap")]
    pub probability_cap: f64,
    #[serde(default = "default_high_probability")]
    pub high_probability: f64,
    #[serde(default = "default_high_agreement")]
    pub high_agreement: f64,
    #[serde(default = "default_medium_probability")]
    pub medium_probability: f64,
    #[serde(default = "default_medium_agreement")]
    pub medium_agreement: f64,
    #[serde(default = "default_closeness_band")]
    pub closeness_band: f64,
    #[serde(default = "default_max_candidates")]
    pub max_candidates: usize,
}

impl Default for ConfidenceToml {
    fn default() -> Self {
        Self {
            base_factor: default_base_factor(),
            distance_scale: default_distance_scale(),
            probability_cap: default_probability_cap(),
            high_probability: default_high_probability(),
            high_agreement: default_high_agreement(),
            medium_probability: default_medium_probability(),
            medium_agreement: default_medium_agreement(),
            closeness_band: default_closeness_band(),
            max_candidates: default_max_candidates(),
        }
    }
}

fn default_base_factor() -> f64 {
    0.7
}
fn default_distance_scale() -> f64 {
    10.0
}
fn default_probability_cap() -> f64 {
    0.95
}
fn default_high_probability() -> f64 {
    0.70
}
fn default_high_agreement() -> f64 {
    60.0
}
fn default_medium_probability() -> f64 {
    0.40
}
fn default_medium_agreement() -> f64 {
    30.0
}
fn default_closeness_band() -> f64 {
    0.30
}
fn default_max_candidates() -> usize {
    3
}
