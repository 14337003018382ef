//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result};

use caddie_confidence::ConfidenceConfig;
use caddie_recommend::RecommendConfig;

use crate::cli::ModelArgs;
use crate::config::{CaddieConfig, ConfidenceToml, ModelToml};

/// Builds a [`ConfidenceConfig`] from the TOML confidence section.
pub fn build_confidence_config(c: &ConfidenceToml) -> ConfidenceConfig {
    ConfidenceConfig::new()
        .with_base_factor(c.base_factor)
        .with_distance_scale(c.distance_scale)
        .with_probability_cap(c.probability_cap)
        .with_high(c.high_probability, c.high_agreement)
        .with_medium(c.medium_probability, c.medium_agreement)
        .with_closeness_band(c.closeness_band)
        .with_max_candidates(c.max_candidates)
}

/// Applies `--k-min` / `--k-max` on top of the TOML model section.
pub fn apply_model_overrides(args: &ModelArgs, model: &mut ModelToml) {
    if let Some(k_min) = args.k_min {
        model.k_min = k_min;
    }
    if let Some(k_max) = args.k_max {
        model.k_max = k_max;
    }
}

/// Builds a validated [`RecommendConfig`] from the model and confidence
/// sections.
pub fn build_recommend_config(config: &CaddieConfig) -> Result<RecommendConfig> {
    let ModelToml {
        k_min,
        k_max,
        epsilon,
        feature_weights,
    } = config.model;
    let cfg = RecommendConfig::new()
        .with_k_bounds(k_min, k_max)
        .with_epsilon(epsilon)
        .with_feature_weights(feature_weights)
        .with_confidence(build_confidence_config(&config.confidence));
    cfg.validate().context("invalid [model] or [confidence] settings")?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_convert() {
        let cfg = build_recommend_config(&CaddieConfig::default()).unwrap();
        assert_eq!(cfg, RecommendConfig::default());
    }

    #[test]
    fn confidence_fields_forwarded() {
        let toml = ConfidenceToml {
            max_candidates: 5,
            closeness_band: 0.1,
            ..ConfidenceToml::default()
        };
        let c = build_confidence_config(&toml);
        assert_eq!(c.max_candidates(), 5);
        assert_eq!(c.closeness_band(), 0.1);
    }

    #[test]
    fn invalid_bounds_rejected() {
        let mut config = CaddieConfig::default();
        config.model.k_min = 8;
        config.model.k_max = 4;
        let err = build_recommend_config(&config).unwrap_err();
        assert!(format!("{err:#}").contains("invalid [model] or [confidence] settings"));
    }

    #[test]
    fn cli_overrides_replace_only_given_bounds() {
        let mut model = ModelToml::default();
        apply_model_overrides(&ModelArgs::default(), &mut model);
        assert_eq!((model.k_min, model.k_max), (3, 10));

        let args = ModelArgs {
            k_min: Some(5),
            k_max: None,
        };
        apply_model_overrides(&args, &mut model);
        assert_eq!((model.k_min, model.k_max), (5, 10));
    }

    #[test]
    fn settings_beyond_engine_limits_rejected() {
        let mut config = CaddieConfig::default();
        config.model.k_min = 1;
        config.model.k_max = 1;
        assert!(build_recommend_config(&config).is_err());

        let mut config = CaddieConfig::default();
        config.confidence.probability_cap = 1.0;
        let err = build_recommend_config(&config).unwrap_err();
        assert!(format!("{err:#}").contains("probability_cap"));
    }
}
