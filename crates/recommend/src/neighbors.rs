//! Shared encode-and-fit step behind both recommendation and visualization.
//!
//! **Not part of the public API.**

use caddie_encode::{EncodedDataset, N_FEATURES, encode};
use caddie_knn::{KnnConfig, KnnResult, knn_classify, neighborhood_size};
use caddie_shot::{MIN_SHOTS, Query, Shot};
use tracing::debug;

use crate::config::RecommendConfig;
use crate::error::RecommendError;

/// Encoded request plus the neighbor vote over it.
pub(crate) struct FittedNeighbors {
    pub(crate) dataset: EncodedDataset,
    pub(crate) knn: KnnResult<String>,
}

/// Encodes `shots` and `query` and fits the weighted neighbor vote.
///
/// Both public entry points go through here, so a recommendation and a
/// visualization for the same inputs always agree on the neighbor set.
pub(crate) fn fit_neighbors(
    shots: &[Shot],
    query: &Query,
    config: &RecommendConfig,
) -> Result<FittedNeighbors, RecommendError> {
    config.validate()?;
    if shots.len() < MIN_SHOTS {
        return Err(RecommendError::InsufficientData {
            n: shots.len(),
            min: MIN_SHOTS,
        });
    }

    let dataset = encode(shots, query)?;
    let k = neighborhood_size(dataset.n_samples(), config.k_min(), config.k_max());
    debug!(n = dataset.n_samples(), k, "neighborhood size");

    let knn_config = KnnConfig::new(k).with_epsilon(config.epsilon());
    let knn = knn_classify(
        dataset.features(),
        N_FEATURES,
        dataset.labels(),
        dataset.query(),
        config.feature_weights(),
        &knn_config,
    )?;
    debug!(predicted = %knn.predicted(), "neighbor vote");

    Ok(FittedNeighbors { dataset, knn })
}
