//! KNN classification entry point.

use crate::config::KnnConfig;
use crate::distance::weighted_sq_distances;
use crate::error::KnnError;
use crate::result::KnnResult;
use crate::select::select_k_nearest;
use crate::vote::tally_votes;

/// Validates all inputs and returns the derived `n_candidates`.
fn validate_inputs<L>(
    candidates: &[f64],
    n_vars: usize,
    labels: &[L],
    target: &[f64],
    weights: &[f64],
    config: &KnnConfig,
) -> Result<usize, KnnError> {
    config.validate()?;

    // n_vars must be >= 1 to avoid division by zero
    if n_vars == 0 {
        return Err(KnnError::CandidatesShapeMismatch {
            len: candidates.len(),
            n_vars,
        });
    }

    if candidates.is_empty() {
        return Err(KnnError::EmptyCandidates);
    }
    if !candidates.len().is_multiple_of(n_vars) {
        return Err(KnnError::CandidatesShapeMismatch {
            len: candidates.len(),
            n_vars,
        });
    }

    let n_candidates = candidates.len() / n_vars;

    if labels.len() != n_candidates {
        return Err(KnnError::LabelsLengthMismatch {
            labels: labels.len(),
            candidates: n_candidates,
        });
    }
    if target.len() != n_vars {
        return Err(KnnError::TargetDimensionMismatch {
            target: target.len(),
            n_vars,
        });
    }
    if weights.len() != n_vars {
        return Err(KnnError::WeightsDimensionMismatch {
            weights: weights.len(),
            n_vars,
        });
    }

    if candidates.iter().any(|v| !v.is_finite()) {
        return Err(KnnError::NonFiniteInput {
            input: "candidates",
        });
    }
    if target.iter().any(|v| !v.is_finite()) {
        return Err(KnnError::NonFiniteInput { input: "target" });
    }
    if weights.iter().any(|v| !v.is_finite()) {
        return Err(KnnError::NonFiniteInput { input: "weights" });
    }
    if weights.iter().any(|&w| w < 0.0) {
        return Err(KnnError::NegativeWeight);
    }

    Ok(n_candidates)
}

/// Classifies `target` by an inverse-distance weighted vote of its k nearest
/// candidates.
///
/// The model is fitted fresh on every call; nothing is cached between calls.
///
/// # Arguments
///
/// * `candidates`: flat row-major candidate matrix `[n_candidates × n_vars]`
/// * `n_vars`: number of features per candidate
/// * `labels`: class label of each candidate row `[n_candidates]`
/// * `target`: query point `[n_vars]`
/// * `weights`: per-feature distance weights `[n_vars]`; all 1.0 gives plain
///   Euclidean distance
/// * `config`: KNN configuration (k, epsilon)
///
/// `k` is clamped to `n_candidates`. Each neighbor votes with weight
/// `1 / (distance + epsilon)`; the label with the largest total wins, ties
/// going to the label with the nearer neighbor.
///
/// # Errors
///
/// Returns [`KnnError`] if inputs are invalid (empty candidates, dimension
/// or label-count mismatches, non-finite values, negative weights, invalid
/// config).
pub fn knn_classify<L: Clone + PartialEq>(
    candidates: &[f64],
    n_vars: usize,
    labels: &[L],
    target: &[f64],
    weights: &[f64],
    config: &KnnConfig,
) -> Result<KnnResult<L>, KnnError> {
    let n_candidates = validate_inputs(candidates, n_vars, labels, target, weights, config)?;
    let k_eff = config.k().min(n_candidates);

    let mut d2_sq = vec![0.0; n_candidates];
    weighted_sq_distances(candidates, n_vars, target, weights, &mut d2_sq);

    let (nn_indices, nn_dists) = select_k_nearest(&d2_sq, k_eff);
    let nn_labels: Vec<L> = nn_indices.iter().map(|&i| labels[i].clone()).collect();

    let votes = tally_votes(&nn_labels, &nn_dists, config.epsilon());
    // k_eff >= 1 so there is at least one vote; fall back to the nearest label.
    let predicted = votes
        .first()
        .map(|(l, _)| l.clone())
        .unwrap_or_else(|| nn_labels[0].clone());

    Ok(KnnResult::new(
        predicted, nn_indices, nn_dists, nn_labels, votes,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_candidate() {
        let config = KnnConfig::new(5);
        let result = knn_classify(&[42.0], 1, &["A"], &[0.0], &[1.0], &config).unwrap();
        assert_eq!(*result.predicted(), "A");
        assert_eq!(result.k(), 1); // k_eff = min(5, 1)
    }

    #[test]
    fn test_k_greater_than_n_clamped() {
        let config = KnnConfig::new(100);
        let result =
            knn_classify(&[1.0, 2.0, 3.0], 1, &[0, 1, 2], &[0.0], &[1.0], &config).unwrap();
        assert_eq!(result.nn_distances().len(), 3);
    }

    #[test]
    fn test_k1_nearest_wins() {
        let config = KnnConfig::new(1);
        let result =
            knn_classify(&[10.0, 20.0, 5.0], 1, &["a", "b", "c"], &[6.0], &[1.0], &config)
                .unwrap();
        assert_eq!(*result.predicted(), "c");
        assert_eq!(result.nn_indices(), &[2]);
    }

    #[test]
    fn test_weighted_vote_beats_majority() {
        // Neighbors of 100: 100 ("wedge"), 110 and 111 ("9 iron")
        let candidates = [100.0, 110.0, 111.0, 300.0];
        let labels = ["wedge", "9 iron", "9 iron", "driver"];
        let config = KnnConfig::new(3);
        let result = knn_classify(&candidates, 1, &labels, &[100.0], &[1.0], &config).unwrap();
        assert_eq!(*result.predicted(), "wedge");
        assert_eq!(result.votes().len(), 2);
        assert!(!result.nn_labels().contains(&"driver"));
    }

    #[test]
    fn test_error_labels_length() {
        let config = KnnConfig::new(1);
        let result = knn_classify(&[1.0, 2.0], 1, &["a"], &[0.0], &[1.0], &config);
        assert!(matches!(
            result,
            Err(KnnError::LabelsLengthMismatch {
                labels: 1,
                candidates: 2
            })
        ));
    }

    #[test]
    fn test_error_nan_candidate() {
        let config = KnnConfig::new(1);
        let result = knn_classify(&[f64::NAN], 1, &["a"], &[0.0], &[1.0], &config);
        assert!(matches!(
            result,
            Err(KnnError::NonFiniteInput {
                input: "candidates"
            })
        ));
    }

    #[test]
    fn test_error_negative_weight() {
        let config = KnnConfig::new(1);
        let result = knn_classify(&[1.0], 1, &["a"], &[0.0], &[-1.0], &config);
        assert!(matches!(result, Err(KnnError::NegativeWeight)));
    }
}
