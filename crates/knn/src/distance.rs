//! Weighted squared Euclidean distance computation.

/// Computes weighted squared Euclidean distances from `target` to all candidates.
///
/// For each candidate row `i`:
/// ```text
/// out[i] = Σⱼ weights[j] × (candidates[i × n_vars + j] − target[j])²
/// ```
///
/// With all weights at 1.0 this is the plain squared Euclidean distance.
///
/// # Panics
///
/// Debug-asserts that `candidates.len() % n_vars == 0`, `target.len() == n_vars`,
/// `weights.len() == n_vars`, and `out.len() == candidates.len() / n_vars`.
pub(crate) fn weighted_sq_distances(
    candidates: &[f64],
    n_vars: usize,
    target: &[f64],
    weights: &[f64],
    out: &mut [f64],
) {
    debug_assert_eq!(candidates.len() % n_vars, 0);
    debug_assert_eq!(target.len(), n_vars);
    debug_assert_eq!(weights.len(), n_vars);
    debug_assert_eq!(out.len(), candidates.len() / n_vars);

    for (o, row) in out.iter_mut().zip(candidates.chunks_exact(n_vars)) {
        *o = row
            .iter()
            .zip(target)
            .zip(weights)
            .map(|((&c, &t), &w)| {
                let d = c - t;
                w * d * d
            })
            .sum();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_1d_hand_computed() {
        let candidates = [1.0, 3.0, 5.0];
        let mut out = [0.0; 3];
        weighted_sq_distances(&candidates, 1, &[2.0], &[1.0], &mut out);
        assert_abs_diff_eq!(out[0], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(out[1], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(out[2], 9.0, epsilon = 1e-12);
    }

    #[test]
    fn test_unit_weights_is_euclidean() {
        // Two encoded shots: [distance, lie, bend, shape]
        let candidates = [150.0, 0.0, 2.0, 2.0, 140.0, 1.0, 0.0, 1.0];
        let target = [150.0, 1.0, 2.0, 2.0];
        let mut out = [0.0; 2];
        weighted_sq_distances(&candidates, 4, &target, &[1.0; 4], &mut out);
        // (0)^2 + (-1)^2 + 0 + 0 = 1
        assert_abs_diff_eq!(out[0], 1.0, epsilon = 1e-12);
        // (-10)^2 + 0 + (-2)^2 + (-1)^2 = 105
        assert_abs_diff_eq!(out[1], 105.0, epsilon = 1e-12);
    }

    #[test]
    fn test_weights_rebalance_features() {
        // Down-weighting distance lets the lie code dominate.
        let candidates = [150.0, 0.0, 140.0, 1.0];
        let target = [148.0, 1.0];
        let mut plain = [0.0; 2];
        weighted_sq_distances(&candidates, 2, &target, &[1.0, 1.0], &mut plain);
        assert!(plain[0] < plain[1]);

        let mut scaled = [0.0; 2];
        weighted_sq_distances(&candidates, 2, &target, &[0.001, 1.0], &mut scaled);
        assert!(scaled[1] < scaled[0]);
    }

    #[test]
    fn test_zero_distance() {
        let candidates = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let target = [5.0, 6.0, 7.0, 8.0];
        let mut out = [0.0; 2];
        weighted_sq_distances(&candidates, 4, &target, &[1.5, 2.5, 3.5, 0.5], &mut out);
        assert_abs_diff_eq!(out[1], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_weight_ignores_feature() {
        let candidates = [100.0, 9.0];
        let mut out = [0.0; 1];
        weighted_sq_distances(&candidates, 2, &[100.0, 0.0], &[1.0, 0.0], &mut out);
        assert_abs_diff_eq!(out[0], 0.0, epsilon = 1e-12);
    }
}
