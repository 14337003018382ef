//! Top-k nearest neighbor selection.

/// Selects the `k_eff` nearest neighbors from squared distances.
///
/// Sorts `(distance, index)` pairs; equal distances keep the lower row index
/// first, so the same history and query always yield the same neighborhood.
///
/// Returns `(indices, distances)` sorted by ascending distance, with
/// distances converted back to Euclidean (`sqrt`).
///
/// # Panics
///
/// Debug-asserts that `k_eff >= 1` and `k_eff <= d2_sq.len()`.
pub(crate) fn select_k_nearest(d2_sq: &[f64], k_eff: usize) -> (Vec<usize>, Vec<f64>) {
    debug_assert!(k_eff >= 1);
    debug_assert!(k_eff <= d2_sq.len());

    let mut pairs: Vec<(f64, usize)> = d2_sq
        .iter()
        .copied()
        .enumerate()
        .map(|(i, d)| (d, i))
        .collect();
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
    pairs.truncate(k_eff);

    pairs.into_iter().map(|(d2, idx)| (idx, d2.sqrt())).unzip()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_k1_closest() {
        let (indices, dists) = select_k_nearest(&[9.0, 1.0, 4.0], 1);
        assert_eq!(indices, vec![1]);
        assert_abs_diff_eq!(dists[0], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_k_equals_n_all_sorted() {
        let (indices, dists) = select_k_nearest(&[4.0, 1.0, 9.0, 0.0], 4);
        assert_eq!(indices, vec![3, 1, 0, 2]);
        for (got, want) in dists.iter().zip([0.0, 1.0, 2.0, 3.0]) {
            assert_abs_diff_eq!(*got, want, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_ties_keep_row_order() {
        let (indices, dists) = select_k_nearest(&[4.0, 4.0, 1.0, 4.0], 3);
        assert_eq!(indices, vec![2, 0, 1]);
        assert_abs_diff_eq!(dists[1], 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(dists[2], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sqrt_correctness() {
        let (indices, dists) = select_k_nearest(&[16.0, 25.0], 2);
        assert_eq!(indices, vec![0, 1]);
        assert_abs_diff_eq!(dists[0], 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(dists[1], 5.0, epsilon = 1e-12);
    }
}
