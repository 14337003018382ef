//! Inverse-distance weighted voting.

/// Weight of one neighbor: `1 / (distance + epsilon)`.
///
/// Finite for an exact match (`distance = 0`) as long as `epsilon > 0`.
#[inline]
pub fn inverse_distance_weight(distance: f64, epsilon: f64) -> f64 {
    1.0 / (distance + epsilon)
}

/// Sums neighbor weights per label.
///
/// Labels appear in order of their nearest neighbor. The returned vector is
/// then sorted by total weight, descending; the sort is stable so a tie goes
/// to the label whose nearest neighbor is closer.
pub(crate) fn tally_votes<L: Clone + PartialEq>(
    nn_labels: &[L],
    nn_dists: &[f64],
    epsilon: f64,
) -> Vec<(L, f64)> {
    debug_assert_eq!(nn_labels.len(), nn_dists.len());

    let mut votes: Vec<(L, f64)> = Vec::new();
    for (label, &d) in nn_labels.iter().zip(nn_dists) {
        let w = inverse_distance_weight(d, epsilon);
        match votes.iter_mut().find(|(l, _)| l == label) {
            Some((_, total)) => *total += w,
            None => votes.push((label.clone(), w)),
        }
    }
    votes.sort_by(|a, b| b.1.total_cmp(&a.1));
    votes
}
