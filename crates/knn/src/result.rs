//! Output type for KNN classification queries.

/// Result of a KNN classification query.
///
/// Holds the winning label, the k nearest neighbors (sorted by ascending
/// distance) and the per-label weighted vote totals.
#[derive(Debug, Clone, PartialEq)]
pub struct KnnResult<L> {
    /// Label with the highest weighted vote.
    predicted: L,
    /// Candidate row indices of the k nearest neighbors.
    nn_indices: Vec<usize>,
    /// Euclidean distances of the k nearest neighbors.
    nn_distances: Vec<f64>,
    /// Labels of the k nearest neighbors.
    nn_labels: Vec<L>,
    /// `(label, total weight)` sorted by weight, descending.
    votes: Vec<(L, f64)>,
}

impl<L> KnnResult<L> {
    /// Creates a new `KnnResult`.
    pub(crate) fn new(
        predicted: L,
        nn_indices: Vec<usize>,
        nn_distances: Vec<f64>,
        nn_labels: Vec<L>,
        votes: Vec<(L, f64)>,
    ) -> Self {
        Self {
            predicted,
            nn_indices,
            nn_distances,
            nn_labels,
            votes,
        }
    }

    /// Returns the predicted label.
    pub fn predicted(&self) -> &L {
        &self.predicted
    }

    /// Returns the candidate indices of the k nearest neighbors.
    pub fn nn_indices(&self) -> &[usize] {
        &self.nn_indices
    }

    /// Returns the Euclidean distances of the k nearest neighbors.
    pub fn nn_distances(&self) -> &[f64] {
        &self.nn_distances
    }

    /// Returns the labels of the k nearest neighbors.
    pub fn nn_labels(&self) -> &[L] {
        &self.nn_labels
    }

    /// Returns the weighted vote per label, strongest first.
    pub fn votes(&self) -> &[(L, f64)] {
        &self.votes
    }

    /// Number of neighbors that voted (`min(k, n_candidates)`).
    pub fn k(&self) -> usize {
        self.nn_indices.len()
    }

    /// Whether candidate row `index` is among the neighbors.
    pub fn is_neighbor(&self, index: usize) -> bool {
        self.nn_indices.contains(&index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let result = KnnResult::new(
            "7 Iron",
            vec![4, 0, 2],
            vec![0.0, 1.0, 2.0],
            vec!["7 Iron", "7 Iron", "8 Iron"],
            vec![("7 Iron", 10001.0), ("8 Iron", 0.5)],
        );
        assert_eq!(*result.predicted(), "7 Iron");
        assert_eq!(result.nn_indices(), &[4, 0, 2]);
        assert_eq!(result.nn_distances(), &[0.0, 1.0, 2.0]);
        assert_eq!(result.nn_labels().len(), 3);
        assert_eq!(result.votes()[1].0, "8 Iron");
        assert_eq!(result.k(), 3);
        assert!(result.is_neighbor(2));
        assert!(!result.is_neighbor(1));
    }
}
