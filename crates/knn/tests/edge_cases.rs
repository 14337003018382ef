//! Edge case integration tests.

use caddie_knn::{KnnConfig, knn_classify};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Target equals a candidate exactly: weight stays finite and it wins.
#[test]
fn exact_match_is_finite() {
    let candidates = [150.0, 0.0, 160.0, 0.0, 140.0, 0.0];
    let labels = ["7 Iron", "6 Iron", "8 Iron"];
    let config = KnnConfig::new(3);
    let result =
        knn_classify(&candidates, 2, &labels, &[150.0, 0.0], &[1.0, 1.0], &config).unwrap();
    assert_eq!(*result.predicted(), "7 Iron");
    assert!(result.nn_distances()[0].abs() < 1e-12);
    for (_, w) in result.votes() {
        assert!(w.is_finite());
    }
}

/// All identical candidates: every distance is zero, tie goes to the first row.
#[test]
fn identical_candidates() {
    let candidates = vec![5.0; 10];
    let labels: Vec<u32> = (0..10).collect();
    let config = KnnConfig::new(4);
    let result = knn_classify(&candidates, 1, &labels, &[5.0], &[1.0], &config).unwrap();
    assert_eq!(result.nn_indices(), &[0, 1, 2, 3]);
    assert_eq!(*result.predicted(), 0);
    for &d in result.nn_distances() {
        assert!(d.abs() < 1e-12, "expected 0 distance, got {d}");
    }
}

/// Four-feature rows, as produced by the shot encoder.
#[test]
fn four_dimensional() {
    let mut rng = StdRng::seed_from_u64(7);
    let n = 60;
    let mut candidates = Vec::with_capacity(n * 4);
    let mut labels = Vec::with_capacity(n);
    for i in 0..n {
        candidates.push(rng.random_range(50.0..300.0));
        candidates.push(rng.random_range(0..4) as f64);
        candidates.push(rng.random_range(0..3) as f64);
        candidates.push(rng.random_range(0..5) as f64);
        labels.push(format!("club {}", i % 6));
    }
    let config = KnnConfig::new(8);
    let result = knn_classify(
        &candidates,
        4,
        &labels,
        &[175.0, 1.0, 1.0, 2.0],
        &[1.0; 4],
        &config,
    )
    .unwrap();

    assert_eq!(result.k(), 8);
    for w in result.nn_distances().windows(2) {
        assert!(w[0] <= w[1]);
    }
    let voted: usize = result
        .votes()
        .iter()
        .map(|(l, _)| result.nn_labels().iter().filter(|n| *n == l).count())
        .sum();
    assert_eq!(voted, 8);
    assert_eq!(result.predicted(), &result.votes()[0].0);
}

/// Same input, same neighborhood.
#[test]
fn deterministic() {
    let candidates: Vec<f64> = (0..40).map(|i| (i % 7) as f64 * 10.0).collect();
    let labels: Vec<usize> = (0..40).map(|i| i % 3).collect();
    let config = KnnConfig::new(6);
    let a = knn_classify(&candidates, 1, &labels, &[30.0], &[1.0], &config).unwrap();
    let b = knn_classify(&candidates, 1, &labels, &[30.0], &[1.0], &config).unwrap();
    assert_eq!(a, b);
}
