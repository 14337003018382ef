//! Integration tests for the neighborhood-size heuristic.

use caddie_knn::{DEFAULT_K_MAX, DEFAULT_K_MIN, neighborhood_size};

#[test]
fn bounds_hold_for_every_history_size() {
    for n in 3..=1000 {
        let k = neighborhood_size(n, DEFAULT_K_MIN, DEFAULT_K_MAX);
        assert!((3..=10).contains(&k), "n={n} gave k={k}");
        assert!(k <= n, "n={n} gave k={k}");
    }
}

#[test]
fn never_exceeds_sample_count() {
    for n in 1..=1000 {
        assert!(neighborhood_size(n, DEFAULT_K_MIN, DEFAULT_K_MAX) <= n);
    }
}

#[test]
fn grows_with_sqrt_between_bounds() {
    // round(sqrt(n)) for n where it sits strictly inside [3, 10]
    assert_eq!(neighborhood_size(25, 3, 10), 5);
    assert_eq!(neighborhood_size(36, 3, 10), 6);
    assert_eq!(neighborhood_size(49, 3, 10), 7);
    assert_eq!(neighborhood_size(64, 3, 10), 8);
    assert_eq!(neighborhood_size(81, 3, 10), 9);
}

#[test]
fn monotone_in_history_size() {
    let mut prev = 0;
    for n in 1..=1000 {
        let k = neighborhood_size(n, DEFAULT_K_MIN, DEFAULT_K_MAX);
        assert!(k >= prev, "k dropped from {prev} to {k} at n={n}");
        prev = k;
    }
}

#[test]
fn custom_bounds() {
    assert_eq!(neighborhood_size(400, 5, 15), 15);
    assert_eq!(neighborhood_size(10, 5, 15), 5);
}
