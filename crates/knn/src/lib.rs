//! Distance-weighted K-nearest neighbor classification.
//!
//! Each of the k nearest candidates votes for its label with weight
//! `1 / (distance + ε)`, so a near-exact match outweighs several distant
//! neighbors and an exact match stays finite.
//!
//! # Quick start
//!
//! ```
//! use caddie_knn::{KnnConfig, knn_classify, neighborhood_size};
//!
//! // Two features per candidate: [distance, lie code]
//! let candidates = [150.0, 0.0, 152.0, 0.0, 148.0, 0.0, 250.0, 1.0];
//! let labels = ["7 Iron", "7 Iron", "7 Iron", "Driver"];
//! let k = neighborhood_size(labels.len(), 3, 10);
//! let config = KnnConfig::new(k);
//!
//! let result = knn_classify(&candidates, 2, &labels, &[150.0, 0.0], &[1.0, 1.0], &config).unwrap();
//! assert_eq!(*result.predicted(), "7 Iron");
//! assert_eq!(result.k(), 3);
//! ```
//!
//! # Architecture
//!
//! ```text
//! knn_classify()
//!   ├─ validate inputs
//!   ├─ weighted_sq_distances()   (distance.rs)
//!   ├─ select_k_nearest()        (select.rs)
//!   └─ tally_votes()             (vote.rs)
//! ```

pub mod config;
pub mod error;
pub mod knn;
pub mod result;
pub mod vote;

pub(crate) mod distance;
pub(crate) mod select;

pub use config::{DEFAULT_EPSILON, KnnConfig};
pub use error::KnnError;
pub use knn::knn_classify;
pub use result::KnnResult;
pub use vote::inverse_distance_weight;

/// Smallest neighborhood used by default, and the lowest accepted `k_min`.
pub const DEFAULT_K_MIN: usize = 3;
/// Largest neighborhood used by default, and the highest accepted `k_max`.
pub const DEFAULT_K_MAX: usize = 10;

/// Neighborhood size for `n_samples` training rows.
///
/// Returns `round(sqrt(n_samples))` clamped to `[k_min, k_max]`, and never
/// more than `n_samples`. Larger k smooths noise; smaller k keeps the vote
/// local to the situation being asked about.
pub fn neighborhood_size(n_samples: usize, k_min: usize, k_max: usize) -> usize {
    let k = (n_samples as f64).sqrt().round() as usize;
    k.clamp(k_min, k_max.max(k_min)).min(n_samples)
}

/// Checks that `DEFAULT_K_MIN <= k_min <= k_max <= DEFAULT_K_MAX`.
///
/// The range may be narrowed but not widened.
pub fn validate_k_bounds(k_min: usize, k_max: usize) -> Result<(), KnnError> {
    if k_min < DEFAULT_K_MIN || k_min > k_max || k_max > DEFAULT_K_MAX {
        return Err(KnnError::InvalidKBounds { k_min, k_max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighborhood_size_known_values() {
        assert_eq!(neighborhood_size(3, 3, 10), 3);
        assert_eq!(neighborhood_size(9, 3, 10), 3);
        assert_eq!(neighborhood_size(16, 3, 10), 4);
        assert_eq!(neighborhood_size(20, 3, 10), 4); // round(4.47) = 4
        assert_eq!(neighborhood_size(21, 3, 10), 5); // round(4.58) = 5
        assert_eq!(neighborhood_size(50, 3, 10), 7);
        assert_eq!(neighborhood_size(100, 3, 10), 10);
        assert_eq!(neighborhood_size(1000, 3, 10), 10);
    }

    #[test]
    fn test_neighborhood_size_small_histories() {
        // Never more neighbors than rows.
        assert_eq!(neighborhood_size(0, 3, 10), 0);
        assert_eq!(neighborhood_size(1, 3, 10), 1);
        assert_eq!(neighborhood_size(2, 3, 10), 2);
    }

    #[test]
    fn test_validate_k_bounds() {
        assert!(validate_k_bounds(3, 10).is_ok());
        assert!(validate_k_bounds(4, 4).is_ok());
        assert!(matches!(
            validate_k_bounds(0, 10),
            Err(KnnError::InvalidKBounds { k_min: 0, .. })
        ));
        assert!(validate_k_bounds(8, 2).is_err());
    }

    #[test]
    fn test_validate_k_bounds_stays_within_defaults() {
        assert!(validate_k_bounds(1, 1).is_err());
        assert!(validate_k_bounds(2, 10).is_err());
        assert!(validate_k_bounds(3, 11).is_err());
        assert!(validate_k_bounds(5, 50).is_err());
        assert!(validate_k_bounds(10, 10).is_ok());
    }
}
