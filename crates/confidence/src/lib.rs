//! Calibrated probabilities and confidence tiers from a neighbor vote.
//!
//! Turns the k nearest neighbors of a query (their distances and club
//! labels) into one [`ClubScore`] per distinct club: a probability that is
//! discounted when the neighborhood is loose and never exceeds the
//! configured cap, the share of neighbors agreeing, and a
//! [`ConfidenceTier`].
//!
//! # Quick start
//!
//! ```
//! use caddie_confidence::{ConfidenceConfig, ConfidenceTier, score_neighbors, shortlist};
//!
//! let config = ConfidenceConfig::default();
//! let scores = score_neighbors(&[0.0, 2.0, 9.0], &["7 Iron", "7 Iron", "6 Iron"], &config).unwrap();
//! let listed = shortlist(scores, &config);
//!
//! assert_eq!(*listed[0].club(), "7 Iron");
//! assert!(listed[0].probability() <= 0.95);
//! assert_eq!(listed[0].tier(), ConfidenceTier::High);
//! ```

pub mod config;
pub mod error;
pub mod scorer;
pub mod tier;

pub use config::{ConfidenceConfig, MAX_PROBABILITY};
pub use error::ConfidenceError;
pub use scorer::{ClubScore, confidence_factor, extrapolation_score, score_neighbors, shortlist};
pub use tier::ConfidenceTier;
