//! Shot log data model for the caddie recommendation engine.
//!
//! Holds the categorical attributes of a shot ([`Lie`], [`Bend`],
//! [`ShotShape`]), immutable [`Shot`] records, validated [`Query`] values,
//! hole-bend inference for historical rows, and per-club distance
//! statistics.
//!
//! # Quick start
//!
//! ```
//! use caddie_shot::{Bend, ClubAverages, ClubStats, Lie, LieBucket, RawQuery, Shot, ShotShape};
//!
//! let shots = vec![
//!     Shot::new("7 Iron", 148, Lie::Fairway, ShotShape::Straight).unwrap(),
//!     Shot::new("7 Iron", 152, Lie::Fairway, ShotShape::Draw).unwrap(),
//! ];
//! assert_eq!(shots[1].inferred_bend(), Bend::DoglegLeft);
//!
//! let stats = ClubStats::from_shots(&shots);
//! assert_eq!(stats.average_distance("7 Iron", LieBucket::FairwayOrTee), Some(150.0));
//!
//! let query = RawQuery::new("150", "Fairway", "Straight").parse().unwrap();
//! assert_eq!(query.lie(), Lie::Fairway);
//! ```

pub mod bag;
pub mod bend;
pub mod category;
pub mod error;
pub mod shot;
pub mod source;
pub mod stats;

pub(crate) mod validate;

pub use bag::{DEFAULT_BAG, bag_order};
pub use bend::infer_bend;
pub use category::{Bend, Category, Lie, ShotShape};
pub use error::ShotError;
pub use shot::{Query, RawQuery, Shot};
pub use source::ShotSource;
pub use stats::{BucketAverage, ClubAverages, ClubStats, ClubSummary, LieBucket};

/// Fewest historical shots for which a neighbor vote is meaningful.
pub const MIN_SHOTS: usize = 3;
