//! Feature encoding for the caddie neighbor model.
//!
//! Turns a golfer's shot history and a query into a numeric training matrix,
//! a parallel vector of club labels and a query vector, using one
//! request-scoped [`FeatureMappings`] for every categorical column.
//!
//! ```
//! use caddie_encode::{N_FEATURES, encode};
//! use caddie_shot::{Bend, Lie, Query, Shot, ShotShape};
//!
//! let shots: Vec<Shot> = [148, 152, 150]
//!     .into_iter()
//!     .map(|d| Shot::new("7 Iron", d, Lie::Fairway, ShotShape::Straight).unwrap())
//!     .collect();
//! let query = Query::new(150, Lie::Fairway, Bend::Straight).unwrap();
//!
//! let ds = encode(&shots, &query).unwrap();
//! assert_eq!(ds.features().len(), 3 * N_FEATURES);
//! assert_eq!(ds.query()[0], 150.0);
//! ```

pub mod encoder;
pub mod error;
pub mod mapping;

pub use encoder::{EncodedDataset, N_FEATURES, column, encode};
pub use error::EncodeError;
pub use mapping::{FeatureMappings, LabelMapping};
