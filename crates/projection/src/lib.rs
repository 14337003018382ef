//! Two-dimensional projection of encoded shot features.
//!
//! Stacks the encoded history and the query into one matrix, fits a
//! two-component PCA over all of it, and returns 2D coordinates plus the
//! share of variance each axis keeps. A 4D to 2D reduction is lossy; the
//! explained-variance ratios say how lossy.
//!
//! # Quick start
//!
//! ```
//! use caddie_projection::{club_color_map, project};
//!
//! let features = [150.0, 0.0, 0.0, 0.0, 160.0, 0.0, 0.0, 0.0, 240.0, 1.0, 0.0, 1.0];
//! let projection = project(&features, 4, &[155.0, 0.0, 0.0, 0.0]).unwrap();
//! assert_eq!(projection.points().len(), 3);
//!
//! let colors = club_color_map(["8 Iron", "7 Iron", "Driver"]);
//! assert_eq!(colors.len(), 3);
//! ```
//!
//! # Architecture
//!
//! ```text
//! project()
//!   ├─ stack history + query
//!   ├─ Pca::fit()              (pca.rs)
//!   │    └─ symmetric_eigen()  (eigen.rs)
//!   └─ Pca::transform()
//! club_color_map()             (colors.rs)
//! ```

pub mod colors;
pub mod error;
pub mod pca;
pub mod project;

pub(crate) mod eigen;

pub use colors::{PALETTE, club_color_map};
pub use error::ProjectionError;
pub use pca::{N_COMPONENTS, Pca};
pub use project::{Projection, project};
