//! Club recommendation engine.
//!
//! Composes the shot model, feature encoder, neighbor vote, confidence
//! scorer and projection into one request/response cycle. Every call is
//! self-contained: the model is refitted from the shots passed in and
//! nothing is cached, so concurrent requests share no state.
//!
//! # Quick start
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! use caddie_recommend::{RecommendConfig, recommend_for_user};
//! use caddie_shot::{Lie, RawQuery, Shot, ShotShape};
//!
//! let mut log = BTreeMap::new();
//! log.insert(
//!     "sam".to_string(),
//!     [148, 152, 150]
//!         .into_iter()
//!         .map(|d| Shot::new("7 Iron", d, Lie::Fairway, ShotShape::Straight).unwrap())
//!         .collect::<Vec<_>>(),
//! );
//!
//! let raw = RawQuery::new("150", "Fairway", "Straight");
//! let rec = recommend_for_user(&log, "sam", &raw, &RecommendConfig::default()).unwrap();
//! assert_eq!(rec.top().unwrap().club(), "7 Iron");
//! assert_eq!(rec.k_used(), 3);
//! ```
//!
//! # Architecture
//!
//! ```text
//! recommend_for_user() / visualize_for_user()
//!   ├─ RawQuery::parse()                  (caddie-shot)
//!   ├─ ShotSource::shots_for_user()
//!   └─ recommend() / visualize()
//!        ├─ fit_neighbors()               (neighbors.rs)
//!        │    ├─ encode()                 (caddie-encode)
//!        │    ├─ neighborhood_size()      (caddie-knn)
//!        │    └─ knn_classify()           (caddie-knn)
//!        ├─ score_neighbors() / shortlist() or extrapolation_score()
//!        │                                (caddie-confidence)
//!        └─ project() / club_color_map()  (caddie-projection)
//! ```

pub mod config;
pub mod error;
pub mod recommend;
pub mod recommendation;
pub mod visualize;

pub(crate) mod neighbors;

pub use config::RecommendConfig;
pub use error::RecommendError;
pub use recommend::{recommend, recommend_for_user};
pub use recommendation::{Candidate, ExtrapolationWarning, Recommendation};
pub use visualize::{QueryPoint, ShotPoint, VisualizationPayload, visualize, visualize_for_user};
