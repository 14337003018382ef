//! Shot history and query to numeric feature vectors.

use caddie_shot::{Category, MIN_SHOTS, Query, Shot};
use tracing::debug;

use crate::error::EncodeError;
use crate::mapping::{FeatureMappings, LabelMapping};

/// Width of an encoded feature vector.
pub const N_FEATURES: usize = 4;

/// Column of each feature within an encoded row.
pub mod column {
    pub const DISTANCE: usize = 0;
    pub const LIE: usize = 1;
    pub const BEND: usize = 2;
    pub const SHOT_SHAPE: usize = 3;
}

/// Encoded training matrix, labels and query for one recommendation cycle.
///
/// Row `i` of the matrix and `labels()[i]` describe the `i`-th shot passed to
/// [`encode`], in the same order.
#[derive(Debug, Clone)]
pub struct EncodedDataset {
    /// Row-major `[n_samples × N_FEATURES]`.
    features: Vec<f64>,
    labels: Vec<String>,
    query: [f64; N_FEATURES],
    mappings: FeatureMappings,
}

impl EncodedDataset {
    /// Flat row-major training matrix `[n_samples × N_FEATURES]`.
    pub fn features(&self) -> &[f64] {
        &self.features
    }

    /// One encoded training row.
    ///
    /// # Panics
    ///
    /// Panics if `i >= n_samples()`.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.features[i * N_FEATURES..(i + 1) * N_FEATURES]
    }

    /// Club name for each training row.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Encoded query vector.
    pub fn query(&self) -> &[f64; N_FEATURES] {
        &self.query
    }

    /// Mappings used for both the matrix and the query.
    pub fn mappings(&self) -> &FeatureMappings {
        &self.mappings
    }

    /// Number of encoded training rows.
    pub fn n_samples(&self) -> usize {
        self.labels.len()
    }
}

/// Encodes a shot history and a query with one shared categorical mapping.
///
/// Each row is `[distance, lie_code, bend_code, shape_code]`. Historical
/// rows use the bend inferred from their shot shape; the query uses its own.
/// Distance is left in yards, unscaled.
///
/// The mappings are built from the categories present in `shots` plus the
/// query's, so a query category never seen in the history still encodes.
///
/// # Errors
///
/// Returns [`EncodeError::InsufficientData`] with fewer than
/// [`MIN_SHOTS`] shots.
pub fn encode(shots: &[Shot], query: &Query) -> Result<EncodedDataset, EncodeError> {
    if shots.len() < MIN_SHOTS {
        return Err(EncodeError::InsufficientData {
            n: shots.len(),
            min: MIN_SHOTS,
        });
    }

    let mappings = FeatureMappings {
        lie: LabelMapping::fit(shots.iter().map(Shot::lie).chain([query.lie()])),
        bend: LabelMapping::fit(
            shots
                .iter()
                .map(Shot::inferred_bend)
                .chain([query.bend()]),
        ),
        shot_shape: LabelMapping::fit(
            shots
                .iter()
                .map(Shot::shot_shape)
                .chain([query.shot_shape()]),
        ),
    };
    debug!(
        n_shots = shots.len(),
        n_lies = mappings.lie.len(),
        n_bends = mappings.bend.len(),
        n_shapes = mappings.shot_shape.len(),
        "built label mappings"
    );

    let mut features = Vec::with_capacity(shots.len() * N_FEATURES);
    let mut labels = Vec::with_capacity(shots.len());
    for shot in shots {
        features.extend_from_slice(&[
            f64::from(shot.distance()),
            code_of(&mappings.lie, shot.lie(), "lie")?,
            code_of(&mappings.bend, shot.inferred_bend(), "bend")?,
            code_of(&mappings.shot_shape, shot.shot_shape(), "shot shape")?,
        ]);
        labels.push(shot.club().to_string());
    }

    let query = [
        f64::from(query.distance()),
        code_of(&mappings.lie, query.lie(), "lie")?,
        code_of(&mappings.bend, query.bend(), "bend")?,
        code_of(&mappings.shot_shape, query.shot_shape(), "shot shape")?,
    ];

    Ok(EncodedDataset {
        features,
        labels,
        query,
        mappings,
    })
}

fn code_of<T: Category>(
    mapping: &LabelMapping<T>,
    value: T,
    kind: &'static str,
) -> Result<f64, EncodeError> {
    mapping
        .code(value)
        .map(|c| c as f64)
        .ok_or(EncodeError::UnmappedCategory {
            kind,
            value: value.label(),
        })
}
