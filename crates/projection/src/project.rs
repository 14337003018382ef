//! History-plus-query projection.

use ndarray::{Array2, ArrayView2};

use crate::error::ProjectionError;
use crate::pca::{N_COMPONENTS, Pca};

/// 2D coordinates of the history rows and the query.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    points: Vec<[f64; N_COMPONENTS]>,
    query: [f64; N_COMPONENTS],
    explained_variance: [f64; N_COMPONENTS],
}

impl Projection {
    /// Coordinates of each history row, in input order.
    pub fn points(&self) -> &[[f64; N_COMPONENTS]] {
        &self.points
    }

    /// Coordinates of the query.
    pub fn query(&self) -> [f64; N_COMPONENTS] {
        self.query
    }

    /// Fraction of variance captured by each axis.
    pub fn explained_variance(&self) -> [f64; N_COMPONENTS] {
        self.explained_variance
    }
}

/// Projects history rows and the query together onto two axes.
///
/// `features` is the flat row-major history matrix `[n × n_features]` and
/// `query` one row of the same width. The PCA is fitted over all `n + 1`
/// rows so the query lands in the same frame as the history.
///
/// # Errors
///
/// Returns [`ProjectionError`] on shape mismatches, non-finite values, an
/// empty history, or fewer than two features.
pub fn project(
    features: &[f64],
    n_features: usize,
    query: &[f64],
) -> Result<Projection, ProjectionError> {
    if n_features < N_COMPONENTS {
        return Err(ProjectionError::TooFewFeatures {
            n_features,
            min: N_COMPONENTS,
        });
    }
    if !features.len().is_multiple_of(n_features) {
        return Err(ProjectionError::ShapeMismatch {
            len: features.len(),
            n_features,
        });
    }
    if query.len() != n_features {
        return Err(ProjectionError::ShapeMismatch {
            len: query.len(),
            n_features,
        });
    }
    if query.iter().any(|v| !v.is_finite()) {
        return Err(ProjectionError::NonFiniteInput { input: "query" });
    }
    if features.iter().any(|v| !v.is_finite()) {
        return Err(ProjectionError::NonFiniteInput { input: "features" });
    }

    let n = features.len() / n_features;
    if n == 0 {
        return Err(ProjectionError::TooFewPoints { n: 1 });
    }

    let mut stacked = Vec::with_capacity(features.len() + n_features);
    stacked.extend_from_slice(features);
    stacked.extend_from_slice(query);
    let stacked = ArrayView2::from_shape((n + 1, n_features), &stacked).map_err(|_| {
        ProjectionError::ShapeMismatch {
            len: features.len(),
            n_features,
        }
    })?;

    let pca = Pca::fit(stacked)?;
    let coords: Array2<f64> = pca.transform(stacked);

    let mut rows = coords.rows().into_iter().map(|r| [r[0], r[1]]);
    let points: Vec<[f64; N_COMPONENTS]> = rows.by_ref().take(n).collect();
    let query = rows.next().unwrap_or([0.0, 0.0]);

    Ok(Projection {
        points,
        query,
        explained_variance: pca.explained_variance_ratio(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn points_and_query_share_frame() {
        let features = [
            148.0, 0.0, 0.0, 0.0, //
            152.0, 0.0, 0.0, 0.0, //
            230.0, 1.0, 1.0, 1.0, //
        ];
        let p = project(&features, 4, &[150.0, 0.0, 0.0, 0.0]).unwrap();
        assert_eq!(p.points().len(), 3);

        // Centered over all four rows.
        let sum_x: f64 = p.points().iter().map(|c| c[0]).sum::<f64>() + p.query()[0];
        assert_abs_diff_eq!(sum_x, 0.0, epsilon = 1e-9);

        // The query sits between the two near-identical rows on the main axis.
        let (a, b) = (p.points()[0][0], p.points()[1][0]);
        assert!(a.min(b) < p.query()[0] && p.query()[0] < a.max(b));
        assert!(p.explained_variance()[0] > 0.99);
    }

    #[test]
    fn shape_errors() {
        assert!(matches!(
            project(&[1.0, 2.0, 3.0], 2, &[0.0, 0.0]),
            Err(ProjectionError::ShapeMismatch { len: 3, .. })
        ));
        assert!(matches!(
            project(&[1.0, 2.0], 2, &[0.0]),
            Err(ProjectionError::ShapeMismatch { len: 1, .. })
        ));
        assert!(matches!(
            project(&[], 2, &[0.0, 0.0]),
            Err(ProjectionError::TooFewPoints { .. })
        ));
        assert!(matches!(
            project(&[1.0, 2.0], 2, &[f64::INFINITY, 0.0]),
            Err(ProjectionError::NonFiniteInput { input: "query" })
        ));
    }
}
