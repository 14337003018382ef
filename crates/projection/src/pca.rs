//! Two-component principal component analysis.

use ndarray::{Array1, Array2, ArrayView2, Axis};

use crate::eigen::symmetric_eigen;
use crate::error::ProjectionError;

/// Number of output axes.
pub const N_COMPONENTS: usize = 2;

/// Fitted two-component PCA.
///
/// Components are the two leading eigenvectors of the sample covariance of
/// the fitted rows, each with its largest-magnitude loading positive.
#[derive(Debug, Clone, PartialEq)]
pub struct Pca {
    mean: Array1<f64>,
    /// `[n_features × 2]`, one component per column.
    components: Array2<f64>,
    explained_variance_ratio: [f64; N_COMPONENTS],
}

impl Pca {
    /// Fits the projection to `data` (`[n_rows × n_features]`).
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError`] if there are fewer than two rows, fewer
    /// than two features, or any non-finite value.
    pub fn fit(data: ArrayView2<'_, f64>) -> Result<Self, ProjectionError> {
        let (n_rows, n_features) = data.dim();
        if n_rows < 2 {
            return Err(ProjectionError::TooFewPoints { n: n_rows });
        }
        if n_features < N_COMPONENTS {
            return Err(ProjectionError::TooFewFeatures {
                n_features,
                min: N_COMPONENTS,
            });
        }
        if data.iter().any(|v| !v.is_finite()) {
            return Err(ProjectionError::NonFiniteInput { input: "data" });
        }

        let mean = data
            .mean_axis(Axis(0))
            .ok_or(ProjectionError::TooFewPoints { n: n_rows })?;
        let centered = &data - &mean;
        let covariance = centered.t().dot(&centered) / (n_rows - 1) as f64;

        let (values, vectors) = symmetric_eigen(&covariance);
        // Round-off can leave tiny negative eigenvalues.
        let values = values.mapv(|v| v.max(0.0));
        let total = values.sum();

        let mut explained_variance_ratio = [0.0; N_COMPONENTS];
        if total > 0.0 {
            for (ratio, v) in explained_variance_ratio.iter_mut().zip(values.iter()) {
                *ratio = v / total;
            }
        }

        let components = vectors
            .slice(ndarray::s![.., ..N_COMPONENTS])
            .to_owned();

        Ok(Self {
            mean,
            components,
            explained_variance_ratio,
        })
    }

    /// Projects `data` (`[n_rows × n_features]`) onto the two components.
    ///
    /// # Panics
    ///
    /// Panics if `data` does not have the fitted feature count.
    pub fn transform(&self, data: ArrayView2<'_, f64>) -> Array2<f64> {
        (&data - &self.mean).dot(&self.components)
    }

    /// Fraction of total variance captured by each output axis.
    pub fn explained_variance_ratio(&self) -> [f64; N_COMPONENTS] {
        self.explained_variance_ratio
    }

    /// Per-feature means of the fitted rows.
    pub fn mean(&self) -> &Array1<f64> {
        &self.mean
    }

    /// Loadings, one component per column.
    pub fn components(&self) -> &Array2<f64> {
        &self.components
    }
}
