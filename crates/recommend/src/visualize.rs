//! Decision-space visualization payload.

use std::collections::BTreeMap;

use caddie_encode::N_FEATURES;
use caddie_projection::{club_color_map, project};
use caddie_shot::{Bend, Lie, Query, RawQuery, Shot, ShotShape, ShotSource};
use serde::Serialize;
use tracing::info;

use crate::config::RecommendConfig;
use crate::error::RecommendError;
use crate::neighbors::fit_neighbors;
use crate::recommend::load_shots;

/// One historical shot placed in the 2D view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShotPoint {
    pub x: f64,
    pub y: f64,
    pub club: String,
    pub distance: u32,
    pub lie: Lie,
    pub shot_shape: ShotShape,
    /// Bend inferred from the shot shape.
    pub bend: Bend,
    /// Whether this shot is one of the k neighbors that voted.
    pub is_neighbor: bool,
}

/// The query placed in the same 2D view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryPoint {
    pub x: f64,
    pub y: f64,
    pub distance: u32,
    pub lie: Lie,
    pub bend: Bend,
    pub shot_shape: ShotShape,
}

/// Everything a front end needs to draw the decision space.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualizationPayload {
    pub points: Vec<ShotPoint>,
    pub query_point: QueryPoint,
    pub predicted_club: String,
    /// Club name to hex colour.
    pub club_color_map: BTreeMap<String, String>,
    /// Share of variance kept by each axis.
    pub explained_variance: [f64; 2],
    pub k: usize,
}

impl VisualizationPayload {
    /// Points flagged as neighbors.
    pub fn neighbors(&self) -> impl Iterator<Item = &ShotPoint> {
        self.points.iter().filter(|p| p.is_neighbor)
    }
}

/// Projects the history and query to 2D and marks the voting neighbors.
///
/// Uses the same encoding and neighbor fit as [`recommend()`](crate::recommend()),
/// so the highlighted points are exactly the neighbors behind a
/// recommendation for the same inputs.
///
/// # Errors
///
/// As [`recommend()`](crate::recommend()), plus [`RecommendError::Projection`].
#[tracing::instrument(skip_all, fields(n_shots = shots.len(), distance = query.distance()))]
pub fn visualize(
    shots: &[Shot],
    query: &Query,
    config: &RecommendConfig,
) -> Result<VisualizationPayload, RecommendError> {
    let fitted = fit_neighbors(shots, query, config)?;
    let dataset = &fitted.dataset;
    let knn = &fitted.knn;

    let projection = project(dataset.features(), N_FEATURES, dataset.query())?;

    let points: Vec<ShotPoint> = shots
        .iter()
        .zip(projection.points())
        .enumerate()
        .map(|(i, (shot, xy))| ShotPoint {
            x: xy[0],
            y: xy[1],
            club: shot.club().to_string(),
            distance: shot.distance(),
            lie: shot.lie(),
            shot_shape: shot.shot_shape(),
            bend: shot.inferred_bend(),
            is_neighbor: knn.is_neighbor(i),
        })
        .collect();

    let [qx, qy] = projection.query();
    let query_point = QueryPoint {
        x: qx,
        y: qy,
        distance: query.distance(),
        lie: query.lie(),
        bend: query.bend(),
        shot_shape: query.shot_shape(),
    };

    let club_color_map = club_color_map(shots.iter().map(Shot::club));
    info!(
        n_points = points.len(),
        k = knn.k(),
        explained = ?projection.explained_variance(),
        "visualization ready"
    );

    Ok(VisualizationPayload {
        points,
        query_point,
        predicted_club: knn.predicted().clone(),
        club_color_map,
        explained_variance: projection.explained_variance(),
        k: knn.k(),
    })
}

/// Validates a raw query, loads `user`'s shots and builds the payload.
///
/// # Errors
///
/// As [`recommend_for_user`](crate::recommend_for_user), plus
/// [`RecommendError::Projection`].
#[tracing::instrument(skip(source, raw, config))]
pub fn visualize_for_user<S: ShotSource>(
    source: &S,
    user: &str,
    raw: &RawQuery,
    config: &RecommendConfig,
) -> Result<VisualizationPayload, RecommendError> {
    let query = raw.parse()?;
    let shots = load_shots(source, user)?;
    visualize(&shots, &query, config)
}
