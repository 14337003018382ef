//! Per-club probabilities from the neighbor vote.

use serde::Serialize;

use crate::config::ConfidenceConfig;
use crate::error::ConfidenceError;
use crate::tier::ConfidenceTier;

/// Scored candidate club.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClubScore<L> {
    club: L,
    probability: f64,
    raw_probability: f64,
    agreement: f64,
    neighbor_count: usize,
    tier: ConfidenceTier,
}

impl<L> ClubScore<L> {
    /// Returns the club label.
    pub fn club(&self) -> &L {
        &self.club
    }

    /// Adjusted and capped probability.
    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Share of the total neighbor weight, before adjustment.
    pub fn raw_probability(&self) -> f64 {
        self.raw_probability
    }

    /// Percentage of neighbors voting for this club.
    pub fn agreement(&self) -> f64 {
        self.agreement
    }

    /// Number of neighbors voting for this club.
    pub fn neighbor_count(&self) -> usize {
        self.neighbor_count
    }

    /// Returns the confidence tier assigned to this club.
    pub fn tier(&self) -> ConfidenceTier {
        self.tier
    }

    /// Consumes the score, returning the club label.
    pub fn into_club(self) -> L {
        self.club
    }
}

/// Multiplier in `[base_factor, 1]` that rewards a tight neighborhood.
///
/// `distance_confidence = 1 / (1 + mean_distance / distance_scale)`, which is
/// 1 for an exact match and decays towards 0 as neighbors spread out.
pub fn confidence_factor(mean_distance: f64, config: &ConfidenceConfig) -> f64 {
    let distance_confidence = 1.0 / (1.0 + mean_distance / config.distance_scale());
    let base = config.base_factor();
    base + (1.0 - base) * distance_confidence
}

/// Scores every distinct club among the neighbors.
///
/// Each neighbor carries weight `1 / (distance + epsilon)`. A club's raw
/// probability is its share of the total weight; the adjusted probability is
/// `raw * confidence_factor(mean distance)`, capped at the configured
/// ceiling. Agreement is the club's neighbor count over k, as a percentage.
///
/// Returns one entry per distinct club, sorted by probability descending.
/// Equal probabilities keep first-appearance order, so the club with the
/// nearer neighbor comes first.
///
/// # Errors
///
/// Returns [`ConfidenceError`] if there are no neighbors, the slices differ
/// in length, a distance is negative or non-finite, or `config` is invalid.
pub fn score_neighbors<L: Clone + PartialEq>(
    nn_distances: &[f64],
    nn_labels: &[L],
    config: &ConfidenceConfig,
) -> Result<Vec<ClubScore<L>>, ConfidenceError> {
    config.validate()?;
    if nn_distances.is_empty() {
        return Err(ConfidenceError::NoNeighbors);
    }
    if nn_distances.len() != nn_labels.len() {
        return Err(ConfidenceError::LengthMismatch {
            distances: nn_distances.len(),
            labels: nn_labels.len(),
        });
    }
    if let Some(&distance) = nn_distances.iter().find(|d| !d.is_finite() || **d < 0.0) {
        return Err(ConfidenceError::InvalidDistance { distance });
    }

    let k = nn_distances.len();
    let mean_distance = nn_distances.iter().sum::<f64>() / k as f64;
    let factor = confidence_factor(mean_distance, config);

    // (label, weight, count) in first-appearance order
    let mut groups: Vec<(L, f64, usize)> = Vec::new();
    let mut total = 0.0;
    for (label, &d) in nn_labels.iter().zip(nn_distances) {
        let w = 1.0 / (d + config.epsilon());
        total += w;
        match groups.iter_mut().find(|(l, _, _)| l == label) {
            Some(group) => {
                group.1 += w;
                group.2 += 1;
            }
            None => groups.push((label.clone(), w, 1)),
        }
    }

    let mut scores: Vec<ClubScore<L>> = groups
        .into_iter()
        .map(|(club, weight, count)| {
            let raw_probability = weight / total;
            let probability = (raw_probability * factor).min(config.probability_cap());
            let agreement = count as f64 / k as f64 * 100.0;
            ClubScore {
                club,
                probability,
                raw_probability,
                agreement,
                neighbor_count: count,
                tier: ConfidenceTier::assign(probability, agreement, config),
            }
        })
        .collect();
    scores.sort_by(|a, b| b.probability.total_cmp(&a.probability));
    Ok(scores)
}

/// Keeps the leading scores within the closeness band of the best one, at
/// most `max_candidates` of them.
///
/// `scores` must already be sorted by probability descending, as returned
/// by [`score_neighbors`].
pub fn shortlist<L>(mut scores: Vec<ClubScore<L>>, config: &ConfidenceConfig) -> Vec<ClubScore<L>> {
    let Some(top) = scores.first().map(|s| s.probability) else {
        return scores;
    };
    let floor = top - config.closeness_band();
    scores.retain(|s| s.probability >= floor);
    scores.truncate(config.max_candidates());
    scores
}

/// Low-confidence score for a club chosen without a neighbor vote.
///
/// Used when the query lies beyond everything observed. `reach` is the
/// club's longest recorded distance over the query distance; the
/// probability scales it into `[0, medium_probability)` so the result can
/// never read as more than Low. Agreement is still the club's share of
/// `nn_labels`.
pub fn extrapolation_score<L: PartialEq>(
    club: L,
    reach: f64,
    nn_labels: &[L],
    config: &ConfidenceConfig,
) -> ClubScore<L> {
    let count = nn_labels.iter().filter(|l| **l == club).count();
    let agreement = if nn_labels.is_empty() {
        0.0
    } else {
        count as f64 / nn_labels.len() as f64 * 100.0
    };
    let reach = if reach.is_finite() {
        reach.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let probability = (reach * config.medium_probability()).min(config.probability_cap());

    ClubScore {
        club,
        probability,
        raw_probability: reach,
        agreement,
        neighbor_count: count,
        tier: ConfidenceTier::Low,
    }
}
