//! Recommendation result types.

use std::fmt;

use caddie_confidence::ConfidenceTier;
use caddie_shot::LieBucket;
use serde::Serialize;

/// One suggested club.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    club: String,
    average_distance_for_lie: Option<f64>,
    probability: f64,
    confidence_tier: ConfidenceTier,
    agreement_percentage: f64,
}

impl Candidate {
    pub(crate) fn new(
        club: String,
        average_distance_for_lie: Option<f64>,
        probability: f64,
        confidence_tier: ConfidenceTier,
        agreement_percentage: f64,
    ) -> Self {
        Self {
            club,
            average_distance_for_lie,
            probability,
            confidence_tier,
            agreement_percentage,
        }
    }

    /// Returns the club name.
    pub fn club(&self) -> &str {
        &self.club
    }

    /// Historical average for this club in the query's lie bucket, if the
    /// club has shots there.
    pub fn average_distance_for_lie(&self) -> Option<f64> {
        self.average_distance_for_lie
    }

    /// Match probability in `[0, cap]`.
    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Returns the confidence tier.
    pub fn confidence_tier(&self) -> ConfidenceTier {
        self.confidence_tier
    }

    /// Share of the k neighbors that used this club, in percent.
    pub fn agreement_percentage(&self) -> f64 {
        self.agreement_percentage
    }
}

/// Attached to a fallback recommendation when the query is longer than any
/// recorded shot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtrapolationWarning {
    pub query_distance: u32,
    pub longest_recorded: u32,
    pub club: String,
}

impl fmt::Display for ExtrapolationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} yds is beyond your longest recorded shot ({} yds with {}); \
             this recommendation is an extrapolation",
            self.query_distance, self.longest_recorded, self.club
        )
    }
}

/// Ranked club suggestions for one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    candidates: Vec<Candidate>,
    predicted_club: String,
    k_used: usize,
    total_shots_analyzed: usize,
    lie_bucket: LieBucket,
    #[serde(skip)]
    neighbor_indices: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<ExtrapolationWarning>,
}

impl Recommendation {
    pub(crate) fn new(
        candidates: Vec<Candidate>,
        predicted_club: String,
        k_used: usize,
        total_shots_analyzed: usize,
        lie_bucket: LieBucket,
        neighbor_indices: Vec<usize>,
        warning: Option<ExtrapolationWarning>,
    ) -> Self {
        Self {
            candidates,
            predicted_club,
            k_used,
            total_shots_analyzed,
            lie_bucket,
            neighbor_indices,
            warning,
        }
    }

    /// Candidates ordered by probability, best first. Never empty.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// The best candidate.
    pub fn top(&self) -> Option<&Candidate> {
        self.candidates.first()
    }

    /// Club with the highest weighted neighbor vote. Differs from
    /// [`top`](Self::top) only on the extrapolation fallback.
    pub fn predicted_club(&self) -> &str {
        &self.predicted_club
    }

    /// Number of neighbors that voted.
    pub fn k_used(&self) -> usize {
        self.k_used
    }

    /// Returns how many historical shots the model was fitted on.
    pub fn total_shots_analyzed(&self) -> usize {
        self.total_shots_analyzed
    }

    /// Bucket the per-club averages were taken from.
    pub fn lie_bucket(&self) -> LieBucket {
        self.lie_bucket
    }

    /// History row indices of the neighbors, nearest first.
    pub fn neighbor_indices(&self) -> &[usize] {
        &self.neighbor_indices
    }

    /// Set when the fallback was used.
    pub fn warning(&self) -> Option<&ExtrapolationWarning> {
        self.warning.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_display() {
        let w = ExtrapolationWarning {
            query_distance: 400,
            longest_recorded: 280,
            club: "Driver".to_string(),
        };
        assert_eq!(
            w.to_string(),
            "400 yds is beyond your longest recorded shot (280 yds with Driver); \
             this recommendation is an extrapolation"
        );
    }

    #[test]
    fn top_is_first_candidate() {
        let rec = Recommendation::new(
            vec![
                Candidate::new("7 Iron".into(), Some(150.0), 0.9, ConfidenceTier::High, 100.0),
                Candidate::new("8 Iron".into(), None, 0.1, ConfidenceTier::Low, 0.0),
            ],
            "7 Iron".into(),
            3,
            3,
            LieBucket::FairwayOrTee,
            vec![0, 1, 2],
            None,
        );
        assert_eq!(rec.top().map(Candidate::club), Some("7 Iron"));
        assert!(rec.warning().is_none());
        assert_eq!(rec.neighbor_indices(), &[0, 1, 2]);
    }
}
