//! Club recommendation entry points.

use caddie_confidence::{extrapolation_score, score_neighbors, shortlist};
use caddie_shot::{ClubAverages, ClubStats, LieBucket, Query, RawQuery, Shot, ShotSource};
use tracing::{debug, info};

use crate::config::RecommendConfig;
use crate::error::RecommendError;
use crate::neighbors::fit_neighbors;
use crate::recommendation::{Candidate, ExtrapolationWarning, Recommendation};

/// Recommends clubs for `query` from a golfer's shot history.
///
/// Encodes the history, fits the weighted neighbor vote, scores every club
/// among the neighbors and keeps the close contenders. Each candidate is
/// paired with its historical average for the query's lie bucket, looked
/// up through `averages`; a Sand query uses the all-lies average.
///
/// When the query distance is longer than every recorded shot, the vote is
/// bypassed: the club with the longest recorded shot is returned alone,
/// tier Low, with an [`ExtrapolationWarning`].
///
/// # Errors
///
/// Returns [`RecommendError::InsufficientData`] for fewer than three
/// shots, or [`RecommendError`] for an invalid `config`.
#[tracing::instrument(skip_all, fields(n_shots = shots.len(), distance = query.distance()))]
pub fn recommend(
    shots: &[Shot],
    query: &Query,
    averages: &impl ClubAverages,
    config: &RecommendConfig,
) -> Result<Recommendation, RecommendError> {
    let fitted = fit_neighbors(shots, query, config)?;
    let knn = &fitted.knn;
    let bucket = LieBucket::for_lie(query.lie()).unwrap_or(LieBucket::All);

    let stats = ClubStats::from_shots(shots);
    let longest = stats.longest_club().filter(|c| query.distance() > c.max_distance);

    let (candidates, warning) = if let Some(longest) = longest {
        debug!(
            club = %longest.club,
            longest = longest.max_distance,
            "query beyond recorded range, using extrapolation fallback"
        );
        let reach = f64::from(longest.max_distance) / f64::from(query.distance());
        let score = extrapolation_score(
            longest.club.clone(),
            reach,
            knn.nn_labels(),
            config.confidence(),
        );
        let candidate = Candidate::new(
            longest.club.clone(),
            averages.average_distance(&longest.club, bucket),
            score.probability(),
            score.tier(),
            score.agreement(),
        );
        let warning = ExtrapolationWarning {
            query_distance: query.distance(),
            longest_recorded: longest.max_distance,
            club: longest.club.clone(),
        };
        (vec![candidate], Some(warning))
    } else {
        let scores = score_neighbors(knn.nn_distances(), knn.nn_labels(), config.confidence())?;
        let candidates = shortlist(scores, config.confidence())
            .into_iter()
            .map(|s| {
                let average = averages.average_distance(s.club(), bucket);
                let (probability, tier, agreement) = (s.probability(), s.tier(), s.agreement());
                Candidate::new(s.into_club(), average, probability, tier, agreement)
            })
            .collect();
        (candidates, None)
    };

    let recommendation = Recommendation::new(
        candidates,
        knn.predicted().clone(),
        knn.k(),
        fitted.dataset.n_samples(),
        bucket,
        knn.nn_indices().to_vec(),
        warning,
    );
    if let Some(top) = recommendation.top() {
        info!(
            club = top.club(),
            probability = top.probability(),
            tier = %top.confidence_tier(),
            "recommendation ready"
        );
    }
    Ok(recommendation)
}

/// Validates a raw query, loads `user`'s shots from `source` and recommends.
///
/// The query is checked before any shot is read, so a malformed request
/// never touches the store. Club averages are computed from the loaded
/// shots.
///
/// # Errors
///
/// Returns [`RecommendError::Validation`] for a malformed query,
/// [`RecommendError::Source`] when the store fails, and otherwise as
/// [`recommend`].
#[tracing::instrument(skip(source, raw, config))]
pub fn recommend_for_user<S: ShotSource>(
    source: &S,
    user: &str,
    raw: &RawQuery,
    config: &RecommendConfig,
) -> Result<Recommendation, RecommendError> {
    let query = raw.parse()?;
    let shots = load_shots(source, user)?;
    let stats = ClubStats::from_shots(&shots);
    recommend(&shots, &query, &stats, config)
}

pub(crate) fn load_shots<S: ShotSource>(source: &S, user: &str) -> Result<Vec<Shot>, RecommendError> {
    let shots = source
        .shots_for_user(user)
        .map_err(|e| RecommendError::Source {
            user: user.to_string(),
            message: e.to_string(),
        })?;
    debug!(user, n = shots.len(), "loaded shots");
    Ok(shots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use caddie_confidence::ConfidenceTier;
    use caddie_shot::{Bend, Lie, ShotShape};

    fn shot(club: &str, distance: u32) -> Shot {
        Shot::new(club, distance, Lie::Fairway, ShotShape::Straight).unwrap()
    }

    #[test]
    fn averages_follow_query_lie() {
        let shots = vec![
            shot("8 Iron", 140),
            shot("8 Iron", 142),
            Shot::new("8 Iron", 120, Lie::Rough, ShotShape::Straight).unwrap(),
            Shot::new("8 Iron", 110, Lie::Sand, ShotShape::Straight).unwrap(),
        ];
        let stats = ClubStats::from_shots(&shots);
        let config = RecommendConfig::default();

        let fairway = Query::new(141, Lie::Fairway, Bend::Straight).unwrap();
        let rec = recommend(&shots, &fairway, &stats, &config).unwrap();
        assert_eq!(rec.lie_bucket(), LieBucket::FairwayOrTee);
        assert_eq!(rec.candidates()[0].average_distance_for_lie(), Some(141.0));

        let rough = Query::new(120, Lie::Rough, Bend::Straight).unwrap();
        let rec = recommend(&shots, &rough, &stats, &config).unwrap();
        assert_eq!(rec.candidates()[0].average_distance_for_lie(), Some(120.0));

        let sand = Query::new(110, Lie::Sand, Bend::Straight).unwrap();
        let rec = recommend(&shots, &sand, &stats, &config).unwrap();
        assert_eq!(rec.lie_bucket(), LieBucket::All);
        assert_eq!(rec.candidates()[0].average_distance_for_lie(), Some(128.0));
    }

    #[test]
    fn equal_to_longest_is_not_extrapolation() {
        let shots = vec![shot("Driver", 250), shot("7 Iron", 150), shot("PW", 110)];
        let stats = ClubStats::from_shots(&shots);
        let query = Query::new(250, Lie::Fairway, Bend::Straight).unwrap();
        let rec = recommend(&shots, &query, &stats, &RecommendConfig::default()).unwrap();
        assert!(rec.warning().is_none());
        assert_eq!(rec.top().map(Candidate::club), Some("Driver"));
    }

    #[test]
    fn close_contenders_are_listed() {
        // 9 Iron and PW both sit close to 125.
        let shots = vec![
            shot("9 Iron", 126),
            shot("PW", 124),
            shot("9 Iron", 123),
            shot("PW", 127),
            shot("Driver", 260),
            shot("Driver", 255),
        ];
        let stats = ClubStats::from_shots(&shots);
        let query = Query::new(125, Lie::Fairway, Bend::Straight).unwrap();
        let rec = recommend(&shots, &query, &stats, &RecommendConfig::default()).unwrap();
        let clubs: Vec<&str> = rec.candidates().iter().map(Candidate::club).collect();
        assert_eq!(rec.k_used(), 3);
        assert_eq!(clubs.len(), 2);
        assert_eq!(clubs, ["9 Iron", "PW"]);
        assert_eq!(rec.candidates()[0].confidence_tier(), ConfidenceTier::Medium);
        assert_eq!(rec.candidates()[1].confidence_tier(), ConfidenceTier::Low);
    }

    #[test]
    fn store_errors_are_reported() {
        #[derive(Debug, thiserror::Error)]
        #[error("connection refused")]
        struct Down;

        struct Broken;
        impl ShotSource for Broken {
            type Error = Down;
            fn shots_for_user(&self, _user: &str) -> Result<Vec<Shot>, Down> {
                Err(Down)
            }
        }

        let raw = RawQuery::new("150", "Fairway", "Straight");
        let err = recommend_for_user(&Broken, "sam", &raw, &RecommendConfig::default()).unwrap_err();
        assert_eq!(
            err,
            RecommendError::Source {
                user: "sam".to_string(),
                message: "connection refused".to_string(),
            }
        );

        // A malformed query is rejected before the store is consulted.
        let bad = RawQuery::new("far", "Fairway", "Straight");
        let err = recommend_for_user(&Broken, "sam", &bad, &RecommendConfig::default()).unwrap_err();
        assert!(matches!(err, RecommendError::Validation(_)));
    }
}
