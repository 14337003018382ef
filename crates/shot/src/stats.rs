//! Per-club distance statistics.
//!
//! Averages are derived from the shot log on demand, never stored. Two
//! lie buckets mirror how golfers think about carry: clean lies (Fairway
//! and Tee Box pooled) and Rough. Sand belongs to neither bucket and only
//! counts towards [`LieBucket::All`].

use std::collections::BTreeMap;

use serde::Serialize;
use statrs::statistics::Statistics;

use crate::category::Lie;
use crate::shot::Shot;

/// Aggregation bucket for club averages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LieBucket {
    /// Fairway and Tee Box shots.
    FairwayOrTee,
    /// Rough shots.
    Rough,
    /// Every shot regardless of lie, Sand included.
    All,
}

impl LieBucket {
    /// The aggregate bucket a lie belongs to. `None` for Sand.
    pub fn for_lie(lie: Lie) -> Option<Self> {
        match lie {
            Lie::Fairway | Lie::TeeBox => Some(Self::FairwayOrTee),
            Lie::Rough => Some(Self::Rough),
            Lie::Sand => None,
        }
    }

    /// Whether a shot from `lie` is counted in this bucket.
    pub fn contains(self, lie: Lie) -> bool {
        match self {
            Self::All => true,
            bucket => Self::for_lie(lie) == Some(bucket),
        }
    }
}

/// Source of historical per-club averages.
///
/// [`ClubStats`] is the in-memory implementation; a storage layer can answer
/// the same question with an aggregate query.
pub trait ClubAverages {
    /// Average distance for `club` over the shots in `bucket`, or `None`
    /// when the club has no shots there.
    fn average_distance(&self, club: &str, bucket: LieBucket) -> Option<f64>;
}

/// Average and count of distances within one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BucketAverage {
    pub average: Option<f64>,
    pub count: usize,
}

impl BucketAverage {
    fn from_distances(distances: &[f64]) -> Self {
        let average = if distances.is_empty() {
            None
        } else {
            Some(distances.mean())
        };
        Self {
            average,
            count: distances.len(),
        }
    }
}

/// Distance summary for one club.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClubSummary {
    pub club: String,
    pub shot_count: usize,
    pub average: f64,
    /// Sample standard deviation (N-1). `None` with fewer than two shots.
    pub std_dev: Option<f64>,
    pub max_distance: u32,
    pub fairway_or_tee: BucketAverage,
    pub rough: BucketAverage,
}

/// Distance summaries for every club in a shot collection, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClubStats {
    clubs: BTreeMap<String, ClubSummary>,
}

impl ClubStats {
    /// Summarises `shots` per club.
    pub fn from_shots(shots: &[Shot]) -> Self {
        let mut by_club: BTreeMap<&str, Vec<&Shot>> = BTreeMap::new();
        for shot in shots {
            by_club.entry(shot.club()).or_default().push(shot);
        }

        let clubs = by_club
            .into_iter()
            .map(|(club, shots)| (club.to_string(), summarise(club, &shots)))
            .collect();
        Self { clubs }
    }

    /// Summary for one club.
    pub fn get(&self, club: &str) -> Option<&ClubSummary> {
        self.clubs.get(club)
    }

    /// Iterates summaries in club-name order.
    pub fn iter(&self) -> impl Iterator<Item = &ClubSummary> {
        self.clubs.values()
    }

    pub fn len(&self) -> usize {
        self.clubs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clubs.is_empty()
    }

    /// The club with the single greatest recorded distance.
    ///
    /// Ties go to the club whose name sorts first.
    pub fn longest_club(&self) -> Option<&ClubSummary> {
        self.clubs
            .values()
            .fold(None, |best: Option<&ClubSummary>, s| match best {
                Some(b) if b.max_distance >= s.max_distance => Some(b),
                _ => Some(s),
            })
    }
}

impl ClubAverages for ClubStats {
    fn average_distance(&self, club: &str, bucket: LieBucket) -> Option<f64> {
        let summary = self.clubs.get(club)?;
        match bucket {
            LieBucket::FairwayOrTee => summary.fairway_or_tee.average,
            LieBucket::Rough => summary.rough.average,
            LieBucket::All => Some(summary.average),
        }
    }
}

fn summarise(club: &str, shots: &[&Shot]) -> ClubSummary {
    let all: Vec<f64> = shots.iter().map(|s| f64::from(s.distance())).collect();
    let in_bucket = |bucket: LieBucket| -> Vec<f64> {
        shots
            .iter()
            .filter(|s| bucket.contains(s.lie()))
            .map(|s| f64::from(s.distance()))
            .collect()
    };

    let std_dev = if all.len() >= 2 {
        Some(all.iter().std_dev())
    } else {
        None
    };

    ClubSummary {
        club: club.to_string(),
        shot_count: all.len(),
        average: all.iter().mean(),
        std_dev,
        max_distance: shots.iter().map(|s| s.distance()).max().unwrap_or(0),
        fairway_or_tee: BucketAverage::from_distances(&in_bucket(LieBucket::FairwayOrTee)),
        rough: BucketAverage::from_distances(&in_bucket(LieBucket::Rough)),
    }
}
