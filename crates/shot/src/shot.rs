//! Historical shot records and recommendation queries.

use serde::{Deserialize, Serialize};

use crate::bend::infer_bend;
use crate::category::{Bend, Lie, ShotShape};
use crate::error::ShotError;
use crate::validate::ValidationCollector;

/// A single recorded shot. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shot {
    club: String,
    distance: u32,
    lie: Lie,
    shot_shape: ShotShape,
}

impl Shot {
    /// Creates a shot after checking the club name is non-empty and the
    /// distance is positive.
    ///
    /// # Errors
    ///
    /// Returns [`ShotError::EmptyClubName`] or [`ShotError::InvalidDistance`].
    pub fn new(
        club: impl Into<String>,
        distance: u32,
        lie: Lie,
        shot_shape: ShotShape,
    ) -> Result<Self, ShotError> {
        let club = club.into();
        if club.trim().is_empty() {
            return Err(ShotError::EmptyClubName);
        }
        if distance == 0 {
            return Err(ShotError::InvalidDistance { distance: 0 });
        }
        Ok(Self {
            club,
            distance,
            lie,
            shot_shape,
        })
    }

    /// Name of the club the shot was hit with.
    pub fn club(&self) -> &str {
        &self.club
    }

    /// Carry distance in yards.
    pub fn distance(&self) -> u32 {
        self.distance
    }

    /// Returns the lie.
    pub fn lie(&self) -> Lie {
        self.lie
    }

    /// Returns the shot shape.
    pub fn shot_shape(&self) -> ShotShape {
        self.shot_shape
    }

    /// Hole bend implied by the recorded shape (see [`infer_bend`]).
    pub fn inferred_bend(&self) -> Bend {
        infer_bend(self.shot_shape)
    }
}

/// A validated recommendation request. Built per request, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Query {
    distance: u32,
    lie: Lie,
    bend: Bend,
    shot_shape: ShotShape,
}

impl Query {
    /// Creates a query with the default straight shot shape.
    ///
    /// # Errors
    ///
    /// Returns [`ShotError::InvalidDistance`] if `distance` is zero.
    pub fn new(distance: u32, lie: Lie, bend: Bend) -> Result<Self, ShotError> {
        if distance == 0 {
            return Err(ShotError::InvalidDistance { distance: 0 });
        }
        Ok(Self {
            distance,
            lie,
            bend,
            shot_shape: ShotShape::default(),
        })
    }

    /// Sets the intended shot shape.
    pub fn with_shot_shape(mut self, shot_shape: ShotShape) -> Self {
        self.shot_shape = shot_shape;
        self
    }

    /// Distance to the target in yards.
    pub fn distance(&self) -> u32 {
        self.distance
    }

    /// Returns the lie.
    pub fn lie(&self) -> Lie {
        self.lie
    }

    /// Returns the hole bend.
    pub fn bend(&self) -> Bend {
        self.bend
    }

    /// Returns the shot shape.
    pub fn shot_shape(&self) -> ShotShape {
        self.shot_shape
    }
}

/// Unparsed query fields exactly as the caller supplied them.
///
/// [`RawQuery::parse`] reports every malformed field in one
/// [`ShotError::Validation`] rather than stopping at the first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawQuery {
    pub distance: String,
    pub lie: String,
    pub bend: String,
    #[serde(default)]
    pub shot_shape: Option<String>,
}

impl RawQuery {
    /// Convenience constructor without a shot shape.
    pub fn new(
        distance: impl Into<String>,
        lie: impl Into<String>,
        bend: impl Into<String>,
    ) -> Self {
        Self {
            distance: distance.into(),
            lie: lie.into(),
            bend: bend.into(),
            shot_shape: None,
        }
    }

    /// Sets the shot shape.
    pub fn with_shot_shape(mut self, shot_shape: impl Into<String>) -> Self {
        self.shot_shape = Some(shot_shape.into());
        self
    }

    /// Validates every field and builds a [`Query`].
    ///
    /// The distance must parse as a positive integer. A missing or blank
    /// shot shape defaults to Straight.
    ///
    /// # Errors
    ///
    /// Returns [`ShotError::Validation`] listing each malformed field.
    pub fn parse(&self) -> Result<Query, ShotError> {
        let mut c = ValidationCollector::new();

        let distance = match self.distance.trim().parse::<i64>() {
            Ok(d) if d > 0 && d <= i64::from(u32::MAX) => Some(d as u32),
            Ok(d) => {
                c.push(ShotError::InvalidDistance { distance: d }.to_string());
                None
            }
            Err(_) => {
                c.push(format!(
                    "distance must be an integer number of yards, got '{}'",
                    self.distance
                ));
                None
            }
        };
        let lie = c.check(self.lie.parse::<Lie>());
        let bend = c.check(self.bend.parse::<Bend>());
        let shot_shape = match self.shot_shape.as_deref().map(str::trim) {
            None | Some("") => Some(ShotShape::default()),
            Some(s) => c.check(s.parse::<ShotShape>()),
        };

        c.finish()?;
        let (Some(distance), Some(lie), Some(bend), Some(shot_shape)) =
            (distance, lie, bend, shot_shape)
        else {
            return Err(ShotError::Validation {
                count: 1,
                details: "incomplete query".to_string(),
            });
        };
        Ok(Query {
            distance,
            lie,
            bend,
            shot_shape,
        })
    }
}
