//! Categorical shot attributes: lie, hole bend, and shot shape.
//!
//! Names are parsed leniently: case is ignored, as are spaces, underscores
//! and hyphens, so `"Tee Box"`, `"tee_box"` and `"TEEBOX"` all parse to
//! [`Lie::TeeBox`]. Display and serde use the canonical names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ShotError;

/// A categorical attribute with a fixed set of canonical names.
///
/// Implemented by [`Lie`], [`Bend`] and [`ShotShape`]. The feature encoder
/// uses [`label`](Category::label) to order values when it assigns codes.
pub trait Category: Copy + Eq + Ord + fmt::Debug + 'static {
    /// Every value of the category, in declaration order.
    const ALL: &'static [Self];

    /// Canonical display name (e.g. `"Tee Box"`).
    fn label(self) -> &'static str;
}

/// Lower-cases and strips separators so lenient matching is a plain compare.
fn squash(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

fn parse_category<T: Category>(
    s: &str,
    kind: &'static str,
    expected: &'static str,
) -> Result<T, ShotError> {
    let key = squash(s);
    T::ALL
        .iter()
        .copied()
        .find(|v| squash(v.label()) == key)
        .ok_or_else(|| ShotError::UnknownCategory {
            kind,
            value: s.to_string(),
            expected,
        })
}

/// Surface the ball rests on before the shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Lie {
    Fairway,
    Rough,
    Sand,
    #[serde(rename = "Tee Box")]
    TeeBox,
}

impl Category for Lie {
    const ALL: &'static [Self] = &[Self::Fairway, Self::Rough, Self::Sand, Self::TeeBox];

    fn label(self) -> &'static str {
        match self {
            Self::Fairway => "Fairway",
            Self::Rough => "Rough",
            Self::Sand => "Sand",
            Self::TeeBox => "Tee Box",
        }
    }
}

impl FromStr for Lie {
    type Err = ShotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_category(s, "lie", "Fairway, Rough, Sand, Tee Box")
    }
}

/// Horizontal curvature of the hole relative to the shot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Bend {
    #[default]
    Straight,
    #[serde(rename = "Dogleg Left")]
    DoglegLeft,
    #[serde(rename = "Dogleg Right")]
    DoglegRight,
}

impl Category for Bend {
    const ALL: &'static [Self] = &[Self::Straight, Self::DoglegLeft, Self::DoglegRight];

    fn label(self) -> &'static str {
        match self {
            Self::Straight => "Straight",
            Self::DoglegLeft => "Dogleg Left",
            Self::DoglegRight => "Dogleg Right",
        }
    }
}

impl FromStr for Bend {
    type Err = ShotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_category(s, "bend", "Straight, Dogleg Left, Dogleg Right")
    }
}

/// Intended or actual curvature of the ball flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ShotShape {
    #[default]
    Straight,
    Fade,
    Draw,
    Slice,
    Hook,
}

impl Category for ShotShape {
    const ALL: &'static [Self] = &[
        Self::Straight,
        Self::Fade,
        Self::Draw,
        Self::Slice,
        Self::Hook,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Straight => "Straight",
            Self::Fade => "Fade",
            Self::Draw => "Draw",
            Self::Slice => "Slice",
            Self::Hook => "Hook",
        }
    }
}

impl FromStr for ShotShape {
    type Err = ShotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_category(s, "shot shape", "Straight, Fade, Draw, Slice, Hook")
    }
}

impl fmt::Display for Lie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Bend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for ShotShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
