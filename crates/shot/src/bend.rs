//! Hole-bend inference for historical shots.
//!
//! The shot log records the shape a golfer played but not the shape of the
//! hole. The shape is used as a proxy: a right-to-left ball flight suggests
//! the hole turned left, and vice versa.

use crate::category::{Bend, ShotShape};

/// Infers the hole bend a historical shot was played into from its shape.
///
/// | Shape | Bend |
/// |-------|------|
/// | Draw, Hook | Dogleg Left |
/// | Fade, Slice | Dogleg Right |
/// | Straight | Straight |
///
/// Only used for historical rows; a query always carries its own bend.
pub fn infer_bend(shape: ShotShape) -> Bend {
    match shape {
        ShotShape::Draw | ShotShape::Hook => Bend::DoglegLeft,
        ShotShape::Fade | ShotShape::Slice => Bend::DoglegRight,
        ShotShape::Straight => Bend::Straight,
    }
}
