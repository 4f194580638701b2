//! Vector helpers with the exact semantics the field math needs.

use glam::Vec2;

/// Rescale `v` to a signed target length.
///
/// A negative `magnitude` flips the direction, which is how attraction vs
/// repulsion is encoded in the field formula: the contribution magnitude
/// carries the sign of the source charge, and the rescale must honor it
/// rather than take an absolute value. A zero vector stays zero.
pub fn with_magnitude(v: Vec2, magnitude: f32) -> Vec2 {
    v.normalize_or_zero() * magnitude
}

/// Clamp the length of `v` to at most `max`, preserving direction.
pub fn limit(v: Vec2, max: f32) -> Vec2 {
    v.clamp_length_max(max)
}
