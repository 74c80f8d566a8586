use std::f32::consts::FRAC_1_SQRT_2;
use bevy::prelude::*;

pub const CHILD_COUNT: usize = 5;

// up, right, left, forward, back
pub const CHILD_DIRECTIONS: [Vec3; CHILD_COUNT] = [
    Vec3::Y,
    Vec3::X,
    Vec3::NEG_X,
    Vec3::Z,
    Vec3::NEG_Z,
];

// identity, roll -90, roll +90, yaw +90, yaw -90
pub const CHILD_ORIENTATIONS: [Quat; CHILD_COUNT] = [
    Quat::IDENTITY,
    Quat::from_xyzw(0.0, 0.0, -FRAC_1_SQRT_2, FRAC_1_SQRT_2),
    Quat::from_xyzw(0.0, 0.0, FRAC_1_SQRT_2, FRAC_1_SQRT_2),
    Quat::from_xyzw(0.0, FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2),
    Quat::from_xyzw(0.0, -FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2),
];

/// Offset of a child's center from its parent's, in parent space. Half the
/// parent plus half the child keeps the two touching at the shared face.
pub fn child_offset(child_scale: f32) -> f32 {
    0.5 + 0.5 * child_scale
}

pub fn child_transform(direction: usize, child_scale: f32) -> Transform {
    Transform {
        translation: CHILD_DIRECTIONS[direction] * child_offset(child_scale),
        rotation: CHILD_ORIENTATIONS[direction],
        scale: Vec3::splat(child_scale),
    }
}
