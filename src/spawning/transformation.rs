use bevy::prelude::*;
use crate::core::components::RotationSpeed;

/// One-off rotation about the local X axis, in degrees.
pub fn apply_twist(transform: &mut Transform, degrees: f32) {
    transform.rotate_local_x(degrees.to_radians());
}

pub fn spin(transform: &mut Transform, degrees_per_second: f32, delta_secs: f32) {
    transform.rotate_local_y((degrees_per_second * delta_secs).to_radians());
}

pub fn rotate_fractal_nodes(
    time: Res<Time>,
    mut query: Query<(&RotationSpeed, &mut Transform)>,
) {
    let delta = time.delta_secs();
    for (speed, mut transform) in query.iter_mut() {
        spin(&mut transform, speed.0, delta);
    }
}
