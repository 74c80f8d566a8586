use bevy::app::{App, Plugin};
use bevy::prelude::*;

use crate::core::components::RotationSpeed;
use crate::core::fractal_settings::{AppearancePalette, FractalSettings};
use crate::core::seeded_or_not::SeededOrNot;
use crate::event_system::event_listeners::{fractal_despawn_listener, fractal_spawn_listener};
use crate::event_system::spawn_events::{FractalDespawnEvent, FractalSpawnEvent};
use crate::spawning::helpers::GenRng;
use crate::spawning::node_spawning::activate_fractal_nodes;
use crate::spawning::spawn_sequence::advance_spawn_sequences;
use crate::spawning::transformation::rotate_fractal_nodes;

#[derive(Default)]
pub struct FractalPlugin {
    pub seed: SeededOrNot,
}

impl Plugin for FractalPlugin {
    fn build(&self, app: &mut App) {
        app
            .insert_resource(GenRng::from_seed_option(&self.seed))
            .add_event::<FractalSpawnEvent>()
            .add_event::<FractalDespawnEvent>()
            .register_type::<FractalSettings>()
            .register_type::<AppearancePalette>()
            .register_type::<RotationSpeed>();

        // Ordered so a node spawned this frame is activated before its
        // sequence is first advanced, and despawns land before either.
        app.add_systems(Update, (
            fractal_spawn_listener,
            fractal_despawn_listener,
            activate_fractal_nodes,
            advance_spawn_sequences,
            rotate_fractal_nodes,
        ).chain());
    }
}
