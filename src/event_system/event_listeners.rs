use bevy::prelude::*;
use crate::core::components::FractalRoot;
use crate::event_system::spawn_events::{FractalDespawnEvent, FractalSpawnEvent};
use crate::spawning::node_spawning::spawn_fractal_root;

pub fn fractal_spawn_listener(
    mut commands: Commands,
    mut reader: EventReader<FractalSpawnEvent>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for event in reader.read() {
        let result = spawn_fractal_root(
            &mut commands,
            &mut materials,
            event.settings,
            event.meshes.clone(),
            event.material.clone(),
            event.transform,
            event.parent,
        );

        if let Err(e) = result {
            error!("Error spawning fractal: {}", e);
        }
    }
}

pub fn fractal_despawn_listener(
    mut commands: Commands,
    mut reader: EventReader<FractalDespawnEvent>,
    roots: Query<(), With<FractalRoot>>,
) {
    for event in reader.read() {
        if roots.get(event.root).is_err() {
            warn!("Ignoring despawn of {:?}: not a fractal root", event.root);
            continue;
        }

        // Pending spawn sequences live on the nodes, so they go with the subtree.
        commands.entity(event.root).despawn_recursive();
        info!("Despawned fractal {:?}", event.root);
    }
}
