use bevy::prelude::*;
use crate::core::fractal_settings::FractalSettings;

/// Request to grow a new tree. `material` must already be loaded.
#[derive(Debug, Clone, Event)]
pub struct FractalSpawnEvent {
    pub settings: FractalSettings,
    pub meshes: Vec<Handle<Mesh>>,
    pub material: Handle<StandardMaterial>,
    pub transform: Transform,
    pub parent: Option<Entity>,
}

/// Removes a tree and cancels everything still pending in it.
#[derive(Debug, Clone, Event)]
pub struct FractalDespawnEvent {
    pub root: Entity,
}
