use std::sync::Arc;
use bevy::prelude::*;
use crate::core::fractal_settings::FractalSettings;
use crate::materials::appearance::AppearanceTable;

/// Marks the entity a tree was grown from.
#[derive(Component, Debug, Default)]
pub struct FractalRoot;

/// Spin rate about the local Y axis, in degrees per second.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct RotationSpeed(pub f32);

/// Read-only data shared by reference between every node of one tree.
#[derive(Debug)]
pub struct FractalAssets {
    pub meshes: Vec<Handle<Mesh>>,
    pub material: Handle<StandardMaterial>,
    pub appearance: AppearanceTable,
}

#[derive(Component, Debug, Clone)]
pub struct FractalNode {
    pub depth: u32,
    pub settings: FractalSettings,
    pub shared: Arc<FractalAssets>,
}

impl FractalNode {
    pub fn root(settings: FractalSettings, shared: Arc<FractalAssets>) -> Self {
        FractalNode {
            depth: 0,
            settings,
            shared,
        }
    }

    pub fn can_spawn_children(&self) -> bool {
        self.depth < self.settings.max_depth
    }

    /// Parameters for a node one level below this one, or `None` at max depth.
    pub fn child(&self) -> Option<Self> {
        self.can_spawn_children().then(|| FractalNode {
            depth: self.depth + 1,
            settings: self.settings,
            shared: Arc::clone(&self.shared),
        })
    }
}
