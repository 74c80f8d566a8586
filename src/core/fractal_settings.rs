use bevy::prelude::*;
use bevy_inspector_egui::prelude::*;
use serde::{Serialize, Deserialize};
use crate::core::fractal_error::FractalError;

/// Deepest tree a single root may request. A full tree at this depth is already ~490k nodes.
pub const MAX_SUPPORTED_DEPTH: u32 = 8;

/// Colors used to build a tree's appearance table.
#[derive(Reflect, Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct AppearancePalette {
    pub base: Color,
    pub accents: [Color; 2],
    pub terminals: [Color; 2],
}

impl Default for AppearancePalette {
    fn default() -> Self {
        AppearancePalette {
            base: Color::WHITE,
            accents: [
                Color::srgb(1.0, 0.92, 0.016),
                Color::srgb(0.0, 1.0, 1.0),
            ],
            terminals: [
                Color::srgb(1.0, 0.0, 1.0),
                Color::srgb(1.0, 0.0, 0.0),
            ],
        }
    }
}

/// Author-facing parameters of a fractal tree.
///
/// Set once on the root and copied unchanged into every descendant. The root
/// entity also carries a copy as a component so it shows up in the inspector.
#[derive(Reflect, Component, InspectorOptions, Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[reflect(Component, InspectorOptions)]
#[serde(default)]
pub struct FractalSettings {
    #[inspector(min = 0, max = MAX_SUPPORTED_DEPTH)]
    pub max_depth: u32,
    #[inspector(min = 0.01, max = 0.99)]
    pub child_scale: f32,
    #[inspector(min = 0.0, max = 1.0)]
    pub spawn_probability: f32,
    /// Degrees per second.
    #[inspector(min = 0.0, max = 100.0)]
    pub max_rotation_speed: f32,
    /// Degrees.
    #[inspector(min = 0.0, max = 180.0)]
    pub max_twist: f32,
    pub palette: AppearancePalette,
}

impl Default for FractalSettings {
    fn default() -> Self {
        FractalSettings {
            max_depth: 4,
            child_scale: 0.5,
            spawn_probability: 0.7,
            max_rotation_speed: 60.0,
            max_twist: 180.0,
            palette: AppearancePalette::default(),
        }
    }
}

impl FractalSettings {
    pub fn validate(&self) -> Result<(), FractalError> {
        let scalars = [self.child_scale, self.spawn_probability, self.max_rotation_speed, self.max_twist];
        if scalars.iter().any(|v| !v.is_finite()) {
            return Err("all settings must be finite numbers".into());
        }

        if self.max_depth > MAX_SUPPORTED_DEPTH {
            return Err(FractalError::DepthLimitExceeded(self.max_depth));
        }
        if !(self.child_scale > 0.0 && self.child_scale < 1.0) {
            return Err(FractalError::InvalidSetting(format!(
                "child_scale must lie in (0, 1), got {}", self.child_scale
            )));
        }
        if !(0.0..=1.0).contains(&self.spawn_probability) {
            return Err(FractalError::InvalidSetting(format!(
                "spawn_probability must lie in [0, 1], got {}", self.spawn_probability
            )));
        }
        if !(0.0..=100.0).contains(&self.max_rotation_speed) {
            return Err(FractalError::InvalidSetting(format!(
                "max_rotation_speed must lie in [0, 100], got {}", self.max_rotation_speed
            )));
        }
        if !(0.0..=180.0).contains(&self.max_twist) {
            return Err(FractalError::InvalidSetting(format!(
                "max_twist must lie in [0, 180], got {}", self.max_twist
            )));
        }

        Ok(())
    }

    /// Node count of a tree where every spawn attempt succeeds.
    pub fn full_tree_size(&self) -> usize {
        (0..=self.max_depth)
            .map(|depth| crate::core::child_layout::CHILD_COUNT.pow(depth))
            .sum()
    }
}
