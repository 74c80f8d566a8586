pub mod core;
pub mod event_system;
pub mod management;
pub mod materials;
pub mod spawning;

pub mod prelude {
    pub use crate::core::components::{FractalNode, FractalRoot, RotationSpeed};
    pub use crate::core::fractal_error::FractalError;
    pub use crate::core::fractal_settings::{AppearancePalette, FractalSettings};
    pub use crate::core::generator_plugin::FractalPlugin;
    pub use crate::core::seeded_or_not::SeededOrNot;
    pub use crate::event_system::spawn_events::{FractalDespawnEvent, FractalSpawnEvent};
    pub use crate::spawning::helpers::GenRng;
    pub use crate::spawning::node_spawning::spawn_fractal_root;
    pub use crate::spawning::spawn_sequence::SpawnSequence;
}
