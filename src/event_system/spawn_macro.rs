/// Loads a settings preset by name and queues a [`FractalSpawnEvent`] for it.
///
/// `spawn_fractal!(commands, "default", meshes, material)` spawns at the origin;
/// a fifth argument attaches the tree to a parent entity.
///
/// [`FractalSpawnEvent`]: crate::event_system::spawn_events::FractalSpawnEvent
#[macro_export]
macro_rules! spawn_fractal {
    ($commands:expr, $preset:expr, $meshes:expr, $material:expr) => {
        $crate::spawn_fractal!($commands, $preset, $meshes, $material, None)
    };
    ($commands:expr, $preset:expr, $meshes:expr, $material:expr, $parent:expr) => {{
        let preset: String = ($preset).into();
        let meshes: Vec<bevy::prelude::Handle<bevy::prelude::Mesh>> = $meshes;
        let material: bevy::prelude::Handle<bevy::prelude::StandardMaterial> = $material;
        let parent: Option<bevy::prelude::Entity> = $parent;
        $commands.queue(move |w: &mut bevy::prelude::World| {
            match $crate::management::settings_management::import_settings(&preset) {
                Ok(settings) => {
                    w.send_event($crate::event_system::spawn_events::FractalSpawnEvent {
                        settings,
                        meshes,
                        material,
                        transform: bevy::prelude::Transform::IDENTITY,
                        parent,
                    });
                }
                Err(e) => bevy::log::error!("Failed to load fractal preset {}: {}", preset, e),
            }
        });
    }};
}
