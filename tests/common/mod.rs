#![allow(dead_code)]

use std::time::Duration;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use fractal_gen::prelude::*;

pub const FRAME: Duration = Duration::from_millis(100);

pub fn test_app(seed: u64) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, AssetPlugin::default()))
        .init_asset::<Mesh>()
        .init_asset::<StandardMaterial>()
        .insert_resource(TimeUpdateStrategy::ManualDuration(FRAME))
        .add_plugins(FractalPlugin { seed: SeededOrNot::Seeded(seed) });
    app
}

pub fn test_assets(app: &mut App) -> (Vec<Handle<Mesh>>, Handle<StandardMaterial>) {
    let world = app.world_mut();
    let cube = world.resource_mut::<Assets<Mesh>>().add(Cuboid::default());
    let sphere = world.resource_mut::<Assets<Mesh>>().add(Sphere::default());
    let material = world.resource_mut::<Assets<StandardMaterial>>().add(StandardMaterial::default());
    (vec![cube, sphere], material)
}

pub fn request_fractal(app: &mut App, settings: FractalSettings) {
    let (meshes, material) = test_assets(app);
    app.world_mut().send_event(FractalSpawnEvent {
        settings,
        meshes,
        material,
        transform: Transform::IDENTITY,
        parent: None,
    });
}

pub fn run_frames(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}

pub fn node_count(app: &mut App) -> usize {
    let world = app.world_mut();
    world.query::<&FractalNode>().iter(world).count()
}

pub fn root_entity(app: &mut App) -> Option<Entity> {
    let world = app.world_mut();
    world.query_filtered::<Entity, With<FractalRoot>>().iter(world).next()
}

/// Compares rotations up to float noise. `q` and `-q` are the same rotation.
pub fn same_rotation(a: Quat, b: Quat, tolerance: f32) -> bool {
    a.abs_diff_eq(b, tolerance) || a.abs_diff_eq(-b, tolerance)
}
