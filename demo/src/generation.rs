use bevy::prelude::*;
use fractal_gen::prelude::*;
use fractal_gen::spawn_fractal;
use std::time::{SystemTime, UNIX_EPOCH};

const PRESET: &str = "default";

#[derive(Resource)]
pub(crate) struct FractalAssetHandles {
    meshes: Vec<Handle<Mesh>>,
    material: Handle<StandardMaterial>,
}

pub(crate) fn load_fractal_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let meshes = vec![
        meshes.add(Cuboid::default()),
        meshes.add(Sphere::new(0.5)),
    ];
    let material = materials.add(StandardMaterial {
        metallic: 0.1,
        perceptual_roughness: 0.6,
        ..default()
    });

    commands.insert_resource(FractalAssetHandles { meshes, material });
}

pub(crate) fn generate_fractal(mut c: Commands, handles: Res<FractalAssetHandles>) {
    spawn_fractal!(c, PRESET, handles.meshes.clone(), handles.material.clone());
}

pub(crate) fn reset_on_space(
    mut commands: Commands,
    keys: Res<ButtonInput<KeyCode>>,
    mut gen_rng: ResMut<GenRng>,
    handles: Res<FractalAssetHandles>,
    roots: Query<Entity, With<FractalRoot>>,
    mut despawn_writer: EventWriter<FractalDespawnEvent>,
) {
    if !keys.just_pressed(KeyCode::Space) { return; }

    // Fresh, non-deterministic seed from system time
    let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default();
    let seed = now.as_nanos() as u64;
    *gen_rng = GenRng::new(seed);

    for root in roots.iter() {
        despawn_writer.send(FractalDespawnEvent { root });
    }

    spawn_fractal!(commands, PRESET, handles.meshes.clone(), handles.material.clone());
}
