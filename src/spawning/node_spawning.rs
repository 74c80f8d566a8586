use std::sync::Arc;
use bevy::prelude::*;
use rand::Rng;
use rand::seq::SliceRandom;
use crate::core::child_layout::child_transform;
use crate::core::components::{FractalAssets, FractalNode, FractalRoot, RotationSpeed};
use crate::core::fractal_error::FractalError;
use crate::core::fractal_settings::FractalSettings;
use crate::materials::appearance::{AppearanceTable, APPEARANCE_VARIANTS};
use crate::spawning::helpers::{GenRng, sample_symmetric};
use crate::spawning::spawn_sequence::SpawnSequence;
use crate::spawning::transformation::apply_twist;

/// Validates the request, builds the tree's appearance table and spawns the
/// root node. The rest of the tree grows from the root over the following frames.
pub fn spawn_fractal_root(
    commands: &mut Commands,
    materials: &mut Assets<StandardMaterial>,
    settings: FractalSettings,
    meshes: Vec<Handle<Mesh>>,
    material: Handle<StandardMaterial>,
    transform: Transform,
    parent: Option<Entity>,
) -> Result<Entity, FractalError> {
    settings.validate()?;

    if meshes.is_empty() {
        return Err(FractalError::EmptyMeshList);
    }

    if let Some(parent) = parent {
        if commands.get_entity(parent).is_none() {
            return Err(FractalError::MissingParent(parent));
        }
    }

    let base_material = materials
        .get(&material)
        .cloned()
        .ok_or(FractalError::MissingBaseMaterial)?;

    let appearance = AppearanceTable::build(settings.max_depth, &settings.palette, &base_material, materials);
    let shared = Arc::new(FractalAssets {
        meshes,
        material,
        appearance,
    });

    let root = commands.spawn_empty()
        .insert(FractalNode::root(settings, shared))
        .insert(FractalRoot)
        .insert(settings)
        .insert(transform)
        .insert(Name::new("Fractal"))
        .id();

    if let Some(parent) = parent {
        if let Some(mut parent_commands) = commands.get_entity(parent) {
            parent_commands.add_child(root);
        }
    }

    info!(
        "Spawned fractal root {:?} (max depth {}, spawn probability {})",
        root, settings.max_depth, settings.spawn_probability
    );

    Ok(root)
}

pub fn spawn_fractal_child(
    commands: &mut Commands,
    parent: Entity,
    parent_node: &FractalNode,
    direction: usize,
) -> Option<Entity> {
    let Some(node) = parent_node.child() else {
        warn!("Fractal node {:?} is at max depth {} and cannot grow children", parent, parent_node.depth);
        return None;
    };
    let transform = child_transform(direction, node.settings.child_scale);
    let depth = node.depth;

    let child = commands.spawn_empty()
        .insert(node)
        .insert(transform)
        .insert(Name::new("Fractal Child"))
        .set_parent(parent)
        .id();

    debug!("Spawned fractal child {:?} at depth {} in direction {}", child, depth, direction);
    Some(child)
}

/// Runs once for every freshly spawned node: picks its look, starts its spawn
/// sequence when it is allowed children, then rolls its spin and twist.
pub fn activate_fractal_nodes(
    mut commands: Commands,
    mut gen_rng: ResMut<GenRng>,
    mut query: Query<(Entity, &FractalNode, &mut Transform), Added<FractalNode>>,
) {
    for (entity, node, mut transform) in query.iter_mut() {
        let rng = gen_rng.rng_mut();
        let shared = &node.shared;
        let mut entity_commands = commands.entity(entity);

        let variant = rng.gen_range(0..APPEARANCE_VARIANTS);
        match (shared.meshes.choose(rng), shared.appearance.material(node.depth, variant)) {
            (Some(mesh), Some(material)) => {
                entity_commands.insert((Mesh3d(mesh.clone()), MeshMaterial3d(material.clone())));
            }
            _ => {
                warn!("Fractal node {:?} at depth {} has no appearance to bind", entity, node.depth);
            }
        }

        if node.can_spawn_children() {
            entity_commands.insert(SpawnSequence::new());
        }

        let speed = sample_symmetric(rng, node.settings.max_rotation_speed);
        entity_commands.insert(RotationSpeed(speed));

        let twist = sample_symmetric(rng, node.settings.max_twist);
        apply_twist(&mut transform, twist);
    }
}
