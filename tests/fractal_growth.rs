mod common;

use bevy::prelude::*;
use fractal_gen::prelude::*;
use fractal_gen::core::child_layout::child_offset;

use common::*;

// Enough simulated time for a depth-3 tree to finish growing.
const GROWTH_FRAMES: usize = 300;

#[test]
fn certain_spawning_grows_the_full_tree() {
    let mut app = test_app(11);
    let settings = FractalSettings {
        max_depth: 2,
        child_scale: 0.5,
        spawn_probability: 1.0,
        ..default()
    };
    request_fractal(&mut app, settings);
    run_frames(&mut app, GROWTH_FRAMES);

    assert_eq!(node_count(&mut app), 31);

    let world = app.world_mut();
    let mut leaves = 0;
    let mut query = world.query::<(&FractalNode, &MeshMaterial3d<StandardMaterial>)>();
    let materials = world.resource::<Assets<StandardMaterial>>();
    for (node, material) in query.iter(world) {
        if node.depth == 2 {
            leaves += 1;
            let color = materials.get(&material.0).unwrap().base_color;
            assert!(settings.palette.terminals.contains(&color), "{:?}", color);
        }
    }
    assert_eq!(leaves, 25);
}

#[test]
fn deeper_full_tree_matches_power_series() {
    let mut app = test_app(12);
    let settings = FractalSettings {
        max_depth: 3,
        spawn_probability: 1.0,
        ..default()
    };
    request_fractal(&mut app, settings);
    run_frames(&mut app, GROWTH_FRAMES);

    assert_eq!(node_count(&mut app), settings.full_tree_size());
    assert_eq!(node_count(&mut app), 156);
}

#[test]
fn zero_probability_leaves_only_the_root() {
    let mut app = test_app(13);
    request_fractal(&mut app, FractalSettings {
        max_depth: 4,
        spawn_probability: 0.0,
        ..default()
    });
    run_frames(&mut app, 50);

    assert_eq!(node_count(&mut app), 1);
    let world = app.world_mut();
    assert_eq!(world.query::<&SpawnSequence>().iter(world).count(), 0);
}

#[test]
fn zero_depth_never_starts_a_spawn_sequence() {
    let mut app = test_app(14);
    request_fractal(&mut app, FractalSettings {
        max_depth: 0,
        spawn_probability: 1.0,
        ..default()
    });

    for _ in 0..20 {
        app.update();
        let world = app.world_mut();
        assert_eq!(world.query::<&SpawnSequence>().iter(world).count(), 0);
    }

    assert_eq!(node_count(&mut app), 1);
    let world = app.world_mut();
    let node = world.query::<&FractalNode>().single(world);
    assert_eq!(node.shared.appearance.depth_count(), 1);
    assert_eq!(node.shared.appearance.colors()[0], node.settings.palette.terminals);
}

#[test]
fn random_trees_respect_depth_and_layout() {
    for seed in [21, 22, 23] {
        let mut app = test_app(seed);
        let settings = FractalSettings {
            max_depth: 3,
            child_scale: 0.4,
            spawn_probability: 0.6,
            ..default()
        };
        request_fractal(&mut app, settings);
        run_frames(&mut app, GROWTH_FRAMES);

        let world = app.world_mut();
        let parents: Vec<(Entity, u32)> = world
            .query::<(Entity, &FractalNode)>()
            .iter(world)
            .map(|(entity, node)| (entity, node.depth))
            .collect();
        assert!(!parents.is_empty());
        assert!(parents.len() <= settings.full_tree_size());

        let mut query = world.query::<(&FractalNode, &Transform, Option<&Parent>)>();
        for (node, transform, parent) in query.iter(world) {
            assert!(node.depth <= settings.max_depth);
            assert_eq!(node.settings, settings);

            match parent {
                None => assert_eq!(node.depth, 0),
                Some(parent) => {
                    let parent_depth = parents
                        .iter()
                        .find(|(entity, _)| *entity == parent.get())
                        .map(|(_, depth)| *depth)
                        .unwrap();
                    assert_eq!(node.depth, parent_depth + 1);
                    assert!((transform.translation.length() - child_offset(0.4)).abs() < 1e-5);
                    assert_eq!(transform.scale, Vec3::splat(0.4));
                }
            }
        }
    }
}

#[test]
fn leaves_have_no_children() {
    let mut app = test_app(31);
    request_fractal(&mut app, FractalSettings {
        max_depth: 2,
        spawn_probability: 0.8,
        ..default()
    });
    run_frames(&mut app, GROWTH_FRAMES);

    let world = app.world_mut();
    let mut query = world.query::<(&FractalNode, Option<&Children>)>();
    for (node, children) in query.iter(world) {
        if node.depth == node.settings.max_depth {
            assert!(children.is_none());
        } else if let Some(children) = children {
            assert!(children.len() <= 5);
        }
    }
}

#[test]
fn children_appear_after_a_delay() {
    let mut app = test_app(41);
    request_fractal(&mut app, FractalSettings {
        max_depth: 1,
        spawn_probability: 1.0,
        ..default()
    });

    app.update();
    assert_eq!(node_count(&mut app), 1);

    run_frames(&mut app, 100);
    assert_eq!(node_count(&mut app), 6);
}

#[test]
fn despawning_the_root_cancels_pending_spawns() {
    let mut app = test_app(51);
    request_fractal(&mut app, FractalSettings {
        max_depth: 3,
        spawn_probability: 1.0,
        ..default()
    });
    run_frames(&mut app, 5);

    let root = root_entity(&mut app).unwrap();
    app.world_mut().send_event(FractalDespawnEvent { root });
    run_frames(&mut app, 100);

    assert_eq!(node_count(&mut app), 0);
}

#[test]
fn despawn_of_a_non_root_is_ignored() {
    let mut app = test_app(52);
    request_fractal(&mut app, FractalSettings {
        max_depth: 1,
        spawn_probability: 1.0,
        ..default()
    });
    run_frames(&mut app, 3);

    let stray = app.world_mut().spawn_empty().id();
    app.world_mut().send_event(FractalDespawnEvent { root: stray });
    run_frames(&mut app, 100);

    assert_eq!(node_count(&mut app), 6);
}

#[test]
fn misconfigured_requests_spawn_nothing() {
    let mut app = test_app(61);
    let (meshes, material) = test_assets(&mut app);

    let requests = [
        FractalSpawnEvent {
            settings: FractalSettings { child_scale: 1.5, ..default() },
            meshes: meshes.clone(),
            material: material.clone(),
            transform: Transform::IDENTITY,
            parent: None,
        },
        FractalSpawnEvent {
            settings: FractalSettings::default(),
            meshes: Vec::new(),
            material: material.clone(),
            transform: Transform::IDENTITY,
            parent: None,
        },
        FractalSpawnEvent {
            settings: FractalSettings::default(),
            meshes,
            material: Handle::default(),
            transform: Transform::IDENTITY,
            parent: None,
        },
    ];

    for request in requests {
        app.world_mut().send_event(request);
    }
    run_frames(&mut app, 10);

    assert_eq!(node_count(&mut app), 0);
}

#[test]
fn root_attaches_to_requested_parent() {
    let mut app = test_app(71);
    let (meshes, material) = test_assets(&mut app);
    let anchor = app.world_mut().spawn(Transform::from_xyz(3.0, 0.0, 0.0)).id();

    app.world_mut().send_event(FractalSpawnEvent {
        settings: FractalSettings { max_depth: 0, ..default() },
        meshes,
        material,
        transform: Transform::IDENTITY,
        parent: Some(anchor),
    });
    app.update();

    let root = root_entity(&mut app).unwrap();
    let parent = app.world().get::<Parent>(root).unwrap();
    assert_eq!(parent.get(), anchor);
}

#[test]
fn request_with_a_vanished_parent_spawns_nothing() {
    let mut app = test_app(72);
    let (meshes, material) = test_assets(&mut app);
    let anchor = app.world_mut().spawn(Transform::IDENTITY).id();
    app.world_mut().despawn(anchor);

    app.world_mut().send_event(FractalSpawnEvent {
        settings: FractalSettings { max_depth: 1, spawn_probability: 1.0, ..default() },
        meshes,
        material,
        transform: Transform::IDENTITY,
        parent: Some(anchor),
    });
    run_frames(&mut app, 20);

    assert_eq!(node_count(&mut app), 0);
    assert!(root_entity(&mut app).is_none());
}
