use bevy::prelude::*;
use bevy_inspector_egui::quick::WorldInspectorPlugin;
use fractal_gen::prelude::*;

mod input_manager;
mod camera;
mod generation;

fn main() {
    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(bevy::log::LogPlugin {
                filter: "warn,fractal_gen=info".to_string(),
                level: bevy::log::Level::INFO,
                ..default()
            })
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Fractal".into(),
                    resolution: (1024.0, 768.0).into(),
                    ..default()
                }),
                ..default()
            }),
    );

    app.insert_resource(AmbientLight {
        color: Color::srgb(154.0 / 255.0, 166.0 / 255.0, 254.0 / 255.0),
        brightness: 300.0,
    });
    app.insert_resource(ClearColor(Color::srgb(0.05, 0.05, 0.08)));

    app.add_plugins(
        WorldInspectorPlugin::default().run_if(bevy::input::common_conditions::input_toggle_active(false, KeyCode::Escape)),
    );

    app.add_plugins(FractalPlugin::default());

    app.add_systems(Startup, (ingame_setup, generation::load_fractal_assets, generation::generate_fractal).chain());
    app.add_systems(Update, generation::reset_on_space);

    app.add_plugins(crate::input_manager::InputPlugin);
    app.add_plugins(crate::camera::CameraPlugin);

    app.run();
}

fn ingame_setup(mut commands: Commands) {
    commands.spawn_empty()
        .insert(DirectionalLight {
            shadows_enabled: true,
            illuminance: 8000.0,
            color: Color::srgb(171.0 / 255.0, 183.0 / 255.0, 255.0 / 255.0),
            ..default()
        })
        .insert(Transform::from_rotation(
            Quat::from_euler(EulerRot::XYZ, -0.9, 0.6, 0.0)))
        .insert(Name::new("Sun"));
}
