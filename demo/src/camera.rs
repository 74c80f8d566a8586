use bevy::app::{App, Plugin};
use bevy::input::mouse::MouseWheel;
use bevy::prelude::*;
use crate::input_manager::{InputStates, MouseButtonState};

#[derive(Component)]
pub(crate) struct MainCamera;
#[derive(Component)]
pub(crate) struct CameraFocus;
#[derive(Component)]
struct CameraSystem;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app
            .insert_resource(ZoomParameters::default())
            .add_systems(Startup, initialize_camera_system)
            .add_systems(Update, camera_controller_system);
    }
}

#[derive(Resource)]
pub(crate) struct ZoomParameters {
    distance: f32,
    min: f32,
    max: f32,
}

impl Default for ZoomParameters {
    fn default() -> Self {
        ZoomParameters {
            distance: 4.0,
            min: 1.5,
            max: 20.0,
        }
    }
}

impl ZoomParameters {
    // Camera offset from the focus, keeping the current heading on the X-Z plane.
    fn offset(&self, heading: Vec3) -> Vec3 {
        let heading_xz = Vec3::new(heading.x, 0.0, heading.z).normalize_or(Vec3::Z);
        heading_xz * self.distance + Vec3::Y * self.distance * 0.6
    }
}

pub(crate) fn initialize_camera_system(
    mut commands: Commands,
    zoom_parameters: Res<ZoomParameters>,
) {
    let focus_trans = Transform::from_xyz(0.0, 0.5, 0.0);
    let cam_position = focus_trans.translation + zoom_parameters.offset(Vec3::new(1.0, 0.0, 1.0));
    let cam_trans = Transform::from_translation(cam_position).looking_at(focus_trans.translation, Vec3::Y);

    let camera_system_entity = commands.spawn_empty()
        .insert(Transform::default())
        .insert(Visibility::default())
        .insert(Name::new("CameraSystem"))
        .insert(CameraSystem)
        .id();

    commands.spawn_empty()
        .insert(focus_trans)
        .insert(Name::new("CameraFocus"))
        .insert(CameraFocus)
        .set_parent(camera_system_entity);

    commands.spawn_empty()
        .insert(Camera3d::default())
        .insert(cam_trans)
        .insert(Name::new("MainCamera"))
        .insert(MainCamera)
        .set_parent(camera_system_entity);
}

fn camera_controller_system(
    mut system_query: Query<&mut Transform, (With<CameraSystem>, Without<MainCamera>, Without<CameraFocus>)>,
    focus_query: Query<&Transform, (With<CameraFocus>, Without<MainCamera>, Without<CameraSystem>)>,
    mut camera_query: Query<&mut Transform, (With<MainCamera>, Without<CameraFocus>, Without<CameraSystem>)>,
    mut cursor_moved_events: EventReader<CursorMoved>,
    mut mouse_wheel_events: EventReader<MouseWheel>,
    input: Res<InputStates>,
    mut zoom_parameters: ResMut<ZoomParameters>,
) {
    let (Ok(focus_trans), Ok(mut cam_trans), Ok(mut sys_trans)) = (
        focus_query.get_single(),
        camera_query.get_single_mut(),
        system_query.get_single_mut(),
    ) else {
        return;
    };

    for event in mouse_wheel_events.read() {
        zoom_parameters.distance = (zoom_parameters.distance - event.y * 0.5)
            .clamp(zoom_parameters.min, zoom_parameters.max);
        let heading = cam_trans.translation - focus_trans.translation;
        cam_trans.translation = focus_trans.translation + zoom_parameters.offset(heading);
        cam_trans.look_at(focus_trans.translation, Vec3::Y);
    }

    for event in cursor_moved_events.read() {
        let Some(delta) = event.delta else { continue };

        if let MouseButtonState::Held(_) = input.right {
            let direction = focus_trans.translation - cam_trans.translation;
            let distance = (direction.x.powi(2) + direction.z.powi(2)).sqrt();
            let angle = direction.z.atan2(direction.x) + delta.x * 0.01;
            cam_trans.translation = Vec3::new(
                focus_trans.translation.x - distance * angle.cos(),
                cam_trans.translation.y,
                focus_trans.translation.z - distance * angle.sin(),
            );
            cam_trans.look_at(focus_trans.translation, Vec3::Y);
        } else if let MouseButtonState::Held(_) = input.middle {
            let forward = cam_trans.rotation * Vec3::Z;
            let right = cam_trans.rotation * Vec3::X;
            let forward_xz = Vec3::new(forward.x, 0.0, forward.z).normalize_or_zero();
            let right_xz = Vec3::new(right.x, 0.0, right.z).normalize_or_zero();
            sys_trans.translation += right_xz * delta.x * 0.01 + forward_xz * delta.y * 0.01;
        }
    }
}
