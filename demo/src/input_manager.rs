use bevy::app::Plugin;
use bevy::input::ButtonState;
use bevy::input::mouse::MouseButtonInput;
use bevy::prelude::*;

pub(crate) struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app
            .init_resource::<InputStates>()
            .add_systems(PreUpdate, input_management_system);
    }
}

#[derive(Debug, Default)]
pub enum MouseButtonState {
    #[default]
    Unheld,
    Held(Vec2),
}

impl MouseButtonState {
    fn from_event(state: ButtonState, cursor_position: Vec2) -> Self {
        match state {
            ButtonState::Pressed => MouseButtonState::Held(cursor_position),
            ButtonState::Released => MouseButtonState::Unheld,
        }
    }
}

// Only the buttons the camera rig reacts to are tracked.
#[derive(Default, Resource)]
pub(crate) struct InputStates {
    pub right: MouseButtonState,
    pub middle: MouseButtonState,
    pub cursor_position: Vec2,
}

fn input_management_system(
    mut cursor_moved_events: EventReader<CursorMoved>,
    mut mouse_button_input_events: EventReader<MouseButtonInput>,
    mut input: ResMut<InputStates>,
) {
    if let Some(event) = cursor_moved_events.read().last() {
        input.cursor_position = event.position;
    }

    for event in mouse_button_input_events.read() {
        let state = MouseButtonState::from_event(event.state, input.cursor_position);
        match event.button {
            MouseButton::Right => input.right = state,
            MouseButton::Middle => input.middle = state,
            _ => {}
        }
    }
}
