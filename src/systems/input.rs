//! Input systems.
//!
//! [`update_input_state`] reads hardware input from Raylib each frame,
//! writes it into [`InputState`] and triggers one event per user action:
//! a [`SceneCommandEvent`] for scene commands, a [`SwitchDebugEvent`] for the
//! debug overlay.
use bevy_ecs::prelude::*;
use raylib::ffi::{KeyboardKey, MouseButton};

use crate::events::scenecommand::{SceneCommand, SceneCommandEvent};
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::{BoolState, InputState};

/// Refresh one key state, returning whether it was just pressed.
fn poll_key(state: &mut BoolState, is_key_pressed: impl Fn(KeyboardKey) -> bool) -> bool {
    state.just_pressed = is_key_pressed(state.key_binding);
    state.just_pressed
}

/// Poll Raylib for keyboard and mouse input and emit scene events.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSendMut<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    let is_key_pressed = |key: KeyboardKey| rl.is_key_pressed(key);

    let input = &mut *input;
    let bindings: [(&mut BoolState, SceneCommand); 6] = [
        (&mut input.toggle_projection, SceneCommand::ToggleProjection),
        (&mut input.start_animation, SceneCommand::StartAnimation),
        (&mut input.reset_view, SceneCommand::ResetView),
        (&mut input.toggle_wireframe, SceneCommand::ToggleWireframe),
        (&mut input.toggle_grid, SceneCommand::ToggleGrid),
        (&mut input.cycle_color_scheme, SceneCommand::CycleColorScheme),
    ];
    for (state, command) in bindings {
        if poll_key(state, is_key_pressed) {
            commands.trigger(SceneCommandEvent::from(command));
        }
    }

    if poll_key(&mut input.mode_debug, is_key_pressed) {
        commands.trigger(SwitchDebugEvent {});
    }

    // Mouse: drag with the primary button rotates, wheel zooms
    let mouse_position = rl.get_mouse_position();
    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        input.mouse.dragging = true;
        input.mouse.last_position = mouse_position;
    } else if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
        input.mouse.dragging = false;
    }

    if input.mouse.dragging {
        let dx = mouse_position.x - input.mouse.last_position.x;
        let dy = mouse_position.y - input.mouse.last_position.y;
        if dx != 0.0 || dy != 0.0 {
            commands.trigger(SceneCommandEvent::from(SceneCommand::Rotate { dx, dy }));
        }
        input.mouse.last_position = mouse_position;
    }

    let wheel = rl.get_mouse_wheel_move();
    if wheel != 0.0 {
        commands.trigger(SceneCommandEvent::from(SceneCommand::Zoom { wheel }));
    }
}
