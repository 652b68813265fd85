//! Per-frame input resource.
//!
//! Captures the keys the scene reacts to and the mouse drag state, exposed
//! to systems via the [`InputState`] resource. Each key action carries its
//! own binding so it can be remapped without touching the polling system.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Edge-triggered key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl Default for BoolState {
    fn default() -> Self {
        Self {
            just_pressed: false,
            key_binding: KeyboardKey::KEY_NULL,
        }
    }
}

impl BoolState {
    fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            key_binding,
            ..Self::default()
        }
    }
}

/// Mouse drag tracking for camera rotation.
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseDrag {
    /// Primary button is held and motion rotates the board.
    pub dragging: bool,
    /// Cursor position at the previous motion sample.
    pub last_position: Vector2,
}

/// Resource capturing the per-frame input relevant to the scene.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub toggle_projection: BoolState,
    pub start_animation: BoolState,
    pub reset_view: BoolState,
    pub toggle_wireframe: BoolState,
    pub toggle_grid: BoolState,
    pub cycle_color_scheme: BoolState,
    pub mode_debug: BoolState,
    pub mouse: MouseDrag,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            toggle_projection: BoolState::bound_to(KeyboardKey::KEY_SPACE),
            start_animation: BoolState::bound_to(KeyboardKey::KEY_A),
            reset_view: BoolState::bound_to(KeyboardKey::KEY_R),
            toggle_wireframe: BoolState::bound_to(KeyboardKey::KEY_W),
            toggle_grid: BoolState::bound_to(KeyboardKey::KEY_G),
            cycle_color_scheme: BoolState::bound_to(KeyboardKey::KEY_C),
            mode_debug: BoolState::bound_to(KeyboardKey::KEY_F11),
            mouse: MouseDrag::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolstate_default() {
        let bs = BoolState::default();
        assert!(!bs.just_pressed);
        assert_eq!(bs.key_binding, KeyboardKey::KEY_NULL);
    }

    #[test]
    fn test_inputstate_default_key_bindings() {
        let input = InputState::default();
        assert_eq!(input.toggle_projection.key_binding, KeyboardKey::KEY_SPACE);
        assert_eq!(input.start_animation.key_binding, KeyboardKey::KEY_A);
        assert_eq!(input.reset_view.key_binding, KeyboardKey::KEY_R);
        assert_eq!(input.toggle_wireframe.key_binding, KeyboardKey::KEY_W);
        assert_eq!(input.toggle_grid.key_binding, KeyboardKey::KEY_G);
        assert_eq!(input.cycle_color_scheme.key_binding, KeyboardKey::KEY_C);
        assert_eq!(input.mode_debug.key_binding, KeyboardKey::KEY_F11);
    }

    #[test]
    fn test_inputstate_default_all_inactive() {
        let input = InputState::default();
        assert!(!input.toggle_projection.just_pressed);
        assert!(!input.start_animation.just_pressed);
        assert!(!input.mode_debug.just_pressed);
        assert!(!input.mouse.dragging);
    }
}
