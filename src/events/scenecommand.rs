//! Scene commands and the observer that applies them.
//!
//! Every user action (keyboard toggle, mouse drag, wheel step) is turned
//! into a [`SceneCommandEvent`] by the input system. The
//! [`scene_command_observer`] applies it to the camera, animator and render
//! settings and logs one status line per toggle.
//!
//! The mutation itself lives in [`apply_scene_command`], a plain function
//! over the three resources, so the controller can be exercised without a
//! window.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{info, warn};

use crate::resources::camera3d::{CameraState, ZOOM_FAR_LIMIT, ZOOM_NEAR_LIMIT};
use crate::resources::cameraanimator::CameraAnimator;
use crate::resources::rendersettings::RenderSettings;

/// Degrees of rotation per pixel of mouse motion.
pub const DRAG_SENSITIVITY: f32 = 0.5;
/// Zoom change per wheel notch.
pub const ZOOM_STEP: f32 = 0.5;

/// A single controller action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneCommand {
    /// Switch between perspective and orthographic projection (Space).
    ToggleProjection,
    /// Play the keyframe camera sequence from the start (A).
    StartAnimation,
    /// Restore the default camera pose and stop the animation (R).
    ResetView,
    /// Switch polygon rasterization between fill and lines (W).
    ToggleWireframe,
    /// Show or hide the reference grid (G).
    ToggleGrid,
    /// Advance to the next board palette (C).
    CycleColorScheme,
    /// Mouse motion while the primary button is held, in pixels.
    Rotate { dx: f32, dy: f32 },
    /// Wheel movement; positive moves the eye closer.
    Zoom { wheel: f32 },
}

/// Event carrying one [`SceneCommand`].
#[derive(Event, Debug, Clone, Copy)]
pub struct SceneCommandEvent {
    pub command: SceneCommand,
}

impl From<SceneCommand> for SceneCommandEvent {
    fn from(command: SceneCommand) -> Self {
        SceneCommandEvent { command }
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag { "ON" } else { "OFF" }
}

/// Apply `command` to the scene resources.
///
/// Returns the status line to report for toggles, `None` for continuous
/// input (drag and wheel).
pub fn apply_scene_command(
    command: SceneCommand,
    camera: &mut CameraState,
    animator: &mut CameraAnimator,
    settings: &mut RenderSettings,
) -> Option<String> {
    match command {
        SceneCommand::ToggleProjection => {
            camera.projection = camera.projection.toggled();
            Some(format!("Projection: {}", camera.projection.label()))
        }
        SceneCommand::StartAnimation => {
            if animator.start() {
                Some("Animation started!".to_string())
            } else {
                warn!(
                    "Animation not started: {} keyframe(s), need at least 2",
                    animator.keyframes().len()
                );
                None
            }
        }
        SceneCommand::ResetView => {
            camera.reset_pose();
            animator.stop();
            Some("View reset".to_string())
        }
        SceneCommand::ToggleWireframe => {
            settings.wireframe = !settings.wireframe;
            Some(format!("Wireframe: {}", on_off(settings.wireframe)))
        }
        SceneCommand::ToggleGrid => {
            settings.grid_enabled = !settings.grid_enabled;
            Some(format!("Grid: {}", on_off(settings.grid_enabled)))
        }
        SceneCommand::CycleColorScheme => {
            settings.color_scheme = settings.color_scheme.next();
            Some(format!("Color Scheme: {}", settings.color_scheme.label()))
        }
        SceneCommand::Rotate { dx, dy } => {
            camera.rotation_y += dx * DRAG_SENSITIVITY;
            camera.rotation_x += dy * DRAG_SENSITIVITY;
            None
        }
        SceneCommand::Zoom { wheel } => {
            camera.zoom = (camera.zoom + wheel * ZOOM_STEP).clamp(ZOOM_FAR_LIMIT, ZOOM_NEAR_LIMIT);
            None
        }
    }
}

/// Observer that routes [`SceneCommandEvent`]s into the scene resources.
pub fn scene_command_observer(
    trigger: On<SceneCommandEvent>,
    mut camera: ResMut<CameraState>,
    mut animator: ResMut<CameraAnimator>,
    mut settings: ResMut<RenderSettings>,
) {
    let command = trigger.event().command;
    if let Some(status) = apply_scene_command(command, &mut camera, &mut animator, &mut settings) {
        info!("{}", status);
    }
}
