//! Orbit camera state shared by input, animation and rendering.
//!
//! The scene is viewed from a fixed eye height looking at the origin; the
//! board itself is spun by `rotation_x`/`rotation_y` (degrees) and `zoom` is
//! the signed eye distance along Z (negative values sit in front of the
//! board). Projection parameters come from [`GameConfig`] so they can be
//! tuned without touching code.
//!
//! [`GameConfig`]: crate::resources::gameconfig::GameConfig

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Camera3D, Vector3};

/// Default pitch in degrees.
pub const DEFAULT_ROTATION_X: f32 = 25.0;
/// Default yaw in degrees.
pub const DEFAULT_ROTATION_Y: f32 = 0.0;
/// Default eye distance along Z.
pub const DEFAULT_ZOOM: f32 = -12.0;
/// Closest allowed zoom.
pub const ZOOM_NEAR_LIMIT: f32 = -5.0;
/// Farthest allowed zoom.
pub const ZOOM_FAR_LIMIT: f32 = -20.0;
/// Eye height above the board plane.
pub const EYE_HEIGHT: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionMode {
    #[default]
    Perspective,
    Orthographic,
}

impl ProjectionMode {
    pub fn toggled(self) -> Self {
        match self {
            ProjectionMode::Perspective => ProjectionMode::Orthographic,
            ProjectionMode::Orthographic => ProjectionMode::Perspective,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectionMode::Perspective => "Perspective",
            ProjectionMode::Orthographic => "Orthographic",
        }
    }
}

/// Projection parameters used to build the raylib camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionParams {
    /// Vertical field of view in degrees (perspective).
    pub fov: f32,
    /// Vertical extent of the view volume in world units (orthographic).
    ///
    /// Only the vertical bounds are fixed (`±ortho_extent / 2`). raylib
    /// derives the horizontal bounds from the window aspect, so 20 at
    /// 800×600 spans ±13.3 across rather than a square ±10.
    pub ortho_extent: f32,
    /// Near clip plane distance.
    pub near: f32,
    /// Far clip plane distance.
    pub far: f32,
}

impl Default for ProjectionParams {
    fn default() -> Self {
        ProjectionParams {
            fov: 45.0,
            ortho_extent: 20.0,
            near: 0.1,
            far: 50.0,
        }
    }
}

/// Mutable camera pose and projection mode.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Pitch applied to the board, degrees. Unbounded.
    pub rotation_x: f32,
    /// Yaw applied to the board, degrees. Unbounded.
    pub rotation_y: f32,
    /// Signed eye distance along Z.
    pub zoom: f32,
    pub projection: ProjectionMode,
}

impl Default for CameraState {
    fn default() -> Self {
        CameraState {
            rotation_x: DEFAULT_ROTATION_X,
            rotation_y: DEFAULT_ROTATION_Y,
            zoom: DEFAULT_ZOOM,
            projection: ProjectionMode::Perspective,
        }
    }
}

impl CameraState {
    /// Restore the default pose. Projection mode is left untouched.
    pub fn reset_pose(&mut self) {
        self.rotation_x = DEFAULT_ROTATION_X;
        self.rotation_y = DEFAULT_ROTATION_Y;
        self.zoom = DEFAULT_ZOOM;
    }

    /// Eye position in world space.
    pub fn eye(&self) -> Vector3 {
        Vector3::new(0.0, EYE_HEIGHT, self.zoom)
    }

    /// Build the raylib camera for the current projection mode.
    pub fn to_camera3d(&self, params: &ProjectionParams) -> Camera3D {
        let target = Vector3::new(0.0, 0.0, 0.0);
        let up = Vector3::new(0.0, 1.0, 0.0);
        match self.projection {
            ProjectionMode::Perspective => Camera3D::perspective(self.eye(), target, up, params.fov),
            ProjectionMode::Orthographic => {
                Camera3D::orthographic(self.eye(), target, up, params.ortho_extent)
            }
        }
    }
}
