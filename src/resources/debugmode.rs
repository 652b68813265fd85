//! Debug overlay toggle resource.
//!
//! The mere presence of this resource enables the on-screen diagnostics
//! (FPS, camera pose, animator clock). Remove it to hide them.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the renderer draws the debug overlay.
#[derive(Resource, Clone, Copy)]
pub struct DebugMode {}
