//! Game configuration change detection system.
//!
//! Monitors [`GameConfig`] and pushes window pacing settings (target FPS and
//! vsync) to raylib when the resource is inserted or modified.
//!
//! Projection values are read straight from the resource by the renderer
//! every frame, and mesh resolution is only used at startup, so neither
//! needs handling here.

use bevy_ecs::prelude::*;
use log::info;
use raylib::ffi;

use crate::resources::gameconfig::GameConfig;

/// System that applies game configuration changes.
///
/// # Resource Dependencies
/// - `GameConfig` (optional) - the configuration to monitor
/// - `RaylibHandle` (non-send, mutable) - for window operations
pub fn apply_gameconfig_changes(
    maybe_config: Option<Res<GameConfig>>,
    mut rl: NonSendMut<raylib::RaylibHandle>,
) {
    let Some(config) = maybe_config else {
        return;
    };

    if config.is_changed() || config.is_added() {
        // Apply vsync setting
        unsafe {
            if config.vsync {
                ffi::SetWindowState(ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
            } else {
                ffi::ClearWindowState(ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
            }
        }

        // Apply target FPS
        rl.set_target_fps(config.target_fps);

        info!(
            "GameConfig applied: fps={}, vsync={}",
            config.target_fps, config.vsync
        );
    }
}
