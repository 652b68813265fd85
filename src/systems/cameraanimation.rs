//! Keyframe camera animation system.
//!
//! Advances the [`CameraAnimator`] by the frame delta and lets it write the
//! interpolated pose into [`CameraState`]. Runs after input so a reset or
//! restart issued this frame takes effect before the tick.
use bevy_ecs::prelude::*;

use crate::resources::camera3d::CameraState;
use crate::resources::cameraanimator::CameraAnimator;
use crate::resources::worldtime::WorldTime;

pub fn camera_animation_system(
    world_time: Res<WorldTime>,
    mut animator: ResMut<CameraAnimator>,
    mut camera: ResMut<CameraState>,
) {
    if !animator.is_playing() {
        return;
    }
    let dt = world_time.delta.max(0.0);
    animator.tick(dt, &mut camera);
}
