//! Time update system.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per frame, applying `time_scale` to the provided delta.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Update elapsed and delta seconds on the `WorldTime` resource.
///
/// `dt` is the unscaled frame delta in seconds. Negative deltas (a clock
/// going backwards) count as zero.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = dt.max(0.0) * wt.time_scale;
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
    wt.frame_count += 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_world_time_scales_and_counts() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default().with_time_scale(2.0));
        update_world_time(&mut world, 0.25);
        update_world_time(&mut world, 0.25);
        let wt = world.resource::<WorldTime>();
        assert!((wt.elapsed - 1.0).abs() < 1e-6);
        assert!((wt.delta - 0.5).abs() < 1e-6);
        assert_eq!(wt.frame_count, 2);
    }

    #[test]
    fn test_negative_delta_clamped() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        update_world_time(&mut world, -1.0);
        let wt = world.resource::<WorldTime>();
        assert_eq!(wt.delta, 0.0);
        assert_eq!(wt.elapsed, 0.0);
    }
}
