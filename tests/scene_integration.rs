//! Scene integration tests: setup, observers, and the camera animation tick.
//!
//! These build a full scene world without a window; raylib handles are
//! never inserted, so only windowless systems are scheduled.

use bevy_ecs::prelude::*;

use chessboard3d::events::scenecommand::{SceneCommand, SceneCommandEvent};
use chessboard3d::events::switchdebug::SwitchDebugEvent;
use chessboard3d::game;
use chessboard3d::resources::board::BoardConfig;
use chessboard3d::resources::camera3d::{CameraState, ProjectionMode};
use chessboard3d::resources::cameraanimator::{AnimatorState, CameraAnimator};
use chessboard3d::resources::debugmode::DebugMode;
use chessboard3d::resources::gameconfig::GameConfig;
use chessboard3d::resources::pieceanimation::PieceAnimations;
use chessboard3d::resources::rendersettings::{ColorScheme, RenderSettings};
use chessboard3d::resources::worldtime::WorldTime;
use chessboard3d::systems::cameraanimation::camera_animation_system;
use chessboard3d::systems::time::update_world_time;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world(seed: u32) -> World {
    let mut world = World::new();
    let config = GameConfig {
        seed,
        ..GameConfig::new()
    };
    let mut rng = fastrand::Rng::with_seed(42);
    game::setup(&mut world, config, &mut rng).unwrap();
    world
}

fn make_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(camera_animation_system);
    schedule
}

fn send(world: &mut World, command: SceneCommand) {
    world.trigger(SceneCommandEvent::from(command));
    world.flush();
}

fn step(world: &mut World, schedule: &mut Schedule, dt: f32) {
    update_world_time(world, dt);
    schedule.run(world);
}

fn pose(world: &World) -> (f32, f32, f32) {
    let cam = world.resource::<CameraState>();
    (cam.rotation_x, cam.rotation_y, cam.zoom)
}

#[test]
fn seed_two_scene_parameters() {
    let world = make_world(2);
    let board = world.resource::<BoardConfig>();
    assert_eq!(
        (
            board.board_size,
            board.piece_variation,
            board.animation_complexity,
            board.special_effects_level
        ),
        (10, 3, 4, 2)
    );
    assert_eq!(
        world.resource::<RenderSettings>().color_scheme,
        ColorScheme::Fantasy
    );
    assert_eq!(pose(&world), (25.0, 0.0, -12.0));
}

#[test]
fn drag_and_wheel_then_reset() {
    let mut world = make_world(2);
    send(&mut world, SceneCommand::Rotate { dx: 10.0, dy: -4.0 });
    let (rx, ry, _) = pose(&world);
    assert!(approx_eq(rx, 23.0));
    assert!(approx_eq(ry, 5.0));

    for _ in 0..40 {
        send(&mut world, SceneCommand::Zoom { wheel: 1.0 });
    }
    assert_eq!(pose(&world).2, -5.0);
    for _ in 0..40 {
        send(&mut world, SceneCommand::Zoom { wheel: -1.0 });
    }
    assert_eq!(pose(&world).2, -20.0);

    send(&mut world, SceneCommand::ToggleProjection);
    send(&mut world, SceneCommand::ResetView);
    assert_eq!(pose(&world), (25.0, 0.0, -12.0));
    assert_eq!(
        world.resource::<CameraState>().projection,
        ProjectionMode::Orthographic
    );
}

#[test]
fn animation_plays_keyframes_and_returns_to_idle() {
    let mut world = make_world(2);
    let mut schedule = make_schedule();

    // Idle animator leaves the camera alone
    step(&mut world, &mut schedule, 1.0);
    assert_eq!(pose(&world), (25.0, 0.0, -12.0));

    send(&mut world, SceneCommand::StartAnimation);
    assert_eq!(
        world.resource::<CameraAnimator>().state(),
        AnimatorState::Playing
    );

    step(&mut world, &mut schedule, 3.0);
    let (rx, ry, zoom) = pose(&world);
    assert!(approx_eq(rx, 60.0) && approx_eq(ry, 90.0) && approx_eq(zoom, -8.0));

    step(&mut world, &mut schedule, 3.0);
    let (rx, ry, zoom) = pose(&world);
    assert!(approx_eq(rx, 30.0) && approx_eq(ry, 180.0) && approx_eq(zoom, -10.0));

    step(&mut world, &mut schedule, 3.0);
    step(&mut world, &mut schedule, 3.0);
    let (rx, ry, zoom) = pose(&world);
    assert!(approx_eq(rx, 25.0) && approx_eq(ry, 360.0) && approx_eq(zoom, -12.0));

    // Passing the last keyframe stops without snapping the camera
    step(&mut world, &mut schedule, 0.5);
    let animator = world.resource::<CameraAnimator>();
    assert_eq!(animator.state(), AnimatorState::Idle);
    assert_eq!(animator.elapsed(), 0.0);
    assert!(approx_eq(pose(&world).1, 360.0));
}

#[test]
fn animation_midway_is_eased() {
    let mut world = make_world(2);
    let mut schedule = make_schedule();
    send(&mut world, SceneCommand::StartAnimation);
    step(&mut world, &mut schedule, 1.5);
    let (rx, ry, _) = pose(&world);
    // smoothstep(0.5) == 0.5
    assert!(approx_eq(rx, 42.5));
    assert!(approx_eq(ry, 45.0));

    // A quarter of the way eases in below linear
    let mut world = make_world(2);
    let mut schedule = make_schedule();
    send(&mut world, SceneCommand::StartAnimation);
    step(&mut world, &mut schedule, 0.75);
    assert!(pose(&world).1 < 22.5);
}

#[test]
fn reset_during_animation_stops_playback() {
    let mut world = make_world(2);
    let mut schedule = make_schedule();
    send(&mut world, SceneCommand::StartAnimation);
    step(&mut world, &mut schedule, 2.0);
    send(&mut world, SceneCommand::ResetView);
    step(&mut world, &mut schedule, 1.0);
    assert_eq!(
        world.resource::<CameraAnimator>().state(),
        AnimatorState::Idle
    );
    assert_eq!(pose(&world), (25.0, 0.0, -12.0));
}

#[test]
fn mode_toggles_through_observer() {
    let mut world = make_world(2);
    send(&mut world, SceneCommand::ToggleWireframe);
    send(&mut world, SceneCommand::ToggleGrid);
    send(&mut world, SceneCommand::CycleColorScheme);
    let settings = *world.resource::<RenderSettings>();
    assert!(settings.wireframe);
    assert!(!settings.grid_enabled);
    assert_eq!(settings.color_scheme, ColorScheme::Classic);
}

#[test]
fn switch_debug_toggles_overlay() {
    let mut world = make_world(2);
    assert!(!world.contains_resource::<DebugMode>());
    world.trigger(SwitchDebugEvent {});
    world.flush();
    assert!(world.contains_resource::<DebugMode>());
    world.trigger(SwitchDebugEvent {});
    world.flush();
    assert!(!world.contains_resource::<DebugMode>());
}

#[test]
fn world_time_drives_hover_time() {
    let mut world = make_world(2);
    let mut schedule = make_schedule();
    for _ in 0..10 {
        step(&mut world, &mut schedule, 0.1);
    }
    let t = world.resource::<WorldTime>();
    assert!(approx_eq(t.elapsed, 1.0));
    assert_eq!(t.frame_count, 10);

    let animations = world.resource::<PieceAnimations>();
    let expected = animations.get(0, 0).map(|a| a.offset(1.0)).unwrap();
    assert!(approx_eq(animations.hover_offset(0, 0, t.elapsed), expected));
    assert_eq!(animations.hover_offset(0, 4, t.elapsed), 0.0);
}

#[test]
fn same_phase_seed_gives_same_hover() {
    let a = make_world(5);
    let b = make_world(5);
    let (ra, rb) = (
        a.resource::<PieceAnimations>(),
        b.resource::<PieceAnimations>(),
    );
    assert_eq!(ra.len(), rb.len());
    for row in 0..10 {
        for col in 0..10 {
            assert_eq!(ra.get(row, col), rb.get(row, col));
        }
    }
}
