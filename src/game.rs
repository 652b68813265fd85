//! Scene setup.
//!
//! [`setup`] fills a [`World`] with every resource and observer the scene
//! needs, except the raylib handle and thread which `main` inserts after the
//! window opens. Integration tests call it directly on a bare world.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use fastrand::Rng;
use log::info;

use crate::events::scenecommand::scene_command_observer;
use crate::events::switchdebug::switch_debug_observer;
use crate::mesh::GeometryError;
use crate::resources::board::BoardConfig;
use crate::resources::camera3d::CameraState;
use crate::resources::cameraanimator::CameraAnimator;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::pieceanimation::PieceAnimations;
use crate::resources::rendersettings::{ColorScheme, RenderSettings};
use crate::resources::scenemeshes::SceneMeshes;
use crate::resources::worldtime::WorldTime;

/// Window title for a board.
pub fn window_title(board: &BoardConfig) -> String {
    format!(
        "Roll {:02} Chessboard - Size: {}x{} | Pieces: Lvl {}",
        board.seed, board.board_size, board.board_size, board.piece_variation
    )
}

/// Configuration summary and control legend printed at startup.
pub fn startup_banner(board: &BoardConfig) -> Vec<String> {
    let rule = "=".repeat(50);
    vec![
        rule.clone(),
        format!("ROLL NUMBER {:02} - ENHANCED CHESSBOARD", board.seed),
        rule.clone(),
        "Board Configuration:".to_string(),
        format!("  Size: {}x{}", board.board_size, board.board_size),
        format!("  Piece Variation: Level {}", board.piece_variation),
        format!(
            "  Animation Complexity: {} keyframes",
            board.animation_complexity
        ),
        format!("  Special Effects: Level {}", board.special_effects_level),
        "Controls:".to_string(),
        "  SPACE - Toggle Perspective/Orthographic".to_string(),
        "  A - Start Animation Sequence".to_string(),
        "  R - Reset View".to_string(),
        "  W - Toggle Wireframe Mode".to_string(),
        "  G - Toggle Coordinate Grid".to_string(),
        "  C - Cycle Color Schemes".to_string(),
        "  F11 - Toggle Debug Overlay".to_string(),
        "  Mouse Drag - Rotate View".to_string(),
        "  Mouse Wheel - Zoom In/Out".to_string(),
        rule,
    ]
}

/// Insert scene resources and register observers.
///
/// Hover phases are drawn from `phase_rng`; pass a seeded generator for a
/// reproducible scene. Fails if the configured mesh resolution is invalid,
/// in which case the world is left untouched.
pub fn setup(world: &mut World, config: GameConfig, phase_rng: &mut Rng) -> Result<(), GeometryError> {
    let board = BoardConfig::from_seed(config.seed);
    let meshes = SceneMeshes::build(&board, &config)?;
    let animations = PieceAnimations::new(&board, phase_rng);
    info!(
        "Scene ready: {} squares, {} hover records",
        board.cell_count(),
        animations.len()
    );

    let scheme = ColorScheme::from_index(board.initial_color_scheme());
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(InputState::default());
    world.insert_resource(CameraState::default());
    world.insert_resource(CameraAnimator::default());
    world.insert_resource(RenderSettings::default().with_color_scheme(scheme));
    world.insert_resource(meshes);
    world.insert_resource(animations);
    world.insert_resource(board);
    world.insert_resource(config);

    world.spawn(Observer::new(scene_command_observer));
    world.spawn(Observer::new(switch_debug_observer));
    // Observers must exist before any system triggers events
    world.flush();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_title() {
        let board = BoardConfig::from_seed(2);
        assert_eq!(
            window_title(&board),
            "Roll 02 Chessboard - Size: 10x10 | Pieces: Lvl 3"
        );
    }

    #[test]
    fn test_banner_mentions_configuration() {
        let board = BoardConfig::from_seed(2);
        let banner = startup_banner(&board);
        assert_eq!(banner[1], "ROLL NUMBER 02 - ENHANCED CHESSBOARD");
        assert!(banner.contains(&"  Size: 10x10".to_string()));
        assert!(banner.contains(&"  Animation Complexity: 4 keyframes".to_string()));
        assert!(banner.iter().any(|l| l.starts_with("  SPACE")));
    }

    #[test]
    fn test_setup_inserts_resources() {
        let mut world = World::new();
        let mut rng = Rng::with_seed(1);
        setup(&mut world, GameConfig::new(), &mut rng).unwrap();
        assert_eq!(world.resource::<BoardConfig>().board_size, 10);
        assert_eq!(
            world.resource::<RenderSettings>().color_scheme,
            ColorScheme::Fantasy
        );
        assert!(world.contains_resource::<SceneMeshes>());
        assert!(!world.resource::<PieceAnimations>().is_empty());
    }

    #[test]
    fn test_setup_rejects_bad_mesh_config() {
        let mut world = World::new();
        let mut rng = Rng::with_seed(1);
        let mut config = GameConfig::new();
        config.piece_slices = 1;
        assert!(setup(&mut world, config, &mut rng).is_err());
        assert!(!world.contains_resource::<BoardConfig>());
    }
}
