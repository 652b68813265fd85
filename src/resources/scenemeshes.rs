//! Meshes shared by every frame.
//!
//! The square, one body cylinder per [`PieceType`] and the crown sphere are
//! generated once at startup and then instanced by the renderer with a
//! per-draw translation. Building fails if the configured mesh resolution is
//! out of range.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector3;

use crate::mesh::{self, GeometryError, Mesh};
use crate::resources::board::{BoardConfig, PieceType};
use crate::resources::gameconfig::GameConfig;

/// Crown radius relative to the body radius.
pub const CROWN_RADIUS_FACTOR: f32 = 0.6;

#[derive(Resource, Debug, Clone)]
pub struct SceneMeshes {
    /// Unit square with its minimum corner at the origin.
    pub square: Mesh,
    /// Body cylinders, indexed by [`PieceType::index`].
    pub bodies: Vec<Mesh>,
    pub crown: Mesh,
}

impl SceneMeshes {
    pub fn build(board: &BoardConfig, config: &GameConfig) -> Result<Self, GeometryError> {
        let radius = board.piece_radius();
        let bodies = PieceType::ALL
            .iter()
            .map(|p| mesh::cylinder(radius, p.body_height(), config.piece_slices))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SceneMeshes {
            square: mesh::square(Vector3::new(0.0, 0.0, 0.0), 1.0)?,
            bodies,
            crown: mesh::sphere(
                radius * CROWN_RADIUS_FACTOR,
                config.crown_slices,
                config.crown_stacks,
            )?,
        })
    }

    pub fn body(&self, piece: PieceType) -> &Mesh {
        &self.bodies[piece.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::PrimitiveKind;

    #[test]
    fn test_build_with_defaults() {
        let board = BoardConfig::from_seed(2);
        let meshes = SceneMeshes::build(&board, &GameConfig::new()).unwrap();
        assert_eq!(meshes.bodies.len(), 6);
        assert_eq!(meshes.square.vertex_count(), 4);
        // 20 slices: 42 side + 20 + 20 cap vertices
        assert_eq!(meshes.body(PieceType::King).vertex_count(), 82);
        assert_eq!(meshes.crown.primitives.len(), 10);
        assert!(
            meshes
                .crown
                .primitives
                .iter()
                .all(|p| p.kind == PrimitiveKind::QuadStrip && p.vertices.len() == 22)
        );
    }

    #[test]
    fn test_body_heights_follow_piece_table() {
        let board = BoardConfig::from_seed(2);
        let meshes = SceneMeshes::build(&board, &GameConfig::new()).unwrap();
        for piece in PieceType::ALL {
            let top = &meshes.body(piece).primitives[1];
            assert!(top.vertices.iter().all(|v| (v.y - piece.body_height()).abs() < 1e-6));
        }
    }

    #[test]
    fn test_bad_config_resolution_rejected() {
        let board = BoardConfig::from_seed(2);
        let mut config = GameConfig::new();
        config.piece_slices = 2;
        assert!(SceneMeshes::build(&board, &config).is_err());

        let mut config = GameConfig::new();
        config.crown_stacks = 0;
        assert!(SceneMeshes::build(&board, &config).is_err());
    }
}
