//! Per-piece hover animation records.
//!
//! Each record is a phase/amplitude/speed triple producing a small vertical
//! bob, `amplitude · sin(speed · t + phase)`. Records are created once at
//! startup for every cell where `(row + col) % piece_variation == 0`.
//!
//! That predicate is not the one deciding which cells hold a piece
//! ([`BoardConfig::has_piece`]). Some records belong to empty cells and some
//! pieces have no record; those pieces simply do not hover.

use bevy_ecs::prelude::Resource;
use fastrand::Rng;
use std::f32::consts::TAU;

use crate::resources::board::BoardConfig;

/// Hover parameters for one cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieceAnimation {
    /// Phase offset in radians, in `[0, 2π)`.
    pub phase: f32,
    /// Peak vertical offset, in `[0.2, 0.5)`.
    pub amplitude: f32,
    /// Angular speed multiplier, one of 1, 2 or 3.
    pub speed: f32,
}

impl PieceAnimation {
    /// Vertical offset at time `t` seconds.
    pub fn offset(&self, t: f32) -> f32 {
        self.amplitude * (self.speed * t + self.phase).sin()
    }
}

/// Arena of hover records indexed by `row * board_size + col`.
#[derive(Resource, Debug, Clone)]
pub struct PieceAnimations {
    board_size: usize,
    records: Vec<Option<PieceAnimation>>,
}

impl PieceAnimations {
    /// Build records for every qualifying cell, drawing phases from `rng`.
    ///
    /// Cells are visited in row-major order so a seeded `rng` always yields
    /// the same phases.
    pub fn new(board: &BoardConfig, rng: &mut Rng) -> Self {
        let mut records = vec![None; board.cell_count()];
        for (row, col) in board.cells() {
            if (row + col) % board.piece_variation != 0 {
                continue;
            }
            let phase = (rng.f32() * TAU) % TAU;
            records[board.cell_index(row, col)] = Some(PieceAnimation {
                phase,
                amplitude: 0.2 + ((row * col) % 3) as f32 * 0.1,
                speed: (1 + (row + col) % 3) as f32,
            });
        }
        PieceAnimations {
            board_size: board.board_size,
            records,
        }
    }

    /// Record for a cell, if one was created.
    pub fn get(&self, row: usize, col: usize) -> Option<&PieceAnimation> {
        if row >= self.board_size || col >= self.board_size {
            return None;
        }
        self.records[row * self.board_size + col].as_ref()
    }

    /// Hover offset for a cell at time `t`; zero for cells without a record.
    pub fn hover_offset(&self, row: usize, col: usize, t: f32) -> f32 {
        self.get(row, col).map_or(0.0, |anim| anim.offset(t))
    }

    /// Number of cells with a record.
    pub fn len(&self) -> usize {
        self.records.iter().filter(|r| r.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn build(seed: u32, rng_seed: u64) -> (BoardConfig, PieceAnimations) {
        let board = BoardConfig::from_seed(seed);
        let anims = PieceAnimations::new(&board, &mut Rng::with_seed(rng_seed));
        (board, anims)
    }

    #[test]
    fn test_records_follow_variation_predicate() {
        let (board, anims) = build(2, 7); // variation 3
        for (row, col) in board.cells() {
            assert_eq!(
                anims.get(row, col).is_some(),
                (row + col) % 3 == 0,
                "({}, {})",
                row,
                col
            );
        }
    }

    #[test]
    fn test_record_parameters() {
        let (board, anims) = build(2, 7);
        for (row, col) in board.cells() {
            if let Some(a) = anims.get(row, col) {
                assert!((0.0..TAU).contains(&a.phase));
                let expected_amp = 0.2 + ((row * col) % 3) as f32 * 0.1;
                assert!((a.amplitude - expected_amp).abs() < EPSILON);
                assert!(a.amplitude >= 0.2 && a.amplitude < 0.5);
                assert_eq!(a.speed, (1 + (row + col) % 3) as f32);
            }
        }
    }

    #[test]
    fn test_hover_offset_matches_formula() {
        let (_, anims) = build(2, 11);
        let a = *anims.get(3, 3).unwrap();
        let t = 1.75;
        let expected = a.amplitude * (a.speed * t + a.phase).sin();
        assert!((anims.hover_offset(3, 3, t) - expected).abs() < EPSILON);
    }

    #[test]
    fn test_missing_record_gives_zero_offset() {
        let (_, anims) = build(2, 11);
        assert!(anims.get(0, 1).is_none());
        assert_eq!(anims.hover_offset(0, 1, 3.0), 0.0);
        // out of range is treated as missing
        assert_eq!(anims.hover_offset(42, 0, 3.0), 0.0);
    }

    #[test]
    fn test_occupancy_and_records_are_decoupled() {
        let (board, anims) = build(2, 3);
        // (0, 4) holds a piece but 4 % 3 != 0: no record
        assert!(board.has_piece(0, 4));
        assert!(anims.get(0, 4).is_none());
        // (3, 3) has a record but no piece
        assert!(!board.has_piece(3, 3));
        assert!(anims.get(3, 3).is_some());
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let (_, a) = build(2, 99);
        let (_, b) = build(2, 99);
        assert_eq!(a.get(0, 0), b.get(0, 0));
        assert_eq!(a.get(9, 9), b.get(9, 9));
    }

    #[test]
    fn test_variation_one_animates_every_cell() {
        let (board, anims) = build(0, 1); // variation 1
        assert_eq!(anims.len(), board.cell_count());
        assert!(!anims.is_empty());
    }
}
