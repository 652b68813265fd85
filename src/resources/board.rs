//! Board configuration and layout resource.
//!
//! [`BoardConfig`] is derived once at startup from a single integer seed
//! (the "roll number") and never changes afterwards. All layout queries are
//! pure functions of `(row, col)` and the config, cheap enough to recompute
//! for every cell on every frame.
//!
//! # Seed derivation
//!
//! | field                   | formula           | range  |
//! |-------------------------|-------------------|--------|
//! | `board_size`            | `8 + seed % 3`    | 8..=10 |
//! | `piece_variation`       | `seed % 5 + 1`    | 1..=5  |
//! | `animation_complexity`  | `seed % 4 + 2`    | 2..=5  |
//! | `special_effects_level` | `seed % 3`        | 0..=2  |

use bevy_ecs::prelude::Resource;

/// Decorative piece kinds, in the order used by [`BoardConfig::piece_type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceType {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceType {
    /// Every piece type, in assignment order.
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Rook,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Queen,
        PieceType::King,
    ];

    /// Height of the cylinder body.
    pub fn body_height(self) -> f32 {
        match self {
            PieceType::Pawn => 0.8,
            PieceType::Rook => 1.2,
            PieceType::Knight => 1.1,
            PieceType::Bishop => 1.3,
            PieceType::Queen => 1.6,
            PieceType::King => 1.8,
        }
    }

    /// Queens and kings wear a gold crown.
    pub fn has_crown(self) -> bool {
        matches!(self, PieceType::Queen | PieceType::King)
    }

    /// Position in [`PieceType::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Side a piece belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceOwner {
    White,
    Black,
}

/// Immutable board parameters derived from the seed.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct BoardConfig {
    /// Seed every other field was derived from.
    pub seed: u32,
    /// Number of squares per side.
    pub board_size: usize,
    /// Thins out piece placement and hover records.
    pub piece_variation: usize,
    /// Shown in the startup banner only.
    pub animation_complexity: u32,
    /// Shown in the startup banner only.
    pub special_effects_level: u32,
}

impl BoardConfig {
    pub fn from_seed(seed: u32) -> Self {
        BoardConfig {
            seed,
            board_size: 8 + (seed % 3) as usize,
            piece_variation: (seed % 5) as usize + 1,
            animation_complexity: seed % 4 + 2,
            special_effects_level: seed % 3,
        }
    }

    /// Radius of every piece body.
    pub fn piece_radius(&self) -> f32 {
        0.25 + (self.seed % 3) as f32 * 0.05
    }

    /// Color scheme index the scene starts with.
    pub fn initial_color_scheme(&self) -> usize {
        (self.seed % 3) as usize
    }

    /// Total number of squares.
    pub fn cell_count(&self) -> usize {
        self.board_size * self.board_size
    }

    /// Arena index of a cell.
    pub fn cell_index(&self, row: usize, col: usize) -> usize {
        row * self.board_size + col
    }

    /// Iterate over every `(row, col)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.board_size;
        (0..n).flat_map(move |row| (0..n).map(move |col| (row, col)))
    }

    /// Checkerboard parity.
    pub fn is_dark_square(&self, row: usize, col: usize) -> bool {
        (row + col) % 2 != 0
    }

    /// Pieces occupy the two outer ranks on each side, every
    /// `piece_variation + 1`-th file.
    pub fn has_piece(&self, row: usize, col: usize) -> bool {
        let outer_rank = row < 2 || row + 2 >= self.board_size;
        outer_rank && col % (self.piece_variation + 1) == 0
    }

    pub fn piece_owner(&self, row: usize, col: usize) -> PieceOwner {
        if row + 2 >= self.board_size {
            PieceOwner::White
        } else {
            PieceOwner::Black
        }
    }

    pub fn piece_type(&self, row: usize, col: usize) -> PieceType {
        PieceType::ALL[(row * 3 + col) % PieceType::ALL.len()]
    }

    /// World-space `(x, z)` of the minimum corner of a cell.
    ///
    /// The board is centered on the origin.
    pub fn cell_origin(&self, row: usize, col: usize) -> (f32, f32) {
        let half = self.board_size as f32 / 2.0;
        (col as f32 - half, row as f32 - half)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig::from_seed(crate::resources::gameconfig::DEFAULT_SEED)
    }
}
