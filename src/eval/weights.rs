//! Positional weights for Reversi evaluation
//!
//! The standard corner-first table: corners are worth the most, the cells that
//! hand a corner to the opponent are penalised.

use crate::board::{Pos, BOARD_SIZE};

/// Weight per cell, row-major.
pub const WEIGHTS: [[i32; BOARD_SIZE]; BOARD_SIZE] = [
    [120, -20, 20, 5, 5, 20, -20, 120],
    [-20, -40, -5, -5, -5, -5, -40, -20],
    [20, -5, 15, 3, 3, 15, -5, 20],
    [5, -5, 3, 3, 3, 3, -5, 5],
    [5, -5, 3, 3, 3, 3, -5, 5],
    [20, -5, 15, 3, 3, 15, -5, 20],
    [-20, -40, -5, -5, -5, -5, -40, -20],
    [120, -20, 20, 5, 5, 20, -20, 120],
];

/// Named weights, for readability in tests and docs
pub struct CellWeight;

impl CellWeight {
    /// Corner cell
    pub const CORNER: i32 = 120;
    /// Edge cell next to a corner
    pub const C_SQUARE: i32 = -20;
    /// Cell diagonally next to a corner
    pub const X_SQUARE: i32 = -40;
}

/// Weight of a single cell, 0 off the board.
#[inline]
pub fn positional_weight(pos: Pos) -> i32 {
    WEIGHTS
        .get(pos.row() as usize)
        .and_then(|row| row.get(pos.col() as usize))
        .copied()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_weights() {
        assert_eq!(positional_weight(Pos::new(0, 0)), CellWeight::CORNER);
        assert_eq!(positional_weight(Pos::new(0, 1)), CellWeight::C_SQUARE);
        assert_eq!(positional_weight(Pos::new(1, 0)), CellWeight::C_SQUARE);
        assert_eq!(positional_weight(Pos::new(1, 1)), CellWeight::X_SQUARE);
        assert_eq!(positional_weight(Pos::new(6, 6)), CellWeight::X_SQUARE);
    }

    #[test]
    fn test_table_is_symmetric() {
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                assert_eq!(WEIGHTS[r][c], WEIGHTS[c][r]);
                assert_eq!(WEIGHTS[r][c], WEIGHTS[BOARD_SIZE - 1 - r][c]);
                assert_eq!(WEIGHTS[r][c], WEIGHTS[r][BOARD_SIZE - 1 - c]);
            }
        }
    }
}
