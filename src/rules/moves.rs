//! Legal move generation and move application

use crate::board::{Board, Pos, Side, TOTAL_CELLS};
use crate::error::EngineError;

use super::flips::{flip_mask, would_flip};

/// Check whether `side` may place a disc at `pos`.
#[inline]
pub fn is_legal_move(board: &Board, pos: Pos, side: Side) -> bool {
    would_flip(board, pos, side)
}

/// Legal placements for `side`, in row-major scan order.
///
/// The order is deterministic; search tie-breaking relies on it.
pub fn legal_moves(board: &Board, side: Side) -> Vec<Pos> {
    (0..TOTAL_CELLS)
        .map(Pos::from_index)
        .filter(|&pos| is_legal_move(board, pos, side))
        .collect()
}

/// True if `side` has at least one legal placement.
pub fn has_legal_move(board: &Board, side: Side) -> bool {
    (0..TOTAL_CELLS)
        .map(Pos::from_index)
        .any(|pos| is_legal_move(board, pos, side))
}

/// Place a disc for `side` at `pos` and flip every bracketed run.
///
/// The input board is left untouched; the resulting position is returned as a
/// new value. A placement that flips nothing is rejected, never applied as a
/// bare placement.
///
/// # Errors
/// - [`EngineError::OutOfBounds`] if `pos` is off the board
/// - [`EngineError::IllegalMove`] if `pos` is occupied or captures nothing
pub fn apply_move(board: &Board, pos: Pos, side: Side) -> Result<Board, EngineError> {
    if !pos.in_bounds() {
        return Err(EngineError::OutOfBounds {
            row: pos.row().into(),
            col: pos.col().into(),
        });
    }

    let mask = flip_mask(board, pos, side);
    if mask.is_empty() {
        return Err(EngineError::IllegalMove {
            row: pos.row(),
            col: pos.col(),
            side,
        });
    }

    let mut next = *board;
    next.place_stone(pos, side);
    next.flip_to(mask, side);
    Ok(next)
}
