//! One-ply greedy move pickers
//!
//! Cheap alternatives to the alpha-beta search: take the first legal move, or
//! score each legal move by how many discs it flips, optionally with a flat
//! bonus for corners. The first move in row-major order wins ties.

use crate::board::{Board, Pos, Side};
use crate::rules::{flip_mask, legal_moves};

/// Bonus added to a corner move by [`greedy_move`] when corners are preferred
pub const CORNER_BONUS: i32 = 10;

/// Pick the move flipping the most discs, `None` if `side` must pass.
///
/// Returns the move and its greedy score.
pub fn greedy_move(board: &Board, side: Side, prefer_corners: bool) -> Option<(Pos, i32)> {
    let mut best: Option<(Pos, i32)> = None;

    for mov in legal_moves(board, side) {
        let mut score = flip_mask(board, mov, side).count() as i32;
        if prefer_corners && mov.is_corner() {
            score += CORNER_BONUS;
        }
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((mov, score));
        }
    }

    best
}

/// First legal move in row-major order, `None` if `side` must pass.
pub fn first_move(board: &Board, side: Side) -> Option<Pos> {
    legal_moves(board, side).into_iter().next()
}
