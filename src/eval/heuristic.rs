//! Heuristic evaluation function for Reversi board positions
//!
//! Positional weight only: disc count and mobility are deliberately not part
//! of the score, since changing them changes which moves the search picks.

use crate::board::{Board, Side};

use super::weights::positional_weight;

/// Evaluate the board from the perspective of `side`.
///
/// Returns the sum of positional weights of `side`'s discs minus the sum for
/// the opponent's discs:
/// - Positive values indicate advantage for `side`
/// - Negative values indicate disadvantage for `side`
///
/// Only the relative ordering of scores is meaningful.
#[must_use]
pub fn evaluate(board: &Board, side: Side) -> i32 {
    side_weight(board, side) - side_weight(board, side.opponent())
}

fn side_weight(board: &Board, side: Side) -> i32 {
    board.stones(side).iter_ones().map(positional_weight).sum()
}
