//! Flip resolution
//!
//! Placing a disc at `pos` captures, in each of the 8 directions independently,
//! the maximal run of opposing discs that starts right next to `pos` and is
//! closed by one of the mover's own discs. A run ended by the edge or an empty
//! cell captures nothing, and so does a direction with no opposing disc at all.

use crate::board::{Bitboard, Board, Pos, Side, DIRECTIONS};

/// Discs captured along one direction, empty if the run is not bracketed.
fn flips_in_direction(board: &Board, pos: Pos, dr: i32, dc: i32, side: Side) -> Bitboard {
    let own = side.cell();
    let opponent = side.opponent().cell();

    let mut run = Bitboard::new();
    let mut cursor = pos.step(dr, dc);
    while let Some(p) = cursor {
        let cell = board.get(p);
        if cell == opponent {
            run.set(p);
            cursor = p.step(dr, dc);
        } else if cell == own {
            return run;
        } else {
            break;
        }
    }

    Bitboard::new()
}

/// Mask of every disc a placement at `pos` would flip.
///
/// Returns an empty mask for an occupied or off-board cell.
pub fn flip_mask(board: &Board, pos: Pos, side: Side) -> Bitboard {
    if !pos.in_bounds() || !board.is_empty(pos) {
        return Bitboard::new();
    }

    DIRECTIONS
        .iter()
        .fold(Bitboard::new(), |acc, &(dr, dc)| {
            acc.union(flips_in_direction(board, pos, dr, dc, side))
        })
}

/// Positions a placement at `pos` would flip, in row-major order.
///
/// # Arguments
/// * `board` - Current board state
/// * `pos` - Position where the disc would be placed
/// * `side` - Side placing the disc
pub fn flips(board: &Board, pos: Pos, side: Side) -> Vec<Pos> {
    flip_mask(board, pos, side).iter_ones().collect()
}

/// Cheaper check than [`flip_mask`]: stops at the first bracketed run.
pub fn would_flip(board: &Board, pos: Pos, side: Side) -> bool {
    pos.in_bounds()
        && board.is_empty(pos)
        && DIRECTIONS
            .iter()
            .any(|&(dr, dc)| !flips_in_direction(board, pos, dr, dc, side).is_empty())
}
