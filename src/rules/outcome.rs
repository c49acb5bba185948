//! Terminal detection and result

use serde::{Deserialize, Serialize};

use crate::board::{Board, Side};

use super::moves::has_legal_move;

/// Final result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    Winner(Side),
    Draw,
}

/// The game ends when the board is full or neither side can move.
pub fn is_game_over(board: &Board) -> bool {
    board.is_full() || (!has_legal_move(board, Side::Black) && !has_legal_move(board, Side::White))
}

/// Result by disc count once the game is over, `None` while it continues.
pub fn outcome(board: &Board) -> Option<GameOutcome> {
    if !is_game_over(board) {
        return None;
    }

    let count = board.count_pieces();
    let result = match count.black.cmp(&count.white) {
        std::cmp::Ordering::Greater => GameOutcome::Winner(Side::Black),
        std::cmp::Ordering::Less => GameOutcome::Winner(Side::White),
        std::cmp::Ordering::Equal => GameOutcome::Draw,
    };
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Pos, BOARD_SIZE};

    #[test]
    fn test_opening_not_over() {
        let board = Board::initial();
        assert!(!is_game_over(&board));
        assert_eq!(outcome(&board), None);
    }

    #[test]
    fn test_full_board_is_over() {
        let mut board = Board::new();
        for r in 0..BOARD_SIZE as u8 {
            for c in 0..BOARD_SIZE as u8 {
                let side = if r < 3 { Side::White } else { Side::Black };
                board.place_stone(Pos::new(r, c), side);
            }
        }
        assert!(is_game_over(&board));
        assert_eq!(outcome(&board), Some(GameOutcome::Winner(Side::Black)));
    }

    #[test]
    fn test_no_moves_for_either_side() {
        let mut board = Board::new();
        board.place_stone(Pos::new(0, 0), Side::White);
        board.place_stone(Pos::new(7, 7), Side::White);
        board.place_stone(Pos::new(3, 3), Side::Black);
        assert!(is_game_over(&board));
        assert_eq!(outcome(&board), Some(GameOutcome::Winner(Side::White)));
    }

    #[test]
    fn test_draw() {
        let mut board = Board::new();
        board.place_stone(Pos::new(0, 0), Side::White);
        board.place_stone(Pos::new(7, 7), Side::Black);
        assert_eq!(outcome(&board), Some(GameOutcome::Draw));
    }

    #[test]
    fn test_one_side_stuck_is_not_over() {
        // Black can move (captures the lone White at (0,1)), White cannot
        let mut board = Board::new();
        board.place_stone(Pos::new(0, 0), Side::Black);
        board.place_stone(Pos::new(0, 1), Side::White);
        assert!(has_legal_move(&board, Side::Black));
        assert!(!has_legal_move(&board, Side::White));
        assert!(!is_game_over(&board));
    }
}
