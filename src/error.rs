//! Error types for the engine and the game session

use thiserror::Error;

use crate::board::Side;

/// Errors raised by engine entry points.
///
/// None of these are transient: every engine operation is deterministic, so an
/// error always means the caller passed something it should not have.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The target cell is occupied or flips nothing for `side`.
    #[error("illegal move for {side:?} at ({row}, {col})")]
    IllegalMove { row: u8, col: u8, side: Side },
    /// Coordinates outside the 8x8 board.
    #[error("coordinates ({row}, {col}) are off the board")]
    OutOfBounds { row: i32, col: i32 },
    /// Search depth below 1.
    #[error("search depth {0} is out of range (must be >= 1)")]
    InvalidDepth(u8),
    /// Board encoding value outside {-1, 0, 1}.
    #[error("invalid cell value {0} (expected -1, 0 or 1)")]
    InvalidCell(i8),
}

/// Errors raised by [`GameSession`](crate::session::GameSession) actions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("game is over")]
    GameOver,
    #[error("not the human player's turn")]
    NotHumanTurn,
    #[error("automated player is thinking")]
    AutomatedThinking,
    #[error("not the automated player's turn")]
    NotAutomatedTurn,
    #[error(transparent)]
    Engine(#[from] EngineError),
}
