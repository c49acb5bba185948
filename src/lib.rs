//! Reversi (Othello) engine for human vs. computer play
//!
//! Standard 8x8 rules:
//! - Black moves first from the four-disc opening
//! - A move must flip at least one line of opponent discs
//! - A side with no legal move passes
//! - The game ends when neither side can move or the board is full;
//!   more discs wins
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Flip resolution, legal moves, game result
//! - [`eval`]: Positional weight evaluation
//! - [`search`]: Alpha-beta search and greedy pickers
//! - [`engine`]: AI engine selecting a strategy by difficulty level
//! - [`session`]: Turn state machine for a human vs. computer game
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use reversi::{apply_move, AiEngine, Board, EngineConfig, Pos, Side};
//!
//! let board = Board::initial();
//! let board = apply_move(&board, Pos::new(2, 3), Side::Black).unwrap();
//!
//! // AI responds as White at level 3
//! let mut engine = AiEngine::with_config(EngineConfig::from_level(3)).unwrap();
//! if let Some(pos) = engine.get_move(&board, Side::White) {
//!     let board = apply_move(&board, pos, Side::White).unwrap();
//!     println!("AI plays at {}\n{}", pos, board);
//! }
//! ```

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod session;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, PieceCount, Pos, Side, BOARD_SIZE};
pub use engine::{AiEngine, EngineConfig, MoveResult, SearchType, Strategy};
pub use error::{EngineError, SessionError};
pub use eval::evaluate;
pub use rules::{apply_move, flips, is_game_over, legal_moves, outcome, GameOutcome};
pub use search::best_move;
pub use session::{GameSession, Phase, SessionConfig, Turn};
