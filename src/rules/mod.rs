//! Reversi rules
//!
//! This module implements the rule set:
//! - Flip resolution along the 8 directions
//! - Legal move generation and move application
//! - Terminal detection and game result

pub mod flips;
pub mod moves;
pub mod outcome;

// Re-exports for convenient access
pub use flips::{flip_mask, flips, would_flip};
pub use moves::{apply_move, has_legal_move, is_legal_move, legal_moves};
pub use outcome::{is_game_over, outcome, GameOutcome};
