//! Search module for the automated player
//!
//! Contains:
//! - Fixed-depth minimax with alpha-beta pruning
//! - One-ply greedy pickers

pub mod alphabeta;
pub mod greedy;

pub use alphabeta::{best_move, SearchResult, SearchStats, Searcher};
pub use greedy::{first_move, greedy_move, CORNER_BONUS};
