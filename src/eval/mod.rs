//! Evaluation module for Reversi positions
//!
//! Static scoring from a fixed table of positional weights.

pub mod heuristic;
pub mod weights;

pub use heuristic::evaluate;
pub use weights::{positional_weight, CellWeight, WEIGHTS};
