//! Fixed-depth minimax search with alpha-beta pruning
//!
//! This module implements the search the automated player uses to pick a move.
//!
//! # Conventions
//!
//! - Scores are always taken from the searching side's perspective: leaves are
//!   scored with [`evaluate`] for the root side at every ply, and only the side
//!   generating moves alternates.
//! - A side with no legal move passes; the pass still consumes one ply.
//! - Moves are expanded in row-major order. At the root the first move with a
//!   strictly greater value wins, so ties keep the earliest move.
//!
//! # Example
//!
//! ```
//! use reversi::board::{Board, Side};
//! use reversi::search::Searcher;
//!
//! let mut searcher = Searcher::new();
//! let board = Board::initial();
//!
//! let result = searcher.search(&board, Side::Black, 3).unwrap();
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: ({}, {})", best_move.row(), best_move.col());
//! }
//! ```

use crate::board::{Board, Pos, Side};
use crate::error::EngineError;
use crate::eval::evaluate;
use crate::rules::{apply_move, legal_moves};

/// Infinity score for alpha-beta bounds, beyond any reachable evaluation
const INF: i32 = 1_000_000;

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Cut-offs at maximizing nodes (value >= beta)
    pub beta_cutoffs: u64,
    /// Cut-offs at minimizing nodes (value <= alpha)
    pub alpha_cutoffs: u64,
    /// Nodes where the side to move had to pass
    pub passes: u64,
    /// Leaf evaluations
    pub evaluations: u64,
}

impl SearchStats {
    pub fn cutoffs(&self) -> u64 {
        self.beta_cutoffs + self.alpha_cutoffs
    }
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, `None` when the root side must pass
    pub best_move: Option<Pos>,
    /// Value of the best move from the searching side's perspective
    pub score: i32,
    /// Depth searched
    pub depth: u8,
    /// Total nodes visited
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Alpha-beta searcher.
///
/// Holds only counters; every node works on its own board copy, so one
/// searcher can be reused across positions.
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
    stats: SearchStats,
}

impl Searcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes visited by the last search
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Search `depth` plies ahead for `side` and return its best move.
    ///
    /// # Errors
    /// [`EngineError::InvalidDepth`] if `depth` is 0.
    pub fn search(
        &mut self,
        board: &Board,
        side: Side,
        depth: u8,
    ) -> Result<SearchResult, EngineError> {
        if depth < 1 {
            return Err(EngineError::InvalidDepth(depth));
        }

        self.nodes = 0;
        self.stats = SearchStats::default();

        let (best_move, score) = self.search_root(board, side, depth)?;

        Ok(SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
            stats: self.stats.clone(),
        })
    }

    /// Root-level search. Each child gets a full window.
    fn search_root(
        &mut self,
        board: &Board,
        side: Side,
        depth: u8,
    ) -> Result<(Option<Pos>, i32), EngineError> {
        let moves = legal_moves(board, side);
        if moves.is_empty() {
            return Ok((None, evaluate(board, side)));
        }

        self.nodes += 1;
        let mut best_move = None;
        let mut best_score = -INF;

        for mov in moves {
            let child = apply_move(board, mov, side)?;
            let score = self.alphabeta(&child, side.opponent(), depth - 1, -INF, INF, side)?;
            // Strictly greater: the first move in scan order keeps ties
            if score > best_score {
                best_score = score;
                best_move = Some(mov);
            }
        }

        Ok((best_move, best_score))
    }

    /// Minimax node. `to_move` generates the moves; `maximizing` is the fixed
    /// side whose evaluation is being maximized.
    fn alphabeta(
        &mut self,
        board: &Board,
        to_move: Side,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: Side,
    ) -> Result<i32, EngineError> {
        self.nodes += 1;

        if depth == 0 {
            self.stats.evaluations += 1;
            return Ok(evaluate(board, maximizing));
        }

        let moves = legal_moves(board, to_move);
        if moves.is_empty() {
            // Pass: the other side moves, one ply is spent
            self.stats.passes += 1;
            return self.alphabeta(board, to_move.opponent(), depth - 1, alpha, beta, maximizing);
        }

        if to_move == maximizing {
            let mut value = -INF;
            for mov in moves {
                let child = apply_move(board, mov, to_move)?;
                value = value.max(self.alphabeta(
                    &child,
                    to_move.opponent(),
                    depth - 1,
                    alpha,
                    beta,
                    maximizing,
                )?);
                if value >= beta {
                    self.stats.beta_cutoffs += 1;
                    return Ok(value);
                }
                alpha = alpha.max(value);
            }
            Ok(value)
        } else {
            let mut value = INF;
            for mov in moves {
                let child = apply_move(board, mov, to_move)?;
                value = value.min(self.alphabeta(
                    &child,
                    to_move.opponent(),
                    depth - 1,
                    alpha,
                    beta,
                    maximizing,
                )?);
                if value <= alpha {
                    self.stats.alpha_cutoffs += 1;
                    return Ok(value);
                }
                beta = beta.min(value);
            }
            Ok(value)
        }
    }
}

/// Best move for `side` searching `depth` plies, `None` if `side` must pass.
///
/// # Errors
/// [`EngineError::InvalidDepth`] if `depth` is 0.
pub fn best_move(board: &Board, side: Side, depth: u8) -> Result<Option<Pos>, EngineError> {
    Ok(Searcher::new().search(board, side, depth)?.best_move)
}
