//! AI engine wrapping the move pickers
//!
//! This module provides the engine the game session calls for the automated
//! turn. It dispatches to the configured [`Strategy`], measures the search and
//! reports what it did in a [`MoveResult`].
//!
//! # Example
//!
//! ```
//! use reversi::{AiEngine, Board, EngineConfig, Side};
//!
//! let mut engine = AiEngine::with_config(EngineConfig::from_level(3)).unwrap();
//! let board = Board::initial();
//!
//! let result = engine.get_move_with_stats(&board, Side::Black);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::board::{Board, Pos, Side};
use crate::error::EngineError;
use crate::eval::evaluate;
use crate::rules::flips;
use crate::search::{first_move, greedy_move, Searcher};

/// Lowest difficulty level (search depth 1)
pub const MIN_LEVEL: u8 = 1;
/// Highest difficulty level (search depth 4)
pub const MAX_LEVEL: u8 = 4;

/// How the engine picks its move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Fixed-depth alpha-beta search
    #[default]
    AlphaBeta,
    /// First legal move in row-major order
    First,
    /// Most discs flipped
    Greedy,
    /// Most discs flipped, corners preferred
    GreedyCorners,
}

/// Engine configuration.
///
/// Deserialises from partial input, e.g. `{"depth": 3}`; missing fields take
/// their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Plies searched by [`Strategy::AlphaBeta`]
    pub depth: u8,
    pub strategy: Strategy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::from_level(MIN_LEVEL)
    }
}

impl EngineConfig {
    /// Map a difficulty level to an alpha-beta config, clamping the level into
    /// `[MIN_LEVEL, MAX_LEVEL]`.
    #[must_use]
    pub fn from_level(level: u8) -> Self {
        Self {
            depth: level.clamp(MIN_LEVEL, MAX_LEVEL),
            strategy: Strategy::AlphaBeta,
        }
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Which picker produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Regular alpha-beta search result
    AlphaBeta,
    /// Greedy one-ply pick
    Greedy,
    /// No legal move, the side passes
    Pass,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, `None` means pass
    pub best_move: Option<Pos>,
    /// Score of the chosen move in the picker's own units
    pub score: i32,
    /// Type of search that found this move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn pass(board: &Board, side: Side, time_ms: u64) -> Self {
        Self {
            best_move: None,
            score: evaluate(board, side),
            search_type: SearchType::Pass,
            time_ms,
            nodes: 0,
        }
    }

    #[inline]
    fn greedy(pos: Pos, score: i32, time_ms: u64) -> Self {
        Self {
            best_move: Some(pos),
            score,
            search_type: SearchType::Greedy,
            time_ms,
            nodes: 1,
        }
    }

    pub fn is_pass(&self) -> bool {
        self.best_move.is_none()
    }
}

/// Engine for the automated player.
pub struct AiEngine {
    searcher: Searcher,
    config: EngineConfig,
}

impl AiEngine {
    /// Engine at the lowest difficulty.
    #[must_use]
    pub fn new() -> Self {
        Self {
            searcher: Searcher::new(),
            config: EngineConfig::default(),
        }
    }

    /// Create an engine with a custom configuration.
    ///
    /// # Errors
    /// [`EngineError::InvalidDepth`] for an alpha-beta config with depth 0.
    pub fn with_config(config: EngineConfig) -> Result<Self, EngineError> {
        if config.strategy == Strategy::AlphaBeta && config.depth < 1 {
            return Err(EngineError::InvalidDepth(config.depth));
        }
        Ok(Self {
            searcher: Searcher::new(),
            config,
        })
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    pub fn max_depth(&self) -> u8 {
        self.config.depth
    }

    /// Best move for `side`, `None` if it must pass.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, side: Side) -> Option<Pos> {
        self.get_move_with_stats(board, side).best_move
    }

    /// Best move with search statistics.
    ///
    /// Never fails: the depth was validated when the engine was built, and a
    /// side without legal moves gets a [`SearchType::Pass`] result.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board, side: Side) -> MoveResult {
        let start = Instant::now();

        let result = match self.config.strategy {
            Strategy::AlphaBeta => self.search_alphabeta(board, side, start),
            Strategy::First => Self::search_first(board, side, start),
            Strategy::Greedy => Self::search_greedy(board, side, false, start),
            Strategy::GreedyCorners => Self::search_greedy(board, side, true, start),
        };

        debug!(
            "{} -> {} ({:?}, score {}, {} nodes, {}ms)",
            side.name(),
            result
                .best_move
                .map_or_else(|| "pass".to_string(), |pos| pos.to_string()),
            result.search_type,
            result.score,
            result.nodes,
            result.time_ms
        );

        result
    }

    fn search_alphabeta(&mut self, board: &Board, side: Side, start: Instant) -> MoveResult {
        // Depth is >= 1 by construction; treat a failure as a pass
        match self.searcher.search(board, side, self.config.depth) {
            Ok(result) => {
                let time_ms = start.elapsed().as_millis() as u64;
                if result.best_move.is_none() {
                    return MoveResult::pass(board, side, time_ms);
                }
                debug!(
                    "alpha-beta depth {}: {} cut-offs, {} passes, {} leaves",
                    result.depth,
                    result.stats.cutoffs(),
                    result.stats.passes,
                    result.stats.evaluations
                );
                MoveResult {
                    best_move: result.best_move,
                    score: result.score,
                    search_type: SearchType::AlphaBeta,
                    time_ms,
                    nodes: result.nodes,
                }
            }
            Err(err) => {
                warn!("search failed: {}", err);
                MoveResult::pass(board, side, start.elapsed().as_millis() as u64)
            }
        }
    }

    fn search_first(board: &Board, side: Side, start: Instant) -> MoveResult {
        let time_ms = start.elapsed().as_millis() as u64;
        match first_move(board, side) {
            Some(pos) => MoveResult::greedy(pos, flips(board, pos, side).len() as i32, time_ms),
            None => MoveResult::pass(board, side, time_ms),
        }
    }

    fn search_greedy(board: &Board, side: Side, prefer_corners: bool, start: Instant) -> MoveResult {
        let time_ms = || start.elapsed().as_millis() as u64;
        match greedy_move(board, side, prefer_corners) {
            Some((pos, score)) => MoveResult::greedy(pos, score, time_ms()),
            None => MoveResult::pass(board, side, time_ms()),
        }
    }
}

impl Default for AiEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{is_legal_move, legal_moves};

    #[test]
    fn test_engine_creation() {
        let engine = AiEngine::new();
        assert_eq!(engine.max_depth(), 1);
        assert_eq!(engine.config().strategy, Strategy::AlphaBeta);
    }

    #[test]
    fn test_level_is_clamped() {
        assert_eq!(EngineConfig::from_level(0).depth, 1);
        assert_eq!(EngineConfig::from_level(3).depth, 3);
        assert_eq!(EngineConfig::from_level(9).depth, 4);
    }

    #[test]
    fn test_with_config_rejects_zero_depth() {
        let config = EngineConfig {
            depth: 0,
            strategy: Strategy::AlphaBeta,
        };
        assert_eq!(
            AiEngine::with_config(config).err(),
            Some(EngineError::InvalidDepth(0))
        );
        // Greedy ignores depth
        assert!(AiEngine::with_config(config.with_strategy(Strategy::Greedy)).is_ok());
    }

    #[test]
    fn test_engine_opening_move() {
        let mut engine = AiEngine::with_config(EngineConfig::from_level(2)).unwrap();
        let result = engine.get_move_with_stats(&Board::initial(), Side::Black);

        assert_eq!(result.best_move, Some(Pos::new(2, 3)));
        assert_eq!(result.search_type, SearchType::AlphaBeta);
        assert!(result.nodes > 0);
    }

    #[test]
    fn test_engine_pass() {
        let mut board = Board::new();
        board.place_stone(Pos::new(0, 0), Side::Black);
        board.place_stone(Pos::new(0, 1), Side::White);

        let mut engine = AiEngine::new();
        let result = engine.get_move_with_stats(&board, Side::White);
        assert!(result.is_pass());
        assert_eq!(result.search_type, SearchType::Pass);
        assert_eq!(engine.get_move(&board, Side::White), None);
    }

    #[test]
    fn test_engine_greedy_strategies() {
        let board = Board::initial();
        for strategy in [Strategy::First, Strategy::Greedy, Strategy::GreedyCorners] {
            let config = EngineConfig::default().with_strategy(strategy);
            let mut engine = AiEngine::with_config(config).unwrap();
            let result = engine.get_move_with_stats(&board, Side::White);
            assert_eq!(result.search_type, SearchType::Greedy);
            assert_eq!(result.best_move, legal_moves(&board, Side::White).first().copied());
        }
    }

    #[test]
    fn test_engine_first_strategy() {
        let mut board = Board::new();
        // (0,3) comes first in scan order; (5,0) flips more
        board.place_stone(Pos::new(0, 1), Side::White);
        board.place_stone(Pos::new(0, 2), Side::Black);
        board.place_stone(Pos::new(5, 1), Side::Black);
        board.place_stone(Pos::new(5, 2), Side::Black);
        board.place_stone(Pos::new(5, 3), Side::White);

        let config = EngineConfig::default().with_strategy(Strategy::First);
        let mut engine = AiEngine::with_config(config).unwrap();
        let result = engine.get_move_with_stats(&board, Side::White);
        assert_eq!(result.best_move, Some(Pos::new(0, 3)));
        assert_eq!(result.search_type, SearchType::Greedy);
        assert_eq!(result.score, 1);

        let greedy = EngineConfig::default().with_strategy(Strategy::Greedy);
        let mut engine = AiEngine::with_config(greedy).unwrap();
        assert_eq!(engine.get_move(&board, Side::White), Some(Pos::new(5, 0)));

        let mut engine = AiEngine::with_config(config).unwrap();
        assert!(engine.get_move_with_stats(&Board::new(), Side::White).is_pass());
    }

    #[test]
    fn test_engine_moves_are_legal_every_level() {
        let mut board = Board::initial();
        let mut side = Side::Black;
        for level in MIN_LEVEL..=MAX_LEVEL {
            let mut engine = AiEngine::with_config(EngineConfig::from_level(level)).unwrap();
            let pos = engine.get_move(&board, side).unwrap();
            assert!(is_legal_move(&board, pos, side));
            board = crate::rules::apply_move(&board, pos, side).unwrap();
            side = side.opponent();
        }
    }

    #[test]
    fn test_config_deserialise_partial() {
        let config: EngineConfig = serde_json::from_str(r#"{"depth": 3}"#).unwrap();
        assert_eq!(config, EngineConfig::from_level(3));

        let config: EngineConfig =
            serde_json::from_str(r#"{"strategy": "greedy_corners"}"#).unwrap();
        assert_eq!(config.depth, 1);
        assert_eq!(config.strategy, Strategy::GreedyCorners);
    }
}
