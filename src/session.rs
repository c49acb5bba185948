//! Game session: turn state machine for human vs. automated play
//!
//! The human plays [`HUMAN_SIDE`] (Black, moving first), the engine plays
//! [`AUTOMATED_SIDE`]. The board only ever changes through
//! [`apply_move`](crate::rules::apply_move).
//!
//! The automated turn can run on a worker thread
//! ([`GameSession::start_automated_turn`] + [`GameSession::poll_automated_turn`])
//! or inline ([`GameSession::play_automated_turn`]). The worker gets its own
//! board copy, and its result is dropped if the session was reset meanwhile.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use log::{error, info, trace, warn};

use crate::board::{Board, PieceCount, Pos, Side};
use crate::engine::{AiEngine, EngineConfig, MoveResult, Strategy};
use crate::error::{EngineError, SessionError};
use crate::rules::{apply_move, has_legal_move, legal_moves, outcome, GameOutcome};

/// Side played by the human
pub const HUMAN_SIDE: Side = Side::Black;
/// Side played by the engine
pub const AUTOMATED_SIDE: Side = Side::White;

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    HumanToMove,
    AutomatedToMove,
    /// Search running on a worker thread
    AutomatedThinking,
    GameOver(GameOutcome),
}

/// One entry of the move history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Move { side: Side, pos: Pos },
    Pass { side: Side },
}

/// Session settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionConfig {
    pub engine: EngineConfig,
    /// Pause before the worker starts searching, for presentation pacing
    pub think_delay: Duration,
}

/// Search running on a worker thread
struct PendingSearch {
    receiver: Receiver<(u64, MoveResult)>,
    start_time: Instant,
}

/// Live game state.
pub struct GameSession {
    board: Board,
    phase: Phase,
    config: SessionConfig,
    /// Bumped on every reset; results from older generations are discarded
    generation: u64,
    pending: Option<PendingSearch>,
    history: Vec<Turn>,
    last_move: Option<Pos>,
    last_ai_result: Option<MoveResult>,
}

impl GameSession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            board: Board::initial(),
            phase: Phase::HumanToMove,
            config,
            generation: 0,
            pending: None,
            history: Vec::new(),
            last_move: None,
            last_ai_result: None,
        }
    }

    /// Back to the opening position, human to move.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.board = Board::initial();
        self.phase = Phase::HumanToMove;
        self.pending = None;
        self.history.clear();
        self.last_move = None;
        self.last_ai_result = None;
        info!("game reset (generation {})", self.generation);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    pub fn last_ai_result(&self) -> Option<&MoveResult> {
        self.last_ai_result.as_ref()
    }

    /// Side whose turn it is, `None` once the game is over
    pub fn side_to_move(&self) -> Option<Side> {
        match self.phase {
            Phase::HumanToMove => Some(HUMAN_SIDE),
            Phase::AutomatedToMove | Phase::AutomatedThinking => Some(AUTOMATED_SIDE),
            Phase::GameOver(_) => None,
        }
    }

    /// Legal cells for the side to move (for highlighting)
    pub fn legal_moves(&self) -> Vec<Pos> {
        self.side_to_move()
            .map(|side| legal_moves(&self.board, side))
            .unwrap_or_default()
    }

    pub fn is_human_turn(&self) -> bool {
        self.phase == Phase::HumanToMove
    }

    pub fn is_ai_turn(&self) -> bool {
        self.phase == Phase::AutomatedToMove
    }

    pub fn is_ai_thinking(&self) -> bool {
        self.phase == Phase::AutomatedThinking
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    pub fn score(&self) -> PieceCount {
        self.board.count_pieces()
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.phase {
            Phase::GameOver(result) => Some(result),
            _ => None,
        }
    }

    /// Current difficulty level (= alpha-beta depth)
    pub fn level(&self) -> u8 {
        self.config.engine.depth
    }

    /// Change the difficulty; applies from the next automated turn.
    pub fn set_level(&mut self, level: u8) {
        let strategy = self.config.engine.strategy;
        self.config.engine = EngineConfig::from_level(level).with_strategy(strategy);
        info!("difficulty set to level {}", self.config.engine.depth);
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.config.engine.strategy = strategy;
    }

    pub fn set_think_delay(&mut self, delay: Duration) {
        self.config.think_delay = delay;
    }

    /// Time the current search has been running
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        self.pending.as_ref().map(|p| p.start_time.elapsed())
    }

    /// Play the human's move.
    ///
    /// # Errors
    /// - [`SessionError::GameOver`], [`SessionError::AutomatedThinking`] or
    ///   [`SessionError::NotHumanTurn`] when it is not the human's turn
    /// - [`SessionError::Engine`] for an illegal cell
    pub fn play_human(&mut self, pos: Pos) -> Result<(), SessionError> {
        match self.phase {
            Phase::HumanToMove => {}
            Phase::GameOver(_) => return Err(SessionError::GameOver),
            Phase::AutomatedThinking => return Err(SessionError::AutomatedThinking),
            Phase::AutomatedToMove => return Err(SessionError::NotHumanTurn),
        }

        self.board = apply_move(&self.board, pos, HUMAN_SIDE)?;
        self.record(Turn::Move {
            side: HUMAN_SIDE,
            pos,
        });
        self.phase = Phase::AutomatedToMove;
        self.settle();
        Ok(())
    }

    /// Run the automated turn on a worker thread.
    ///
    /// Call [`poll_automated_turn`](Self::poll_automated_turn) (or
    /// [`wait_automated_turn`](Self::wait_automated_turn)) to apply the result.
    ///
    /// # Errors
    /// When it is not the automated player's turn, or the engine config is
    /// invalid.
    pub fn start_automated_turn(&mut self) -> Result<(), SessionError> {
        self.check_automated_turn()?;
        let mut engine = AiEngine::with_config(self.config.engine)?;

        let board = self.board;
        let generation = self.generation;
        let delay = self.config.think_delay;
        let (tx, rx) = channel();

        thread::spawn(move || {
            if !delay.is_zero() {
                thread::sleep(delay);
            }
            let result = engine.get_move_with_stats(&board, AUTOMATED_SIDE);
            // Receiver is gone if the session was reset
            let _ = tx.send((generation, result));
        });

        self.pending = Some(PendingSearch {
            receiver: rx,
            start_time: Instant::now(),
        });
        self.phase = Phase::AutomatedThinking;
        Ok(())
    }

    /// Apply the worker's result if it has arrived. Returns true if the turn
    /// was completed.
    pub fn poll_automated_turn(&mut self) -> bool {
        let received = match &self.pending {
            Some(pending) => match pending.receiver.try_recv() {
                Ok(message) => Some(message),
                Err(TryRecvError::Empty) => return false,
                Err(TryRecvError::Disconnected) => None,
            },
            None => return false,
        };
        self.pending = None;
        self.receive(received)
    }

    /// Block until the worker's result arrives and apply it.
    pub fn wait_automated_turn(&mut self) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };
        let received = pending.receiver.recv().ok();
        self.receive(received)
    }

    /// Run the automated turn on the calling thread, ignoring the think delay.
    ///
    /// # Errors
    /// When it is not the automated player's turn, the engine config is
    /// invalid, or the rules reject the engine's move.
    pub fn play_automated_turn(&mut self) -> Result<MoveResult, SessionError> {
        self.check_automated_turn()?;
        let mut engine = AiEngine::with_config(self.config.engine)?;

        self.phase = Phase::AutomatedThinking;
        let result = engine.get_move_with_stats(&self.board, AUTOMATED_SIDE);
        self.finish_automated_turn(result.clone())?;
        Ok(result)
    }

    fn check_automated_turn(&self) -> Result<(), SessionError> {
        match self.phase {
            Phase::AutomatedToMove => Ok(()),
            Phase::GameOver(_) => Err(SessionError::GameOver),
            Phase::AutomatedThinking => Err(SessionError::AutomatedThinking),
            Phase::HumanToMove => Err(SessionError::NotAutomatedTurn),
        }
    }

    fn receive(&mut self, received: Option<(u64, MoveResult)>) -> bool {
        match received {
            Some((generation, result)) if generation == self.generation => {
                self.finish_automated_turn(result).is_ok()
            }
            Some((generation, _)) => {
                trace!(
                    "discarding search result from generation {} (now {})",
                    generation,
                    self.generation
                );
                self.phase = Phase::AutomatedToMove;
                false
            }
            None => {
                warn!("search worker exited without a result");
                self.phase = Phase::AutomatedToMove;
                false
            }
        }
    }

    /// Apply the engine's pick. A rejected move leaves the board as it was
    /// and hands the turn back to the automated side.
    fn finish_automated_turn(&mut self, result: MoveResult) -> Result<(), EngineError> {
        match result.best_move {
            Some(pos) => match apply_move(&self.board, pos, AUTOMATED_SIDE) {
                Ok(next) => {
                    self.board = next;
                    self.record(Turn::Move {
                        side: AUTOMATED_SIDE,
                        pos,
                    });
                }
                Err(err) => {
                    error!("engine picked a move the rules reject: {}", err);
                    self.phase = Phase::AutomatedToMove;
                    return Err(err);
                }
            },
            None => {
                info!("{} passes", AUTOMATED_SIDE.name());
                self.record(Turn::Pass {
                    side: AUTOMATED_SIDE,
                });
            }
        }

        self.last_ai_result = Some(result);
        self.phase = Phase::HumanToMove;
        self.settle();
        Ok(())
    }

    /// Resolve game over and the human's forced pass after a transition.
    fn settle(&mut self) {
        if let Some(result) = outcome(&self.board) {
            let count = self.board.count_pieces();
            info!(
                "game over: {:?} (Black {}, White {})",
                result, count.black, count.white
            );
            self.phase = Phase::GameOver(result);
            return;
        }

        if self.phase == Phase::HumanToMove && !has_legal_move(&self.board, HUMAN_SIDE) {
            info!("{} has no legal move and passes", HUMAN_SIDE.name());
            self.record(Turn::Pass { side: HUMAN_SIDE });
            self.phase = Phase::AutomatedToMove;
        }
    }

    fn record(&mut self, turn: Turn) {
        if let Turn::Move { pos, .. } = turn {
            self.last_move = Some(pos);
        }
        self.history.push(turn);
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;
    use crate::engine::SearchType;

    /// Session over a hand-built position, bypassing the opening.
    fn session_with(board: Board, phase: Phase) -> GameSession {
        let mut session = GameSession::default();
        session.board = board;
        session.phase = phase;
        session
    }

    #[test]
    fn test_new_session() {
        let session = GameSession::default();
        assert_eq!(session.phase(), Phase::HumanToMove);
        assert_eq!(session.side_to_move(), Some(Side::Black));
        assert_eq!(session.score(), PieceCount { black: 2, white: 2 });
        assert_eq!(session.legal_moves().len(), 4);
        assert_eq!(session.level(), 1);
    }

    #[test]
    fn test_human_move_then_automated() {
        let mut session = GameSession::default();
        session.play_human(Pos::new(2, 3)).unwrap();

        assert_eq!(session.phase(), Phase::AutomatedToMove);
        assert_eq!(session.board().get(Pos::new(3, 3)), Cell::Black);
        assert_eq!(session.last_move(), Some(Pos::new(2, 3)));

        let result = session.play_automated_turn().unwrap();
        let pos = result.best_move.unwrap();
        assert_eq!(session.board().get(pos), Cell::White);
        assert_eq!(session.phase(), Phase::HumanToMove);
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn test_human_illegal_move() {
        let mut session = GameSession::default();
        let err = session.play_human(Pos::new(0, 0)).unwrap_err();
        assert_eq!(
            err,
            SessionError::Engine(EngineError::IllegalMove {
                row: 0,
                col: 0,
                side: Side::Black
            })
        );
        assert_eq!(session.phase(), Phase::HumanToMove);
        assert_eq!(*session.board(), Board::initial());
    }

    #[test]
    fn test_turn_order_enforced() {
        let mut session = GameSession::default();
        assert_eq!(
            session.play_automated_turn().unwrap_err(),
            SessionError::NotAutomatedTurn
        );
        session.play_human(Pos::new(2, 3)).unwrap();
        assert_eq!(
            session.play_human(Pos::new(2, 2)).unwrap_err(),
            SessionError::NotHumanTurn
        );
    }

    #[test]
    fn test_human_forced_pass_recorded() {
        // Black's only move is (0,2). Afterwards Black cannot move but White
        // can still play (7,5) over (7,6)
        let mut board = Board::new();
        board.place_stone(Pos::new(0, 0), Side::Black);
        board.place_stone(Pos::new(0, 1), Side::White);
        board.place_stone(Pos::new(7, 6), Side::Black);
        board.place_stone(Pos::new(7, 7), Side::White);

        let mut session = session_with(board, Phase::HumanToMove);
        assert_eq!(session.legal_moves(), vec![Pos::new(0, 2)]);
        session.play_human(Pos::new(0, 2)).unwrap();

        assert_eq!(session.phase(), Phase::AutomatedToMove);
        assert_eq!(
            session.history().last(),
            Some(&Turn::Pass { side: HUMAN_SIDE })
        );

        let result = session.play_automated_turn().unwrap();
        assert_eq!(result.best_move, Some(Pos::new(7, 5)));

        // Neither side can move with 3 discs each
        assert_eq!(session.outcome(), Some(GameOutcome::Draw));
        assert_eq!(session.history().len(), 3);
    }

    #[test]
    fn test_automated_pass() {
        // White has no move; Black does
        let mut board = Board::new();
        board.place_stone(Pos::new(0, 0), Side::Black);
        board.place_stone(Pos::new(0, 1), Side::White);

        let mut session = session_with(board, Phase::AutomatedToMove);
        let result = session.play_automated_turn().unwrap();
        assert!(result.is_pass());
        assert_eq!(session.phase(), Phase::HumanToMove);
        assert_eq!(
            session.history(),
            &[Turn::Pass {
                side: AUTOMATED_SIDE
            }]
        );
    }

    #[test]
    fn test_game_over_after_last_move() {
        // Black's move (0,2) removes White's last disc
        let mut board = Board::new();
        board.place_stone(Pos::new(0, 0), Side::Black);
        board.place_stone(Pos::new(0, 1), Side::White);

        let mut session = session_with(board, Phase::HumanToMove);
        session.play_human(Pos::new(0, 2)).unwrap();

        assert_eq!(session.phase(), Phase::GameOver(GameOutcome::Winner(Side::Black)));
        assert_eq!(session.outcome(), Some(GameOutcome::Winner(Side::Black)));
        assert_eq!(session.side_to_move(), None);
        assert!(session.legal_moves().is_empty());
        assert_eq!(
            session.play_human(Pos::new(0, 3)).unwrap_err(),
            SessionError::GameOver
        );
        assert_eq!(
            session.start_automated_turn().unwrap_err(),
            SessionError::GameOver
        );
    }

    #[test]
    fn test_reset() {
        let mut session = GameSession::default();
        session.play_human(Pos::new(2, 3)).unwrap();
        session.play_automated_turn().unwrap();

        session.reset();
        assert_eq!(session.phase(), Phase::HumanToMove);
        assert_eq!(*session.board(), Board::initial());
        assert!(session.history().is_empty());
        assert_eq!(session.generation(), 1);
    }

    #[test]
    fn test_async_turn() {
        let mut session = GameSession::default();
        session.set_level(2);
        session.play_human(Pos::new(2, 3)).unwrap();

        session.start_automated_turn().unwrap();
        assert!(session.is_ai_thinking());
        assert_eq!(
            session.play_human(Pos::new(2, 2)).unwrap_err(),
            SessionError::AutomatedThinking
        );

        assert!(session.wait_automated_turn());
        assert_eq!(session.phase(), Phase::HumanToMove);
        assert_eq!(session.score().total(), 6);
    }

    #[test]
    fn test_reset_discards_running_search() {
        let mut session = GameSession::default();
        session.set_think_delay(Duration::from_millis(20));
        session.play_human(Pos::new(2, 3)).unwrap();
        session.start_automated_turn().unwrap();

        session.reset();
        thread::sleep(Duration::from_millis(60));

        assert!(!session.poll_automated_turn());
        assert_eq!(*session.board(), Board::initial());
        assert_eq!(session.phase(), Phase::HumanToMove);
    }

    #[test]
    fn test_stale_generation_is_discarded() {
        let mut session = GameSession::default();
        session.play_human(Pos::new(2, 3)).unwrap();
        let board = *session.board();

        let (tx, rx) = channel();
        session.pending = Some(PendingSearch {
            receiver: rx,
            start_time: Instant::now(),
        });
        session.phase = Phase::AutomatedThinking;
        let stale = AiEngine::new().get_move_with_stats(&board, AUTOMATED_SIDE);
        tx.send((session.generation() + 1, stale)).unwrap();

        assert!(!session.poll_automated_turn());
        assert_eq!(*session.board(), board);

        // The turn is still open and can be played again
        assert_eq!(session.phase(), Phase::AutomatedToMove);
        session.start_automated_turn().unwrap();
        assert!(session.wait_automated_turn());
        assert_eq!(session.phase(), Phase::HumanToMove);
    }

    #[test]
    fn test_rejected_engine_move_is_not_a_pass() {
        let mut session = GameSession::default();
        session.play_human(Pos::new(2, 3)).unwrap();
        let board = *session.board();
        session.phase = Phase::AutomatedThinking;

        let bogus = MoveResult {
            best_move: Some(Pos::new(0, 0)),
            score: 0,
            search_type: SearchType::AlphaBeta,
            time_ms: 0,
            nodes: 1,
        };
        assert_eq!(
            session.finish_automated_turn(bogus),
            Err(EngineError::IllegalMove {
                row: 0,
                col: 0,
                side: AUTOMATED_SIDE
            })
        );

        assert_eq!(session.phase(), Phase::AutomatedToMove);
        assert_eq!(*session.board(), board);
        assert_eq!(session.history().len(), 1);
        assert!(session.last_ai_result().is_none());
    }

    #[test]
    fn test_set_level_keeps_strategy() {
        let mut session = GameSession::default();
        session.set_strategy(Strategy::GreedyCorners);
        session.set_level(7);
        assert_eq!(session.level(), 4);
        assert_eq!(session.config().engine.strategy, Strategy::GreedyCorners);
    }
}
