//! Main AI Engine
//!
//! Wraps the minimax searcher with a seedable random source and reports the
//! chosen move together with search statistics. The search itself is
//! synchronous and bounded by [`SEARCH_DEPTH`]; callers that want a
//! "thinking" delay or a background thread layer it on top.
//!
//! # Example
//!
//! ```
//! use siding::{AIEngine, AiConfig, Board, Player};
//!
//! let mut engine = AIEngine::with_config(AiConfig { seed: Some(7), ..AiConfig::default() });
//! let result = engine.get_move_with_stats(&Board::initial(), Player::B);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! ```

use std::time::Instant;

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::{Board, Move, Player};
use crate::eval::Score;
use crate::search::{Searcher, SEARCH_DEPTH};

/// Engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiConfig {
    /// Fixed seed for reproducible play; `None` seeds from OS entropy
    pub seed: Option<u64>,
    /// Tie-break jitter range added to evaluations (0 disables it)
    pub jitter: i32,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            seed: None,
            jitter: Score::JITTER,
        }
    }
}

/// How the move was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Move wins on the spot
    ImmediateWin,
    /// Regular alpha-beta search result
    AlphaBeta,
    /// Player has no legal move and must pass
    NoMove,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Move>,
    /// Score of the move from the mover's perspective
    pub score: i32,
    /// Type of search that found this move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

/// AI engine for SiDing.
pub struct AIEngine {
    config: AiConfig,
    rng: StdRng,
}

impl AIEngine {
    /// Engine with default configuration (entropy seed).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(AiConfig::default())
    }

    /// Engine with custom configuration.
    #[must_use]
    pub fn with_config(config: AiConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    #[must_use]
    pub fn config(&self) -> AiConfig {
        self.config
    }

    /// Best move for `player`, or `None` if it has no legal move.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, player: Player) -> Option<Move> {
        self.get_move_with_stats(board, player).best_move
    }

    /// Best move with search statistics.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board, player: Player) -> MoveResult {
        let start = Instant::now();

        let mut searcher = Searcher::with_jitter(&mut self.rng, self.config.jitter);
        let result = searcher.select(board, player);

        let search_type = if result.best_move.is_none() {
            SearchType::NoMove
        } else if result.immediate_win {
            SearchType::ImmediateWin
        } else {
            SearchType::AlphaBeta
        };

        let move_result = MoveResult {
            best_move: result.best_move,
            score: result.score,
            search_type,
            time_ms: start.elapsed().as_millis() as u64,
            nodes: result.stats.nodes,
        };

        debug!(
            "{:?} to move on {}: {:?} {:?} score {} ({} nodes, {} cutoffs, depth {}, {}ms)",
            player,
            board,
            move_result.best_move,
            move_result.search_type,
            move_result.score,
            move_result.nodes,
            result.stats.cutoffs,
            SEARCH_DEPTH,
            move_result.time_ms
        );

        move_result
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;
    use crate::rules::all_moves;

    fn seeded(seed: u64) -> AIEngine {
        AIEngine::with_config(AiConfig {
            seed: Some(seed),
            ..AiConfig::default()
        })
    }

    #[test]
    fn test_engine_default_config() {
        let engine = AIEngine::default();
        assert_eq!(engine.config().jitter, Score::JITTER);
        assert_eq!(engine.config().seed, None);
    }

    #[test]
    fn test_engine_finds_immediate_win() {
        let board: Board = ".B../B.A./..../...A".parse().unwrap();
        let result = seeded(1).get_move_with_stats(&board, Player::B);
        assert_eq!(result.best_move, Some(Move::new(Pos::new(0, 1), Pos::new(1, 1))));
        assert_eq!(result.search_type, SearchType::ImmediateWin);
    }

    #[test]
    fn test_engine_no_move() {
        let board: Board = "BBA./AA../..../....".parse().unwrap();
        let result = seeded(1).get_move_with_stats(&board, Player::B);
        assert!(result.best_move.is_none());
        assert_eq!(result.search_type, SearchType::NoMove);
    }

    #[test]
    fn test_engine_opening_move_is_legal() {
        let board = Board::initial();
        let result = seeded(3).get_move_with_stats(&board, Player::B);
        assert_eq!(result.search_type, SearchType::AlphaBeta);
        let mv = result.best_move.unwrap();
        assert!(all_moves(&board, Player::B).contains(&mv));
        assert!(result.nodes > 0);
    }

    #[test]
    fn test_engine_seed_reproducible() {
        let board = Board::initial();
        let m1 = seeded(42).get_move(&board, Player::B);
        let m2 = seeded(42).get_move(&board, Player::B);
        assert_eq!(m1, m2);
    }

    #[test]
    fn test_engine_alternating_players() {
        let mut engine = seeded(9);
        let mut board = Board::initial();
        let mut player = Player::A;

        for _ in 0..6 {
            if crate::rules::check_winner(&board).is_some() {
                break;
            }
            if let Some(mv) = engine.get_move(&board, player) {
                board = crate::rules::apply_move(&board, mv, player).board;
            }
            player = player.opponent();
        }
        assert!(board.piece_count(Player::A) <= 4);
        assert!(board.piece_count(Player::B) <= 4);
    }
}
