//! Minimax search with alpha-beta pruning
//!
//! This module implements the core search algorithm for the SiDing AI.
//! The tree is explored by plain recursion: every node receives its own
//! board value and its own alpha/beta bounds, so branches never share state.
//!
//! # Features
//!
//! - Fixed depth of [`SEARCH_DEPTH`] plies from the root
//! - Immediate-win short circuit at the root
//! - Wins scored by remaining depth: faster wins and slower losses preferred
//! - Injected random source for evaluation jitter
//!
//! # Example
//!
//! ```
//! use siding::board::{Board, Player};
//! use siding::search::Searcher;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut searcher = Searcher::new(StdRng::seed_from_u64(1));
//! let result = searcher.select(&Board::initial(), Player::B);
//! assert!(result.best_move.is_some());
//! ```

use log::trace;
use rand::Rng;

use crate::board::{Board, Move, Player};
use crate::eval::{evaluate, Score};
use crate::rules::{all_moves, apply_move, check_winner};

/// Plies searched from the root (the root's own move included)
pub const SEARCH_DEPTH: i8 = 4;

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited by `search`
    pub nodes: u64,
    /// Nodes scored by the evaluation function
    pub leaves: u64,
    /// Alpha-beta cutoffs
    pub cutoffs: u64,
}

/// Root search result.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found; `None` when the player cannot move
    pub best_move: Option<Move>,
    /// Score of the best move from the mover's perspective
    pub score: i32,
    /// The move wins on the spot, no tree was searched for it
    pub immediate_win: bool,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Minimax searcher over a random source `R`.
///
/// `R` may be an owned generator or `&mut` to one.
pub struct Searcher<R: Rng> {
    rng: R,
    jitter: i32,
    stats: SearchStats,
}

impl<R: Rng> Searcher<R> {
    /// Searcher with the default tie-break jitter
    pub fn new(rng: R) -> Self {
        Self::with_jitter(rng, Score::JITTER)
    }

    /// Searcher with a custom jitter range (0 = deterministic scores)
    pub fn with_jitter(rng: R, jitter: i32) -> Self {
        Self {
            rng,
            jitter: jitter.clamp(0, Score::PIECE - 1),
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    #[inline]
    fn leaf(&mut self, board: &Board, perspective: Player) -> i32 {
        self.stats.leaves += 1;
        evaluate(board, perspective, self.jitter, &mut self.rng)
    }

    /// Minimax value of `board` for `perspective`.
    ///
    /// The side to move is `perspective` when `maximizing`, otherwise its
    /// opponent. A side with no legal move is scored statically.
    pub fn search(
        &mut self,
        board: &Board,
        depth: i8,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
        perspective: Player,
    ) -> i32 {
        self.stats.nodes += 1;

        match check_winner(board) {
            Some(winner) if winner == perspective => return Score::WIN + i32::from(depth),
            Some(_) => return -Score::WIN - i32::from(depth),
            None => {}
        }

        if depth <= 0 {
            return self.leaf(board, perspective);
        }

        let to_move = if maximizing {
            perspective
        } else {
            perspective.opponent()
        };

        let moves = all_moves(board, to_move);
        if moves.is_empty() {
            return self.leaf(board, perspective);
        }

        if maximizing {
            let mut best = -Score::INF;
            for mv in moves {
                let next = apply_move(board, mv, to_move).board;
                let score = self.search(&next, depth - 1, false, alpha, beta, perspective);
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        } else {
            let mut best = Score::INF;
            for mv in moves {
                let next = apply_move(board, mv, to_move).board;
                let score = self.search(&next, depth - 1, true, alpha, beta, perspective);
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        }
    }

    /// Pick the best move for `player`.
    ///
    /// A move that wins on the spot is returned immediately. Otherwise each
    /// candidate is scored one ply below the root and the first strictly
    /// greatest score wins.
    pub fn select(&mut self, board: &Board, player: Player) -> SearchResult {
        self.stats = SearchStats::default();

        let mut result = SearchResult {
            best_move: None,
            score: -Score::INF,
            immediate_win: false,
            stats: SearchStats::default(),
        };

        for mv in all_moves(board, player) {
            let next = apply_move(board, mv, player).board;

            if check_winner(&next) == Some(player) {
                result.best_move = Some(mv);
                result.score = Score::WIN + i32::from(SEARCH_DEPTH);
                result.immediate_win = true;
                break;
            }

            let score = self.search(&next, SEARCH_DEPTH - 1, false, -Score::INF, Score::INF, player);
            trace!(
                "candidate ({},{})->({},{}) score {}",
                mv.from.row,
                mv.from.col,
                mv.to.row,
                mv.to.col,
                score
            );

            if result.best_move.is_none() || score > result.score {
                result.best_move = Some(mv);
                result.score = score;
            }
        }

        if result.best_move.is_none() {
            result.score = 0;
        }
        result.stats = self.stats;
        result
    }
}

/// Best move for `ai` using randomness from `rng`, or `None` if `ai` is blocked.
pub fn select_best_move<R: Rng + ?Sized>(board: &Board, ai: Player, rng: &mut R) -> Option<Move> {
    Searcher::new(rng).select(board, ai).best_move
}
