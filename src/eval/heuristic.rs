//! Heuristic evaluation function for SiDing board positions
//!
//! This module provides the leaf evaluation for the minimax search:
//! - Win/loss detection (a side below two pieces)
//! - Material difference scaled by [`Score::PIECE`]
//! - Random jitter for tie-breaking, drawn from a caller-supplied generator

use rand::Rng;

use crate::board::{Board, Player};
use crate::rules::MIN_PIECES;

use super::patterns::Score;

/// Deterministic part of the evaluation from `player`'s point of view.
///
/// Returns `Score::WIN` when the opponent is below two pieces,
/// `-Score::WIN` when `player` is, otherwise the material difference.
#[must_use]
pub fn material_score(board: &Board, player: Player) -> i32 {
    let own = board.piece_count(player) as i32;
    let opp = board.piece_count(player.opponent()) as i32;

    if opp < MIN_PIECES as i32 {
        return Score::WIN;
    }
    if own < MIN_PIECES as i32 {
        return -Score::WIN;
    }

    (own - opp) * Score::PIECE
}

/// Evaluate the board from the perspective of `player`.
///
/// Non-terminal scores get a jitter in `0..jitter` added. `jitter` must be
/// below `Score::PIECE` so it can never reorder different material buckets;
/// pass 0 for a fully deterministic score.
///
/// # Arguments
/// * `board` - The current board state
/// * `player` - The side to score for
/// * `jitter` - Exclusive upper bound of the random tie-break
/// * `rng` - Randomness source
#[must_use]
pub fn evaluate<R: Rng + ?Sized>(board: &Board, player: Player, jitter: i32, rng: &mut R) -> i32 {
    debug_assert!((0..Score::PIECE).contains(&jitter));

    let score = material_score(board, player);
    if score.abs() >= Score::WIN || jitter <= 0 {
        return score;
    }

    score + rng.gen_range(0..jitter)
}
