//! Game rules for SiDing
//!
//! This module implements the rule set:
//! - Move generation (one orthogonal step onto an empty cell)
//! - Move application with line captures
//! - Win condition (opponent reduced below two pieces)

pub mod capture;
pub mod movegen;
pub mod win;

// Re-exports for convenient access
pub use capture::{
    apply_move, get_captured_positions, line_captures, try_apply_move, MoveError, MoveOutcome,
};
pub use movegen::{all_moves, has_legal_move, is_valid_position, legal_moves};
pub use win::{check_winner, is_game_over, MIN_PIECES};

use crate::board::Board;

/// Standard starting board: B on row 0, A on row 3.
#[inline]
pub fn create_initial_board() -> Board {
    Board::initial()
}
