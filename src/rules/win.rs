//! Win condition: a player reduced below two pieces loses.

use crate::board::{Board, Player};

/// A player with fewer pieces than this has lost
pub const MIN_PIECES: u32 = 2;

/// Winner of the position, if any.
///
/// If both players are below [`MIN_PIECES`] (not reachable by legal play,
/// since one move only removes the opponent's pieces), player A is reported.
pub fn check_winner(board: &Board) -> Option<Player> {
    let a = board.piece_count(Player::A);
    let b = board.piece_count(Player::B);

    if b < MIN_PIECES {
        return Some(Player::A);
    }
    if a < MIN_PIECES {
        return Some(Player::B);
    }
    None
}

/// True once a winner exists
#[inline]
pub fn is_game_over(board: &Board) -> bool {
    check_winner(board).is_some()
}
