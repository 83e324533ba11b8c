//! Move generation
//!
//! A piece moves one cell up, down, left or right onto an empty cell.
//! Generation order is fixed (row-major over pieces, then up/down/left/right)
//! so search enumeration is reproducible.

use crate::board::{Board, Move, Player, Pos};

/// Step directions in generation order
const DIRECTIONS: [(i32, i32); 4] = [
    (-1, 0), // Up
    (1, 0),  // Down
    (0, -1), // Left
    (0, 1),  // Right
];

/// Range check for signed coordinates.
#[inline]
pub fn is_valid_position(row: i32, col: i32) -> bool {
    Pos::is_valid(row, col)
}

/// Destinations reachable from `pos` by the piece standing there.
///
/// Returns an empty vector when `pos` is empty. At most 4 results, in
/// up/down/left/right order.
pub fn legal_moves(board: &Board, pos: Pos) -> Vec<Pos> {
    if board.is_empty(pos) {
        return Vec::new();
    }

    DIRECTIONS
        .iter()
        .filter_map(|&(dr, dc)| Pos::try_new(pos.row as i32 + dr, pos.col as i32 + dc))
        .filter(|&to| board.is_empty(to))
        .collect()
}

/// Every legal move for `player`, pieces taken in row-major order.
pub fn all_moves(board: &Board, player: Player) -> Vec<Move> {
    let mut moves = Vec::with_capacity(16);
    for from in board.pieces(player).iter_ones() {
        for to in legal_moves(board, from) {
            moves.push(Move::new(from, to));
        }
    }
    moves
}

/// True if `player` can move at all
pub fn has_legal_move(board: &Board, player: Player) -> bool {
    board
        .pieces(player)
        .iter_ones()
        .any(|from| !legal_moves(board, from).is_empty())
}
