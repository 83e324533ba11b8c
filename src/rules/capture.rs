//! Move application and the SiDing capture rule
//!
//! After a piece lands on `to`, the row and the column through `to` are each
//! checked. A line holding all 4 cells occupied never captures. Otherwise both
//! 3-cell windows (offsets 0..3 and 1..4) are matched against
//! `mover, mover, opponent` and `opponent, mover, mover`; a match removes the
//! opponent piece at the end of the window.
//!
//! Detection reads the board right after the relocation. Removals are applied
//! together once both lines have been scanned.

use std::fmt;

use crate::board::{Board, Move, Player, Pos, BOARD_SIZE};

/// Board after a move plus the cells emptied by captures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub board: Board,
    pub captured: Vec<Pos>,
}

/// Why a move was rejected by [`try_apply_move`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Source cell holds no piece of the moving player
    NotOwnPiece(Pos),
    /// Destination is not one orthogonal step away
    NotAdjacent(Move),
    /// Destination cell is occupied
    Occupied(Pos),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NotOwnPiece(p) => write!(f, "no own piece at ({}, {})", p.row, p.col),
            MoveError::NotAdjacent(m) => write!(
                f,
                "({}, {}) -> ({}, {}) is not a single orthogonal step",
                m.from.row, m.from.col, m.to.row, m.to.col
            ),
            MoveError::Occupied(p) => write!(f, "cell ({}, {}) is occupied", p.row, p.col),
        }
    }
}

impl std::error::Error for MoveError {}

/// Line indices (0..4) captured by `mover` on one line.
///
/// Returns nothing for a full line. At most one capture per window.
pub fn line_captures(cells: [Option<Player>; BOARD_SIZE], mover: Player) -> Vec<usize> {
    let mut captured = Vec::new();
    if cells.iter().all(Option::is_some) {
        return captured;
    }

    let me = Some(mover);
    let opp = Some(mover.opponent());

    for start in 0..=BOARD_SIZE - 3 {
        let window = &cells[start..start + 3];
        if window[0] == me && window[1] == me && window[2] == opp {
            captured.push(start + 2);
        } else if window[0] == opp && window[1] == me && window[2] == me {
            captured.push(start);
        }
    }

    captured
}

/// Cells of the row through `pos`, left to right
fn row_line(pos: Pos) -> [Pos; BOARD_SIZE] {
    std::array::from_fn(|c| Pos::new(pos.row, c as u8))
}

/// Cells of the column through `pos`, top to bottom
fn col_line(pos: Pos) -> [Pos; BOARD_SIZE] {
    std::array::from_fn(|r| Pos::new(r as u8, pos.col))
}

/// Positions captured by `mover` whose piece just arrived at `to`.
///
/// `board` must already have the piece relocated.
pub fn get_captured_positions(board: &Board, to: Pos, mover: Player) -> Vec<Pos> {
    let mut captured = Vec::new();

    for line in [row_line(to), col_line(to)] {
        let cells = line.map(|p| board.get(p));
        captured.extend(line_captures(cells, mover).into_iter().map(|i| line[i]));
    }

    captured
}

/// Apply `mv` for `player` and resolve captures.
///
/// Legality is the caller's job: `from` must hold `player`'s piece and `to`
/// must be an empty orthogonal neighbour. Use [`try_apply_move`] when the move
/// comes from untrusted input.
pub fn apply_move(board: &Board, mv: Move, player: Player) -> MoveOutcome {
    debug_assert_eq!(board.get(mv.from), Some(player));
    debug_assert!(board.is_empty(mv.to));
    debug_assert!(mv.is_step());

    let mut next = *board;
    next.remove_piece(mv.from);
    next.place_piece(mv.to, player);

    let captured = get_captured_positions(&next, mv.to, player);
    for &pos in &captured {
        next.remove_piece(pos);
    }

    MoveOutcome {
        board: next,
        captured,
    }
}

/// Validate `mv` for `player`, then apply it.
pub fn try_apply_move(board: &Board, mv: Move, player: Player) -> Result<MoveOutcome, MoveError> {
    if board.get(mv.from) != Some(player) {
        return Err(MoveError::NotOwnPiece(mv.from));
    }
    if !mv.is_step() {
        return Err(MoveError::NotAdjacent(mv));
    }
    if !board.is_empty(mv.to) {
        return Err(MoveError::Occupied(mv.to));
    }
    Ok(apply_move(board, mv, player))
}
