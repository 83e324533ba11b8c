//! Board representation for SiDing

pub mod bitboard;
pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use bitboard::Bitboard;
pub use board::{Board, ParseBoardError};

/// Board size (4x4)
pub const BOARD_SIZE: usize = 4;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 16

/// Pieces each player starts with
pub const INITIAL_PIECES: u32 = 4;

/// The two sides. `A` is the human/primary side, `B` the computer/opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    A,
    B,
}

impl Player {
    /// Get opponent
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Notation symbol
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Player::A => 'A',
            Player::B => 'B',
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    /// Checked constructor for signed coordinates (e.g. neighbour offsets)
    #[inline]
    pub fn try_new(row: i32, col: i32) -> Option<Self> {
        if Self::is_valid(row, col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// True when `other` differs in exactly one coordinate by exactly 1
    #[inline]
    pub fn is_adjacent(self, other: Pos) -> bool {
        let dr = (self.row as i32 - other.row as i32).abs();
        let dc = (self.col as i32 - other.col as i32).abs();
        dr + dc == 1
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}

/// Relocation of one piece to an orthogonally adjacent cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Pos,
    pub to: Pos,
}

impl Move {
    #[inline]
    pub fn new(from: Pos, to: Pos) -> Self {
        Self { from, to }
    }

    /// A single orthogonal step. Zero-distance and diagonal moves are not steps.
    #[inline]
    pub fn is_step(self) -> bool {
        self.from.is_adjacent(self.to)
    }
}
