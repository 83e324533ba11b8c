//! Immutable board value

use std::fmt;
use std::str::FromStr;

use super::bitboard::Bitboard;
use super::{Player, Pos, BOARD_SIZE, INITIAL_PIECES, TOTAL_CELLS};

/// Game board: one occupancy bitboard per player.
///
/// `Board` is a small `Copy` value. Every game operation takes a board by
/// reference and returns a new one, so a snapshot handed to a caller never
/// changes underneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    a: Bitboard,
    b: Bitboard,
}

impl Board {
    /// Empty board
    pub const fn new() -> Self {
        Self {
            a: Bitboard::new(),
            b: Bitboard::new(),
        }
    }

    /// Starting arrangement: B fills row 0, A fills row 3.
    pub fn initial() -> Self {
        let mut board = Self::new();
        for col in 0..BOARD_SIZE as u8 {
            board.place_piece(Pos::new(0, col), Player::B);
            board.place_piece(Pos::new(3, col), Player::A);
        }
        board
    }

    /// Get the piece at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Player> {
        if self.a.get(pos) {
            Some(Player::A)
        } else if self.b.get(pos) {
            Some(Player::B)
        } else {
            None
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.a.get(pos) && !self.b.get(pos)
    }

    /// Copy of this board with `player`'s piece at `pos`
    #[must_use]
    pub fn with_piece(mut self, pos: Pos, player: Player) -> Self {
        self.place_piece(pos, player);
        self
    }

    /// Copy of this board with `pos` emptied
    #[must_use]
    pub fn without_piece(mut self, pos: Pos) -> Self {
        self.remove_piece(pos);
        self
    }

    /// Place a piece, replacing whatever occupied the cell
    #[inline]
    pub(crate) fn place_piece(&mut self, pos: Pos, player: Player) {
        self.remove_piece(pos);
        self.pieces_mut(player).set(pos);
    }

    /// Remove a piece
    #[inline]
    pub(crate) fn remove_piece(&mut self, pos: Pos) {
        self.a.clear(pos);
        self.b.clear(pos);
    }

    /// Bitboard for a player
    #[inline]
    pub fn pieces(&self, player: Player) -> Bitboard {
        match player {
            Player::A => self.a,
            Player::B => self.b,
        }
    }

    #[inline]
    fn pieces_mut(&mut self, player: Player) -> &mut Bitboard {
        match player {
            Player::A => &mut self.a,
            Player::B => &mut self.b,
        }
    }

    /// Number of pieces a player has left
    #[inline]
    pub fn piece_count(&self, player: Player) -> u32 {
        self.pieces(player).count()
    }

    /// Total pieces on board
    #[inline]
    pub fn total_pieces(&self) -> u32 {
        self.a.count() + self.b.count()
    }

    /// All occupied cells
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.a | self.b
    }
}

/// Error returned when parsing board notation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseBoardError {
    /// Notation did not contain exactly 16 cells
    CellCount(usize),
    /// Unknown cell symbol
    InvalidSymbol(char),
    /// A player has more pieces than the game starts with
    TooManyPieces(Player, u32),
}

impl fmt::Display for ParseBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseBoardError::CellCount(n) => {
                write!(f, "expected {} cells, found {}", TOTAL_CELLS, n)
            }
            ParseBoardError::InvalidSymbol(c) => write!(f, "invalid cell symbol '{}'", c),
            ParseBoardError::TooManyPieces(player, n) => write!(
                f,
                "player {} has {} pieces (max {})",
                player.symbol(),
                n,
                INITIAL_PIECES
            ),
        }
    }
}

impl std::error::Error for ParseBoardError {}

/// Rows top to bottom separated by `/`: `B`, `A`, or `.` per cell.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE as u8 {
            if row > 0 {
                f.write_str("/")?;
            }
            for col in 0..BOARD_SIZE as u8 {
                let c = self.get(Pos::new(row, col)).map_or('.', Player::symbol);
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Accepts the `Display` form; `/` and whitespace are ignored, so 16
    /// symbols in row-major order also parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s
            .chars()
            .filter(|c| *c != '/' && !c.is_whitespace())
            .collect();
        if cells.len() != TOTAL_CELLS {
            return Err(ParseBoardError::CellCount(cells.len()));
        }

        let mut board = Board::new();
        for (idx, c) in cells.into_iter().enumerate() {
            let pos = Pos::from_index(idx);
            match c {
                'A' | 'a' => board.place_piece(pos, Player::A),
                'B' | 'b' => board.place_piece(pos, Player::B),
                '.' | '_' => {}
                other => return Err(ParseBoardError::InvalidSymbol(other)),
            }
        }

        for player in [Player::A, Player::B] {
            let n = board.piece_count(player);
            if n > INITIAL_PIECES {
                return Err(ParseBoardError::TooManyPieces(player, n));
            }
        }
        Ok(board)
    }
}
