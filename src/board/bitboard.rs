//! Bitboard implementation for piece occupancy

use super::{Pos, TOTAL_CELLS};

/// Occupancy of one player's pieces.
/// Bit `i` is cell `i` in row-major order (16 cells fit in a u16).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard {
    bits: u16,
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Set a bit at position
    #[inline]
    pub fn set(&mut self, pos: Pos) {
        self.bits |= 1u16 << pos.to_index();
    }

    /// Clear a bit at position
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        self.bits &= !(1u16 << pos.to_index());
    }

    /// Check if bit is set at position
    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        (self.bits >> pos.to_index()) & 1 == 1
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Iterate over set bit positions in row-major order
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter { bits: self.bits }
    }
}

impl std::ops::BitOr for Bitboard {
    type Output = Bitboard;

    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard {
            bits: self.bits | rhs.bits,
        }
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    bits: u16,
}

impl Iterator for BitboardIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }

        let idx = self.bits.trailing_zeros() as usize;
        // Clear the bit we just found
        self.bits &= self.bits - 1;

        debug_assert!(idx < TOTAL_CELLS);
        Some(Pos::from_index(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_clear() {
        let mut bb = Bitboard::new();
        let pos = Pos::new(2, 3);
        assert!(!bb.get(pos));
        bb.set(pos);
        assert!(bb.get(pos));
        assert_eq!(bb.count(), 1);
        bb.clear(pos);
        assert!(bb.is_empty());
    }

    #[test]
    fn test_iter_row_major() {
        let mut bb = Bitboard::new();
        bb.set(Pos::new(3, 0));
        bb.set(Pos::new(0, 2));
        bb.set(Pos::new(1, 1));
        let cells: Vec<_> = bb.iter_ones().collect();
        assert_eq!(cells, vec![Pos::new(0, 2), Pos::new(1, 1), Pos::new(3, 0)]);
    }

    #[test]
    fn test_last_cell() {
        let mut bb = Bitboard::new();
        bb.set(Pos::new(3, 3));
        assert_eq!(bb.count(), 1);
        assert_eq!(bb.iter_ones().next(), Some(Pos::new(3, 3)));
    }
}
