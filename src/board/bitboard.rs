//! Single-word bitboard for the 8x8 board

use super::{Pos, TOTAL_CELLS};

/// One bit per cell, bit index = `Pos::to_index()` (row-major).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard {
    bits: u64,
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    pub const fn from_bits(bits: u64) -> Self {
        Self { bits }
    }

    #[inline]
    pub const fn bits(self) -> u64 {
        self.bits
    }

    /// Single-bit mask for `pos`, empty off the board
    #[inline]
    fn bit(pos: Pos) -> u64 {
        if pos.in_bounds() {
            1u64 << pos.to_index()
        } else {
            0
        }
    }

    /// Set a bit at position (no-op off the board)
    #[inline]
    pub fn set(&mut self, pos: Pos) {
        self.bits |= Self::bit(pos);
    }

    /// Clear a bit at position
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        self.bits &= !Self::bit(pos);
    }

    /// Check if bit is set at position
    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        self.bits & Self::bit(pos) != 0
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

    #[inline]
    pub fn union(self, other: Bitboard) -> Bitboard {
        Bitboard::from_bits(self.bits | other.bits)
    }

    #[inline]
    pub fn without(self, other: Bitboard) -> Bitboard {
        Bitboard::from_bits(self.bits & !other.bits)
    }

    /// Iterate over set bit positions in row-major order
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter { bits: self.bits }
    }
}

/// Iterator over set bits in a Bitboard, lowest index first
pub struct BitboardIter {
    bits: u64,
}

impl Iterator for BitboardIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as usize;
        // Clear the lowest set bit
        self.bits &= self.bits - 1;
        debug_assert!(idx < TOTAL_CELLS);
        Some(Pos::from_index(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}
