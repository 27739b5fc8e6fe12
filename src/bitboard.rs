//! A fixed-size bitboard addressed by dense cell index.
//!
//! Boards are an `N×N` grid packed into an unsigned integer `T`, bit `i`
//! standing for cell index `i` (`row * N + col`). The type is `no_std`
//! friendly and never allocates.

use core::fmt;
use core::ops::{BitAnd, BitOr};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::config::BOARD_SIZE;
use crate::coord::Coord;

/// A fixed-size N×N bitboard stored in the unsigned integer `T`.
///
/// Indices passed to `contains`/`insert`/`remove` must be below `N * N`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

/// The board used for a standard 10×10 grid.
pub type GridBits = BitBoard<u128, { BOARD_SIZE as usize }>;

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    const BOARD_BITS: usize = N * N;

    #[inline]
    pub fn new() -> Self {
        debug_assert!(Self::BOARD_BITS <= T::zero().count_zeros() as usize);
        BitBoard { bits: T::zero() }
    }

    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        debug_assert!(index < Self::BOARD_BITS);
        ((self.bits >> index) & T::one()) != T::zero()
    }

    #[inline]
    pub fn insert(&mut self, index: usize) {
        debug_assert!(index < Self::BOARD_BITS);
        self.bits = self.bits | (T::one() << index);
    }

    #[inline]
    pub fn remove(&mut self, index: usize) {
        debug_assert!(index < Self::BOARD_BITS);
        self.bits = self.bits & !(T::one() << index);
    }
}

// A `Coord` is always inside the 10×10 grid, so these never go out of range.
impl GridBits {
    #[inline]
    pub fn at(&self, coord: Coord) -> bool {
        self.contains(coord.index())
    }

    #[inline]
    pub fn mark(&mut self, coord: Coord) {
        self.insert(coord.index());
    }

    #[inline]
    pub fn unmark(&mut self, coord: Coord) {
        self.remove(coord.index());
    }

    /// Bitboard with exactly `cells` set.
    pub fn from_cells<I: IntoIterator<Item = Coord>>(cells: I) -> Self {
        let mut board = Self::new();
        for c in cells {
            board.mark(c);
        }
        board
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}>:", N)?;
        for r in 0..N {
            for c in 0..N {
                let bit = if self.contains(r * N + c) { '■' } else { '□' };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T, const N: usize> BitAnd for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits & rhs.bits,
        }
    }
}

impl<T, const N: usize> BitOr for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits | rhs.bits,
        }
    }
}
