//! A fixed-size coordinate set packed into an unsigned integer.
//!
//! `BitBoard<T, N>` stores membership for every cell of an `N×N` grid in one
//! `T`, so unions, intersections and complements are single integer ops. The
//! type is `no_std` friendly and never allocates.

use core::ops::{BitAnd, BitOr, Not};
use core::{any, fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::common::Coord;

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// Row or column is outside [0..N).
    IndexOutOfBounds { row: i32, col: i32 },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

/// Set of cells on an N×N grid stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    const CELLS: usize = N * N;

    #[inline]
    fn mask() -> T {
        if Self::CELLS == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::CELLS) - T::one()
        }
    }

    #[inline]
    fn index(coord: Coord) -> Option<usize> {
        let (row, col) = coord;
        let n = N as i32;
        if (0..n).contains(&row) && (0..n).contains(&col) {
            Some(row as usize * N + col as usize)
        } else {
            None
        }
    }

    /// Empty set.
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// `true` when every cell of the grid has a bit in `T`. Meant for
    /// compile-time checks on concrete aliases.
    pub const FITS: bool = Self::CELLS <= mem::size_of::<T>() * 8;

    /// Every cell whose `(row + col) % 2 == parity`.
    pub fn parity(parity: usize) -> Self {
        let mut board = Self::new();
        for idx in 0..Self::CELLS {
            if (idx / N + idx % N) % 2 == parity % 2 {
                board.bits = board.bits | (T::one() << idx);
            }
        }
        board
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Membership test; off-grid coordinates are never members.
    pub fn contains(&self, coord: Coord) -> bool {
        match Self::index(coord) {
            Some(idx) => ((self.bits >> idx) & T::one()) != T::zero(),
            None => false,
        }
    }

    /// Adds `coord`, returning `true` if it was not already present.
    pub fn insert(&mut self, coord: Coord) -> Result<bool, BitBoardError> {
        let idx = Self::index(coord).ok_or(BitBoardError::IndexOutOfBounds {
            row: coord.0,
            col: coord.1,
        })?;
        let bit = T::one() << idx;
        let fresh = (self.bits & bit).is_zero();
        self.bits = self.bits | bit;
        Ok(fresh)
    }

    /// Removes every member.
    #[inline]
    pub fn clear(&mut self) {
        self.bits = T::zero();
    }

    /// Members in row-major order.
    #[inline]
    pub fn iter(&self) -> Cells<'_, T, N> {
        Cells {
            board: self,
            idx: 0,
        }
    }

    /// The `k`-th member in row-major order.
    pub fn nth(&self, k: usize) -> Option<Coord> {
        self.iter().nth(k)
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
        writeln!(f, "BitBoard<{}, {}>:", any::type_name::<T>(), N)?;
        for r in 0..N as i32 {
            for c in 0..N as i32 {
                let cell = if self.contains((r, c)) { '■' } else { '□' };
                write!(f, "{} ", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the members of a bitboard.
#[derive(Clone, Copy)]
pub struct Cells<'a, T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    board: &'a BitBoard<T, N>,
    idx: usize,
}

impl<'a, T, const N: usize> Iterator for Cells<'a, T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Coord;

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.board.bits >> idx) & T::one()) != T::zero() {
                return Some(((idx / N) as i32, (idx % N) as i32));
            }
        }
        None
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

/// Complement within the grid.
impl<T, const N: usize> Not for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        BitBoard {
            bits: !self.bits & Self::mask(),
        }
    }
}
