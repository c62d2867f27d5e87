//! A fixed-size cell set for the 10×10 board.
//!
//! Every set of cells in the game (ship bodies, hits, misses, the ring around
//! a sunk ship) is a `CellSet`: one bit per cell packed into a `u128`, so
//! membership, union and difference are single integer operations and the
//! type stays `Copy`.

use std::fmt;
use std::iter::FromIterator;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not, Sub};

use crate::core::config::BOARD_SIZE;
use crate::core::coord::Coord;

const N: usize = BOARD_SIZE as usize;
const CELLS: usize = N * N;
const MASK: u128 = (1u128 << CELLS) - 1;

/// A set of board cells stored as a bitboard.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CellSet {
    bits: u128,
}

impl CellSet {
    /// Create an empty set.
    #[inline]
    pub const fn new() -> Self {
        CellSet { bits: 0 }
    }

    /// Set containing every cell on the board.
    #[inline]
    pub const fn full() -> Self {
        CellSet { bits: MASK }
    }

    /// Set containing exactly one cell.
    #[inline]
    pub fn single(coord: Coord) -> Self {
        CellSet {
            bits: 1u128 << coord.index(),
        }
    }

    /// Number of cells in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no cells are set.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn contains(&self, coord: Coord) -> bool {
        (self.bits >> coord.index()) & 1 == 1
    }

    /// Adds `coord`, returning `true` if it was not already present.
    pub fn insert(&mut self, coord: Coord) -> bool {
        let was_absent = !self.contains(coord);
        self.bits |= 1u128 << coord.index();
        was_absent
    }

    /// Removes `coord`, returning `true` if it was present.
    pub fn remove(&mut self, coord: Coord) -> bool {
        let was_present = self.contains(coord);
        self.bits &= !(1u128 << coord.index());
        was_present
    }

    /// Returns true if every cell of `self` is also in `other`.
    pub fn is_subset(&self, other: &CellSet) -> bool {
        self.bits & !other.bits == 0
    }

    /// Returns true if the two sets share at least one cell.
    pub fn intersects(&self, other: &CellSet) -> bool {
        self.bits & other.bits != 0
    }

    /// Iterator over the cells in row-major order.
    #[inline]
    pub fn iter(&self) -> Cells {
        Cells {
            bits: self.bits,
        }
    }

    /// Lowest cell in row-major order.
    pub fn first(&self) -> Option<Coord> {
        self.iter().next()
    }
}

impl fmt::Debug for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the cells of a [`CellSet`].
#[derive(Clone, Copy)]
pub struct Cells {
    bits: u128,
}

impl Iterator for Cells {
    type Item = Coord;

    #[inline]
    fn next(&mut self) -> Option<Coord> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as usize;
        self.bits &= self.bits - 1;
        Some(Coord::from_index(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Cells {}

impl IntoIterator for CellSet {
    type Item = Coord;
    type IntoIter = Cells;

    fn into_iter(self) -> Cells {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a CellSet {
    type Item = Coord;
    type IntoIter = Cells;

    fn into_iter(self) -> Cells {
        self.iter()
    }
}

impl FromIterator<Coord> for CellSet {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        let mut set = CellSet::new();
        for coord in iter {
            set.insert(coord);
        }
        set
    }
}

/// Intersection.
impl BitAnd for CellSet {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        CellSet {
            bits: self.bits & rhs.bits,
        }
    }
}

/// Union.
impl BitOr for CellSet {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        CellSet {
            bits: self.bits | rhs.bits,
        }
    }
}

/// Set difference.
impl Sub for CellSet {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        CellSet {
            bits: self.bits & !rhs.bits,
        }
    }
}

/// Complement within the board.
impl Not for CellSet {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        CellSet {
            bits: !self.bits & MASK,
        }
    }
}

impl BitOrAssign for CellSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}
