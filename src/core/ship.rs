//! Ship shapes and the straight-line rule.

use std::fmt;

use crate::core::bitboard::CellSet;
use crate::core::common::{GameError, PlacementError};
use crate::core::coord::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A placed ship: a straight contiguous run of 1 to 4 cells.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    cells: CellSet,
}

impl Ship {
    /// Build the run of `size` cells starting at (`row`, `col`).
    pub fn new(
        orientation: Orientation,
        row: i32,
        col: i32,
        size: usize,
    ) -> Result<Self, GameError> {
        let origin = Coord::new(row, col)?;
        let mut cells = CellSet::new();
        for i in 0..size as i32 {
            let (dr, dc) = match orientation {
                Orientation::Horizontal => (0, i),
                Orientation::Vertical => (i, 0),
            };
            let cell = origin.offset(dr, dc).ok_or(GameError::OutOfBounds {
                row: row + dr,
                col: col + dc,
            })?;
            cells.insert(cell);
        }
        Ok(Ship { cells })
    }

    /// Build a ship from user-supplied cells, enforcing the straight-line rule.
    pub fn from_cells(coords: &[Coord], expected_size: usize) -> Result<Self, PlacementError> {
        if coords.len() != expected_size || !is_straight_line(coords, expected_size) {
            return Err(PlacementError::WrongShape {
                expected: expected_size,
            });
        }
        Ok(Ship {
            cells: coords.iter().copied().collect(),
        })
    }

    /// Number of cells.
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> CellSet {
        self.cells
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(coord)
    }

    /// Orientation, or `None` for a single-cell ship.
    pub fn orientation(&self) -> Option<Orientation> {
        let mut iter = self.cells.iter();
        let first = iter.next()?;
        let second = iter.next()?;
        if first.row() == second.row() {
            Some(Orientation::Horizontal)
        } else {
            Some(Orientation::Vertical)
        }
    }

    /// All cells are contained in `hits`.
    pub fn is_sunk_by(&self, hits: &CellSet) -> bool {
        self.cells.is_subset(hits)
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ship [")?;
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", cell)?;
        }
        write!(f, "]")
    }
}

/// Returns true iff the unique cells of `coords` number exactly
/// `expected_size` and lie on one row with consecutive columns or one column
/// with consecutive rows.
pub fn is_straight_line(coords: &[Coord], expected_size: usize) -> bool {
    let mut cells: Vec<Coord> = coords.to_vec();
    cells.sort();
    cells.dedup();
    if cells.len() != expected_size || expected_size == 0 {
        return false;
    }
    if expected_size == 1 {
        return true;
    }
    let first = cells[0];
    if cells.iter().all(|c| c.row() == first.row()) {
        // sorted row-major, so columns ascend
        return cells
            .iter()
            .enumerate()
            .all(|(i, c)| c.col() == first.col() + i);
    }
    if cells.iter().all(|c| c.col() == first.col()) {
        return cells
            .iter()
            .enumerate()
            .all(|(i, c)| c.row() == first.row() + i);
    }
    false
}
