//! Board coordinates, neighbourhoods and the `A1` text notation.

use std::fmt;
use std::str::FromStr;

use crate::core::bitboard::CellSet;
use crate::core::common::GameError;
use crate::core::config::BOARD_SIZE;

const N: i32 = BOARD_SIZE as i32;

const ORTHOGONAL: [(i32, i32); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];
const ALL_DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A cell on the board, always in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Checked constructor from signed components.
    pub fn new(row: i32, col: i32) -> Result<Self, GameError> {
        if in_bounds(row, col) {
            Ok(Coord {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(GameError::OutOfBounds { row, col })
        }
    }

    /// Like [`Coord::new`] but returns `None` off the board.
    pub fn try_new(row: i32, col: i32) -> Option<Self> {
        Coord::new(row, col).ok()
    }

    pub(crate) fn from_index(idx: usize) -> Self {
        let n = BOARD_SIZE as usize;
        debug_assert!(idx < n * n);
        Coord {
            row: (idx / n) as u8,
            col: (idx % n) as u8,
        }
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }

    pub fn col(&self) -> usize {
        self.col as usize
    }

    /// Row-major bit index.
    pub(crate) fn index(&self) -> usize {
        self.row() * BOARD_SIZE as usize + self.col()
    }

    /// Neighbour at the given offset, if it is on the board.
    pub fn offset(&self, dr: i32, dc: i32) -> Option<Coord> {
        Coord::try_new(self.row as i32 + dr, self.col as i32 + dc)
    }

    /// Every cell of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        let n = BOARD_SIZE as usize;
        (0..n * n).map(Coord::from_index)
    }
}

/// Returns true iff `row` and `col` both lie in `[0, BOARD_SIZE)`.
pub fn in_bounds(row: i32, col: i32) -> bool {
    (0..N).contains(&row) && (0..N).contains(&col)
}

/// The 4 orthogonal neighbours of `coord`, or all 8 when `include_diagonal`.
pub fn adjacent_cells(coord: Coord, include_diagonal: bool) -> CellSet {
    let dirs: &[(i32, i32)] = if include_diagonal {
        &ALL_DIRECTIONS
    } else {
        &ORTHOGONAL
    };
    dirs.iter()
        .filter_map(|&(dr, dc)| coord.offset(dr, dc))
        .collect()
}

/// The ring of cells around `cells`: every 8-neighbour not in `cells` itself.
pub fn surrounding_cells(cells: &CellSet) -> CellSet {
    let mut ring = CellSet::new();
    for cell in cells {
        ring |= adjacent_cells(cell, true);
    }
    ring - *cells
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.col) as char, self.row + 1)
    }
}

impl FromStr for Coord {
    type Err = GameError;

    /// Parse `A1`..`J10`, case-insensitive. Letters or numbers past the board
    /// give `OutOfBounds`; anything else is `MalformedCoordinate`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let malformed = || GameError::MalformedCoordinate(s.to_string());
        let mut chars = s.chars();
        let col_ch = chars.next().ok_or_else(malformed)?.to_ascii_uppercase();
        if !col_ch.is_ascii_uppercase() {
            return Err(malformed());
        }
        let rest = chars.as_str();
        if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let row: i32 = rest.parse().map_err(|_| malformed())?;
        let col = (col_ch as u8 - b'A') as i32;
        Coord::new(row - 1, col)
    }
}
