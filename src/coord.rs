//! Mapping between human-readable coordinates (`A1`..`J10`) and dense cell
//! indices `0..100`.
//!
//! Row letters run `A..J` top to bottom, column numbers `1..10` left to right.
//! The index of a cell is `row * 10 + col` with both parts zero-based.

use core::fmt;

use crate::common::GameError;
use crate::config::{BOARD_SIZE, CELL_COUNT};

const SIZE: usize = BOARD_SIZE as usize;

/// A cell on the grid. Always in bounds once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Build from zero-based row and column.
    pub fn new(row: usize, col: usize) -> Result<Self, GameError> {
        if row >= SIZE || col >= SIZE {
            return Err(GameError::OutOfBounds {
                row: row as isize,
                col: col as isize,
            });
        }
        Ok(Coord {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Build from a dense cell index.
    pub fn from_index(index: usize) -> Result<Self, GameError> {
        if index >= CELL_COUNT {
            return Err(GameError::OutOfBounds {
                row: (index / SIZE) as isize,
                col: (index % SIZE) as isize,
            });
        }
        Coord::new(index / SIZE, index % SIZE)
    }

    /// Build from a row letter (`'A'..='J'`) and a one-based column number.
    pub fn from_label(row_letter: char, column: u8) -> Result<Self, GameError> {
        let row = row_letter as u32 as isize - 'A' as u32 as isize;
        let col = column as isize - 1;
        if !row_letter.is_ascii_uppercase() || row < 0 || col < 0 {
            return Err(GameError::OutOfBounds { row, col });
        }
        Coord::new(row as usize, col as usize).map_err(|_| GameError::OutOfBounds { row, col })
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }

    pub fn col(&self) -> usize {
        self.col as usize
    }

    /// Dense index in `0..100`.
    pub fn index(&self) -> usize {
        self.row() * SIZE + self.col()
    }

    pub fn row_letter(&self) -> char {
        (b'A' + self.row) as char
    }

    /// One-based column number.
    pub fn column_number(&self) -> u8 {
        self.col + 1
    }

    /// Top-left and bottom-right corners of the rectangle spanned by `a` and `b`.
    pub fn corners(a: Coord, b: Coord) -> (Coord, Coord) {
        (
            Coord {
                row: a.row.min(b.row),
                col: a.col.min(b.col),
            },
            Coord {
                row: a.row.max(b.row),
                col: a.col.max(b.col),
            },
        )
    }

    /// Orthogonal neighbours that lie on the board.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        const STEPS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, 1), (0, -1)];
        STEPS.into_iter().filter_map(move |(dr, dc)| {
            let r = self.row as isize + dr;
            let c = self.col as isize + dc;
            if r < 0 || c < 0 {
                None
            } else {
                Coord::new(r as usize, c as usize).ok()
            }
        })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row_letter(), self.column_number())
    }
}

/// `encode('E', 5) == 44`.
pub fn encode(row_letter: char, column: u8) -> Result<usize, GameError> {
    Coord::from_label(row_letter, column).map(|c| c.index())
}

/// `decode(44) == ('E', 5)`.
pub fn decode(index: usize) -> Result<(char, u8), GameError> {
    Coord::from_index(index).map(|c| (c.row_letter(), c.column_number()))
}
