//! Grid state for one player: vessel cells, hits and misses, plus the
//! placement legality check.

use core::fmt;

use crate::bitboard::GridBits;
use crate::common::{GameError, PlacementError};
use crate::config::BOARD_SIZE;
use crate::coord::Coord;
use crate::ship::Segment;

/// What a single cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Water,
    Ship,
    Hit,
    Miss,
}

impl Cell {
    pub fn symbol(&self) -> char {
        match self {
            Cell::Water => '~',
            Cell::Ship => '0',
            Cell::Hit => 'X',
            Cell::Miss => 'M',
        }
    }
}

/// A 10×10 cell store backed by three bitboards.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Board {
    ship_map: GridBits,
    hits: GridBits,
    misses: GridBits,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Visible state of `coord`. A hit vessel cell reads as `Hit`.
    pub fn cell(&self, coord: Coord) -> Cell {
        if self.hits.at(coord) {
            Cell::Hit
        } else if self.misses.at(coord) {
            Cell::Miss
        } else if self.ship_map.at(coord) {
            Cell::Ship
        } else {
            Cell::Water
        }
    }

    /// Overwrite the visible state of `coord`.
    pub fn set(&mut self, coord: Coord, cell: Cell) {
        match cell {
            Cell::Water => {
                self.ship_map.unmark(coord);
                self.hits.unmark(coord);
                self.misses.unmark(coord);
            }
            Cell::Ship => {
                self.ship_map.mark(coord);
                self.hits.unmark(coord);
                self.misses.unmark(coord);
            }
            Cell::Hit => {
                self.hits.mark(coord);
                self.misses.unmark(coord);
            }
            Cell::Miss => {
                self.misses.mark(coord);
                self.hits.unmark(coord);
            }
        }
    }

    /// `true` if a vessel was ever placed on `coord`, hit or not.
    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.ship_map.at(coord)
    }

    /// `true` once `coord` has been fired upon.
    pub fn is_resolved(&self, coord: Coord) -> bool {
        self.fired().at(coord)
    }

    /// Every cell fired upon so far, hit or miss.
    pub fn fired(&self) -> GridBits {
        self.hits | self.misses
    }

    pub fn ship_map(&self) -> GridBits {
        self.ship_map
    }

    pub fn hits(&self) -> GridBits {
        self.hits
    }

    pub fn misses(&self) -> GridBits {
        self.misses
    }

    /// Resolve a shot on this board. Returns the cell as it was before the
    /// shot (`Ship` or `Water`) and marks it `Hit` or `Miss`. A cell that was
    /// already fired upon is rejected with `RepeatShot` and left untouched.
    pub fn strike(&mut self, coord: Coord) -> Result<Cell, GameError> {
        if self.is_resolved(coord) {
            return Err(GameError::RepeatShot);
        }
        if self.ship_map.at(coord) {
            self.hits.mark(coord);
            Ok(Cell::Ship)
        } else {
            self.misses.mark(coord);
            Ok(Cell::Water)
        }
    }

    /// Check that `segment` is a legal position for a vessel of `length`:
    /// aligned, exactly `length` long, not overlapping and not orthogonally
    /// adjacent to an existing vessel. Diagonal contact is allowed.
    pub fn check_placement(&self, segment: &Segment, length: usize) -> Result<(), PlacementError> {
        if !segment.is_aligned() {
            return Err(PlacementError::Misaligned);
        }
        if segment.len() != length {
            return Err(PlacementError::WrongLength {
                expected: length,
                actual: segment.len(),
            });
        }
        let body = GridBits::from_cells(segment.cells());
        if !(self.ship_map & body).is_empty() {
            return Err(PlacementError::Crossing);
        }
        let halo = GridBits::from_cells(segment.cells().flat_map(Coord::neighbors));
        if !(self.ship_map & halo).is_empty() {
            return Err(PlacementError::Touching);
        }
        Ok(())
    }

    /// Mark every cell of `segment` as a vessel cell.
    pub fn occupy(&mut self, segment: &Segment) {
        for c in segment.cells() {
            self.set(c, Cell::Ship);
        }
    }

    /// Displayable view. With `cloaked` set, intact vessel cells render as water.
    pub fn view(&self, cloaked: bool) -> BoardView<'_> {
        BoardView {
            board: self,
            cloaked,
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  ship_map: {:?},\n  hits: {:?},\n  misses: {:?}\n}}",
            self.ship_map, self.hits, self.misses
        )
    }
}

/// Text rendering of a board, column numbers across and row letters down.
pub struct BoardView<'a> {
    board: &'a Board,
    cloaked: bool,
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = BOARD_SIZE as usize;
        write!(f, "  ")?;
        for c in 1..=size {
            write!(f, "{} ", c)?;
        }
        for r in 0..size {
            write!(f, "\n{} ", (b'A' + r as u8) as char)?;
            for c in 0..size {
                let coord = Coord::new(r, c).map_err(|_| fmt::Error)?;
                let cell = match self.board.cell(coord) {
                    Cell::Ship if self.cloaked => Cell::Water,
                    other => other,
                };
                write!(f, "{} ", cell.symbol())?;
            }
        }
        writeln!(f)
    }
}
