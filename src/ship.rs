//! Vessel definitions, line segments and per-vessel damage bookkeeping.

use alloc::vec::Vec;
use core::fmt;

use crate::coord::Coord;

/// Orientation of a vessel on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Direction a vessel extends from its origin along its orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward increasing row/column.
    Forward,
    /// Toward decreasing row/column.
    Backward,
}

/// Type of vessel: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipDef {
    name: &'static str,
    length: usize,
}

impl ShipDef {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// A rectangle of cells between two endpoints, `start <= end` on both axes.
///
/// A segment is only a legal vessel position once it is aligned (one row or
/// one column); `Board::check_placement` enforces that.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    start: Coord,
    end: Coord,
}

impl Segment {
    /// Build from two endpoints in any order.
    pub fn new(a: Coord, b: Coord) -> Self {
        let (start, end) = Coord::corners(a, b);
        Segment { start, end }
    }

    /// The run of `length` cells starting at `origin`. `None` if any cell
    /// would fall off the board.
    pub fn from_origin(
        origin: Coord,
        orientation: Orientation,
        direction: Direction,
        length: usize,
    ) -> Option<Self> {
        if length == 0 {
            return None;
        }
        let span = length - 1;
        let (row, col) = (origin.row(), origin.col());
        let far = match (orientation, direction) {
            (Orientation::Horizontal, Direction::Forward) => Coord::new(row, col + span).ok()?,
            (Orientation::Horizontal, Direction::Backward) => {
                Coord::new(row, col.checked_sub(span)?).ok()?
            }
            (Orientation::Vertical, Direction::Forward) => Coord::new(row + span, col).ok()?,
            (Orientation::Vertical, Direction::Backward) => {
                Coord::new(row.checked_sub(span)?, col).ok()?
            }
        };
        Some(Segment::new(origin, far))
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn end(&self) -> Coord {
        self.end
    }

    pub fn is_aligned(&self) -> bool {
        self.start.row() == self.end.row() || self.start.col() == self.end.col()
    }

    /// Number of cells along the segment's longer axis.
    pub fn len(&self) -> usize {
        let rows = self.end.row() - self.start.row() + 1;
        let cols = self.end.col() - self.start.col() + 1;
        rows.max(cols)
    }

    pub fn orientation(&self) -> Orientation {
        if self.start.row() == self.end.row() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    /// Every cell covered by the segment, row-major.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let (start, end) = (self.start, self.end);
        (start.row()..=end.row()).flat_map(move |r| {
            (start.col()..=end.col()).filter_map(move |c| Coord::new(r, c).ok())
        })
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// A deployed vessel: its definition and the cells not yet hit.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    def: ShipDef,
    intact: Vec<Coord>,
}

impl Ship {
    /// Record a placement. The segment is expected to be validated already.
    pub fn new(def: ShipDef, segment: Segment) -> Self {
        Ship {
            def,
            intact: segment.cells().collect(),
        }
    }

    pub fn def(&self) -> ShipDef {
        self.def
    }

    pub fn name(&self) -> &'static str {
        self.def.name()
    }

    pub fn length(&self) -> usize {
        self.def.length()
    }

    /// Cells not yet hit, in placement order.
    pub fn intact_cells(&self) -> &[Coord] {
        &self.intact
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.intact.contains(&coord)
    }

    /// Remove a hit cell. Returns `true` if the cell was part of the vessel.
    pub fn remove_part(&mut self, coord: Coord) -> bool {
        match self.intact.iter().position(|&c| c == coord) {
            Some(pos) => {
                self.intact.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn is_sunk(&self) -> bool {
        self.intact.is_empty()
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", length: {}, intact: {:?} }}",
            self.def.name(),
            self.def.length(),
            self.intact,
        )
    }
}
