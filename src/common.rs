//! Common types for the game: errors and shot outcomes.

use alloc::string::String;
use core::fmt;

use crate::coord::Coord;

/// Result of firing at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum ShotOutcome {
    /// Struck a vessel that is still afloat.
    Hit,
    /// Struck the last intact cell of a vessel, carrying its name.
    Sunk(&'static str),
    /// Struck open water.
    Miss,
    /// The cell was already resolved; nothing changed.
    Repeat,
}

impl ShotOutcome {
    /// `true` for both `Hit` and `Sunk`.
    pub fn is_hit(&self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::Sunk(_))
    }
}

/// Reasons a proposed vessel segment is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Endpoints share neither a row nor a column.
    Misaligned,
    /// Segment length does not match the vessel.
    WrongLength { expected: usize, actual: usize },
    /// Segment overlaps an existing vessel.
    Crossing,
    /// Segment is orthogonally adjacent to an existing vessel.
    Touching,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::Misaligned => write!(f, "coordinates are not in a straight line"),
            PlacementError::WrongLength { expected, actual } => {
                write!(f, "segment covers {} cells, vessel needs {}", actual, expected)
            }
            PlacementError::Crossing => write!(f, "segment crosses another vessel"),
            PlacementError::Touching => write!(f, "segment touches another vessel"),
        }
    }
}

/// Errors returned by game operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Zero-based row/column outside the grid.
    OutOfBounds { row: isize, col: isize },
    /// Proposed vessel placement is illegal.
    InvalidPlacement(PlacementError),
    /// No untried cell is left to fire at.
    PoolExhausted,
    /// Cell was already fired upon.
    RepeatShot,
    /// A player tried to start a battle with vessels still undeployed.
    FleetNotDeployed(String),
    /// The battle already has a winner.
    GameOver,
    /// A cell is marked as a vessel but no live vessel occupies it.
    UnknownVessel(Coord),
    /// The interactive input stream ended or failed.
    InputClosed,
    /// Writing to the interactive output stream failed.
    OutputClosed,
}

impl From<PlacementError> for GameError {
    fn from(err: PlacementError) -> Self {
        GameError::InvalidPlacement(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::OutOfBounds { row, col } => {
                write!(f, "coordinate out of bounds: row={}, col={}", row, col)
            }
            GameError::InvalidPlacement(e) => write!(f, "invalid placement: {}", e),
            GameError::PoolExhausted => write!(f, "no untried cells remain"),
            GameError::RepeatShot => write!(f, "cell was already fired upon"),
            GameError::FleetNotDeployed(name) => {
                write!(f, "{} has not deployed every vessel", name)
            }
            GameError::GameOver => write!(f, "the battle is already over"),
            GameError::UnknownVessel(coord) => {
                write!(f, "no live vessel occupies {}", coord)
            }
            GameError::InputClosed => write!(f, "input closed"),
            GameError::OutputClosed => write!(f, "output closed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
