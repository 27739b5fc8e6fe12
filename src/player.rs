use alloc::string::String;
use alloc::vec::Vec;

use crate::board::{Board, Cell};
use crate::common::{GameError, ShotOutcome};
use crate::config::NUM_SHIPS;
use crate::coord::Coord;
use crate::ship::{Segment, Ship, ShipDef};

/// One side of the battle: a name, a board and the vessels still afloat.
///
/// Sunk vessels are removed from the fleet; only their names are kept.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    board: Board,
    fleet: Vec<Ship>,
    sunk: Vec<&'static str>,
    deployed: usize,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            board: Board::new(),
            fleet: Vec::with_capacity(NUM_SHIPS),
            sunk: Vec::new(),
            deployed: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Vessels still afloat.
    pub fn fleet(&self) -> &[Ship] {
        &self.fleet
    }

    /// Names of vessels lost so far, in the order they sank.
    pub fn sunk(&self) -> &[&'static str] {
        &self.sunk
    }

    /// `true` once every vessel of the standard fleet has been placed.
    pub fn is_deployed(&self) -> bool {
        self.deployed >= NUM_SHIPS
    }

    /// `true` when no vessel remains afloat.
    pub fn is_defeated(&self) -> bool {
        self.fleet.is_empty()
    }

    /// Validate and commit a vessel placement.
    pub fn place_ship(&mut self, def: ShipDef, segment: Segment) -> Result<(), GameError> {
        self.board.check_placement(&segment, def.length())?;
        self.board.occupy(&segment);
        self.fleet.push(Ship::new(def, segment));
        self.deployed += 1;
        log::debug!("{}: {} deployed at {}", self.name, def.name(), segment);
        Ok(())
    }

    /// Resolve an incoming shot against this player's board and fleet.
    ///
    /// A repeat is reported as `ShotOutcome::Repeat` and changes nothing.
    pub fn apply_shot(&mut self, coord: Coord) -> Result<ShotOutcome, GameError> {
        let before = match self.board.strike(coord) {
            Ok(cell) => cell,
            Err(GameError::RepeatShot) => return Ok(ShotOutcome::Repeat),
            Err(e) => return Err(e),
        };
        if before == Cell::Water {
            return Ok(ShotOutcome::Miss);
        }

        let Some(pos) = self.fleet.iter().position(|s| s.contains(coord)) else {
            return Err(GameError::UnknownVessel(coord));
        };
        self.fleet[pos].remove_part(coord);
        if self.fleet[pos].is_sunk() {
            let ship = self.fleet.remove(pos);
            self.sunk.push(ship.name());
            log::debug!("{}: {} sunk at {}", self.name, ship.name(), coord);
            Ok(ShotOutcome::Sunk(ship.name()))
        } else {
            Ok(ShotOutcome::Hit)
        }
    }
}
