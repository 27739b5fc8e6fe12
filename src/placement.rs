//! Random vessel deployment for the computer opponent.

use crate::common::GameError;
use crate::config::{CELL_COUNT, SHIPS};
use crate::coord::Coord;
use crate::player::Player;
use crate::pool::UniformSampler;
use crate::ship::{Direction, Orientation, Segment, ShipDef};

/// Deploy the whole standard fleet in configuration order.
pub fn place_all_vessels<S: UniformSampler + ?Sized>(
    player: &mut Player,
    rng: &mut S,
) -> Result<(), GameError> {
    for def in SHIPS {
        place_vessel(player, def, rng)?;
    }
    Ok(())
}

/// Sample origin, orientation and direction until a legal segment turns up,
/// then commit it. Retries are unbounded; a sparse 10×10 board converges
/// within a handful of attempts.
pub fn place_vessel<S: UniformSampler + ?Sized>(
    player: &mut Player,
    def: ShipDef,
    rng: &mut S,
) -> Result<(), GameError> {
    let mut attempts: u32 = 0;
    loop {
        attempts = attempts.saturating_add(1);
        let origin = Coord::from_index(rng.sample_inclusive(0, CELL_COUNT - 1))?;
        let orientation = if rng.sample_inclusive(0, 1) == 0 {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let direction = if rng.sample_inclusive(0, 1) == 0 {
            Direction::Backward
        } else {
            Direction::Forward
        };

        let Some(segment) = Segment::from_origin(origin, orientation, direction, def.length())
        else {
            continue;
        };

        match player.place_ship(def, segment) {
            Ok(()) => {
                log::debug!("{} placed after {} attempt(s)", def.name(), attempts);
                return Ok(());
            }
            Err(GameError::InvalidPlacement(reason)) => {
                log::trace!("{} at {} rejected: {}", def.name(), segment, reason);
            }
            Err(e) => return Err(e),
        }
    }
}
