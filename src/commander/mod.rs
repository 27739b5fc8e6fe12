//! Decision makers that drive one side of a battle.
//!
//! - `IntermediateAi`: the computer opponent (hunt/target)
//! - `CliCommander`: a human at a text console

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{GameError, ShotOutcome};
use crate::coord::Coord;
use crate::player::Player;

/// Interface implemented by everything that can command a fleet.
pub trait Commander {
    /// Place the whole fleet onto `player`'s board.
    fn deploy(&mut self, rng: &mut SmallRng, player: &mut Player) -> Result<(), GameError>;

    /// Choose the next cell to fire at. `own` is this side's board, `enemy`
    /// the opponent's board; implementations must not look at intact enemy
    /// vessel cells.
    fn next_shot(&mut self, rng: &mut SmallRng, own: &Board, enemy: &Board)
        -> Result<Coord, GameError>;

    /// Inform the commander of the result of its last shot.
    fn handle_shot_result(&mut self, _coord: Coord, _outcome: ShotOutcome) -> Result<(), GameError> {
        Ok(())
    }

    /// Inform the commander of an enemy shot against its board.
    fn handle_incoming_shot(
        &mut self,
        _coord: Coord,
        _outcome: ShotOutcome,
    ) -> Result<(), GameError> {
        Ok(())
    }
}

pub mod ai;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::CliCommander;
