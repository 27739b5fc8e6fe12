use rand::rngs::SmallRng;

use crate::ai::IntermediateAi;
use crate::board::Board;
use crate::common::{GameError, ShotOutcome};
use crate::coord::Coord;
use crate::placement;
use crate::player::Player;

use super::Commander;

impl Commander for IntermediateAi {
    fn deploy(&mut self, rng: &mut SmallRng, player: &mut Player) -> Result<(), GameError> {
        placement::place_all_vessels(player, rng)
    }

    fn next_shot(
        &mut self,
        rng: &mut SmallRng,
        _own: &Board,
        _enemy: &Board,
    ) -> Result<Coord, GameError> {
        self.produce_shot(rng)
    }

    fn handle_shot_result(&mut self, coord: Coord, outcome: ShotOutcome) -> Result<(), GameError> {
        self.resolve_outcome(coord, outcome);
        Ok(())
    }
}
