use alloc::string::String;
use alloc::vec::Vec;

use rand::rngs::SmallRng;

use crate::commander::Commander;
use crate::common::{GameError, ShotOutcome};
use crate::coord::Coord;
use crate::player::Player;

/// Which of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    fn slot(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

/// Current status of a game from one side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Two deployed players taking strictly alternating shots. `First` opens.
#[derive(Debug, Clone)]
pub struct Battle {
    players: [Player; 2],
    turn: Side,
    shots: [usize; 2],
}

impl Battle {
    /// Both players must have deployed their full fleet.
    pub fn new(first: Player, second: Player) -> Result<Self, GameError> {
        for p in [&first, &second] {
            if !p.is_deployed() {
                return Err(GameError::FleetNotDeployed(String::from(p.name())));
            }
        }
        Ok(Self {
            players: [first, second],
            turn: Side::First,
            shots: [0; 2],
        })
    }

    /// Side due to fire next.
    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.slot()]
    }

    /// Shots that resolved to a hit or a miss; repeats are not counted.
    pub fn shots_fired(&self, side: Side) -> usize {
        self.shots[side.slot()]
    }

    pub fn status(&self, side: Side) -> GameStatus {
        if self.player(side).is_defeated() {
            GameStatus::Lost
        } else if self.player(side.other()).is_defeated() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    pub fn winner(&self) -> Option<Side> {
        [Side::First, Side::Second]
            .into_iter()
            .find(|&s| self.status(s) == GameStatus::Won)
    }

    /// The side whose turn it is fires at `coord`. A repeat changes nothing
    /// and the same side fires again; otherwise the turn passes unless the
    /// shot ended the game.
    pub fn fire(&mut self, coord: Coord) -> Result<ShotOutcome, GameError> {
        if self.winner().is_some() {
            return Err(GameError::GameOver);
        }
        let attacker = self.turn;
        let outcome = self.players[attacker.other().slot()].apply_shot(coord)?;
        if outcome == ShotOutcome::Repeat {
            return Ok(outcome);
        }
        self.shots[attacker.slot()] += 1;
        if self.winner().is_none() {
            self.turn = attacker.other();
        }
        Ok(outcome)
    }

    pub fn report(&self) -> BattleReport {
        let side_report = |side: Side| {
            let p = self.player(side);
            SideReport {
                name: String::from(p.name()),
                status: self.status(side),
                shots: self.shots_fired(side),
                vessels_afloat: p.fleet().len(),
                vessels_lost: p.sunk().to_vec(),
            }
        };
        BattleReport {
            winner: self.winner(),
            first: side_report(Side::First),
            second: side_report(Side::Second),
        }
    }
}

/// Summary of one side at the end (or middle) of a battle.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct SideReport {
    pub name: String,
    pub status: GameStatus,
    pub shots: usize,
    pub vessels_afloat: usize,
    pub vessels_lost: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct BattleReport {
    pub winner: Option<Side>,
    pub first: SideReport,
    pub second: SideReport,
}

/// Play `battle` to the end, asking each commander for shots in turn.
pub fn run_battle<'a>(
    battle: &mut Battle,
    first: &'a mut dyn Commander,
    second: &'a mut dyn Commander,
    rng: &mut SmallRng,
) -> Result<Side, GameError> {
    loop {
        if let Some(winner) = battle.winner() {
            log::info!("{} wins", battle.player(winner).name());
            return Ok(winner);
        }
        let side = battle.turn();
        let (attacker, defender) = match side {
            Side::First => (&mut *first, &mut *second),
            Side::Second => (&mut *second, &mut *first),
        };
        let coord = attacker.next_shot(
            rng,
            battle.player(side).board(),
            battle.player(side.other()).board(),
        )?;
        let outcome = battle.fire(coord)?;
        log::debug!("{} fires at {}: {:?}", battle.player(side).name(), coord, outcome);
        attacker.handle_shot_result(coord, outcome)?;
        defender.handle_incoming_shot(coord, outcome)?;
    }
}
