//! Commonly used types and utilities for ease of import.

pub use crate::{
    place_all_vessels, run_battle, Battle, Commander, Coord, GameError, GameStatus,
    IntermediateAi, Player, ShotOutcome, Side,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, CliCommander};
