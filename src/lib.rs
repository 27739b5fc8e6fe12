#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod ai;
mod bitboard;
mod board;
pub mod commander;
mod common;
mod config;
mod coord;
mod game;
#[cfg(feature = "std")]
mod logging;
mod placement;
mod player;
mod pool;
pub mod prelude;
mod ship;

pub use ai::*;
pub use bitboard::{BitBoard, GridBits};
pub use board::*;
pub use commander::Commander;
#[cfg(feature = "std")]
pub use commander::{cli::parse_coord, CliCommander};
pub use common::*;
pub use config::*;
pub use coord::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use placement::*;
pub use player::*;
pub use pool::*;
pub use ship::*;
