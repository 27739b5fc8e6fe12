#![cfg(feature = "std")]

use std::fmt;
use std::io::{self, BufRead, Write};
use std::string::String;

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{GameError, ShotOutcome};
use crate::config::SHIPS;
use crate::coord::Coord;
use crate::placement;
use crate::player::Player;
use crate::ship::Segment;

use super::Commander;

/// A human commanding a fleet through a text console.
pub struct CliCommander<R, W> {
    input: R,
    output: W,
}

impl CliCommander<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

/// Parse `A1`..`J10`, case-insensitive, surrounding whitespace ignored.
pub fn parse_coord(input: &str) -> Result<Coord, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    let mut chars = input.chars();
    let row_ch = chars
        .next()
        .ok_or("No row letter")?
        .to_ascii_uppercase();
    if !row_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid row '{}' - must be a letter A-J", row_ch));
    }
    let col_str: String = chars.collect();
    if col_str.is_empty() {
        return Err("Too short - need row letter and column number (e.g., B5)".to_string());
    }
    let col: u8 = col_str
        .parse()
        .map_err(|_| format!("Invalid column '{}' - must be a number 1-10", col_str))?;
    Coord::from_label(row_ch, col).map_err(|_| format!("{}{} is off the board", row_ch, col))
}

impl<R: BufRead, W: Write> CliCommander<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the commander and hand back its streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn say(&mut self, args: fmt::Arguments<'_>) -> Result<(), GameError> {
        self.output
            .write_fmt(args)
            .and_then(|()| self.output.write_all(b"\n"))
            .map_err(|_| GameError::OutputClosed)
    }

    fn prompt(&mut self, text: &str) -> Result<String, GameError> {
        write!(self.output, "{}", text)
            .and_then(|()| self.output.flush())
            .map_err(|_| GameError::OutputClosed)?;
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => Err(GameError::InputClosed),
            Ok(_) => Ok(line.trim().to_string()),
        }
    }

    fn prompt_coord(&mut self, text: &str) -> Result<Coord, GameError> {
        loop {
            let line = self.prompt(text)?;
            match parse_coord(&line) {
                Ok(coord) => return Ok(coord),
                Err(e) => self.say(format_args!("INVALID COORDINATE: {}", e))?,
            }
        }
    }

    /// Start/exit menu. Returns `false` when the user chooses to exit.
    pub fn main_menu(&mut self) -> Result<bool, GameError> {
        self.say(format_args!("WHAT WOULD YOU LIKE TO DO?\n\t[S]TART\n\tE[X]IT"))?;
        let line = self.prompt("> ")?;
        Ok(!line.eq_ignore_ascii_case("x"))
    }

    pub fn ask_name(&mut self) -> Result<String, GameError> {
        let name = self.prompt("\nENTER YOUR NAME: ")?;
        Ok(if name.is_empty() { "PLAYER 1".to_string() } else { name })
    }

    pub fn show(&mut self, label: &str, board: &Board, cloaked: bool) -> Result<(), GameError> {
        self.say(format_args!("{}\n{}", label, board.view(cloaked)))
    }
}

impl<R: BufRead, W: Write> Commander for CliCommander<R, W> {
    fn deploy(&mut self, rng: &mut SmallRng, player: &mut Player) -> Result<(), GameError> {
        self.say(format_args!("PLACE YOUR SHIPS ON THE GAME FIELD"))?;
        self.say(format_args!("Enter both end coordinates; ENTER on the first one places it randomly."))?;
        for def in SHIPS {
            loop {
                self.show("", player.board(), false)?;
                self.say(format_args!("PLACE {} (LENGTH {})", def.name(), def.length()))?;
                let first = self.prompt("ENTER FIRST COORDINATE (E.G., A1): ")?;
                if first.is_empty() {
                    placement::place_vessel(player, def, rng)?;
                    self.say(format_args!("{} placed at random", def.name()))?;
                    break;
                }
                let a = match parse_coord(&first) {
                    Ok(c) => c,
                    Err(e) => {
                        self.say(format_args!("INVALID COORDINATE: {}", e))?;
                        continue;
                    }
                };
                let b = self.prompt_coord("ENTER SECOND COORDINATE (E.G., A5): ")?;
                match player.place_ship(def, Segment::new(a, b)) {
                    Ok(()) => break,
                    Err(GameError::InvalidPlacement(reason)) => {
                        self.say(format_args!("INVALID PLACEMENT: {}. TRY AGAIN.", reason))?;
                    }
                    Err(e) => return Err(e),
                }
            }
        }
        self.show("", player.board(), false)
    }

    fn next_shot(
        &mut self,
        _rng: &mut SmallRng,
        own: &Board,
        enemy: &Board,
    ) -> Result<Coord, GameError> {
        self.show("ENEMY BATTLEFIELD:", enemy, true)?;
        self.say(format_args!("--------------------"))?;
        self.show("YOUR BATTLEFIELD:", own, false)?;
        self.prompt_coord("ENTER COORDINATES TO FIRE AT (E.G., B5): ")
    }

    fn handle_shot_result(&mut self, coord: Coord, outcome: ShotOutcome) -> Result<(), GameError> {
        match outcome {
            ShotOutcome::Hit => self.say(format_args!("{}: YOU HIT A SHIP!", coord)),
            ShotOutcome::Sunk(name) => {
                self.say(format_args!("{}: YOU SANK THE ENEMY {}!", coord, name.to_uppercase()))
            }
            ShotOutcome::Miss => self.say(format_args!("{}: YOU MISSED! TRY AGAIN NEXT TURN", coord)),
            ShotOutcome::Repeat => {
                self.say(format_args!("{}: ALREADY FIRED AT THIS LOCATION! FIRE AGAIN.", coord))
            }
        }
    }

    fn handle_incoming_shot(
        &mut self,
        coord: Coord,
        outcome: ShotOutcome,
    ) -> Result<(), GameError> {
        match outcome {
            ShotOutcome::Hit => self.say(format_args!("THE ENGINE FIRED AT {} AND HIT YOUR SHIP.", coord)),
            ShotOutcome::Sunk(name) => self.say(format_args!(
                "THE ENGINE FIRED AT {} AND SANK YOUR {}.",
                coord,
                name.to_uppercase()
            )),
            ShotOutcome::Miss => self.say(format_args!("THE ENGINE FIRED AT {} AND MISSED.", coord)),
            ShotOutcome::Repeat => Ok(()),
        }
    }
}
