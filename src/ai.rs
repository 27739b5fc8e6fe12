//! Intermediate opponent: checkerboard search with stack-driven follow-up.
//!
//! While `Searching`, shots are drawn uniformly from the parity pool, the
//! colour class of a checkerboard that every vessel of length two or more must
//! touch. Once every parity cell is spent the engine draws from all untried
//! cells instead. A hit that does not sink switches to `Tracking`: the
//! untried orthogonal neighbours of the latest hit are pushed on a stack and
//! popped newest-first, so fire follows a vessel's axis once a second hit
//! lines it up. Sinking the tracked vessel returns the engine to `Searching`.

use crate::common::{GameError, ShotOutcome};
use crate::config::{BOARD_SIZE, CELL_COUNT};
use crate::coord::Coord;
use crate::pool::{CandidatePool, FiringStack, UniformSampler};

const SIZE: usize = BOARD_SIZE as usize;

/// Current firing behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum FiringMode {
    /// No live lead; hunt on parity cells.
    Searching,
    /// Pursuing a damaged vessel; `pivot` is the most recent hit.
    Tracking { pivot: Coord },
}

/// `true` for cells on the hunting colour of the checkerboard.
pub fn is_parity_cell(index: usize) -> bool {
    (index / SIZE + index % SIZE) % 2 == 1
}

/// Orthogonal neighbours of `index` in push order: north, south, east, west.
/// Cells off the board or across a row boundary are skipped.
pub fn neighbor_indices(index: usize) -> impl Iterator<Item = usize> {
    Coord::from_index(index)
        .ok()
        .into_iter()
        .flat_map(Coord::neighbors)
        .map(|c| c.index())
}

/// The opponent's knowledge of the enemy board and its firing state.
#[derive(Debug, Clone)]
pub struct IntermediateAi {
    remaining: CandidatePool,
    parity: CandidatePool,
    pending: FiringStack,
    mode: FiringMode,
    previous_shot: Option<Coord>,
}

impl Default for IntermediateAi {
    fn default() -> Self {
        Self::new()
    }
}

impl IntermediateAi {
    /// Fresh engine: every cell untried, full parity pool, searching.
    pub fn new() -> Self {
        let remaining = (0..CELL_COUNT).collect();
        let parity = (0..CELL_COUNT).filter(|&i| is_parity_cell(i)).collect();
        Self {
            remaining,
            parity,
            pending: FiringStack::new(),
            mode: FiringMode::Searching,
            previous_shot: None,
        }
    }

    /// Rebuild an engine from explicit pools, in searching mode. Parity
    /// entries that are not also in `remaining` are dropped.
    pub fn from_pools(remaining: CandidatePool, parity: CandidatePool) -> Self {
        let parity = parity.iter().filter(|&i| remaining.contains(i)).collect();
        Self {
            remaining,
            parity,
            pending: FiringStack::new(),
            mode: FiringMode::Searching,
            previous_shot: None,
        }
    }

    pub fn mode(&self) -> FiringMode {
        self.mode
    }

    /// Cells not yet fired upon.
    pub fn remaining(&self) -> &CandidatePool {
        &self.remaining
    }

    pub fn parity_pool(&self) -> &CandidatePool {
        &self.parity
    }

    /// Follow-up cells waiting around the current lead.
    pub fn pending(&self) -> &FiringStack {
        &self.pending
    }

    pub fn previous_shot(&self) -> Option<Coord> {
        self.previous_shot
    }

    /// Choose the next cell to fire at and record it as the previous shot.
    ///
    /// Every call removes exactly one cell from `remaining`. Fails with
    /// `PoolExhausted` only when no untried cell is left.
    pub fn produce_shot<S: UniformSampler + ?Sized>(
        &mut self,
        rng: &mut S,
    ) -> Result<Coord, GameError> {
        let index = match self.mode {
            FiringMode::Searching => self.search(rng)?,
            FiringMode::Tracking { pivot } => self.track(pivot, rng)?,
        };
        let coord = Coord::from_index(index)?;
        self.previous_shot = Some(coord);
        Ok(coord)
    }

    /// Update the mode from the outcome of the shot just fired at `coord`.
    pub fn resolve_outcome(&mut self, coord: Coord, outcome: ShotOutcome) {
        match outcome {
            ShotOutcome::Hit => {
                log::debug!("hit at {}, tracking", coord);
                self.mode = FiringMode::Tracking { pivot: coord };
            }
            ShotOutcome::Sunk(name) => {
                log::debug!("{} sunk at {}, searching", name, coord);
                self.mode = FiringMode::Searching;
            }
            ShotOutcome::Miss => {}
            ShotOutcome::Repeat => {
                log::warn!("shot at {} was a repeat; mode unchanged", coord);
            }
        }
    }

    fn search<S: UniformSampler + ?Sized>(&mut self, rng: &mut S) -> Result<usize, GameError> {
        self.pending.clear();
        let index = if let Some(i) = self.parity.sample_uniform(rng) {
            self.parity.remove(i);
            i
        } else if let Some(i) = self.remaining.sample_uniform(rng) {
            // parity exhausted: whatever is left must sit on the other colour
            i
        } else {
            return Err(GameError::PoolExhausted);
        };
        self.remaining.remove(index);
        Ok(index)
    }

    fn track<S: UniformSampler + ?Sized>(
        &mut self,
        pivot: Coord,
        rng: &mut S,
    ) -> Result<usize, GameError> {
        for n in neighbor_indices(pivot.index()) {
            if self.remaining.contains(n) {
                self.pending.push(n);
            }
        }
        match self.pending.pop() {
            Some(index) => {
                self.parity.remove(index);
                self.remaining.remove(index);
                Ok(index)
            }
            None => {
                log::debug!("no untried cells around {}, searching for this shot", pivot);
                self.search(rng)
            }
        }
    }
}
