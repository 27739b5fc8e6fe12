//! Dynamic collections of cell indices used by the opponent's firing engine.
//!
//! These are plain data structures; they know nothing about hits or modes.

use alloc::vec::Vec;

use rand::Rng;

/// Source of uniformly distributed integers over an inclusive range.
///
/// Every `rand::Rng` is a sampler; tests substitute scripted ones to force
/// particular picks.
pub trait UniformSampler {
    /// Uniform integer in `low..=high`. Callers guarantee `low <= high`.
    fn sample_inclusive(&mut self, low: usize, high: usize) -> usize;
}

impl<R: Rng + ?Sized> UniformSampler for R {
    fn sample_inclusive(&mut self, low: usize, high: usize) -> usize {
        self.random_range(low..=high)
    }
}

/// An insertion-ordered set of cell indices.
///
/// Removal keeps the relative order of the remaining cells, so a given
/// sequence of samples always picks the same cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidatePool {
    cells: Vec<usize>,
}

impl CandidatePool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, value: usize) -> bool {
        self.cells.contains(&value)
    }

    /// Append `value` unless already present.
    pub fn insert(&mut self, value: usize) -> bool {
        if self.contains(value) {
            return false;
        }
        self.cells.push(value);
        true
    }

    /// Delete `value` if present. Returns whether anything was removed.
    pub fn remove(&mut self, value: usize) -> bool {
        match self.cells.iter().position(|&v| v == value) {
            Some(pos) => {
                self.cells.remove(pos);
                true
            }
            None => false,
        }
    }

    /// A uniformly chosen member, left in place. `None` on an empty pool.
    pub fn sample_uniform<S: UniformSampler + ?Sized>(&self, rng: &mut S) -> Option<usize> {
        if self.cells.is_empty() {
            return None;
        }
        let pos = rng.sample_inclusive(0, self.cells.len() - 1);
        self.cells.get(pos).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells.iter().copied()
    }
}

impl FromIterator<usize> for CandidatePool {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut pool = CandidatePool::new();
        for v in iter {
            pool.insert(v);
        }
        pool
    }
}

/// Last-in-first-out stack of follow-up cells. Never holds duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FiringStack {
    cells: Vec<usize>,
}

impl FiringStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, value: usize) -> bool {
        self.cells.contains(&value)
    }

    /// Push `value` unless it is already stacked.
    pub fn push(&mut self, value: usize) -> bool {
        if self.contains(value) {
            return false;
        }
        self.cells.push(value);
        true
    }

    pub fn pop(&mut self) -> Option<usize> {
        self.cells.pop()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells.iter().copied()
    }
}
