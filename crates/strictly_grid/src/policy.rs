//! Move-selection policies for the automated opponent.
//!
//! A policy only ever chooses among empty cells. Stronger opponents can be
//! dropped in behind [`MovePolicy`] without touching the engine.

use crate::ledger::MoveLedger;
use crate::types::Cell;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use tracing::{debug, instrument};

/// Chooses the automated opponent's next cell.
pub trait MovePolicy {
    /// Picks an empty cell, or `None` if the board is full.
    fn choose(&mut self, ledger: &MoveLedger) -> Option<Cell>;

    /// Returns the policy's display name.
    fn name(&self) -> &str;
}

/// Picks the first empty cell in row-major order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstEmpty;

impl MovePolicy for FirstEmpty {
    #[instrument(skip_all, fields(moves = ledger.len()))]
    fn choose(&mut self, ledger: &MoveLedger) -> Option<Cell> {
        let cell = ledger.empty_cells().next();
        debug!(?cell, "First empty cell chosen");
        cell
    }

    fn name(&self) -> &str {
        "first-empty"
    }
}

/// Picks uniformly among the empty cells.
#[derive(Debug, Clone)]
pub struct UniformRandom {
    rng: StdRng,
}

impl UniformRandom {
    /// Creates a policy seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a reproducible policy from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for UniformRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl MovePolicy for UniformRandom {
    #[instrument(skip_all, fields(moves = ledger.len()))]
    fn choose(&mut self, ledger: &MoveLedger) -> Option<Cell> {
        let cell = ledger.empty_cells().choose(&mut self.rng);
        debug!(?cell, "Random empty cell chosen");
        cell
    }

    fn name(&self) -> &str {
        "uniform-random"
    }
}
