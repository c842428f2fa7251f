//! The game-state engine.
//!
//! [`GameEngine`] owns the board dimension, the move ledger and the
//! first-mover setting. It records moves, scores the ledger and picks moves
//! for the automated opponent. It never schedules anything and performs no
//! I/O; callers decide when each operation happens.

use crate::action::MoveError;
use crate::contracts::{Contract, MoveContract};
use crate::error::{EngineError, EngineErrorKind};
use crate::ledger::MoveLedger;
use crate::outcome::{Evaluation, WinDirection, WinState};
use crate::policy::{FirstEmpty, MovePolicy};
use crate::rules;
use crate::types::{Cell, Player, player_at};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Game engine for one N×N game.
#[derive(Debug, Clone)]
pub struct GameEngine {
    ledger: MoveLedger,
    first_mover: Player,
    /// Result of the last `compute_win_state` pass.
    last_evaluation: Option<Evaluation>,
}

/// Serializable copy of an engine's state.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board dimension N.
    dimension: usize,
    /// Player occupying even ledger positions.
    first_mover: Player,
    /// Ledger in play order.
    moves: Vec<Cell>,
}

impl GameEngine {
    /// Creates an empty game on an N×N board with Player One moving first.
    ///
    /// # Errors
    ///
    /// Returns [`EngineErrorKind::InvalidDimension`] if `dimension` is outside
    /// [`MIN_DIMENSION`](crate::MIN_DIMENSION)..=[`MAX_DIMENSION`](crate::MAX_DIMENSION).
    #[instrument]
    pub fn new(dimension: usize) -> Result<Self, EngineError> {
        Self::with_first_mover(dimension, Player::PlayerOne)
    }

    /// Creates an empty game with the given first mover.
    #[instrument]
    pub fn with_first_mover(dimension: usize, first_mover: Player) -> Result<Self, EngineError> {
        Ok(Self {
            ledger: MoveLedger::new(dimension)?,
            first_mover,
            last_evaluation: None,
        })
    }

    /// Board dimension N.
    pub fn dimension(&self) -> usize {
        self.ledger.dimension()
    }

    /// Recorded moves in play order.
    pub fn moves(&self) -> &[Cell] {
        self.ledger.moves()
    }

    /// The underlying ledger.
    pub fn ledger(&self) -> &MoveLedger {
        &self.ledger
    }

    /// Player occupying even ledger positions.
    pub fn first_mover(&self) -> Player {
        self.first_mover
    }

    /// Updates the first-mover setting. Allowed before or after a reset.
    #[instrument(skip(self))]
    pub fn set_first_mover(&mut self, first_mover: Player) {
        self.first_mover = first_mover;
        self.last_evaluation = None;
    }

    /// Player whose turn it is, derived from ledger parity.
    pub fn next_player(&self) -> Player {
        player_at(self.ledger.len(), self.first_mover)
    }

    /// Clears the ledger. Idempotent.
    #[instrument(skip(self), fields(moves = self.ledger.len()))]
    pub fn reset(&mut self) {
        self.ledger.clear();
        self.last_evaluation = None;
        info!("Game reset");
    }

    /// Records a move, returning `false` (and changing nothing) if it is
    /// out of range, the cell is taken or the board is full.
    #[instrument(skip(self))]
    pub fn submit_move(&mut self, row: usize, col: usize) -> bool {
        match self.try_submit(Cell::new(row, col)) {
            Ok(()) => true,
            Err(e) => {
                debug!(error = %e, "Move rejected");
                false
            }
        }
    }

    /// Records a move, reporting why it was rejected.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`], [`MoveError::BoardFull`] or
    /// [`MoveError::CellOccupied`]; the ledger is untouched in each case.
    #[instrument(skip(self), fields(cell = %cell, moves = self.ledger.len()))]
    pub fn try_submit(&mut self, cell: Cell) -> Result<(), MoveError> {
        MoveContract::pre(&self.ledger, &cell)?;

        let before = cfg!(debug_assertions).then(|| self.ledger.clone());

        self.ledger.push(cell);
        self.last_evaluation = None;

        if let Some(before) = before
            && let Err(e) = MoveContract::post(&before, &self.ledger)
        {
            self.ledger = before;
            return Err(e);
        }

        debug!(player = %player_at(self.ledger.len() - 1, self.first_mover), "Move recorded");
        Ok(())
    }

    /// Replaces the ledger with previously saved moves.
    ///
    /// Every move goes through the same checks as [`GameEngine::try_submit`].
    ///
    /// # Errors
    ///
    /// Returns the first rejection; the engine is left reset.
    #[instrument(skip(self, moves), fields(count = moves.len()))]
    pub fn restore(&mut self, moves: &[Cell]) -> Result<(), MoveError> {
        self.reset();
        for cell in moves {
            if let Err(e) = self.try_submit(*cell) {
                warn!(error = %e, "Saved ledger rejected");
                self.reset();
                return Err(e);
            }
        }
        info!(moves = self.ledger.len(), "Ledger restored");
        Ok(())
    }

    /// Returns true while fewer than N² moves have been recorded.
    pub fn has_empty_cell(&self) -> bool {
        !self.ledger.is_full()
    }

    /// Scores the ledger for the given first mover.
    ///
    /// The winning direction and cell from this pass are kept for
    /// [`GameEngine::win_direction`] and [`GameEngine::winning_cell`].
    #[instrument(skip(self), fields(moves = self.ledger.len()))]
    pub fn compute_win_state(&mut self, first_mover: Player) -> WinState {
        let evaluation = self.evaluate(first_mover);
        self.last_evaluation = Some(evaluation);
        *evaluation.state()
    }

    /// Scores the ledger without touching cached results.
    pub fn evaluate(&self, first_mover: Player) -> Evaluation {
        rules::evaluate(&self.ledger, first_mover)
    }

    /// Direction of the winning line from the last `compute_win_state` pass.
    pub fn win_direction(&self) -> Option<WinDirection> {
        self.last_evaluation.and_then(|e| *e.direction())
    }

    /// First cell of the winning line from the last `compute_win_state` pass.
    pub fn winning_cell(&self) -> Option<Cell> {
        self.last_evaluation.and_then(|e| *e.winning_cell())
    }

    /// Picks a move for the automated opponent without recording it.
    ///
    /// # Errors
    ///
    /// Returns [`EngineErrorKind::IllegalState`] on a full board; callers
    /// should check [`GameEngine::has_empty_cell`] first.
    #[instrument(skip(self))]
    pub fn pick_automated_move(&self) -> Result<Cell, EngineError> {
        self.pick_move_with(&mut FirstEmpty)
    }

    /// Picks a move with a caller-supplied policy without recording it.
    #[instrument(skip(self, policy), fields(policy = policy.name()))]
    pub fn pick_move_with<P: MovePolicy + ?Sized>(
        &self,
        policy: &mut P,
    ) -> Result<Cell, EngineError> {
        if !self.has_empty_cell() {
            return Err(EngineError::new(EngineErrorKind::IllegalState(
                "automated move requested on a full board",
            )));
        }

        let cell = policy.choose(&self.ledger).ok_or_else(|| {
            EngineError::new(EngineErrorKind::IllegalState(
                "move policy found no empty cell",
            ))
        })?;

        if self.ledger.contains(cell) || !cell.in_bounds(self.dimension()) {
            warn!(%cell, "Move policy chose an illegal cell");
            return Err(EngineError::new(EngineErrorKind::IllegalState(
                "move policy chose an illegal cell",
            )));
        }

        debug!(%cell, "Automated move picked");
        Ok(cell)
    }

    /// Captures the engine's state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            dimension: self.dimension(),
            first_mover: self.first_mover,
            moves: self.ledger.moves().to_vec(),
        }
    }

    /// Rebuilds an engine from a snapshot, validating every move.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineError`] for a bad dimension or an illegal ledger.
    #[instrument(skip(snapshot), fields(dimension = snapshot.dimension, moves = snapshot.moves.len()))]
    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self, EngineError> {
        let mut engine = Self::with_first_mover(snapshot.dimension, snapshot.first_mover)?;
        engine.restore(&snapshot.moves).map_err(|e| {
            warn!(error = %e, "Snapshot ledger rejected");
            EngineError::new(EngineErrorKind::IllegalState("snapshot contains an illegal move"))
        })?;
        Ok(engine)
    }
}
