//! Move rejection reasons.
//!
//! Occupied-cell and full-board rejections are ordinary game conditions;
//! an out-of-range cell usually means the caller's coordinate mapping is
//! wrong. All three leave the engine untouched.

use crate::types::Cell;

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell lies outside the board.
    #[display("Cell {} is outside a {}x{} board", _0, _1, _1)]
    OutOfBounds(Cell, usize),

    /// The cell is already occupied by an earlier move.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Cell),

    /// Every cell is already occupied.
    #[display("Board is full")]
    BoardFull,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

impl MoveError {
    /// Returns true for rejections that are expected during normal play.
    pub fn is_game_condition(&self) -> bool {
        matches!(self, MoveError::CellOccupied(_) | MoveError::BoardFull)
    }
}
