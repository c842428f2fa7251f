//! Contract-based validation for submitted moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::action::MoveError;
use crate::invariants::{InvariantSet, LedgerInvariants};
use crate::ledger::MoveLedger;
use crate::types::Cell;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the cell must lie on the board.
pub struct CellInBounds;

impl CellInBounds {
    /// Fails with [`MoveError::OutOfBounds`] for a cell off the board.
    #[instrument(skip(ledger))]
    pub fn check(cell: &Cell, ledger: &MoveLedger) -> Result<(), MoveError> {
        if cell.in_bounds(ledger.dimension()) {
            Ok(())
        } else {
            Err(MoveError::OutOfBounds(*cell, ledger.dimension()))
        }
    }
}

/// Precondition: the board must have a free cell.
pub struct BoardNotFull;

impl BoardNotFull {
    /// Fails with [`MoveError::BoardFull`] once N² moves are recorded.
    #[instrument(skip(ledger))]
    pub fn check(ledger: &MoveLedger) -> Result<(), MoveError> {
        if ledger.is_full() {
            Err(MoveError::BoardFull)
        } else {
            Ok(())
        }
    }
}

/// Precondition: no earlier move occupies the cell.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with [`MoveError::CellOccupied`] for a taken cell.
    #[instrument(skip(ledger))]
    pub fn check(cell: &Cell, ledger: &MoveLedger) -> Result<(), MoveError> {
        if ledger.contains(*cell) {
            Err(MoveError::CellOccupied(*cell))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: in range, board not full, cell free.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(ledger))]
    pub fn check(cell: &Cell, ledger: &MoveLedger) -> Result<(), MoveError> {
        CellInBounds::check(cell, ledger)?;
        BoardNotFull::check(ledger)?;
        CellIsEmpty::check(cell, ledger)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move submission.
///
/// Preconditions:
/// - Cell lies on the board
/// - Board is not full
/// - Cell is unoccupied
///
/// Postconditions:
/// - Ledger grew by exactly one entry
/// - All ledger invariants still hold
pub struct MoveContract;

impl Contract<MoveLedger, Cell> for MoveContract {
    fn pre(ledger: &MoveLedger, action: &Cell) -> Result<(), MoveError> {
        LegalMove::check(action, ledger)
    }

    fn post(before: &MoveLedger, after: &MoveLedger) -> Result<(), MoveError> {
        if after.len() != before.len() + 1 {
            warn!(before = before.len(), after = after.len(), "Ledger did not grow by one");
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: ledger length went from {} to {}",
                before.len(),
                after.len()
            )));
        }

        LedgerInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Ledger invariants violated");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_empty_cell() {
        let ledger = MoveLedger::new(3).unwrap();
        assert!(MoveContract::pre(&ledger, &Cell::new(1, 1)).is_ok());
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let mut ledger = MoveLedger::new(3).unwrap();
        ledger.push(Cell::new(1, 1));
        assert_eq!(
            MoveContract::pre(&ledger, &Cell::new(1, 1)),
            Err(MoveError::CellOccupied(Cell::new(1, 1)))
        );
    }

    #[test]
    fn test_precondition_out_of_bounds() {
        let ledger = MoveLedger::new(3).unwrap();
        assert!(matches!(
            MoveContract::pre(&ledger, &Cell::new(0, 3)),
            Err(MoveError::OutOfBounds(_, 3))
        ));
    }

    #[test]
    fn test_precondition_full_board() {
        let mut ledger = MoveLedger::new(3).unwrap();
        for row in 0..3 {
            for col in 0..3 {
                ledger.push(Cell::new(row, col));
            }
        }
        assert_eq!(
            MoveContract::pre(&ledger, &Cell::new(0, 0)),
            Err(MoveError::BoardFull)
        );
    }

    #[test]
    fn test_postcondition_holds_after_push() {
        let before = MoveLedger::new(3).unwrap();
        let mut after = before.clone();
        after.push(Cell::new(2, 2));
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = MoveLedger::new(3).unwrap();
        let mut after = before.clone();
        after.push(Cell::new(2, 2));
        after.occupancy_mut()[0] = Some(0);
        assert!(MoveContract::post(&before, &after).is_err());
    }
}
