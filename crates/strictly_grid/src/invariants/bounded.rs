//! Size and range invariants.

use super::Invariant;
use crate::ledger::MoveLedger;

/// Invariant: the ledger never holds more than N² moves.
pub struct BoundedLedgerInvariant;

impl Invariant<MoveLedger> for BoundedLedgerInvariant {
    fn holds(ledger: &MoveLedger) -> bool {
        ledger.len() <= ledger.capacity()
    }

    fn description() -> &'static str {
        "Ledger length is at most dimension squared"
    }
}

/// Invariant: every recorded cell lies on the board.
pub struct InBoundsInvariant;

impl Invariant<MoveLedger> for InBoundsInvariant {
    fn holds(ledger: &MoveLedger) -> bool {
        let dimension = ledger.dimension();
        ledger.moves().iter().all(|cell| cell.in_bounds(dimension))
    }

    fn description() -> &'static str {
        "Every move lies within the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    #[test]
    fn test_full_board_holds() {
        let mut ledger = MoveLedger::new(3).unwrap();
        for row in 0..3 {
            for col in 0..3 {
                ledger.push(Cell::new(row, col));
            }
        }
        assert!(BoundedLedgerInvariant::holds(&ledger));
        assert!(InBoundsInvariant::holds(&ledger));
    }

    #[test]
    fn test_out_of_range_violates() {
        let mut ledger = MoveLedger::new(3).unwrap();
        ledger.moves_mut().push(Cell::new(0, 3));
        assert!(!InBoundsInvariant::holds(&ledger));
    }
}
