//! Unique cells invariant: no cell appears twice in the ledger.

use super::Invariant;
use crate::ledger::MoveLedger;
use std::collections::HashSet;

/// Invariant: every ledger entry names a distinct cell.
pub struct UniqueCellsInvariant;

impl Invariant<MoveLedger> for UniqueCellsInvariant {
    fn holds(ledger: &MoveLedger) -> bool {
        let mut seen = HashSet::with_capacity(ledger.len());
        ledger.moves().iter().all(|cell| seen.insert(*cell))
    }

    fn description() -> &'static str {
        "No two ledger entries share a cell"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    #[test]
    fn test_distinct_cells_hold() {
        let mut ledger = MoveLedger::new(3).unwrap();
        ledger.push(Cell::new(0, 0));
        ledger.push(Cell::new(0, 1));
        assert!(UniqueCellsInvariant::holds(&ledger));
    }

    #[test]
    fn test_duplicate_violates() {
        let mut ledger = MoveLedger::new(3).unwrap();
        ledger.push(Cell::new(1, 1));
        ledger.moves_mut().push(Cell::new(1, 1));
        assert!(!UniqueCellsInvariant::holds(&ledger));
    }
}
