//! Index consistency invariant: the occupancy index mirrors the ledger.

use super::Invariant;
use crate::ledger::MoveLedger;

/// Invariant: the occupancy index agrees with the ledger.
///
/// Every ledger entry `i` at cell `c` has `index[c] == i`, and the index
/// holds exactly as many occupied slots as the ledger has entries.
pub struct IndexConsistentInvariant;

impl Invariant<MoveLedger> for IndexConsistentInvariant {
    fn holds(ledger: &MoveLedger) -> bool {
        let occupied = ledger.occupancy().iter().flatten().count();
        occupied == ledger.len()
            && ledger
                .moves()
                .iter()
                .enumerate()
                .all(|(position, cell)| ledger.position_of(*cell) == Some(position))
    }

    fn description() -> &'static str {
        "Occupancy index matches ledger entries"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    #[test]
    fn test_pushed_moves_hold() {
        let mut ledger = MoveLedger::new(3).unwrap();
        ledger.push(Cell::new(2, 1));
        ledger.push(Cell::new(0, 0));
        assert!(IndexConsistentInvariant::holds(&ledger));
    }

    #[test]
    fn test_stale_index_violates() {
        let mut ledger = MoveLedger::new(3).unwrap();
        ledger.push(Cell::new(2, 1));
        ledger.occupancy_mut()[0] = Some(5);
        assert!(!IndexConsistentInvariant::holds(&ledger));
    }
}
