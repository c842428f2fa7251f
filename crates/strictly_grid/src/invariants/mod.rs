//! First-class invariants for the move ledger.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. They are testable independently and are checked by the move
//! contract's postcondition.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples of two to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod bounded;
pub mod index_consistent;
pub mod unique_cells;

pub use bounded::{BoundedLedgerInvariant, InBoundsInvariant};
pub use index_consistent::IndexConsistentInvariant;
pub use unique_cells::UniqueCellsInvariant;

/// All ledger invariants as a composable set.
pub type LedgerInvariants = (
    UniqueCellsInvariant,
    BoundedLedgerInvariant,
    InBoundsInvariant,
    IndexConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::MoveLedger;
    use crate::types::Cell;

    #[test]
    fn test_invariant_set_holds_for_empty_ledger() {
        let ledger = MoveLedger::new(3).unwrap();
        assert!(LedgerInvariants::check_all(&ledger).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut ledger = MoveLedger::new(3).unwrap();
        ledger.push(Cell::new(0, 0));
        ledger.push(Cell::new(1, 1));
        ledger.push(Cell::new(2, 0));
        assert!(LedgerInvariants::check_all(&ledger).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut ledger = MoveLedger::new(3).unwrap();
        ledger.push(Cell::new(0, 0));
        // Duplicate entry that bypasses the occupancy index.
        ledger.moves_mut().push(Cell::new(0, 0));

        let violations = LedgerInvariants::check_all(&ledger).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        let ledger = MoveLedger::new(4).unwrap();
        type TwoInvariants = (UniqueCellsInvariant, BoundedLedgerInvariant);
        assert!(TwoInvariants::check_all(&ledger).is_ok());
    }
}
