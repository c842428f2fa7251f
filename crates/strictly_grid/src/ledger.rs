//! The ordered move ledger.
//!
//! The ledger is the single source of truth for board state. Ownership of a
//! cell is never stored; it is derived from the cell's position in the
//! ledger and the first mover (see [`crate::player_at`]).

use crate::error::{EngineError, EngineErrorKind};
use crate::types::{Cell, Player, player_at};
use tracing::{instrument, warn};

/// Smallest supported board dimension.
pub const MIN_DIMENSION: usize = 3;

/// Largest supported board dimension.
pub const MAX_DIMENSION: usize = 256;

/// Ordered record of accepted moves for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveLedger {
    dimension: usize,
    moves: Vec<Cell>,
    /// Ledger position occupying each cell, row-major.
    occupancy: Vec<Option<usize>>,
}

impl MoveLedger {
    /// Creates an empty ledger for an N×N board.
    ///
    /// # Errors
    ///
    /// Returns [`EngineErrorKind::InvalidDimension`] unless
    /// `MIN_DIMENSION <= dimension <= MAX_DIMENSION`.
    #[instrument]
    pub fn new(dimension: usize) -> Result<Self, EngineError> {
        let cells = (MIN_DIMENSION..=MAX_DIMENSION)
            .contains(&dimension)
            .then(|| dimension.checked_mul(dimension))
            .flatten();
        let Some(cells) = cells else {
            warn!(dimension, "Rejected board dimension");
            return Err(EngineError::new(EngineErrorKind::InvalidDimension(dimension)));
        };

        Ok(Self {
            dimension,
            moves: Vec::with_capacity(cells),
            occupancy: vec![None; cells],
        })
    }

    /// Board dimension N.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of cells on the board (N²).
    pub fn capacity(&self) -> usize {
        self.dimension * self.dimension
    }

    /// Number of recorded moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true if no move has been recorded.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns true if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.moves.len() >= self.capacity()
    }

    /// Recorded moves in play order.
    pub fn moves(&self) -> &[Cell] {
        &self.moves
    }

    /// Returns true if some ledger entry occupies the cell.
    pub fn contains(&self, cell: Cell) -> bool {
        self.position_of(cell).is_some()
    }

    /// Ledger position of the move that occupies `cell`, if any.
    pub fn position_of(&self, cell: Cell) -> Option<usize> {
        if !cell.in_bounds(self.dimension) {
            return None;
        }
        self.occupancy
            .get(cell.index(self.dimension))
            .copied()
            .flatten()
    }

    /// Logical player occupying `cell`, derived from ledger parity.
    pub fn owner_of(&self, cell: Cell, first_mover: Player) -> Option<Player> {
        self.position_of(cell)
            .map(|position| player_at(position, first_mover))
    }

    /// Unoccupied cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let dimension = self.dimension;
        self.occupancy
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_none())
            .map(move |(index, _)| Cell::from_index(index, dimension))
    }

    /// Appends a move without validation (use the engine for checked moves).
    pub(crate) fn push(&mut self, cell: Cell) {
        let index = cell.index(self.dimension);
        self.occupancy[index] = Some(self.moves.len());
        self.moves.push(cell);
    }

    /// Removes every move.
    pub(crate) fn clear(&mut self) {
        self.moves.clear();
        self.occupancy.iter_mut().for_each(|slot| *slot = None);
    }

    /// Occupancy index, row-major.
    pub(crate) fn occupancy(&self) -> &[Option<usize>] {
        &self.occupancy
    }

    #[cfg(test)]
    pub(crate) fn occupancy_mut(&mut self) -> &mut Vec<Option<usize>> {
        &mut self.occupancy
    }

    #[cfg(test)]
    pub(crate) fn moves_mut(&mut self) -> &mut Vec<Cell> {
        &mut self.moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_ledger() {
        let ledger = MoveLedger::new(3).unwrap();
        assert!(ledger.is_empty());
        assert!(!ledger.is_full());
        assert_eq!(ledger.capacity(), 9);
        assert_eq!(ledger.empty_cells().count(), 9);
    }

    #[test]
    fn test_push_tracks_position_and_owner() {
        let mut ledger = MoveLedger::new(3).unwrap();
        ledger.push(Cell::new(1, 1));
        ledger.push(Cell::new(0, 2));

        assert_eq!(ledger.position_of(Cell::new(1, 1)), Some(0));
        assert_eq!(ledger.position_of(Cell::new(0, 2)), Some(1));
        assert_eq!(
            ledger.owner_of(Cell::new(0, 2), Player::PlayerOne),
            Some(Player::PlayerTwo)
        );
        assert_eq!(
            ledger.owner_of(Cell::new(1, 1), Player::PlayerTwo),
            Some(Player::PlayerTwo)
        );
        assert_eq!(ledger.owner_of(Cell::new(2, 2), Player::PlayerOne), None);
    }

    #[test]
    fn test_out_of_range_is_unoccupied() {
        let ledger = MoveLedger::new(3).unwrap();
        assert_eq!(ledger.position_of(Cell::new(3, 0)), None);
        assert!(!ledger.contains(Cell::new(0, 7)));
    }

    #[test]
    fn test_empty_cells_row_major() {
        let mut ledger = MoveLedger::new(3).unwrap();
        ledger.push(Cell::new(0, 0));
        ledger.push(Cell::new(0, 2));
        let empty: Vec<_> = ledger.empty_cells().take(2).collect();
        assert_eq!(empty, vec![Cell::new(0, 1), Cell::new(1, 0)]);
    }

    #[test]
    fn test_rejects_unsupported_dimensions() {
        for dimension in [0, 1, 2, MAX_DIMENSION + 1, usize::MAX] {
            let err = MoveLedger::new(dimension).unwrap_err();
            assert_eq!(err.kind, EngineErrorKind::InvalidDimension(dimension));
        }
        assert_eq!(MoveLedger::new(MAX_DIMENSION).unwrap().capacity(), 65_536);
    }

    #[test]
    fn test_clear() {
        let mut ledger = MoveLedger::new(3).unwrap();
        ledger.push(Cell::new(2, 2));
        ledger.clear();
        assert!(ledger.is_empty());
        assert!(!ledger.contains(Cell::new(2, 2)));
    }
}
