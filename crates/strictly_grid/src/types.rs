//! Core domain types for the grid game.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Logical player in the game.
///
/// Which player occupies the even ledger positions is decided by the
/// externally supplied first mover, never by the mark a player draws.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Player {
    /// The first logical player ("Player 1").
    #[default]
    #[display("Player 1")]
    PlayerOne,
    /// The second logical player ("Player 2").
    #[display("Player 2")]
    PlayerTwo,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::PlayerOne => Player::PlayerTwo,
            Player::PlayerTwo => Player::PlayerOne,
        }
    }
}

/// Symbol drawn on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Mark {
    /// The "X" symbol.
    #[default]
    #[display("X")]
    X,
    /// The "O" symbol.
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the board, addressed by zero-based row and column.
///
/// Every recorded move is exactly one cell, so the ledger stores cells.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
)]
#[display("({row}, {col})")]
pub struct Cell {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub col: usize,
}

impl Cell {
    /// Creates a new cell.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns true if the cell lies on a board of the given dimension.
    pub fn in_bounds(&self, dimension: usize) -> bool {
        self.row < dimension && self.col < dimension
    }

    /// Row-major index of the cell on a board of the given dimension.
    pub(crate) fn index(&self, dimension: usize) -> usize {
        self.row * dimension + self.col
    }

    /// Inverse of [`Cell::index`].
    pub(crate) fn from_index(index: usize, dimension: usize) -> Self {
        Self::new(index / dimension, index % dimension)
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// A move is a single placed mark, identified by its cell.
pub type Move = Cell;

/// Turn-order settings supplied from persisted configuration.
///
/// Only `first_mover` affects win logic. `player_one_mark` decides which
/// symbol is drawn for which logical player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TurnOrder {
    /// Player occupying the even ledger positions.
    pub first_mover: Player,
    /// Symbol used by Player One.
    pub player_one_mark: Mark,
}

impl TurnOrder {
    /// Creates turn-order settings.
    pub fn new(first_mover: Player, player_one_mark: Mark) -> Self {
        Self {
            first_mover,
            player_one_mark,
        }
    }

    /// Player who made (or will make) the move at `ledger_index`.
    pub fn player_at(&self, ledger_index: usize) -> Player {
        player_at(ledger_index, self.first_mover)
    }

    /// Symbol drawn by a logical player.
    pub fn mark_of(&self, player: Player) -> Mark {
        match player {
            Player::PlayerOne => self.player_one_mark,
            Player::PlayerTwo => self.player_one_mark.opponent(),
        }
    }

    /// Symbol to draw for the ledger entry at `ledger_index`.
    pub fn mark_at(&self, ledger_index: usize) -> Mark {
        self.mark_of(self.player_at(ledger_index))
    }
}

/// Parity rule: even positions belong to the first mover, odd ones to the other player.
pub fn player_at(ledger_index: usize, first_mover: Player) -> Player {
    if ledger_index % 2 == 0 {
        first_mover
    } else {
        first_mover.opponent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parity_rule() {
        assert_eq!(player_at(0, Player::PlayerOne), Player::PlayerOne);
        assert_eq!(player_at(1, Player::PlayerOne), Player::PlayerTwo);
        assert_eq!(player_at(0, Player::PlayerTwo), Player::PlayerTwo);
        assert_eq!(player_at(3, Player::PlayerTwo), Player::PlayerOne);
    }

    #[test]
    fn test_marks_follow_player_one_symbol() {
        let order = TurnOrder::new(Player::PlayerTwo, Mark::O);
        // Player Two moves first and draws X.
        assert_eq!(order.mark_at(0), Mark::X);
        assert_eq!(order.mark_at(1), Mark::O);
        assert_eq!(order.mark_of(Player::PlayerOne), Mark::O);
    }

    #[test]
    fn test_cell_index_roundtrip() {
        let cell = Cell::new(2, 1);
        assert_eq!(cell.index(4), 9);
        assert_eq!(Cell::from_index(9, 4), cell);
        assert!(cell.in_bounds(3));
        assert!(!Cell::new(3, 0).in_bounds(3));
    }

    #[test]
    fn test_display() {
        assert_eq!(Player::PlayerTwo.to_string(), "Player 2");
        assert_eq!(Mark::O.to_string(), "O");
        assert_eq!(Cell::new(0, 2).to_string(), "(0, 2)");
    }
}
