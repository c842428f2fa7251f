//! Win/draw outcome types.

use crate::types::{Cell, Player};
use derive_getters::Getters;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Result of scoring the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
pub enum WinState {
    /// No line is complete and free cells remain.
    #[default]
    #[display("Pending")]
    Pending,
    /// Board is full with no complete line.
    #[display("Draw")]
    Draw,
    /// Player One owns a complete line.
    #[display("Player 1 wins")]
    PlayerOneWins,
    /// Player Two owns a complete line.
    #[display("Player 2 wins")]
    PlayerTwoWins,
}

impl WinState {
    /// Win state reporting a victory for `player`.
    pub fn for_winner(player: Player) -> Self {
        match player {
            Player::PlayerOne => WinState::PlayerOneWins,
            Player::PlayerTwo => WinState::PlayerTwoWins,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            WinState::PlayerOneWins => Some(Player::PlayerOne),
            WinState::PlayerTwoWins => Some(Player::PlayerTwo),
            WinState::Pending | WinState::Draw => None,
        }
    }

    /// Returns true if a player has won.
    pub fn is_win(&self) -> bool {
        self.winner().is_some()
    }

    /// Returns true if the game is over (win or draw).
    pub fn is_over(&self) -> bool {
        !matches!(self, WinState::Pending)
    }
}

/// Orientation of a winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum WinDirection {
    /// A full row.
    #[display("row")]
    Row,
    /// A full column.
    #[display("column")]
    Column,
    /// Cells where row == col.
    #[display("leading diagonal")]
    LeadingDiagonal,
    /// Cells where row + col == N - 1.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

/// Everything one scan of the ledger produces.
///
/// `direction` and `winning_cell` are populated together, and only when
/// `state` is a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct Evaluation {
    /// Who won, or whether the game is drawn or still pending.
    state: WinState,
    /// Orientation of the reported winning line.
    direction: Option<WinDirection>,
    /// First cell of the reported winning line.
    winning_cell: Option<Cell>,
}

impl Evaluation {
    /// Evaluation with no complete line.
    pub fn unresolved(state: WinState) -> Self {
        debug_assert!(!state.is_win());
        Self {
            state,
            direction: None,
            winning_cell: None,
        }
    }

    /// Evaluation reporting a winning line.
    pub fn won(winner: Player, direction: WinDirection, winning_cell: Cell) -> Self {
        Self {
            state: WinState::for_winner(winner),
            direction: Some(direction),
            winning_cell: Some(winning_cell),
        }
    }
}
