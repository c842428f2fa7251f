//! Game rules for the grid game.
//!
//! This module contains pure functions for evaluating game state
//! according to the line rules. Rules operate on the ledger alone so the
//! engine can stay a thin owner of state.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{Line, find_winning_line, lines};

use crate::ledger::MoveLedger;
use crate::outcome::{Evaluation, WinState};
use crate::types::Player;
use tracing::{debug, instrument};

/// Scores the ledger in one pass: who won, along which line, or draw/pending.
///
/// Pure over `(ledger, first_mover)`; safe at any ledger length.
#[instrument(skip(ledger), fields(moves = ledger.len()))]
pub fn evaluate(ledger: &MoveLedger, first_mover: Player) -> Evaluation {
    let dimension = ledger.dimension();

    if let Some((line, winner)) = find_winning_line(ledger, first_mover) {
        debug!(?line, %winner, "Winning line found");
        return Evaluation::won(winner, line.direction(), line.first_cell(dimension));
    }

    if ledger.is_full() {
        debug!("Board full with no winning line");
        Evaluation::unresolved(WinState::Draw)
    } else {
        Evaluation::unresolved(WinState::Pending)
    }
}
