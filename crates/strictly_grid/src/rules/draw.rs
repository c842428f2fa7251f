//! Draw detection.

use super::win::find_winning_line;
use crate::ledger::MoveLedger;
use crate::types::Player;
use tracing::instrument;

/// Returns true if the board is full and nobody owns a complete line.
#[instrument(skip(ledger), fields(moves = ledger.len()))]
pub fn is_draw(ledger: &MoveLedger, first_mover: Player) -> bool {
    ledger.is_full() && find_winning_line(ledger, first_mover).is_none()
}
