//! Win detection for an N×N board.

use crate::ledger::MoveLedger;
use crate::outcome::WinDirection;
use crate::types::{Cell, Player};
use tracing::instrument;

/// One of the `2N + 2` candidate lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    /// Row with the given index.
    Row(usize),
    /// Column with the given index.
    Column(usize),
    /// Cells where row == col.
    LeadingDiagonal,
    /// Cells where row + col == N - 1.
    AntiDiagonal,
}

impl Line {
    /// Orientation reported for this line.
    pub fn direction(&self) -> WinDirection {
        match self {
            Line::Row(_) => WinDirection::Row,
            Line::Column(_) => WinDirection::Column,
            Line::LeadingDiagonal => WinDirection::LeadingDiagonal,
            Line::AntiDiagonal => WinDirection::AntiDiagonal,
        }
    }

    /// Cell at step `i` along the line.
    pub fn cell(&self, i: usize, dimension: usize) -> Cell {
        match *self {
            Line::Row(row) => Cell::new(row, i),
            Line::Column(col) => Cell::new(i, col),
            Line::LeadingDiagonal => Cell::new(i, i),
            Line::AntiDiagonal => Cell::new(i, dimension - 1 - i),
        }
    }

    /// The cells of the line, starting from its first cell.
    pub fn cells(&self, dimension: usize) -> impl Iterator<Item = Cell> + '_ {
        (0..dimension).map(move |i| self.cell(i, dimension))
    }

    /// First cell: column 0 of a row, row 0 of a column, `(0, 0)` or `(0, N-1)`.
    pub fn first_cell(&self, dimension: usize) -> Cell {
        self.cell(0, dimension)
    }
}

/// Candidate lines in scan order: rows top-to-bottom, columns left-to-right,
/// leading diagonal, anti-diagonal.
pub fn lines(dimension: usize) -> impl Iterator<Item = Line> {
    (0..dimension)
        .map(Line::Row)
        .chain((0..dimension).map(Line::Column))
        .chain([Line::LeadingDiagonal, Line::AntiDiagonal])
}

/// Returns the player owning every cell of `line`, if one does.
fn line_owner(ledger: &MoveLedger, line: &Line, first_mover: Player) -> Option<Player> {
    let dimension = ledger.dimension();
    let mut cells = line.cells(dimension);
    let owner = ledger.owner_of(cells.next()?, first_mover)?;
    cells
        .all(|cell| ledger.owner_of(cell, first_mover) == Some(owner))
        .then_some(owner)
}

/// Finds the first complete line in scan order and its owner.
///
/// When one move completes several lines, only the earliest-scanned one
/// is reported; the winner is the same either way.
#[instrument(skip(ledger), fields(moves = ledger.len()))]
pub fn find_winning_line(ledger: &MoveLedger, first_mover: Player) -> Option<(Line, Player)> {
    // A line needs N marks from one player.
    if ledger.len() + 1 < 2 * ledger.dimension() {
        return None;
    }

    lines(ledger.dimension())
        .find_map(|line| line_owner(ledger, &line, first_mover).map(|owner| (line, owner)))
}
