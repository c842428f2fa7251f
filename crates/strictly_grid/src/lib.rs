//! Strictly Grid - game-state engine for N×N tic-tac-toe
//!
//! The engine tracks an ordered ledger of moves, decides win/draw outcomes
//! across rows, columns and both diagonals for any board dimension ≥ 3, and
//! picks moves for an automated opponent.
//!
//! # Architecture
//!
//! - **Ledger**: ordered moves, the single source of truth for the board
//! - **Rules**: pure scoring over `(ledger, first mover)`
//! - **Contracts**: pre/postconditions every submitted move goes through
//! - **Policy**: pluggable automated-move selection
//!
//! # Example
//!
//! ```
//! use strictly_grid::{GameEngine, Player, WinDirection, WinState};
//!
//! # fn example() -> Result<(), strictly_grid::EngineError> {
//! let mut engine = GameEngine::new(3)?;
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
//!     engine.submit_move(row, col);
//! }
//! assert_eq!(engine.compute_win_state(Player::PlayerOne), WinState::PlayerOneWins);
//! assert_eq!(engine.win_direction(), Some(WinDirection::Row));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod engine;
mod error;
pub mod invariants;
mod ledger;
mod outcome;
pub mod policy;
pub mod rules;
mod types;

pub use action::MoveError;
pub use engine::{GameEngine, Snapshot};
pub use error::{EngineError, EngineErrorKind};
pub use ledger::{MAX_DIMENSION, MIN_DIMENSION, MoveLedger};
pub use outcome::{Evaluation, WinDirection, WinState};
pub use policy::{FirstEmpty, MovePolicy, UniformRandom};
pub use types::{Cell, Mark, Move, Player, TurnOrder, player_at};
