//! A single game session: the engine plus turn arbitration and game-over tracking.

use crate::scheduler::ScheduledMove;
use crate::settings::GameSettings;
use anyhow::Result;
use strictly_grid::{
    Cell, GameEngine, Mark, MoveError, Player, TurnOrder, WinDirection, WinState,
};
use tracing::{debug, info, instrument, warn};

/// What happened after a move was played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The move was ignored (game over, cell taken, out of range...).
    Rejected,
    /// The move was recorded and play continues.
    Continue {
        /// Player whose turn it is now.
        next: Player,
    },
    /// The move completed a line.
    Won {
        /// The winning player.
        winner: Player,
        /// Orientation of the winning line.
        direction: WinDirection,
        /// First cell of the winning line.
        cell: Cell,
    },
    /// The move filled the board without a winner.
    Draw,
}

/// Owns the engine for one game and everything the board view tracked around it.
#[derive(Debug)]
pub struct GameSession {
    engine: GameEngine,
    settings: GameSettings,
    state: WinState,
    /// Bumped on every restart and every finished game so stale scheduled
    /// automated moves can be recognized.
    generation: u64,
}

impl GameSession {
    /// Creates a session from settings.
    #[instrument(skip(settings), fields(dimension = *settings.dimension()))]
    pub fn new(settings: GameSettings) -> Result<Self> {
        let engine = GameEngine::with_first_mover(*settings.dimension(), *settings.first_player())?;
        info!(mode = %settings.mode(), first = %settings.first_player(), "Session created");
        Ok(Self {
            engine,
            settings,
            state: WinState::Pending,
            generation: 0,
        })
    }

    /// The engine backing this session.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// The session's settings.
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// Outcome of the last accepted move.
    pub fn state(&self) -> WinState {
        self.state
    }

    /// Returns true once a player has won or the board is drawn.
    pub fn is_game_over(&self) -> bool {
        self.state.is_over()
    }

    /// Current generation; changes whenever a scheduled automated move must be discarded.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.engine.next_player()
    }

    /// Turn order of the game in play.
    pub fn turn_order(&self) -> TurnOrder {
        TurnOrder::new(self.engine.first_mover(), *self.settings.player_one_mark())
    }

    /// Symbol drawn for the ledger entry at `index`.
    pub fn mark_at(&self, index: usize) -> Mark {
        self.turn_order().mark_at(index)
    }

    /// Returns true when the engine should play the next move.
    pub fn is_automated_turn(&self) -> bool {
        self.settings.is_single_player()
            && !self.is_game_over()
            && self.engine.has_empty_cell()
            && self.current_player() == Player::PlayerTwo
    }

    /// Returns true if a scheduled automated move still applies to this game.
    ///
    /// Firings from before a restart or the end of a game are stale.
    pub fn accepts(&self, scheduled: ScheduledMove) -> bool {
        scheduled.generation == self.generation && self.is_automated_turn()
    }

    /// Plays a move for whoever's turn it is.
    #[instrument(skip(self), fields(cell = %cell))]
    pub fn play(&mut self, cell: Cell) -> PlayOutcome {
        if self.is_game_over() {
            debug!("Move ignored, game is over");
            return PlayOutcome::Rejected;
        }

        if let Err(e) = self.engine.try_submit(cell) {
            log_rejection(&e);
            return PlayOutcome::Rejected;
        }

        let state = self.engine.compute_win_state(self.engine.first_mover());
        self.state = state;

        if let (Some(winner), Some(direction), Some(cell)) = (
            state.winner(),
            self.engine.win_direction(),
            self.engine.winning_cell(),
        ) {
            self.generation += 1;
            info!(%winner, %direction, %cell, "Game won");
            PlayOutcome::Won {
                winner,
                direction,
                cell,
            }
        } else if state == WinState::Draw {
            self.generation += 1;
            info!("Game drawn");
            PlayOutcome::Draw
        } else {
            PlayOutcome::Continue {
                next: self.current_player(),
            }
        }
    }

    /// Picks the automated opponent's move without playing it.
    #[instrument(skip(self))]
    pub fn automated_move(&self) -> Result<Cell> {
        Ok(self.engine.pick_automated_move()?)
    }

    /// Starts a new game with the current settings.
    ///
    /// A changed board dimension gets a fresh engine.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> Result<()> {
        let dimension = *self.settings.dimension();
        if self.engine.dimension() == dimension {
            self.engine.reset();
            self.engine.set_first_mover(*self.settings.first_player());
        } else {
            self.engine = GameEngine::with_first_mover(dimension, *self.settings.first_player())?;
        }
        self.state = WinState::Pending;
        self.generation += 1;
        info!(generation = self.generation, "Session restarted");
        Ok(())
    }

    /// Replaces the settings. Dimension and first player take effect from
    /// the next restart; mode and symbols apply immediately.
    #[instrument(skip(self, settings))]
    pub fn update_settings(&mut self, settings: GameSettings) {
        self.settings = settings;
    }
}

fn log_rejection(error: &MoveError) {
    if error.is_game_condition() {
        debug!(%error, "Move rejected");
    } else {
        warn!(%error, "Move rejected, check coordinate mapping");
    }
}
