//! Strictly Grid Play - terminal front end for the strictly_grid engine
//!
//! Everything the engine deliberately leaves to its callers lives here:
//!
//! - **Settings**: persisted first player, Player 1 symbol, play mode
//! - **Session**: turn arbitration and game-over tracking around one engine
//! - **Scheduler**: cancellable delayed automated move
//! - **Render / Input**: plain-text board and typed commands
//! - **App**: the line-based game loop

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod input;
pub mod render;
pub mod scheduler;
pub mod session;
pub mod settings;

pub use app::App;
pub use scheduler::{AutomatedMoveScheduler, ScheduledMove};
pub use session::{GameSession, PlayOutcome};
pub use settings::{GameSettings, PlayMode, SettingsError};
