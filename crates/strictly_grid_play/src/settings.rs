//! Persisted game preferences.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_grid::{Mark, Player};
use tracing::{debug, info, instrument};

/// Whether Player Two is the automated opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "kebab-case")]
pub enum PlayMode {
    /// Player Two is played by the engine.
    #[default]
    #[display("single player")]
    SinglePlayer,
    /// Two humans share the board.
    #[display("two player")]
    TwoPlayer,
}

/// User-configurable settings for a game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameSettings {
    /// Board dimension N.
    #[serde(default = "default_dimension")]
    dimension: usize,

    /// Who moves first in each new game.
    #[serde(default)]
    first_player: Player,

    /// Symbol drawn by Player One.
    #[serde(default)]
    player_one_mark: Mark,

    /// Single-player (vs. automated) or two-player.
    #[serde(default)]
    mode: PlayMode,

    /// Delay before the automated opponent plays.
    #[serde(default = "default_automated_delay_ms")]
    automated_delay_ms: u64,
}

#[instrument]
fn default_dimension() -> usize {
    3
}

#[instrument]
fn default_automated_delay_ms() -> u64 {
    1500
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            dimension: default_dimension(),
            first_player: Player::default(),
            player_one_mark: Mark::default(),
            mode: PlayMode::default(),
            automated_delay_ms: default_automated_delay_ms(),
        }
    }
}

impl GameSettings {
    /// Creates settings with defaults.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SettingsError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| SettingsError::new(format!("Failed to parse settings: {}", e)))?;

        info!(dimension = settings.dimension, mode = %settings.mode, "Settings loaded");
        Ok(settings)
    }

    /// Loads settings, falling back to defaults when the file does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Settings file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Writes settings to a TOML file.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SettingsError::new(format!("Failed to serialize settings: {}", e)))?;
        std::fs::write(path.as_ref(), content)
            .map_err(|e| SettingsError::new(format!("Failed to write settings file: {}", e)))?;
        info!("Settings saved");
        Ok(())
    }

    /// Returns true when Player Two is automated.
    pub fn is_single_player(&self) -> bool {
        self.mode == PlayMode::SinglePlayer
    }

    /// Overrides the board dimension.
    pub fn set_dimension(&mut self, dimension: usize) {
        self.dimension = dimension;
    }

    /// Overrides who moves first.
    pub fn set_first_player(&mut self, first_player: Player) {
        self.first_player = first_player;
    }

    /// Overrides Player One's symbol.
    pub fn set_player_one_mark(&mut self, mark: Mark) {
        self.player_one_mark = mark;
    }

    /// Overrides the play mode.
    pub fn set_mode(&mut self, mode: PlayMode) {
        self.mode = mode;
    }

    /// Overrides the automated-move delay.
    pub fn set_automated_delay_ms(&mut self, delay_ms: u64) {
        self.automated_delay_ms = delay_ms;
    }
}

/// Settings error.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = GameSettings::new();
        assert_eq!(*settings.dimension(), 3);
        assert_eq!(*settings.first_player(), Player::PlayerOne);
        assert_eq!(*settings.player_one_mark(), Mark::X);
        assert!(settings.is_single_player());
        assert_eq!(*settings.automated_delay_ms(), 1500);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let settings: GameSettings = toml::from_str("dimension = 4\nmode = \"two-player\"\n").unwrap();
        assert_eq!(*settings.dimension(), 4);
        assert_eq!(*settings.mode(), PlayMode::TwoPlayer);
        assert_eq!(*settings.first_player(), Player::PlayerOne);
    }
}
