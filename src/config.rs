//! Game configuration loaded from TOML.

use boggle_core::{BoardSize, QFace, SearchLimits};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Newline-separated word list.
    #[serde(default = "default_dictionary")]
    dictionary: PathBuf,

    /// Board size for rolled boards and typed configurations.
    #[serde(default)]
    board_size: BoardSize,

    /// Seed for reproducible boards.
    #[serde(default)]
    seed: Option<u64>,

    /// Time limit for the computer's turn, in milliseconds.
    #[serde(default)]
    computer_time_limit_ms: Option<u64>,

    /// How long an accepted word stays highlighted, in milliseconds.
    #[serde(default = "default_highlight_pause_ms")]
    highlight_pause_ms: u64,

    /// Whether a rolled `Q` face reads `QU`.
    #[serde(default = "default_qu_faces")]
    qu_faces: bool,
}

fn default_dictionary() -> PathBuf {
    PathBuf::from("lexicon.txt")
}

fn default_highlight_pause_ms() -> u64 {
    500
}

fn default_qu_faces() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dictionary: default_dictionary(),
            board_size: BoardSize::default(),
            seed: None,
            computer_time_limit_ms: None,
            highlight_pause_ms: default_highlight_pause_ms(),
            qu_faces: default_qu_faces(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            dictionary = %config.dictionary.display(),
            size = %config.board_size,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the dictionary path.
    pub fn with_dictionary(mut self, dictionary: impl Into<PathBuf>) -> Self {
        self.dictionary = dictionary.into();
        self
    }

    /// Overrides the board size.
    pub fn with_board_size(mut self, board_size: BoardSize) -> Self {
        self.board_size = board_size;
        self
    }

    /// Overrides the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Overrides the highlight pause.
    pub fn with_highlight_pause_ms(mut self, ms: u64) -> Self {
        self.highlight_pause_ms = ms;
        self
    }

    /// Overrides the computer's time limit.
    pub fn with_computer_time_limit_ms(mut self, ms: u64) -> Self {
        self.computer_time_limit_ms = Some(ms);
        self
    }

    /// Search limits for the computer turn, starting now.
    pub fn computer_limits(&self) -> SearchLimits {
        match self.computer_time_limit_ms {
            Some(ms) => SearchLimits::within(Duration::from_millis(ms)),
            None => SearchLimits::unlimited(),
        }
    }

    /// Highlight pause as a duration.
    pub fn highlight_pause(&self) -> Duration {
        Duration::from_millis(self.highlight_pause_ms)
    }

    /// How rolled `Q` faces are written.
    pub fn q_face(&self) -> QFace {
        if self.qu_faces { QFace::Qu } else { QFace::Bare }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
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
        let config = GameConfig::default();
        assert_eq!(config.dictionary(), &PathBuf::from("lexicon.txt"));
        assert_eq!(*config.board_size(), BoardSize::Standard);
        assert_eq!(config.highlight_pause(), Duration::from_millis(500));
        assert_eq!(config.q_face(), QFace::Qu);
        assert_eq!(config.computer_limits(), SearchLimits::unlimited());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: GameConfig = toml::from_str("board_size = \"big\"\nseed = 9\n").unwrap();
        assert_eq!(*config.board_size(), BoardSize::Big);
        assert_eq!(*config.seed(), Some(9));
        assert_eq!(*config.highlight_pause_ms(), 500);
        assert!(*config.qu_faces());
    }

    #[test]
    fn test_time_limit_sets_deadline() {
        let config = GameConfig::default().with_computer_time_limit_ms(1000);
        assert!(config.computer_limits().deadline().is_some());
    }
}
