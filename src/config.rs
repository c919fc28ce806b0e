//! Game configuration loaded from TOML and overridden from the command line.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_nxn::Player as Mark;
use tracing::{debug, info, instrument};

/// Largest board the console can lay out and play.
pub const MAX_BOARD_SIZE: usize = 32;

/// Settings for one game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Rows and columns on the board; a full row, column or diagonal wins.
    board_size: usize,

    /// Mark played by the human; the AI plays the other one.
    human_mark: Mark,

    /// Whether the human makes the first move.
    human_first: bool,

    /// Print the AI's gain, risk and score grids before each AI move.
    debug: bool,

    /// Seed for the AI's tie-breaking; random when unset.
    seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 3,
            human_mark: Mark::X,
            human_first: true,
            debug: false,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        info!(board_size = config.board_size, "Config loaded successfully");
        Ok(config)
    }

    /// Builds the effective configuration: file (if present) then CLI flags.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = if cli.config.exists() {
            Self::from_file(&cli.config)?
        } else {
            info!(
                "Config file not found at {}, using defaults",
                cli.config.display()
            );
            Self::default()
        };

        if let Some(size) = cli.size {
            config.board_size = size;
        }
        if let Some(mark) = cli.human {
            config.human_mark = mark;
        }
        if cli.ai_first {
            config.human_first = false;
        }
        if cli.debug {
            config.debug = true;
        }
        if cli.seed.is_some() {
            config.seed = cli.seed;
        }

        config.validate()?;
        debug!(?config, "Resolved configuration");
        Ok(config)
    }

    /// Mark that moves first.
    pub fn first_mark(&self) -> Mark {
        if self.human_first {
            self.human_mark
        } else {
            self.human_mark.opponent()
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::new("board_size must be at least 1".to_string()));
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::new(format!(
                "board_size {} exceeds the maximum of {}",
                self.board_size, MAX_BOARD_SIZE
            )));
        }
        Ok(())
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
