//! Game configuration
//!
//! Loaded from an optional JSON file; command-line flags take precedence.
//! A missing file means defaults, a broken one is an error.

use crate::error::{AppError, AppResult};
use crate::problem::Operation;
use crate::session::timer::DEFAULT_FEEDBACK_DELAY;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default config file location
pub const DEFAULT_CONFIG_PATH: &str = "config/game.json";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Operation selected at start-up
    pub default_operation: Operation,
    /// How long feedback stays on screen before the next problem
    pub feedback_delay_ms: u64,
    /// Fixed seed for reproducible sessions
    pub seed: Option<u64>,
    /// Where to write logs (raw-mode terminal can't show them)
    pub log_file: Option<PathBuf>,
    /// File this config was read from, `None` for built-in defaults
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// Values given on the command line
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub operation: Option<Operation>,
    pub feedback_delay_ms: Option<u64>,
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            default_operation: Operation::Addition,
            feedback_delay_ms: DEFAULT_FEEDBACK_DELAY.as_millis() as u64,
            seed: None,
            log_file: None,
            source: None,
        }
    }
}

impl GameConfig {
    /// Load from `path`, falling back to defaults when the file is absent
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_json(&content).map_err(|source| AppError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.source = Some(path.to_path_buf());
        config.validate()?;
        Ok(config)
    }

    fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Apply command-line values on top of the file
    pub fn with_overrides(mut self, overrides: Overrides) -> AppResult<Self> {
        if let Some(op) = overrides.operation {
            self.default_operation = op;
        }
        if let Some(ms) = overrides.feedback_delay_ms {
            self.feedback_delay_ms = ms;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        if overrides.log_file.is_some() {
            self.log_file = overrides.log_file;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn feedback_delay(&self) -> Duration {
        Duration::from_millis(self.feedback_delay_ms)
    }

    fn validate(&self) -> AppResult<()> {
        if self.feedback_delay_ms == 0 {
            return Err(AppError::InvalidConfig(
                "feedback_delay_ms must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}
