//! Session configuration.
//!
//! Values are layered: built-in defaults, then `BLOCKFALL_*` environment
//! variables, then command-line flags. Unparsable environment values fall back
//! to the default; command-line values are validated by clap.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;

use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, TICK_MS};

pub const ENV_WIDTH: &str = "BLOCKFALL_WIDTH";
pub const ENV_HEIGHT: &str = "BLOCKFALL_HEIGHT";
pub const ENV_TICK_MS: &str = "BLOCKFALL_TICK_MS";
pub const ENV_SEED: &str = "BLOCKFALL_SEED";
pub const ENV_LOG_PATH: &str = "BLOCKFALL_LOG_PATH";

/// The I piece spawns across columns 3..=6.
pub const MIN_WIDTH: usize = 7;
/// The L piece spawns across rows 0..=2.
pub const MIN_HEIGHT: usize = 3;
pub const MAX_DIMENSION: usize = 64;
pub const MIN_TICK_MS: u32 = 16;
pub const MAX_TICK_MS: u32 = 10_000;

/// Command-line flags. Every flag overrides its environment variable.
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Board width in columns.
    #[arg(long)]
    pub width: Option<usize>,
    /// Board height in rows.
    #[arg(long)]
    pub height: Option<usize>,
    /// Gravity interval in milliseconds.
    #[arg(long)]
    pub tick_ms: Option<u32>,
    /// Seed for the piece sequence. The same seed replays the same pieces.
    /// Example: `tui-blockfall --seed 42`.
    #[arg(short, long)]
    pub seed: Option<u64>,
    /// Append a JSON-lines event log to this file.
    #[arg(long = "log", value_name = "PATH")]
    pub log_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub tick_ms: u32,
    /// `None` means a fresh random seed per session.
    pub seed: Option<u64>,
    pub log_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH as usize,
            height: BOARD_HEIGHT as usize,
            tick_ms: TICK_MS,
            seed: None,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Parse the command line, layer it over the environment and validate.
    pub fn load() -> Result<Self> {
        let cli = Cli::parse();
        let config = Self::from_env().with_cli(&cli);
        config.validate().context("invalid configuration")?;
        Ok(config)
    }

    /// Create from `BLOCKFALL_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] but reading through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let width = lookup(ENV_WIDTH)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.width);
        let height = lookup(ENV_HEIGHT)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.height);
        let tick_ms = lookup(ENV_TICK_MS)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.tick_ms);
        let seed = lookup(ENV_SEED).and_then(|s| s.trim().parse().ok());
        let log_path = lookup(ENV_LOG_PATH)
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        Self {
            width,
            height,
            tick_ms,
            seed,
            log_path,
        }
    }

    /// Override with any flags given on the command line.
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(width) = cli.width {
            self.width = width;
        }
        if let Some(height) = cli.height {
            self.height = height;
        }
        if let Some(tick_ms) = cli.tick_ms {
            self.tick_ms = tick_ms;
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(path) = &cli.log_path {
            self.log_path = Some(path.clone());
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_WIDTH..=MAX_DIMENSION).contains(&self.width) {
            bail!(
                "board width {} is out of range ({}..={})",
                self.width,
                MIN_WIDTH,
                MAX_DIMENSION
            );
        }
        if !(MIN_HEIGHT..=MAX_DIMENSION).contains(&self.height) {
            bail!(
                "board height {} is out of range ({}..={})",
                self.height,
                MIN_HEIGHT,
                MAX_DIMENSION
            );
        }
        if !(MIN_TICK_MS..=MAX_TICK_MS).contains(&self.tick_ms) {
            bail!(
                "tick interval {}ms is out of range ({}..={})",
                self.tick_ms,
                MIN_TICK_MS,
                MAX_TICK_MS
            );
        }
        Ok(())
    }

    pub fn tick_duration(&self) -> Duration {
        Duration::from_millis(self.tick_ms as u64)
    }
}
