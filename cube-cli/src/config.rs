use anyhow::{anyhow, Context, Result};
use clap::Parser;
use cube_core::{AiConfig, Difficulty, Player};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Longest AI pause accepted before a move
const MAX_AI_DELAY_MS: u64 = 10_000;

#[derive(Parser, Debug, Clone)]
#[command(name = "cubetoe")]
#[command(about = "3x3x3 tic-tac-toe in the terminal")]
#[command(long_about = "Play 3D tic-tac-toe on a 3x3x3 cube against a friend or the AI.

Every game runs until all 27 cells are filled; the player who completed
more lines wins. Enter moves as `x y z` with each axis in 0..=2.")]
pub struct Args {
    /// Optional TOML file with default settings
    #[arg(long, env = "CUBETOE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Let the AI play O
    #[arg(long, env = "CUBETOE_AI", num_args = 0..=1, default_missing_value = "true")]
    pub ai: Option<bool>,

    /// AI difficulty (easy, hard)
    #[arg(long, env = "CUBETOE_DIFFICULTY")]
    pub difficulty: Option<Difficulty>,

    /// Pause before the AI moves, in milliseconds
    #[arg(long, env = "CUBETOE_AI_DELAY_MS")]
    pub ai_delay_ms: Option<u64>,

    /// Seed for reproducible AI moves
    #[arg(long, env = "CUBETOE_SEED")]
    pub seed: Option<u64>,

    /// Run this many unattended AI-vs-AI games and print the tally
    #[arg(long, env = "CUBETOE_SELFPLAY")]
    pub selfplay: Option<u32>,

    /// Start with the guided tutorial
    #[arg(long, env = "CUBETOE_TUTORIAL", num_args = 0..=1, default_missing_value = "true")]
    pub tutorial: Option<bool>,

    /// Ring the terminal bell when a line is completed or the game ends
    #[arg(long, env = "CUBETOE_SOUND", num_args = 0..=1, default_missing_value = "true")]
    pub sound: Option<bool>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "CUBETOE_LOG_LEVEL")]
    pub log_level: Option<String>,
}

/// Settings as read from a config file; every key is optional
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub ai: Option<bool>,
    pub difficulty: Option<Difficulty>,
    pub ai_delay_ms: Option<u64>,
    pub seed: Option<u64>,
    pub selfplay: Option<u32>,
    pub tutorial: Option<bool>,
    pub sound: Option<bool>,
    pub log_level: Option<String>,
}

impl FileConfig {
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

/// Resolved settings: command line and environment over file over defaults
#[derive(Debug, Clone)]
pub struct Config {
    pub ai: AiConfig,
    pub ai_delay_ms: u64,
    pub seed: Option<u64>,
    pub selfplay: Option<u32>,
    pub tutorial: bool,
    pub sound: bool,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ai: AiConfig::default(),
            ai_delay_ms: 300,
            seed: None,
            selfplay: None,
            tutorial: false,
            sound: false,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn load(args: Args) -> Result<Self> {
        let file = match &args.config {
            Some(path) => FileConfig::from_path(path)?,
            None => FileConfig::default(),
        };
        Ok(Self::merge(args, file))
    }

    pub fn merge(args: Args, file: FileConfig) -> Self {
        let defaults = Self::default();
        Self {
            ai: AiConfig {
                enabled: args.ai.or(file.ai).unwrap_or(defaults.ai.enabled),
                difficulty: args
                    .difficulty
                    .or(file.difficulty)
                    .unwrap_or(defaults.ai.difficulty),
                player: Player::O,
            },
            ai_delay_ms: args
                .ai_delay_ms
                .or(file.ai_delay_ms)
                .unwrap_or(defaults.ai_delay_ms),
            seed: args.seed.or(file.seed),
            selfplay: args.selfplay.or(file.selfplay),
            tutorial: args.tutorial.or(file.tutorial).unwrap_or(defaults.tutorial),
            sound: args.sound.or(file.sound).unwrap_or(defaults.sound),
            log_level: args.log_level.or(file.log_level).unwrap_or(defaults.log_level),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.selfplay == Some(0) {
            return Err(anyhow!("selfplay must be greater than 0"));
        }

        if self.ai_delay_ms > MAX_AI_DELAY_MS {
            return Err(anyhow!(
                "ai_delay_ms must be at most {} (got {})",
                MAX_AI_DELAY_MS,
                self.ai_delay_ms
            ));
        }

        if self.log_level.trim().is_empty() {
            return Err(anyhow!("log_level cannot be empty"));
        }

        Ok(())
    }

    pub fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.ai_delay_ms)
    }
}
