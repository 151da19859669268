use anyhow::Result;
use clap::Parser;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod command;
mod config;
mod game;
mod selfplay;

use crate::config::{Args, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse and validate configuration
    let config = Config::load(Args::parse())?;
    config.validate()?;

    // Initialize tracing; stdout belongs to the game
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_level)?)
        .with_writer(std::io::stderr)
        .init();

    info!(
        ai = config.ai.enabled,
        difficulty = %config.ai.difficulty,
        seed = ?config.seed,
        "Starting cubetoe"
    );

    if let Some(games) = config.selfplay {
        let seed = config.seed.unwrap_or_else(rand::random);
        let tally = selfplay::run(games, config.ai.difficulty, seed);
        println!("{}", tally);
        return Ok(());
    }

    let run_result = tokio::select! {
        result = game::run(config) => result,
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received, leaving game");
            Ok(())
        }
    };

    match run_result {
        Ok(_) => Ok(()),
        Err(e) => {
            error!("Game loop failed: {}", e);
            Err(e)
        }
    }
}
