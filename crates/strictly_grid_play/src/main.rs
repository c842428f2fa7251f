//! Strictly Grid - terminal game
//!
//! Loads settings, applies command-line overrides and runs the game loop.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::path::Path;
use strictly_grid::{FirstEmpty, MovePolicy, UniformRandom};
use strictly_grid_play::cli::{Cli, Command, PolicyArg};
use strictly_grid_play::{App, GameSession, GameSettings, PlayMode};
use tokio::io::BufReader;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            dimension,
            two_player,
            first,
            mark,
            delay_ms,
            policy,
            seed,
        } => {
            let mut settings = GameSettings::load_or_default(&config)?;
            if let Some(dimension) = dimension {
                settings.set_dimension(dimension);
            }
            if two_player {
                settings.set_mode(PlayMode::TwoPlayer);
            }
            if let Some(first) = first {
                settings.set_first_player(first.into());
            }
            if let Some(mark) = mark {
                settings.set_player_one_mark(mark.into());
            }
            if let Some(delay_ms) = delay_ms {
                settings.set_automated_delay_ms(delay_ms);
            }
            run_play(settings, make_policy(policy, seed)).await
        }
        Command::InitConfig { config, force } => init_config(&config, force),
    }
}

fn make_policy(policy: PolicyArg, seed: Option<u64>) -> Box<dyn MovePolicy + Send> {
    match (policy, seed) {
        (PolicyArg::FirstEmpty, _) => Box::new(FirstEmpty),
        (PolicyArg::Random, Some(seed)) => Box::new(UniformRandom::seeded(seed)),
        (PolicyArg::Random, None) => Box::new(UniformRandom::new()),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip_all, fields(dimension = *settings.dimension(), mode = %settings.mode()))]
async fn run_play(settings: GameSettings, policy: Box<dyn MovePolicy + Send>) -> Result<()> {
    let session = GameSession::new(settings)?;
    let mut app = App::new(session, policy, tokio::io::stdout());
    app.run(BufReader::new(tokio::io::stdin())).await
}

/// Write default settings
#[instrument(skip(path), fields(path = %path.display()))]
fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists, pass --force to overwrite",
            path.display()
        );
    }
    GameSettings::default().save(path)?;
    info!("Default settings written");
    println!("Wrote {}", path.display());
    Ok(())
}
