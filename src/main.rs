use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{Config, WriteLogger};
use tick_snake::config::{GameConfig, FRAME_INTERVAL_MS};
use tick_snake::error::{AppError, ConfigError};
use tick_snake::game::GameStatus;
use tick_snake::input::GameInput;
use tick_snake::shared::{SharedGame, Ticker};
use tick_snake::terminal_runtime::{install_panic_hook, TerminalSession};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON file with game settings; flags below override it.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Grid width in cells.
    #[arg(long)]
    width: Option<u16>,

    /// Grid height in cells.
    #[arg(long)]
    height: Option<u16>,

    /// Milliseconds between simulation ticks.
    #[arg(long = "tick-ms")]
    tick_ms: Option<u64>,

    /// Seed for food placement, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,

    /// Write a debug log to this file.
    #[arg(long = "log-file", value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let config = resolve_config(&cli)?;
    let game = SharedGame::new(config)?;
    info!(
        "starting on {}x{} grid, tick {} ms",
        config.grid.width, config.grid.height, config.tick_interval_ms
    );

    install_panic_hook();
    run(&game)
}

fn run(game: &SharedGame) -> Result<(), AppError> {
    let mut session = TerminalSession::enter()?;
    let mut ticker = Ticker::spawn(game.clone(), game.tick_interval())?;
    let frame_interval = Duration::from_millis(FRAME_INTERVAL_MS);

    loop {
        session.draw(&game.snapshot())?;

        match session.poll_input(frame_interval)? {
            Some(GameInput::Quit) => break,
            Some(GameInput::Direction(direction)) => {
                game.enqueue_direction(direction);
            }
            Some(GameInput::Restart) if game.status() != GameStatus::Running => {
                ticker.stop();
                game.restart()?;
                ticker = Ticker::spawn(game.clone(), game.tick_interval())?;
            }
            Some(GameInput::Restart) | None => {}
        }
    }

    ticker.stop();
    info!("quit with score {}", game.snapshot().score);
    Ok(())
}

fn init_logging(path: Option<&Path>) -> Result<(), AppError> {
    let Some(path) = path else {
        return Ok(());
    };

    WriteLogger::init(LevelFilter::Debug, Config::default(), File::create(path)?)?;
    Ok(())
}

/// Layers defaults, the optional config file and CLI flags, in that order.
fn resolve_config(cli: &Cli) -> Result<GameConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::from_json_file(path)?,
        None => GameConfig::default(),
    };

    if let Some(width) = cli.width {
        config.grid.width = width;
    }
    if let Some(height) = cli.height {
        config.grid.height = height;
    }
    if let Some(tick_ms) = cli.tick_ms {
        config.tick_interval_ms = tick_ms;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use tick_snake::error::ConfigError;

    use super::{resolve_config, Cli};

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from([
            "tick-snake",
            "--width",
            "12",
            "--height",
            "9",
            "--tick-ms",
            "80",
            "--seed",
            "5",
        ]);

        let config = resolve_config(&cli).expect("config should resolve");

        assert_eq!(config.grid.width, 12);
        assert_eq!(config.grid.height, 9);
        assert_eq!(config.tick_interval_ms, 80);
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.initial_length, 3);
    }

    #[test]
    fn grid_too_small_for_snake_is_rejected() {
        let cli = Cli::parse_from(["tick-snake", "--width", "4"]);

        assert!(matches!(
            resolve_config(&cli),
            Err(ConfigError::SnakeOutOfBounds { x: 6, .. })
        ));
    }
}
