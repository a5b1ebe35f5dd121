//! Tic-tac-toe CLI
//!
//! Plays matches through the store and prints the resulting history.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_store::{GameStore, StoreConfig};
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => StoreConfig::from_file(path)?,
        None => StoreConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play { games, first, json } => {
            let config = match first {
                Some(side) => config.with_first_side(side),
                None => config,
            };
            run_play(config, &games, json)
        }
        Command::ShowConfig => {
            print!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
    }
}

/// Parses a move list such as `"00 10 01"` into coordinates.
fn parse_moves(spec: &str) -> Result<Vec<(usize, usize)>> {
    spec.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            let digits: Vec<usize> = token
                .chars()
                .map(|c| c.to_digit(10).map(|d| d as usize))
                .collect::<Option<_>>()
                .with_context(|| format!("Move '{token}' is not two digits"))?;
            match digits.as_slice() {
                [row, col] => Ok((*row, *col)),
                _ => bail!("Move '{token}' must be a row digit followed by a column digit"),
            }
        })
        .collect()
}

/// Plays every game in order, saving each one and starting the next.
#[instrument(skip(config, games), fields(games = games.len()))]
fn run_play(config: StoreConfig, games: &[String], json: bool) -> Result<()> {
    let mut store = GameStore::new(config);

    for spec in games {
        let moves = parse_moves(spec)?;
        let archived_before = store.archive().len();
        store.start_default_game();
        for (row, col) in moves {
            if store.current_game().done() || store.archive().len() > archived_before {
                warn!(row, col, "Ignoring move after the game ended");
                break;
            }
            store
                .apply_move(row, col)
                .with_context(|| format!("Move ({row}, {col}) in game '{spec}'"))?;
        }
        // auto_save may already have archived it
        if store.archive().len() == archived_before {
            let id = store.save_and_continue()?;
            debug!(id, "Game saved");
        }
    }

    let history = store.game_history();
    info!(saved = history.len(), "Play finished");

    if json {
        println!("{}", serde_json::to_string_pretty(&history)?);
        return Ok(());
    }

    for game in &history {
        let result = match game.winner() {
            Some(winner) => winner.to_string(),
            None => "unfinished".to_string(),
        };
        println!("Game {}: {}", game.id().unwrap_or_default(), result);
        println!("{}\n", game.board());
    }
    Ok(())
}
