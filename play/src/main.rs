//! Play - terminal driver for the Connect-N agents
//!
//! Runs one or more games between two seats, each a human at the terminal or
//! one of the random, minimax and MCTS agents:
//! 1. Loads defaults from config.toml and `CONNECT4_*` overrides
//! 2. Prints the board after every move
//! 3. Tallies wins and draws per seat and logs a summary

use anyhow::Result;
use clap::Parser;
use games_connect4::Grid;
use tracing::info;

mod config;
mod game;

use crate::config::Config;
use crate::game::{play_game, Seat, Tally};

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;

    init_tracing(&config.log_level)?;
    info!(log_level = %config.log_level, "Tracing initialized");

    let template = Grid::with_dimensions(config.rows, config.cols, config.connect_n)?;
    let kinds = config.seats()?;
    let mut seats = [
        Seat::new(kinds[0], &config.agent_config(0)),
        Seat::new(kinds[1], &config.agent_config(1)),
    ];

    info!(
        player1 = %kinds[0],
        player2 = %kinds[1],
        games = config.games,
        rows = config.rows,
        cols = config.cols,
        connect_n = config.connect_n,
        seed = ?config.rng_seed(),
        "Starting match"
    );

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout().lock();
    let mut tally = Tally::default();
    let mut swapped = false;

    for game in 1..=config.games {
        let outcome = play_game(&template, &mut seats, &mut input, &mut output)?;
        tally.record(&outcome, swapped);

        info!(
            game,
            first = %seats[0].kind(),
            winner = ?outcome.winner,
            moves = outcome.moves,
            "Game finished"
        );

        if config.swap_seats() {
            seats.swap(0, 1);
            swapped = !swapped;
        }
    }

    info!(
        games = tally.games,
        player1_wins = tally.wins[0],
        player2_wins = tally.wins[1],
        draws = tally.draws,
        avg_moves = %format!("{:.1}", tally.avg_moves()),
        "Match complete"
    );

    Ok(())
}
