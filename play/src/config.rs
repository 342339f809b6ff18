//! Configuration for the play driver
//!
//! Defaults come from the central config (config.toml plus `CONNECT4_*`
//! environment overrides). CLI arguments take highest priority.

use std::fmt;
use std::str::FromStr;

use agents::{AgentConfig, AgentKind};
use anyhow::{anyhow, Result};
use clap::Parser;
use engine_config::{load_config, CentralConfig};
use mcts::MctsConfig;
use minimax::MinimaxConfig;
use once_cell::sync::Lazy;
use tracing::level_filters::LevelFilter;

// Load central config once at startup
static CENTRAL_CONFIG: Lazy<CentralConfig> = Lazy::new(load_config);

fn default_player1() -> String {
    CENTRAL_CONFIG.play.player1.clone()
}

fn default_player2() -> String {
    CENTRAL_CONFIG.play.player2.clone()
}

fn default_games() -> u32 {
    CENTRAL_CONFIG.play.games
}

fn default_log_level() -> String {
    CENTRAL_CONFIG.common.log_level.clone()
}

fn default_rows() -> usize {
    CENTRAL_CONFIG.board.rows
}

fn default_cols() -> usize {
    CENTRAL_CONFIG.board.cols
}

fn default_connect_n() -> usize {
    CENTRAL_CONFIG.board.connect_n
}

fn default_mcts_iterations() -> u32 {
    CENTRAL_CONFIG.mcts.iterations
}

fn default_exploration_constant() -> f32 {
    CENTRAL_CONFIG.mcts.exploration_constant
}

fn default_minimax_depth() -> u32 {
    CENTRAL_CONFIG.minimax.depth
}

/// Who sits in a seat: a person at the terminal or one of the agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatKind {
    Human,
    Agent(AgentKind),
}

impl FromStr for SeatKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("human") {
            return Ok(SeatKind::Human);
        }
        s.parse::<AgentKind>()
            .map(SeatKind::Agent)
            .map_err(|_| anyhow!("unknown player '{s}', expected one of human, random, minimax, mcts"))
    }
}

impl fmt::Display for SeatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeatKind::Human => f.write_str("human"),
            SeatKind::Agent(kind) => write!(f, "{kind}"),
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "play")]
#[command(about = "Play Connect-N against the random, minimax and MCTS agents")]
#[command(
    long_about = "Plays one or more Connect-N games between two seats. Each seat is a
human at the terminal or one of the random, minimax and mcts agents.

Configuration is loaded from config.toml with environment variable overrides.
CLI arguments take highest priority."
)]
pub struct Config {
    /// First seat (moves first): human, random, minimax or mcts
    #[arg(long, default_value_t = default_player1())]
    pub player1: String,

    /// Second seat: human, random, minimax or mcts
    #[arg(long, default_value_t = default_player2())]
    pub player2: String,

    /// Number of games to play
    #[arg(long, default_value_t = default_games())]
    pub games: u32,

    /// Swap seats after every game so each side opens in turn
    #[arg(long)]
    pub swap: bool,

    /// Fixed RNG seed for reproducible agents (entropy when absent)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value_t = default_log_level())]
    pub log_level: String,

    /// Board rows
    #[arg(long, default_value_t = default_rows())]
    pub rows: usize,

    /// Board columns
    #[arg(long, default_value_t = default_cols())]
    pub cols: usize,

    /// Discs in a row needed to win
    #[arg(long, default_value_t = default_connect_n())]
    pub connect_n: usize,

    /// MCTS iterations per move
    #[arg(long, default_value_t = default_mcts_iterations())]
    pub mcts_iterations: u32,

    /// UCB1 exploration constant
    #[arg(long, default_value_t = default_exploration_constant())]
    pub exploration_constant: f32,

    /// Minimax search depth in plies
    #[arg(long, default_value_t = default_minimax_depth())]
    pub minimax_depth: u32,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        self.seats()?;

        if self.games == 0 {
            return Err(anyhow!("games must be greater than 0"));
        }

        if self.rows == 0 || self.cols == 0 {
            return Err(anyhow!("rows and cols must be greater than 0"));
        }

        if self.connect_n < 2 || self.connect_n > self.rows.max(self.cols) {
            return Err(anyhow!(
                "connect_n must be between 2 and {}, got {}",
                self.rows.max(self.cols),
                self.connect_n
            ));
        }

        if self.mcts_iterations < 2 {
            return Err(anyhow!("mcts_iterations must be at least 2"));
        }

        if !self.exploration_constant.is_finite() || self.exploration_constant < 0.0 {
            return Err(anyhow!("exploration_constant must be a non-negative number"));
        }

        if self.minimax_depth == 0 {
            return Err(anyhow!("minimax_depth must be greater than 0"));
        }

        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(anyhow!(
                "invalid log level '{}', expected one of trace, debug, info, warn, error",
                self.log_level
            ));
        }

        Ok(())
    }

    /// Parsed seats for player 1 and player 2.
    pub fn seats(&self) -> Result<[SeatKind; 2]> {
        Ok([self.player1.parse()?, self.player2.parse()?])
    }

    /// Seats swap when either the flag or the config file asks for it.
    pub fn swap_seats(&self) -> bool {
        self.swap || CENTRAL_CONFIG.play.swap
    }

    /// The CLI seed, else the config file seed.
    pub fn rng_seed(&self) -> Option<u64> {
        self.seed.or(CENTRAL_CONFIG.play.seed)
    }

    /// Agent settings for the seat at `index`. Seeded runs give each seat
    /// its own stream.
    pub fn agent_config(&self, index: usize) -> AgentConfig {
        AgentConfig {
            minimax: MinimaxConfig::default().with_depth(self.minimax_depth),
            mcts: MctsConfig::default()
                .with_iterations(self.mcts_iterations)
                .with_exploration_constant(self.exploration_constant),
            seed: self.rng_seed().map(|seed| seed.wrapping_add(index as u64)),
        }
    }
}
