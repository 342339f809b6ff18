//! Default configuration values loaded from config.defaults.toml.
//!
//! The shipped defaults file is embedded at compile time and parsed once, so
//! every component starts from the same values.

use once_cell::sync::Lazy;
use serde::Deserialize;

/// The embedded defaults TOML file (loaded at compile time)
const DEFAULTS_TOML: &str = include_str!("../../../config.defaults.toml");

/// Parsed defaults structure (parsed once at first use)
static DEFAULTS: Lazy<DefaultsConfig> = Lazy::new(|| {
    toml::from_str(DEFAULTS_TOML).expect("config.defaults.toml should be valid TOML")
});

// ============================================================================
// Internal structs for parsing config.defaults.toml
// ============================================================================

#[derive(Debug, Deserialize)]
struct DefaultsConfig {
    common: CommonDefaults,
    board: BoardDefaults,
    mcts: MctsDefaults,
    minimax: MinimaxDefaults,
    play: PlayDefaults,
}

#[derive(Debug, Deserialize)]
struct CommonDefaults {
    log_level: String,
}

#[derive(Debug, Deserialize)]
struct BoardDefaults {
    rows: usize,
    cols: usize,
    connect_n: usize,
}

#[derive(Debug, Deserialize)]
struct MctsDefaults {
    iterations: u32,
    exploration_constant: f32,
}

#[derive(Debug, Deserialize)]
struct MinimaxDefaults {
    depth: u32,
}

#[derive(Debug, Deserialize)]
struct PlayDefaults {
    player1: String,
    player2: String,
    games: u32,
    swap: bool,
    #[serde(default)]
    seed: Option<u64>,
}

// ============================================================================
// Public accessor functions
// ============================================================================

// Common
pub fn log_level() -> &'static str {
    &DEFAULTS.common.log_level
}

// Board
pub fn rows() -> usize {
    DEFAULTS.board.rows
}
pub fn cols() -> usize {
    DEFAULTS.board.cols
}
pub fn connect_n() -> usize {
    DEFAULTS.board.connect_n
}

// MCTS
pub fn mcts_iterations() -> u32 {
    DEFAULTS.mcts.iterations
}
pub fn exploration_constant() -> f32 {
    DEFAULTS.mcts.exploration_constant
}

// Minimax
pub fn minimax_depth() -> u32 {
    DEFAULTS.minimax.depth
}

// Play
pub fn player1() -> &'static str {
    &DEFAULTS.play.player1
}
pub fn player2() -> &'static str {
    &DEFAULTS.play.player2
}
pub fn games() -> u32 {
    DEFAULTS.play.games
}
pub fn swap() -> bool {
    DEFAULTS.play.swap
}
pub fn seed() -> Option<u64> {
    DEFAULTS.play.seed
}
