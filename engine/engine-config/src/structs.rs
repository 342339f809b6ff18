//! Configuration struct definitions.
//!
//! All config structs with serde deserialization support and default values.

use crate::defaults;
use serde::Deserialize;

// ============================================================================
// Serde default functions (required for #[serde(default = "...")])
// These call the accessor functions from defaults module
// ============================================================================

fn d_log_level() -> String {
    defaults::log_level().into()
}
fn d_rows() -> usize {
    defaults::rows()
}
fn d_cols() -> usize {
    defaults::cols()
}
fn d_connect_n() -> usize {
    defaults::connect_n()
}
fn d_mcts_iterations() -> u32 {
    defaults::mcts_iterations()
}
fn d_exploration_constant() -> f32 {
    defaults::exploration_constant()
}
fn d_minimax_depth() -> u32 {
    defaults::minimax_depth()
}
fn d_player1() -> String {
    defaults::player1().into()
}
fn d_player2() -> String {
    defaults::player2().into()
}
fn d_games() -> u32 {
    defaults::games()
}
fn d_swap() -> bool {
    defaults::swap()
}
fn d_seed() -> Option<u64> {
    defaults::seed()
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Root configuration structure matching config.toml
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct CentralConfig {
    #[serde(default)]
    pub common: CommonConfig,
    #[serde(default)]
    pub board: BoardConfig,
    #[serde(default)]
    pub mcts: MctsConfig,
    #[serde(default)]
    pub minimax: MinimaxConfig,
    #[serde(default)]
    pub play: PlayConfig,
}

/// Common configuration shared by all components
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CommonConfig {
    #[serde(default = "d_log_level")]
    pub log_level: String,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::log_level().into(),
        }
    }
}

/// Board geometry
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct BoardConfig {
    #[serde(default = "d_rows")]
    pub rows: usize,
    #[serde(default = "d_cols")]
    pub cols: usize,
    /// Discs in a row needed to win
    #[serde(default = "d_connect_n")]
    pub connect_n: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: defaults::rows(),
            cols: defaults::cols(),
            connect_n: defaults::connect_n(),
        }
    }
}

/// MCTS (Monte Carlo Tree Search) configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MctsConfig {
    #[serde(default = "d_mcts_iterations")]
    pub iterations: u32,
    /// UCB1 exploration constant used during selection
    #[serde(default = "d_exploration_constant")]
    pub exploration_constant: f32,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            iterations: defaults::mcts_iterations(),
            exploration_constant: defaults::exploration_constant(),
        }
    }
}

/// Minimax configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct MinimaxConfig {
    /// Search depth in plies
    #[serde(default = "d_minimax_depth")]
    pub depth: u32,
}

impl Default for MinimaxConfig {
    fn default() -> Self {
        Self {
            depth: defaults::minimax_depth(),
        }
    }
}

/// Match settings for the `play` driver
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PlayConfig {
    /// human, random, minimax or mcts
    #[serde(default = "d_player1")]
    pub player1: String,
    #[serde(default = "d_player2")]
    pub player2: String,
    #[serde(default = "d_games")]
    pub games: u32,
    /// Swap seats after every game so each side opens in turn
    #[serde(default = "d_swap")]
    pub swap: bool,
    /// Fixed RNG seed for reproducible matches (None = entropy)
    #[serde(default = "d_seed")]
    pub seed: Option<u64>,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            player1: defaults::player1().into(),
            player2: defaults::player2().into(),
            games: defaults::games(),
            swap: defaults::swap(),
            seed: defaults::seed(),
        }
    }
}
