//! Configuration loading logic.
//!
//! Handles loading config from files and applying environment variable overrides.

use crate::CentralConfig;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_VAR: &str = "CONNECT4_CONFIG";

/// Standard locations to search for config.toml
pub const CONFIG_SEARCH_PATHS: &[&str] = &[
    "config.toml",    // Current directory
    "../config.toml", // Parent directory (when running from a crate directory)
];

/// Load the central configuration from config.toml.
///
/// Searches for config.toml in the following order:
/// 1. Path specified by the CONNECT4_CONFIG environment variable
/// 2. Current directory (config.toml)
/// 3. Parent directory (../config.toml)
///
/// After loading, environment variable overrides are applied.
pub fn load_config() -> CentralConfig {
    if let Ok(path) = std::env::var(CONFIG_PATH_VAR) {
        let path = PathBuf::from(&path);
        if path.exists() {
            info!("Loading config from {}: {}", CONFIG_PATH_VAR, path.display());
            return load_from_path(&path);
        }
        warn!(
            "{}={} not found, searching defaults",
            CONFIG_PATH_VAR,
            path.display()
        );
    }

    for path_str in CONFIG_SEARCH_PATHS {
        let path = Path::new(path_str);
        if path.exists() {
            info!("Loading config from {}", path.display());
            return load_from_path(path);
        }
    }

    debug!("No config.toml found, using built-in defaults");
    apply_env_overrides(CentralConfig::default())
}

/// Load configuration from a specific path.
///
/// A file that cannot be read or parsed falls back to the built-in defaults.
pub fn load_from_path(path: &Path) -> CentralConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => apply_env_overrides(config),
            Err(e) => {
                warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                apply_env_overrides(CentralConfig::default())
            }
        },
        Err(e) => {
            warn!("Failed to read {}: {}, using defaults", path.display(), e);
            apply_env_overrides(CentralConfig::default())
        }
    }
}

/// Macro to reduce env override boilerplate
macro_rules! env_override {
    // String field
    ($config:expr, $section:ident . $field:ident, $key:expr) => {
        if let Ok(v) = std::env::var($key) {
            $config.$section.$field = v;
        }
    };
    // Parseable field (u32, usize, f32, bool)
    ($config:expr, $section:ident . $field:ident, $key:expr, parse) => {
        match std::env::var($key).map(|s| s.trim().parse()) {
            Ok(Ok(v)) => $config.$section.$field = v,
            Ok(Err(_)) => warn!("Ignoring unparsable {}", $key),
            Err(_) => {}
        }
    };
    // Optional parseable field (Option<u64>)
    ($config:expr, $section:ident . $field:ident, $key:expr, optional_parse) => {
        match std::env::var($key).map(|s| s.trim().parse()) {
            Ok(Ok(v)) => $config.$section.$field = Some(v),
            Ok(Err(_)) => warn!("Ignoring unparsable {}", $key),
            Err(_) => {}
        }
    };
}

/// Apply environment variable overrides to a configuration.
///
/// Environment variables follow the pattern: CONNECT4_<SECTION>_<KEY>
pub fn apply_env_overrides(mut config: CentralConfig) -> CentralConfig {
    // Common
    env_override!(config, common.log_level, "CONNECT4_COMMON_LOG_LEVEL");

    // Board
    env_override!(config, board.rows, "CONNECT4_BOARD_ROWS", parse);
    env_override!(config, board.cols, "CONNECT4_BOARD_COLS", parse);
    env_override!(config, board.connect_n, "CONNECT4_BOARD_CONNECT_N", parse);

    // MCTS
    env_override!(config, mcts.iterations, "CONNECT4_MCTS_ITERATIONS", parse);
    env_override!(
        config,
        mcts.exploration_constant,
        "CONNECT4_MCTS_EXPLORATION_CONSTANT",
        parse
    );

    // Minimax
    env_override!(config, minimax.depth, "CONNECT4_MINIMAX_DEPTH", parse);

    // Play
    env_override!(config, play.player1, "CONNECT4_PLAY_PLAYER1");
    env_override!(config, play.player2, "CONNECT4_PLAY_PLAYER2");
    env_override!(config, play.games, "CONNECT4_PLAY_GAMES", parse);
    env_override!(config, play.swap, "CONNECT4_PLAY_SWAP", parse);
    env_override!(config, play.seed, "CONNECT4_PLAY_SEED", optional_parse);

    config
}
