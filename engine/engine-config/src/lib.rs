//! Centralized configuration loading from config.toml.
//!
//! This crate provides configuration structs and loading logic shared
//! across the search engines and the `play` driver.
//!
//! # Configuration Priority
//!
//! Settings are loaded with the following priority (highest to lowest):
//! 1. Environment variables (`CONNECT4_<SECTION>_<KEY>`)
//! 2. config.toml file
//! 3. Built-in defaults (config.defaults.toml, embedded at compile time)
//!
//! # Environment Variable Override Pattern
//!
//! ```text
//! CONNECT4_<SECTION>_<KEY>=value
//!
//! Examples:
//!     CONNECT4_COMMON_LOG_LEVEL=debug
//!     CONNECT4_BOARD_CONNECT_N=5
//!     CONNECT4_MCTS_ITERATIONS=500
//!     CONNECT4_PLAY_PLAYER1=minimax
//!     CONNECT4_PLAY_SEED=42
//! ```

mod defaults;
mod loader;
mod structs;

pub use defaults::*;
pub use loader::{
    apply_env_overrides, load_config, load_from_path, CONFIG_PATH_VAR, CONFIG_SEARCH_PATHS,
};
pub use structs::*;
