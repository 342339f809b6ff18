//! Minimax search with alpha-beta pruning for Connect-N.
//!
//! # Overview
//!
//! The search is a depth-limited minimax whose frontier is scored by a static
//! heuristic ([`eval::score`]) counting open runs of two, three and four discs.
//! The sign convention is absolute: [`Player::MAX`] maximizes and the other
//! player minimizes, whoever called the search.
//!
//! # Usage
//!
//! ```rust
//! use games_connect4::{Grid, Player};
//! use minimax::{AlphaBeta, MinimaxConfig};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let mut grid = Grid::new();
//! for _ in 0..3 {
//!     grid.apply_move(3, Player::One).unwrap();
//! }
//!
//! let mut rng = ChaCha20Rng::seed_from_u64(42);
//! let outcome = AlphaBeta::new(MinimaxConfig::default(), &mut rng)
//!     .search(&grid, Player::One)
//!     .unwrap();
//! assert_eq!(outcome.best_move, Some(3));
//! ```
//!
//! [`Player::MAX`]: games_connect4::Player::MAX

pub mod config;
pub mod eval;
pub mod search;

pub use config::MinimaxConfig;
pub use eval::{count_open_runs, score, FOUR_WEIGHT, LOSS_SCORE, THREE_WEIGHT, TWO_WEIGHT};
pub use search::{alpha_beta, minimax, AlphaBeta, SearchOutcome};
