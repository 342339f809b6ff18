//! Monte Carlo Tree Search (MCTS) for Connect-N.
//!
//! # Overview
//!
//! MCTS builds a search tree by repeating a fixed number of iterations.
//! Each iteration consists of four phases:
//!
//! 1. **Selection**: Traverse the tree using UCB1 while every valid action of
//!    the current node already has a child
//! 2. **Expansion**: Add a single child, for a random unexpanded action, to a
//!    node that has been visited before
//! 3. **Rollout**: Play uniformly random moves until a player connects or the
//!    board fills up
//! 4. **Backpropagation**: Update visit counts and values along the path from
//!    the rolled-out node to the root, flipping the value at each level
//!
//! The move returned is the root child with the highest mean value.
//!
//! # Usage
//!
//! ```rust
//! use games_connect4::{Grid, Player};
//! use mcts::{run_mcts, MctsConfig};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! // X has three in column 3, O three in column 6
//! let mut grid = Grid::new();
//! for _ in 0..3 {
//!     grid.apply_move(3, Player::One).unwrap();
//!     grid.apply_move(6, Player::Two).unwrap();
//! }
//!
//! let mut rng = ChaCha20Rng::seed_from_u64(42);
//! let result = run_mcts(&grid, Player::One, MctsConfig::default(), &mut rng).unwrap();
//! assert_eq!(result.action, 3);
//! ```
//!
//! # Configuration
//!
//! The [`MctsConfig`] struct controls search behavior:
//!
//! - `iterations`: Number of iterations per search (default: 2000)
//! - `exploration_constant`: `C` in the UCB1 exploration term (default: 2.0)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 MctsSearch                  │
//! ├─────────────────────────────────────────────┤
//! │  ┌─────────────┐        ┌────────────────┐  │
//! │  │  MctsTree   │        │ games-connect4 │  │
//! │  │  (arena)    │        │ (Grid)         │  │
//! │  └──────┬──────┘        └───────┬────────┘  │
//! │         ▼                       ▼           │
//! │  ┌───────────────────────────────────────┐  │
//! │  │  select → expand → rollout →          │  │
//! │  │            backpropagate              │  │
//! │  └───────────────────────────────────────┘  │
//! └─────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod node;
pub mod search;
pub mod tree;

// Re-export main types
pub use config::MctsConfig;
pub use node::{MctsNode, NodeId};
pub use search::{run_mcts, MctsSearch, SearchError, SearchResult};
pub use tree::{MctsTree, TreeStats};
