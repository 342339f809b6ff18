//! Move selectors for Connect-N.
//!
//! Every agent answers the same question: given a grid and the player to
//! move, which column should be played? Three strategies are available:
//!
//! - [`RandomAgent`]: uniform choice among the open columns
//! - [`MinimaxAgent`]: alpha-beta search over the open-run heuristic
//! - [`MctsAgent`]: Monte Carlo Tree Search with random rollouts
//!
//! The driver picks a strategy by [`AgentKind`] and talks to the closed
//! [`Agent`] enum, which forwards to the concrete agent.
//!
//! # Usage
//!
//! ```rust
//! use agents::{Agent, AgentConfig, AgentKind};
//! use games_connect4::{BoardError, Grid, Player};
//!
//! let config = AgentConfig::default().with_seed(7);
//! let mut agent = Agent::new(AgentKind::Random, &config);
//!
//! let (column, state) = agent.generate_move(&Grid::new(), Player::One, None).unwrap();
//! assert!(column < 7);
//! assert!(state.is_none());
//! ```

use std::fmt;
use std::str::FromStr;

use games_connect4::{BoardError, Grid, Player};
use mcts::{MctsConfig, SearchError};
use minimax::MinimaxConfig;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

mod mcts_agent;
mod minimax_agent;
mod random_agent;

pub use mcts_agent::MctsAgent;
pub use minimax_agent::MinimaxAgent;
pub use random_agent::RandomAgent;

/// Errors raised while generating a move.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("No valid moves available")]
    NoValidMoves,

    #[error("Game is already over for {player}")]
    GameOver { player: Player },

    #[error("MCTS search failed: {0}")]
    Search(#[from] SearchError),

    #[error("Minimax search failed: {0}")]
    Board(#[from] BoardError),

    #[error("Unknown agent kind: {0:?} (expected random, minimax or mcts)")]
    UnknownKind(String),
}

/// Opaque payload handed back and forth between the driver and an agent
/// across calls. Agents never inspect or change it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavedState(pub Vec<u8>);

/// Strategy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Random,
    Minimax,
    Mcts,
}

impl AgentKind {
    pub const ALL: [AgentKind; 3] = [AgentKind::Random, AgentKind::Minimax, AgentKind::Mcts];

    pub fn as_str(self) -> &'static str {
        match self {
            AgentKind::Random => "random",
            AgentKind::Minimax => "minimax",
            AgentKind::Mcts => "mcts",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentKind {
    type Err = AgentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        AgentKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| AgentError::UnknownKind(s.to_string()))
    }
}

/// Settings shared by all agents built by [`Agent::new`].
#[derive(Debug, Clone, Default)]
pub struct AgentConfig {
    pub minimax: MinimaxConfig,
    pub mcts: MctsConfig,
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl AgentConfig {
    /// Builder pattern: set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder pattern: set the minimax search depth.
    pub fn with_minimax_depth(mut self, depth: u32) -> Self {
        self.minimax.depth = depth;
        self
    }

    /// Builder pattern: set the number of MCTS iterations.
    pub fn with_mcts_iterations(mut self, iterations: u32) -> Self {
        self.mcts.iterations = iterations;
        self
    }
}

/// The one capability every strategy provides.
pub trait MoveGenerator {
    /// Column for `player` to play on `grid`. The grid is never modified.
    fn generate_move(&mut self, grid: &Grid, player: Player) -> Result<usize, AgentError>;
}

/// A concrete agent, selected by configuration.
#[derive(Debug)]
pub enum Agent {
    Random(RandomAgent),
    Minimax(MinimaxAgent),
    Mcts(MctsAgent),
}

impl Agent {
    pub fn new(kind: AgentKind, config: &AgentConfig) -> Self {
        match kind {
            AgentKind::Random => Agent::Random(RandomAgent::new(config.seed)),
            AgentKind::Minimax => Agent::Minimax(MinimaxAgent::new(config.minimax, config.seed)),
            AgentKind::Mcts => Agent::Mcts(MctsAgent::new(config.mcts.clone(), config.seed)),
        }
    }

    pub fn kind(&self) -> AgentKind {
        match self {
            Agent::Random(_) => AgentKind::Random,
            Agent::Minimax(_) => AgentKind::Minimax,
            Agent::Mcts(_) => AgentKind::Mcts,
        }
    }

    /// Column for `player` on `grid`, with `saved_state` handed back as is.
    pub fn generate_move(
        &mut self,
        grid: &Grid,
        player: Player,
        saved_state: Option<SavedState>,
    ) -> Result<(usize, Option<SavedState>), AgentError> {
        let column = MoveGenerator::generate_move(self, grid, player)?;
        debug!(agent = %self.kind(), player = %player, column, "Generated move");
        Ok((column, saved_state))
    }
}

impl MoveGenerator for Agent {
    fn generate_move(&mut self, grid: &Grid, player: Player) -> Result<usize, AgentError> {
        match self {
            Agent::Random(agent) => agent.generate_move(grid, player),
            Agent::Minimax(agent) => agent.generate_move(grid, player),
            Agent::Mcts(agent) => agent.generate_move(grid, player),
        }
    }
}

/// Seeded or entropy-seeded RNG for an agent.
fn agent_rng(seed: Option<u64>) -> rand_chacha::ChaCha20Rng {
    use rand::SeedableRng;

    match seed {
        Some(seed) => rand_chacha::ChaCha20Rng::seed_from_u64(seed),
        None => rand_chacha::ChaCha20Rng::from_entropy(),
    }
}
