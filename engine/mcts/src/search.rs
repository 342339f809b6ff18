//! MCTS search implementation.
//!
//! Each iteration runs the four classic phases:
//! 1. Selection: from the root, follow the UCB1-best child while the current
//!    node has a child for every valid action
//! 2. Expansion: a node visited before gets one new child, for an action
//!    picked uniformly among those not yet expanded
//! 3. Rollout: uniformly random moves from a copy of the node's grid until
//!    someone connects or the board fills up
//! 4. Backpropagation: update visits and values up to the root, flipping
//!    the value at each level
//!
//! Values are 0/1 outcomes. A rollout is worth 1 only when the searching
//! player wins it and the rolled-out node has the opponent to move, so a
//! node's value measures the move that led to it, as seen by its parent.

use games_connect4::{BoardError, Grid, Player};
use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;
use thiserror::Error;
use tracing::{debug, trace};

use crate::config::MctsConfig;
use crate::node::NodeId;
use crate::tree::{MctsTree, TreeStats};

/// Errors that can occur during MCTS search.
#[derive(Debug, Error, PartialEq)]
pub enum SearchError {
    #[error("No valid moves available")]
    NoValidMoves,

    #[error("Search ended after {iterations} iterations without expanding the root")]
    RootNotExpanded { iterations: u32 },

    #[error("Board error: {0}")]
    Board(#[from] BoardError),
}

/// Result of an MCTS search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Best column to play
    pub action: usize,

    /// Mean value of the chosen child
    pub value: f32,

    /// Visits of the chosen child
    pub visits: u32,

    /// Number of iterations performed
    pub iterations: u32,
}

/// MCTS search state.
pub struct MctsSearch {
    tree: MctsTree,
    config: MctsConfig,
    player: Player,
}

impl MctsSearch {
    /// Create a new search for `player` to move on `grid`.
    ///
    /// The root owns its own copy of the grid.
    pub fn new(grid: &Grid, player: Player, config: MctsConfig) -> Result<Self, SearchError> {
        if !grid.has_valid_move() {
            return Err(SearchError::NoValidMoves);
        }

        Ok(Self {
            tree: MctsTree::new(grid.clone(), player),
            config,
            player,
        })
    }

    /// Run the configured number of iterations and pick the root child with
    /// the highest mean value.
    pub fn run(&mut self, rng: &mut ChaCha20Rng) -> Result<SearchResult, SearchError> {
        for _ in 0..self.config.iterations {
            self.iterate(rng)?;
        }

        let (action, child_id) = self.tree.best_action().ok_or(SearchError::RootNotExpanded {
            iterations: self.config.iterations,
        })?;
        let child = self.tree.get(child_id);

        let result = SearchResult {
            action,
            value: child.mean_value(),
            visits: child.visits,
            iterations: self.config.iterations,
        };

        let stats = self.tree.stats();
        debug!(
            player = %self.player,
            action = result.action,
            value = result.value,
            visits = result.visits,
            total_nodes = stats.total_nodes,
            max_depth = stats.max_depth,
            "MCTS search complete"
        );

        Ok(result)
    }

    /// Run a single iteration (select -> expand -> rollout -> backpropagate).
    /// Returns the node that was rolled out.
    pub fn iterate(&mut self, rng: &mut ChaCha20Rng) -> Result<NodeId, SearchError> {
        let mut leaf_id = self.select();

        if self.tree.get(leaf_id).visits != 0 {
            leaf_id = self.expand(leaf_id, rng)?;
        }

        let value = self.rollout(leaf_id, rng)?;
        self.tree.backpropagate(leaf_id, value);

        trace!(
            leaf = leaf_id.0,
            depth = self.tree.depth(leaf_id),
            value = value,
            "MCTS iteration complete"
        );

        Ok(leaf_id)
    }

    /// Descend from the root while the current node is saturated.
    ///
    /// A node without any valid action is saturated but has nothing to
    /// descend into; selection stops there.
    fn select(&self) -> NodeId {
        let mut current = self.tree.root();

        loop {
            let node = self.tree.get(current);
            if !node.is_saturated() {
                break;
            }

            match self
                .tree
                .select_child(current, self.config.exploration_constant)
            {
                Some(child_id) => current = child_id,
                None => break,
            }
        }

        current
    }

    /// Add one child for a random unexpanded action. A node with nothing
    /// left to expand is returned unchanged.
    fn expand(&mut self, node_id: NodeId, rng: &mut ChaCha20Rng) -> Result<NodeId, SearchError> {
        let unexpanded = self.tree.get(node_id).unexpanded_actions();
        match unexpanded.choose(rng) {
            Some(&action) => Ok(self.tree.add_child(node_id, action)?),
            None => Ok(node_id),
        }
    }

    /// Random playout from `node_id`, scored for the searching player.
    ///
    /// The root is never simulated and scores 0.
    pub fn rollout(&self, node_id: NodeId, rng: &mut ChaCha20Rng) -> Result<f32, SearchError> {
        if node_id == self.tree.root() {
            return Ok(0.0);
        }

        let node = self.tree.get(node_id);
        let final_grid = if node.is_terminal {
            node.grid.clone()
        } else {
            random_playout(node.grid.clone(), node.player, rng)?
        };

        if final_grid.connected(self.player) && node.player == self.player.opponent() {
            Ok(1.0)
        } else {
            Ok(0.0)
        }
    }

    /// Get the search tree (for inspection/debugging).
    pub fn tree(&self) -> &MctsTree {
        &self.tree
    }

    pub fn stats(&self) -> TreeStats {
        self.tree.stats()
    }
}

/// Play uniformly random moves on `grid`, `mover` first, until the mover
/// connects, the board is full or no column is open.
///
/// `grid` must not hold a connect for either player. Each move can then
/// only complete a line for the player who made it, so checking the mover
/// alone finds every win.
fn random_playout(
    mut grid: Grid,
    mut mover: Player,
    rng: &mut ChaCha20Rng,
) -> Result<Grid, BoardError> {
    while let Some(&col) = grid.valid_moves().choose(rng) {
        grid.apply_move(col, mover)?;
        if grid.wins_with(col, mover) || grid.is_full() {
            break;
        }
        mover = mover.opponent();
    }
    Ok(grid)
}

/// Convenience function to run a single MCTS search.
pub fn run_mcts(
    grid: &Grid,
    player: Player,
    config: MctsConfig,
    rng: &mut ChaCha20Rng,
) -> Result<SearchResult, SearchError> {
    let mut search = MctsSearch::new(grid, player, config)?;
    search.run(rng)
}
