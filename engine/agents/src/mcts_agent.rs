//! Monte Carlo Tree Search move selection.

use games_connect4::{Grid, Player};
use mcts::{run_mcts, MctsConfig};
use rand_chacha::ChaCha20Rng;

use crate::{agent_rng, AgentError, MoveGenerator};

/// Agent building a fresh search tree for every move.
#[derive(Debug)]
pub struct MctsAgent {
    config: MctsConfig,
    rng: ChaCha20Rng,
}

impl MctsAgent {
    pub fn new(config: MctsConfig, seed: Option<u64>) -> Self {
        Self {
            config,
            rng: agent_rng(seed),
        }
    }

    pub fn config(&self) -> &MctsConfig {
        &self.config
    }
}

impl MoveGenerator for MctsAgent {
    fn generate_move(&mut self, grid: &Grid, player: Player) -> Result<usize, AgentError> {
        if !grid.has_valid_move() {
            return Err(AgentError::NoValidMoves);
        }

        let result = run_mcts(grid, player, self.config.clone(), &mut self.rng)?;
        Ok(result.action)
    }
}
