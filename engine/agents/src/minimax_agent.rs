//! Alpha-beta minimax move selection.

use games_connect4::{Grid, Player};
use minimax::{AlphaBeta, MinimaxConfig};
use rand_chacha::ChaCha20Rng;

use crate::{agent_rng, AgentError, MoveGenerator};

/// Agent running a fixed-depth alpha-beta search from the calling player.
#[derive(Debug)]
pub struct MinimaxAgent {
    config: MinimaxConfig,
    rng: ChaCha20Rng,
}

impl MinimaxAgent {
    pub fn new(config: MinimaxConfig, seed: Option<u64>) -> Self {
        Self {
            config,
            rng: agent_rng(seed),
        }
    }

    pub fn config(&self) -> &MinimaxConfig {
        &self.config
    }
}

impl MoveGenerator for MinimaxAgent {
    fn generate_move(&mut self, grid: &Grid, player: Player) -> Result<usize, AgentError> {
        if !grid.has_valid_move() {
            return Err(AgentError::NoValidMoves);
        }

        // A root that is already terminal for the mover yields no move
        AlphaBeta::new(self.config, &mut self.rng)
            .search(grid, player)?
            .best_move
            .ok_or(AgentError::GameOver { player })
    }
}
