//! Uniformly random move selection.

use games_connect4::{Grid, Player};
use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;

use crate::{agent_rng, AgentError, MoveGenerator};

/// Agent that plays a uniformly random open column.
#[derive(Debug)]
pub struct RandomAgent {
    rng: ChaCha20Rng,
}

impl RandomAgent {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: agent_rng(seed),
        }
    }
}

impl MoveGenerator for RandomAgent {
    fn generate_move(&mut self, grid: &Grid, _player: Player) -> Result<usize, AgentError> {
        grid.valid_moves()
            .choose(&mut self.rng)
            .copied()
            .ok_or(AgentError::NoValidMoves)
    }
}
