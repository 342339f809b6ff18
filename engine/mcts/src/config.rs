//! MCTS configuration parameters.

/// Configuration for Monte Carlo Tree Search.
#[derive(Debug, Clone)]
pub struct MctsConfig {
    /// Number of select/expand/rollout/backpropagate iterations per search.
    pub iterations: u32,

    /// Exploration constant `C` in UCB1:
    /// `value / visits + C * sqrt(ln(parent_visits) / visits)`.
    /// Only used while searching; the final move is chosen with `C = 0`.
    pub exploration_constant: f32,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            iterations: 2000,
            exploration_constant: 2.0,
        }
    }
}

impl MctsConfig {
    /// Create a fast config for testing.
    pub fn for_testing() -> Self {
        Self {
            iterations: 300,
            exploration_constant: 2.0,
        }
    }

    /// Builder pattern: set number of iterations.
    pub fn with_iterations(mut self, n: u32) -> Self {
        self.iterations = n;
        self
    }

    /// Builder pattern: set the UCB1 exploration constant.
    pub fn with_exploration_constant(mut self, c: f32) -> Self {
        self.exploration_constant = c;
        self
    }
}
