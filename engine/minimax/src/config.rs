//! Minimax configuration parameters.

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u32 = 4;

/// Configuration for the alpha-beta search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimaxConfig {
    /// Plies searched below the root before the heuristic is applied.
    pub depth: u32,
}

impl Default for MinimaxConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
        }
    }
}

impl MinimaxConfig {
    /// Create a shallow config for testing.
    pub fn for_testing() -> Self {
        Self { depth: 2 }
    }

    /// Builder pattern: set search depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        assert_eq!(MinimaxConfig::default().depth, 4);
    }

    #[test]
    fn test_builder_pattern() {
        let config = MinimaxConfig::for_testing().with_depth(6);
        assert_eq!(config.depth, 6);
    }
}
