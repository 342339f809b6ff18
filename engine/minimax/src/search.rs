//! Depth-limited minimax with alpha-beta pruning.
//!
//! Every ply shuffles the valid columns before visiting them and keeps the
//! first column that strictly improves the running best, so equal-scoring
//! columns are chosen among at random.
//!
//! A frame stops at depth 0, on a grid with no valid column, or once the
//! player to move has won or drawn. Its score is then the heuristic taken
//! from that player's point of view.

use games_connect4::{BoardError, GameState, Grid, Player};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::config::MinimaxConfig;
use crate::eval::score;

/// Result of a search from the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Best column, or `None` when the root itself is terminal.
    pub best_move: Option<usize>,
    /// Minimax value of the root.
    pub score: i64,
    /// Frames visited, root included.
    pub nodes: u64,
}

/// Alpha-beta searcher borrowing the RNG used for move ordering.
pub struct AlphaBeta<'r, R: Rng + ?Sized> {
    config: MinimaxConfig,
    rng: &'r mut R,
    nodes: u64,
}

impl<'r, R: Rng + ?Sized> AlphaBeta<'r, R> {
    pub fn new(config: MinimaxConfig, rng: &'r mut R) -> Self {
        Self {
            config,
            rng,
            nodes: 0,
        }
    }

    /// Search `grid` for `player` to the configured depth.
    pub fn search(&mut self, grid: &Grid, player: Player) -> Result<SearchOutcome, BoardError> {
        self.nodes = 0;
        let (best_move, score) =
            self.alpha_beta(grid, self.config.depth, i64::MIN, i64::MAX, player)?;

        debug!(
            player = %player,
            depth = self.config.depth,
            best_move = ?best_move,
            score,
            nodes = self.nodes,
            "Minimax search complete"
        );

        Ok(SearchOutcome {
            best_move,
            score,
            nodes: self.nodes,
        })
    }

    /// One frame of the recursion. `Player::MAX` maximizes, the other player
    /// minimizes. Fails only if a child move is rejected by the grid.
    pub fn alpha_beta(
        &mut self,
        grid: &Grid,
        depth: u32,
        mut alpha: i64,
        mut beta: i64,
        player: Player,
    ) -> Result<(Option<usize>, i64), BoardError> {
        self.nodes += 1;

        let mut moves = grid.valid_moves();
        if depth == 0 || moves.is_empty() || grid.check_state(player, None) != GameState::Ongoing
        {
            return Ok((None, score(grid, player)));
        }

        moves.shuffle(&mut *self.rng);

        let maximizing = player == Player::MAX;
        let mut best_move = moves[0];
        let mut best_score = if maximizing { i64::MIN } else { i64::MAX };

        for &col in &moves {
            let child = grid.with_move(col, player)?;
            let (_, child_score) =
                self.alpha_beta(&child, depth - 1, alpha, beta, player.opponent())?;

            if maximizing {
                if child_score > best_score {
                    best_score = child_score;
                    best_move = col;
                }
                alpha = alpha.max(child_score);
            } else {
                if child_score < best_score {
                    best_score = child_score;
                    best_move = col;
                }
                beta = beta.min(child_score);
            }

            if alpha >= beta {
                break;
            }
        }

        Ok((Some(best_move), best_score))
    }
}

/// Single alpha-beta frame search with an explicit window.
///
/// Returns the best column (`None` at a terminal frame) and its score.
pub fn alpha_beta<R: Rng + ?Sized>(
    grid: &Grid,
    depth: u32,
    alpha: i64,
    beta: i64,
    player: Player,
    rng: &mut R,
) -> Result<(Option<usize>, i64), BoardError> {
    AlphaBeta::new(MinimaxConfig::default().with_depth(depth), rng)
        .alpha_beta(grid, depth, alpha, beta, player)
}

/// Best column for `player` at the default depth with a full window.
pub fn minimax<R: Rng + ?Sized>(
    grid: &Grid,
    player: Player,
    rng: &mut R,
) -> Result<Option<usize>, BoardError> {
    Ok(AlphaBeta::new(MinimaxConfig::default(), rng)
        .search(grid, player)?
        .best_move)
}
