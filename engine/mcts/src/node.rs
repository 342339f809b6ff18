//! MCTS tree node representation.
//!
//! Each node owns a snapshot of the grid reached by taking an action from the
//! parent, and stores the statistics used for UCB1 selection.

use games_connect4::{Grid, Player};

/// Index into the node arena. Using a newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const NONE: NodeId = NodeId(u32::MAX);

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    pub fn is_some(self) -> bool {
        !self.is_none()
    }
}

/// A node in the MCTS tree.
#[derive(Debug, Clone)]
pub struct MctsNode {
    /// Parent node index (NONE for root)
    pub parent: NodeId,

    /// Column played from the parent to reach this node (None for root)
    pub action: Option<usize>,

    /// Grid snapshot at this node
    pub grid: Grid,

    /// Player to move at this node
    pub player: Player,

    /// Number of times this node has been visited
    pub visits: u32,

    /// Sum of rollout outcomes backpropagated through this node.
    /// Each outcome is 0 or 1, so `value / visits` lies in [0, 1].
    pub value: f32,

    /// Either player has connected or no column accepts a disc.
    /// Computed once at construction.
    pub is_terminal: bool,

    /// Columns open on `grid`, ascending. Computed once at construction.
    pub valid_actions: Vec<usize>,

    /// Children: Vec of (action, NodeId) pairs in expansion order.
    /// Actions are unique.
    pub children: Vec<(usize, NodeId)>,
}

impl MctsNode {
    /// Create a new root node.
    pub fn new_root(grid: Grid, player: Player) -> Self {
        Self::new(NodeId::NONE, None, grid, player)
    }

    /// Create a new child node.
    pub fn new_child(parent: NodeId, action: usize, grid: Grid, player: Player) -> Self {
        Self::new(parent, Some(action), grid, player)
    }

    fn new(parent: NodeId, action: Option<usize>, grid: Grid, player: Player) -> Self {
        let valid_actions = grid.valid_moves();
        let is_terminal = grid.is_terminal();
        Self {
            parent,
            action,
            grid,
            player,
            visits: 0,
            value: 0.0,
            is_terminal,
            valid_actions,
            children: Vec::new(),
        }
    }

    /// Mean value `value / visits`. Returns 0.0 if never visited.
    #[inline]
    pub fn mean_value(&self) -> f32 {
        if self.visits == 0 {
            0.0
        } else {
            self.value / self.visits as f32
        }
    }

    /// UCB1 score of this node as a child of a parent visited
    /// `parent_visits` times:
    ///
    /// `value / visits + c * sqrt(ln(parent_visits) / visits)`
    ///
    /// An unvisited node scores +infinity.
    #[inline]
    pub fn ucb1(&self, parent_visits: u32, c: f32) -> f32 {
        if self.visits == 0 {
            return f32::INFINITY;
        }
        let exploration = ((parent_visits as f32).ln() / self.visits as f32).sqrt();
        self.mean_value() + c * exploration
    }

    /// Every valid action already has a child.
    #[inline]
    pub fn is_saturated(&self) -> bool {
        self.children.len() == self.valid_actions.len()
    }

    /// Valid actions without a child yet, ascending.
    pub fn unexpanded_actions(&self) -> Vec<usize> {
        self.valid_actions
            .iter()
            .copied()
            .filter(|action| !self.children.iter().any(|(taken, _)| taken == action))
            .collect()
    }
}
