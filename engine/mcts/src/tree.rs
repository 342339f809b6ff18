//! MCTS tree structure with arena allocation.
//!
//! The tree uses arena allocation for efficient node storage and
//! cache-friendly traversal. Nodes are stored in a contiguous Vec
//! and referenced by NodeId indices. Children are owned through the
//! arena; the parent link is a plain index, so no ownership cycle exists.

use games_connect4::{BoardError, Grid, Player};

use crate::node::{MctsNode, NodeId};

/// MCTS tree with arena-based node storage.
#[derive(Debug)]
pub struct MctsTree {
    /// Arena storing all nodes
    nodes: Vec<MctsNode>,

    /// Root node index (always 0 after initialization)
    root: NodeId,
}

impl MctsTree {
    /// Create a new tree rooted at `grid` with `player` to move.
    pub fn new(grid: Grid, player: Player) -> Self {
        Self {
            nodes: vec![MctsNode::new_root(grid, player)],
            root: NodeId(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a reference to a node by ID.
    #[inline]
    pub fn get(&self, id: NodeId) -> &MctsNode {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable reference to a node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MctsNode {
        &mut self.nodes[id.0 as usize]
    }

    /// Allocate a new node and return its ID.
    fn allocate(&mut self, node: MctsNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Get the total number of nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty (should never be true after construction).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add the child reached by the parent's player dropping a disc into
    /// `action`. The child gets its own copy of the grid and the opponent
    /// to move.
    pub fn add_child(&mut self, parent_id: NodeId, action: usize) -> Result<NodeId, BoardError> {
        let parent = self.get(parent_id);
        let grid = parent.grid.with_move(action, parent.player)?;
        let player = parent.player.opponent();

        let child_id = self.allocate(MctsNode::new_child(parent_id, action, grid, player));
        self.get_mut(parent_id).children.push((action, child_id));

        Ok(child_id)
    }

    /// Select the child of `node_id` maximizing UCB1 with exploration
    /// constant `c`.
    ///
    /// The first unvisited child in expansion order is returned at once.
    /// Among visited children ties go to the earliest. Returns None if the
    /// node has no children.
    pub fn select_child(&self, node_id: NodeId, c: f32) -> Option<NodeId> {
        let node = self.get(node_id);
        let mut best: Option<(NodeId, f32)> = None;

        for &(_, child_id) in &node.children {
            let child = self.get(child_id);
            if child.visits == 0 {
                return Some(child_id);
            }
            let score = child.ucb1(node.visits, c);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((child_id, score));
            }
        }

        best.map(|(id, _)| id)
    }

    /// Backpropagate a rollout value from a node to the root.
    /// The value is flipped (`1 - v`) at each level up.
    pub fn backpropagate(&mut self, leaf_id: NodeId, value: f32) {
        let mut current_id = leaf_id;
        let mut current_value = value;

        while current_id.is_some() {
            let node = self.get_mut(current_id);
            node.visits += 1;
            node.value += current_value;

            current_value = 1.0 - current_value;
            current_id = node.parent;
        }
    }

    /// Best root action by mean value alone (UCB1 with `c = 0`).
    /// Returns (action, child) or None if the root has no children.
    pub fn best_action(&self) -> Option<(usize, NodeId)> {
        let child_id = self.select_child(self.root, 0.0)?;
        let action = self.get(child_id).action?;
        Some((action, child_id))
    }

    /// Number of edges between `node_id` and the root.
    pub fn depth(&self, node_id: NodeId) -> u32 {
        let mut depth = 0;
        let mut current = self.get(node_id).parent;
        while current.is_some() {
            depth += 1;
            current = self.get(current).parent;
        }
        depth
    }

    /// Get statistics about the tree for debugging.
    pub fn stats(&self) -> TreeStats {
        let root = self.get(self.root);
        TreeStats {
            total_nodes: self.nodes.len(),
            root_visits: root.visits,
            max_depth: self.compute_max_depth(self.root, 0),
        }
    }

    fn compute_max_depth(&self, node_id: NodeId, current_depth: u32) -> u32 {
        let node = self.get(node_id);
        if node.children.is_empty() {
            return current_depth;
        }

        node.children
            .iter()
            .map(|(_, id)| self.compute_max_depth(*id, current_depth + 1))
            .max()
            .unwrap_or(current_depth)
    }
}

/// Statistics about an MCTS tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeStats {
    pub total_nodes: usize,
    pub root_visits: u32,
    pub max_depth: u32,
}
