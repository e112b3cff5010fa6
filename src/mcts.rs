//! Monte Carlo Tree Search (MCTS) with UCB1 selection.
//!
//! Each iteration runs four phases:
//! - Selection: descend through fully expanded nodes by UCB1
//! - Expansion: add one random untried move as a new child
//! - Rollout: play uniformly random moves until the game is decided or the board is full
//! - Backpropagation: walk parent handles back to the root, updating statistics
//!
//! Nodes live in an arena owned by a single search call. Each node stores
//! the handle of its parent instead of a pointer, and its children as a list
//! of handles in creation order.
//!
//! A node's `wins` are counted for the player who made the move into it, so
//! a parent picks the child with the best `wins / visits` for its own mover.

use fastrand::Rng;
use tracing::{debug, trace};

use crate::board::{Board, Player};
use crate::constants::UCB_EXPLORATION;
use crate::error::{EngineError, Result};

/// Index into the node arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The root node is always at index 0.
    pub const ROOT: NodeId = NodeId(0);
}

/// A node in the MCTS search tree.
#[derive(Clone, Debug)]
pub struct TreeNode {
    /// The position at this node
    pub board: Board,
    /// The player about to move from this position
    pub player: Player,
    /// Column played to reach this node (None for the root)
    pub mv: Option<usize>,
    /// Parent handle (None for the root)
    pub parent: Option<NodeId>,
    /// Moves not yet expanded into children
    pub unexplored: Vec<usize>,
    /// Child handles in expansion order
    pub children: Vec<NodeId>,
    /// Sum of game results for the player who moved into this node
    pub wins: f64,
    /// Number of visits
    pub visits: u32,
}

impl TreeNode {
    fn new(board: Board, player: Player, mv: Option<usize>, parent: Option<NodeId>) -> Self {
        Self {
            board,
            player,
            mv,
            parent,
            unexplored: board.playable_moves(),
            children: Vec::new(),
            wins: 0.0,
            visits: 0,
        }
    }

    /// Average result for the player who moved into this node.
    ///
    /// Returns 0 for unvisited nodes.
    #[inline]
    pub fn winrate(&self) -> f64 {
        if self.visits > 0 {
            self.wins / self.visits as f64
        } else {
            0.0
        }
    }

    fn update(&mut self, result: f64) {
        self.wins += result;
        self.visits += 1;
    }
}

/// Arena-allocated search tree rooted at the searched position.
#[derive(Clone, Debug)]
pub struct Tree {
    nodes: Vec<TreeNode>,
}

impl Tree {
    /// Create a tree holding only the root for `board` with `player` to move.
    pub fn new(board: &Board, player: Player) -> Self {
        Self {
            nodes: vec![TreeNode::new(*board, player, None, None)],
        }
    }

    /// Get a node by handle.
    ///
    /// # Panics
    /// Panics if the handle does not belong to this tree.
    pub fn get(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0]
    }

    fn get_mut(&mut self, id: NodeId) -> &mut TreeNode {
        &mut self.nodes[id.0]
    }

    pub fn root(&self) -> &TreeNode {
        self.get(NodeId::ROOT)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The root's children, in expansion order.
    pub fn root_children(&self) -> impl Iterator<Item = &TreeNode> {
        self.root().children.iter().map(|&id| self.get(id))
    }

    /// Attach a child of `parent` reached by playing `mv`.
    fn add_child(&mut self, parent: NodeId, mv: usize, board: Board) -> NodeId {
        let player = self.get(parent).player.opponent();
        let id = NodeId(self.nodes.len());
        self.nodes.push(TreeNode::new(board, player, Some(mv), Some(parent)));
        self.get_mut(parent).children.push(id);
        id
    }

    /// Pick the child of `id` with the highest UCB1 score.
    ///
    /// Every child has been visited at least once, since children are only
    /// created right before their first playout.
    fn select_child(&self, id: NodeId) -> Option<NodeId> {
        let node = self.get(id);
        let log_visits = (node.visits as f64).ln();
        node.children
            .iter()
            .copied()
            .max_by(|&a, &b| {
                ucb1(self.get(a), log_visits)
                    .partial_cmp(&ucb1(self.get(b), log_visits))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    }

    /// The root child with the highest win ratio. Ties go to the later child.
    pub fn best_move(&self) -> Option<usize> {
        self.root_children()
            .max_by(|a, b| {
                a.winrate()
                    .partial_cmp(&b.winrate())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .and_then(|child| child.mv)
    }
}

/// UCB1 score of a child given the log of its parent's visit count.
fn ucb1(child: &TreeNode, log_parent_visits: f64) -> f64 {
    let visits = child.visits as f64;
    child.wins / visits + (UCB_EXPLORATION * log_parent_visits / visits).sqrt()
}

/// Run `iterations` MCTS iterations from `board` with `player` to move.
///
/// Returns the finished tree; use [`Tree::best_move`] to read the decision.
///
/// # Errors
/// [`EngineError::NoLegalMove`] if the game on `board` is already decided.
pub fn search(board: &Board, player: Player, iterations: usize, rng: &mut Rng) -> Result<Tree> {
    let mut tree = Tree::new(board, player);
    if tree.root().unexplored.is_empty() {
        return Err(EngineError::NoLegalMove);
    }

    for _ in 0..iterations {
        let mut node = NodeId::ROOT;
        let mut board = *board;

        // Selection
        while tree.get(node).unexplored.is_empty() {
            let Some(child) = tree.select_child(node) else {
                break;
            };
            let mover = tree.get(node).player;
            if let Some(mv) = tree.get(child).mv {
                board.play(mv, mover)?;
            }
            node = child;
        }

        // Expansion
        let untried = tree.get(node).unexplored.len();
        if untried > 0 {
            let mover = tree.get(node).player;
            let mv = tree.get_mut(node).unexplored.swap_remove(rng.usize(..untried));
            board.play(mv, mover)?;
            node = tree.add_child(node, mv, board);
        }

        // Rollout
        let mut mover = tree.get(node).player;
        loop {
            let moves = board.playable_moves();
            if moves.is_empty() {
                break;
            }
            board.play(moves[rng.usize(..moves.len())], mover)?;
            mover = mover.opponent();
        }

        // Backpropagation
        let mut current = Some(node);
        while let Some(id) = current {
            let entry = tree.get_mut(id);
            // Rollouts only stop on a decided or full board
            let result = board.is_winner(entry.player.opponent()).unwrap_or(0.5);
            entry.update(result);
            current = entry.parent;
        }
    }

    dump_children(&tree);
    Ok(tree)
}

/// Search and return the chosen column.
pub fn mcts(board: &Board, player: Player, iterations: usize, rng: &mut Rng) -> Result<usize> {
    let tree = search(board, player, iterations, rng)?;
    let column = tree.best_move().ok_or(EngineError::NoLegalMove)?;
    debug!(
        %player,
        iterations,
        column,
        nodes = tree.len(),
        "mcts search finished"
    );
    Ok(column)
}

/// Trace the statistics of the root's children.
fn dump_children(tree: &Tree) {
    for child in tree.root_children() {
        trace!(
            mv = ?child.mv,
            visits = child.visits,
            wins = child.wins,
            winrate = child.winrate(),
            "root child"
        );
    }
}
