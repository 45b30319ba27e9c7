//! Search nodes and the arena that owns them.
//!
//! Nodes refer to their parent by `NodeId` rather than by pointer. Several
//! frontier entries may share the same chain of ancestors, and since nodes
//! are never modified after insertion that sharing needs no bookkeeping.
//! The whole arena is dropped when the search that built it returns.
use crate::engine::{Board, Move};

/// Handle of a node inside a `NodeArena`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// A board reached by the search, together with how it was reached.
#[derive(Clone, Debug)]
pub struct SearchNode {
    board: Board,
    cost: u32,
    parent: Option<NodeId>,
    mv: Option<Move>,
}

impl SearchNode {
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of moves from the root (`g`).
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// The node this one was expanded from; `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The move that produced this node from its parent; `None` for the root.
    pub fn mv(&self) -> Option<Move> {
        self.mv
    }
}

/// Append-only storage for the nodes of one search.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the root node `{board, g = 0}`.
    pub fn insert_root(&mut self, board: Board) -> NodeId {
        self.push(SearchNode {
            board,
            cost: 0,
            parent: None,
            mv: None,
        })
    }

    /// Stores the node reached from `parent` by `mv`, one move further from the root.
    ///
    /// # Panics
    /// Panics if `parent` does not belong to this arena.
    pub fn insert_child(&mut self, parent: NodeId, mv: Move, board: Board) -> NodeId {
        let cost = self.get(parent).cost + 1;
        self.push(SearchNode {
            board,
            cost,
            parent: Some(parent),
            mv: Some(mv),
        })
    }

    fn push(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// # Panics
    /// Panics if `id` does not belong to this arena.
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates from `id` up to the root, `id` first.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            arena: self,
            next: Some(id),
        }
    }

    /// Returns the boards from the root to `id`, inclusive at both ends.
    ///
    /// The result holds `cost + 1` boards, starting with the root's board.
    pub fn path_to(&self, id: NodeId) -> Vec<Board> {
        let mut path: Vec<Board> = self.ancestors(id).map(|node| node.board).collect();
        path.reverse();
        path
    }

    /// Returns the `cost` moves leading from the root to `id`, in playing order.
    pub fn moves_to(&self, id: NodeId) -> Vec<Move> {
        let mut moves: Vec<Move> = self.ancestors(id).filter_map(|node| node.mv).collect();
        moves.reverse();
        moves
    }
}

/// Iterator over a node and its ancestors. See [`NodeArena::ancestors`].
pub struct Ancestors<'a> {
    arena: &'a NodeArena,
    next: Option<NodeId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a SearchNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.arena.get(self.next?);
        self.next = node.parent;
        Some(node)
    }
}
