//! Open and closed sets of the best-first search.
use crate::engine::{Board, StateKey};
use crate::node::NodeId;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct FrontierEntry {
    priority: u32,
    seq: u64,
    node: NodeId,
}

// Reversed so that `BinaryHeap`, a max-heap, yields the lowest priority
// first and, among equal priorities, the earliest insertion.
impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Nodes waiting to be expanded, ordered by estimated total cost `f = g + h`.
///
/// Ties on `f` are broken by insertion order: of two entries with the same
/// priority, the one pushed first is popped first. The same board may be
/// queued several times through different nodes.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_seq: u64,
    peak_len: usize,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `node` with priority `f`.
    pub fn push(&mut self, node: NodeId, priority: u32) {
        self.heap.push(FrontierEntry {
            priority,
            seq: self.next_seq,
            node,
        });
        self.next_seq += 1;
        self.peak_len = self.peak_len.max(self.heap.len());
    }

    /// Removes and returns the node with the lowest priority, with that priority.
    pub fn pop(&mut self) -> Option<(NodeId, u32)> {
        self.heap.pop().map(|entry| (entry.node, entry.priority))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest number of entries queued at once.
    pub fn peak_len(&self) -> usize {
        self.peak_len
    }
}

/// Boards that have already been expanded.
///
/// Boards are stored by `StateKey`; once inserted a board is never removed.
#[derive(Debug, Default)]
pub struct VisitedSet {
    keys: HashSet<StateKey>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `board` as expanded. Returns `false` if it already was.
    pub fn insert(&mut self, board: &Board) -> bool {
        self.keys.insert(board.key())
    }

    pub fn contains(&self, board: &Board) -> bool {
        self.keys.contains(&board.key())
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Move;
    use crate::node::NodeArena;

    fn ids(count: usize) -> Vec<NodeId> {
        let mut arena = NodeArena::new();
        let root = arena.insert_root(Board::solved());
        let mut out = vec![root];
        while out.len() < count {
            out.push(arena.insert_child(root, Move::Up, Board::solved().apply_move(Move::Up)));
        }
        out
    }

    #[test]
    fn test_pops_lowest_priority_first() {
        let n = ids(3);
        let mut frontier = Frontier::new();
        frontier.push(n[0], 7);
        frontier.push(n[1], 3);
        frontier.push(n[2], 5);
        assert_eq!(frontier.pop(), Some((n[1], 3)));
        assert_eq!(frontier.pop(), Some((n[2], 5)));
        assert_eq!(frontier.pop(), Some((n[0], 7)));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn test_ties_pop_in_insertion_order() {
        let n = ids(5);
        let mut frontier = Frontier::new();
        frontier.push(n[3], 4);
        frontier.push(n[1], 4);
        frontier.push(n[4], 2);
        frontier.push(n[0], 4);
        frontier.push(n[2], 4);

        let order: Vec<NodeId> = std::iter::from_fn(|| frontier.pop().map(|(id, _)| id)).collect();
        assert_eq!(order, vec![n[4], n[3], n[1], n[0], n[2]]);
    }

    #[test]
    fn test_peak_len_tracks_high_water_mark() {
        let n = ids(3);
        let mut frontier = Frontier::new();
        frontier.push(n[0], 1);
        frontier.push(n[1], 1);
        frontier.pop();
        frontier.push(n[2], 1);
        assert_eq!(frontier.len(), 2);
        assert_eq!(frontier.peak_len(), 2);
        assert!(!frontier.is_empty());
    }

    #[test]
    fn test_visited_set_inserts_once() {
        let mut visited = VisitedSet::new();
        let board = Board::solved();
        assert!(visited.is_empty());
        assert!(visited.insert(&board));
        assert!(!visited.insert(&board), "Second insert must report a duplicate");
        assert!(visited.contains(&board));
        assert!(!visited.contains(&board.apply_move(Move::Left)));
        assert_eq!(visited.len(), 1);
    }
}
