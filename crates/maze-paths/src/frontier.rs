//! Open-list disciplines: FIFO, LIFO and a stable min-heap.

use std::collections::{BinaryHeap, VecDeque};

use crate::algorithm::Algorithm;

/// Reference into the node array, ordered by `priority` then insertion
/// `seq` for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) priority: i32,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest priority first, and
        // among equals the earliest pushed.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// The open list of a search. The same index may be pushed more than once
/// into a heap; stale entries are skipped by the caller's closed check.
pub(crate) enum Frontier {
    Queue(VecDeque<usize>),
    Stack(Vec<usize>),
    Heap(BinaryHeap<NodeRef>),
}

impl Frontier {
    pub(crate) fn for_algorithm(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Bfs => Frontier::Queue(VecDeque::new()),
            Algorithm::Dfs => Frontier::Stack(Vec::new()),
            Algorithm::Dijkstra | Algorithm::AStar => Frontier::Heap(BinaryHeap::new()),
        }
    }

    /// Push `idx`. `priority` and `seq` only matter for the heap.
    pub(crate) fn push(&mut self, idx: usize, priority: i32, seq: u64) {
        match self {
            Frontier::Queue(q) => q.push_back(idx),
            Frontier::Stack(s) => s.push(idx),
            Frontier::Heap(h) => h.push(NodeRef { idx, priority, seq }),
        }
    }

    pub(crate) fn pop(&mut self) -> Option<usize> {
        match self {
            Frontier::Queue(q) => q.pop_front(),
            Frontier::Stack(s) => s.pop(),
            Frontier::Heap(h) => h.pop().map(|n| n.idx),
        }
    }

    pub(crate) fn len(&self) -> usize {
        match self {
            Frontier::Queue(q) => q.len(),
            Frontier::Stack(s) => s.len(),
            Frontier::Heap(h) => h.len(),
        }
    }
}
