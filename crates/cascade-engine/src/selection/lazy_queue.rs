//! Indexed max-priority queue of generation-stamped marginal gains.
//!
//! A record is fresh when its `generation` equals the current seed-set
//! size. Only a fresh record at the top may be accepted as a seed; a stale
//! top is re-evaluated and re-ranked in place with [`LazyQueue::update`].

use std::cmp::Ordering;

use cascade_core::types::NodeIdx;

/// One candidate's cached gain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueueRecord {
    pub node: NodeIdx,
    pub gain: f64,
    /// Seed-set size the gain was computed against.
    pub generation: usize,
}

impl QueueRecord {
    pub fn new(node: NodeIdx, gain: f64, generation: usize) -> Self {
        Self {
            node,
            gain,
            generation,
        }
    }

    pub fn is_fresh(&self, seed_count: usize) -> bool {
        self.generation == seed_count
    }

    /// Higher gain first; equal gains go to the lower node index.
    fn outranks(&self, other: &QueueRecord) -> bool {
        match self.gain.total_cmp(&other.gain) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => self.node < other.node,
        }
    }
}

/// Binary max-heap with a node -> slot index for O(log n) re-ranking.
#[derive(Debug, Clone, Default)]
pub struct LazyQueue {
    heap: Vec<QueueRecord>,
    slot: Vec<Option<usize>>,
}

impl LazyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            heap: Vec::with_capacity(nodes),
            slot: vec![None; nodes],
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn contains(&self, node: NodeIdx) -> bool {
        self.slot.get(node.index()).copied().flatten().is_some()
    }

    pub fn peek(&self) -> Option<&QueueRecord> {
        self.heap.first()
    }

    /// Insert a record, or re-rank the node's existing record.
    pub fn push(&mut self, record: QueueRecord) {
        if self.contains(record.node) {
            self.update(record.node, record.gain, record.generation);
            return;
        }
        let i = record.node.index();
        if i >= self.slot.len() {
            self.slot.resize(i + 1, None);
        }
        let pos = self.heap.len();
        self.heap.push(record);
        self.slot[i] = Some(pos);
        self.sift_up(pos);
    }

    pub fn pop(&mut self) -> Option<QueueRecord> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let top = self.heap.pop()?;
        self.slot[top.node.index()] = None;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(top)
    }

    /// Restamp `node` with a new gain and generation and restore heap order.
    /// Returns `false` if the node is not queued.
    pub fn update(&mut self, node: NodeIdx, gain: f64, generation: usize) -> bool {
        let Some(pos) = self.slot.get(node.index()).copied().flatten() else {
            return false;
        };
        let old = self.heap[pos];
        self.heap[pos].gain = gain;
        self.heap[pos].generation = generation;
        if self.heap[pos].outranks(&old) {
            self.sift_up(pos);
        } else {
            self.sift_down(pos);
        }
        true
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.slot[self.heap[a].node.index()] = Some(a);
        self.slot[self.heap[b].node.index()] = Some(b);
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.heap[pos].outranks(&self.heap[parent]) {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let mut best = pos;
            if left < len && self.heap[left].outranks(&self.heap[best]) {
                best = left;
            }
            if right < len && self.heap[right].outranks(&self.heap[best]) {
                best = right;
            }
            if best == pos {
                break;
            }
            self.swap(pos, best);
            pos = best;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rec(node: usize, gain: f64) -> QueueRecord {
        QueueRecord::new(NodeIdx::new(node), gain, 0)
    }

    #[test]
    fn test_pops_in_priority_order() {
        let mut q = LazyQueue::new();
        for (n, g) in [(0, 1.0), (1, 5.0), (2, 3.0), (3, 5.0)] {
            q.push(rec(n, g));
        }
        let order: Vec<usize> = std::iter::from_fn(|| q.pop()).map(|r| r.node.index()).collect();
        assert_eq!(order, vec![1, 3, 2, 0]);
    }

    #[test]
    fn test_update_reranks() {
        let mut q = LazyQueue::with_capacity(3);
        q.push(rec(0, 9.0));
        q.push(rec(1, 4.0));
        q.push(rec(2, 2.0));
        assert!(q.update(NodeIdx::new(0), 1.0, 1));
        assert_eq!(q.peek().map(|r| r.node), Some(NodeIdx::new(1)));
        assert!(q.update(NodeIdx::new(2), 7.0, 1));
        let top = q.pop().unwrap();
        assert_eq!(top.node, NodeIdx::new(2));
        assert!(top.is_fresh(1));
        assert!(!q.update(NodeIdx::new(2), 1.0, 1));
    }

    #[test]
    fn test_push_existing_node_updates() {
        let mut q = LazyQueue::new();
        q.push(rec(4, 1.0));
        q.push(rec(4, 2.0));
        assert_eq!(q.len(), 1);
        assert_eq!(q.peek().map(|r| r.gain), Some(2.0));
    }

    proptest! {
        #[test]
        fn prop_pop_order_is_sorted(
            gains in prop::collection::vec(0u32..50, 1..40),
            updates in prop::collection::vec((0usize..40, 0u32..50), 0..20),
        ) {
            let mut q = LazyQueue::new();
            let mut expected: Vec<(f64, usize)> = Vec::new();
            for (n, &g) in gains.iter().enumerate() {
                q.push(rec(n, g as f64));
                expected.push((g as f64, n));
            }
            for &(n, g) in &updates {
                if n < gains.len() {
                    q.update(NodeIdx::new(n), g as f64, 1);
                    expected[n].0 = g as f64;
                }
            }
            expected.sort_by(|a, b| b.0.total_cmp(&a.0).then(a.1.cmp(&b.1)));
            let popped: Vec<usize> = std::iter::from_fn(|| q.pop()).map(|r| r.node.index()).collect();
            let want: Vec<usize> = expected.into_iter().map(|(_, n)| n).collect();
            prop_assert_eq!(popped, want);
        }
    }
}
