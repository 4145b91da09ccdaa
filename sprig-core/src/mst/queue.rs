//! Min-priority queue of candidate edges.
//!
//! Candidates pop in ascending `(weight, source, target, position)` order.
//! Weight ties therefore resolve by endpoint identifiers and finally by input
//! position, so extraction order is a total order independent of heap layout.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::{Edge, Weight};

/// A validated edge awaiting extraction.
#[derive(Clone, Copy, Debug)]
pub(super) struct QueuedEdge<W> {
    pub(super) edge: Edge<W>,
    pub(super) source_index: usize,
    pub(super) target_index: usize,
    pub(super) position: usize,
}

impl<W: Weight> Ord for QueuedEdge<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.edge
            .weight()
            .total_cmp(&other.edge.weight())
            .then_with(|| self.edge.source().cmp(&other.edge.source()))
            .then_with(|| self.edge.target().cmp(&other.edge.target()))
            .then_with(|| self.position.cmp(&other.position))
    }
}

impl<W: Weight> PartialOrd for QueuedEdge<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Weight> PartialEq for QueuedEdge<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Weight> Eq for QueuedEdge<W> {}

/// Binary min-heap over [`QueuedEdge`] values.
#[derive(Debug)]
pub(super) struct EdgeQueue<W: Weight> {
    heap: BinaryHeap<Reverse<QueuedEdge<W>>>,
}

impl<W: Weight> EdgeQueue<W> {
    pub(super) fn len(&self) -> usize {
        self.heap.len()
    }

    pub(super) fn pop(&mut self) -> Option<QueuedEdge<W>> {
        self.heap.pop().map(|Reverse(queued)| queued)
    }
}

impl<W: Weight> From<Vec<QueuedEdge<W>>> for EdgeQueue<W> {
    fn from(candidates: Vec<QueuedEdge<W>>) -> Self {
        let heap = candidates.into_iter().map(Reverse).collect::<Vec<_>>();
        Self {
            heap: BinaryHeap::from(heap),
        }
    }
}
