use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::graph::{NodeId, Weight};

/// Min-queue of tentative path costs, used by the heap-based reference solver
#[derive(Debug)]
pub struct CostQueue<W: Weight> {
    heap: BinaryHeap<Reverse<(W, NodeId)>>,
}

impl<W: Weight> CostQueue<W> {
    pub fn new() -> Self {
        CostQueue {
            heap: BinaryHeap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        CostQueue {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn push(&mut self, node: NodeId, cost: W) {
        self.heap.push(Reverse((cost, node)));
    }

    /// Removes the entry with the lowest cost; ties go to the lower node id
    pub fn pop(&mut self) -> Option<(NodeId, W)> {
        self.heap.pop().map(|Reverse((cost, node))| (node, cost))
    }
}

impl<W: Weight> Default for CostQueue<W> {
    fn default() -> Self {
        Self::new()
    }
}
