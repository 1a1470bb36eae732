//! Queue of live boxes for branch-and-bound.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::arena::{BoxArena, Slot};
use crate::region::Storage;

/// Order in which the frontier hands out boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Traversal {
    /// Highest bound first (max-priority queue).
    #[default]
    BestBound,
    /// Insertion order (breadth-first). The front entry is not the best
    /// bound, so the gap-based stopping rule does not apply.
    BreadthFirst,
}

/// A queued box: arena slot plus its cached upper bound.
#[derive(Debug)]
pub struct Ranked {
    /// Buffer holding the box.
    pub slot: Slot,
    /// Admissible upper bound of the objective over the box.
    pub bound: f64,
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.bound.total_cmp(&other.bound) == Ordering::Equal
    }
}

impl Eq for Ranked {}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        // Higher bound first
        self.bound.total_cmp(&other.bound)
    }
}

enum Queue {
    Heap(BinaryHeap<Ranked>),
    Fifo(VecDeque<Ranked>),
}

/// Live boxes of a branch-and-bound run.
pub struct Frontier {
    queue: Queue,
    pushed: u64,
    popped: u64,
}

impl Frontier {
    /// Creates an empty frontier with the given ordering.
    pub fn new(traversal: Traversal) -> Self {
        let queue = match traversal {
            Traversal::BestBound => Queue::Heap(BinaryHeap::new()),
            Traversal::BreadthFirst => Queue::Fifo(VecDeque::new()),
        };
        Self {
            queue,
            pushed: 0,
            popped: 0,
        }
    }

    /// Ordering this frontier was built with.
    pub fn traversal(&self) -> Traversal {
        match self.queue {
            Queue::Heap(_) => Traversal::BestBound,
            Queue::Fifo(_) => Traversal::BreadthFirst,
        }
    }

    /// Queues a box.
    pub fn push(&mut self, slot: Slot, bound: f64) {
        let entry = Ranked { slot, bound };
        match &mut self.queue {
            Queue::Heap(heap) => heap.push(entry),
            Queue::Fifo(fifo) => fifo.push_back(entry),
        }
        self.pushed += 1;
    }

    /// Removes the next box to branch on.
    pub fn pop(&mut self) -> Option<Ranked> {
        let entry = match &mut self.queue {
            Queue::Heap(heap) => heap.pop(),
            Queue::Fifo(fifo) => fifo.pop_front(),
        }?;
        self.popped += 1;
        Some(entry)
    }

    /// The entry [`pop`](Self::pop) would return.
    pub fn peek(&self) -> Option<&Ranked> {
        match &self.queue {
            Queue::Heap(heap) => heap.peek(),
            Queue::Fifo(fifo) => fifo.front(),
        }
    }

    /// Highest bound in the frontier, `-inf` when empty.
    ///
    /// O(1) for [`Traversal::BestBound`], a linear scan otherwise.
    pub fn best_bound(&self) -> f64 {
        match &self.queue {
            Queue::Heap(heap) => heap.peek().map_or(f64::NEG_INFINITY, |r| r.bound),
            Queue::Fifo(fifo) => fifo
                .iter()
                .map(|r| r.bound)
                .fold(f64::NEG_INFINITY, f64::max),
        }
    }

    /// Drops every entry whose bound is below `gamma`, returning their
    /// buffers to `arena`.
    ///
    /// Returns the number of dropped entries.
    pub fn prune_below<S: Storage, const D: usize>(
        &mut self,
        gamma: f64,
        arena: &mut BoxArena<S, D>,
    ) -> usize {
        let before = self.len();

        match &mut self.queue {
            Queue::Heap(heap) => {
                let mut kept = Vec::with_capacity(heap.len());
                for entry in heap.drain() {
                    if entry.bound >= gamma {
                        kept.push(entry);
                    } else {
                        arena.release(entry.slot);
                    }
                }
                *heap = BinaryHeap::from(kept);
            }
            Queue::Fifo(fifo) => {
                let mut kept = VecDeque::with_capacity(fifo.len());
                for entry in fifo.drain(..) {
                    if entry.bound >= gamma {
                        kept.push_back(entry);
                    } else {
                        arena.release(entry.slot);
                    }
                }
                *fifo = kept;
            }
        }

        before - self.len()
    }

    /// Number of queued boxes.
    pub fn len(&self) -> usize {
        match &self.queue {
            Queue::Heap(heap) => heap.len(),
            Queue::Fifo(fifo) => fifo.len(),
        }
    }

    /// Whether no box is queued.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total number of boxes pushed so far.
    pub fn total_pushed(&self) -> u64 {
        self.pushed
    }

    /// Total number of boxes popped so far.
    pub fn total_popped(&self) -> u64 {
        self.popped
    }
}
