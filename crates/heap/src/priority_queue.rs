use std::cmp::Ordering;

use crate::error::HeapError;
use crate::min_heap::MinHeap;

struct Entry<P, T> {
    priority: P,
    seq: u64,
    item: T,
}

impl<P: Ord, T> PartialEq for Entry<P, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<P: Ord, T> Eq for Entry<P, T> {}

impl<P: Ord, T> PartialOrd for Entry<P, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: Ord, T> Ord for Entry<P, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.seq.cmp(&other.seq))
    }
}

/// Min-priority queue; items with equal priority leave in insertion order.
pub struct PriorityQueue<P: Ord, T> {
    heap: MinHeap<Entry<P, T>>,
    counter: u64,
}

impl<P: Ord, T> Default for PriorityQueue<P, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Ord, T> PriorityQueue<P, T> {
    pub fn new() -> Self {
        Self {
            heap: MinHeap::new(),
            counter: 0,
        }
    }

    pub fn push(&mut self, priority: P, item: T) {
        let seq = self.counter;
        self.counter += 1;
        self.heap.insert(Entry { priority, seq, item });
    }

    pub fn pop(&mut self) -> Result<T, HeapError> {
        self.heap.extract_min().map(|e| e.item)
    }

    /// Like [`PriorityQueue::pop`], also handing back the priority.
    pub fn pop_entry(&mut self) -> Result<(P, T), HeapError> {
        self.heap.extract_min().map(|e| (e.priority, e.item))
    }

    pub fn peek(&self) -> Result<&T, HeapError> {
        self.heap.peek().map(|e| &e.item)
    }

    pub fn peek_priority(&self) -> Result<&P, HeapError> {
        self.heap.peek().map(|e| &e.priority)
    }

    pub fn size(&self) -> usize {
        self.heap.size()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }
}
