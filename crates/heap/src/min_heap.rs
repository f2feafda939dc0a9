//! Binary min-heap.
//!
//! ```text
//! parent(i) = (i - 1) / 2
//! left(i)   = 2i + 1
//! right(i)  = 2i + 2
//! data[parent(i)] <= data[i]  for all i > 0
//! ```
//!
//! A max-heap is `MinHeap<Reverse<T>>`.

use crate::error::HeapError;

#[derive(Clone, Debug)]
pub struct MinHeap<T: Ord> {
    data: Vec<T>,
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: Ord> MinHeap<T> {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Heapifies `data` bottom-up in O(n).
    pub fn from_vec(data: Vec<T>) -> Self {
        let mut heap = Self { data };
        for i in (0..heap.data.len() / 2).rev() {
            heap.sift_down(i);
        }
        heap
    }

    pub fn insert(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the smallest element.
    pub fn extract_min(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::EmptyHeap);
        }
        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let min = self.data.pop().ok_or(HeapError::EmptyHeap)?;
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Ok(min)
    }

    pub fn peek(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::EmptyHeap)
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Backing array in heap order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Whether every parent is no greater than its children.
    pub fn is_valid(&self) -> bool {
        (1..self.data.len()).all(|i| self.data[(i - 1) / 2] <= self.data[i])
    }

    /// Drains the heap smallest first.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.data.len());
        while let Ok(min) = self.extract_min() {
            out.push(min);
        }
        out
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let p = (i - 1) / 2;
            if self.data[p] <= self.data[i] {
                break;
            }
            self.data.swap(p, i);
            i = p;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.data.len();
        loop {
            let mut smallest = i;
            let l = 2 * i + 1;
            let r = 2 * i + 2;
            if l < n && self.data[l] < self.data[smallest] {
                smallest = l;
            }
            if r < n && self.data[r] < self.data[smallest] {
                smallest = r;
            }
            if smallest == i {
                break;
            }
            self.data.swap(i, smallest);
            i = smallest;
        }
    }
}

/// Sorts ascending: O(n) heapify, then n extractions.
pub fn heapsort<T: Ord>(values: Vec<T>) -> Vec<T> {
    MinHeap::from_vec(values).into_sorted_vec()
}

#[cfg(test)]
mod tests {
    use std::cmp::Reverse;

    use super::*;

    #[test]
    fn heapify_produces_valid_heap() {
        let heap = MinHeap::from_vec(vec![9, 4, 7, 1, 8, 2, 6, 3, 5]);
        assert!(heap.is_valid());
        assert_eq!(heap.peek(), Ok(&1));
    }

    #[test]
    fn reverse_gives_max_heap() {
        let mut heap: MinHeap<Reverse<i32>> = [3, 1, 4, 1, 5].into_iter().map(Reverse).collect();
        assert_eq!(heap.extract_min(), Ok(Reverse(5)));
        assert_eq!(heap.extract_min(), Ok(Reverse(4)));
    }
}
