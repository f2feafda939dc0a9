//! Streaming medians over two heaps.
//!
//! `lo` is a max-heap holding the smaller half, `hi` a min-heap holding the
//! larger half; `lo` may hold one element more than `hi`.

use std::cmp::Reverse;
use std::collections::HashMap;

use tracing::trace;

use crate::error::HeapError;
use crate::min_heap::MinHeap;

fn mean(a: i64, b: i64) -> f64 {
    (a as f64 + b as f64) / 2.0
}

#[derive(Default)]
pub struct MedianFinder {
    lo: MinHeap<Reverse<i64>>,
    hi: MinHeap<i64>,
}

impl MedianFinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_num(&mut self, num: i64) {
        self.lo.insert(Reverse(num));
        if let Ok(Reverse(top)) = self.lo.extract_min() {
            self.hi.insert(top);
        }
        if self.hi.size() > self.lo.size() {
            if let Ok(top) = self.hi.extract_min() {
                self.lo.insert(Reverse(top));
            }
        }
        trace!(lo = self.lo.size(), hi = self.hi.size(), "rebalanced");
    }

    pub fn find_median(&self) -> Result<f64, HeapError> {
        let &Reverse(lo) = self.lo.peek()?;
        if self.lo.size() > self.hi.size() {
            return Ok(lo as f64);
        }
        let &hi = self.hi.peek()?;
        Ok(mean(lo, hi))
    }

    pub fn len(&self) -> usize {
        self.lo.size() + self.hi.size()
    }

    pub fn is_empty(&self) -> bool {
        self.lo.is_empty()
    }
}

/// Two heaps over a sliding window with lazy deletion: a value leaving the
/// window is only counted in `delayed` and dropped once it reaches a heap top.
struct WindowHeaps {
    small: MinHeap<Reverse<i64>>,
    large: MinHeap<i64>,
    delayed: HashMap<i64, usize>,
    small_size: usize,
    large_size: usize,
}

impl WindowHeaps {
    fn new() -> Self {
        Self {
            small: MinHeap::new(),
            large: MinHeap::new(),
            delayed: HashMap::new(),
            small_size: 0,
            large_size: 0,
        }
    }

    fn take_delayed(&mut self, v: i64) -> bool {
        match self.delayed.get_mut(&v) {
            Some(n) if *n > 0 => {
                *n -= 1;
                if *n == 0 {
                    self.delayed.remove(&v);
                }
                true
            }
            _ => false,
        }
    }

    fn prune_small(&mut self) {
        while let Ok(&Reverse(top)) = self.small.peek() {
            if !self.take_delayed(top) {
                break;
            }
            let _ = self.small.extract_min();
        }
    }

    fn prune_large(&mut self) {
        while let Ok(&top) = self.large.peek() {
            if !self.take_delayed(top) {
                break;
            }
            let _ = self.large.extract_min();
        }
    }

    fn rebalance(&mut self) {
        if self.small_size > self.large_size + 1 {
            if let Ok(Reverse(top)) = self.small.extract_min() {
                self.large.insert(top);
            }
            self.small_size -= 1;
            self.large_size += 1;
            self.prune_small();
        } else if self.small_size < self.large_size {
            if let Ok(top) = self.large.extract_min() {
                self.small.insert(Reverse(top));
            }
            self.small_size += 1;
            self.large_size -= 1;
            self.prune_large();
        }
        trace!(small = self.small_size, large = self.large_size, "rebalanced");
    }

    fn insert(&mut self, v: i64) {
        match self.small.peek() {
            Ok(&Reverse(top)) if v > top => {
                self.large.insert(v);
                self.large_size += 1;
            }
            _ => {
                self.small.insert(Reverse(v));
                self.small_size += 1;
            }
        }
        self.rebalance();
    }

    fn erase(&mut self, v: i64) {
        *self.delayed.entry(v).or_insert(0) += 1;
        match self.small.peek() {
            Ok(&Reverse(top)) if v <= top => {
                self.small_size -= 1;
                if v == top {
                    self.prune_small();
                }
            }
            _ => {
                self.large_size -= 1;
                if self.large.peek() == Ok(&v) {
                    self.prune_large();
                }
            }
        }
        self.rebalance();
    }

    fn median(&self, k: usize) -> Result<f64, HeapError> {
        let &Reverse(lo) = self.small.peek()?;
        if k % 2 == 1 {
            return Ok(lo as f64);
        }
        let &hi = self.large.peek()?;
        Ok(mean(lo, hi))
    }
}

/// Median of every length-`k` window, left to right.
///
/// `k == 0` is rejected; a window longer than the input yields no medians.
pub fn sliding_window_median(values: &[i64], k: usize) -> Result<Vec<f64>, HeapError> {
    if k == 0 {
        return Err(HeapError::InvalidArgument("window size must be positive"));
    }
    if k > values.len() {
        return Ok(Vec::new());
    }
    let mut heaps = WindowHeaps::new();
    for &v in &values[..k] {
        heaps.insert(v);
    }
    let mut out = Vec::with_capacity(values.len() - k + 1);
    out.push(heaps.median(k)?);
    for i in k..values.len() {
        heaps.insert(values[i]);
        heaps.erase(values[i - k]);
        out.push(heaps.median(k)?);
    }
    Ok(out)
}
