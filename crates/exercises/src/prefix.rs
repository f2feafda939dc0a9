//! Running-total helpers.

use std::collections::HashSet;
use std::hash::Hash;

use crate::error::ExerciseError;

/// Largest height the three stacks can share after removing elements from
/// their tops. The first element of each slice is the top.
pub fn equal_stacks(a: &[u64], b: &[u64], c: &[u64]) -> u64 {
    let mut stacks = [a, b, c];
    let mut heights = stacks.map(|s| s.iter().sum::<u64>());
    loop {
        let tallest = (0..3).max_by_key(|&i| heights[i]).unwrap_or(0);
        if heights.iter().all(|&h| h == heights[tallest]) {
            return heights[tallest];
        }
        let Some((&top, rest)) = stacks[tallest].split_first() else {
            return 0;
        };
        heights[tallest] -= top;
        stacks[tallest] = rest;
    }
}

/// Inclusive range sums in O(1) after an O(n) build.
#[derive(Debug, Clone)]
pub struct PrefixSums {
    prefix: Vec<i64>,
}

impl PrefixSums {
    pub fn new(values: &[i64]) -> Self {
        let mut prefix = Vec::with_capacity(values.len() + 1);
        prefix.push(0);
        let mut total = 0;
        for &v in values {
            total += v;
            prefix.push(total);
        }
        Self { prefix }
    }

    /// Sum of `values[l..=r]`.
    pub fn range_sum(&self, l: usize, r: usize) -> Result<i64, ExerciseError> {
        if l > r || r >= self.len() {
            return Err(ExerciseError::InvalidArgument("range out of bounds"));
        }
        Ok(self.prefix[r + 1] - self.prefix[l])
    }

    pub fn len(&self) -> usize {
        self.prefix.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// For each `i`, how many distinct values appear in both `a[..=i]` and
/// `b[..=i]`.
pub fn prefix_common_counts<T: Hash + Eq>(a: &[T], b: &[T]) -> Result<Vec<usize>, ExerciseError> {
    if a.len() != b.len() {
        return Err(ExerciseError::InvalidArgument("sequences differ in length"));
    }
    let mut seen_a = HashSet::new();
    let mut seen_b = HashSet::new();
    let mut common = 0;
    let mut out = Vec::with_capacity(a.len());
    for (x, y) in a.iter().zip(b) {
        if seen_a.insert(x) && seen_b.contains(x) {
            common += 1;
        }
        if seen_b.insert(y) && seen_a.contains(y) {
            common += 1;
        }
        out.push(common);
    }
    Ok(out)
}
