//! Reducers that keep a bounded heap while scanning their input.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::hash::Hash;

use crate::min_heap::MinHeap;

/// The `k` largest values, largest first. O(n log k).
pub fn k_largest_elements<T: Ord + Clone>(values: &[T], k: usize) -> Vec<T> {
    if k == 0 {
        return Vec::new();
    }
    let mut heap = MinHeap::with_capacity(k + 1);
    for v in values {
        heap.insert(v.clone());
        if heap.size() > k {
            let _ = heap.extract_min();
        }
    }
    let mut out = heap.into_sorted_vec();
    out.reverse();
    out
}

/// Merges ascending lists into one ascending list.
///
/// Equal values are taken from the earlier list first.
pub fn merge_k_sorted_lists<T: Ord + Clone>(lists: &[Vec<T>]) -> Vec<T> {
    let total = lists.iter().map(Vec::len).sum();
    let mut out = Vec::with_capacity(total);
    // (value, source list, offset in source)
    let mut heap: MinHeap<(T, usize, usize)> = lists
        .iter()
        .enumerate()
        .filter_map(|(src, list)| list.first().map(|v| (v.clone(), src, 0)))
        .collect();

    while let Ok((v, src, offset)) = heap.extract_min() {
        out.push(v);
        if let Some(next) = lists[src].get(offset + 1) {
            heap.insert((next.clone(), src, offset + 1));
        }
    }
    out
}

/// Distinct values with their count and first position, in first-seen order.
fn frequencies<T: Hash + Eq>(values: &[T]) -> Vec<(usize, usize)> {
    let mut seen: HashMap<&T, usize> = HashMap::new();
    // (count, first index)
    let mut counts: Vec<(usize, usize)> = Vec::new();
    for (i, v) in values.iter().enumerate() {
        match seen.get(v) {
            Some(&slot) => counts[slot].0 += 1,
            None => {
                seen.insert(v, counts.len());
                counts.push((1, i));
            }
        }
    }
    counts
}

/// The `k` most frequent values, most frequent first; ties go to the value
/// seen first.
pub fn top_k_frequent<T: Hash + Eq + Clone>(values: &[T], k: usize) -> Vec<T> {
    if k == 0 {
        return Vec::new();
    }
    // The weakest candidate (lowest count, latest first sighting) sits on top.
    let mut heap: MinHeap<(usize, Reverse<usize>)> = MinHeap::with_capacity(k + 1);
    for (count, first) in frequencies(values) {
        heap.insert((count, Reverse(first)));
        if heap.size() > k {
            let _ = heap.extract_min();
        }
    }
    let mut out: Vec<T> = heap
        .into_sorted_vec()
        .into_iter()
        .map(|(_, Reverse(first))| values[first].clone())
        .collect();
    out.reverse();
    out
}

/// Bucket-sort variant of [`top_k_frequent`]; O(n) and identical output.
pub fn top_k_frequent_bucket<T: Hash + Eq + Clone>(values: &[T], k: usize) -> Vec<T> {
    let mut buckets: Vec<Vec<usize>> = vec![Vec::new(); values.len() + 1];
    for (count, first) in frequencies(values) {
        buckets[count].push(first);
    }
    buckets
        .iter()
        .rev()
        .flatten()
        .take(k)
        .map(|&first| values[first].clone())
        .collect()
}
