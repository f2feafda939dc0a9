//! Optimal binary search tree cost.
//!
//! `freq[i]` is the access frequency of the `i`-th smallest key. A key at
//! depth `d` (root depth 1) costs `d * freq`.

use crate::memo::Memo;

/// Minimum total weighted search cost, memoised on `(i, j)` key ranges.
pub fn optimal_bst_cost(freq: &[u64]) -> u64 {
    let mut prefix = Vec::with_capacity(freq.len() + 1);
    prefix.push(0u64);
    for &f in freq {
        prefix.push(prefix[prefix.len() - 1] + f);
    }
    let mut memo = Memo::new();
    let cost = range_cost(&prefix, 0, freq.len(), &mut memo);
    memo.report("optimal_bst");
    cost
}

/// Cost of keys `i..j`.
fn range_cost(prefix: &[u64], i: usize, j: usize, memo: &mut Memo<(usize, usize), u64>) -> u64 {
    if i >= j {
        return 0;
    }
    if let Some(&hit) = memo.get(&(i, j)) {
        return hit;
    }
    let mut best = u64::MAX;
    for root in i..j {
        let below = range_cost(prefix, i, root, memo) + range_cost(prefix, root + 1, j, memo);
        best = best.min(below);
    }
    let cost = best + prefix[j] - prefix[i];
    memo.insert((i, j), cost);
    cost
}

/// Same contract as [`optimal_bst_cost`], without the cache.
pub fn optimal_bst_cost_plain(freq: &[u64]) -> u64 {
    if freq.is_empty() {
        return 0;
    }
    let total: u64 = freq.iter().sum();
    let below = (0..freq.len())
        .map(|root| {
            optimal_bst_cost_plain(&freq[..root]) + optimal_bst_cost_plain(&freq[root + 1..])
        })
        .min()
        .unwrap_or(0);
    total + below
}
