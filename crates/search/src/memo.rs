use std::collections::HashMap;
use std::hash::Hash;

use tracing::debug;

/// Memoisation table owned by a single top-level call.
///
/// Counts lookups so callers can report how much work the cache saved.
#[derive(Debug)]
pub struct Memo<K, V> {
    table: HashMap<K, V>,
    hits: usize,
    misses: usize,
}

impl<K: Hash + Eq, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V> Memo<K, V> {
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    pub fn get(&mut self, key: &K) -> Option<&V> {
        match self.table.get(key) {
            Some(v) => {
                self.hits += 1;
                Some(v)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    pub fn insert(&mut self, key: K, value: V) {
        self.table.insert(key, value);
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Emits the lookup counters for the finished call `name`.
    pub fn report(&self, name: &'static str) {
        debug!(
            name,
            hits = self.hits,
            misses = self.misses,
            entries = self.table.len(),
            "memo stats"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_hits_and_misses() {
        let mut memo: Memo<u32, u32> = Memo::new();
        assert_eq!(memo.get(&1), None);
        memo.insert(1, 10);
        assert_eq!(memo.get(&1), Some(&10));
        assert_eq!(memo.get(&1), Some(&10));
        assert_eq!((memo.hits(), memo.misses(), memo.len()), (2, 1, 1));
    }
}
