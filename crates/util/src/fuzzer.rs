use std::cell::RefCell;
use std::collections::HashSet;

use rand::{rngs::OsRng, seq::SliceRandom, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// Seed bytes accepted by [`Fuzzer::new`].
pub type FuzzerSeed = [u8; 32];

/// Seeded random input generator for kernel tests.
///
/// Uses the xoshiro256** PRNG so a failing randomized run can be replayed
/// from [`Fuzzer::seed`].
///
/// # Examples
///
/// ```
/// use algokit_util::Fuzzer;
///
/// let fuzzer = Fuzzer::from_u64(7);
/// let keys = fuzzer.distinct_ints(50, -1000, 1000);
/// assert_eq!(keys.len(), 50);
///
/// let n = fuzzer.random_int(1, 10);
/// assert!((1..=10).contains(&n));
/// ```
pub struct Fuzzer {
    /// The seed used to initialize the PRNG.
    pub seed: FuzzerSeed,
    rng: RefCell<Xoshiro256StarStar>,
}

impl Fuzzer {
    /// Create a new fuzzer with an optional seed.
    ///
    /// If no seed is provided, a random seed is drawn from `OsRng`.
    pub fn new(seed: Option<FuzzerSeed>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });
        Self {
            seed,
            rng: RefCell::new(Xoshiro256StarStar::from_seed(seed)),
        }
    }

    /// Create a fuzzer whose seed is derived from a single integer.
    pub fn from_u64(n: u64) -> Self {
        let mut seed = [0u8; 32];
        for chunk in seed.chunks_mut(8) {
            chunk.copy_from_slice(&n.to_le_bytes());
        }
        Self::new(Some(seed))
    }

    pub fn seed(&self) -> FuzzerSeed {
        self.seed
    }

    /// Random integer in `[min, max]` (inclusive).
    pub fn random_int(&self, min: i64, max: i64) -> i64 {
        self.rng.borrow_mut().gen_range(min..=max)
    }

    /// Random boolean that is true with the given probability.
    pub fn random_bool(&self, probability: f64) -> bool {
        self.rng.borrow_mut().gen_bool(probability)
    }

    /// Pick a random element from a non-empty slice.
    pub fn pick<'a, T>(&self, elements: &'a [T]) -> Option<&'a T> {
        elements.choose(&mut *self.rng.borrow_mut())
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&self, elements: &mut [T]) {
        elements.shuffle(&mut *self.rng.borrow_mut());
    }

    /// Repeat a callback `times` times and collect results.
    pub fn repeat<T, F>(&self, times: usize, mut callback: F) -> Vec<T>
    where
        F: FnMut() -> T,
    {
        (0..times).map(|_| callback()).collect()
    }

    /// `len` random integers drawn from `[min, max]`, duplicates allowed.
    pub fn ints(&self, len: usize, min: i64, max: i64) -> Vec<i64> {
        self.repeat(len, || self.random_int(min, max))
    }

    /// `len` distinct integers from `[min, max]` in random order.
    ///
    /// The range is clamped to `len` when it is too narrow to hold that many
    /// distinct values.
    pub fn distinct_ints(&self, len: usize, min: i64, max: i64) -> Vec<i64> {
        let span = (max - min + 1).max(0) as usize;
        let len = len.min(span);
        let mut seen = HashSet::with_capacity(len);
        let mut out = Vec::with_capacity(len);
        while out.len() < len {
            let n = self.random_int(min, max);
            if seen.insert(n) {
                out.push(n);
            }
        }
        out
    }

    /// `count` ascending lists, each up to `max_len` long.
    pub fn sorted_lists(&self, count: usize, max_len: usize, min: i64, max: i64) -> Vec<Vec<i64>> {
        self.repeat(count, || {
            let len = self.random_int(0, max_len as i64) as usize;
            let mut list = self.ints(len, min, max);
            list.sort_unstable();
            list
        })
    }

    /// Random string of `len` characters drawn from `chars`.
    pub fn random_string(&self, len: usize, chars: &str) -> String {
        let chars: Vec<char> = chars.chars().collect();
        if chars.is_empty() {
            return String::new();
        }
        let mut rng = self.rng.borrow_mut();
        (0..len)
            .map(|_| chars[rng.gen_range(0..chars.len())])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzzer_random_int() {
        let fuzzer = Fuzzer::new(None);
        for _ in 0..100 {
            let n = fuzzer.random_int(1, 10);
            assert!((1..=10).contains(&n));
        }
    }

    #[test]
    fn test_fuzzer_reproducible() {
        let fuzzer1 = Fuzzer::new(Some([1u8; 32]));
        let fuzzer2 = Fuzzer::new(Some([1u8; 32]));
        for _ in 0..10 {
            assert_eq!(fuzzer1.random_int(0, 1000), fuzzer2.random_int(0, 1000));
        }
    }

    #[test]
    fn test_fuzzer_distinct_ints() {
        let fuzzer = Fuzzer::from_u64(3);
        let mut keys = fuzzer.distinct_ints(200, 0, 10_000);
        assert_eq!(keys.len(), 200);
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 200);
    }

    #[test]
    fn test_fuzzer_distinct_ints_narrow_range() {
        let fuzzer = Fuzzer::from_u64(4);
        let mut keys = fuzzer.distinct_ints(50, 1, 5);
        keys.sort_unstable();
        assert_eq!(keys, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_fuzzer_sorted_lists() {
        let fuzzer = Fuzzer::from_u64(5);
        for list in fuzzer.sorted_lists(20, 10, -50, 50) {
            assert!(list.len() <= 10);
            assert!(list.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn test_fuzzer_pick_and_shuffle() {
        let fuzzer = Fuzzer::from_u64(6);
        let empty: [i32; 0] = [];
        assert_eq!(fuzzer.pick(&empty), None);

        let choices = ["a", "b", "c"];
        let picked = fuzzer.pick(&choices).copied();
        assert!(picked.is_some_and(|p| choices.contains(&p)));

        let mut items: Vec<i32> = (0..20).collect();
        fuzzer.shuffle(&mut items);
        items.sort_unstable();
        assert_eq!(items, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_fuzzer_random_string() {
        let fuzzer = Fuzzer::from_u64(8);
        let s = fuzzer.random_string(16, "ab");
        assert_eq!(s.chars().count(), 16);
        assert!(s.chars().all(|c| c == 'a' || c == 'b'));
        assert_eq!(fuzzer.random_string(4, ""), "");
    }
}
