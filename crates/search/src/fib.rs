//! Fibonacci numbers, sequential and fork-join.

use crate::error::SearchError;

/// Largest `n` whose Fibonacci number fits in a `u64`.
pub const MAX_FIB_N: u64 = 93;

/// `F(n)` with `F(0) = 0`, `F(1) = 1`.
pub fn fib(n: u64) -> Result<u64, SearchError> {
    if n > MAX_FIB_N {
        return Err(SearchError::InvalidArgument("fib(n) overflows u64 for n > 93"));
    }
    Ok(fib_iter(n))
}

fn fib_iter(n: u64) -> u64 {
    let (mut a, mut b) = (0u64, 1u64);
    for _ in 0..n {
        // `b` wraps only on the last step of n = 93 and is never read then
        (a, b) = (b, a.wrapping_add(b));
    }
    a
}

#[cfg(feature = "multithreaded")]
const SEQUENTIAL_CUTOFF: u64 = 24;

/// `F(n)` by fast doubling, evaluating `F(k)` and `F(k + 1)` in parallel with
/// `rayon::join` above a sequential cutoff.
#[cfg(feature = "multithreaded")]
pub fn parallel_fib(n: u64) -> Result<u64, SearchError> {
    if n > MAX_FIB_N {
        return Err(SearchError::InvalidArgument("fib(n) overflows u64 for n > 93"));
    }
    Ok(fib_doubling(n))
}

#[cfg(feature = "multithreaded")]
fn fib_doubling(n: u64) -> u64 {
    if n <= SEQUENTIAL_CUTOFF {
        return fib_iter(n);
    }
    let k = n / 2;
    let (a, b) = rayon::join(|| fib_doubling(k), || fib_doubling(k + 1));
    if n % 2 == 0 {
        // F(2k) = F(k) * (2 F(k+1) - F(k))
        a * (2 * b - a)
    } else {
        // F(2k+1) = F(k)^2 + F(k+1)^2
        a * a + b * b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values() {
        let got: Vec<u64> = (0..10).map(fib_iter).collect();
        assert_eq!(got, vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
    }
}
