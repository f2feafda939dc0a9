//! algokit-util - shared helpers for the algokit kernels.
//!
//! Holds the three-way comparator convention every ordered structure in the
//! workspace uses, and a seeded fuzzer for reproducible randomized tests.

pub mod cmp;
pub mod fuzzer;

pub use cmp::{default_comparator, from_ordering};
pub use fuzzer::{Fuzzer, FuzzerSeed};
