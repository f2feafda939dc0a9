//! Heap kernel: an array-backed binary min-heap and the streaming
//! algorithms built on it.

pub mod error;
pub mod median;
pub mod min_heap;
pub mod priority_queue;
pub mod streaming;

pub use error::HeapError;
pub use median::{sliding_window_median, MedianFinder};
pub use min_heap::{heapsort, MinHeap};
pub use priority_queue::PriorityQueue;
pub use streaming::{k_largest_elements, merge_k_sorted_lists, top_k_frequent, top_k_frequent_bucket};
