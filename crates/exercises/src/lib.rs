//! Small collection primitives and exercises layered on the algokit kernels.

pub mod error;
pub mod expression;
pub mod glue;
pub mod huffman;
pub mod list;
pub mod prefix;
pub mod queue;
pub mod stack;

pub use error::ExerciseError;
pub use expression::{evaluate_postfix, is_balanced};
pub use glue::{
    chromatic_number, course_order, kth_largest, kth_smallest, last_stone_weight,
    sorted_to_balanced_bst,
};
pub use huffman::{build_codes, decode, encode, CodeTable};
pub use list::{has_cycle, merge_two_sorted, reverse_list, List, ListNode};
pub use prefix::{equal_stacks, prefix_common_counts, PrefixSums};
pub use queue::{CircularQueue, TwoStackQueue};
pub use stack::{MinMaxStack, MinStack};
