//! Plain binary search trees: search, update, validation, rotations and
//! rebalancing by sorted rebuild.

pub mod tree;
pub mod util;

pub use tree::Bst;
pub use util::{
    balance_bst, delete_bst_node, insert_bst, is_valid_bst, lowest_common_ancestor, rotate_left,
    rotate_right, search_bst,
};
