//! Arena-backed ordered trees.
//!
//! Plain, AVL and red-black search trees share one node record
//! ([`TreeNode`]) and one set of link/rotation routines. On top of them sit a
//! completely-fair-scheduler simulator, a radix tree and a converter between
//! general trees and their left-child/right-sibling binary form.

pub mod avl;
pub mod bst;
pub mod cfs;
pub mod error;
pub mod lcrs;
pub mod node;
pub mod print;
pub mod radix;
pub mod red_black;
pub mod traversal;
pub mod types;
pub mod util;

pub use avl::{assert_avl_tree, insert_avl, is_avl_tree, AvlTree};
pub use bst::{
    balance_bst, delete_bst_node, insert_bst, is_valid_bst, lowest_common_ancestor, rotate_left,
    rotate_right, search_bst, Bst,
};
pub use cfs::{nice_to_weight, CfsScheduler, SchedulerConfig, Task};
pub use error::ForestError;
pub use lcrs::{from_binary, to_binary, GeneralNode};
pub use node::{AvlNode, Color, Height, RbNode, TreeNode};
pub use print::print;
pub use radix::{RadixNode, RadixTree};
pub use red_black::{
    assert_red_black_tree, black_height, insert_rb, is_valid_red_black, remove_rb, RbTree,
};
pub use traversal::{
    contains, count_nodes, in_order, level_order, pre_order, tree_height, tree_max, tree_min,
};
pub use types::{ColorNode, HeightNode, KeyNode, Node, NodeMeta};
pub use util::{find, first, join, last, next, prev, push};
