//! Height-balanced AVL trees.

pub mod tree;
pub mod util;

pub use tree::AvlTree;
pub use util::{assert_avl_tree, insert_avl, is_avl_tree};
