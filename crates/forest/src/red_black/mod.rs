//! Red-black trees.

pub mod tree;
pub mod util;

pub use tree::RbTree;
pub use util::{assert_red_black_tree, black_height, insert_rb, is_valid_red_black, remove_rb};
