//! Compressed prefix tree keyed by strings.

mod node;
mod tree;

pub use node::RadixNode;
pub use tree::RadixTree;
