//! Left-child / right-sibling encoding of general (n-ary) trees.
//!
//! In the binary form a node's `l` link points at its first child and its
//! `r` link at its next sibling, so any ordered tree fits in a binary arena.

use crate::node::TreeNode;
use crate::util::{get_l, get_r, push, set_l, set_p, set_r};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneralNode<T> {
    pub value: T,
    pub children: Vec<GeneralNode<T>>,
}

impl<T> GeneralNode<T> {
    pub fn new(value: T, children: Vec<GeneralNode<T>>) -> Self {
        Self { value, children }
    }

    pub fn leaf(value: T) -> Self {
        Self::new(value, Vec::new())
    }

    /// Number of nodes in this subtree.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(GeneralNode::size).sum::<usize>()
    }
}

/// Encodes `tree` into a fresh arena; returns the arena and the root index.
pub fn to_binary<T: Clone>(tree: &GeneralNode<T>) -> (Vec<TreeNode<T>>, u32) {
    let mut arena = Vec::with_capacity(tree.size());
    let root = encode(&mut arena, tree);
    (arena, root)
}

fn encode<T: Clone>(arena: &mut Vec<TreeNode<T>>, node: &GeneralNode<T>) -> u32 {
    let idx = push(arena, TreeNode::new(node.value.clone()));
    let mut prev: Option<u32> = None;
    for child in &node.children {
        let c = encode(arena, child);
        match prev {
            None => set_l(arena, idx, Some(c)),
            Some(sibling) => set_r(arena, sibling, Some(c)),
        }
        set_p(arena, c, Some(prev.unwrap_or(idx)));
        prev = Some(c);
    }
    idx
}

/// Decodes the binary form rooted at `root` back into a general tree.
///
/// The root's `r` link is ignored: a root has no siblings.
pub fn from_binary<T: Clone>(arena: &[TreeNode<T>], root: Option<u32>) -> Option<GeneralNode<T>> {
    root.map(|r| decode(arena, r))
}

fn decode<T: Clone>(arena: &[TreeNode<T>], idx: u32) -> GeneralNode<T> {
    let mut children = Vec::new();
    let mut child = get_l(arena, idx);
    while let Some(c) = child {
        children.push(decode(arena, c));
        child = get_r(arena, c);
    }
    GeneralNode::new(arena[idx as usize].k.clone(), children)
}
