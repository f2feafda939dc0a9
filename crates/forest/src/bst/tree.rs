use algokit_util::default_comparator;

use crate::error::ForestError;
use crate::node::TreeNode;
use crate::print::print;
use crate::traversal::{in_order, level_order, pre_order, tree_height, tree_max, tree_min};
use crate::util::{find, join, push};

use super::util::{
    balance_bst, delete_bst_node, insert_bst, is_valid_bst, lowest_common_ancestor, rotate_left,
    rotate_right,
};

/// Unbalanced binary search tree over distinct keys.
///
/// Deleted nodes are unlinked but stay in the arena and their slots are never
/// reused. Deleting a key with two children moves the successor's key into the
/// deleted key's node, so an index from [`Bst::find`] is only valid until the
/// next [`Bst::delete`].
pub struct Bst<K, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    root: Option<u32>,
    len: usize,
    comparator: C,
    arena: Vec<TreeNode<K>>,
}

impl<K> Bst<K, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }

    /// Builds a height-balanced tree from ascending keys in O(n), rooting
    /// each range at its median. Runs of equal keys keep their first key.
    pub fn from_sorted(sorted: &[K]) -> Self
    where
        K: Clone,
    {
        let mut keys = sorted.to_vec();
        keys.dedup_by(|a, b| a == b);
        let mut tree = Self::new();
        tree.root = join_sorted(&mut tree.arena, &keys);
        tree.len = keys.len();
        tree
    }
}

fn join_sorted<K: Clone>(arena: &mut Vec<TreeNode<K>>, keys: &[K]) -> Option<u32> {
    if keys.is_empty() {
        return None;
    }
    let mid = keys.len() / 2;
    let l = join_sorted(arena, &keys[..mid]);
    let r = join_sorted(arena, &keys[mid + 1..]);
    Some(join(arena, TreeNode::new(keys[mid].clone()), l, r))
}

impl<K> Default for Bst<K, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> FromIterator<K> for Bst<K, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        for key in iter {
            tree.insert(key);
        }
        tree
    }
}

impl<K, C> Bst<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            len: 0,
            comparator,
            arena: Vec::new(),
        }
    }

    /// Inserts `key`; returns `false` if an equal key is already present.
    pub fn insert(&mut self, key: K) -> bool {
        if self.find(&key).is_some() {
            return false;
        }
        let n = push(&mut self.arena, TreeNode::new(key));
        self.root = insert_bst(&mut self.arena, self.root, n, &self.comparator);
        self.len += 1;
        true
    }

    pub fn find(&self, key: &K) -> Option<u32> {
        find(&self.arena, self.root, key, &self.comparator)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Removes `key`; returns `false` if it was absent.
    pub fn delete(&mut self, key: &K) -> bool
    where
        K: Clone,
    {
        if self.find(key).is_none() {
            return false;
        }
        self.root = delete_bst_node(&mut self.arena, self.root, key, &self.comparator);
        self.len -= 1;
        true
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn root_index(&self) -> Option<u32> {
        self.root
    }

    pub fn arena(&self) -> &[TreeNode<K>] {
        &self.arena
    }

    pub fn key(&self, idx: u32) -> &K {
        &self.arena[idx as usize].k
    }

    pub fn height(&self) -> usize {
        tree_height(&self.arena, self.root)
    }

    pub fn min(&self) -> Result<&K, ForestError> {
        tree_min(&self.arena, self.root)
    }

    pub fn max(&self) -> Result<&K, ForestError> {
        tree_max(&self.arena, self.root)
    }

    pub fn in_order(&self) -> Vec<K>
    where
        K: Clone,
    {
        in_order(&self.arena, self.root)
    }

    pub fn pre_order(&self) -> Vec<K>
    where
        K: Clone,
    {
        pre_order(&self.arena, self.root)
    }

    pub fn level_order(&self) -> Vec<K>
    where
        K: Clone,
    {
        level_order(&self.arena, self.root)
    }

    pub fn is_valid(&self) -> bool {
        is_valid_bst(&self.arena, self.root, &self.comparator)
    }

    /// Rebuilds the tree into a height-balanced shape.
    pub fn balance(&mut self) {
        self.root = balance_bst(&mut self.arena, self.root);
    }

    /// Rotates the subtree rooted at node `idx` left.
    ///
    /// Returns the index now occupying that position.
    pub fn rotate_left_at(&mut self, idx: u32) -> Option<u32> {
        let top = rotate_left(&mut self.arena, Some(idx));
        if self.root == Some(idx) {
            self.root = top;
        }
        top
    }

    /// Rotates the subtree rooted at node `idx` right.
    pub fn rotate_right_at(&mut self, idx: u32) -> Option<u32> {
        let top = rotate_right(&mut self.arena, Some(idx));
        if self.root == Some(idx) {
            self.root = top;
        }
        top
    }

    /// Key of the lowest common ancestor of the nodes holding `a` and `b`.
    pub fn lowest_common_ancestor(&self, a: &K, b: &K) -> Option<&K> {
        let p = self.find(a)?;
        let q = self.find(b)?;
        lowest_common_ancestor(&self.arena, self.root, p, q).map(|i| self.key(i))
    }

    pub fn print(&self, tab: &str) -> String
    where
        K: std::fmt::Debug,
    {
        print(&self.arena, self.root, tab)
    }
}
