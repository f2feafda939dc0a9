use algokit_util::default_comparator;

use crate::error::ForestError;
use crate::node::{AvlNode, TreeNode};
use crate::print::print;
use crate::traversal::{in_order, level_order, pre_order, tree_height, tree_max, tree_min};
use crate::util::{find, push};

use super::util::{insert_avl, is_avl_tree};

/// Self-balancing AVL tree over distinct keys.
pub struct AvlTree<K, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    root: Option<u32>,
    comparator: C,
    arena: Vec<AvlNode<K>>,
}

impl<K> AvlTree<K, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K> Default for AvlTree<K, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> FromIterator<K> for AvlTree<K, fn(&K, &K) -> i32>
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

impl<K, C> AvlTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            comparator,
            arena: Vec::new(),
        }
    }

    /// Inserts `key` and rebalances; returns `false` for a duplicate.
    pub fn insert(&mut self, key: K) -> bool {
        if self.find(&key).is_some() {
            return false;
        }
        let n = push(&mut self.arena, TreeNode::new(key));
        self.root = insert_avl(&mut self.arena, self.root, n, &self.comparator);
        true
    }

    pub fn find(&self, key: &K) -> Option<u32> {
        find(&self.arena, self.root, key, &self.comparator)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn root_index(&self) -> Option<u32> {
        self.root
    }

    pub fn root_key(&self) -> Option<&K> {
        self.root.map(|r| &self.arena[r as usize].k)
    }

    pub fn arena(&self) -> &[AvlNode<K>] {
        &self.arena
    }

    /// Height as recorded on the root node.
    pub fn height(&self) -> usize {
        self.root
            .map_or(0, |r| self.arena[r as usize].meta.0 as usize)
    }

    /// Height measured by walking the tree.
    pub fn measured_height(&self) -> usize {
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
        is_avl_tree(&self.arena, self.root, &self.comparator)
    }

    pub fn print(&self, tab: &str) -> String
    where
        K: std::fmt::Debug,
    {
        print(&self.arena, self.root, tab)
    }
}
