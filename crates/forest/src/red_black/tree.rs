use algokit_util::default_comparator;

use crate::error::ForestError;
use crate::node::{RbNode, TreeNode};
use crate::print::print;
use crate::traversal::{in_order, level_order, tree_height};
use crate::util::{find, find_or_next_lower, first, last, next, prev, push};

use super::util::{assert_red_black_tree, insert_rb, remove_rb};

/// Red-black tree over distinct keys.
///
/// Removed nodes go on a free list and their slots are reused by later
/// inserts, so a node index is stable only while its key stays in the tree.
pub struct RbTree<K, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    root: Option<u32>,
    len: usize,
    comparator: C,
    arena: Vec<RbNode<K>>,
    free: Vec<u32>,
}

impl<K> RbTree<K, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K> Default for RbTree<K, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> FromIterator<K> for RbTree<K, fn(&K, &K) -> i32>
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

impl<K, C> RbTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            len: 0,
            comparator,
            arena: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Inserts `key` and returns the index of its node, or `None` if an
    /// equal key is already present.
    pub fn insert(&mut self, key: K) -> Option<u32> {
        if self.find(&key).is_some() {
            return None;
        }
        let node = TreeNode::new(key);
        let n = match self.free.pop() {
            Some(slot) => {
                self.arena[slot as usize] = node;
                slot
            }
            None => push(&mut self.arena, node),
        };
        self.root = insert_rb(&mut self.arena, self.root, n, &self.comparator);
        self.len += 1;
        Some(n)
    }

    /// Removes `key`; returns `false` if it was absent.
    pub fn remove(&mut self, key: &K) -> bool {
        match self.find(key) {
            Some(n) => {
                self.unlink(n);
                true
            }
            None => false,
        }
    }

    /// Removes the node at `idx`; returns `false` if `idx` is not a live node
    /// of this tree.
    pub fn remove_index(&mut self, idx: u32) -> bool {
        let Some(node) = self.arena.get(idx as usize) else {
            return false;
        };
        if self.find(&node.k) != Some(idx) {
            return false;
        }
        self.unlink(idx);
        true
    }

    fn unlink(&mut self, n: u32) {
        self.root = remove_rb(&mut self.arena, self.root, n);
        self.free.push(n);
        self.len -= 1;
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
        self.arena.clear();
        self.free.clear();
    }

    pub fn find(&self, key: &K) -> Option<u32> {
        find(&self.arena, self.root, key, &self.comparator)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Node holding `key`, or the greatest key below it.
    pub fn floor(&self, key: &K) -> Option<u32> {
        find_or_next_lower(&self.arena, self.root, key, &self.comparator)
    }

    pub fn key(&self, idx: u32) -> &K {
        &self.arena[idx as usize].k
    }

    pub fn first(&self) -> Option<u32> {
        first(&self.arena, self.root)
    }

    pub fn last(&self) -> Option<u32> {
        last(&self.arena, self.root)
    }

    pub fn next(&self, idx: u32) -> Option<u32> {
        next(&self.arena, idx)
    }

    pub fn prev(&self, idx: u32) -> Option<u32> {
        prev(&self.arena, idx)
    }

    pub fn min(&self) -> Result<&K, ForestError> {
        self.first().map(|i| self.key(i)).ok_or(ForestError::EmptyTree)
    }

    pub fn max(&self) -> Result<&K, ForestError> {
        self.last().map(|i| self.key(i)).ok_or(ForestError::EmptyTree)
    }

    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            arena: &self.arena,
            curr: self.first(),
        }
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

    pub fn arena(&self) -> &[RbNode<K>] {
        &self.arena
    }

    pub fn height(&self) -> usize {
        tree_height(&self.arena, self.root)
    }

    pub fn black_height(&self) -> Option<usize> {
        assert_red_black_tree(&self.arena, self.root, &self.comparator).ok()
    }

    pub fn assert_valid(&self) -> Result<usize, String> {
        assert_red_black_tree(&self.arena, self.root, &self.comparator)
    }

    pub fn is_valid(&self) -> bool {
        self.assert_valid().is_ok()
    }

    pub fn in_order(&self) -> Vec<K>
    where
        K: Clone,
    {
        in_order(&self.arena, self.root)
    }

    pub fn level_order(&self) -> Vec<K>
    where
        K: Clone,
    {
        level_order(&self.arena, self.root)
    }

    pub fn print(&self, tab: &str) -> String
    where
        K: std::fmt::Debug,
    {
        print(&self.arena, self.root, tab)
    }
}

/// Ascending iterator over the keys of an [`RbTree`].
pub struct Iter<'a, K> {
    arena: &'a [RbNode<K>],
    curr: Option<u32>,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.curr?;
        self.curr = next(self.arena, i);
        Some(&self.arena[i as usize].k)
    }
}
