//! Read-only traversals and structural queries.
//!
//! All walks use an explicit stack or queue, so degenerate (list-shaped)
//! trees do not exhaust the call stack.

use std::collections::VecDeque;

use crate::error::ForestError;
use crate::types::{KeyNode, Node};
use crate::util::{first, get_l, get_r, last};

/// Keys in left, node, right order.
pub fn in_order<K, N>(arena: &[N], root: Option<u32>) -> Vec<K>
where
    K: Clone,
    N: KeyNode<K>,
{
    let mut out = Vec::new();
    let mut stack: Vec<u32> = Vec::new();
    let mut curr = root;
    loop {
        while let Some(i) = curr {
            stack.push(i);
            curr = get_l(arena, i);
        }
        let Some(i) = stack.pop() else {
            break;
        };
        out.push(arena[i as usize].key().clone());
        curr = get_r(arena, i);
    }
    out
}

/// Keys in node, left, right order.
pub fn pre_order<K, N>(arena: &[N], root: Option<u32>) -> Vec<K>
where
    K: Clone,
    N: KeyNode<K>,
{
    let mut out = Vec::new();
    let mut stack: Vec<u32> = root.into_iter().collect();
    while let Some(i) = stack.pop() {
        out.push(arena[i as usize].key().clone());
        if let Some(r) = get_r(arena, i) {
            stack.push(r);
        }
        if let Some(l) = get_l(arena, i) {
            stack.push(l);
        }
    }
    out
}

/// Keys level by level, left to right.
pub fn level_order<K, N>(arena: &[N], root: Option<u32>) -> Vec<K>
where
    K: Clone,
    N: KeyNode<K>,
{
    let mut out = Vec::new();
    let mut queue: VecDeque<u32> = root.into_iter().collect();
    while let Some(i) = queue.pop_front() {
        out.push(arena[i as usize].key().clone());
        queue.extend(get_l(arena, i));
        queue.extend(get_r(arena, i));
    }
    out
}

/// Number of nodes under `root`.
pub fn count_nodes<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    let mut count = 0;
    let mut stack: Vec<u32> = root.into_iter().collect();
    while let Some(i) = stack.pop() {
        count += 1;
        stack.extend(get_l(arena, i));
        stack.extend(get_r(arena, i));
    }
    count
}

/// Height counted in nodes: empty tree 0, single node 1.
pub fn tree_height<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    let mut height = 0;
    let mut level: Vec<u32> = root.into_iter().collect();
    while !level.is_empty() {
        height += 1;
        level = level
            .iter()
            .flat_map(|&i| get_l(arena, i).into_iter().chain(get_r(arena, i)))
            .collect();
    }
    height
}

/// Key at the end of the leftmost spine.
///
/// This follows the spine rather than scanning every node, so on a tree that
/// is not a BST it is the leftmost key, not necessarily the smallest.
pub fn tree_min<K, N>(arena: &[N], root: Option<u32>) -> Result<&K, ForestError>
where
    N: KeyNode<K>,
{
    first(arena, root)
        .map(|i| arena[i as usize].key())
        .ok_or(ForestError::EmptyTree)
}

/// Key at the end of the rightmost spine.
pub fn tree_max<K, N>(arena: &[N], root: Option<u32>) -> Result<&K, ForestError>
where
    N: KeyNode<K>,
{
    last(arena, root)
        .map(|i| arena[i as usize].key())
        .ok_or(ForestError::EmptyTree)
}

/// Whether some node under `root` holds a key equal to `key`.
///
/// Scans the whole tree, so it works on trees with no ordering.
pub fn contains<K, N>(arena: &[N], root: Option<u32>, key: &K) -> bool
where
    K: PartialEq,
    N: KeyNode<K>,
{
    let mut stack: Vec<u32> = root.into_iter().collect();
    while let Some(i) = stack.pop() {
        if arena[i as usize].key() == key {
            return true;
        }
        stack.extend(get_l(arena, i));
        stack.extend(get_r(arena, i));
    }
    false
}
