//! Link helpers and in-order navigation shared by every tree flavour.
//!
//! Key-based helpers take an explicit comparator
//! (`Fn(&K, &K) -> i32`, see [`algokit_util::default_comparator`]).

pub mod swap;

use crate::types::{KeyNode, Node};

pub use swap::swap;

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Points `parent`'s link that used to hold `old` at `new` instead.
///
/// A `None` parent means `old` was a root; nothing to relink.
pub(crate) fn replace_child<N: Node>(arena: &mut [N], parent: Option<u32>, old: u32, new: Option<u32>) {
    if let Some(p) = parent {
        if get_l(arena, p) == Some(old) {
            set_l(arena, p, new);
        } else {
            set_r(arena, p, new);
        }
    }
}

/// Appends a detached node to the arena and returns its index.
pub fn push<N>(arena: &mut Vec<N>, node: N) -> u32 {
    arena.push(node);
    (arena.len() - 1) as u32
}

/// Appends `node` with the given children, fixing their parent links.
///
/// Builds arbitrary (not necessarily ordered) binary trees bottom-up:
///
/// ```
/// use algokit_forest::{in_order, join, TreeNode};
///
/// let mut arena: Vec<TreeNode<i32>> = Vec::new();
/// let l = join(&mut arena, TreeNode::new(1), None, None);
/// let r = join(&mut arena, TreeNode::new(3), None, None);
/// let root = join(&mut arena, TreeNode::new(2), Some(l), Some(r));
/// assert_eq!(in_order(&arena, Some(root)), vec![1, 2, 3]);
/// ```
pub fn join<N: Node>(arena: &mut Vec<N>, node: N, l: Option<u32>, r: Option<u32>) -> u32 {
    let idx = push(arena, node);
    set_l(arena, idx, l);
    set_r(arena, idx, r);
    if let Some(l) = l {
        set_p(arena, l, Some(idx));
    }
    if let Some(r) = r {
        set_p(arena, r, Some(idx));
    }
    idx
}

/// Leftmost node of the non-empty subtree at `idx`.
pub(crate) fn leftmost<N: Node>(arena: &[N], mut idx: u32) -> u32 {
    while let Some(l) = get_l(arena, idx) {
        idx = l;
    }
    idx
}

/// Leftmost node.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_l(arena, idx) {
            Some(l) => curr = Some(l),
            None => return Some(idx),
        }
    }
    curr
}

/// Rightmost node.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_r(arena, idx) {
            Some(r) => curr = Some(r),
            None => return Some(idx),
        }
    }
    curr
}

/// In-order successor.
pub fn next<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, node) {
        return first(arena, Some(r));
    }
    let mut curr = node;
    let mut p = get_p(arena, node);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor.
pub fn prev<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, node) {
        return last(arena, Some(l));
    }
    let mut curr = node;
    let mut p = get_p(arena, node);
    while let Some(pi) = p {
        if get_l(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// Finds a node by key.
pub fn find<K, N, C>(arena: &[N], root: Option<u32>, key: &K, comparator: &C) -> Option<u32>
where
    N: KeyNode<K>,
    C: Fn(&K, &K) -> i32,
{
    let mut curr = root;
    while let Some(i) = curr {
        let cmp = comparator(key, arena[i as usize].key());
        if cmp == 0 {
            return Some(i);
        }
        curr = if cmp < 0 {
            get_l(arena, i)
        } else {
            get_r(arena, i)
        };
    }
    None
}

/// Finds node by key, or the next lower node if the exact key does not exist.
pub fn find_or_next_lower<K, N, C>(
    arena: &[N],
    root: Option<u32>,
    key: &K,
    comparator: &C,
) -> Option<u32>
where
    N: KeyNode<K>,
    C: Fn(&K, &K) -> i32,
{
    let mut curr = root;
    let mut result: Option<u32> = None;
    while let Some(i) = curr {
        let cmp = comparator(arena[i as usize].key(), key);
        if cmp == 0 {
            return Some(i);
        }
        if cmp > 0 {
            curr = get_l(arena, i);
        } else {
            result = Some(i);
            curr = get_r(arena, i);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TreeNode;
    use algokit_util::default_comparator;

    fn sample() -> (Vec<TreeNode<i32>>, u32) {
        //      4
        //    /   \
        //   2     6
        //  / \   /
        // 1   3 5
        let mut arena = Vec::new();
        let n1 = join(&mut arena, TreeNode::new(1), None, None);
        let n3 = join(&mut arena, TreeNode::new(3), None, None);
        let n2 = join(&mut arena, TreeNode::new(2), Some(n1), Some(n3));
        let n5 = join(&mut arena, TreeNode::new(5), None, None);
        let n6 = join(&mut arena, TreeNode::new(6), Some(n5), None);
        let root = join(&mut arena, TreeNode::new(4), Some(n2), Some(n6));
        (arena, root)
    }

    #[test]
    fn walks_forward_and_backward() {
        let (arena, root) = sample();
        let mut forward = Vec::new();
        let mut curr = first(&arena, Some(root));
        while let Some(i) = curr {
            forward.push(arena[i as usize].k);
            curr = next(&arena, i);
        }
        assert_eq!(forward, vec![1, 2, 3, 4, 5, 6]);

        let mut backward = Vec::new();
        let mut curr = last(&arena, Some(root));
        while let Some(i) = curr {
            backward.push(arena[i as usize].k);
            curr = prev(&arena, i);
        }
        assert_eq!(backward, vec![6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn finds_exact_and_next_lower() {
        let (arena, root) = sample();
        let cmp = default_comparator::<i32>;
        assert_eq!(find(&arena, Some(root), &5, &cmp).map(|i| arena[i as usize].k), Some(5));
        assert_eq!(find(&arena, Some(root), &7, &cmp), None);
        let lower = find_or_next_lower(&arena, Some(root), &10, &cmp);
        assert_eq!(lower.map(|i| arena[i as usize].k), Some(6));
        assert_eq!(find_or_next_lower(&arena, Some(root), &0, &cmp), None);
    }

    #[test]
    fn empty_tree_navigation() {
        let arena: Vec<TreeNode<i32>> = Vec::new();
        assert_eq!(first(&arena, None), None);
        assert_eq!(last(&arena, None), None);
    }
}
