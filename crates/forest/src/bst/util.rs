use crate::types::{KeyNode, Node};
use crate::util::{find, get_l, get_p, get_r, leftmost, replace_child, set_l, set_p, set_r};

/// Finds the node holding `target`, descending by comparator in O(h).
pub fn search_bst<K, N, C>(arena: &[N], root: Option<u32>, target: &K, comparator: &C) -> Option<u32>
where
    N: KeyNode<K>,
    C: Fn(&K, &K) -> i32,
{
    find(arena, root, target, comparator)
}

/// Links the detached node `n` below `root` by BST ordering.
///
/// Equal keys descend to the right. Returns the new root.
pub fn insert_bst<K, N, C>(arena: &mut [N], root: Option<u32>, n: u32, comparator: &C) -> Option<u32>
where
    N: KeyNode<K>,
    C: Fn(&K, &K) -> i32,
{
    let Some(mut curr) = root else {
        set_p(arena, n, None);
        return Some(n);
    };

    loop {
        let cmp = comparator(arena[n as usize].key(), arena[curr as usize].key());
        let next = if cmp < 0 {
            get_l(arena, curr)
        } else {
            get_r(arena, curr)
        };
        match next {
            Some(next) => curr = next,
            None => {
                if cmp < 0 {
                    set_l(arena, curr, Some(n));
                } else {
                    set_r(arena, curr, Some(n));
                }
                set_p(arena, n, Some(curr));
                return root;
            }
        }
    }
}

/// Removes the node holding `key` and returns the new root.
///
/// A node with two children takes its in-order successor's key, and the
/// successor (which has no left child) is spliced out instead. An empty tree
/// or an absent key leaves the tree unchanged.
pub fn delete_bst_node<K, N, C>(arena: &mut [N], root: Option<u32>, key: &K, comparator: &C) -> Option<u32>
where
    K: Clone,
    N: KeyNode<K>,
    C: Fn(&K, &K) -> i32,
{
    let Some(target) = find(arena, root, key, comparator) else {
        return root;
    };

    let doomed = match (get_l(arena, target), get_r(arena, target)) {
        (Some(_), Some(r)) => {
            let successor = leftmost(arena, r);
            let k = arena[successor as usize].key().clone();
            arena[target as usize].set_key(k);
            successor
        }
        _ => target,
    };
    splice(arena, root, doomed)
}

/// Unlinks `n`, which has at most one child, lifting that child into its place.
pub(crate) fn splice<N: Node>(arena: &mut [N], root: Option<u32>, n: u32) -> Option<u32> {
    let child = get_l(arena, n).or(get_r(arena, n));
    let p = get_p(arena, n);
    if let Some(c) = child {
        set_p(arena, c, p);
    }
    replace_child(arena, p, n, child);
    set_p(arena, n, None);
    set_l(arena, n, None);
    set_r(arena, n, None);
    if p.is_none() {
        child
    } else {
        root
    }
}

/// Checks that every key lies strictly inside the bounds inherited from its
/// ancestors.
pub fn is_valid_bst<K, N, C>(arena: &[N], root: Option<u32>, comparator: &C) -> bool
where
    N: KeyNode<K>,
    C: Fn(&K, &K) -> i32,
{
    // (node, exclusive lower bound, exclusive upper bound)
    let mut stack: Vec<(u32, Option<u32>, Option<u32>)> =
        root.map(|r| (r, None, None)).into_iter().collect();
    while let Some((i, lo, hi)) = stack.pop() {
        let k = arena[i as usize].key();
        if lo.is_some_and(|lo| comparator(k, arena[lo as usize].key()) <= 0) {
            return false;
        }
        if hi.is_some_and(|hi| comparator(k, arena[hi as usize].key()) >= 0) {
            return false;
        }
        if let Some(l) = get_l(arena, i) {
            stack.push((l, lo, Some(i)));
        }
        if let Some(r) = get_r(arena, i) {
            stack.push((r, Some(i), hi));
        }
    }
    true
}

/// Deepest node having `p` and `q` in different subtrees, or being one of
/// them. Works on any binary tree; nodes are compared by identity.
///
/// Returns `None` when either node is not under `root`.
pub fn lowest_common_ancestor<N: Node>(arena: &[N], root: Option<u32>, p: u32, q: u32) -> Option<u32> {
    let mut found = (false, false);
    let lca = lca_walk(arena, root, p, q, &mut found);
    if found.0 && found.1 {
        lca
    } else {
        None
    }
}

fn lca_walk<N: Node>(arena: &[N], node: Option<u32>, p: u32, q: u32, found: &mut (bool, bool)) -> Option<u32> {
    let n = node?;
    let left = lca_walk(arena, get_l(arena, n), p, q, found);
    let right = lca_walk(arena, get_r(arena, n), p, q, found);
    if n == p {
        found.0 = true;
    }
    if n == q {
        found.1 = true;
    }
    if n == p || n == q {
        return Some(n);
    }
    match (left, right) {
        (Some(_), Some(_)) => Some(n),
        (l, r) => l.or(r),
    }
}

/// Promotes the right child of `node` and returns the new subtree root.
///
/// ```text
///   n                r
///  / \              / \
/// a   r     →      n   c
///    / \          / \
///   b   c        a   b
/// ```
///
/// `node`'s former parent is relinked to the promoted child. A `None` input or
/// a node without a right child is returned unchanged.
pub fn rotate_left<N: Node>(arena: &mut [N], node: Option<u32>) -> Option<u32> {
    let n = node?;
    let Some(r) = get_r(arena, n) else {
        return Some(n);
    };
    let p = get_p(arena, n);
    let rl = get_l(arena, r);

    set_p(arena, r, p);
    replace_child(arena, p, n, Some(r));
    set_l(arena, r, Some(n));
    set_p(arena, n, Some(r));
    set_r(arena, n, rl);
    if let Some(rl) = rl {
        set_p(arena, rl, Some(n));
    }
    Some(r)
}

/// Mirror image of [`rotate_left`]: promotes the left child of `node`.
pub fn rotate_right<N: Node>(arena: &mut [N], node: Option<u32>) -> Option<u32> {
    let n = node?;
    let Some(l) = get_l(arena, n) else {
        return Some(n);
    };
    let p = get_p(arena, n);
    let lr = get_r(arena, l);

    set_p(arena, l, p);
    replace_child(arena, p, n, Some(l));
    set_r(arena, l, Some(n));
    set_p(arena, n, Some(l));
    set_l(arena, n, lr);
    if let Some(lr) = lr {
        set_p(arena, lr, Some(n));
    }
    Some(l)
}

/// Relinks the nodes of the tree into a height-balanced shape.
///
/// The in-order sequence is preserved; each subtree is rooted at the median
/// of its range, so the height is at most `⌈log₂(n+1)⌉`. Nodes are reused in
/// place; stored AVL heights are not recomputed.
pub fn balance_bst<N: Node>(arena: &mut [N], root: Option<u32>) -> Option<u32> {
    let mut ids = Vec::new();
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
        ids.push(i);
        curr = get_r(arena, i);
    }
    let parent = root.and_then(|r| get_p(arena, r));
    let new_root = build_balanced(arena, &ids, parent);
    if let Some(r) = root {
        replace_child(arena, parent, r, new_root);
    }
    new_root
}

fn build_balanced<N: Node>(arena: &mut [N], ids: &[u32], parent: Option<u32>) -> Option<u32> {
    if ids.is_empty() {
        return None;
    }
    let mid = ids.len() / 2;
    let n = ids[mid];
    set_p(arena, n, parent);
    let l = build_balanced(arena, &ids[..mid], Some(n));
    let r = build_balanced(arena, &ids[mid + 1..], Some(n));
    set_l(arena, n, l);
    set_r(arena, n, r);
    Some(n)
}
