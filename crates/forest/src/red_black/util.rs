use crate::bst::{rotate_left, rotate_right};
use crate::types::{ColorNode, Node};
use crate::util::{first, get_l, get_p, get_r, leftmost, next, replace_child, set_l, set_p, set_r, swap};

#[inline]
fn is_black<K, N: ColorNode<K>>(arena: &[N], i: u32) -> bool {
    arena[i as usize].is_black()
}

/// Missing children count as black leaves.
#[inline]
fn is_black_or_nil<K, N: ColorNode<K>>(arena: &[N], i: Option<u32>) -> bool {
    i.map_or(true, |i| arena[i as usize].is_black())
}

#[inline]
fn set_black<K, N: ColorNode<K>>(arena: &mut [N], i: u32, v: bool) {
    arena[i as usize].set_black(v);
}

/// Links the detached node `n` into the tree and restores the red-black
/// invariants. Equal keys descend to the right. Returns the new root.
pub fn insert_rb<K, N, C>(arena: &mut [N], root: Option<u32>, n: u32, comparator: &C) -> Option<u32>
where
    N: ColorNode<K>,
    C: Fn(&K, &K) -> i32,
{
    set_l(arena, n, None);
    set_r(arena, n, None);
    let Some(mut curr) = root else {
        set_p(arena, n, None);
        set_black(arena, n, true);
        return Some(n);
    };
    set_black(arena, n, false);

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
                break;
            }
        }
    }

    root.map(|root| fix_after_insert(arena, root, n))
}

fn fix_after_insert<K, N: ColorNode<K>>(arena: &mut [N], mut root: u32, mut n: u32) -> u32 {
    while let Some(p) = get_p(arena, n) {
        if is_black(arena, p) {
            break;
        }
        // A red parent is never the root, but a broken tree should not panic.
        let Some(g) = get_p(arena, p) else {
            break;
        };
        let parent_is_left = get_l(arena, g) == Some(p);
        let uncle = if parent_is_left {
            get_r(arena, g)
        } else {
            get_l(arena, g)
        };

        if let Some(u) = uncle.filter(|&u| !is_black(arena, u)) {
            set_black(arena, p, true);
            set_black(arena, u, true);
            set_black(arena, g, false);
            n = g;
            continue;
        }

        let mut p = p;
        if parent_is_left {
            if get_r(arena, p) == Some(n) {
                rotate_left(arena, Some(p));
                p = n;
            }
            set_black(arena, p, true);
            set_black(arena, g, false);
            rotate_right(arena, Some(g));
        } else {
            if get_l(arena, p) == Some(n) {
                rotate_right(arena, Some(p));
                p = n;
            }
            set_black(arena, p, true);
            set_black(arena, g, false);
            rotate_left(arena, Some(g));
        }
        if root == g {
            root = p;
        }
        break;
    }

    set_black(arena, root, true);
    root
}

/// Unlinks node `z` and restores the red-black invariants.
///
/// A node with two children first trades places with its in-order successor
/// (colours stay with the positions), so keys never move between nodes and
/// indices held by the caller keep pointing at the same key. Returns the new
/// root; `z` is left fully detached.
pub fn remove_rb<K, N: ColorNode<K>>(arena: &mut [N], root: Option<u32>, z: u32) -> Option<u32> {
    let mut root = root?;

    if let (Some(_), Some(r)) = (get_l(arena, z), get_r(arena, z)) {
        let s = leftmost(arena, r);
        let z_black = is_black(arena, z);
        let s_black = is_black(arena, s);
        set_black(arena, z, s_black);
        set_black(arena, s, z_black);
        root = swap(arena, root, z, s);
    }

    let child = get_l(arena, z).or(get_r(arena, z));
    let parent = get_p(arena, z);
    let removed_black = is_black(arena, z);

    if let Some(c) = child {
        set_p(arena, c, parent);
    }
    replace_child(arena, parent, z, child);
    set_p(arena, z, None);
    set_l(arena, z, None);
    set_r(arena, z, None);

    if parent.is_none() {
        let c = child?;
        set_black(arena, c, true);
        return Some(c);
    }

    if removed_black {
        root = fix_after_remove(arena, root, child, parent);
    }
    Some(root)
}

#[inline]
fn sibling<N: Node>(arena: &[N], p: u32, of_left: bool) -> Option<u32> {
    if of_left {
        get_r(arena, p)
    } else {
        get_l(arena, p)
    }
}

/// Pushes the extra black carried by `x` (possibly a missing leaf below
/// `parent`) up the tree until it can be absorbed.
fn fix_after_remove<K, N: ColorNode<K>>(
    arena: &mut [N],
    mut root: u32,
    mut x: Option<u32>,
    mut parent: Option<u32>,
) -> u32 {
    while x != Some(root) && is_black_or_nil(arena, x) {
        let Some(p) = parent else {
            break;
        };
        let x_is_left = get_l(arena, p) == x;

        let Some(mut w) = sibling(arena, p, x_is_left) else {
            x = Some(p);
            parent = get_p(arena, p);
            continue;
        };

        if !is_black(arena, w) {
            set_black(arena, w, true);
            set_black(arena, p, false);
            if x_is_left {
                rotate_left(arena, Some(p));
            } else {
                rotate_right(arena, Some(p));
            }
            if root == p {
                root = w;
            }
            match sibling(arena, p, x_is_left) {
                Some(s) => w = s,
                None => {
                    x = Some(p);
                    parent = get_p(arena, p);
                    continue;
                }
            }
        }

        let (near, far) = if x_is_left {
            (get_l(arena, w), get_r(arena, w))
        } else {
            (get_r(arena, w), get_l(arena, w))
        };

        if is_black_or_nil(arena, near) && is_black_or_nil(arena, far) {
            set_black(arena, w, false);
            x = Some(p);
            parent = get_p(arena, p);
            continue;
        }

        if is_black_or_nil(arena, far) {
            if let Some(near) = near {
                set_black(arena, near, true);
            }
            set_black(arena, w, false);
            if x_is_left {
                rotate_right(arena, Some(w));
            } else {
                rotate_left(arena, Some(w));
            }
            let Some(s) = sibling(arena, p, x_is_left) else {
                break;
            };
            w = s;
        }

        let p_black = is_black(arena, p);
        set_black(arena, w, p_black);
        set_black(arena, p, true);
        let far = if x_is_left {
            get_r(arena, w)
        } else {
            get_l(arena, w)
        };
        if let Some(far) = far {
            set_black(arena, far, true);
        }
        if x_is_left {
            rotate_left(arena, Some(p));
        } else {
            rotate_right(arena, Some(p));
        }
        if root == p {
            root = w;
        }
        x = Some(root);
        parent = None;
    }

    if let Some(x) = x {
        set_black(arena, x, true);
    }
    root
}

/// Validates parent links, root colour, the red-red rule, equal black
/// heights and key order. Returns the black height (nil leaves excluded).
pub fn assert_red_black_tree<K, N, C>(arena: &[N], root: Option<u32>, comparator: &C) -> Result<usize, String>
where
    N: ColorNode<K>,
    C: Fn(&K, &K) -> i32,
{
    let Some(root) = root else {
        return Ok(0);
    };

    if get_p(arena, root).is_some() {
        return Err("Root has parent".to_string());
    }
    if !is_black(arena, root) {
        return Err("Root is not black".to_string());
    }

    fn walk<K, N: ColorNode<K>>(arena: &[N], node: Option<u32>) -> Result<usize, String> {
        let Some(node) = node else {
            return Ok(0);
        };
        let l = get_l(arena, node);
        let r = get_r(arena, node);

        if l.is_some_and(|l| get_p(arena, l) != Some(node)) {
            return Err("Broken parent link on left child".to_string());
        }
        if r.is_some_and(|r| get_p(arena, r) != Some(node)) {
            return Err("Broken parent link on right child".to_string());
        }
        if !is_black(arena, node) {
            if !is_black_or_nil(arena, l) {
                return Err("Red node has red left child".to_string());
            }
            if !is_black_or_nil(arena, r) {
                return Err("Red node has red right child".to_string());
            }
        }

        let lh = walk(arena, l)?;
        let rh = walk(arena, r)?;
        if lh != rh {
            return Err(format!("Black height mismatch: left {lh}, right {rh}"));
        }
        Ok(lh + usize::from(is_black(arena, node)))
    }

    let height = walk(arena, Some(root))?;

    let mut curr = first(arena, Some(root));
    let mut prev: Option<u32> = None;
    while let Some(i) = curr {
        if let Some(prev) = prev {
            if comparator(arena[prev as usize].key(), arena[i as usize].key()) >= 0 {
                return Err("Node order violated".to_string());
            }
        }
        prev = Some(i);
        curr = next(arena, i);
    }

    Ok(height)
}

pub fn is_valid_red_black<K, N, C>(arena: &[N], root: Option<u32>, comparator: &C) -> bool
where
    N: ColorNode<K>,
    C: Fn(&K, &K) -> i32,
{
    assert_red_black_tree(arena, root, comparator).is_ok()
}

/// Common number of black nodes on every root-to-leaf path, or `None` when
/// the tree is not a valid red-black tree.
pub fn black_height<K, N, C>(arena: &[N], root: Option<u32>, comparator: &C) -> Option<usize>
where
    N: ColorNode<K>,
    C: Fn(&K, &K) -> i32,
{
    assert_red_black_tree(arena, root, comparator).ok()
}
