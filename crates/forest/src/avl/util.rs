use crate::bst::{is_valid_bst, rotate_left, rotate_right};
use crate::types::{HeightNode, KeyNode};
use crate::util::{get_l, get_p, get_r, set_l, set_p, set_r};

#[inline]
fn height<K, N: HeightNode<K>>(arena: &[N], i: Option<u32>) -> u32 {
    i.map_or(0, |i| arena[i as usize].height())
}

#[inline]
fn update_height<K, N: HeightNode<K>>(arena: &mut [N], i: u32) {
    let h = 1 + height(arena, get_l(arena, i)).max(height(arena, get_r(arena, i)));
    arena[i as usize].set_height(h);
}

#[inline]
fn balance_factor<K, N: HeightNode<K>>(arena: &[N], i: u32) -> i64 {
    height(arena, get_l(arena, i)) as i64 - height(arena, get_r(arena, i)) as i64
}

fn avl_rotate_left<K, N: HeightNode<K>>(arena: &mut [N], x: u32) -> u32 {
    let top = rotate_left(arena, Some(x)).unwrap_or(x);
    update_height(arena, x);
    update_height(arena, top);
    top
}

fn avl_rotate_right<K, N: HeightNode<K>>(arena: &mut [N], x: u32) -> u32 {
    let top = rotate_right(arena, Some(x)).unwrap_or(x);
    update_height(arena, x);
    update_height(arena, top);
    top
}

/// Inserts the detached node `n` and rebalances on the way back up.
///
/// | case | condition at `x`               | rotation                              |
/// |------|--------------------------------|---------------------------------------|
/// | LL   | `b > 1`, key < `x.left`        | `rotate_right(x)`                     |
/// | LR   | `b > 1`, key > `x.left`        | `rotate_left(x.left)`, `rotate_right(x)` |
/// | RR   | `b < -1`, key > `x.right`      | `rotate_left(x)`                      |
/// | RL   | `b < -1`, key < `x.right`      | `rotate_right(x.right)`, `rotate_left(x)` |
///
/// where `b = height(left) - height(right)`. A key equal to an existing one
/// leaves the tree unchanged and `n` detached. Returns the new root.
pub fn insert_avl<K, N, C>(arena: &mut [N], root: Option<u32>, n: u32, comparator: &C) -> Option<u32>
where
    N: HeightNode<K>,
    C: Fn(&K, &K) -> i32,
{
    arena[n as usize].set_height(1);
    set_l(arena, n, None);
    set_r(arena, n, None);
    let top = insert_at(arena, root, n, comparator);
    set_p(arena, top, None);
    Some(top)
}

fn insert_at<K, N, C>(arena: &mut [N], node: Option<u32>, n: u32, comparator: &C) -> u32
where
    N: HeightNode<K>,
    C: Fn(&K, &K) -> i32,
{
    let Some(x) = node else {
        return n;
    };

    let cmp = comparator(arena[n as usize].key(), arena[x as usize].key());
    if cmp < 0 {
        let l = insert_at(arena, get_l(arena, x), n, comparator);
        set_l(arena, x, Some(l));
        set_p(arena, l, Some(x));
    } else if cmp > 0 {
        let r = insert_at(arena, get_r(arena, x), n, comparator);
        set_r(arena, x, Some(r));
        set_p(arena, r, Some(x));
    } else {
        return x;
    }

    update_height(arena, x);
    let b = balance_factor(arena, x);
    if b > 1 {
        if let Some(l) = get_l(arena, x) {
            if comparator(arena[n as usize].key(), arena[l as usize].key()) > 0 {
                avl_rotate_left(arena, l);
            }
        }
        return avl_rotate_right(arena, x);
    }
    if b < -1 {
        if let Some(r) = get_r(arena, x) {
            if comparator(arena[n as usize].key(), arena[r as usize].key()) < 0 {
                avl_rotate_right(arena, r);
            }
        }
        return avl_rotate_left(arena, x);
    }
    x
}

/// Validates ordering, parent links, the AVL balance bound and, for nodes
/// that store one, the recorded height.
pub fn assert_avl_tree<K, N, C>(arena: &[N], root: Option<u32>, comparator: &C) -> Result<(), String>
where
    N: KeyNode<K>,
    C: Fn(&K, &K) -> i32,
{
    let Some(root) = root else {
        return Ok(());
    };

    if get_p(arena, root).is_some() {
        return Err("Root has parent".to_string());
    }
    if !is_valid_bst(arena, Some(root), comparator) {
        return Err("Node order violated".to_string());
    }

    fn validate<K, N: KeyNode<K>>(arena: &[N], node: Option<u32>) -> Result<u32, String> {
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

        let lh = validate(arena, l)?;
        let rh = validate(arena, r)?;
        if lh.abs_diff(rh) > 1 {
            return Err(format!("AVL balance violated: left {lh}, right {rh}"));
        }
        let h = 1 + lh.max(rh);
        if let Some(stored) = arena[node as usize].stored_height() {
            if stored != h {
                return Err(format!("Height mismatch: expected {h}, got {stored}"));
            }
        }
        Ok(h)
    }

    validate(arena, Some(root)).map(|_| ())
}

pub fn is_avl_tree<K, N, C>(arena: &[N], root: Option<u32>, comparator: &C) -> bool
where
    N: KeyNode<K>,
    C: Fn(&K, &K) -> i32,
{
    assert_avl_tree(arena, root, comparator).is_ok()
}
