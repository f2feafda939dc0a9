use crate::types::Node;

use super::{get_l, get_p, get_r, replace_child, set_l, set_p, set_r};

/// Exchanges the tree positions of nodes `x` and `y`, keeping keys attached
/// to their physical nodes. Returns the (possibly new) root.
///
/// Handles the adjacent case where one node is a direct child of the other,
/// and siblings, whose shared parent has its two links exchanged.
pub fn swap<N: Node>(arena: &mut [N], mut root: u32, x: u32, y: u32) -> u32 {
    if x == y {
        return root;
    }

    let (xp, xl, xr) = (get_p(arena, x), get_l(arena, x), get_r(arena, x));
    let (yp, yl, yr) = (get_p(arena, y), get_l(arena, y), get_r(arena, y));

    // x takes y's children.
    adopt(arena, x, y, yl, Side::Left);
    adopt(arena, x, y, yr, Side::Right);
    // y takes x's children.
    adopt(arena, y, x, xl, Side::Left);
    adopt(arena, y, x, xr, Side::Right);

    if let (Some(p), true) = (xp, xp == yp) {
        let (pl, pr) = (get_l(arena, p), get_r(arena, p));
        set_l(arena, p, pr);
        set_r(arena, p, pl);
        set_p(arena, x, Some(p));
        set_p(arena, y, Some(p));
        return root;
    }

    if xp.is_none() {
        root = y;
        set_p(arena, y, None);
    } else if xp != Some(y) {
        set_p(arena, y, xp);
        replace_child(arena, xp, x, Some(y));
    }

    if yp.is_none() {
        root = x;
        set_p(arena, x, None);
    } else if yp != Some(x) {
        set_p(arena, x, yp);
        replace_child(arena, yp, y, Some(x));
    }

    root
}

#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

/// Gives `to` the child `child` that previously hung off `from`.
///
/// When that child is `to` itself the two nodes are adjacent and `from`
/// becomes `to`'s child instead.
fn adopt<N: Node>(arena: &mut [N], to: u32, from: u32, child: Option<u32>, side: Side) {
    let child = if child == Some(to) { Some(from) } else { child };
    match side {
        Side::Left => set_l(arena, to, child),
        Side::Right => set_r(arena, to, child),
    }
    if let Some(c) = child {
        set_p(arena, c, Some(to));
    }
}
