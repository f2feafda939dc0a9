use std::fmt::Debug;

use crate::node::TreeNode;
use crate::types::NodeMeta;

/// Debug dump of the tree under `root`, one node per line.
///
/// ```text
/// 4 [black]
/// ← 2 [red]
///   ← 1 [black]
/// → 6 [black]
/// ```
pub fn print<K, M>(arena: &[TreeNode<K, M>], root: Option<u32>, tab: &str) -> String
where
    K: Debug,
    M: NodeMeta,
{
    match root {
        None => "∅".to_string(),
        Some(r) => {
            let mut out = label(arena, r);
            print_children(arena, r, tab, &mut out);
            out
        }
    }
}

fn label<K: Debug, M: NodeMeta>(arena: &[TreeNode<K, M>], i: u32) -> String {
    let n = &arena[i as usize];
    match n.meta.describe() {
        Some(d) => format!("{:?} [{d}]", n.k),
        None => format!("{:?}", n.k),
    }
}

fn print_children<K: Debug, M: NodeMeta>(arena: &[TreeNode<K, M>], i: u32, tab: &str, out: &mut String) {
    let n = &arena[i as usize];
    for (side, child) in [("←", n.l), ("→", n.r)] {
        if let Some(c) = child {
            out.push_str(&format!("\n{tab}{side} {}", label(arena, c)));
            print_children(arena, c, &format!("{tab}  "), out);
        }
    }
}
