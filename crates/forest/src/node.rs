use crate::types::{ColorNode, HeightNode, KeyNode, Node, NodeMeta};

/// Tree node with an open metadata slot.
///
/// `M = ()` for plain binary/search trees, [`Height`] for AVL trees and
/// [`Color`] for red-black trees, so the same traversal and rotation routines
/// serve every flavour.
#[derive(Clone, Debug)]
pub struct TreeNode<K, M = ()> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    pub meta: M,
}

impl<K, M: Default> TreeNode<K, M> {
    pub fn new(k: K) -> Self {
        Self::with_meta(k, M::default())
    }
}

impl<K, M> TreeNode<K, M> {
    pub fn with_meta(k: K, meta: M) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
            meta,
        }
    }
}

/// AVL subtree height. A fresh node is a leaf of height 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Height(pub u32);

impl Default for Height {
    fn default() -> Self {
        Height(1)
    }
}

impl NodeMeta for Height {
    fn stored_height(&self) -> Option<u32> {
        Some(self.0)
    }

    fn describe(&self) -> Option<String> {
        Some(format!("h={}", self.0))
    }
}

/// Red-black node colour. New nodes start red.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Color {
    #[default]
    Red,
    Black,
}

impl NodeMeta for Color {
    fn describe(&self) -> Option<String> {
        Some(match self {
            Color::Red => "red".to_string(),
            Color::Black => "black".to_string(),
        })
    }
}

pub type AvlNode<K> = TreeNode<K, Height>;
pub type RbNode<K> = TreeNode<K, Color>;

impl<K, M> Node for TreeNode<K, M> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl<K, M: NodeMeta> KeyNode<K> for TreeNode<K, M> {
    fn key(&self) -> &K {
        &self.k
    }

    fn set_key(&mut self, key: K) {
        self.k = key;
    }

    fn stored_height(&self) -> Option<u32> {
        self.meta.stored_height()
    }
}

impl<K> HeightNode<K> for TreeNode<K, Height> {
    fn height(&self) -> u32 {
        self.meta.0
    }

    fn set_height(&mut self, height: u32) {
        self.meta = Height(height);
    }
}

impl<K> ColorNode<K> for TreeNode<K, Color> {
    fn is_black(&self) -> bool {
        self.meta == Color::Black
    }

    fn set_black(&mut self, black: bool) {
        self.meta = if black { Color::Black } else { Color::Red };
    }
}
