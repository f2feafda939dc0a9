//! Node trait definitions.
//!
//! Every tree in this crate lives in a caller-owned `Vec<N>` arena and links
//! through `Option<u32>` indices. All tree-manipulation functions take the
//! arena and work with indices; an index is also the node's identity.

/// Structural links (`p`, `l`, `r`).
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Metadata carried in the open slot of a [`crate::TreeNode`].
pub trait NodeMeta {
    /// Height recorded on the node, for flavours that keep one.
    fn stored_height(&self) -> Option<u32> {
        None
    }

    /// Short annotation shown by the tree printer.
    fn describe(&self) -> Option<String> {
        None
    }
}

impl NodeMeta for () {}

/// Keyed node interface used by the search-tree routines.
pub trait KeyNode<K>: Node {
    fn key(&self) -> &K;
    fn set_key(&mut self, key: K);

    fn stored_height(&self) -> Option<u32> {
        None
    }
}

/// AVL-specific node behavior.
pub trait HeightNode<K>: KeyNode<K> {
    fn height(&self) -> u32;
    fn set_height(&mut self, height: u32);
}

/// Red-black specific node behavior.
pub trait ColorNode<K>: KeyNode<K> {
    fn is_black(&self) -> bool;
    fn set_black(&mut self, black: bool);
}
