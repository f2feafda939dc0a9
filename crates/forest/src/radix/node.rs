use std::collections::BTreeMap;

/// A radix-tree node: the edge label leading into it, children keyed by the
/// first char of their label, and the value stored when the path ending
/// here is a member.
#[derive(Clone, Debug)]
pub struct RadixNode<V> {
    pub label: String,
    pub children: BTreeMap<char, u32>,
    pub v: Option<V>,
}

impl<V> RadixNode<V> {
    pub fn new(label: String, v: Option<V>) -> Self {
        Self {
            label,
            children: BTreeMap::new(),
            v,
        }
    }

    pub fn is_word(&self) -> bool {
        self.v.is_some()
    }
}
