use std::collections::BTreeMap;
use std::fmt::Debug;

use super::node::RadixNode;

fn first_char(s: &str) -> Option<char> {
    s.chars().next()
}

/// Byte length of the longest common prefix, always on a char boundary.
fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .map(|(x, _)| x.len_utf8())
        .sum()
}

/// String-keyed map that stores shared prefixes once.
///
/// Edges carry whole substrings. Inserting a key that diverges inside an
/// edge splits it; deleting prunes empty branches and folds a valueless node
/// with a single child back into that child, so the tree stays compressed.
pub struct RadixTree<V = ()> {
    nodes: Vec<RadixNode<V>>,
    free: Vec<u32>,
    root: u32,
    size: usize,
}

impl<V> Default for RadixTree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> RadixTree<V> {
    pub fn new() -> Self {
        Self {
            nodes: vec![RadixNode::new(String::new(), None)],
            free: Vec::new(),
            root: 0,
            size: 0,
        }
    }

    fn alloc(&mut self, node: RadixNode<V>) -> u32 {
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot as usize] = node;
                slot
            }
            None => {
                self.nodes.push(node);
                (self.nodes.len() - 1) as u32
            }
        }
    }

    fn release(&mut self, idx: u32) {
        let node = &mut self.nodes[idx as usize];
        node.label.clear();
        node.children.clear();
        node.v = None;
        self.free.push(idx);
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of live nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    pub fn root_index(&self) -> u32 {
        self.root
    }

    pub fn node(&self, idx: u32) -> &RadixNode<V> {
        &self.nodes[idx as usize]
    }

    /// Stores `value` under `key`; returns `true` if the key was new.
    pub fn insert<K: AsRef<str>>(&mut self, key: K, value: V) -> bool {
        let mut curr = self.root;
        let mut rest = key.as_ref();

        loop {
            let Some(c) = first_char(rest) else {
                let added = self.nodes[curr as usize].v.is_none();
                self.nodes[curr as usize].v = Some(value);
                if added {
                    self.size += 1;
                }
                return added;
            };

            let Some(&child) = self.nodes[curr as usize].children.get(&c) else {
                let leaf = self.alloc(RadixNode::new(rest.to_string(), Some(value)));
                self.nodes[curr as usize].children.insert(c, leaf);
                self.size += 1;
                return true;
            };

            let common = common_prefix_len(&self.nodes[child as usize].label, rest);
            if common < self.nodes[child as usize].label.len() {
                let label = std::mem::take(&mut self.nodes[child as usize].label);
                let (head, tail) = label.split_at(common);
                let mid = self.alloc(RadixNode::new(head.to_string(), None));
                if let Some(tc) = first_char(tail) {
                    self.nodes[mid as usize].children.insert(tc, child);
                }
                self.nodes[child as usize].label = tail.to_string();
                self.nodes[curr as usize].children.insert(c, mid);
                curr = mid;
            } else {
                curr = child;
            }
            rest = &rest[common..];
        }
    }

    fn find(&self, key: &str) -> Option<u32> {
        self.find_with_parents(key).and_then(|path| path.last().copied())
    }

    /// Node path from the root to the node ending exactly at `key`.
    fn find_with_parents(&self, key: &str) -> Option<Vec<u32>> {
        let mut path = vec![self.root];
        let mut curr = self.root;
        let mut rest = key;
        while let Some(c) = first_char(rest) {
            let child = *self.nodes[curr as usize].children.get(&c)?;
            let label = &self.nodes[child as usize].label;
            rest = rest.strip_prefix(label.as_str())?;
            path.push(child);
            curr = child;
        }
        Some(path)
    }

    pub fn get<K: AsRef<str>>(&self, key: K) -> Option<&V> {
        self.find(key.as_ref()).and_then(|i| self.nodes[i as usize].v.as_ref())
    }

    pub fn contains<K: AsRef<str>>(&self, key: K) -> bool {
        self.get(key).is_some()
    }

    /// Locates where `prefix` ends: the node whose path covers it and the
    /// full path string of that node.
    fn locate_prefix(&self, prefix: &str) -> Option<(u32, String)> {
        let mut curr = self.root;
        let mut path = String::new();
        let mut rest = prefix;
        while let Some(c) = first_char(rest) {
            let child = *self.nodes[curr as usize].children.get(&c)?;
            let label = &self.nodes[child as usize].label;
            if label.starts_with(rest) {
                path.push_str(label);
                return Some((child, path));
            }
            rest = rest.strip_prefix(label.as_str())?;
            path.push_str(label);
            curr = child;
        }
        Some((curr, path))
    }

    /// Whether some stored key begins with `prefix`.
    pub fn starts_with<K: AsRef<str>>(&self, prefix: K) -> bool {
        match self.locate_prefix(prefix.as_ref()) {
            // Every non-root node leads to at least one value.
            Some((node, _)) => node != self.root || self.size > 0,
            None => false,
        }
    }

    /// Stored keys beginning with `prefix`, in lexicographic order.
    pub fn keys_with_prefix<K: AsRef<str>>(&self, prefix: K) -> Vec<String> {
        let mut out = Vec::new();
        if let Some((node, path)) = self.locate_prefix(prefix.as_ref()) {
            let mut stack = vec![(node, path)];
            while let Some((i, path)) = stack.pop() {
                let n = &self.nodes[i as usize];
                if n.v.is_some() {
                    out.push(path.clone());
                }
                for &child in n.children.values().rev() {
                    let mut p = path.clone();
                    p.push_str(&self.nodes[child as usize].label);
                    stack.push((child, p));
                }
            }
        }
        out
    }

    /// Removes `key` and returns its value.
    pub fn delete<K: AsRef<str>>(&mut self, key: K) -> Option<V> {
        let path = self.find_with_parents(key.as_ref())?;
        let target = *path.last()?;
        let value = self.nodes[target as usize].v.take()?;
        self.size -= 1;

        let mut survivor = 0;
        for i in (1..path.len()).rev() {
            let node = path[i];
            let n = &self.nodes[node as usize];
            if n.v.is_some() || !n.children.is_empty() {
                survivor = i;
                break;
            }
            if let Some(c) = first_char(&n.label) {
                self.nodes[path[i - 1] as usize].children.remove(&c);
            }
            self.release(node);
        }

        if survivor > 0 {
            self.merge_single_child(path[survivor]);
        }
        Some(value)
    }

    /// Folds a valueless node with exactly one child into that child's label.
    fn merge_single_child(&mut self, idx: u32) {
        let n = &self.nodes[idx as usize];
        if n.v.is_some() || n.children.len() != 1 {
            return;
        }
        let Some(&child) = n.children.values().next() else {
            return;
        };
        let c = std::mem::replace(&mut self.nodes[child as usize], RadixNode::new(String::new(), None));
        let n = &mut self.nodes[idx as usize];
        n.label.push_str(&c.label);
        n.children = c.children;
        n.v = c.v;
        self.free.push(child);
    }

    /// Every stored key with its value.
    pub fn to_record(&self) -> BTreeMap<String, V>
    where
        V: Clone,
    {
        let mut out = BTreeMap::new();
        let mut stack = vec![(self.root, String::new())];
        while let Some((i, path)) = stack.pop() {
            let n = &self.nodes[i as usize];
            if let Some(v) = &n.v {
                out.insert(path.clone(), v.clone());
            }
            for &child in n.children.values() {
                let mut p = path.clone();
                p.push_str(&self.nodes[child as usize].label);
                stack.push((child, p));
            }
        }
        out
    }

    /// Renders the node structure, one edge per line.
    pub fn print(&self, tab: &str) -> String
    where
        V: Debug,
    {
        self.print_node(self.root, tab)
    }

    fn print_node(&self, idx: u32, tab: &str) -> String
    where
        V: Debug,
    {
        let n = &self.nodes[idx as usize];
        let mut out = match &n.v {
            Some(v) => format!("{:?} = {v:?}", n.label),
            None => format!("{:?}", n.label),
        };
        let count = n.children.len();
        for (i, &child) in n.children.values().enumerate() {
            let is_last = i + 1 == count;
            let branch = if is_last { "└── " } else { "├── " };
            let child_tab = format!("{tab}{}", if is_last { "    " } else { "│   " });
            out.push('\n');
            out.push_str(tab);
            out.push_str(branch);
            out.push_str(&self.print_node(child, &child_tab));
        }
        out
    }
}
