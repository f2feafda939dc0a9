use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;

use crate::adjacency::{neighbors_of, AdjacencyMap};

/// Breadth-first order from `start`.
pub fn bfs<V: Hash + Eq + Clone>(graph: &AdjacencyMap<V>, start: &V) -> Vec<V> {
    let mut visited: HashSet<&V> = HashSet::new();
    let mut queue: VecDeque<&V> = VecDeque::new();
    let mut order = Vec::new();

    visited.insert(start);
    queue.push_back(start);
    while let Some(v) = queue.pop_front() {
        order.push(v.clone());
        for n in neighbors_of(graph, v) {
            if visited.insert(n) {
                queue.push_back(n);
            }
        }
    }
    order
}

/// Depth-first pre-order from `start` using an explicit stack.
///
/// Neighbours are pushed in reverse and marked on pop, so the order equals
/// [`dfs_recursive`].
pub fn dfs_iterative<V: Hash + Eq + Clone>(graph: &AdjacencyMap<V>, start: &V) -> Vec<V> {
    let mut visited: HashSet<&V> = HashSet::new();
    let mut stack: Vec<&V> = vec![start];
    let mut order = Vec::new();

    while let Some(v) = stack.pop() {
        if !visited.insert(v) {
            continue;
        }
        order.push(v.clone());
        for n in neighbors_of(graph, v).iter().rev() {
            if !visited.contains(n) {
                stack.push(n);
            }
        }
    }
    order
}

/// Depth-first pre-order from `start`.
pub fn dfs_recursive<V: Hash + Eq + Clone>(graph: &AdjacencyMap<V>, start: &V) -> Vec<V> {
    fn visit<'a, V: Hash + Eq + Clone>(
        graph: &'a AdjacencyMap<V>,
        v: &'a V,
        visited: &mut HashSet<&'a V>,
        out: &mut Vec<V>,
    ) {
        visited.insert(v);
        out.push(v.clone());
        for n in neighbors_of(graph, v) {
            if !visited.contains(n) {
                visit(graph, n, visited, out);
            }
        }
    }

    let mut visited = HashSet::new();
    let mut order = Vec::new();
    visit(graph, start, &mut visited, &mut order);
    order
}

/// Fewest-edge path from `start` to `goal`, both ends included.
///
/// Ties go to the path found first in adjacency order. Returns `[start]`
/// when the ends coincide and an empty path when `goal` is unreachable.
pub fn bfs_shortest_path<V: Hash + Eq + Clone>(graph: &AdjacencyMap<V>, start: &V, goal: &V) -> Vec<V> {
    if start == goal {
        return vec![start.clone()];
    }
    let mut parent: HashMap<&V, &V> = HashMap::new();
    let mut visited: HashSet<&V> = HashSet::from([start]);
    let mut queue: VecDeque<&V> = VecDeque::from([start]);

    while let Some(v) = queue.pop_front() {
        if v == goal {
            let mut path = vec![v.clone()];
            let mut curr = v;
            while let Some(&p) = parent.get(curr) {
                path.push(p.clone());
                curr = p;
            }
            path.reverse();
            return path;
        }
        for n in neighbors_of(graph, v) {
            if visited.insert(n) {
                parent.insert(n, v);
                queue.push_back(n);
            }
        }
    }
    Vec::new()
}
