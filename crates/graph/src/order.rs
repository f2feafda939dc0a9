//! Tri-colour depth-first search: cycle detection and topological order.

use std::collections::HashMap;
use std::hash::Hash;

use tracing::debug;

use crate::adjacency::{neighbors_of, AdjacencyMap};
use crate::error::GraphError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    Unvisited,
    InProgress,
    Finished,
}

/// Post-order of a full DFS over every vertex in map order.
///
/// On a back edge returns the cycle it closes, as the vertices on the
/// current path from the edge's target down to its source.
fn post_order<V: Hash + Eq + Clone>(graph: &AdjacencyMap<V>) -> Result<Vec<V>, Vec<V>> {
    let mut marks: HashMap<&V, Mark> = HashMap::new();
    let mut out = Vec::new();

    for root in graph.keys() {
        if marks.get(root).copied().unwrap_or(Mark::Unvisited) != Mark::Unvisited {
            continue;
        }
        // (vertex, index of the next neighbour to explore)
        let mut stack: Vec<(&V, usize)> = vec![(root, 0)];
        marks.insert(root, Mark::InProgress);

        while let Some(top) = stack.last_mut() {
            let (v, i) = *top;
            let Some(n) = neighbors_of(graph, v).get(i) else {
                marks.insert(v, Mark::Finished);
                out.push(v.clone());
                stack.pop();
                continue;
            };
            top.1 += 1;
            match marks.get(n).copied().unwrap_or(Mark::Unvisited) {
                Mark::Unvisited => {
                    marks.insert(n, Mark::InProgress);
                    stack.push((n, 0));
                }
                Mark::InProgress => {
                    let start = stack.iter().position(|&(u, _)| u == n).unwrap_or(0);
                    return Err(stack[start..].iter().map(|&(u, _)| u.clone()).collect());
                }
                Mark::Finished => {}
            }
        }
    }
    Ok(out)
}

pub fn has_cycle<V: Hash + Eq + Clone>(graph: &AdjacencyMap<V>) -> bool {
    post_order(graph).is_err()
}

/// Vertices of one cycle, each with an edge to the next and the last back
/// to the first, or `None` for a DAG.
pub fn find_cycle<V: Hash + Eq + Clone>(graph: &AdjacencyMap<V>) -> Option<Vec<V>> {
    post_order(graph).err()
}

/// Orders every vertex so that each edge points forward.
pub fn topological_sort<V: Hash + Eq + Clone>(graph: &AdjacencyMap<V>) -> Result<Vec<V>, GraphError> {
    match post_order(graph) {
        Ok(mut order) => {
            order.reverse();
            Ok(order)
        }
        Err(cycle) => {
            debug!(cycle_len = cycle.len(), "topological sort rejected cyclic graph");
            Err(GraphError::CycleDetected)
        }
    }
}
