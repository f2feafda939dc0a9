//! Exercises composed from the tree, heap, graph and search kernels.

use std::cmp::Reverse;

use algokit_forest::{first, next, Bst};
use algokit_graph::{topological_sort, AdjacencyMap, GraphError};
use algokit_heap::{k_largest_elements, MinHeap};
use algokit_search::graph_coloring_memo;
use tracing::debug;

use crate::error::ExerciseError;

/// An order to take `num_courses` courses given `(course, prerequisite)`
/// pairs, or an empty order when the prerequisites are cyclic.
pub fn course_order(
    num_courses: usize,
    prerequisites: &[(usize, usize)],
) -> Result<Vec<usize>, ExerciseError> {
    let mut graph: AdjacencyMap<usize> = (0..num_courses).map(|c| (c, Vec::new())).collect();
    for &(course, pre) in prerequisites {
        if course >= num_courses || pre >= num_courses {
            return Err(ExerciseError::InvalidArgument("course index out of range"));
        }
        if let Some(out) = graph.get_mut(&pre) {
            out.push(course);
        }
    }
    match topological_sort(&graph) {
        Ok(order) => Ok(order),
        Err(GraphError::CycleDetected) => {
            debug!(num_courses, "prerequisites are cyclic");
            Ok(Vec::new())
        }
        Err(GraphError::VertexOutOfRange(_)) => {
            Err(ExerciseError::InvalidArgument("course index out of range"))
        }
    }
}

/// The `k`-th smallest key (1-based) by in-order walk.
pub fn kth_smallest<K>(tree: &Bst<K>, k: usize) -> Option<&K> {
    if k == 0 {
        return None;
    }
    let arena = tree.arena();
    let mut curr = first(arena, tree.root_index());
    for _ in 1..k {
        curr = next(arena, curr?);
    }
    curr.map(|i| tree.key(i))
}

/// Height-balanced BST holding `sorted`.
pub fn sorted_to_balanced_bst<K: PartialOrd + Clone>(sorted: &[K]) -> Bst<K> {
    Bst::from_sorted(sorted)
}

/// The `k`-th largest value (1-based), counting duplicates.
pub fn kth_largest<T: Ord + Clone>(values: &[T], k: usize) -> Option<T> {
    if k == 0 || k > values.len() {
        return None;
    }
    k_largest_elements(values, k).pop()
}

/// Repeatedly smashes the two heaviest stones; equal stones both vanish,
/// otherwise the difference goes back. Returns the last weight, or 0.
pub fn last_stone_weight(stones: &[u64]) -> u64 {
    let mut heap = MinHeap::from_vec(stones.iter().map(|&s| Reverse(s)).collect());
    loop {
        let Ok(Reverse(a)) = heap.extract_min() else {
            return 0;
        };
        let Ok(Reverse(b)) = heap.extract_min() else {
            return a;
        };
        if a != b {
            heap.insert(Reverse(a - b));
        }
    }
}

/// Fewest colours for the graph and a colouring that uses them.
pub fn chromatic_number(adj: &[Vec<usize>]) -> (usize, Vec<usize>) {
    (0..=adj.len())
        .find_map(|m| graph_coloring_memo(adj, m).map(|colors| (m, colors)))
        .unwrap_or((adj.len(), Vec::new()))
}
