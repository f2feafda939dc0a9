use indexmap::IndexMap;

use crate::error::GraphError;

/// Directed graph as `vertex -> ordered out-neighbours`.
///
/// Vertex order and neighbour order are both significant: every traversal
/// visits them in the order they were inserted. A vertex that only appears as
/// a neighbour is a leaf.
pub type AdjacencyMap<V> = IndexMap<V, Vec<V>>;

pub(crate) fn neighbors_of<'a, V>(graph: &'a AdjacencyMap<V>, v: &V) -> &'a [V]
where
    V: std::hash::Hash + Eq,
{
    graph.get(v).map(Vec::as_slice).unwrap_or(&[])
}

/// Undirected graph over vertices `0..num_vertices`.
#[derive(Clone, Debug)]
pub struct AdjacencyList {
    adj: Vec<Vec<usize>>,
}

impl AdjacencyList {
    pub fn new(num_vertices: usize) -> Self {
        Self {
            adj: vec![Vec::new(); num_vertices],
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.adj.len()
    }

    /// Number of undirected edges added.
    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Adds `u - v`, appending each end to the other's list.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<(), GraphError> {
        let n = self.adj.len();
        for x in [u, v] {
            if x >= n {
                return Err(GraphError::VertexOutOfRange(x));
            }
        }
        self.adj[u].push(v);
        self.adj[v].push(u);
        Ok(())
    }

    pub fn neighbors(&self, u: usize) -> Result<&[usize], GraphError> {
        self.adj
            .get(u)
            .map(Vec::as_slice)
            .ok_or(GraphError::VertexOutOfRange(u))
    }

    pub fn as_slice(&self) -> &[Vec<usize>] {
        &self.adj
    }

    /// Every vertex, in index order, with its neighbour list.
    pub fn to_adjacency_map(&self) -> AdjacencyMap<usize> {
        self.adj.iter().cloned().enumerate().collect()
    }
}
