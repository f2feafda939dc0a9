//! Graph kernel over insertion-ordered adjacency maps.

pub mod adjacency;
pub mod error;
pub mod order;
pub mod traversal;

pub use adjacency::{AdjacencyList, AdjacencyMap};
pub use error::GraphError;
pub use order::{find_cycle, has_cycle, topological_sort, Mark};
pub use traversal::{bfs, bfs_shortest_path, dfs_iterative, dfs_recursive};
