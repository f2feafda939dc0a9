use algokit_graph::{
    bfs, bfs_shortest_path, dfs_iterative, dfs_recursive, find_cycle, has_cycle, topological_sort,
    AdjacencyList, AdjacencyMap, GraphError,
};
use indexmap::IndexMap;

fn graph<const N: usize>(entries: [(i32, Vec<i32>); N]) -> AdjacencyMap<i32> {
    IndexMap::from(entries)
}

#[test]
fn traversal_orders_matrix() {
    let g = graph([
        (1, vec![2, 3]),
        (2, vec![4, 5]),
        (3, vec![6]),
        (4, vec![]),
        (5, vec![6]),
        (6, vec![]),
    ]);
    assert_eq!(bfs(&g, &1), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(dfs_recursive(&g, &1), vec![1, 2, 4, 5, 6, 3]);
    assert_eq!(dfs_iterative(&g, &1), vec![1, 2, 4, 5, 6, 3]);
}

#[test]
fn neighbour_order_is_respected() {
    let g = graph([(1, vec![3, 2]), (2, vec![]), (3, vec![])]);
    assert_eq!(bfs(&g, &1), vec![1, 3, 2]);
    assert_eq!(dfs_iterative(&g, &1), vec![1, 3, 2]);
}

#[test]
fn absent_or_isolated_start() {
    let g = graph([(1, vec![2])]);
    assert_eq!(bfs(&g, &9), vec![9]);
    assert_eq!(dfs_iterative(&g, &9), vec![9]);
    assert_eq!(dfs_recursive(&g, &9), vec![9]);
    // 2 is only a neighbour, so it is a leaf.
    assert_eq!(bfs(&g, &1), vec![1, 2]);
}

#[test]
fn traversals_survive_cycles() {
    let g = graph([(1, vec![2]), (2, vec![3]), (3, vec![1, 4])]);
    assert_eq!(bfs(&g, &2), vec![2, 3, 1, 4]);
    assert_eq!(dfs_recursive(&g, &1), vec![1, 2, 3, 4]);
    assert_eq!(dfs_iterative(&g, &1), dfs_recursive(&g, &1));
}

#[test]
fn shortest_path_matrix() {
    let g = graph([(1, vec![2, 3]), (2, vec![4]), (3, vec![4]), (4, vec![])]);
    assert_eq!(bfs_shortest_path(&g, &1, &4), vec![1, 2, 4]);
    assert_eq!(bfs_shortest_path(&g, &1, &1), vec![1]);
    assert_eq!(bfs_shortest_path(&g, &4, &1), Vec::<i32>::new());

    let g = graph([(1, vec![2, 5]), (2, vec![3]), (3, vec![4]), (5, vec![4])]);
    assert_eq!(bfs_shortest_path(&g, &1, &4), vec![1, 5, 4]);
}

#[test]
fn cycle_detection_matrix() {
    assert!(has_cycle(&graph([(1, vec![2]), (2, vec![3]), (3, vec![1])])));
    assert!(!has_cycle(&graph([(1, vec![2]), (2, vec![3]), (3, vec![])])));
    assert!(has_cycle(&graph([(1, vec![1])])));
    // Diamond: 4 is reached twice but never on the current path.
    assert!(!has_cycle(&graph([(1, vec![2, 3]), (2, vec![4]), (3, vec![4])])));
    assert!(!has_cycle(&AdjacencyMap::<i32>::new()));
}

#[test]
fn find_cycle_returns_witness() {
    let g = graph([(0, vec![1]), (1, vec![2]), (2, vec![3]), (3, vec![1])]);
    let cycle = find_cycle(&g).unwrap();
    assert_eq!(cycle, vec![1, 2, 3]);
    for (i, v) in cycle.iter().enumerate() {
        let next = &cycle[(i + 1) % cycle.len()];
        assert!(g[v].contains(next));
    }
    assert_eq!(find_cycle(&graph([(1, vec![2])])), None);
}

#[test]
fn topological_sort_matrix() {
    let g = graph([
        (5, vec![2, 0]),
        (4, vec![0, 1]),
        (2, vec![3]),
        (3, vec![1]),
    ]);
    let order = topological_sort(&g).unwrap();
    assert_eq!(order.len(), 6);
    let pos = |v: i32| order.iter().position(|&x| x == v).unwrap();
    for (u, vs) in &g {
        for &v in vs {
            assert!(pos(*u) < pos(v), "{u} -> {v} in {order:?}");
        }
    }
    assert_eq!(order, vec![4, 5, 0, 2, 3, 1]);

    let cyclic = graph([(1, vec![2]), (2, vec![1])]);
    assert_eq!(topological_sort(&cyclic), Err(GraphError::CycleDetected));
}

#[test]
fn string_vertices() {
    let mut g: AdjacencyMap<String> = AdjacencyMap::new();
    g.insert("shirt".into(), vec!["tie".into(), "belt".into()]);
    g.insert("tie".into(), vec!["jacket".into()]);
    g.insert("belt".into(), vec!["jacket".into()]);
    let order = topological_sort(&g).unwrap();
    assert_eq!(order.first().map(String::as_str), Some("shirt"));
    assert_eq!(order.last().map(String::as_str), Some("jacket"));
}

#[test]
fn adjacency_list_matrix() {
    let mut g = AdjacencyList::new(4);
    g.add_edge(0, 1).unwrap();
    g.add_edge(0, 2).unwrap();
    g.add_edge(2, 3).unwrap();
    assert_eq!(g.neighbors(0), Ok(&[1, 2][..]));
    assert_eq!(g.neighbors(2), Ok(&[0, 3][..]));
    assert_eq!(g.neighbors(4), Err(GraphError::VertexOutOfRange(4)));
    assert_eq!(g.add_edge(1, 7), Err(GraphError::VertexOutOfRange(7)));
    assert_eq!(g.neighbors(1), Ok(&[0][..]));
    assert_eq!(g.edge_count(), 3);

    let map = g.to_adjacency_map();
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    assert_eq!(bfs(&map, &3), vec![3, 2, 0, 1]);
    assert!(has_cycle(&map));
}
