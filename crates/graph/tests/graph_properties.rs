use std::collections::{HashMap, VecDeque};

use algokit_graph::{bfs, bfs_shortest_path, dfs_iterative, dfs_recursive, has_cycle, topological_sort, AdjacencyMap};
use proptest::prelude::*;

fn arb_graph(max_v: u8) -> impl Strategy<Value = AdjacencyMap<u8>> {
    proptest::collection::vec(proptest::collection::vec(0..max_v, 0..4), 1..max_v as usize).prop_map(
        |lists| {
            lists
                .into_iter()
                .enumerate()
                .map(|(i, ns)| (i as u8, ns))
                .collect::<AdjacencyMap<u8>>()
        },
    )
}

/// Edges only go from lower to higher vertices, so the graph is acyclic.
fn arb_dag(max_v: u8) -> impl Strategy<Value = AdjacencyMap<u8>> {
    arb_graph(max_v).prop_map(|g| {
        g.into_iter()
            .map(|(v, ns)| (v, ns.into_iter().filter(|&n| n > v).collect::<Vec<u8>>()))
            .collect::<AdjacencyMap<u8>>()
    })
}

fn distances(g: &AdjacencyMap<u8>, start: u8) -> HashMap<u8, usize> {
    let mut dist = HashMap::from([(start, 0)]);
    let mut queue = VecDeque::from([start]);
    while let Some(v) = queue.pop_front() {
        let d = dist[&v];
        for &n in g.get(&v).map(Vec::as_slice).unwrap_or(&[]) {
            if !dist.contains_key(&n) {
                dist.insert(n, d + 1);
                queue.push_back(n);
            }
        }
    }
    dist
}

proptest! {
    #[test]
    fn dfs_forms_agree(g in arb_graph(12)) {
        prop_assert_eq!(dfs_iterative(&g, &0), dfs_recursive(&g, &0));
    }

    #[test]
    fn bfs_and_dfs_reach_same_set(g in arb_graph(12)) {
        let mut a = bfs(&g, &0);
        let mut b = dfs_iterative(&g, &0);
        a.sort();
        b.sort();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn shortest_path_is_optimal(g in arb_graph(10), goal in 0u8..10) {
        let path = bfs_shortest_path(&g, &0, &goal);
        match distances(&g, 0).get(&goal) {
            Some(&d) => {
                prop_assert_eq!(path.len(), d + 1);
                prop_assert_eq!(path.first(), Some(&0));
                prop_assert_eq!(path.last(), Some(&goal));
                for w in path.windows(2) {
                    prop_assert!(g[&w[0]].contains(&w[1]));
                }
            }
            None => prop_assert!(path.is_empty()),
        }
    }

    #[test]
    fn dag_sorts_soundly(g in arb_dag(12)) {
        prop_assert!(!has_cycle(&g));
        let order = topological_sort(&g).unwrap();
        let pos: HashMap<u8, usize> = order.iter().enumerate().map(|(i, &v)| (v, i)).collect();
        for (u, ns) in &g {
            for n in ns {
                prop_assert!(pos[u] < pos[n]);
            }
        }
    }

    #[test]
    fn cycle_verdict_matches_sort(g in arb_graph(8)) {
        prop_assert_eq!(has_cycle(&g), topological_sort(&g).is_err());
    }
}
