use algokit_search::{
    graph_coloring, graph_coloring_memo, hamiltonian_path, hamiltonian_path_memo, lis_memoization,
    lis_recursive, optimal_bst_cost, optimal_bst_cost_plain, subset_sum, subset_sum_plain, word_break,
    word_break_plain, Mode,
};
use proptest::prelude::*;

fn small_graph() -> impl Strategy<Value = Vec<Vec<usize>>> {
    (1usize..7).prop_flat_map(|n| {
        proptest::collection::vec(proptest::collection::vec(0..n, 0..n), n).prop_map(|mut adj| {
            // make it undirected
            let edges: Vec<(usize, usize)> = adj
                .iter()
                .enumerate()
                .flat_map(|(u, ns)| ns.iter().map(move |&v| (u, v)))
                .collect();
            for (u, v) in edges {
                if u != v && !adj[v].contains(&u) {
                    adj[v].push(u);
                }
            }
            for (u, ns) in adj.iter_mut().enumerate() {
                ns.retain(|&v| v != u);
                ns.dedup();
            }
            adj
        })
    })
}

proptest! {
    #[test]
    fn lis_memo_matches_plain(values in proptest::collection::vec(-20i64..20, 0..14)) {
        prop_assert_eq!(lis_memoization(&values), lis_recursive(&values));
    }

    #[test]
    fn subset_sum_memo_matches_plain(
        values in proptest::collection::vec(0u64..15, 0..12),
        target in 0u64..40,
    ) {
        let memo = subset_sum(&values, target);
        prop_assert_eq!(&memo, &subset_sum_plain(&values, target));
        if let Some(picked) = memo {
            prop_assert_eq!(picked.iter().sum::<u64>(), target);
        }
    }

    #[test]
    fn word_break_memo_matches_plain(text in "[ab]{0,12}") {
        let dict = ["a", "ab", "abb", "ba", "bb"];
        let memo = word_break(&text, &dict);
        prop_assert_eq!(&memo, &word_break_plain(&text, &dict));
        if let Some(parts) = memo {
            prop_assert_eq!(parts.concat(), text);
        }
    }

    #[test]
    fn obst_memo_matches_plain(freq in proptest::collection::vec(0u64..50, 0..7)) {
        prop_assert_eq!(optimal_bst_cost(&freq), optimal_bst_cost_plain(&freq));
    }

    #[test]
    fn coloring_memo_matches_search(adj in small_graph(), m in 0usize..4) {
        let memo = graph_coloring_memo(&adj, m);
        prop_assert_eq!(&memo, &graph_coloring(&adj, m, Mode::Witness).witness());
        if let Some(colors) = memo {
            for (u, ns) in adj.iter().enumerate() {
                for &v in ns {
                    prop_assert_ne!(colors[u], colors[v]);
                }
            }
        }
    }

    #[test]
    fn hamiltonian_memo_matches_search(adj in small_graph()) {
        let memo = hamiltonian_path_memo(&adj).unwrap();
        prop_assert_eq!(&memo, &hamiltonian_path(&adj, Mode::Witness).witness());
        if let Some(path) = memo {
            prop_assert_eq!(path.len(), adj.len());
            for w in path.windows(2) {
                prop_assert!(adj[w[0]].contains(&w[1]));
            }
        }
    }
}

#[cfg(feature = "multithreaded")]
#[test]
fn parallel_fib_matches_sequential() {
    use algokit_search::{fib, parallel_fib, MAX_FIB_N};
    for n in 0..=MAX_FIB_N {
        assert_eq!(parallel_fib(n), fib(n), "n = {n}");
    }
    assert!(parallel_fib(MAX_FIB_N + 1).is_err());
}

#[test]
fn fib_bounds() {
    use algokit_search::fib;
    assert_eq!(fib(0), Ok(0));
    assert_eq!(fib(10), Ok(55));
    assert_eq!(fib(93), Ok(12_200_160_415_121_876_738));
    assert!(fib(94).is_err());
}
