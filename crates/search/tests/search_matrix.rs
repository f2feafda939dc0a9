use algokit_search::{
    graph_coloring, graph_coloring_memo, hamiltonian_path, hamiltonian_path_memo, lis_memoization,
    lis_recursive, n_queens, n_queens_count_memo, optimal_bst_cost, optimal_bst_cost_plain, solve,
    subset_sum, subset_sum_plain, subset_sum_search, word_break, word_break_all, word_break_plain,
    Backtrack, Mode, Outcome, SearchError,
};
use serde::Deserialize;

#[test]
fn lis_of_classic_sequence_is_five() {
    let values = [10, 22, 9, 33, 21, 50, 41, 60];
    assert_eq!(lis_memoization(&values), 5);
    assert_eq!(lis_recursive(&values), 5);
}

#[test]
fn lis_matrix() {
    let cases: &[(&[i64], usize)] = &[
        (&[], 0),
        (&[7], 1),
        (&[3, 3, 3], 1),
        (&[5, 4, 3, 2, 1], 1),
        (&[1, 2, 3, 4], 4),
        (&[0, 8, 4, 12, 2, 10, 6, 14, 1, 9], 4),
    ];
    for (values, expected) in cases {
        assert_eq!(lis_memoization(values), *expected, "{values:?}");
        assert_eq!(lis_recursive(values), *expected, "{values:?}");
    }
}

#[test]
fn word_break_prefers_shortest_prefix() {
    let dict = ["apple", "pen", "applepen", "pine", "pineapple"];
    let got = word_break("pineapplepenapple", &dict);
    assert_eq!(got, Some(vec!["pine".to_string(), "apple".into(), "pen".into(), "apple".into()]));
    assert_eq!(word_break_plain("pineapplepenapple", &dict), got);
}

#[test]
fn word_break_edge_cases() {
    assert_eq!(word_break("", &["a"]), Some(vec![]));
    assert_eq!(word_break_plain("", &[]), Some(vec![]));
    assert_eq!(word_break("catsandog", &["cats", "dog", "sand", "and", "cat"]), None);
    assert_eq!(word_break_plain("catsandog", &["cats", "dog", "sand", "and", "cat"]), None);
    assert_eq!(word_break("héhé", &["hé"]), Some(vec!["hé".to_string(), "hé".into()]));
}

#[test]
fn word_break_all_lists_every_segmentation() {
    let all = word_break_all("catsanddog", &["cat", "cats", "and", "sand", "dog"]);
    let joined: Vec<String> = all.iter().map(|parts| parts.join(" ")).collect();
    assert_eq!(joined, vec!["cat sand dog", "cats and dog"]);
    assert!(word_break_all("abc", &["ab"]).is_empty());
}

#[test]
fn subset_sum_matrix() {
    let values = [3, 34, 4, 12, 5, 2];
    assert_eq!(subset_sum(&values, 9), Some(vec![3, 4, 2]));
    assert_eq!(subset_sum_plain(&values, 9), Some(vec![3, 4, 2]));
    assert_eq!(subset_sum(&values, 30), None);
    assert_eq!(subset_sum_plain(&values, 30), None);
    assert_eq!(subset_sum(&values, 0), Some(vec![]));
    assert_eq!(subset_sum(&[], 1), None);
}

#[test]
fn subset_sum_search_modes() {
    let values = [1, 2, 3, 4];
    assert_eq!(subset_sum_search(&values, 5, Mode::Witness), Outcome::Witness(Some(vec![1, 4])));
    assert_eq!(subset_sum_search(&values, 5, Mode::Count), Outcome::Count(2));
    assert_eq!(
        subset_sum_search(&values, 5, Mode::Enumerate),
        Outcome::All(vec![vec![1, 4], vec![2, 3]])
    );
    assert_eq!(subset_sum_search(&values, 11, Mode::Witness), Outcome::Witness(None));
}

#[test]
fn n_queens_counts() {
    let expected = [1, 1, 0, 0, 2, 10, 4, 40, 92];
    for (n, &count) in expected.iter().enumerate() {
        assert_eq!(n_queens(n, Mode::Count), Outcome::Count(count), "n = {n}");
        assert_eq!(n_queens_count_memo(n), Ok(count), "n = {n}");
    }
}

#[test]
fn n_queens_witness_and_enumeration() {
    assert_eq!(n_queens(4, Mode::Witness).witness(), Some(vec![1, 3, 0, 2]));
    assert_eq!(n_queens(4, Mode::Enumerate).into_all(), vec![vec![1, 3, 0, 2], vec![2, 0, 3, 1]]);
    assert_eq!(n_queens(0, Mode::Enumerate).into_all(), vec![Vec::<usize>::new()]);
    assert_eq!(n_queens(3, Mode::Witness), Outcome::Witness(None));
    assert!(matches!(n_queens_count_memo(33), Err(SearchError::InvalidArgument(_))));
}

fn square_with_diagonal() -> Vec<Vec<usize>> {
    // 0 - 1
    // | / |
    // 2 - 3
    vec![vec![1, 2], vec![0, 2, 3], vec![0, 1, 3], vec![1, 2]]
}

#[test]
fn graph_coloring_matrix() {
    let adj = square_with_diagonal();
    assert_eq!(graph_coloring(&adj, 2, Mode::Witness), Outcome::Witness(None));
    assert_eq!(graph_coloring_memo(&adj, 2), None);
    assert_eq!(graph_coloring(&adj, 3, Mode::Witness).witness(), Some(vec![1, 2, 3, 1]));
    assert_eq!(graph_coloring_memo(&adj, 3), Some(vec![1, 2, 3, 1]));
    assert_eq!(graph_coloring(&adj, 3, Mode::Count), Outcome::Count(6));
    assert_eq!(graph_coloring_memo(&[], 0), Some(vec![]));
}

#[test]
fn hamiltonian_path_matrix() {
    let adj = square_with_diagonal();
    assert_eq!(hamiltonian_path(&adj, Mode::Witness).witness(), Some(vec![0, 1, 2, 3]));
    assert_eq!(hamiltonian_path_memo(&adj), Ok(Some(vec![0, 1, 2, 3])));

    // star: no path covers all leaves
    let star = vec![vec![1, 2, 3], vec![0], vec![0], vec![0]];
    assert_eq!(hamiltonian_path(&star, Mode::Count), Outcome::Count(0));
    assert_eq!(hamiltonian_path_memo(&star), Ok(None));

    // path graph 0-1-2 has two directed Hamiltonian paths
    let line = vec![vec![1], vec![0, 2], vec![1]];
    let both_ways = hamiltonian_path(&line, Mode::Enumerate).into_all();
    assert_eq!(both_ways, vec![vec![0, 1, 2], vec![2, 1, 0]]);

    let big = vec![Vec::new(); 65];
    assert!(matches!(hamiltonian_path_memo(&big), Err(SearchError::InvalidArgument(_))));
}

#[test]
fn optimal_bst_matrix() {
    let cases: &[(&[u64], u64)] = &[(&[], 0), (&[5], 5), (&[34, 8, 50], 142), (&[34, 50], 118)];
    for (freq, expected) in cases {
        assert_eq!(optimal_bst_cost(freq), *expected, "{freq:?}");
        assert_eq!(optimal_bst_cost_plain(freq), *expected, "{freq:?}");
    }
}

/// Bit strings of a fixed length without two adjacent ones.
struct NoAdjacentOnes {
    len: usize,
    bits: Vec<u8>,
}

impl Backtrack for NoAdjacentOnes {
    type Choice = u8;
    type Solution = String;

    fn is_solution(&self) -> bool {
        self.bits.len() == self.len
    }

    fn is_infeasible(&self) -> bool {
        self.bits.windows(2).any(|w| w == [1, 1])
    }

    fn choices(&self) -> Vec<u8> {
        vec![0, 1]
    }

    fn apply(&mut self, bit: &u8) {
        self.bits.push(*bit);
    }

    fn undo(&mut self, _bit: &u8) {
        self.bits.pop();
    }

    fn snapshot(&self) -> String {
        self.bits.iter().map(|b| char::from(b'0' + b)).collect()
    }
}

#[test]
fn custom_problem_runs_under_every_mode() {
    let mut problem = NoAdjacentOnes { len: 3, bits: Vec::new() };
    assert_eq!(solve(&mut problem, Mode::Witness), Outcome::Witness(Some("000".to_string())));
    assert_eq!(solve(&mut problem, Mode::Count), Outcome::Count(5));
    let all = solve(&mut problem, Mode::Enumerate).into_all();
    assert_eq!(all, vec!["000", "001", "010", "100", "101"]);
    assert!(problem.bits.is_empty());
}

#[derive(Deserialize)]
struct SearchConfig {
    mode: Mode,
}

#[test]
fn mode_reads_from_toml() {
    let cfg: SearchConfig = toml::from_str("mode = \"enumerate\"").unwrap();
    assert_eq!(cfg.mode, Mode::Enumerate);
    let cfg: SearchConfig = toml::from_str("mode = \"count\"").unwrap();
    assert_eq!(cfg.mode, Mode::Count);
    assert!(toml::from_str::<SearchConfig>("mode = \"fastest\"").is_err());
    assert_eq!(Mode::default(), Mode::Witness);
}
