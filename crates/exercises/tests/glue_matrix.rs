use std::collections::BTreeMap;

use algokit_exercises::{
    build_codes, chromatic_number, course_order, decode, encode, kth_largest, kth_smallest,
    last_stone_weight, sorted_to_balanced_bst, CodeTable, ExerciseError,
};
use algokit_forest::Bst;

fn table(pairs: &[(char, &str)]) -> CodeTable {
    pairs.iter().map(|&(ch, code)| (ch, code.to_string())).collect()
}

#[test]
fn decode_takes_longest_matching_code() {
    let codes = table(&[('a', "0"), ('b', "10"), ('c', "110"), ('d', "111")]);
    assert_eq!(decode("0101100111", &codes), Ok("abcad".to_string()));
    assert_eq!(decode("", &codes), Ok(String::new()));
    assert!(decode("11", &codes).is_err());

    // not prefix-free: longest match wins
    let overlapping = table(&[('x', "1"), ('y', "11")]);
    assert_eq!(decode("111", &overlapping), Ok("yx".to_string()));
}

#[test]
fn build_codes_weights_frequent_symbols() {
    let codes = build_codes("aaaaabbbcc d");
    assert_eq!(codes.len(), 5);
    assert!(codes[&'a'].len() <= codes[&'d'].len());
    let bits = encode("abcd", &codes).unwrap();
    assert_eq!(decode(&bits, &codes), Ok("abcd".to_string()));
    assert_eq!(encode("z", &codes), Err(ExerciseError::InvalidArgument("symbol has no code")));
}

#[test]
fn build_codes_degenerate_inputs() {
    assert!(build_codes("").is_empty());
    let single = build_codes("zzz");
    assert_eq!(single, BTreeMap::from([('z', "0".to_string())]));
    assert_eq!(decode("000", &single), Ok("zzz".to_string()));
}

#[test]
fn build_codes_is_deterministic() {
    // a:1 b:1 c:2 -> (a,b) merge first, then with c
    let codes = build_codes("abcc");
    assert_eq!(codes, table(&[('a', "10"), ('b', "11"), ('c', "0")]));
}

#[test]
fn course_order_respects_prerequisites() {
    let prereqs = [(1, 0), (2, 0), (3, 1), (3, 2)];
    let order = course_order(4, &prereqs).unwrap();
    assert_eq!(order.len(), 4);
    let pos = |c: usize| order.iter().position(|&x| x == c).unwrap();
    for (course, pre) in prereqs {
        assert!(pos(pre) < pos(course));
    }
    assert_eq!(course_order(2, &[(0, 1), (1, 0)]), Ok(vec![]));
    assert_eq!(course_order(3, &[]).map(|o| o.len()), Ok(3));
    assert!(course_order(2, &[(2, 0)]).is_err());
}

#[test]
fn kth_smallest_walks_in_order() {
    let tree: Bst<i32> = [5, 3, 6, 2, 4, 1].into_iter().collect();
    let got: Vec<Option<&i32>> = (0..=7).map(|k| kth_smallest(&tree, k)).collect();
    assert_eq!(got, vec![None, Some(&1), Some(&2), Some(&3), Some(&4), Some(&5), Some(&6), None]);
}

#[test]
fn sorted_input_becomes_balanced_tree() {
    let values: Vec<i32> = (1..=15).collect();
    let tree = sorted_to_balanced_bst(&values);
    assert!(tree.is_valid());
    assert_eq!(tree.height(), 4);
    assert_eq!(tree.in_order(), values);

    let long: Vec<i32> = (0..100_000).collect();
    let tree = sorted_to_balanced_bst(&long);
    assert_eq!(tree.len(), long.len());
    assert_eq!(tree.height(), 17);
    assert_eq!(tree.min(), Ok(&0));
}

#[test]
fn kth_largest_and_stones() {
    assert_eq!(kth_largest(&[3, 2, 1, 5, 6, 4], 2), Some(5));
    assert_eq!(kth_largest(&[3, 2, 3, 1, 2, 4, 5, 5, 6], 4), Some(4));
    assert_eq!(kth_largest(&[1], 2), None);
    assert_eq!(kth_largest::<i32>(&[], 0), None);
    assert_eq!(last_stone_weight(&[2, 7, 4, 1, 8, 1]), 1);
    assert_eq!(last_stone_weight(&[3, 3]), 0);
    assert_eq!(last_stone_weight(&[]), 0);
}

#[test]
fn chromatic_number_of_small_graphs() {
    let triangle = vec![vec![1, 2], vec![0, 2], vec![0, 1]];
    assert_eq!(chromatic_number(&triangle), (3, vec![1, 2, 3]));
    let square = vec![vec![1, 3], vec![0, 2], vec![1, 3], vec![0, 2]];
    assert_eq!(chromatic_number(&square), (2, vec![1, 2, 1, 2]));
    assert_eq!(chromatic_number(&[]), (0, vec![]));
}
