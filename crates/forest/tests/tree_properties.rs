use algokit_forest::{count_nodes, AvlTree, Bst, RbTree};
use proptest::prelude::*;

proptest! {
    #[test]
    fn bst_in_order_is_sorted_and_complete(keys in proptest::collection::vec(-1000i32..1000, 0..200)) {
        let tree: Bst<i32> = keys.iter().copied().collect();
        let mut expected = keys.clone();
        expected.sort_unstable();
        expected.dedup();
        prop_assert_eq!(tree.in_order(), expected.clone());
        prop_assert_eq!(count_nodes(tree.arena(), tree.root_index()), expected.len());
        let mut pre = tree.pre_order();
        pre.sort_unstable();
        prop_assert_eq!(pre, expected.clone());
        let mut level = tree.level_order();
        level.sort_unstable();
        prop_assert_eq!(level, expected);
        prop_assert!(tree.is_valid());
    }

    #[test]
    fn opposite_rotations_restore_shape(keys in proptest::collection::vec(-200i32..200, 1..80), pick in any::<prop::sample::Index>()) {
        let mut tree: Bst<i32> = keys.iter().copied().collect();
        let pre = tree.pre_order();
        let level = tree.level_order();
        let key = keys[pick.index(keys.len())];
        let Some(idx) = tree.find(&key) else {
            return Err(TestCaseError::fail("inserted key not found"));
        };

        if let Some(top) = tree.rotate_left_at(idx).filter(|&t| t != idx) {
            prop_assert!(tree.is_valid());
            prop_assert_eq!(tree.rotate_right_at(top), Some(idx));
            prop_assert_eq!(tree.pre_order(), pre.clone());
            prop_assert_eq!(tree.level_order(), level.clone());
        }
        if let Some(top) = tree.rotate_right_at(idx).filter(|&t| t != idx) {
            prop_assert!(tree.is_valid());
            prop_assert_eq!(tree.rotate_left_at(top), Some(idx));
            prop_assert_eq!(tree.pre_order(), pre);
            prop_assert_eq!(tree.level_order(), level);
        }
        prop_assert!(tree.is_valid());
    }

    #[test]
    fn bst_delete_preserves_order(keys in proptest::collection::vec(0i32..100, 1..60), victim in 0i32..100) {
        let mut tree: Bst<i32> = keys.iter().copied().collect();
        let had = tree.contains(&victim);
        prop_assert_eq!(tree.delete(&victim), had);
        prop_assert!(tree.is_valid());
        prop_assert!(!tree.contains(&victim));
    }

    #[test]
    fn balance_bounds_height(keys in proptest::collection::btree_set(-500i32..500, 0..150)) {
        let mut tree: Bst<i32> = keys.iter().copied().collect();
        tree.balance();
        let n = keys.len() as f64;
        prop_assert!(tree.height() <= (n + 1.0).log2().ceil() as usize);
        prop_assert_eq!(tree.in_order(), keys.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn avl_height_bound(keys in proptest::collection::vec(any::<i32>(), 0..300)) {
        let tree: AvlTree<i32> = keys.into_iter().collect();
        prop_assert!(tree.is_valid());
        let n = tree.len() as f64;
        prop_assert!(tree.height() <= (1.44 * (n + 2.0).log2()).ceil() as usize);
    }

    #[test]
    fn red_black_height_bound(keys in proptest::collection::vec(any::<i32>(), 0..300), removals in 0usize..100) {
        let mut tree: RbTree<i32> = keys.iter().copied().collect();
        for k in keys.iter().take(removals) {
            tree.remove(k);
        }
        prop_assert!(tree.is_valid());
        let n = tree.len() as f64;
        prop_assert!(tree.height() as f64 <= 2.0 * (n + 1.0).log2());
    }
}
