use algokit_heap::{sliding_window_median, HeapError, MedianFinder};

#[test]
fn running_median_matrix() {
    let mut finder = MedianFinder::new();
    assert_eq!(finder.find_median(), Err(HeapError::EmptyHeap));
    let medians: Vec<f64> = [1, 2, 3, 4]
        .into_iter()
        .map(|v| {
            finder.add_num(v);
            finder.find_median().unwrap()
        })
        .collect();
    assert_eq!(medians, vec![1.0, 1.5, 2.0, 2.5]);
    assert_eq!(finder.len(), 4);
}

#[test]
fn running_median_unsorted_input() {
    let mut finder = MedianFinder::new();
    for v in [5, 15, 1, 3] {
        finder.add_num(v);
    }
    assert_eq!(finder.find_median(), Ok(4.0));
    finder.add_num(-10);
    assert_eq!(finder.find_median(), Ok(3.0));
}

#[test]
fn sliding_window_matrix() {
    let values = [1, 3, -1, -3, 5, 3, 6, 7];
    assert_eq!(
        sliding_window_median(&values, 3),
        Ok(vec![1.0, -1.0, -1.0, 3.0, 5.0, 6.0])
    );
    assert_eq!(
        sliding_window_median(&values, 4),
        Ok(vec![0.0, 1.0, 1.0, 4.0, 5.5])
    );
    assert_eq!(sliding_window_median(&[1, 2], 1), Ok(vec![1.0, 2.0]));
    assert_eq!(sliding_window_median(&[1, 2], 3), Ok(vec![]));
    assert!(matches!(sliding_window_median(&[1], 0), Err(HeapError::InvalidArgument(_))));
}

#[test]
fn sliding_window_with_duplicates() {
    let values = [2, 2, 2, 2, 1, 1, 1, 3, 3];
    let got = sliding_window_median(&values, 3).unwrap();
    assert_eq!(got, vec![2.0, 2.0, 2.0, 1.0, 1.0, 1.0, 3.0]);
}

#[test]
fn sliding_window_handles_extremes() {
    let values = [i64::MAX, i64::MAX];
    let got = sliding_window_median(&values, 2).unwrap();
    assert_eq!(got, vec![i64::MAX as f64]);
}
