use std::cmp::Ordering;

/// Three-way comparator for any `PartialOrd` key: negative when `a < b`,
/// zero when equal, positive when `a > b`.
///
/// Incomparable pairs (e.g. `NaN`) compare as greater, so they sink to the
/// right of a search tree instead of matching an existing key.
///
/// # Examples
///
/// ```
/// use algokit_util::default_comparator;
///
/// assert_eq!(default_comparator(&1, &2), -1);
/// assert_eq!(default_comparator(&"b", &"a"), 1);
/// assert_eq!(default_comparator(&4.5, &4.5), 0);
/// ```
pub fn default_comparator<K: PartialOrd>(a: &K, b: &K) -> i32 {
    if a == b {
        0
    } else if a < b {
        -1
    } else {
        1
    }
}

/// Converts an [`Ordering`] into the three-way integer convention.
///
/// ```
/// use std::cmp::Ordering;
/// use algokit_util::from_ordering;
///
/// assert_eq!(from_ordering(Ordering::Less), -1);
/// assert_eq!(from_ordering(3.0_f64.total_cmp(&3.0)), 0);
/// ```
pub fn from_ordering(ordering: Ordering) -> i32 {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_strings() {
        assert_eq!(default_comparator(&"a", &"b"), -1);
        assert_eq!(default_comparator(&"abc", &"abc"), 0);
        assert_eq!(default_comparator(&"abd", &"abc"), 1);
    }

    #[test]
    fn test_nan_sorts_right() {
        assert_eq!(default_comparator(&f64::NAN, &1.0), 1);
    }

    proptest! {
        #[test]
        fn agrees_with_ord(a in any::<i64>(), b in any::<i64>()) {
            prop_assert_eq!(default_comparator(&a, &b), from_ordering(a.cmp(&b)));
        }

        #[test]
        fn antisymmetric(a in any::<i32>(), b in any::<i32>()) {
            prop_assert_eq!(default_comparator(&a, &b), -default_comparator(&b, &a));
        }
    }
}
