//! Quicksort assembled from the selector's building blocks.
//!
//! Uses [`median_of_three`] and [`partition`] unchanged. Recurses into the smaller side and
//! loops on the larger one, so stack depth stays logarithmic even when pivots are poor.

use crate::select::{median_of_three, partition};

pub fn quick_sort<T: Ord>(data: &mut [T]) {
    if data.len() > 1 {
        sort_range(data, 0, data.len() - 1);
    }
}

/// Sorts `data[left..=right]`.
fn sort_range<T: Ord>(data: &mut [T], mut left: usize, mut right: usize) {
    while left < right {
        let pivot = median_of_three(data, left, right);
        let pos = partition(data, left, right, pivot);

        if pos - left < right - pos {
            if pos > left {
                sort_range(data, left, pos - 1);
            }
            left = pos + 1;
        } else {
            if pos < right {
                sort_range(data, pos + 1, right);
            }
            right = pos - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_quick_sort_small() {
        let mut empty: Vec<i32> = vec![];
        quick_sort(&mut empty);
        assert!(empty.is_empty());

        let mut data = vec![3, 1, 2];
        quick_sort(&mut data);
        assert_eq!(data, vec![1, 2, 3]);

        let mut data = vec![2, 2, 1, 1];
        quick_sort(&mut data);
        assert_eq!(data, vec![1, 1, 2, 2]);
    }

    #[test]
    fn test_quick_sort_matches_std() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);

        for len in 0..200usize {
            let mut data: Vec<i64> = (0..len).map(|_| rng.random_range(-50..50)).collect();
            let mut expected = data.clone();
            expected.sort();
            quick_sort(&mut data);
            assert_eq!(data, expected);
        }
    }

    #[test]
    fn test_quick_sort_adversarial_shapes() {
        let mut ascending: Vec<u32> = (0..2000).collect();
        let expected = ascending.clone();
        quick_sort(&mut ascending);
        assert_eq!(ascending, expected);

        let mut descending: Vec<u32> = (0..2000).rev().collect();
        quick_sort(&mut descending);
        assert_eq!(descending, expected);

        let mut constant = vec![7u8; 500];
        quick_sort(&mut constant);
        assert!(constant.iter().all(|&v| v == 7));
    }

    #[test]
    fn test_quick_sort_strings() {
        let mut words = vec!["kiwi", "apple", "fig", "banana", "apple"];
        quick_sort(&mut words);
        assert_eq!(words, vec!["apple", "apple", "banana", "fig", "kiwi"]);
    }
}
