//! Quickselect is a selection algorithm to find the kth smallest element in an unordered list.
//!
//! Quickselect has a good average-case performance and is very cache friendly and in cases where
//! you need a Top-K when K > √N it gives better algorithmic performance due to O(N) being somewhat
//! less than O(N log K).
//!
//! The pivot is the median of the first, middle and last element of the active window. That is
//! the only defense against adversarial inputs: the average case is linear, the worst case stays
//! quadratic.

use log::{debug, trace};

use crate::error::{Result, SelectError};
use crate::primitives::{midpoint, swap, validate_non_empty};
use crate::stats::Rank;

/// Orders `data[left]`, `data[mid]` and `data[right]` with up to three swaps and returns `mid`,
/// which then holds the median of the three.
pub fn median_of_three<T: Ord>(data: &mut [T], left: usize, right: usize) -> usize {
    let mid = midpoint(left, right);

    if data[mid] < data[left] {
        swap(data, left, mid);
    }
    if data[right] < data[left] {
        swap(data, left, right);
    }
    if data[right] < data[mid] {
        swap(data, mid, right);
    }

    mid
}

/// Lomuto partition scheme as used in quicksort.
///
/// Returns the final position of the pivot. Everything in `left..pos` is strictly smaller than
/// the pivot, everything in `pos + 1..=right` is greater or equal.
pub fn partition<T: Ord>(data: &mut [T], left: usize, right: usize, pivot: usize) -> usize {
    if data.is_empty() || left >= right {
        return left;
    }
    // Move pivot to the end.
    swap(data, pivot, right);
    let mut store = left;

    for i in left..right {
        if data[i] < data[right] {
            swap(data, store, i);
            store += 1;
        }
    }

    // Move pivot to its final place.
    swap(data, right, store);

    store
}

/// Places the element of rank `target` (0-based) within `left..=right` at index `target` and
/// returns `target`.
pub fn select_range<T: Ord>(data: &mut [T], left: usize, right: usize, target: usize) -> usize {
    debug_assert!(right < data.len());
    debug_assert!(left <= target && target <= right);

    let mut left = left;
    let mut right = right;
    let mut rounds = 0usize;

    while left < right {
        let pivot = median_of_three(data, left, right);
        let pos = partition(data, left, right, pivot);
        rounds += 1;
        trace!("select window [{left}, {right}] pivot landed at {pos}, target {target}");

        if pos == target {
            break;
        } else if target < pos {
            right = pos - 1;
        } else {
            left = pos + 1;
        }
    }

    debug!("selected index {target} after {rounds} partition rounds");
    target
}

/// Returns the element that belongs at `index` (0-based) in sorted order, leaving `data`
/// partitioned around it.
pub fn select_nth<T: Ord>(data: &mut [T], index: usize) -> Result<&T> {
    validate_non_empty(data)?;
    let len = data.len();
    if index >= len {
        return Err(SelectError::InvalidRank {
            rank: index.saturating_add(1),
            len,
        });
    }

    let pos = select_range(data, 0, len - 1, index);
    Ok(&data[pos])
}

/// Returns the k-th smallest element (1-based `k`), leaving `data` partitioned around index
/// `k - 1`.
pub fn select_kth<T: Ord>(data: &mut [T], k: usize) -> Result<&T> {
    let rank = Rank::new(k, data.len())?;
    select_nth(data, rank.index())
}
