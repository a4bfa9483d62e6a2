//! Wiggle sorts.
//!
//! [`wiggle_sort_ii`] rearranges a slice into strict zig-zag order,
//! `a[0] < a[1] > a[2] < a[3] > ...`, in linear average time and constant extra space. It
//! selects the median, then runs the Dutch flag scan from [`crate::flag`] through a virtual
//! index remap:
//!
//! ```text
//!   logical i :  0  1  2  3  4  5
//!   physical  :  1  3  5  0  2  4      (n = 6, modulus n | 1 = 7)
//! ```
//!
//! Logical order visits the odd slots first, then the even slots. Elements greater than the
//! median are pushed to the logical front (odd slots, left to right) and elements smaller than
//! the median to the logical back (even slots, right to left). Copies of the median fill the
//! remaining odd slots on the right and even slots on the left, which keeps them apart.
//!
//! When the multiset admits no strict arrangement at all the slice is still a permutation of
//! the input, but [`is_wiggle`] reports `false` for it.

use core::cmp::Ordering;

use log::debug;

use crate::error::Result;
use crate::flag::{Band, flag_scan, three_way_partition};
use crate::stats::find_median;

/// Physical slot of logical index `i` in a slice of length `n`.
#[inline(always)]
pub fn virtual_index(i: usize, n: usize) -> usize {
    (1 + 2 * i) % (n | 1)
}

/// In-place strict wiggle sort.
pub fn wiggle_sort_ii<T: Ord + Clone>(data: &mut [T]) -> Result<()> {
    let n = data.len();
    let median = find_median(data)?.clone();

    let bands = flag_scan(
        data,
        |i| virtual_index(i, n),
        |v| match v.cmp(&median) {
            Ordering::Greater => Band::Low,
            Ordering::Equal => Band::Middle,
            Ordering::Less => Band::High,
        },
    );
    debug!(
        "wiggle sort: {} above median, {} equal, {} below",
        bands.low().len(),
        bands.middle().len(),
        bands.high().len()
    );

    Ok(())
}

/// Strict wiggle sort through a scratch copy.
///
/// Partitions around the median, then fills even slots from the lower half and odd slots from
/// the upper half, both read back to front so that copies of the median end up far apart.
pub fn wiggle_sort_ii_buffered<T: Ord + Clone>(data: &mut [T]) -> Result<()> {
    let n = data.len();
    let median = find_median(data)?.clone();
    three_way_partition(data, &median);

    let scratch = data.to_vec();
    let mut small = n.div_ceil(2);
    let mut large = n;
    for (i, slot) in data.iter_mut().enumerate() {
        if i % 2 == 0 {
            small -= 1;
            *slot = scratch[small].clone();
        } else {
            large -= 1;
            *slot = scratch[large].clone();
        }
    }

    Ok(())
}

/// Non-strict wiggle, `a[0] <= a[1] >= a[2] <= ...`, by swapping adjacent pairs that are out of
/// order. Always succeeds.
pub fn wiggle_sort<T: Ord>(data: &mut [T]) {
    for i in 1..data.len() {
        let rising = i % 2 == 1;
        if (rising && data[i - 1] > data[i]) || (!rising && data[i - 1] < data[i]) {
            data.swap(i - 1, i);
        }
    }
}

/// True when `data[i] < data[i + 1]` for even `i` and `data[i] > data[i + 1]` for odd `i`.
pub fn is_wiggle<T: Ord>(data: &[T]) -> bool {
    data.windows(2).enumerate().all(|(i, pair)| {
        if i % 2 == 0 {
            pair[0] < pair[1]
        } else {
            pair[0] > pair[1]
        }
    })
}
