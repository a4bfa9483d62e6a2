//! Partition-based order statistics on mutable slices.
//!
//! Everything here works in place on a caller-owned `&mut [T]` and is single threaded. The
//! layers, bottom up:
//!
//! - [`primitives`]: swap, emptiness check, overflow-free midpoint.
//! - [`select`]: quickselect with median-of-three pivoting and Lomuto partitioning.
//! - [`stats`]: k-th smallest/largest, minimum, maximum and (lower) median, with 1-based ranks.
//! - [`flag`]: the Dutch National Flag three-pointer partition.
//! - [`wiggle`]: strict zig-zag ordering built from the median and the flag partition.
//! - [`sort`]: quicksort reusing the selector's pivot and partition routines.
//!
//! ```
//! use ordstat::{find_kth_largest, find_median, wiggle::{is_wiggle, wiggle_sort_ii}};
//!
//! let mut data = vec![7, 6, 5, 4, 3, 2, 1];
//! assert_eq!(find_kth_largest(&mut data, 2), Ok(&6));
//!
//! let mut data = vec![1, 2, 3, 4];
//! assert_eq!(find_median(&mut data), Ok(&2));
//!
//! let mut data = vec![1, 2, 3, 4, 5];
//! wiggle_sort_ii(&mut data).unwrap();
//! assert!(is_wiggle(&data));
//! ```
//!
//! Failed calls never touch the slice. Diagnostics go through the `log` facade; the crate never
//! installs a logger itself.

pub mod error;
pub mod flag;
pub mod primitives;
pub mod select;
pub mod sort;
pub mod stats;
pub mod wiggle;

pub use error::{Result, SelectError};
pub use select::{select_kth, select_nth};
pub use stats::{Rank, find_kth_largest, find_kth_smallest, find_maximum, find_median, find_minimum};
