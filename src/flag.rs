//! Dutch National Flag partitioning.
//!
//! A single pass with three pointers splits a slice into a low band, a middle band and a high
//! band:
//!
//! ```text
//!   [0, r)     low
//!   [r, w)     middle
//!   [w, b)     not yet classified
//!   [b, len)   high
//! ```
//!
//! The scan works in a *logical* index space. Every physical access goes through a caller
//! supplied map, which must be a bijection on `0..len`. The plain partitions use the identity;
//! the wiggle sort plugs in its interleaving remap and reuses the same machine.

use core::cmp::Ordering;
use core::ops::Range;

use log::debug;

use crate::primitives::swap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Low,
    Middle,
    High,
}

/// Band boundaries produced by [`flag_scan`], in logical indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bands {
    pub low_end: usize,
    pub high_start: usize,
    pub len: usize,
}

impl Bands {
    pub fn low(&self) -> Range<usize> {
        0..self.low_end
    }

    pub fn middle(&self) -> Range<usize> {
        self.low_end..self.high_start
    }

    pub fn high(&self) -> Range<usize> {
        self.high_start..self.len
    }
}

/// Runs the three-pointer state machine over `data` viewed through `map`.
pub fn flag_scan<T, M, C>(data: &mut [T], map: M, classify: C) -> Bands
where
    M: Fn(usize) -> usize,
    C: Fn(&T) -> Band,
{
    let len = data.len();
    let mut r = 0;
    let mut w = 0;
    let mut b = len;

    while w < b {
        match classify(&data[map(w)]) {
            Band::Low => {
                swap(data, map(r), map(w));
                r += 1;
                w += 1;
            }
            Band::High => {
                // The element swapped in from `b` is unclassified, so `w` stays.
                b -= 1;
                swap(data, map(w), map(b));
            }
            Band::Middle => w += 1,
        }
    }

    Bands {
        low_end: r,
        high_start: b,
        len,
    }
}

/// Moves every element equal to `low` to the front and every element equal to `high` to the
/// back. Anything else ends up in between.
pub fn dutch_flag_partition<T: Eq>(data: &mut [T], low: &T, high: &T) -> Bands {
    let bands = flag_scan(data, |i| i, |v| {
        if v == low {
            Band::Low
        } else if v == high {
            Band::High
        } else {
            Band::Middle
        }
    });
    debug!("dutch flag partition: {bands:?}");
    bands
}

/// Two-value variant: elements equal to `low` first. Returns the index of the first element
/// that is not.
pub fn two_value_partition<T: Eq>(data: &mut [T], low: &T) -> usize {
    let bands = flag_scan(data, |i| i, |v| if v == low { Band::Low } else { Band::Middle });
    bands.low_end
}

/// Groups `data` into `< pivot`, `== pivot` and `> pivot`.
pub fn three_way_partition<T: Ord>(data: &mut [T], pivot: &T) -> Bands {
    let bands = flag_scan(data, |i| i, |v| match v.cmp(pivot) {
        Ordering::Less => Band::Low,
        Ordering::Equal => Band::Middle,
        Ordering::Greater => Band::High,
    });
    debug!("three way partition: {bands:?}");
    bands
}
