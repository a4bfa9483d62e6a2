//! Order statistics on top of the selector.
//!
//! Every function here takes a 1-based rank (or derives one), validates it against the slice
//! and hands a 0-based index to [`select_nth`]. [`Rank`] is the only place where that
//! translation happens.
//!
//! The median follows the lower-median convention: for an even length it is the element of
//! rank `n / 2`, never the average of the two central elements. The result is therefore always
//! an element of the slice, which the wiggle sort relies on.

use crate::error::{Result, SelectError};
use crate::primitives::validate_non_empty;
use crate::select::select_nth;

/// A 1-based rank that has been checked against a sequence length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rank {
    k: usize,
}

impl Rank {
    pub fn new(k: usize, len: usize) -> Result<Self> {
        if len == 0 {
            return Err(SelectError::EmptySequence);
        }
        if k == 0 || k > len {
            return Err(SelectError::InvalidRank { rank: k, len });
        }
        Ok(Self { k })
    }

    /// The rank as given, `1..=len`.
    pub fn get(self) -> usize {
        self.k
    }

    /// The 0-based index the ranked element occupies once selected.
    pub fn index(self) -> usize {
        self.k - 1
    }

    /// Rank of the same element counted from the other end.
    pub fn mirror(self, len: usize) -> Self {
        debug_assert!(self.k <= len);
        Self { k: len - self.k + 1 }
    }
}

pub fn find_kth_smallest<T: Ord>(data: &mut [T], k: usize) -> Result<&T> {
    validate_non_empty(data)?;
    let rank = Rank::new(k, data.len())?;
    select_nth(data, rank.index())
}

/// Mirrors the rank and defers to [`find_kth_smallest`].
pub fn find_kth_largest<T: Ord>(data: &mut [T], k: usize) -> Result<&T> {
    validate_non_empty(data)?;
    let len = data.len();
    let rank = Rank::new(k, len)?.mirror(len);
    find_kth_smallest(data, rank.get())
}

pub fn find_minimum<T: Ord>(data: &mut [T]) -> Result<&T> {
    find_kth_smallest(data, 1)
}

pub fn find_maximum<T: Ord>(data: &mut [T]) -> Result<&T> {
    let len = data.len();
    find_kth_smallest(data, len)
}

/// Lower median: rank `n / 2 + 1` for odd `n`, rank `n / 2` for even `n`.
pub fn find_median<T: Ord>(data: &mut [T]) -> Result<&T> {
    validate_non_empty(data)?;
    let n = data.len();
    let k = if n % 2 == 1 { n / 2 + 1 } else { n / 2 };
    find_kth_smallest(data, k)
}
