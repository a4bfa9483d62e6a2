//! Small slice helpers used by the selector and the partition machines.

use crate::error::{Result, SelectError};

/// Exchanges `data[i]` and `data[j]`. Equal indices are a no-op.
#[inline(always)]
pub fn swap<T>(data: &mut [T], i: usize, j: usize) {
    if i != j {
        data.swap(i, j);
    }
}

pub fn validate_non_empty<T>(data: &[T]) -> Result<()> {
    if data.is_empty() {
        return Err(SelectError::EmptySequence);
    }
    Ok(())
}

/// Average of `low` and `high` rounded down, without computing `low + high`.
#[inline(always)]
pub fn midpoint(low: usize, high: usize) -> usize {
    debug_assert!(low <= high);
    low + (high - low) / 2
}
