//! Error taxonomy shared by every order-statistics entry point.
//!
//! Validation always runs before the first swap, so a call that returns an
//! error leaves the caller's slice exactly as it was.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectError {
    /// The input slice has no elements.
    #[error("cannot select from an empty sequence")]
    EmptySequence,

    /// The requested 1-based rank is outside `1..=len`.
    #[error("rank {rank} is out of range for a sequence of length {len}")]
    InvalidRank { rank: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, SelectError>;
