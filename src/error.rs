//! Error types for cantor.

use thiserror::Error;

use crate::MAX_LEN;

/// Argument validation failures reported by ranking and unranking.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CantorError {
    /// The permutation length exceeds [`MAX_LEN`].
    #[error("permutation length {len} exceeds maximum of {max}", max = MAX_LEN)]
    InvalidLength {
        /// The requested length.
        len: usize,
    },

    /// The rank is not below `len!`.
    #[error("rank {rank} out of range for length {len} (must be below {bound})")]
    InvalidRank {
        /// The permutation length.
        len: usize,
        /// The requested rank.
        rank: u32,
        /// `len!`, the exclusive upper bound.
        bound: u32,
    },

    /// The input is not a permutation of `1..=len`.
    #[error("value {value} at position {position} is out of range or repeated")]
    InvalidPermutation {
        /// Index of the first offending element.
        position: usize,
        /// The offending value.
        value: u32,
    },
}
