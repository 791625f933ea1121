//! # cantor
//!
//! Lexicographic ranking and unranking of permutations through the
//! [factorial number system](https://en.wikipedia.org/wiki/Factorial_number_system),
//! also known as the Cantor expansion.
//!
//! A permutation of `1..=n` is mapped to its 0-based position among all `n!`
//! permutations sorted lexicographically, and back. Lengths up to
//! [`MAX_LEN`] are supported so that every rank fits in a `u32`.
//!
//! ## Examples
//!
//! ```
//! use cantor::{rank, unrank, Rank};
//!
//! assert_eq!(rank(&[3, 1, 2, 5, 4]), Ok(49));
//!
//! let perm = unrank(9, 98884).unwrap();
//! assert_eq!(perm, [3, 5, 7, 4, 1, 2, 9, 6, 8]);
//! assert_eq!(perm.rank(), Ok(98884));
//! ```
//!
//! Malformed input is rejected rather than silently misranked:
//!
//! ```
//! use cantor::{rank, unrank, CantorError};
//!
//! assert_eq!(
//!     rank(&[1, 1, 2]),
//!     Err(CantorError::InvalidPermutation { position: 1, value: 1 })
//! );
//! assert_eq!(
//!     unrank(3, 6),
//!     Err(CantorError::InvalidRank { len: 3, rank: 6, bound: 6 })
//! );
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs, rust_2018_idioms)]

extern crate alloc;

mod error;
mod factorial;
mod pool;
mod rank;
mod unrank;

pub use error::CantorError;
pub use factorial::{factorial, FACTORIALS, MAX_LEN};
pub use rank::{lehmer_code, rank};
pub use unrank::{permutations, unrank, unrank_array, unrank_into, Permutations};

/// Trait for ranking arrays and slices.
pub trait Rank: internal::Sealed {
    /// Returns the 0-based lexicographic rank of this permutation.
    ///
    /// See [`rank()`] for the error conditions.
    fn rank(&self) -> Result<u32, CantorError>;
}

impl<const N: usize> Rank for [u32; N] {
    #[inline]
    fn rank(&self) -> Result<u32, CantorError> {
        rank::rank(self)
    }
}

impl Rank for [u32] {
    #[inline]
    fn rank(&self) -> Result<u32, CantorError> {
        rank::rank(self)
    }
}

mod internal {
    pub trait Sealed {}

    impl Sealed for [u32] {}
    impl<const N: usize> Sealed for [u32; N] {}
}
