use alloc::vec::Vec;

use crate::{factorial::check_len, CantorError, FACTORIALS};

/// Returns the 0-based lexicographic rank of a permutation of `1..=n`,
/// where `n` is the length of `perm`.
///
/// # Errors
///
/// Returns [`CantorError::InvalidLength`] if `perm` is longer than
/// [`MAX_LEN`](crate::MAX_LEN), or [`CantorError::InvalidPermutation`] if
/// it contains a value outside `1..=n` or a repeated value.
///
/// # Examples
///
/// ```
/// assert_eq!(cantor::rank(&[1, 2, 3]), Ok(0));
/// assert_eq!(cantor::rank(&[3, 2, 1]), Ok(5));
/// ```
pub fn rank(perm: &[u32]) -> Result<u32, CantorError> {
    validate(perm)?;
    let n = perm.len();
    Ok((0..n)
        .map(|i| FACTORIALS[n - i - 1] * smaller_after(perm, i))
        .sum())
}

/// Returns the Lehmer code of a permutation of `1..=n`.
///
/// Digit `i` counts the values after position `i` that are smaller than
/// `perm[i]`. Weighting each digit by `(n - i - 1)!` and summing gives
/// [`rank`].
///
/// # Errors
///
/// Same as [`rank`].
///
/// # Examples
///
/// ```
/// assert_eq!(cantor::lehmer_code(&[3, 1, 2, 5, 4]), Ok(vec![2, 0, 0, 1, 0]));
/// ```
pub fn lehmer_code(perm: &[u32]) -> Result<Vec<u32>, CantorError> {
    validate(perm)?;
    Ok((0..perm.len()).map(|i| smaller_after(perm, i)).collect())
}

#[inline]
fn smaller_after(perm: &[u32], i: usize) -> u32 {
    perm[i + 1..].iter().filter(|&&v| v < perm[i]).count() as u32
}

fn validate(perm: &[u32]) -> Result<(), CantorError> {
    let n = perm.len();
    check_len(n)?;

    // Bit `v` is set once `v` has been seen; `n <= 9` fits a `u16`.
    let mut seen = 0u16;
    for (position, &value) in perm.iter().enumerate() {
        if value == 0 || value as usize > n || seen & (1 << value) != 0 {
            return Err(CantorError::InvalidPermutation { position, value });
        }
        seen |= 1 << value;
    }
    Ok(())
}
