use crate::CantorError;

/// The maximum supported permutation length.
///
/// `MAX_LEN!` is the largest factorial kept in [`FACTORIALS`].
pub const MAX_LEN: usize = 9;

/// `i!` for every `i` in `0..=MAX_LEN`.
pub const FACTORIALS: [u32; MAX_LEN + 1] = {
    let mut out = [1; MAX_LEN + 1];
    let mut i = 1;
    while i <= MAX_LEN {
        out[i] = out[i - 1] * i as u32;
        i += 1;
    }
    out
};

/// Returns `n!`.
///
/// # Errors
///
/// Returns [`CantorError::InvalidLength`] if `n > MAX_LEN`.
///
/// # Examples
///
/// ```
/// assert_eq!(cantor::factorial(5), Ok(120));
/// assert!(cantor::factorial(10).is_err());
/// ```
#[inline]
pub fn factorial(n: usize) -> Result<u32, CantorError> {
    check_len(n)?;
    Ok(FACTORIALS[n])
}

#[inline]
pub(crate) fn check_len(len: usize) -> Result<(), CantorError> {
    if len > MAX_LEN {
        return Err(CantorError::InvalidLength { len });
    }
    Ok(())
}
