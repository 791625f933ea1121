use alloc::vec::Vec;
use core::iter::FusedIterator;

use crate::{
    factorial::check_len,
    pool::{Const, Container, Dyn, Pool},
    CantorError, FACTORIALS, MAX_LEN,
};

/// Returns the permutation of `1..=n` at lexicographic rank `k`.
///
/// # Errors
///
/// Returns [`CantorError::InvalidLength`] if `n > MAX_LEN`, or
/// [`CantorError::InvalidRank`] if `k >= n!`.
///
/// # Examples
///
/// ```
/// assert_eq!(cantor::unrank(3, 3), Ok(vec![2, 3, 1]));
/// assert!(cantor::unrank(3, 6).is_err());
/// ```
pub fn unrank(n: usize, k: u32) -> Result<Vec<u32>, CantorError> {
    check_rank(n, k)?;
    Ok(unrank_unchecked(n, k))
}

/// Writes the permutation of `1..=out.len()` at lexicographic rank `k`
/// into `out`, without allocating.
///
/// `out` is left untouched on error.
///
/// # Errors
///
/// Same as [`unrank`], with `n = out.len()`.
///
/// # Examples
///
/// ```
/// let mut out = [0; 4];
/// cantor::unrank_into(&mut out, 10).unwrap();
/// assert_eq!(out, [2, 4, 1, 3]);
/// ```
pub fn unrank_into(out: &mut [u32], k: u32) -> Result<(), CantorError> {
    check_rank(out.len(), k)?;
    fill(&mut Pool::<Const<MAX_LEN>>::with_len(out.len()), k, out);
    Ok(())
}

/// Returns the permutation of `1..=N` at lexicographic rank `k` as an
/// array, without allocating.
///
/// # Errors
///
/// Same as [`unrank`], with `n = N`.
///
/// # Examples
///
/// ```
/// assert_eq!(cantor::unrank_array::<3>(5), Ok([3, 2, 1]));
/// ```
pub fn unrank_array<const N: usize>(k: u32) -> Result<[u32; N], CantorError> {
    check_rank(N, k)?;
    let mut out = [0; N];
    fill(&mut Pool::<Const<N>>::new_const(), k, &mut out);
    Ok(out)
}

/// Returns an iterator over every permutation of `1..=n` in lexicographic
/// order, i.e. ranks `0..n!`.
///
/// # Errors
///
/// Returns [`CantorError::InvalidLength`] if `n > MAX_LEN`.
///
/// # Examples
///
/// ```
/// let all: Vec<_> = cantor::permutations(3).unwrap().collect();
/// assert_eq!(all.len(), 6);
/// assert_eq!(all[0], [1, 2, 3]);
/// assert_eq!(all[5], [3, 2, 1]);
/// ```
pub fn permutations(n: usize) -> Result<Permutations, CantorError> {
    check_len(n)?;
    Ok(Permutations {
        n,
        front: 0,
        back: FACTORIALS[n],
    })
}

/// Iterator over the permutations of `1..=n` in lexicographic order.
///
/// Created by [`permutations`].
#[derive(Debug, Clone)]
pub struct Permutations {
    n: usize,
    // Ranks `front..back` are still to be yielded.
    front: u32,
    back: u32,
}

impl Iterator for Permutations {
    type Item = Vec<u32>;

    #[inline]
    fn next(&mut self) -> Option<Vec<u32>> {
        if self.front == self.back {
            return None;
        }
        let perm = unrank_unchecked(self.n, self.front);
        self.front += 1;
        Some(perm)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = (self.back - self.front) as usize;
        (len, Some(len))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Vec<u32>> {
        let remaining = (self.back - self.front) as usize;
        // `remaining` never exceeds `MAX_LEN!`, so the cast below is lossless.
        self.front += n.min(remaining) as u32;
        self.next()
    }
}

impl DoubleEndedIterator for Permutations {
    #[inline]
    fn next_back(&mut self) -> Option<Vec<u32>> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(unrank_unchecked(self.n, self.back))
    }
}

impl ExactSizeIterator for Permutations {}

impl FusedIterator for Permutations {}

fn check_rank(len: usize, rank: u32) -> Result<(), CantorError> {
    check_len(len)?;
    let bound = FACTORIALS[len];
    if rank >= bound {
        return Err(CantorError::InvalidRank { len, rank, bound });
    }
    Ok(())
}

fn unrank_unchecked(n: usize, k: u32) -> Vec<u32> {
    let mut out = alloc::vec![0; n];
    fill(&mut Pool::<Dyn>::new(n), k, &mut out);
    out
}

/// Peels factorial-base digits off `k`, most significant first, each one
/// indexing the pool.
///
/// The caller guarantees `k < out.len()!` and that `pool` holds
/// `1..=out.len()`.
fn fill<C: Container>(pool: &mut Pool<C>, mut k: u32, out: &mut [u32]) {
    debug_assert_eq!(pool.len(), out.len());
    // The last step has radix 0! = 1 and takes the sole survivor.
    for (slot, i) in out.iter_mut().zip((0..pool.len()).rev()) {
        let index = (k / FACTORIALS[i]) as usize;
        k %= FACTORIALS[i];
        *slot = pool.remove_at(index);
    }
    debug_assert_eq!(pool.len(), 0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn demo_rank() {
        assert_eq!(unrank(9, 98884), Ok(vec![3, 5, 7, 4, 1, 2, 9, 6, 8]));
    }

    #[test]
    fn boundaries() {
        assert_eq!(unrank(0, 0), Ok(vec![]));
        assert_eq!(unrank(1, 0), Ok(vec![1]));
        assert_eq!(unrank(5, 0), Ok(vec![1, 2, 3, 4, 5]));
        assert_eq!(unrank(5, 119), Ok(vec![5, 4, 3, 2, 1]));
        assert_eq!(
            unrank_array::<9>(362879),
            Ok([9, 8, 7, 6, 5, 4, 3, 2, 1])
        );
        assert_eq!(unrank_array::<0>(0), Ok([]));
    }

    #[test]
    fn rejects_out_of_range_ranks() {
        for n in 0..=MAX_LEN {
            let bound = FACTORIALS[n];
            let err = CantorError::InvalidRank {
                len: n,
                rank: bound,
                bound,
            };
            assert_eq!(unrank(n, bound), Err(err));
            assert_eq!(unrank_into(&mut vec![0; n], bound), Err(err));
        }
        assert_eq!(
            unrank_array::<4>(u32::MAX),
            Err(CantorError::InvalidRank {
                len: 4,
                rank: u32::MAX,
                bound: 24
            })
        );
    }

    #[test]
    fn rejects_long_lengths() {
        let err = CantorError::InvalidLength { len: 10 };
        assert_eq!(unrank(10, 0), Err(err));
        assert_eq!(unrank_into(&mut [0; 10], 0), Err(err));
        assert_eq!(unrank_array::<10>(0), Err(err));
        assert_eq!(permutations(10).err(), Some(err));
    }

    #[test]
    fn unrank_into_leaves_buffer_on_error() {
        let mut out = [7; 3];
        assert!(unrank_into(&mut out, 6).is_err());
        assert_eq!(out, [7; 3]);
    }

    #[test]
    fn enumeration_is_sorted_and_complete() {
        for n in 0..=6 {
            let all: Vec<_> = permutations(n).unwrap().collect();
            assert_eq!(all.len(), FACTORIALS[n] as usize);
            assert!(all.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn enumeration_from_both_ends() {
        let mut iter = permutations(3).unwrap();
        assert_eq!(iter.len(), 6);
        assert_eq!(iter.next_back(), Some(vec![3, 2, 1]));
        assert_eq!(iter.next(), Some(vec![1, 2, 3]));
        assert_eq!(iter.nth(2), Some(vec![2, 3, 1]));
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next(), Some(vec![3, 1, 2]));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
        assert_eq!(permutations(2).unwrap().nth(5), None);
    }

    fn indexed_rank_strategy() -> impl Strategy<Value = (usize, u32)> {
        (0..=MAX_LEN).prop_flat_map(|n| (Just(n), 0..FACTORIALS[n]))
    }

    proptest! {
        #[test]
        fn all_flavours_agree((n, k) in indexed_rank_strategy()) {
            let heap = unrank(n, k).unwrap();
            let mut inline = [0; MAX_LEN];
            unrank_into(&mut inline[..n], k).unwrap();
            prop_assert_eq!(&heap[..], &inline[..n]);
            prop_assert_eq!(permutations(n).unwrap().nth(k as usize), Some(heap));
        }

        #[test]
        fn output_is_a_permutation((n, k) in indexed_rank_strategy()) {
            let mut perm = unrank(n, k).unwrap();
            perm.sort_unstable();
            prop_assert!(perm.into_iter().eq(1..=n as u32));
        }
    }
}
