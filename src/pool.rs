//! Candidate pools consumed by the unranker.

use alloc::vec::Vec;

pub(crate) use internal::Container;

/// An ordered pool of candidate values.
///
/// A fresh pool holds `1..=n` in ascending order. Values are only ever
/// taken out through [`Pool::remove_at`], which keeps the survivors
/// contiguous and in their original relative order.
#[derive(Debug)]
pub(crate) struct Pool<C: Container> {
    container: C,
}

impl<const N: usize> Pool<Const<N>> {
    /// Creates a new inline pool holding `1..=N`.
    #[inline]
    pub(crate) const fn new_const() -> Self {
        Self {
            container: Const::INIT,
        }
    }

    /// Creates a new inline pool holding `1..=n`.
    ///
    /// # Panics
    ///
    /// Panics if `n > N`.
    #[inline]
    pub(crate) fn with_len(n: usize) -> Self {
        assert!(n <= N, "pool length {n} exceeds capacity {N}");
        let mut container = Const::INIT;
        container.len = n;
        Self { container }
    }
}

impl Pool<Dyn> {
    /// Creates a new heap-allocated pool holding `1..=n`.
    #[inline]
    pub(crate) fn new(n: usize) -> Self {
        Pool {
            container: Dyn {
                values: (1..=n as u32).collect(),
            },
        }
    }
}

impl<C: Container> Pool<C> {
    /// Returns the number of values left in this pool.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.container.values().len()
    }

    /// Returns the values left in this pool, in order.
    #[cfg(test)]
    pub(crate) fn as_slice(&self) -> &[u32] {
        self.container.values()
    }

    /// Removes and returns the value at `index`, shifting every later
    /// value one position to the left.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub(crate) fn remove_at(&mut self, index: usize) -> u32 {
        let len = self.len();
        assert!(
            index < len,
            "pool index {index} out of bounds for length {len}"
        );
        self.container.remove_at(index)
    }
}

/// Constant-capacity container used by `Pool`.
///
/// The const generic `N` bounds the length of the pool.
#[derive(Debug)]
pub(crate) struct Const<const N: usize> {
    values: [u32; N],
    len: usize,
}

impl<const N: usize> Const<N> {
    // [1, 2, 3, ..., N].
    const INIT: Self = Const {
        values: {
            let mut out = [0; N];
            let mut i = 0;
            while i < N {
                out[i] = i as u32 + 1;
                i += 1;
            }
            out
        },
        len: N,
    };
}

impl<const N: usize> Container for Const<N> {
    #[inline]
    fn values(&self) -> &[u32] {
        &self.values[..self.len]
    }

    #[inline]
    fn remove_at(&mut self, index: usize) -> u32 {
        let value = self.values[index];
        self.values.copy_within(index + 1..self.len, index);
        self.len -= 1;
        self.values[self.len] = 0;
        value
    }
}

/// Dynamic-sized container used by `Pool`.
#[derive(Debug)]
pub(crate) struct Dyn {
    values: Vec<u32>,
}

impl Container for Dyn {
    #[inline]
    fn values(&self) -> &[u32] {
        &self.values
    }

    #[inline]
    fn remove_at(&mut self, index: usize) -> u32 {
        self.values.remove(index)
    }
}

mod internal {
    /// Trait for a container used by `Pool`.
    ///
    /// Implementations only need to honor `index < values().len()`;
    /// `Pool::remove_at` checks it before delegating.
    pub trait Container {
        /// Returns the live values.
        fn values(&self) -> &[u32];

        /// Removes the value at `index`, preserving the order of the rest.
        fn remove_at(&mut self, index: usize) -> u32;
    }
}
