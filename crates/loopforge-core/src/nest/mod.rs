//! Runtime nested-loop expansion.
//!
//! [`Nest`] holds a fixed number of levels and can be built in const
//! context, where [`Nest::checked`] turns a malformed configuration into a
//! compile error. [`DynNest`] holds a depth only known at runtime, e.g. one
//! read from a configuration file.
//!
//! Both validate on construction and then visit every index tuple exactly
//! once, lexicographically ascending.

mod cursor;

#[cfg(test)]
mod tests;

use smallvec::{smallvec, SmallVec};
use tracing::debug;

use crate::bounds::{validate, Bound};
use crate::error::Result;

pub use cursor::Tuples;

/// Depth up to which [`IndexTuple`] stays on the stack.
pub const INLINE_DEPTH: usize = 8;

/// Index tuple produced by a [`DynNest`].
pub type IndexTuple = SmallVec<[usize; INLINE_DEPTH]>;

/// Tuples counted for the construction log; larger nests report this cap.
const LOGGED_TUPLES: usize = 1 << 16;

/// A validated nest of `N` loops.
///
/// # Examples
///
/// ```
/// use loopforge_core::{Bound, Nest};
///
/// // j <= i
/// let nest = Nest::new([Bound::range(0, 3), Bound::symm_lower_offset(0, 0, 1)]).unwrap();
/// let tuples: Vec<_> = nest.iter().collect();
/// assert_eq!(tuples, [[0, 0], [1, 0], [1, 1], [2, 0], [2, 1], [2, 2]]);
/// ```
///
/// A malformed nest built with [`Nest::checked`] in a const item does not
/// compile:
///
/// ```compile_fail
/// use loopforge_core::{Bound, Nest};
///
/// const INVERTED: Nest<1> = Nest::checked([Bound::range(3, 1)]);
/// INVERTED.for_each(|_| {});
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nest<const N: usize> {
    bounds: [Bound; N],
}

impl<const N: usize> Nest<N> {
    /// Validates `bounds` and builds the nest.
    ///
    /// # Errors
    ///
    /// Returns the first guard that rejects the configuration.
    pub fn new(bounds: [Bound; N]) -> Result<Self> {
        validate(&bounds)?;
        let nest = Self { bounds };
        debug!(
            depth = N,
            tuples = nest.count_up_to(LOGGED_TUPLES),
            "validated loop nest"
        );
        Ok(nest)
    }

    /// Builds the nest in const context.
    ///
    /// # Panics
    ///
    /// Panics with the guard's message on a malformed configuration. In a
    /// `const` item or `const { .. }` block that panic is a compile error.
    pub const fn checked(bounds: [Bound; N]) -> Self {
        match validate(&bounds) {
            Ok(()) => Self { bounds },
            Err(err) => panic!("{}", err.message()),
        }
    }

    /// Descriptors, outermost level first.
    pub const fn bounds(&self) -> &[Bound; N] {
        &self.bounds
    }

    /// Number of levels.
    pub const fn depth(&self) -> usize {
        N
    }

    /// Calls `f` once per index tuple.
    #[inline]
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut([usize; N]),
    {
        cursor::walk(&self.bounds, &mut [0usize; N], |tuple| f(*tuple));
    }

    /// Iterates the index tuples.
    pub fn iter(&self) -> Tuples<'_, [usize; N]> {
        Tuples::new(&self.bounds, [0; N])
    }

    /// Number of index tuples the nest visits.
    pub fn count(&self) -> usize {
        let mut count = 0;
        self.for_each(|_| count += 1);
        count
    }

    /// Number of index tuples, counting no further than `limit`.
    pub fn count_up_to(&self, limit: usize) -> usize {
        self.iter().take(limit).count()
    }
}

impl<'a, const N: usize> IntoIterator for &'a Nest<N> {
    type Item = [usize; N];
    type IntoIter = Tuples<'a, [usize; N]>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A validated nest whose depth is known at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DynNest {
    bounds: Vec<Bound>,
}

impl DynNest {
    /// Validates `bounds` and builds the nest.
    ///
    /// # Errors
    ///
    /// Returns the first guard that rejects the configuration.
    pub fn new(bounds: Vec<Bound>) -> Result<Self> {
        validate(&bounds)?;
        let nest = Self { bounds };
        debug!(
            depth = nest.depth(),
            tuples = nest.count_up_to(LOGGED_TUPLES),
            "validated loop nest"
        );
        Ok(nest)
    }

    /// Descriptors, outermost level first.
    pub fn bounds(&self) -> &[Bound] {
        &self.bounds
    }

    /// Number of levels.
    pub fn depth(&self) -> usize {
        self.bounds.len()
    }

    /// Calls `f` once per index tuple.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&[usize]),
    {
        let mut buf: IndexTuple = smallvec![0; self.bounds.len()];
        cursor::walk(&self.bounds, &mut buf, |tuple| f(tuple));
    }

    /// Iterates the index tuples.
    pub fn iter(&self) -> Tuples<'_, IndexTuple> {
        Tuples::new(&self.bounds, smallvec![0; self.bounds.len()])
    }

    /// Number of index tuples the nest visits.
    pub fn count(&self) -> usize {
        let mut count = 0;
        self.for_each(|_| count += 1);
        count
    }

    /// Number of index tuples, counting no further than `limit`.
    pub fn count_up_to(&self, limit: usize) -> usize {
        self.iter().take(limit).count()
    }
}

impl<const N: usize> From<Nest<N>> for DynNest {
    fn from(nest: Nest<N>) -> Self {
        Self {
            bounds: nest.bounds.to_vec(),
        }
    }
}

impl<'a> IntoIterator for &'a DynNest {
    type Item = IndexTuple;
    type IntoIter = Tuples<'a, IndexTuple>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
