//! Indices whose value is part of their type.

use std::fmt;

/// A loop or tuple position known at compile time.
///
/// `Index<I>` is zero-sized; its value is the const parameter, so code
/// receiving one can branch on it without a runtime comparison and can
/// forward it as a const generic argument.
///
/// # Examples
///
/// ```
/// use loopforge_core::Index;
///
/// fn describe<const I: usize>(_: Index<I>) -> &'static str {
///     if I == 0 { "first" } else { "other" }
/// }
///
/// assert_eq!(describe(Index::<0>), "first");
/// assert_eq!(describe(Index::<3>), "other");
/// assert_eq!(Index::<3>::VALUE, 3);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Index<const I: usize>;

impl<const I: usize> Index<I> {
    /// The index value.
    pub const VALUE: usize = I;

    /// Returns the index value.
    #[inline]
    pub const fn value(self) -> usize {
        I
    }
}

impl<const I: usize> From<Index<I>> for usize {
    #[inline]
    fn from(_: Index<I>) -> usize {
        I
    }
}

impl<const I: usize> fmt::Debug for Index<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Index<{}>", I)
    }
}

impl<const I: usize> fmt::Display for Index<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", I)
    }
}
