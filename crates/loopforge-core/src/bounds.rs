//! Bound descriptors for a single nest level and validation of whole nests.
//!
//! A nest is described outermost level first. Plain ranges are used
//! verbatim; symmetric descriptors derive one side of their range from the
//! current value of an enclosing level, giving triangular iteration:
//!
//! ```text
//! Range { lower, upper }              lower          .. upper
//! SymmUpper { index, upper }          value(index)   .. upper
//! SymmLower { index, lower, offset }  lower          .. value(index) + offset
//! ```
//!
//! All bounds are exclusive at the top.

use std::ops::Range;

use crate::error::BoundError;

/// Maximum number of levels in a nest.
pub const MAX_DEPTH: usize = 16;

/// Iteration range of one nest level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound {
    /// Fixed `lower..upper`.
    Range { lower: usize, upper: usize },

    /// `value(index)..upper`, where `value(index)` is the current value of
    /// the enclosing level `index`.
    SymmUpper { index: usize, upper: usize },

    /// `lower..value(index) + offset`.
    SymmLower {
        index: usize,
        lower: usize,
        offset: isize,
    },
}

impl Bound {
    /// Plain range `lower..upper`.
    #[inline]
    pub const fn range(lower: usize, upper: usize) -> Self {
        Bound::Range { lower, upper }
    }

    /// Loops from the current value of level `index` up to `upper`.
    #[inline]
    pub const fn symm_upper(index: usize, upper: usize) -> Self {
        Bound::SymmUpper { index, upper }
    }

    /// Loops from `lower` up to (excluding) the current value of level `index`.
    #[inline]
    pub const fn symm_lower(index: usize, lower: usize) -> Self {
        Bound::SymmLower {
            index,
            lower,
            offset: 0,
        }
    }

    /// Loops from `lower` up to the current value of level `index` plus `offset`.
    ///
    /// An offset of 1 makes the loop inclusive of the referenced value.
    #[inline]
    pub const fn symm_lower_offset(index: usize, lower: usize, offset: isize) -> Self {
        Bound::SymmLower {
            index,
            lower,
            offset,
        }
    }

    /// Returns true if the range depends on an enclosing level.
    #[inline]
    pub const fn is_symmetric(&self) -> bool {
        !matches!(self, Bound::Range { .. })
    }

    /// Level this descriptor symmetrizes over, if any.
    #[inline]
    pub const fn referenced_level(&self) -> Option<usize> {
        match self {
            Bound::Range { .. } => None,
            Bound::SymmUpper { index, .. } | Bound::SymmLower { index, .. } => Some(*index),
        }
    }

    /// Resolves the effective range of this descriptor placed at `level`.
    ///
    /// `prefix[..level]` holds the current values of the enclosing levels.
    ///
    /// # Errors
    ///
    /// Returns the guard that fires when the resolved range would be
    /// negative, or when a symmetric descriptor does not reference an
    /// enclosing level.
    pub const fn resolve(&self, level: usize, prefix: &[usize]) -> Result<Range<usize>, BoundError> {
        match *self {
            Bound::Range { lower, upper } => {
                if upper < lower {
                    return Err(BoundError::InvertedRange {
                        level,
                        lower,
                        upper,
                    });
                }
                Ok(lower..upper)
            }
            Bound::SymmUpper { index, upper } => {
                if index >= level || index >= prefix.len() {
                    return Err(BoundError::ForwardReference { level, index });
                }
                let value = prefix[index];
                if upper < value {
                    return Err(BoundError::SymmetricUpperBelowIndex {
                        level,
                        index,
                        upper,
                        value,
                    });
                }
                Ok(value..upper)
            }
            Bound::SymmLower {
                index,
                lower,
                offset,
            } => {
                if index >= level || index >= prefix.len() {
                    return Err(BoundError::ForwardReference { level, index });
                }
                let value = prefix[index];
                if value > isize::MAX as usize {
                    return Err(BoundError::RangeOverflow { level });
                }
                let upper = match (value as isize).checked_add(offset) {
                    Some(upper) => upper,
                    None => return Err(BoundError::RangeOverflow { level }),
                };
                if upper < 0 || (upper as usize) < lower {
                    return Err(BoundError::SymmetricLowerAboveIndex {
                        level,
                        index,
                        lower,
                        offset,
                        value,
                    });
                }
                Ok(lower..upper as usize)
            }
        }
    }
}

/// Checks a whole nest before anything is iterated.
///
/// Plain ranges and level references are checked structurally. Symmetric
/// descriptors are then checked against every reachable prefix of enclosing
/// values, so a symmetric bound is tested with each value its referenced
/// level actually takes.
///
/// # Examples
///
/// ```
/// use loopforge_core::{validate, Bound, BoundError};
///
/// assert!(validate(&[Bound::range(0, 3), Bound::symm_upper(0, 3)]).is_ok());
/// assert!(matches!(
///     validate(&[Bound::range(0, 3), Bound::symm_upper(0, 1)]),
///     Err(BoundError::SymmetricUpperBelowIndex { level: 1, value: 2, .. })
/// ));
/// ```
pub const fn validate(bounds: &[Bound]) -> Result<(), BoundError> {
    if bounds.is_empty() {
        return Err(BoundError::NoLevels);
    }
    if bounds.len() > MAX_DEPTH {
        return Err(BoundError::TooDeep {
            depth: bounds.len(),
            max: MAX_DEPTH,
        });
    }

    let mut level = 0;
    while level < bounds.len() {
        match bounds[level] {
            Bound::Range { lower, upper } => {
                if upper < lower {
                    return Err(BoundError::InvertedRange {
                        level,
                        lower,
                        upper,
                    });
                }
            }
            Bound::SymmUpper { index, .. } | Bound::SymmLower { index, .. } => {
                if index >= level {
                    return Err(BoundError::ForwardReference { level, index });
                }
            }
        }
        level += 1;
    }

    walk_prefixes(bounds, 0, [0; MAX_DEPTH])
}

const fn walk_prefixes(
    bounds: &[Bound],
    level: usize,
    mut prefix: [usize; MAX_DEPTH],
) -> Result<(), BoundError> {
    let range = match bounds[level].resolve(level, &prefix) {
        Ok(range) => range,
        Err(err) => return Err(err),
    };
    if !has_symmetric_from(bounds, level + 1) {
        return Ok(());
    }

    let mut value = range.start;
    while value < range.end {
        prefix[level] = value;
        if let Err(err) = walk_prefixes(bounds, level + 1, prefix) {
            return Err(err);
        }
        value += 1;
    }
    Ok(())
}

const fn has_symmetric_from(bounds: &[Bound], level: usize) -> bool {
    let mut k = level;
    while k < bounds.len() {
        if bounds[k].is_symmetric() {
            return true;
        }
        k += 1;
    }
    false
}
