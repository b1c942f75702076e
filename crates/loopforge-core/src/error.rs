//! Error types for LoopForge

use thiserror::Error;

/// Rejection of a malformed loop nest.
///
/// Every variant names the level whose descriptor tripped the guard. The
/// same checks back the runtime constructors, the const constructor and the
/// `for_constexpr!` macro, so a configuration is rejected identically
/// wherever it is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoundError {
    /// A nest needs at least one level.
    #[error("a loop nest needs at least one level")]
    NoLevels,

    /// More levels than the expander supports.
    #[error("loop nest has {depth} levels, at most {max} are supported")]
    TooDeep { depth: usize, max: usize },

    /// Plain range whose upper bound is below its lower bound.
    #[error(
        "cannot iterate a range of negative size: level {level} has upper bound {upper} \
         smaller than lower bound {lower}"
    )]
    InvertedRange {
        level: usize,
        lower: usize,
        upper: usize,
    },

    /// Symmetric descriptor referencing its own or a later level.
    #[error(
        "level {level} symmetrizes over level {index}, which is not an enclosing loop"
    )]
    ForwardReference { level: usize, index: usize },

    /// `symm_upper` with a fixed upper bound below a value the referenced loop takes.
    #[error(
        "cannot iterate a range of negative size: level {level} has symm_upper bound {upper} \
         smaller than value {value} taken by level {index}"
    )]
    SymmetricUpperBelowIndex {
        level: usize,
        index: usize,
        upper: usize,
        value: usize,
    },

    /// `symm_lower` with a fixed lower bound above `value + offset` for some reachable value.
    #[error(
        "cannot iterate a range of negative size: level {level} has symm_lower bound {lower} \
         larger than {value} + {offset} from level {index}"
    )]
    SymmetricLowerAboveIndex {
        level: usize,
        index: usize,
        lower: usize,
        offset: isize,
        value: usize,
    },

    /// Derived upper bound does not fit in `usize`.
    #[error("level {level} derives an upper bound outside the usize range")]
    RangeOverflow { level: usize },
}

impl BoundError {
    /// Static description of the guard that fired.
    ///
    /// Usable from const evaluation, where the formatted `Display` output
    /// is unavailable.
    pub const fn message(&self) -> &'static str {
        match self {
            BoundError::NoLevels => "a loop nest needs at least one level",
            BoundError::TooDeep { .. } => "loop nest exceeds the maximum supported depth",
            BoundError::InvertedRange { .. } => {
                "cannot iterate a range of negative size: the upper bound in a range \
                 is smaller than the lower bound"
            }
            BoundError::ForwardReference { .. } => {
                "a symmetric bound must refer to an enclosing (earlier) loop level"
            }
            BoundError::SymmetricUpperBelowIndex { .. } => {
                "cannot iterate a range of negative size: the upper bound in symm_upper \
                 is less than a value taken by the loop being symmetrized over"
            }
            BoundError::SymmetricLowerAboveIndex { .. } => {
                "cannot iterate a range of negative size: the lower bound in symm_lower \
                 is larger than the upper bound derived from the loop being symmetrized over"
            }
            BoundError::RangeOverflow { .. } => {
                "a symmetric bound derives an upper bound outside the usize range"
            }
        }
    }

    /// Level whose descriptor was rejected, if the error concerns a single level.
    pub const fn level(&self) -> Option<usize> {
        match self {
            BoundError::NoLevels | BoundError::TooDeep { .. } => None,
            BoundError::InvertedRange { level, .. }
            | BoundError::ForwardReference { level, .. }
            | BoundError::SymmetricUpperBelowIndex { level, .. }
            | BoundError::SymmetricLowerAboveIndex { level, .. }
            | BoundError::RangeOverflow { level } => Some(*level),
        }
    }
}

/// Result type alias for LoopForge operations
pub type Result<T> = std::result::Result<T, BoundError>;
