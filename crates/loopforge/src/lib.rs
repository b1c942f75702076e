//! LoopForge - Bounded and symmetric nested loops
//!
//! A nest is a list of levels, outermost first. A level is either a plain
//! range or a symmetric bound that takes one end from an enclosing level's
//! current index, which is how triangular iteration spaces (`j < i`,
//! `j >= i`) are written.
//!
//! # Example
//!
//! ```rust
//! use loopforge::prelude::*;
//!
//! // Unrolled at compile time; `i` and `j` are constants inside the body.
//! let mut pairs = Vec::new();
//! for_constexpr!(range(0, 3), symm_upper(0, 3); |i, j| pairs.push((i, j)));
//! assert_eq!(pairs, [(0, 0), (0, 1), (0, 2), (1, 1), (1, 2), (2, 2)]);
//!
//! // The same nest at runtime.
//! let nest = Nest::new([Bound::range(0, 3), Bound::symm_upper(0, 3)]).unwrap();
//! assert_eq!(nest.count(), 6);
//! ```
//!
//! # Macro grammar
//!
//! ```text
//! for_constexpr!(level, level, ...; callback)
//!
//! level    := range(LOWER, UPPER)              LOWER <= i < UPPER
//!           | symm_upper(INDEX, UPPER)         i[INDEX] <= i < UPPER
//!           | symm_lower(INDEX, LOWER)         LOWER <= i < i[INDEX]
//!           | symm_lower(INDEX, LOWER, OFFSET) LOWER <= i < i[INDEX] + OFFSET
//! callback := |i, j, ..| body
//!           | f(args..)                        called as f(args.., Index<i>, Index<j>, ..)
//!           | f                                called as f(Index<i>, Index<j>, ..)
//! ```
//!
//! In the closure form each index is a `const` item and the body runs as a
//! closure once per tuple, so `return` inside it ends only that call:
//!
//! ```rust
//! use loopforge::for_constexpr;
//!
//! let mut even = Vec::new();
//! for_constexpr!(range(0, 6); |i| {
//!     if i % 2 == 1 {
//!         return;
//!     }
//!     even.push(i);
//! });
//! assert_eq!(even, [0, 2, 4]);
//! ```
//!
//! A malformed nest is a compile error and nothing is generated:
//!
//! ```compile_fail
//! use loopforge::for_constexpr;
//!
//! for_constexpr!(range(3, 1); |_| {});
//! ```
//!
//! ```compile_fail
//! use loopforge::for_constexpr;
//!
//! // i reaches 4, above the inner upper bound.
//! for_constexpr!(range(0, 5), symm_upper(0, 3); |_, _| {});
//! ```
//!
//! ```compile_fail
//! use loopforge::for_constexpr;
//!
//! // Two levels but one index.
//! for_constexpr!(range(0, 2), range(0, 2); |i| {});
//! ```
//!
//! ```compile_fail
//! use loopforge::for_constexpr;
//!
//! // A million tuples is too many to unroll.
//! for_constexpr!(range(0, 1000), range(0, 1000); |_, _| {});
//! ```

// Lets expansions inside this crate resolve `::loopforge` paths.
extern crate self as loopforge;

// Compile-time expansion
pub use loopforge_macros::for_constexpr;

// Descriptors, validation and runtime nests
pub use loopforge_core::{
    validate, Bound, BoundError, DynNest, Index, IndexTuple, Nest, Tuples, MAX_DEPTH,
};

// Dispatch helpers
pub use loopforge_core::{detect, overload, Has, HasNot, Presence};

// Tuple helpers
pub use loopforge_core::assert_type_eq;
pub use loopforge_core::tuple;

// Configuration
pub use loopforge_config::{ConfigError, LevelConfig, NestConfig};

pub mod logging;

pub mod prelude {
    pub use super::for_constexpr;
    pub use super::{detect, overload, Has, HasNot, Presence};
    pub use super::{Bound, BoundError, DynNest, Index, Nest};
    pub use super::tuple::{ElementMapper, ElementVisitor, TupleFold, TupleTransform};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use loopforge_test::cases::{all_cases, LevelShape, SIZE};
    use loopforge_test::HitGrid;

    fn to_bound(shape: LevelShape) -> Bound {
        match shape {
            LevelShape::Range { lower, upper } => Bound::range(lower, upper),
            LevelShape::SymmUpper { index, upper } => Bound::symm_upper(index, upper),
            LevelShape::SymmLower {
                index,
                lower,
                offset,
            } => Bound::symm_lower_offset(index, lower, offset),
        }
    }

    #[test]
    fn test_macro_agrees_with_runtime_nest() {
        let mut unrolled = Vec::new();
        for_constexpr!(range(0, 3), symm_lower(0, 0, 1), symm_upper(1, 3); |i, j, k| {
            unrolled.push(vec![i, j, k]);
        });

        let nest = DynNest::new(vec![
            Bound::range(0, 3),
            Bound::symm_lower_offset(0, 0, 1),
            Bound::symm_upper(1, 3),
        ])
        .unwrap();
        let runtime: Vec<Vec<usize>> = nest.iter().map(|t| t.to_vec()).collect();
        assert_eq!(unrolled, runtime);
    }

    #[test]
    fn test_case_matrix_through_facade() {
        for case in all_cases() {
            let nest = DynNest::new(case.levels.iter().copied().map(to_bound).collect())
                .unwrap_or_else(|e| panic!("{}: {}", case.name, e));
            let mut grid = HitGrid::new(SIZE, case.levels.len());
            nest.for_each(|t| grid.hit(t));
            grid.assert_matches(case.predicate);
            assert_eq!(grid.total(), case.expected_count(), "{}", case.name);
        }
    }
}
