//! Tests for runtime nest expansion.

use std::time::{Duration, Instant};

use loopforge_test::cases::{self, SIZE};
use loopforge_test::{HitGrid, LevelShape};

use super::*;
use crate::error::BoundError;

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

fn dyn_nest(levels: &[LevelShape]) -> DynNest {
    DynNest::new(levels.iter().copied().map(to_bound).collect()).unwrap()
}

// ============================================================================
// Single level
// ============================================================================

#[test]
fn test_single_loop_visits_each_index_once() {
    let nest = Nest::new([Bound::range(0, SIZE)]).unwrap();
    let mut values = [0usize; SIZE];
    nest.for_each(|[i]| values[i] += 1);
    assert_eq!(values, [1, 1, 1]);
}

#[test]
fn test_single_loop_offset_range() {
    let nest = Nest::new([Bound::range(2, 5)]).unwrap();
    let seen: Vec<_> = nest.iter().map(|[i]| i).collect();
    assert_eq!(seen, vec![2, 3, 4]);
    assert_eq!(nest.count(), 3);
}

#[test]
fn test_single_loop_empty_range() {
    let nest = Nest::new([Bound::range(4, 4)]).unwrap();
    assert_eq!(nest.count(), 0);
    assert_eq!(nest.iter().next(), None);
}

// ============================================================================
// Double and triple loops
// ============================================================================

#[test]
fn test_double_loop_full_product() {
    let nest = Nest::new([Bound::range(0, 3), Bound::range(0, 3)]).unwrap();
    let mut grid = HitGrid::new(3, 2);
    nest.for_each(|t| grid.hit(&t));
    grid.assert_matches(|_| true);
    assert_eq!(grid.total(), 9);
}

#[test]
fn test_symm_lower_counts() {
    let exclusive = Nest::new([Bound::range(0, 3), Bound::symm_lower(0, 0)]).unwrap();
    let inclusive = Nest::new([Bound::range(0, 3), Bound::symm_lower_offset(0, 0, 1)]).unwrap();
    assert_eq!(exclusive.count(), 3);
    assert_eq!(inclusive.count(), 6);
}

#[test]
fn test_symm_upper_count() {
    let nest = Nest::new([Bound::range(0, 3), Bound::symm_upper(0, 3)]).unwrap();
    let tuples: Vec<_> = nest.iter().collect();
    assert_eq!(
        tuples,
        [[0, 0], [0, 1], [0, 2], [1, 1], [1, 2], [2, 2]]
    );
}

#[test]
fn test_case_matrix() {
    for case in cases::all_cases() {
        let nest = dyn_nest(&case.levels);
        let mut grid = HitGrid::new(SIZE, case.levels.len());
        nest.for_each(|t| grid.hit(t));
        grid.assert_matches(case.predicate);
        assert_eq!(nest.count(), case.expected_count(), "case {}", case.name);
    }
}

#[test]
fn test_iter_matches_for_each() {
    for case in cases::all_cases() {
        let nest = dyn_nest(&case.levels);
        let mut walked = Vec::new();
        nest.for_each(|t| walked.push(t.to_vec()));
        let iterated: Vec<Vec<usize>> = nest.iter().map(|t| t.to_vec()).collect();
        assert_eq!(walked, iterated, "case {}", case.name);
    }
}

#[test]
fn test_tuples_are_lexicographically_ascending() {
    for case in cases::all_cases() {
        let tuples: Vec<Vec<usize>> = dyn_nest(&case.levels).iter().map(|t| t.to_vec()).collect();
        assert!(
            tuples.windows(2).all(|w| w[0] < w[1]),
            "case {} out of order: {:?}",
            case.name,
            tuples
        );
    }
}

#[test]
fn test_fixed_and_dynamic_agree() {
    let nest = Nest::new([
        Bound::range(0, 4),
        Bound::symm_upper(0, 4),
        Bound::symm_lower_offset(1, 1, 1),
    ])
    .unwrap();
    let fixed: Vec<Vec<usize>> = nest.iter().map(|t| t.to_vec()).collect();
    let dynamic: Vec<Vec<usize>> = DynNest::from(nest).iter().map(|t| t.to_vec()).collect();
    assert_eq!(fixed, dynamic);
}

#[test]
fn test_negative_offset() {
    // j < i - 1
    let nest = Nest::new([Bound::range(1, 4), Bound::symm_lower_offset(0, 0, -1)]).unwrap();
    let tuples: Vec<_> = nest.iter().collect();
    assert_eq!(tuples, [[2, 0], [3, 0], [3, 1]]);
}

#[test]
fn test_empty_middle_level_skips_inner() {
    let nest = Nest::new([Bound::range(0, 3), Bound::range(1, 1), Bound::range(0, 3)]).unwrap();
    assert_eq!(nest.count(), 0);
    assert_eq!(nest.iter().count(), 0);
}

#[test]
fn test_iterator_is_fused() {
    let nest = Nest::new([Bound::range(0, 1)]).unwrap();
    let mut iter = nest.iter();
    assert_eq!(iter.next(), Some([0]));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
}

#[test]
fn test_count_up_to_stops_at_limit() {
    let nest = Nest::new([Bound::range(0, 3), Bound::symm_upper(0, 3)]).unwrap();
    assert_eq!(nest.count_up_to(4), 4);
    assert_eq!(nest.count_up_to(100), 6);

    let huge = DynNest::new(vec![Bound::range(0, usize::MAX), Bound::range(0, usize::MAX)]).unwrap();
    assert_eq!(huge.count_up_to(1000), 1000);
}

#[test]
fn test_debug_logging_on_huge_nest_is_bounded() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .finish();
    let start = Instant::now();
    let nest = tracing::subscriber::with_default(subscriber, || {
        DynNest::new(vec![Bound::range(0, usize::MAX), Bound::range(0, usize::MAX)])
    })
    .unwrap();
    assert!(start.elapsed() < Duration::from_secs(5));
    assert_eq!(nest.depth(), 2);
}

// ============================================================================
// Rejection
// ============================================================================

#[test]
fn test_inverted_range_rejected() {
    let err = Nest::new([Bound::range(0, 3), Bound::range(3, 1)]).unwrap_err();
    assert_eq!(
        err,
        BoundError::InvertedRange {
            level: 1,
            lower: 3,
            upper: 1
        }
    );
}

#[test]
fn test_inverted_range_rejected_below_empty_level() {
    let err = Nest::new([Bound::range(0, 0), Bound::range(3, 1)]).unwrap_err();
    assert_eq!(err.level(), Some(1));
}

#[test]
fn test_symm_upper_below_index_rejected() {
    let err = Nest::new([Bound::range(0, 3), Bound::symm_upper(0, 1)]).unwrap_err();
    assert_eq!(
        err,
        BoundError::SymmetricUpperBelowIndex {
            level: 1,
            index: 0,
            upper: 1,
            value: 2
        }
    );
}

#[test]
fn test_symm_lower_above_index_rejected() {
    let err = Nest::new([Bound::range(0, 3), Bound::symm_lower(0, 1)]).unwrap_err();
    assert_eq!(
        err,
        BoundError::SymmetricLowerAboveIndex {
            level: 1,
            index: 0,
            lower: 1,
            offset: 0,
            value: 0
        }
    );

    let err = Nest::new([Bound::range(0, 3), Bound::symm_lower_offset(0, 0, -1)]).unwrap_err();
    assert!(matches!(
        err,
        BoundError::SymmetricLowerAboveIndex { value: 0, offset: -1, .. }
    ));
}

#[test]
fn test_forward_reference_rejected() {
    assert_eq!(
        Nest::new([Bound::symm_upper(0, 3)]).unwrap_err(),
        BoundError::ForwardReference { level: 0, index: 0 }
    );
    assert_eq!(
        Nest::new([Bound::range(0, 3), Bound::symm_lower(2, 0), Bound::range(0, 3)]).unwrap_err(),
        BoundError::ForwardReference { level: 1, index: 2 }
    );
}

#[test]
fn test_depth_limits() {
    assert_eq!(DynNest::new(Vec::new()).unwrap_err(), BoundError::NoLevels);
    let err = DynNest::new(vec![Bound::range(0, 1); crate::MAX_DEPTH + 1]).unwrap_err();
    assert_eq!(
        err,
        BoundError::TooDeep {
            depth: crate::MAX_DEPTH + 1,
            max: crate::MAX_DEPTH
        }
    );
}

#[test]
fn test_guards_only_fire_for_reachable_prefixes() {
    // With i = 0 the middle level is empty, so i = 0 never reaches the
    // innermost level, whose lower bound 1 would exceed i + 0.
    let nest = Nest::new([
        Bound::range(0, 3),
        Bound::symm_lower(0, 0),
        Bound::symm_lower(0, 1),
    ])
    .unwrap();
    let tuples: Vec<_> = nest.iter().collect();
    assert_eq!(tuples, [[2, 0, 1], [2, 1, 1]]);
}

#[test]
fn test_checked_in_const_context() {
    const TRIANGLE: Nest<2> = Nest::checked([Bound::range(0, 3), Bound::symm_upper(0, 3)]);
    assert_eq!(TRIANGLE.count(), 6);
    assert_eq!(TRIANGLE.depth(), 2);
}

#[test]
#[should_panic(expected = "symm_upper")]
fn test_checked_panics_at_runtime() {
    let bounds = [Bound::range(0, 3), Bound::symm_upper(0, 1)];
    let _ = Nest::checked(bounds);
}
