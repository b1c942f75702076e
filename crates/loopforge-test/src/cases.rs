//! The loop shapes exercised across the workspace, each paired with the
//! closed-form condition its visited tuples must satisfy.
//!
//! Every case iterates inside a cube of side [`SIZE`]; levels are described
//! with [`LevelShape`] so callers can map them to their own descriptor
//! type.

/// Side of the cube every case lives in.
pub const SIZE: usize = 3;

/// Descriptor of one level, independent of the core crate's types.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LevelShape {
    Range { lower: usize, upper: usize },
    SymmUpper { index: usize, upper: usize },
    SymmLower { index: usize, lower: usize, offset: isize },
}

use LevelShape::*;

const FULL: LevelShape = Range {
    lower: 0,
    upper: SIZE,
};

const fn upper(index: usize) -> LevelShape {
    SymmUpper { index, upper: SIZE }
}

const fn lower(index: usize, offset: isize) -> LevelShape {
    SymmLower {
        index,
        lower: 0,
        offset,
    }
}

/// A nest shape and the tuples it must visit.
#[derive(Clone, Debug)]
pub struct Case {
    pub name: &'static str,
    pub levels: Vec<LevelShape>,
    pub predicate: fn(&[usize]) -> bool,
}

impl Case {
    fn new(name: &'static str, levels: &[LevelShape], predicate: fn(&[usize]) -> bool) -> Self {
        Self {
            name,
            levels: levels.to_vec(),
            predicate,
        }
    }

    /// Number of tuples the case must visit.
    pub fn expected_count(&self) -> usize {
        crate::all_tuples(SIZE, self.levels.len())
            .iter()
            .filter(|t| (self.predicate)(t))
            .count()
    }
}

/// Two-level shapes.
pub fn double_cases() -> Vec<Case> {
    vec![
        Case::new("double_loop", &[FULL, FULL], |_| true),
        Case::new("double_symm_lower_exclusive", &[FULL, lower(0, 0)], |t| {
            t[1] < t[0]
        }),
        Case::new("double_symm_lower_inclusive", &[FULL, lower(0, 1)], |t| {
            t[1] <= t[0]
        }),
        Case::new("double_symm_upper", &[FULL, upper(0)], |t| t[1] >= t[0]),
    ]
}

/// Three-level shapes with at most one symmetric level.
pub fn triple_cases() -> Vec<Case> {
    vec![
        Case::new("no_symmetry", &[FULL, FULL, FULL], |_| true),
        Case::new("upper_last_on_first", &[FULL, FULL, upper(0)], |t| {
            t[2] >= t[0]
        }),
        Case::new("upper_last_on_second", &[FULL, FULL, upper(1)], |t| {
            t[2] >= t[1]
        }),
        Case::new("upper_second_on_first", &[FULL, upper(0), FULL], |t| {
            t[1] >= t[0]
        }),
        Case::new("lower_last_on_first_exclusive", &[FULL, FULL, lower(0, 0)], |t| {
            t[2] < t[0]
        }),
        Case::new("lower_last_on_first_inclusive", &[FULL, FULL, lower(0, 1)], |t| {
            t[2] <= t[0]
        }),
        Case::new("lower_last_on_second_exclusive", &[FULL, FULL, lower(1, 0)], |t| {
            t[2] < t[1]
        }),
        Case::new("lower_last_on_second_inclusive", &[FULL, FULL, lower(1, 1)], |t| {
            t[2] <= t[1]
        }),
        Case::new("lower_second_on_first_exclusive", &[FULL, lower(0, 0), FULL], |t| {
            t[1] < t[0]
        }),
        Case::new("lower_second_on_first_inclusive", &[FULL, lower(0, 1), FULL], |t| {
            t[1] <= t[0]
        }),
    ]
}

/// Three-level shapes where both inner levels are symmetric.
pub fn doubly_symmetric_cases() -> Vec<Case> {
    vec![
        Case::new("upper_upper_on_first", &[FULL, upper(0), upper(0)], |t| {
            t[1] >= t[0] && t[2] >= t[0]
        }),
        Case::new("upper_upper_chained", &[FULL, upper(0), upper(1)], |t| {
            t[1] >= t[0] && t[2] >= t[1]
        }),
        Case::new("lower_excl_lower_excl_on_first", &[FULL, lower(0, 0), lower(0, 0)], |t| {
            t[1] < t[0] && t[2] < t[0]
        }),
        Case::new("lower_excl_lower_incl_on_first", &[FULL, lower(0, 0), lower(0, 1)], |t| {
            t[1] < t[0] && t[2] <= t[0]
        }),
        Case::new("lower_incl_lower_excl_on_first", &[FULL, lower(0, 1), lower(0, 0)], |t| {
            t[1] <= t[0] && t[2] < t[0]
        }),
        Case::new("lower_incl_lower_incl_on_first", &[FULL, lower(0, 1), lower(0, 1)], |t| {
            t[1] <= t[0] && t[2] <= t[0]
        }),
        Case::new("lower_excl_lower_excl_chained", &[FULL, lower(0, 0), lower(1, 0)], |t| {
            t[1] < t[0] && t[2] < t[1]
        }),
        Case::new("lower_excl_lower_incl_chained", &[FULL, lower(0, 0), lower(1, 1)], |t| {
            t[1] < t[0] && t[2] <= t[1]
        }),
        Case::new("lower_incl_lower_excl_chained", &[FULL, lower(0, 1), lower(1, 0)], |t| {
            t[1] <= t[0] && t[2] < t[1]
        }),
        Case::new("lower_incl_lower_incl_chained", &[FULL, lower(0, 1), lower(1, 1)], |t| {
            t[1] <= t[0] && t[2] <= t[1]
        }),
        Case::new("lower_excl_upper_on_first", &[FULL, lower(0, 0), upper(0)], |t| {
            t[1] < t[0] && t[2] >= t[0]
        }),
        Case::new("lower_incl_upper_on_first", &[FULL, lower(0, 1), upper(0)], |t| {
            t[1] <= t[0] && t[2] >= t[0]
        }),
        Case::new("lower_excl_upper_chained", &[FULL, lower(0, 0), upper(1)], |t| {
            t[1] < t[0] && t[2] >= t[1]
        }),
        Case::new("lower_incl_upper_chained", &[FULL, lower(0, 1), upper(1)], |t| {
            t[1] <= t[0] && t[2] >= t[1]
        }),
        Case::new("upper_lower_excl_on_first", &[FULL, upper(0), lower(0, 0)], |t| {
            t[1] >= t[0] && t[2] < t[0]
        }),
        Case::new("upper_lower_incl_on_first", &[FULL, upper(0), lower(0, 1)], |t| {
            t[1] >= t[0] && t[2] <= t[0]
        }),
        Case::new("upper_lower_excl_chained", &[FULL, upper(0), lower(1, 0)], |t| {
            t[1] >= t[0] && t[2] < t[1]
        }),
        Case::new("upper_lower_incl_chained", &[FULL, upper(0), lower(1, 1)], |t| {
            t[1] >= t[0] && t[2] <= t[1]
        }),
    ]
}

/// Every case above.
pub fn all_cases() -> Vec<Case> {
    let mut cases = double_cases();
    cases.extend(triple_cases());
    cases.extend(doubly_symmetric_cases());
    cases
}
