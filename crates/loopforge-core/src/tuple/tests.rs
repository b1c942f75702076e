//! Tests for tuple folds, transforms and type lists.

use super::*;
use crate::assert_type_eq;

struct Sum;

impl<T: Copy + Into<f64>> ElementVisitor<T, f64> for Sum {
    fn visit<const I: usize>(&mut self, element: &T, _: Index<I>, state: &mut f64) {
        *state += (*element).into();
    }
}

struct SumExceptSecond;

impl<T: Copy + Into<f64>> ElementVisitor<T, f64> for SumExceptSecond {
    fn visit<const I: usize>(&mut self, element: &T, index: Index<I>, state: &mut f64) {
        if index.value() != 1 {
            *state += (*element).into();
        }
    }
}

#[derive(Default)]
struct Positions(Vec<usize>);

impl<T> ElementVisitor<T, ()> for Positions {
    fn visit<const I: usize>(&mut self, _: &T, _: Index<I>, _: &mut ()) {
        self.0.push(I);
    }
}

struct Negate;

impl ElementMapper<i32> for Negate {
    type Output = i32;

    fn map<const I: usize>(&mut self, element: &i32, _: Index<I>) -> i32 {
        -element
    }
}

impl ElementMapper<f64> for Negate {
    type Output = f64;

    fn map<const I: usize>(&mut self, element: &f64, _: Index<I>) -> f64 {
        -element
    }
}

struct Describe;

impl<T: std::fmt::Debug> ElementMapper<T> for Describe {
    type Output = String;

    fn map<const I: usize>(&mut self, element: &T, index: Index<I>) -> String {
        format!("{}={:?}", index, element)
    }
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_fold_sum() {
    let tuple = (2i32, 7i32, -3.8f64, 20.9f64);
    let mut sum = 0.0;
    tuple.fold(&mut Sum, &mut sum);
    assert!(close(sum, 26.1), "sum was {}", sum);
}

#[test]
fn test_fold_branches_on_index() {
    let tuple = (2i32, 7i32, -3.8f64, 20.9f64);
    let mut sum = 0.0;
    tuple.fold(&mut SumExceptSecond, &mut sum);
    assert!(close(sum, 19.1), "sum was {}", sum);
}

#[test]
fn test_visit_order_ascending() {
    let mut positions = Positions::default();
    for_each_element(&('a', 1u8, "x", 2.0f32, ()), &mut positions);
    assert_eq!(positions.0, vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_transform_negates_positionally() {
    let out = (2i32, 7i32, -3.8f64, 20.9f64).transform(&mut Negate);
    assert_eq!(out.0, -2);
    assert_eq!(out.1, -7);
    assert!(close(out.2, 3.8));
    assert!(close(out.3, -20.9));
}

#[test]
fn test_transform_changes_element_types() {
    let out: (String, String) = (1u8, "two").transform(&mut Describe);
    assert_eq!(out, ("0=1".to_string(), "1=\"two\"".to_string()));
}

#[test]
fn test_len() {
    assert_eq!(<(u8,) as TupleFold<Sum, f64>>::LEN, 1);
    assert_eq!(<(u8, u16, u32) as TupleFold<Sum, f64>>::LEN, 3);
}

// ============================================================================
// Type lists
// ============================================================================

type Fundamentals = (f64, char, bool, f64);

const _: () = assert!(size::<Fundamentals>() == 4);
const _: () = assert!(size::<()>() == 0);

assert_type_eq!(Front<Fundamentals>, f64);
assert_type_eq!(Front<()>, NoSuchType);
assert_type_eq!(PopFront<Fundamentals>, (char, bool, f64));
assert_type_eq!(PopFront<()>, NoSuchType);
assert_type_eq!(PushFront<Fundamentals, char>, (char, f64, char, bool, f64));
assert_type_eq!(PushBack<Fundamentals, char>, (f64, char, bool, f64, char));
assert_type_eq!(PushBack<(), u8>, (u8,));

#[test]
fn test_same_type() {
    assert!(same_type::<Front<Fundamentals>, f64>());
    assert!(!same_type::<PopFront<Fundamentals>, Fundamentals>());
    assert!(same_type::<PopFront<(u8,)>, ()>());
}
