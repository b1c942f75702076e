//! Folds and positional transforms over heterogeneous tuples.

use loopforge::logging;
use loopforge::prelude::*;
use tracing::info;

/// Adds every element to the running sum.
struct Sum;

impl<T: Copy + Into<f64>> ElementVisitor<T, f64> for Sum {
    fn visit<const I: usize>(&mut self, element: &T, _: Index<I>, state: &mut f64) {
        *state += (*element).into();
    }
}

/// Adds every element except the one at position 1.
struct SumSkippingSecond;

impl<T: Copy + Into<f64>> ElementVisitor<T, f64> for SumSkippingSecond {
    fn visit<const I: usize>(&mut self, element: &T, _: Index<I>, state: &mut f64) {
        if I != 1 {
            *state += (*element).into();
        }
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

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn main() {
    logging::init();

    let tuple = (2i32, 7i32, -3.8f64, 20.9f64);

    let mut sum = 0.0;
    tuple.fold(&mut Sum, &mut sum);
    assert!(close(sum, 26.1));
    info!(expected = 26.1, computed = sum, "fold");

    let mut sum = 0.0;
    tuple.fold(&mut SumSkippingSecond, &mut sum);
    assert!(close(sum, 19.1));
    info!(expected = 19.1, computed = sum, "counted fold");

    let negated = tuple.transform(&mut Negate);
    assert_eq!((negated.0, negated.1), (-2, -7));
    assert!(close(negated.2, 3.8) && close(negated.3, -20.9));
    info!(computed = ?negated, "transform");
}
