//! Unrolled nested loops, plain and symmetric.
//!
//! Each nest is checked against the condition its tuples must satisfy, then
//! the same shape is rebuilt at runtime from `config/triangle.toml`.

use loopforge::prelude::*;
use loopforge::{logging, NestConfig};
use tracing::info;

const SIZE: usize = 3;

/// Asserts `visited` holds exactly the tuples of the `SIZE^D` cube that
/// satisfy `keep`, in ascending order.
fn check<const D: usize>(name: &str, visited: &[[usize; D]], keep: impl Fn(&[usize; D]) -> bool) {
    let cube = Nest::new([Bound::range(0, SIZE); D]).unwrap_or_else(|e| panic!("{}: {}", name, e));
    let expected: Vec<[usize; D]> = cube.iter().filter(|t| keep(t)).collect();
    assert_eq!(visited, expected.as_slice(), "{}", name);
    info!(shape = name, tuples = visited.len(), "nest ok");
}

fn single_loop() {
    let mut visited = Vec::new();
    for_constexpr!(range(0, 3); |i| visited.push([i]));
    check("single", &visited, |_| true);
}

fn double_loop() {
    let mut visited = Vec::new();
    for_constexpr!(range(0, 3), range(0, 3); |i, j| visited.push([i, j]));
    check("double", &visited, |_| true);

    visited.clear();
    for_constexpr!(range(0, 3), symm_lower(0, 0); |i, j| visited.push([i, j]));
    check("double j < i", &visited, |t| t[1] < t[0]);

    visited.clear();
    for_constexpr!(range(0, 3), symm_lower(0, 0, 1); |i, j| visited.push([i, j]));
    check("double j <= i", &visited, |t| t[1] <= t[0]);

    visited.clear();
    for_constexpr!(range(0, 3), symm_upper(0, 3); |i, j| visited.push([i, j]));
    check("double j >= i", &visited, |t| t[1] >= t[0]);
}

fn triple_loop() {
    let mut visited = Vec::new();
    for_constexpr!(range(0, 3), range(0, 3), range(0, 3); |i, j, k| visited.push([i, j, k]));
    check("triple", &visited, |_| true);

    visited.clear();
    for_constexpr!(range(0, 3), range(0, 3), symm_upper(0, 3); |i, j, k| visited.push([i, j, k]));
    check("triple k >= i", &visited, |t| t[2] >= t[0]);

    visited.clear();
    for_constexpr!(range(0, 3), range(0, 3), symm_upper(1, 3); |i, j, k| visited.push([i, j, k]));
    check("triple k >= j", &visited, |t| t[2] >= t[1]);

    visited.clear();
    for_constexpr!(range(0, 3), symm_upper(0, 3), range(0, 3); |i, j, k| visited.push([i, j, k]));
    check("triple j >= i", &visited, |t| t[1] >= t[0]);

    visited.clear();
    for_constexpr!(range(0, 3), symm_upper(0, 3), symm_upper(1, 3); |i, j, k| {
        visited.push([i, j, k]);
    });
    check("triple k >= j >= i", &visited, |t| t[1] >= t[0] && t[2] >= t[1]);
}

fn triple_loop_mixed() {
    let mut visited = Vec::new();
    for_constexpr!(range(0, 3), symm_lower(0, 0), symm_upper(0, 3); |i, j, k| {
        visited.push([i, j, k]);
    });
    check("mixed j < i, k >= i", &visited, |t| t[1] < t[0] && t[2] >= t[0]);

    visited.clear();
    for_constexpr!(range(0, 3), symm_upper(0, 3), symm_lower(1, 0, 1); |i, j, k| {
        visited.push([i, j, k]);
    });
    check("mixed j >= i, k <= j", &visited, |t| t[1] >= t[0] && t[2] <= t[1]);
}

fn triple_loop_lower_symmetric() {
    let mut visited = Vec::new();
    for_constexpr!(range(0, 3), range(0, 3), symm_lower(1, 0); |i, j, k| visited.push([i, j, k]));
    check("lower k < j", &visited, |t| t[2] < t[1]);

    visited.clear();
    for_constexpr!(range(0, 3), symm_lower(0, 0, 1), symm_lower(0, 0, 1); |i, j, k| {
        visited.push([i, j, k]);
    });
    check("lower j <= i, k <= i", &visited, |t| t[1] <= t[0] && t[2] <= t[0]);

    visited.clear();
    for_constexpr!(range(0, 3), symm_lower(0, 0), symm_lower(1, 0); |i, j, k| {
        visited.push([i, j, k]);
    });
    check("lower k < j < i", &visited, |t| t[1] < t[0] && t[2] < t[1]);
}

fn configured_nest() -> Result<(), loopforge::ConfigError> {
    let config = NestConfig::from_toml_str(include_str!("../../config/triangle.toml"))?;
    let nest = config.build()?;

    let mut unrolled = Vec::new();
    for_constexpr!(range(0, 3), symm_lower(0, 0, 1), symm_upper(1, 3); |i, j, k| {
        unrolled.push(vec![i, j, k]);
    });
    let configured: Vec<Vec<usize>> = nest.iter().map(|t| t.to_vec()).collect();
    assert_eq!(unrolled, configured);
    info!(depth = nest.depth(), tuples = configured.len(), "config matches unrolled nest");
    Ok(())
}

fn main() -> Result<(), loopforge::ConfigError> {
    logging::init();

    single_loop();
    double_loop();
    triple_loop();
    triple_loop_mixed();
    triple_loop_lower_symmetric();
    configured_nest()
}
