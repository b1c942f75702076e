//! Hit counting over `size^dims` index tuples.
//!
//! # Example
//!
//! ```
//! use loopforge_test::HitGrid;
//!
//! let mut grid = HitGrid::new(3, 2);
//! for i in 0..3 {
//!     for j in i..3 {
//!         grid.hit(&[i, j]);
//!     }
//! }
//! grid.assert_matches(|t| t[1] >= t[0]);
//! assert_eq!(grid.total(), 6);
//! ```

/// Counts how often each index tuple of a cubic space was visited.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HitGrid {
    size: usize,
    dims: usize,
    hits: Vec<usize>,
}

impl HitGrid {
    /// Creates a zeroed grid of `size^dims` cells.
    pub fn new(size: usize, dims: usize) -> Self {
        Self {
            size,
            dims,
            hits: vec![0; size.pow(dims as u32)],
        }
    }

    fn offset(&self, tuple: &[usize]) -> usize {
        assert_eq!(
            tuple.len(),
            self.dims,
            "tuple {:?} does not have {} indices",
            tuple,
            self.dims
        );
        tuple.iter().fold(0, |acc, &i| {
            assert!(i < self.size, "index {} outside grid of size {}", i, self.size);
            acc * self.size + i
        })
    }

    /// Records one visit of `tuple`.
    pub fn hit(&mut self, tuple: &[usize]) {
        let offset = self.offset(tuple);
        self.hits[offset] += 1;
    }

    /// Visit count of `tuple`.
    pub fn get(&self, tuple: &[usize]) -> usize {
        self.hits[self.offset(tuple)]
    }

    /// Total number of visits.
    pub fn total(&self) -> usize {
        self.hits.iter().sum()
    }

    /// Asserts every tuple satisfying `predicate` was visited exactly once
    /// and every other tuple never.
    pub fn assert_matches<P>(&self, predicate: P)
    where
        P: Fn(&[usize]) -> bool,
    {
        for tuple in all_tuples(self.size, self.dims) {
            let expected = usize::from(predicate(&tuple));
            assert_eq!(
                self.get(&tuple),
                expected,
                "tuple {:?} visited {} times, expected {}",
                tuple,
                self.get(&tuple),
                expected
            );
        }
    }
}

/// Every tuple of `size^dims`, lexicographically ascending.
pub fn all_tuples(size: usize, dims: usize) -> Vec<Vec<usize>> {
    let mut tuples = vec![Vec::with_capacity(dims)];
    for _ in 0..dims {
        tuples = tuples
            .into_iter()
            .flat_map(|prefix| {
                (0..size).map(move |i| {
                    let mut tuple = prefix.clone();
                    tuple.push(i);
                    tuple
                })
            })
            .collect();
    }
    tuples
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tuples_order() {
        let tuples = all_tuples(2, 2);
        assert_eq!(tuples, vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]);
    }

    #[test]
    fn test_hit_and_total() {
        let mut grid = HitGrid::new(3, 3);
        grid.hit(&[2, 1, 0]);
        grid.hit(&[2, 1, 0]);
        assert_eq!(grid.get(&[2, 1, 0]), 2);
        assert_eq!(grid.get(&[0, 1, 2]), 0);
        assert_eq!(grid.total(), 2);
    }

    #[test]
    #[should_panic(expected = "outside grid")]
    fn test_hit_out_of_range() {
        let mut grid = HitGrid::new(3, 1);
        grid.hit(&[3]);
    }
}
