//! Shared domain types.
//!
//! The generic containers are plain nested `Vec`s so they map one-to-one onto
//! the language-neutral "list of rows" / "list of numbers" representation (and
//! onto JSON arrays via serde).

use serde::{Deserialize, Serialize};

/// Matrix as an ordered sequence of rows. Row index = equation, column index = variable.
pub type Matrix = Vec<Vec<f64>>;

/// Vector as an ordered sequence of values.
pub type Vector = Vec<f64>;

/// Row/column count of a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Shape of a nested matrix as seen from its first row.
    ///
    /// Ragged inputs report the first row's length as `cols`.
    pub fn of(rows: &[Vec<f64>]) -> Self {
        Self::new(rows.len(), rows.first().map_or(0, Vec::len))
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// One linear system `a x ≈ b` in generic form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub a: Matrix,
    pub b: Vector,
}

impl Scenario {
    /// The compiled-in demo system. `a` is singular (rank 2).
    pub fn example() -> Self {
        Self {
            a: vec![
                vec![1.0, 2.0, 3.0],
                vec![4.0, 5.0, 6.0],
                vec![7.0, 8.0, 9.0],
            ],
            b: vec![10.0, 11.0, 12.0],
        }
    }
}

/// Tuning for the dense least-squares backend.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Relative singular-value cut-off: values at or below
    /// `rcond * σ_max` are treated as zero. Never tighter than `ε * max(m, n)`.
    pub rcond: f64,
    /// Convergence threshold passed to the SVD iteration.
    pub svd_eps: f64,
    /// Upper bound on SVD iterations; `0` means unbounded.
    pub max_svd_iterations: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            rcond: 1e-10,
            svd_eps: f64::EPSILON,
            max_svd_iterations: 10_000,
        }
    }
}
