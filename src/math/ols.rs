//! Dense least squares backend.
//!
//! The rest of the crate only sees [`DenseSolver`]: one operation, `solve(a, b, mode)`.
//! The default implementation, [`SvdSolver`], uses nalgebra:
//!
//! - `Approximate` mode solves
//!
//!   ```text
//!   minimize ‖A x - b‖₂
//!   ```
//!
//!   through an SVD, zeroing singular values below a cut-off. This works for tall,
//!   wide, singular and rank-deficient `A` alike and yields the minimum-norm
//!   least-squares solution.
//! - `Exact` mode is a plain LU solve and requires `A` square and invertible.
//!   (Nalgebra's `LU::solve` panics on non-square input, so we check first.)
//!
//! The cut-off is relative to the largest singular value, so rescaling `A`
//! never changes which directions are dropped.

use log::{debug, warn};
use nalgebra::{DMatrix, DVector};

use crate::domain::{Shape, SolverConfig};
use crate::error::{LinalgError, Result};

/// How strictly the backend should treat the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveMode {
    /// Best-fit solution; never fails on singular or non-square `A`.
    Approximate,
    /// Requires `A` square and non-singular.
    Exact,
}

/// A dense linear solver.
pub trait DenseSolver {
    fn solve(&self, a: &DMatrix<f64>, b: &DVector<f64>, mode: SolveMode) -> Result<DVector<f64>>;
}

/// SVD/LU backed solver.
#[derive(Debug, Clone, Default)]
pub struct SvdSolver {
    config: SolverConfig,
}

impl SvdSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Absolute singular-value cut-off for an `m x n` matrix whose largest
    /// singular value is `sigma_max`.
    fn cutoff(&self, shape: Shape, sigma_max: f64) -> f64 {
        let floor = f64::EPSILON * shape.rows.max(shape.cols) as f64;
        self.config.rcond.max(floor) * sigma_max
    }

    fn solve_approximate(&self, a: &DMatrix<f64>, b: &DVector<f64>) -> Result<DVector<f64>> {
        let shape = Shape::new(a.nrows(), a.ncols());
        let svd = a
            .clone()
            .try_svd(true, true, self.config.svd_eps, self.config.max_svd_iterations)
            .ok_or_else(|| LinalgError::SolveFailure {
                shape,
                reason: format!(
                    "SVD did not converge within {} iterations",
                    self.config.max_svd_iterations
                ),
            })?;

        let sigma_max = svd.singular_values.max();
        let cutoff = self.cutoff(shape, sigma_max);
        let rank = svd.singular_values.iter().filter(|&&s| s > cutoff).count();
        if rank < shape.rows.min(shape.cols) {
            warn!("{shape} system is rank deficient (rank {rank}), returning minimum-norm solution");
        }
        debug!("least squares on {shape}: σ_max {sigma_max:e}, cut-off {cutoff:e}, rank {rank}");

        let x = svd.solve(b, cutoff).map_err(|e| LinalgError::SolveFailure {
            shape,
            reason: e.to_string(),
        })?;
        if !x.iter().all(|v| v.is_finite()) {
            return Err(LinalgError::SolveFailure {
                shape,
                reason: "least-squares solution is not finite".to_string(),
            });
        }
        Ok(x)
    }

    fn solve_exact(&self, a: &DMatrix<f64>, b: &DVector<f64>) -> Result<DVector<f64>> {
        let shape = Shape::new(a.nrows(), a.ncols());
        if !a.is_square() {
            return Err(LinalgError::SolveFailure {
                shape,
                reason: "exact solve requires a square matrix".to_string(),
            });
        }
        match a.clone().lu().solve(b) {
            Some(x) if x.iter().all(|v| v.is_finite()) => Ok(x),
            _ => Err(LinalgError::SolveFailure {
                shape,
                reason: "matrix is singular".to_string(),
            }),
        }
    }
}

impl DenseSolver for SvdSolver {
    fn solve(&self, a: &DMatrix<f64>, b: &DVector<f64>, mode: SolveMode) -> Result<DVector<f64>> {
        if a.nrows() != b.len() {
            return Err(LinalgError::DimensionMismatch {
                rows: a.nrows(),
                rhs_len: b.len(),
            });
        }
        if a.is_empty() {
            return Err(LinalgError::SolveFailure {
                shape: Shape::new(a.nrows(), a.ncols()),
                reason: "matrix is empty".to_string(),
            });
        }

        match mode {
            SolveMode::Approximate => self.solve_approximate(a, b),
            SolveMode::Exact => self.solve_exact(a, b),
        }
    }
}
