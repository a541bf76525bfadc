//! Solve orchestration: shape checks around the dense backend.
//!
//! The orchestrator always asks the backend for a least-squares answer
//! ([`SolveMode::Approximate`]); a singular or rectangular `A` still yields a usable
//! `x`. Its own job is the shape contract:
//!
//! - `A` is non-empty and rectangular (checked by the converter)
//! - `rows(A) == len(b)`
//! - `len(x) == cols(A)`

use log::{debug, info};
use nalgebra::{DMatrix, DVector};

use crate::convert::{from_dense_vector, to_dense_matrix, to_dense_vector};
use crate::domain::{Shape, Vector};
use crate::error::{LinalgError, Result};
use crate::math::{DenseSolver, SolveMode};

/// Solve `a x ≈ b` on dense inputs.
pub fn solve_dense<S: DenseSolver + ?Sized>(
    solver: &S,
    a: &DMatrix<f64>,
    b: &DVector<f64>,
) -> Result<DVector<f64>> {
    let shape = Shape::new(a.nrows(), a.ncols());
    if shape.rows != b.len() {
        return Err(LinalgError::DimensionMismatch {
            rows: shape.rows,
            rhs_len: b.len(),
        });
    }

    debug!("solving {shape} system in approximate mode");
    let x = solver.solve(a, b, SolveMode::Approximate)?;

    if x.len() != shape.cols {
        return Err(LinalgError::SolveFailure {
            shape,
            reason: format!("backend returned {} unknowns, expected {}", x.len(), shape.cols),
        });
    }

    info!(
        "solved {shape} system, residual norm {:.6e}",
        residual_norm(a, b, &x)
    );
    Ok(x)
}

/// Solve `a x ≈ b` on generic containers: convert, solve, convert back.
pub fn solve<S: DenseSolver + ?Sized>(solver: &S, a: &[Vec<f64>], b: &[f64]) -> Result<Vector> {
    let a_dense = to_dense_matrix(a)?;
    let b_dense = to_dense_vector(b);
    let x = solve_dense(solver, &a_dense, &b_dense)?;
    Ok(from_dense_vector(&x, Some(vec![0.0; a_dense.ncols()])))
}

/// `‖a x - b‖₂`.
pub fn residual_norm(a: &DMatrix<f64>, b: &DVector<f64>, x: &DVector<f64>) -> f64 {
    (a * x - b).norm()
}
