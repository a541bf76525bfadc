//! The conversion/solve pipeline for one scenario.
//!
//! nested containers -> dense -> least-squares solve -> dense solution -> nested container
//!
//! Everything is computed up front and returned in [`RunOutput`]; printing happens
//! afterwards, so a failing stage never leaves a half-written report.

use log::debug;
use nalgebra::{DMatrix, DVector};

use crate::convert::{from_dense_vector, to_dense_matrix, to_dense_vector};
use crate::domain::{Scenario, Vector};
use crate::error::Result;
use crate::math::DenseSolver;
use crate::solve::solve_dense;

/// All values produced by one run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub scenario: Scenario,
    pub a_dense: DMatrix<f64>,
    pub b_dense: DVector<f64>,
    pub x_dense: DVector<f64>,
    pub x: Vector,
}

/// Run the pipeline on `scenario`.
pub fn run_scenario<S: DenseSolver + ?Sized>(solver: &S, scenario: Scenario) -> Result<RunOutput> {
    let a_dense = to_dense_matrix(&scenario.a)?;
    let b_dense = to_dense_vector(&scenario.b);

    let x_dense = solve_dense(solver, &a_dense, &b_dense)?;

    // Growable destination: exercises the append path.
    let x = from_dense_vector(&x_dense, None);
    debug!("solution: {x:?}");

    Ok(RunOutput {
        scenario,
        a_dense,
        b_dense,
        x_dense,
        x,
    })
}
