//! Error types.
//!
//! - [`LinalgError`] is what the conversion and solve layers return.
//! - [`AppError`] is the binary's top-level error: a message plus a process exit code.

use thiserror::Error;

use crate::domain::Shape;

/// Exit code for input-contract failures detected while converting containers.
pub const EXIT_CONVERSION: u8 = 2;

/// Exit code for failures raised by (or around) the dense solve.
pub const EXIT_SOLVE: u8 = 3;

/// Pipeline stage an error originated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Conversion,
    Solve,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Conversion => write!(f, "conversion"),
            Stage::Solve => write!(f, "solve"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinalgError {
    /// Input matrix is empty or its rows differ in length.
    #[error("conversion failed: invalid matrix shape {shape}: {reason}")]
    Shape { shape: Shape, reason: String },

    /// Row count of the coefficient matrix does not match the right-hand side.
    #[error("solve failed: coefficient matrix has {rows} rows but right-hand side has length {rhs_len}")]
    DimensionMismatch { rows: usize, rhs_len: usize },

    /// The dense backend could not produce a usable solution.
    #[error("solve failed for {shape} system: {reason}")]
    SolveFailure { shape: Shape, reason: String },
}

impl LinalgError {
    pub fn stage(&self) -> Stage {
        match self {
            LinalgError::Shape { .. } => Stage::Conversion,
            LinalgError::DimensionMismatch { .. } | LinalgError::SolveFailure { .. } => Stage::Solve,
        }
    }
}

pub type Result<T> = std::result::Result<T, LinalgError>;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<LinalgError> for AppError {
    fn from(err: LinalgError) -> Self {
        let exit_code = match err.stage() {
            Stage::Conversion => EXIT_CONVERSION,
            Stage::Solve => EXIT_SOLVE,
        };
        AppError::new(exit_code, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
