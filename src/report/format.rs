//! Plain-text rendering of matrices and vectors.
//!
//! Layout, per block:
//!
//! ```text
//! <title>
//! Rows: <m>
//! Columns: <n>        (matrices only)
//! v00 v01 ... v0n     (each value followed by a space)
//! ...
//! ```
//!
//! Vectors print one value per line and carry either a `Rows:` or a `Columns:`
//! header depending on the call site. Generic and dense containers with equal
//! contents render identically.

use nalgebra::{DMatrix, DVector};

use crate::app::pipeline::RunOutput;

/// Stage separator: 50 dashes.
pub const SEPARATOR: &str = "--------------------------------------------------";

/// Significant digits used for values (matches a C-style `%g`).
const SIG_DIGITS: usize = 6;

/// Which header a vector block carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorLabel {
    Rows,
    Columns,
}

impl VectorLabel {
    fn as_str(self) -> &'static str {
        match self {
            VectorLabel::Rows => "Rows",
            VectorLabel::Columns => "Columns",
        }
    }
}

/// Render a nested matrix. The column header is taken from the first row; each
/// row prints its own values.
pub fn format_matrix(title: &str, rows: &[Vec<f64>]) -> String {
    let n_cols = rows.first().map_or(0, Vec::len);
    render_matrix(title, rows.len(), n_cols, rows.iter().map(|r| r.iter().copied()))
}

pub fn format_dense_matrix(title: &str, m: &DMatrix<f64>) -> String {
    let rows = (0..m.nrows()).map(move |i| (0..m.ncols()).map(move |j| m[(i, j)]));
    render_matrix(title, m.nrows(), m.ncols(), rows)
}

pub fn format_vector(title: &str, values: &[f64], label: VectorLabel) -> String {
    render_vector(title, values.len(), label, |i| values[i])
}

pub fn format_dense_vector(title: &str, v: &DVector<f64>, label: VectorLabel) -> String {
    render_vector(title, v.len(), label, |i| v[i])
}

/// Format the full run: inputs, their dense copies, the dense solution and the
/// solution converted back.
pub fn format_run_report(run: &RunOutput) -> String {
    let mut out = String::new();

    out.push_str(&format_matrix("Initial coefficient matrix", &run.scenario.a));
    out.push_str(&format_vector(
        "Initial right-hand side vector",
        &run.scenario.b,
        VectorLabel::Rows,
    ));

    out.push_str(SEPARATOR);
    out.push('\n');

    out.push_str(&format_dense_matrix("Dense coefficient matrix:", &run.a_dense));
    out.push_str(&format_dense_vector(
        "Dense right-hand side vector:",
        &run.b_dense,
        VectorLabel::Rows,
    ));
    out.push_str(&format_dense_vector(
        "Dense solution vector:",
        &run.x_dense,
        VectorLabel::Rows,
    ));

    out.push_str(SEPARATOR);
    out.push('\n');

    out.push_str(&format_vector("Solution vector", &run.x, VectorLabel::Columns));

    out
}

fn render_matrix<R, I>(title: &str, n_rows: usize, n_cols: usize, rows: R) -> String
where
    R: Iterator<Item = I>,
    I: Iterator<Item = f64>,
{
    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    out.push_str(&format!("Rows: {n_rows}\n"));
    out.push_str(&format!("Columns: {n_cols}\n"));
    for row in rows {
        for v in row {
            out.push_str(&fmt_value(v));
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

fn render_vector(title: &str, len: usize, label: VectorLabel, at: impl Fn(usize) -> f64) -> String {
    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    out.push_str(&format!("{}: {len}\n", label.as_str()));
    for i in 0..len {
        out.push_str(&fmt_value(at(i)));
        out.push('\n');
    }
    out
}

/// Format a value with 6 significant digits, `%g` style: fixed notation for
/// exponents in `[-4, 6)`, scientific otherwise, trailing zeros removed.
pub fn fmt_value(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if v == 0.0 {
        return if v.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Rounding to SIG_DIGITS first fixes the decimal exponent (999999.5 -> 1e+06).
    let sci = format!("{:.*e}", SIG_DIGITS - 1, v);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);

    if exp < -4 || exp >= SIG_DIGITS as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_zeros(mantissa), exp.abs())
    } else {
        let decimals = (SIG_DIGITS as i32 - 1 - exp) as usize;
        trim_zeros(&format!("{v:.decimals$}")).to_string()
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_value_matches_g_style() {
        assert_eq!(fmt_value(1.0), "1");
        assert_eq!(fmt_value(10.0), "10");
        assert_eq!(fmt_value(0.5), "0.5");
        assert_eq!(fmt_value(-0.2777777777777), "-0.277778");
        assert_eq!(fmt_value(123456.0), "123456");
        assert_eq!(fmt_value(1234567.0), "1.23457e+06");
        assert_eq!(fmt_value(999999.5), "1e+06");
        assert_eq!(fmt_value(0.0001), "0.0001");
        assert_eq!(fmt_value(1e-7), "1e-07");
        assert_eq!(fmt_value(-2.5e-12), "-2.5e-12");
        assert_eq!(fmt_value(0.0), "0");
        assert_eq!(fmt_value(f64::NAN), "nan");
        assert_eq!(fmt_value(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn matrix_block_layout() {
        let m = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
        assert_eq!(
            format_matrix("A", &m),
            "A\nRows: 2\nColumns: 3\n1 2 3 \n4 5 6 \n"
        );
    }

    #[test]
    fn vector_block_layout_and_label() {
        let v = vec![10.0, 11.0];
        assert_eq!(format_vector("b", &v, VectorLabel::Rows), "b\nRows: 2\n10\n11\n");
        assert_eq!(format_vector("x", &v, VectorLabel::Columns), "x\nColumns: 2\n10\n11\n");
    }

    #[test]
    fn dense_and_generic_render_identically() {
        let m = vec![vec![1.5, -2.0], vec![0.25, 8.0]];
        let dense = DMatrix::from_row_slice(2, 2, &[1.5, -2.0, 0.25, 8.0]);
        assert_eq!(format_matrix("t", &m), format_dense_matrix("t", &dense));

        let v = vec![3.0, 4.5];
        let dv = DVector::from_row_slice(&v);
        assert_eq!(
            format_vector("t", &v, VectorLabel::Rows),
            format_dense_vector("t", &dv, VectorLabel::Rows)
        );
    }

    #[test]
    fn separator_is_fifty_dashes() {
        assert_eq!(SEPARATOR.len(), 50);
        assert!(SEPARATOR.chars().all(|c| c == '-'));
    }
}
