//! Conversion between nested `Vec` containers and nalgebra dense types.
//!
//! Every conversion is a plain element-wise copy: values are bit-identical on
//! both sides and row/column order is never changed.

use log::debug;
use nalgebra::{DMatrix, DVector};

use crate::domain::{Matrix, Shape, Vector};
use crate::error::{LinalgError, Result};

/// Check that `rows` is non-empty and rectangular, returning its shape.
pub fn validate_shape(rows: &[Vec<f64>]) -> Result<Shape> {
    let shape = Shape::of(rows);
    if shape.rows == 0 || shape.cols == 0 {
        return Err(LinalgError::Shape {
            shape,
            reason: "matrix is empty".to_string(),
        });
    }
    if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != shape.cols) {
        return Err(LinalgError::Shape {
            shape,
            reason: format!("row {i} has {} columns, expected {}", row.len(), shape.cols),
        });
    }
    Ok(shape)
}

/// Copy a rectangular nested matrix into a freshly zeroed `DMatrix`.
pub fn to_dense_matrix(rows: &[Vec<f64>]) -> Result<DMatrix<f64>> {
    let shape = validate_shape(rows)?;
    debug!("converting {shape} matrix to dense");

    let mut dense = DMatrix::zeros(shape.rows, shape.cols);
    for (i, row) in rows.iter().enumerate() {
        for (j, &v) in row.iter().enumerate() {
            dense[(i, j)] = v;
        }
    }
    Ok(dense)
}

/// Copy a vector into a freshly zeroed `DVector`.
pub fn to_dense_vector(values: &[f64]) -> DVector<f64> {
    let mut dense = DVector::zeros(values.len());
    for (i, &v) in values.iter().enumerate() {
        dense[i] = v;
    }
    dense
}

/// Copy a `DMatrix` back into nested rows.
pub fn from_dense_matrix(dense: &DMatrix<f64>) -> Matrix {
    (0..dense.nrows())
        .map(|i| (0..dense.ncols()).map(|j| dense[(i, j)]).collect())
        .collect()
}

/// Copy a `DVector` back into a `Vec`.
///
/// Two modes, selected by `hint`:
/// - pre-sized: if `hint` has exactly `dense.len()` elements it is overwritten in
///   place and returned (no reallocation).
/// - append: otherwise (no hint, empty, or wrong length) the elements are pushed
///   in index order onto a fresh sequence. A wrongly sized hint's contents are
///   dropped; only its allocation is reused.
///
/// The silent switch is deliberate: callers wanting deterministic allocation must
/// pre-size the destination.
pub fn from_dense_vector(dense: &DVector<f64>, hint: Option<Vector>) -> Vector {
    match hint {
        Some(mut out) if out.len() == dense.len() => {
            for (i, slot) in out.iter_mut().enumerate() {
                *slot = dense[i];
            }
            out
        }
        hint => {
            let mut out = hint.unwrap_or_default();
            out.clear();
            out.reserve(dense.len());
            for i in 0..dense.len() {
                out.push(dense[i]);
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;
    use rand::rngs::StdRng;

    fn bits(m: &[Vec<f64>]) -> Vec<Vec<u64>> {
        m.iter().map(|r| r.iter().map(|v| v.to_bits()).collect()).collect()
    }

    #[test]
    fn matrix_round_trip_is_bit_exact() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let rows = rng.gen_range(1..6);
            let cols = rng.gen_range(1..6);
            let m: Matrix = (0..rows)
                .map(|_| (0..cols).map(|_| rng.gen_range(-1e6..1e6)).collect())
                .collect();

            let dense = to_dense_matrix(&m).unwrap();
            assert_eq!(dense.nrows(), rows);
            assert_eq!(dense.ncols(), cols);
            assert_eq!(bits(&from_dense_matrix(&dense)), bits(&m));
        }
    }

    #[test]
    fn dense_matrix_keeps_row_major_positions() {
        let m = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
        let dense = to_dense_matrix(&m).unwrap();
        assert_eq!(dense[(0, 2)], 3.0);
        assert_eq!(dense[(1, 0)], 4.0);
    }

    #[test]
    fn special_values_survive_round_trip() {
        let m = vec![vec![-0.0, f64::MIN_POSITIVE], vec![f64::MAX, 1e-300]];
        let back = from_dense_matrix(&to_dense_matrix(&m).unwrap());
        assert_eq!(bits(&back), bits(&m));
    }

    #[test]
    fn ragged_matrix_is_rejected() {
        let err = to_dense_matrix(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        match err {
            LinalgError::Shape { shape, reason } => {
                assert_eq!(shape, Shape::new(2, 2));
                assert!(reason.contains("row 1"), "{reason}");
            }
            other => panic!("expected shape error, got {other:?}"),
        }
    }

    #[test]
    fn empty_matrix_is_rejected() {
        assert!(matches!(to_dense_matrix(&[]), Err(LinalgError::Shape { .. })));
        assert!(matches!(
            to_dense_matrix(&[Vec::new(), Vec::new()]),
            Err(LinalgError::Shape { .. })
        ));
    }

    #[test]
    fn vector_round_trip_with_presized_hint() {
        let v = vec![10.0, -11.5, 12.25];
        let hint = vec![0.0; 3];
        let hint_ptr = hint.as_ptr();

        let out = from_dense_vector(&to_dense_vector(&v), Some(hint));
        assert_eq!(out, v);
        // Overwritten in place, not reallocated.
        assert_eq!(out.as_ptr(), hint_ptr);
    }

    #[test]
    fn vector_append_path_with_empty_hint() {
        let v = vec![1.0, 2.0, 3.0, 4.0];
        let out = from_dense_vector(&to_dense_vector(&v), Some(Vec::new()));
        assert_eq!(out.len(), v.len());
        assert_eq!(out, v);
    }

    #[test]
    fn vector_append_path_without_hint() {
        let v = vec![0.5, 0.25];
        assert_eq!(from_dense_vector(&to_dense_vector(&v), None), v);
    }

    #[test]
    fn wrongly_sized_hint_switches_to_append_path() {
        let v = vec![1.0, 2.0];
        let out = from_dense_vector(&to_dense_vector(&v), Some(vec![9.0, 9.0, 9.0]));
        assert_eq!(out, v);
    }

    #[test]
    fn empty_vector_converts() {
        let dense = to_dense_vector(&[]);
        assert_eq!(dense.len(), 0);
        assert!(from_dense_vector(&dense, None).is_empty());
    }
}
