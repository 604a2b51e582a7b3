// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Property tests over randomly shaped matrices.

use matrix_core::{multiply, multiply_chain, Matrix, MatrixError};
use proptest::prelude::*;

fn matrix_from_vec(rows: usize, columns: usize, values: Vec<f64>) -> Matrix {
    let data = values.into_iter().cycle().take(rows * columns).collect();
    Matrix::new(rows, columns, data).expect("matrix shape mismatch")
}

fn max_abs_diff(a: &Matrix, b: &Matrix) -> f64 {
    a.as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}

prop_compose! {
    fn small_matrix()(rows in 1usize..6, columns in 1usize..6,
                      values in prop::collection::vec(-10f64..10f64, 1..=36))
                      -> Matrix {
        matrix_from_vec(rows, columns, values)
    }
}

prop_compose! {
    fn chain_of_three()(m in 1usize..5, k in 1usize..5, l in 1usize..5, n in 1usize..5,
                        a in prop::collection::vec(-5f64..5f64, 1..=16),
                        b in prop::collection::vec(-5f64..5f64, 1..=16),
                        c in prop::collection::vec(-5f64..5f64, 1..=16))
                        -> (Matrix, Matrix, Matrix) {
        (matrix_from_vec(m, k, a), matrix_from_vec(k, l, b), matrix_from_vec(l, n, c))
    }
}

prop_compose! {
    /// Strictly diagonally dominant, hence invertible and well conditioned.
    fn invertible_matrix(min_dim: usize)(n in min_dim..7)
                        (off in prop::collection::vec(-1f64..1f64, n * n),
                         diag in prop::collection::vec(1f64..5f64, n),
                         n in Just(n))
                        -> Matrix {
        let mut m = Matrix::new(n, n, off).expect("square");
        for (i, d) in diag.into_iter().enumerate() {
            m.set(i, i, n as f64 + d);
        }
        m
    }
}

proptest! {
    #[test]
    fn new_matches_at((rows, columns) in (1usize..8, 1usize..8),
                      seed in prop::collection::vec(-100f64..100f64, 1..=64)) {
        let data: Vec<f64> = seed.into_iter().cycle().take(rows * columns).collect();
        let m = Matrix::new(rows, columns, data.clone()).unwrap();
        for r in 0..rows {
            for c in 0..columns {
                prop_assert_eq!(m.at(r, c), data[r * columns + c]);
            }
        }
    }

    #[test]
    fn zero_dimension_rejected(n in 0usize..10) {
        let rows_zero = Matrix::new(0, n, vec![]);
        let is_invalid = matches!(rows_zero, Err(MatrixError::InvalidDimensions { .. }));
        prop_assert!(is_invalid);
        let columns_zero = Matrix::new(n, 0, vec![]);
        let is_invalid = matches!(columns_zero, Err(MatrixError::InvalidDimensions { .. }));
        prop_assert!(is_invalid);
    }

    #[test]
    fn transpose_is_an_involution(m in small_matrix()) {
        prop_assert_eq!(m.transposed().transposed(), m);
    }

    #[test]
    fn chained_multiply_is_left_fold((a, b, c) in chain_of_three()) {
        let stepwise = multiply(&multiply(&a, &b).unwrap(), &c).unwrap();
        let chained = multiply_chain(&a, &b, [&c]).unwrap();
        prop_assert_eq!(stepwise, chained);
    }

    #[test]
    fn mismatched_multiply_fails(a in small_matrix(), b in small_matrix()) {
        prop_assume!(a.columns() != b.rows());
        let is_mismatch = matches!(
            multiply(&a, &b),
            Err(MatrixError::DimensionMismatch { .. })
        );
        prop_assert!(is_mismatch);
    }

    #[test]
    fn identity_is_neutral(a in small_matrix()) {
        let eye = Matrix::identity(a.columns()).unwrap();
        prop_assert_eq!(multiply(&a, &eye).unwrap(), a);
    }

    #[test]
    fn inverse_of_inverse_roundtrips(m in invertible_matrix(1)) {
        let back = m.inverse().unwrap().inverse().unwrap();
        prop_assert!(max_abs_diff(&back, &m) < 1e-9);
    }

    #[test]
    fn product_with_inverse_is_identity(m in invertible_matrix(2)) {
        let p = multiply(&m, &m.inverse().unwrap()).unwrap();
        let eye = Matrix::identity(m.rows()).unwrap();
        prop_assert!(max_abs_diff(&p, &eye) < 1e-9);
    }

    #[test]
    fn reshape_preserves_linear_order(m in small_matrix()) {
        let mut flat = m.clone();
        let total = m.rows() * m.columns();
        flat.reshape(1, total).unwrap();
        prop_assert_eq!(flat.as_slice(), m.as_slice());
        flat.reshape(total, 1).unwrap();
        prop_assert_eq!(flat.as_slice(), m.as_slice());
        prop_assert!(flat.reshape(total + 1, 1).is_err());
        prop_assert_eq!(flat.rows(), total);
    }
}
