// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Matrix inversion via Gauss-Jordan elimination.

use crate::{Matrix, MatrixError};

/// Computes the inverse of a square matrix.
///
/// - `1x1`: returns a copy of the input unchanged, without a zero check.
/// - `2x2`: closed form `(1 / det) * [d, -b; -c, a]` with `det = a*d - b*c`.
/// - `NxN` for `N >= 3`: Gauss-Jordan elimination with row pivoting on the
///   augmented pair `[A | I]`.
///
/// # Numerical behavior
/// Pivot and determinant checks compare against exactly `0.0`. There is no
/// epsilon: a near-singular matrix whose pivots are tiny but non-zero is
/// accepted and may produce a numerically poor inverse.
///
/// # Errors
/// Returns [`MatrixError::NotSquare`] if `rows != columns`.
/// Returns [`MatrixError::SingularMatrix`] if the 2x2 determinant is zero or
/// a pivot is zero after row swapping.
///
/// # Examples
/// ```
/// use matrix_core::Matrix;
/// let m = Matrix::new(2, 2, vec![4.0, 7.0, 2.0, 6.0]).unwrap();
/// let inv = m.inverse().unwrap();
/// assert!((inv.at(0, 0) - 0.6).abs() < 1e-12);
/// ```
pub fn inverse(m: &Matrix) -> Result<Matrix, MatrixError> {
    if !m.is_square() {
        return Err(MatrixError::NotSquare { dims: m.dims() });
    }

    let n = m.rows();
    tracing::debug!(dimension = n, "inverting matrix");

    match n {
        1 => Ok(m.copy()),
        2 => inverse_2x2(m.as_slice()),
        _ => {
            let mut aug = Augmented::new(m)?;
            aug.eliminate()?;
            Ok(aug.right)
        }
    }
}

fn inverse_2x2(d: &[f64]) -> Result<Matrix, MatrixError> {
    let det = d[0] * d[3] - d[1] * d[2];
    if det == 0.0 {
        tracing::debug!("2x2 determinant is zero");
        return Err(MatrixError::SingularMatrix { dimension: 2 });
    }
    let scale = 1.0 / det;
    Matrix::new(
        2,
        2,
        vec![scale * d[3], -scale * d[1], -scale * d[2], scale * d[0]],
    )
}

/// The `[left | right]` working pair. Every row operation is applied to both
/// halves in lockstep.
struct Augmented {
    n: usize,
    left: Matrix,
    right: Matrix,
}

impl Augmented {
    fn new(m: &Matrix) -> Result<Self, MatrixError> {
        Ok(Self {
            n: m.rows(),
            left: m.copy(),
            right: Matrix::identity(m.rows())?,
        })
    }

    fn eliminate(&mut self) -> Result<(), MatrixError> {
        let n = self.n;

        // Forward pass: unit pivots, zeros below.
        for i in 0..n {
            let target = self.first_non_zero(i);
            self.swap_rows(i, target);

            let pivot = self.left.at(i, i);
            if pivot == 0.0 {
                tracing::debug!(column = i, "zero pivot, matrix is singular");
                return Err(MatrixError::SingularMatrix { dimension: n });
            }
            self.scale_row(i, 1.0 / pivot);

            for y in i + 1..n {
                let factor = -self.left.at(y, i);
                self.add_scaled_row(y, factor, i);
            }
        }

        // Back substitution: zeros above.
        for i in (0..n).rev() {
            for y in 0..i {
                let factor = -self.left.at(y, i);
                self.add_scaled_row(y, factor, i);
            }
        }

        Ok(())
    }

    /// First row at or below `x` with a non-zero entry in column `x`, or `x`
    /// itself when there is none.
    fn first_non_zero(&self, x: usize) -> usize {
        (x..self.n)
            .find(|&y| self.left.at(y, x) != 0.0)
            .unwrap_or(x)
    }

    fn swap_rows(&mut self, y1: usize, y2: usize) {
        if y1 == y2 {
            return;
        }
        tracing::trace!(y1, y2, "swapping rows");
        let n = self.n;
        for half in [&mut self.left, &mut self.right] {
            let data = half.as_mut_slice();
            for x in 0..n {
                data.swap(y1 * n + x, y2 * n + x);
            }
        }
    }

    fn scale_row(&mut self, row: usize, factor: f64) {
        let range = row * self.n..(row + 1) * self.n;
        for half in [&mut self.left, &mut self.right] {
            half.as_mut_slice()[range.clone()]
                .iter_mut()
                .for_each(|v| *v *= factor);
        }
    }

    /// `row[dest] += scale * row[src]` on both halves.
    fn add_scaled_row(&mut self, dest: usize, scale: f64, src: usize) {
        let n = self.n;
        for half in [&mut self.left, &mut self.right] {
            let data = half.as_mut_slice();
            for x in 0..n {
                data[dest * n + x] += scale * data[src * n + x];
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{multiply, Dims};

    fn assert_close(actual: &Matrix, expected: &[f64], tol: f64) {
        assert_eq!(actual.as_slice().len(), expected.len());
        for (a, e) in actual.as_slice().iter().zip(expected) {
            assert!((a - e).abs() < tol, "{a} != {e}\n{actual}");
        }
    }

    #[test]
    fn test_not_square() {
        let m = Matrix::new(2, 3, vec![1.0; 6]).unwrap();
        assert_eq!(
            inverse(&m),
            Err(MatrixError::NotSquare {
                dims: Dims::new(2, 3)
            })
        );
    }

    #[test]
    fn test_1x1_returns_copy() {
        let m = Matrix::new(1, 1, vec![4.0]).unwrap();
        assert_eq!(inverse(&m).unwrap().as_slice(), &[4.0]);

        // No zero check for the scalar case.
        let z = Matrix::new(1, 1, vec![0.0]).unwrap();
        assert_eq!(inverse(&z).unwrap().as_slice(), &[0.0]);
    }

    #[test]
    fn test_2x2_closed_form() {
        let m = Matrix::new(2, 2, vec![4.0, 7.0, 2.0, 6.0]).unwrap();
        let inv = inverse(&m).unwrap();
        assert_close(&inv, &[0.6, -0.7, -0.2, 0.4], 1e-12);
    }

    #[test]
    fn test_2x2_singular() {
        let m = Matrix::new(2, 2, vec![1.0, 2.0, 2.0, 4.0]).unwrap();
        assert_eq!(
            inverse(&m),
            Err(MatrixError::SingularMatrix { dimension: 2 })
        );
    }

    #[test]
    fn test_3x3() {
        let m = Matrix::new(3, 3, vec![2.0, 0.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 8.0]).unwrap();
        let inv = inverse(&m).unwrap();
        assert_eq!(
            inv.as_slice(),
            &[0.5, 0.0, 0.0, 0.0, 0.25, 0.0, 0.0, 0.0, 0.125]
        );
    }

    #[test]
    fn test_3x3_general() {
        let m = Matrix::new(3, 3, vec![1.0, 2.0, 3.0, 0.0, 1.0, 4.0, 5.0, 6.0, 0.0]).unwrap();
        let inv = inverse(&m).unwrap();
        assert_close(
            &inv,
            &[-24.0, 18.0, 5.0, 20.0, -15.0, -4.0, -5.0, 4.0, 1.0],
            1e-9,
        );
    }

    #[test]
    fn test_requires_row_swap() {
        // Zero in the first pivot position forces a swap with row 1.
        let m = Matrix::new(3, 3, vec![0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0]).unwrap();
        let inv = inverse(&m).unwrap();
        assert_eq!(inv, m);
    }

    #[test]
    fn test_singular_3x3() {
        // Third row is the sum of the first two.
        let m = Matrix::new(3, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 5.0, 7.0, 9.0]).unwrap();
        assert!(matches!(
            inverse(&m),
            Err(MatrixError::SingularMatrix { dimension: 3 })
        ));
    }

    #[test]
    fn test_pivot_is_first_non_zero_row() {
        // Row 0 holds a tiny non-zero pivot and row 1 a much larger candidate.
        // Taking row 0 without a swap rounds 1 - 2^60 to -2^60 and loses the
        // true (0, 0) entry of about -1 entirely; swapping for the larger
        // pivot would give [-1, 1, 0; 1, -2^-60, 0; 0, 0, 1] instead.
        let e = 1.0 / (1u64 << 60) as f64;
        let m = Matrix::new(3, 3, vec![e, 1.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 1.0]).unwrap();
        let inv = inverse(&m).unwrap();
        assert_eq!(
            inv.as_slice(),
            &[0.0, 1.0, 0.0, 1.0, -e, 0.0, 0.0, 0.0, 1.0]
        );
    }

    #[test]
    fn test_tiny_pivot_is_accepted() {
        // Pivots are compared with exactly 0.0, so 1e-300 is a valid pivot.
        let m = Matrix::new(3, 3, vec![1e-300, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 1.0]).unwrap();
        let inv = inverse(&m).unwrap();
        let s: f64 = 1.0 / 1e-300;
        assert!(s.is_finite());
        assert_eq!(
            inv.as_slice(),
            &[s, 0.0, 0.0, -s, 1.0, 0.0, 0.0, 0.0, 1.0]
        );
    }

    #[test]
    fn test_zero_column_is_singular() {
        let m = Matrix::new(3, 3, vec![0.0, 1.0, 2.0, 0.0, 3.0, 4.0, 0.0, 5.0, 7.0]).unwrap();
        assert!(matches!(
            inverse(&m),
            Err(MatrixError::SingularMatrix { .. })
        ));
    }

    #[test]
    fn test_input_untouched() {
        let m = Matrix::new(3, 3, vec![0.0, 2.0, 1.0, 1.0, 1.0, 0.0, 3.0, 0.0, 1.0]).unwrap();
        let before = m.clone();
        let _ = inverse(&m).unwrap();
        assert_eq!(m, before);
    }

    #[test]
    fn test_product_is_identity_4x4() {
        let m = Matrix::new(
            4,
            4,
            vec![
                4.0, 1.0, 0.0, 2.0, //
                1.0, 5.0, 1.0, 0.0, //
                0.0, 1.0, 6.0, 1.0, //
                2.0, 0.0, 1.0, 7.0,
            ],
        )
        .unwrap();
        let inv = inverse(&m).unwrap();
        let p = multiply(&m, &inv).unwrap();
        assert_close(&p, Matrix::identity(4).unwrap().as_slice(), 1e-12);
    }
}
