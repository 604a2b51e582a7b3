// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Matrix multiplication, binary and chained.

use crate::{Matrix, MatrixError};

/// Computes the matrix product `lhs * rhs`.
///
/// `lhs` is `M x K`, `rhs` is `K x N` and the result is `M x N`. Each output
/// element is accumulated from `0.0` over the shared dimension in
/// increasing order, so results are bit-reproducible for a given input.
///
/// # Errors
/// Returns [`MatrixError::DimensionMismatch`] if `lhs.columns() != rhs.rows()`.
///
/// # Examples
/// ```
/// use matrix_core::{multiply, Matrix};
/// let a = Matrix::new(1, 2, vec![1.0, 2.0]).unwrap();
/// let b = Matrix::new(2, 1, vec![3.0, 4.0]).unwrap();
/// assert_eq!(multiply(&a, &b).unwrap().as_slice(), &[11.0]);
/// ```
pub fn multiply(lhs: &Matrix, rhs: &Matrix) -> Result<Matrix, MatrixError> {
    let (lhs_dims, rhs_dims) = (lhs.dims(), rhs.dims());
    if !lhs_dims.is_multiply_compatible(&rhs_dims) {
        return Err(MatrixError::DimensionMismatch {
            op: "multiply",
            lhs: lhs_dims,
            rhs: rhs_dims,
        });
    }

    let mut product = Matrix::zeros(lhs_dims.product(&rhs_dims));
    multiply_f64_generic(
        lhs.as_slice(),
        rhs.as_slice(),
        product.as_mut_slice(),
        lhs_dims.rows,
        lhs_dims.columns,
        rhs_dims.columns,
    );
    Ok(product)
}

/// Multiplies `first * second * rest[0] * ...`, strictly left-associative.
///
/// Stops at the first incompatible pair, scanning left to right.
///
/// # Errors
/// Returns [`MatrixError::DimensionMismatch`] for the first operand whose row
/// count differs from the running product's column count.
///
/// # Examples
/// ```
/// use matrix_core::{multiply_chain, Matrix};
/// let a = Matrix::new(1, 2, vec![1.0, 2.0]).unwrap();
/// let b = Matrix::identity(2).unwrap();
/// let c = Matrix::new(2, 1, vec![3.0, 4.0]).unwrap();
/// let p = multiply_chain(&a, &b, [&c]).unwrap();
/// assert_eq!(p.as_slice(), &[11.0]);
/// ```
pub fn multiply_chain<'a, I>(first: &Matrix, second: &Matrix, rest: I) -> Result<Matrix, MatrixError>
where
    I: IntoIterator<Item = &'a Matrix>,
{
    let head = multiply(first, second)?;
    rest.into_iter()
        .try_fold(head, |acc, next| multiply(&acc, next))
}

/// Portable row-major f64 multiply with a dot-product inner loop.
///
/// The ijk order fixes the accumulation sequence of each output element.
fn multiply_f64_generic(a: &[f64], b: &[f64], c: &mut [f64], m: usize, k: usize, n: usize) {
    for i in 0..m {
        let a_row = &a[i * k..(i + 1) * k];
        for j in 0..n {
            let mut sum = 0.0;
            for (p, &a_ip) in a_row.iter().enumerate() {
                sum += a_ip * b[p * n + j];
            }
            c[i * n + j] = sum;
        }
    }
}
