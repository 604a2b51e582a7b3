// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Core matrix type.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::{Dims, MatrixError};

/// A dense, owned 2-D matrix of `f64` values.
///
/// # Memory Layout
/// Data is stored in row-major order in a single contiguous buffer: the
/// element at `(row, column)` lives at offset `row * columns + column`.
/// This layout is part of the public contract; [`as_slice`](Matrix::as_slice)
/// exposes it directly.
///
/// Every transform that returns a new `Matrix` allocates an independent
/// buffer. Only [`set`](Matrix::set), [`reshape`](Matrix::reshape) and the
/// mutable accessors change a matrix in place.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawMatrix")]
pub struct Matrix {
    rows: usize,
    columns: usize,
    data: Vec<f64>,
}

/// Unvalidated wire form; deserialization goes through [`Matrix::new`].
#[derive(serde::Deserialize)]
struct RawMatrix {
    rows: usize,
    columns: usize,
    data: Vec<f64>,
}

impl TryFrom<RawMatrix> for Matrix {
    type Error = MatrixError;

    fn try_from(raw: RawMatrix) -> Result<Self, Self::Error> {
        Matrix::new(raw.rows, raw.columns, raw.data)
    }
}

impl Matrix {
    /// Creates a matrix from a row-major buffer, taking ownership of it.
    ///
    /// # Errors
    /// Returns [`MatrixError::InvalidDimensions`] if either count is zero,
    /// and [`MatrixError::DataLengthMismatch`] if `data.len() != rows * columns`.
    ///
    /// # Examples
    /// ```
    /// use matrix_core::Matrix;
    /// let m = Matrix::new(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// assert_eq!(m.at(1, 2), 6.0);
    /// ```
    pub fn new(rows: usize, columns: usize, data: Vec<f64>) -> Result<Self, MatrixError> {
        if rows < 1 || columns < 1 {
            return Err(MatrixError::InvalidDimensions { rows, columns });
        }
        // An overflowing product can never match a real buffer length.
        if rows.checked_mul(columns) != Some(data.len()) {
            return Err(MatrixError::DataLengthMismatch {
                expected: rows.saturating_mul(columns),
                actual: data.len(),
            });
        }
        Ok(Self {
            rows,
            columns,
            data,
        })
    }

    /// Creates a square matrix with `1.0` on the main diagonal and `0.0`
    /// everywhere else.
    ///
    /// # Errors
    /// Returns [`MatrixError::InvalidDimensions`] if `dimension` is zero.
    pub fn identity(dimension: usize) -> Result<Self, MatrixError> {
        if dimension == 0 {
            return Err(MatrixError::InvalidDimensions {
                rows: dimension,
                columns: dimension,
            });
        }
        let mut data = vec![0.0; dimension * dimension];
        for i in 0..dimension {
            data[i * (dimension + 1)] = 1.0;
        }
        Ok(Self {
            rows: dimension,
            columns: dimension,
            data,
        })
    }

    /// Allocates a zero-filled matrix. Callers guarantee `dims` is valid.
    pub(crate) fn zeros(dims: Dims) -> Self {
        Self {
            rows: dims.rows,
            columns: dims.columns,
            data: vec![0.0; dims.num_elements()],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the matrix's dimensions.
    pub fn dims(&self) -> Dims {
        Dims::new(self.rows, self.columns)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    /// Returns the row-major buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Returns the row-major buffer mutably. The length cannot change.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Consumes the matrix and returns its row-major buffer.
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    #[inline]
    fn offset(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }

    /// Returns the element at `(row, column)`.
    ///
    /// No bounds checking against the logical shape is performed: callers
    /// must keep `row < rows()` and `column < columns()`.
    ///
    /// # Panics
    /// Panics if the computed offset falls outside the buffer.
    #[inline]
    pub fn at(&self, row: usize, column: usize) -> f64 {
        self.data[self.offset(row, column)]
    }

    /// Writes `value` at `(row, column)`. Same contract as [`at`](Matrix::at).
    #[inline]
    pub fn set(&mut self, row: usize, column: usize, value: f64) {
        let offset = self.offset(row, column);
        self.data[offset] = value;
    }

    /// Returns a deep copy with an independent buffer.
    ///
    /// Equivalent to [`Clone::clone`].
    pub fn copy(&self) -> Matrix {
        self.clone()
    }

    /// Returns logical row `y` as a `1 x columns` matrix.
    ///
    /// # Panics
    /// Panics if `y >= rows()`. For `y` near `usize::MAX / columns()` the
    /// offset arithmetic itself overflows, which panics in debug builds.
    pub fn row(&self, y: usize) -> Matrix {
        let start = self.offset(y, 0);
        Matrix {
            rows: 1,
            columns: self.columns,
            data: self.data[start..start + self.columns].to_vec(),
        }
    }

    /// Returns logical column `x` as a `rows x 1` matrix.
    ///
    /// # Panics
    /// Panics if `x + (rows() - 1) * columns()` falls outside the buffer,
    /// including by arithmetic overflow in debug builds.
    pub fn column(&self, x: usize) -> Matrix {
        let data = (0..self.rows)
            .map(|i| self.data[x + i * self.columns])
            .collect();
        Matrix {
            rows: self.rows,
            columns: 1,
            data,
        }
    }

    /// Reinterprets the buffer under a new shape without touching the data.
    ///
    /// # Errors
    /// Returns [`MatrixError::ElementCountMismatch`] if
    /// `rows * columns` differs from the current element count. The shape is
    /// left unchanged in that case.
    ///
    /// # Examples
    /// ```
    /// use matrix_core::Matrix;
    /// let mut m = Matrix::new(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// m.reshape(3, 2).unwrap();
    /// assert_eq!(m.at(1, 0), 3.0);
    /// assert!(m.reshape(7, 1).is_err());
    /// ```
    pub fn reshape(&mut self, rows: usize, columns: usize) -> Result<(), MatrixError> {
        let to = Dims::new(rows, columns);
        if to.checked_num_elements() != Some(self.data.len()) {
            return Err(MatrixError::ElementCountMismatch {
                from: self.dims(),
                to,
            });
        }
        self.rows = rows;
        self.columns = columns;
        Ok(())
    }

    /// Returns a new `columns x rows` matrix with element `(y, x)` equal to
    /// element `(x, y)` of `self`.
    pub fn transposed(&self) -> Matrix {
        let mut t = Matrix::zeros(self.dims().transposed());
        for y in 0..t.rows {
            for x in 0..t.columns {
                t.set(y, x, self.at(x, y));
            }
        }
        t
    }

    /// Computes the inverse. See [`crate::inverse`].
    pub fn inverse(&self) -> Result<Matrix, MatrixError> {
        crate::ops::inverse(self)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        &self.data[self.offset(row, column)]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut Self::Output {
        let offset = self.offset(row, column);
        &mut self.data[offset]
    }
}

/// Prints one bracketed row per line. Honors a precision such as `{:.3}`.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.data.chunks(self.columns).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (x, value) in row.iter().enumerate() {
                if x > 0 {
                    write!(f, ", ")?;
                }
                match f.precision() {
                    Some(p) => write!(f, "{value:.p$}")?,
                    None => write!(f, "{value}")?,
                }
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
