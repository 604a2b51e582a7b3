// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Matrix dimension descriptors.

use std::fmt;

/// The row and column counts of a [`crate::Matrix`].
///
/// `Dims` carries no validation of its own; [`crate::Matrix`] guarantees that
/// the dims of any live matrix have both counts at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Dims {
    pub rows: usize,
    pub columns: usize,
}

impl Dims {
    /// Creates a new dims descriptor.
    ///
    /// # Examples
    /// ```
    /// use matrix_core::Dims;
    /// let d = Dims::new(2, 3);
    /// assert_eq!(d.num_elements(), 6);
    /// assert!(!d.is_square());
    /// ```
    pub fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// Creates square dims (`dimension x dimension`).
    pub fn square(dimension: usize) -> Self {
        Self::new(dimension, dimension)
    }

    /// Returns the total number of elements.
    ///
    /// # Panics
    /// May overflow for dims that no live matrix can have; use
    /// [`checked_num_elements`](Dims::checked_num_elements) on untrusted input.
    pub fn num_elements(&self) -> usize {
        self.rows * self.columns
    }

    /// Returns the total number of elements, or `None` on overflow.
    pub fn checked_num_elements(&self) -> Option<usize> {
        self.rows.checked_mul(self.columns)
    }

    /// Returns `true` if both counts are non-zero.
    pub fn is_valid(&self) -> bool {
        self.rows >= 1 && self.columns >= 1
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    /// Returns `true` if `self` can be the left operand of a product with
    /// `other`, i.e. `self` is `M x K` and `other` is `K x N`.
    pub fn is_multiply_compatible(&self, other: &Dims) -> bool {
        self.columns == other.rows
    }

    /// Returns the dims of the product `self * other`.
    ///
    /// The result is only meaningful when
    /// [`is_multiply_compatible`](Dims::is_multiply_compatible) holds.
    pub fn product(&self, other: &Dims) -> Dims {
        Dims::new(self.rows, other.columns)
    }

    /// Returns the dims with rows and columns swapped.
    pub fn transposed(&self) -> Dims {
        Dims::new(self.columns, self.rows)
    }

    /// Computes the flat row-major offset of `(row, column)`.
    #[inline]
    pub fn offset(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

/// Convenience: `Dims::from((2, 3))`.
impl From<(usize, usize)> for Dims {
    fn from((rows, columns): (usize, usize)) -> Self {
        Self::new(rows, columns)
    }
}
