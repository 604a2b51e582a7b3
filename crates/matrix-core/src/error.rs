// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for matrix operations.

use crate::Dims;

/// Errors that can occur during matrix construction and arithmetic.
///
/// Every variant is raised before any caller-visible state is mutated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatrixError {
    /// A zero row or column count was requested.
    #[error("matrix dimensions must be > 0, got {rows}x{columns}")]
    InvalidDimensions { rows: usize, columns: usize },

    /// The supplied buffer length disagrees with the requested shape.
    #[error("data length mismatch: expected {expected} elements, got {actual}")]
    DataLengthMismatch { expected: usize, actual: usize },

    /// A reshape would change the total number of elements.
    #[error("cannot reshape {from} into {to}: element counts differ")]
    ElementCountMismatch { from: Dims, to: Dims },

    /// Two operands have incompatible inner dimensions.
    #[error("incompatible dimensions for {op}: {lhs} vs {rhs}")]
    DimensionMismatch {
        op: &'static str,
        lhs: Dims,
        rhs: Dims,
    },

    /// Inversion was requested on a non-square matrix.
    #[error("matrix is not invertible, it is not square ({dims})")]
    NotSquare { dims: Dims },

    /// Elimination hit an exactly-zero pivot (or a 2x2 determinant of zero).
    #[error("{dimension}x{dimension} matrix is singular")]
    SingularMatrix { dimension: usize },
}
