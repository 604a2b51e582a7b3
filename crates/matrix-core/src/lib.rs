// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # matrix-core
//!
//! Small, dense, general-purpose `f64` matrices.
//!
//! This crate provides:
//! - [`Matrix`] — a 2-D matrix backed by one contiguous row-major buffer.
//! - [`Dims`] — row/column count descriptors.
//! - Operations: [`multiply`], left-associative [`multiply_chain`] and
//!   Gauss-Jordan [`inverse`].
//!
//! # Design Goals
//! - One allocation per matrix; every derived matrix owns its buffer.
//! - Row-major layout as a stable external contract.
//! - Clean error types via `thiserror`.
//!
//! ```
//! use matrix_core::{multiply, Matrix};
//! let m = Matrix::new(3, 3, vec![2.0, 0.0, 1.0, 1.0, 3.0, 0.0, 0.0, 1.0, 4.0]).unwrap();
//! let inv = m.inverse().unwrap();
//! let p = multiply(&m, &inv).unwrap();
//! assert!((p.at(1, 1) - 1.0).abs() < 1e-12);
//! ```

mod dims;
mod error;
mod matrix;
mod ops;

pub use dims::Dims;
pub use error::MatrixError;
pub use matrix::Matrix;
pub use ops::{inverse, multiply, multiply_chain};
