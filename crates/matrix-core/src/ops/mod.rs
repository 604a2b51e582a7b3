// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Matrix arithmetic operations.
//!
//! Every operation allocates a fresh output matrix; inputs are only read.

mod inverse_op;
mod multiply_op;

pub use inverse_op::inverse;
pub use multiply_op::{multiply, multiply_chain};
