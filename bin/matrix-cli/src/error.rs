// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the command-line front end.

use std::path::PathBuf;

use matrix_core::MatrixError;

/// Errors raised while loading inputs, rendering outputs or checking results.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The configuration file is unreadable or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// A matrix file could not be read or parsed.
    #[error("cannot load matrix from '{}': {detail}", .path.display())]
    Input { path: PathBuf, detail: String },

    /// A result could not be serialised in the requested format.
    #[error("cannot render output as {format}: {detail}")]
    Output { format: &'static str, detail: String },

    /// `inverse --verify` found `m * m^-1` too far from the identity.
    #[error("inverse check failed: max deviation {deviation:e} exceeds tolerance {tolerance:e}")]
    Verification { deviation: f64, tolerance: f64 },

    /// A matrix operation failed.
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}
