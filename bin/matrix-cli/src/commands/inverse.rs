// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `matrix-cli inverse` command, with an optional `m * m^-1 = I` check.

use std::path::Path;

use matrix_core::{multiply, Matrix};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::{input, output};

pub fn execute(file: &Path, verify_result: bool, config: &CliConfig) -> anyhow::Result<()> {
    let m = input::load_matrix(file)?;
    let inv = m.inverse()?;

    if verify_result {
        let deviation = verify(&m, &inv, config.tolerance)?;
        tracing::info!("inverse verified, max deviation {deviation:e}");
    }

    output::print(&inv, config)?;
    Ok(())
}

/// Returns the largest `|(m * inv) - I|` entry, failing above `tolerance`.
///
/// Skipped for 1x1 inputs: their "inverse" is the input itself.
fn verify(m: &Matrix, inv: &Matrix, tolerance: f64) -> Result<f64, CliError> {
    if m.rows() == 1 {
        tracing::warn!("1x1 inverse is the input itself; skipping verification");
        return Ok(0.0);
    }
    let product = multiply(m, inv)?;
    let eye = Matrix::identity(m.rows())?;
    let deviation = product
        .as_slice()
        .iter()
        .zip(eye.as_slice())
        .map(|(p, e)| (p - e).abs())
        .fold(0.0, f64::max);
    if deviation > tolerance {
        return Err(CliError::Verification {
            deviation,
            tolerance,
        });
    }
    Ok(deviation)
}
