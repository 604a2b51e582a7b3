// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `matrix-cli multiply` command: left-associative chained product.

use std::path::PathBuf;

use anyhow::Context;
use matrix_core::Matrix;

use crate::config::CliConfig;
use crate::{input, output};

pub fn execute(files: &[PathBuf], config: &CliConfig) -> anyhow::Result<()> {
    anyhow::ensure!(files.len() >= 2, "multiply needs at least two matrices");

    let operands = files
        .iter()
        .map(|f| input::load_matrix(f))
        .collect::<Result<Vec<Matrix>, _>>()?;
    tracing::info!("multiplying {} matrices", operands.len());

    let product = matrix_core::multiply_chain(&operands[0], &operands[1], &operands[2..])
        .context("chained multiplication failed")?;
    output::print(&product, config)?;
    Ok(())
}
