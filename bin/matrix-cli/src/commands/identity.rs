// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `matrix-cli identity` command.

use matrix_core::Matrix;

use crate::config::CliConfig;
use crate::output;

pub fn execute(dimension: usize, config: &CliConfig) -> anyhow::Result<()> {
    let eye = Matrix::identity(dimension)?;
    output::print(&eye, config)?;
    Ok(())
}
