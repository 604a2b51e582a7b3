// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `matrix-cli reshape` command.

use std::path::Path;

use crate::config::CliConfig;
use crate::{input, output};

pub fn execute(file: &Path, rows: usize, columns: usize, config: &CliConfig) -> anyhow::Result<()> {
    let mut m = input::load_matrix(file)?;
    let from = m.dims();
    m.reshape(rows, columns)?;
    tracing::info!("reshaped {from} -> {}", m.dims());
    output::print(&m, config)?;
    Ok(())
}
