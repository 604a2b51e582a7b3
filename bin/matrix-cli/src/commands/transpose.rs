// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `matrix-cli transpose` command.

use std::path::Path;

use crate::config::CliConfig;
use crate::{input, output};

pub fn execute(file: &Path, config: &CliConfig) -> anyhow::Result<()> {
    let m = input::load_matrix(file)?;
    output::print(&m.transposed(), config)?;
    Ok(())
}
