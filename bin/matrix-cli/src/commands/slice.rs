// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `matrix-cli row` and `matrix-cli column` commands.

use std::path::Path;

use matrix_core::Matrix;

use crate::config::CliConfig;
use crate::{input, output};

/// Which axis to extract.
#[derive(Debug, Clone, Copy)]
pub enum Axis {
    Row,
    Column,
}

pub fn execute(file: &Path, axis: Axis, index: usize, config: &CliConfig) -> anyhow::Result<()> {
    let m = input::load_matrix(file)?;
    let extracted = extract(&m, axis, index)?;
    output::print(&extracted, config)?;
    Ok(())
}

/// Bounds-checked wrapper around [`Matrix::row`] and [`Matrix::column`].
fn extract(m: &Matrix, axis: Axis, index: usize) -> anyhow::Result<Matrix> {
    let (limit, name) = match axis {
        Axis::Row => (m.rows(), "row"),
        Axis::Column => (m.columns(), "column"),
    };
    anyhow::ensure!(
        index < limit,
        "{name} {index} out of range for a {} matrix",
        m.dims()
    );
    Ok(match axis {
        Axis::Row => m.row(index),
        Axis::Column => m.column(index),
    })
}
