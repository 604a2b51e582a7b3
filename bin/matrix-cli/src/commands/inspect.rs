// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `matrix-cli inspect` command: display shape, invertibility and contents.

use std::path::Path;

use matrix_core::{Matrix, MatrixError};

use crate::config::CliConfig;
use crate::{input, output};

pub fn execute(file: &Path, config: &CliConfig) -> anyhow::Result<()> {
    let m = input::load_matrix(file)?;

    println!("  File:     {}", file.display());
    println!("  Shape:    {}", m.dims());
    println!("  Elements: {}", m.dims().num_elements());
    println!("  Square:   {}", if m.is_square() { "yes" } else { "no" });

    println!("  Invertible: {}", invertibility(&m));
    println!();

    output::print(&m, config)?;
    Ok(())
}

/// Summarises whether `m` can be inverted.
fn invertibility(m: &Matrix) -> String {
    match m.inverse() {
        Ok(_) => "yes".to_string(),
        Err(MatrixError::NotSquare { .. }) => "n/a (not square)".to_string(),
        Err(e) => format!("no ({e})"),
    }
}
