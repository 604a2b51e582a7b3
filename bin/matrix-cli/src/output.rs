// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Result rendering in the configured [`OutputFormat`].

use matrix_core::Matrix;

use crate::config::{CliConfig, OutputFormat};
use crate::error::CliError;

/// Renders `matrix` as a string in the configured format.
pub fn render(matrix: &Matrix, config: &CliConfig) -> Result<String, CliError> {
    let format = config.output_format()?;
    let output_error = |detail: String| CliError::Output {
        format: format.as_str(),
        detail,
    };
    match format {
        OutputFormat::Table => Ok(format!("{matrix:.prec$}", prec = config.precision)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(matrix).map_err(|e| output_error(e.to_string()))
        }
        OutputFormat::Toml => toml::to_string(matrix).map_err(|e| output_error(e.to_string())),
    }
}

/// Prints `matrix` to stdout.
pub fn print(matrix: &Matrix, config: &CliConfig) -> Result<(), CliError> {
    println!("{}", render(matrix, config)?);
    Ok(())
}
