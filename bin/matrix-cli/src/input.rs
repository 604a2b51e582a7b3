// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Matrix file loading.
//!
//! A matrix file holds `rows`, `columns` and a row-major `data` array,
//! encoded as JSON (`.json`) or TOML (`.toml`):
//! ```toml
//! rows = 2
//! columns = 2
//! data = [4.0, 7.0, 2.0, 6.0]
//! ```

use std::path::Path;

use matrix_core::Matrix;

use crate::error::CliError;

/// Reads and validates one matrix file, picking the decoder by extension.
pub fn load_matrix(path: &Path) -> Result<Matrix, CliError> {
    let input_error = |detail: String| CliError::Input {
        path: path.to_path_buf(),
        detail,
    };

    let content = std::fs::read_to_string(path).map_err(|e| input_error(e.to_string()))?;
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);

    let matrix: Matrix = match extension.as_deref() {
        Some("json") => serde_json::from_str(&content).map_err(|e| input_error(e.to_string()))?,
        Some("toml") => toml::from_str(&content).map_err(|e| input_error(e.to_string()))?,
        _ => {
            return Err(input_error(
                "unsupported extension; expected .json or .toml".to_string(),
            ))
        }
    };

    tracing::debug!(path = %path.display(), "loaded matrix");
    Ok(matrix)
}
