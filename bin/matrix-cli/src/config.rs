// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! CLI configuration loaded from TOML files or built from defaults.
//!
//! # TOML Format
//! ```toml
//! precision = 4
//! format = "table"
//! tolerance = 1e-9
//! ```

use std::path::Path;

use crate::error::CliError;

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One bracketed row per line, fixed precision.
    Table,
    Json,
    Toml,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
            OutputFormat::Toml => "toml",
        }
    }
}

/// Configuration for `matrix-cli`. Missing keys fall back to [`Default`].
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Digits after the decimal point in table output.
    pub precision: usize,
    /// Output format name: `"table"`, `"json"` or `"toml"`.
    pub format: String,
    /// Maximum per-entry deviation from the identity accepted by `inverse --verify`.
    pub tolerance: f64,
}

impl CliConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, CliError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| CliError::Config(format!("TOML parse error: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, CliError> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("TOML serialise error: {e}")))
    }

    /// Resolves the configured output format.
    pub fn output_format(&self) -> Result<OutputFormat, CliError> {
        match self.format.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "toml" => Ok(OutputFormat::Toml),
            other => Err(CliError::Config(format!(
                "unknown format '{other}'; expected 'table', 'json', or 'toml'"
            ))),
        }
    }

    /// Checks every field, so later stages can rely on them.
    pub fn validate(&self) -> Result<(), CliError> {
        self.output_format()?;
        if !(self.tolerance.is_finite() && self.tolerance >= 0.0) {
            return Err(CliError::Config(format!(
                "tolerance must be a finite, non-negative number, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            precision: 6,
            format: "table".to_string(),
            tolerance: 1e-9,
        }
    }
}
