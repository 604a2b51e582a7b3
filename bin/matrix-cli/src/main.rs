// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # matrix-cli
//!
//! Command-line interface for the matrix-core library.
//!
//! ## Usage
//! ```bash
//! # Invert a matrix and check the result
//! matrix-cli inverse a.json --verify
//!
//! # Chained product, evaluated left to right
//! matrix-cli multiply a.json b.toml c.json --format json
//!
//! # Shape and invertibility summary
//! matrix-cli inspect a.json
//! ```

mod commands;
mod config;
mod error;
mod input;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::slice::Axis;
use crate::config::CliConfig;

#[derive(Parser)]
#[command(
    name = "matrix-cli",
    about = "Dense matrix arithmetic: multiply, invert, transpose and reshape",
    version,
    author
)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format: table, json, toml (overrides the config file).
    #[arg(short, long, global = true)]
    format: Option<String>,

    /// Digits after the decimal point in table output (overrides the config file).
    #[arg(short, long, global = true)]
    precision: Option<usize>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print shape, squareness, invertibility and contents of a matrix.
    Inspect {
        /// Matrix file (.json or .toml).
        file: PathBuf,
    },

    /// Print the identity matrix of the given dimension.
    Identity {
        /// Number of rows and columns.
        dimension: usize,
    },

    /// Print the transpose of a matrix.
    Transpose {
        /// Matrix file (.json or .toml).
        file: PathBuf,
    },

    /// Extract one row as a 1xN matrix.
    Row {
        /// Matrix file (.json or .toml).
        file: PathBuf,
        /// Zero-based row index.
        index: usize,
    },

    /// Extract one column as an Mx1 matrix.
    Column {
        /// Matrix file (.json or .toml).
        file: PathBuf,
        /// Zero-based column index.
        index: usize,
    },

    /// Reinterpret the row-major data under a new shape.
    Reshape {
        /// Matrix file (.json or .toml).
        file: PathBuf,

        #[arg(long)]
        rows: usize,

        #[arg(long)]
        columns: usize,
    },

    /// Multiply two or more matrices, left to right.
    Multiply {
        /// Matrix files (.json or .toml), at least two.
        #[arg(required = true, num_args = 2..)]
        files: Vec<PathBuf>,
    },

    /// Invert a square matrix.
    Inverse {
        /// Matrix file (.json or .toml).
        file: PathBuf,

        /// Check that `m * m^-1` is within the configured tolerance of the identity.
        #[arg(long)]
        verify: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    commands::init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };
    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(precision) = cli.precision {
        config.precision = precision;
    }
    config.validate()?;
    tracing::debug!(?config, "configuration resolved");

    match cli.command {
        Commands::Inspect { file } => commands::inspect::execute(&file, &config),
        Commands::Identity { dimension } => commands::identity::execute(dimension, &config),
        Commands::Transpose { file } => commands::transpose::execute(&file, &config),
        Commands::Row { file, index } => {
            commands::slice::execute(&file, Axis::Row, index, &config)
        }
        Commands::Column { file, index } => {
            commands::slice::execute(&file, Axis::Column, index, &config)
        }
        Commands::Reshape {
            file,
            rows,
            columns,
        } => commands::reshape::execute(&file, rows, columns, &config),
        Commands::Multiply { files } => commands::multiply::execute(&files, &config),
        Commands::Inverse { file, verify } => commands::inverse::execute(&file, verify, &config),
    }
}
