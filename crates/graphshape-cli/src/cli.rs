// graphshape - Cypher clause assembly and result-shape serialization
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! CLI command definitions and argument parsing.

use clap::Subcommand;

use crate::commands;
use crate::error::CliError;

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Serialize a JSON result shape into a query
    ///
    /// Reads a shape document (a node object, or a one-element array for a
    /// list result) and prints the WITH chain and final RETURN.
    Serialize {
        /// Input shape file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Row to emit before the collapse chain (repeatable)
        #[arg(long = "prefix", value_name = "ROW")]
        prefix: Vec<String>,

        /// Row to emit before the final RETURN (repeatable)
        #[arg(long = "trailing", value_name = "ROW")]
        trailing: Vec<String>,

        /// Print one row per line
        #[arg(long)]
        lines: bool,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// List the collapse order of a JSON result shape
    Plan {
        /// Input shape file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print index and constraint statements for a schema configuration
    Schema {
        /// Input schema file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the input cannot be read or parsed, or the output
    /// cannot be written.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Serialize {
                file,
                prefix,
                trailing,
                lines,
                output,
            } => commands::serialize(&file, &prefix, &trailing, lines, output.as_deref()),
            Commands::Plan { file, json, output } => {
                commands::plan(&file, json, output.as_deref())
            }
            Commands::Schema { file, output } => commands::schema(&file, output.as_deref()),
        }
    }
}
