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

//! graphshape Command Line Interface

use std::process::ExitCode;

use clap::Parser;
use graphshape_cli::cli::Commands;
use tracing_subscriber::EnvFilter;

/// graphshape - Cypher clause and result-shape toolkit
///
/// # Examples
///
/// ```bash
/// # Print the query for a nested result shape
/// graphshape serialize shape.json --trailing "LIMIT 10"
///
/// # Print schema DDL
/// graphshape schema schema.json
/// ```
/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "graphshape=info";

#[derive(Parser)]
#[command(name = "graphshape")]
#[command(author, version, about = "graphshape - Cypher clause and result-shape toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
