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

//! CLI command implementations

mod plan;
mod schema;
mod serialize;

pub use plan::plan;
pub use schema::schema;
pub use serialize::serialize;

use std::fs;
use std::io::{self, Write};

use tracing::debug;

use crate::error::CliError;

/// Default maximum input size (64 MB).
/// Can be overridden via the GRAPHSHAPE_MAX_FILE_SIZE environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 64 * 1024 * 1024;

fn get_max_file_size() -> u64 {
    std::env::var("GRAPHSHAPE_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a file from disk, rejecting files over the size limit before
/// reading them.
///
/// # Errors
///
/// Returns `CliError::FileTooLarge` when the file exceeds the limit and
/// `CliError::Io` when metadata or contents cannot be read.
pub fn read_file(path: &str) -> Result<String, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }

    debug!("Reading {} ({} bytes)", path, metadata.len());
    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Write content to a file, or to stdout when `path` is `None`.
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("<stdout>", e)),
    }
}
