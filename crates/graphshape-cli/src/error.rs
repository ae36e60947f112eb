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

//! Structured error types for the graphshape CLI.

use std::io;
use std::path::PathBuf;

use graphshape::ShapeError;
use graphshape_service::ServiceError;
use thiserror::Error;

/// The main error type for CLI operations.
#[derive(Error, Debug)]
pub enum CliError {
    /// I/O operation failed (file read, write, or metadata access).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// File size exceeds the configured limit.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB)")]
    FileTooLarge {
        /// The file path that exceeded the limit
        path: PathBuf,
        /// The actual file size in bytes
        actual: u64,
        /// The maximum allowed file size in bytes
        max: u64,
        /// The maximum allowed file size in MB (for display)
        max_mb: u64,
    },

    /// The shape document was rejected.
    #[error("Shape error: {0}")]
    Shape(#[from] ShapeError),

    /// The schema document was rejected.
    #[error("Schema error: {0}")]
    Service(#[from] ServiceError),

    /// JSON output could not be produced.
    #[error("JSON format error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Create an I/O error with the path it concerns.
    pub fn io_error(path: impl Into<PathBuf>, err: io::Error) -> Self {
        CliError::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Create a file-too-large error.
    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        CliError::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }
}
