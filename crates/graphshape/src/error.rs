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

//! Error types for clause building and shape serialization.

use thiserror::Error;

/// Error type for graphshape operations.
#[derive(Debug, Error)]
pub enum ShapeError {
    /// Clause parts were neither a string nor a sequence of strings and patterns.
    #[error("invalid clause shape: parts must be a string or an array, got {0}")]
    InvalidClauseShape(String),

    /// A path did not address an existing field of a shape tree.
    #[error("invalid shape path: {0}")]
    InvalidPath(String),

    /// A shape description could not be turned into a shape tree.
    #[error("invalid shape: {0}")]
    InvalidShape(String),

    /// Serialization error from serde_json.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for graphshape operations.
pub type Result<T> = std::result::Result<T, ShapeError>;
