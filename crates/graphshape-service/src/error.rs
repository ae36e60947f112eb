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

//! Error types for session-backed operations.

use graphshape::ShapeError;
use thiserror::Error;

/// Error type for service and schema operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The session failed to run a query.
    #[error("session error: {0}")]
    Session(String),

    /// A required option was not supplied.
    #[error("missing required option '{0}'")]
    MissingOption(&'static str),

    /// Query building failed.
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// Serialization error from serde_json.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_option_display() {
        let err = ServiceError::MissingOption("uuid");
        assert_eq!(err.to_string(), "missing required option 'uuid'");
    }

    #[test]
    fn test_shape_error_is_transparent() {
        let err: ServiceError = ShapeError::InvalidPath("a.b".to_string()).into();
        assert_eq!(err.to_string(), "invalid shape path: a.b");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ServiceError = json_err.into();
        assert!(matches!(err, ServiceError::Json(_)));
        assert!(err.to_string().starts_with("JSON error"));
    }
}
