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

//! Identifier and timestamp sources used for audit-field decoration.
//!
//! Builders hold these behind `Arc<dyn ..>` so tests can swap in fixed values
//! and get byte-stable output.

use uuid::Uuid;

/// Produces identifier expressions for newly created graph entities.
///
/// The returned text is inserted verbatim into the query, so it must already
/// be a valid Cypher expression (typically a quoted string literal).
pub trait IdGenerator: Send + Sync {
    /// Generate a fresh identifier expression.
    fn generate(&self) -> String;
}

/// Produces the current time as Unix epoch milliseconds.
pub trait Clock: Send + Sync {
    /// Current timestamp in milliseconds.
    fn now_millis(&self) -> i64;
}

/// Random v4 UUIDs rendered as double-quoted string literals.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV4;

impl IdGenerator for UuidV4 {
    fn generate(&self) -> String {
        format!("\"{}\"", Uuid::new_v4())
    }
}

/// Wall-clock time from the system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Always yields the same identifier expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedId(pub String);

impl FixedId {
    /// Create a fixed identifier generator.
    pub fn new(id: impl Into<String>) -> Self {
        FixedId(id.into())
    }
}

impl IdGenerator for FixedId {
    fn generate(&self) -> String {
        self.0.clone()
    }
}

/// Always yields the same timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

impl<F> IdGenerator for F
where
    F: Fn() -> String + Send + Sync,
{
    fn generate(&self) -> String {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_v4_is_quoted() {
        let id = UuidV4.generate();
        assert!(id.starts_with('"'));
        assert!(id.ends_with('"'));
        assert!(Uuid::parse_str(id.trim_matches('"')).is_ok());
    }

    #[test]
    fn test_uuid_v4_is_random() {
        assert_ne!(UuidV4.generate(), UuidV4.generate());
    }

    #[test]
    fn test_system_clock_is_recent() {
        // 2020-01-01T00:00:00Z
        assert!(SystemClock.now_millis() > 1_577_836_800_000);
    }

    #[test]
    fn test_fixed_sources() {
        assert_eq!(FixedId::new("\"1\"").generate(), "\"1\"");
        assert_eq!(FixedClock(100).now_millis(), 100);
    }

    #[test]
    fn test_closure_generator() {
        let generator = || "\"closure\"".to_string();
        assert_eq!(generator.generate(), "\"closure\"");
    }
}
