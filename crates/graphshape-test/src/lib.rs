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

//! Shared test fixtures for graphshape crates.
//!
//! # Quick Start
//!
//! ```rust
//! use graphshape_test::{fixed_builder, fixtures, serialize_to_string};
//!
//! for (name, shape, expected) in fixtures::cases() {
//!     assert_eq!(serialize_to_string(shape()), expected, "fixture {}", name);
//! }
//!
//! let q = fixed_builder();
//! assert!(q.is_empty());
//! ```

use graphshape::cypher::{FixedClock, FixedId};
use graphshape::{ClauseBuilder, Serializer, ShapeRoot};

/// Type alias for a list of fixture functions (name, generator).
pub type FixtureList = Vec<(&'static str, fn() -> ShapeRoot)>;

/// Identifier expression stamped by [`fixed_builder`].
pub const FIXED_ID: &str = "\"1\"";

/// Timestamp stamped by [`fixed_builder`].
pub const FIXED_TIME: i64 = 100;

/// A builder whose generated identifiers and timestamps never change.
pub fn fixed_builder() -> ClauseBuilder {
    ClauseBuilder::new()
        .with_id_generator(FixedId::new(FIXED_ID))
        .with_clock(FixedClock(FIXED_TIME))
}

/// Serialize `shape` into a fresh builder and return the query text.
///
/// # Panics
///
/// Panics if serialization fails.
pub fn serialize_to_string(mut shape: ShapeRoot) -> String {
    let mut q = ClauseBuilder::new();
    if let Err(e) = Serializer::new(&mut q).serialize(&mut shape, &[] as &[&str]) {
        panic!("fixture failed to serialize: {}", e);
    }
    q.render()
}

/// Canonical fixtures.
pub mod fixtures;
