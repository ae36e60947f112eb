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

//! Fluent Cypher clause building and nested result-shape serialization.
//!
//! This crate provides two cooperating pieces:
//! - [`ClauseBuilder`]: assembles query text row by row, with node and
//!   relationship patterns that stamp audit fields when rendered inside
//!   `CREATE`
//! - [`Serializer`]: compiles a nested [`ShapeNode`] tree into the chain of
//!   `WITH` projections that folds nested objects and one-to-many lists into
//!   a single `RETURN`
//!
//! # Example: Building a query
//!
//! ```rust
//! use graphshape::{parts, ClauseBuilder, Props};
//! use graphshape::cypher::{FixedClock, FixedId};
//!
//! let mut q = ClauseBuilder::new()
//!     .with_id_generator(FixedId::new("\"1\""))
//!     .with_clock(FixedClock(100));
//!
//! let body = parts![
//!     q.existing_node("u"),
//!     q.relation_right(":TAGGED", None),
//!     q.node(":Tag", Props::from([("label", "\"Rust\"")])),
//! ];
//! q.match_("(u:User)").create(body);
//!
//! assert_eq!(
//!     q.render(),
//!     "MATCH (u:User) CREATE (u)-[:TAGGED {uuid: \"1\", createdAt: 100, updatedAt: 100}]->\
//!      (:Tag {label: \"Rust\", uuid: \"1\", createdAt: 100, updatedAt: 100})"
//! );
//! ```
//!
//! # Example: Serializing a nested shape
//!
//! ```rust
//! use graphshape::{ClauseBuilder, Serializer, ShapeNode, ShapeRoot};
//!
//! let mut q = ClauseBuilder::new();
//! q.match_("(u:User)").optional_match("(u)-[:WROTE]->(p:Post)");
//!
//! let mut shape = ShapeRoot::from(
//!     ShapeNode::new("u")
//!         .field("name", "u.name")
//!         .field("posts", [ShapeNode::new("p").field("title", "p.title")]),
//! );
//! Serializer::new(&mut q).serialize(&mut shape, &[] as &[&str])?;
//!
//! assert_eq!(
//!     q.render(),
//!     "MATCH (u:User) OPTIONAL MATCH (u)-[:WROTE]->(p:Post) \
//!      WITH u, CASE WHEN p IS NOT NULL THEN COLLECT({title: p.title}) ELSE [] END as p \
//!      RETURN {name: u.name, posts: p}"
//! );
//! # Ok::<(), graphshape::ShapeError>(())
//! ```
//!
//! # Output format
//!
//! Rows are joined with single spaces, map-literal pairs with `", "`, and
//! property values are emitted verbatim. Quoting string literals is the
//! caller's job; see [`cypher::quote_string`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod cypher;
pub mod error;
pub mod serializer;
pub mod shape;

// Re-export main types at crate root for convenience
pub use config::{BuilderConfig, BuilderConfigBuilder};
pub use cypher::{build, ClauseBuilder, Clause, ClausePart, ClauseParts, MapValue, Projection, Props};
pub use error::{Result, ShapeError};
pub use serializer::{Resolvable, ResolvableKind, Serializer};
pub use shape::{FieldValue, PathTarget, ShapeNode, ShapeRoot};
