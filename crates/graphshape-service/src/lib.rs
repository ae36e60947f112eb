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

//! Session-backed node operations and schema setup built on `graphshape`.
//!
//! This crate provides:
//! - [`Session`]: the async contract a database driver implements
//! - [`NodeService`]: find, create, update and delete single nodes
//! - [`Schema`]: index and uniqueness-constraint DDL
//! - [`MemorySession`]: an in-process session for tests and dry runs
//!
//! # Example
//!
//! ```rust
//! use graphshape_service::{CreateOptions, MemorySession, NodeService};
//!
//! # async fn example() -> graphshape_service::Result<()> {
//! let service = NodeService::new(MemorySession::new());
//! service
//!     .create_node(":User", CreateOptions::new().with_attr("name", "Ann"))
//!     .await?;
//!
//! let queries = service.session().queries();
//! assert!(queries[0].starts_with("CREATE (node:User {name: {name}, uuid: "));
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]

pub mod error;
pub mod options;
pub mod schema;
pub mod service;
pub mod session;
pub mod value;

pub use error::{Result, ServiceError};
pub use options::{to_params, Attrs, CreateOptions, FindOptions, UpdateOptions};
pub use schema::{LabelSchema, PropertySchema, Schema, SchemaConfig};
pub use service::NodeService;
pub use session::{MemorySession, RecordedQuery, Session};
pub use value::{GraphValue, Params, QueryResult, Record};
