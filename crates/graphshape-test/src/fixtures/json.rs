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

//! JSON documents accepted by the shape parser and the schema loader.

/// JSON form of [`two_level`](super::two_level).
pub const TWO_LEVEL_JSON: &str = r#"{
  "variable": "root",
  "fields": {
    "a": "root.a",
    "b": { "variable": "b", "fields": { "x": "b.x", "y": "b.y" } }
  }
}"#;

/// JSON form of [`user_with_posts`](super::user_with_posts) with an array
/// root.
pub const USER_POSTS_ARRAY_JSON: &str = r#"[{
  "variable": "u",
  "fields": {
    "name": "u.name",
    "posts": [{ "variable": "p", "fields": { "title": "p.title" } }]
  }
}]"#;

/// Schema configuration with one constraint and one index.
pub const SCHEMA_JSON: &str = r#"{
  ":User": {
    "email": { "unique": true },
    "name": { "index": true }
  },
  ":Tag": {
    "label": { "index": true, "unique": true }
  }
}"#;

/// DDL produced by [`SCHEMA_JSON`].
pub const SCHEMA_STATEMENTS: [&str; 3] = [
    "CREATE CONSTRAINT ON (node:User) ASSERT node.email IS UNIQUE",
    "CREATE INDEX ON :User(name)",
    "CREATE CONSTRAINT ON (node:Tag) ASSERT node.label IS UNIQUE",
];
