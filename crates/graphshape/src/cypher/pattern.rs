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

//! Clause keywords, graph patterns and context-sensitive property decoration.
//!
//! A pattern is rendered only when the clause that contains it is added to a
//! builder, so the same node pattern prints audit fields inside `CREATE` and
//! prints its properties untouched inside `MATCH`:
//!
//! ```
//! # use graphshape::cypher::{Clause, Pattern, Props};
//! # use graphshape::cypher::{FixedClock, FixedId};
//! # use graphshape::ClauseBuilder;
//! let q = ClauseBuilder::new()
//!     .with_id_generator(FixedId::new("\"1\""))
//!     .with_clock(FixedClock(100));
//! let node = q.node("u:User", Props::from([("name", "\"A\"")]));
//!
//! assert_eq!(node.render(&Clause::Match), "(u:User {name: \"A\"})");
//! assert_eq!(
//!     node.render(&Clause::Create),
//!     "(u:User {name: \"A\", uuid: \"1\", createdAt: 100, updatedAt: 100})"
//! );
//! ```

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::expr::map_literal;
use super::generate::{Clock, IdGenerator};
use super::props::{MapValue, Props};
use crate::config::BuilderConfig;
use crate::error::{Result, ShapeError};

/// A clause keyword.
///
/// Known keywords get their own variant; anything else is carried verbatim in
/// [`Clause::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Clause {
    /// `MATCH`
    Match,
    /// `OPTIONAL MATCH`
    OptionalMatch,
    /// `WHERE`
    Where,
    /// `WHERE NOT`
    WhereNot,
    /// `CREATE`
    Create,
    /// `SET`
    Set,
    /// `WITH`
    With,
    /// `RETURN`
    Return,
    /// Any other keyword text.
    Other(String),
}

impl Clause {
    /// Keyword text as it appears in the query.
    pub fn as_str(&self) -> &str {
        match self {
            Clause::Match => "MATCH",
            Clause::OptionalMatch => "OPTIONAL MATCH",
            Clause::Where => "WHERE",
            Clause::WhereNot => "WHERE NOT",
            Clause::Create => "CREATE",
            Clause::Set => "SET",
            Clause::With => "WITH",
            Clause::Return => "RETURN",
            Clause::Other(keyword) => keyword,
        }
    }

    /// Whether patterns rendered in this clause get audit fields stamped.
    pub fn is_creation(&self) -> bool {
        matches!(self, Clause::Create)
    }
}

impl From<&str> for Clause {
    fn from(keyword: &str) -> Self {
        match keyword {
            "MATCH" => Clause::Match,
            "OPTIONAL MATCH" => Clause::OptionalMatch,
            "WHERE" => Clause::Where,
            "WHERE NOT" => Clause::WhereNot,
            "CREATE" => Clause::Create,
            "SET" => Clause::Set,
            "WITH" => Clause::With,
            "RETURN" => Clause::Return,
            other => Clause::Other(other.to_string()),
        }
    }
}

impl From<String> for Clause {
    fn from(keyword: String) -> Self {
        Clause::from(keyword.as_str())
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Something that renders differently depending on the enclosing clause.
pub trait Pattern: Send + Sync {
    /// Render the pattern text for use inside `clause`.
    fn render(&self, clause: &Clause) -> String;
}

impl<F> Pattern for F
where
    F: Fn(&Clause) -> String + Send + Sync,
{
    fn render(&self, clause: &Clause) -> String {
        self(clause)
    }
}

/// Stamps audit fields onto property maps.
///
/// Shared between a builder and every pattern it hands out.
#[derive(Clone)]
pub struct Decorator {
    config: BuilderConfig,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl Decorator {
    /// Create a decorator from its configuration and sources.
    pub fn new(config: BuilderConfig, ids: Arc<dyn IdGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self { config, ids, clock }
    }

    /// The audit field configuration.
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    pub(crate) fn set_config(&mut self, config: BuilderConfig) {
        self.config = config;
    }

    pub(crate) fn set_ids(&mut self, ids: Arc<dyn IdGenerator>) {
        self.ids = ids;
    }

    pub(crate) fn set_clock(&mut self, clock: Arc<dyn Clock>) {
        self.clock = clock;
    }

    /// Generate an identifier expression.
    pub fn generate_id(&self) -> String {
        self.ids.generate()
    }

    /// Current timestamp in milliseconds.
    pub fn now_millis(&self) -> i64 {
        self.clock.now_millis()
    }

    /// Render the property block for a pattern, including the leading space.
    ///
    /// Inside a creation clause the identifier and both timestamps are
    /// appended when absent. Outside one, nothing is rendered unless `props`
    /// holds at least one property.
    pub fn decorate(&self, clause: &Clause, props: Option<&Props>) -> String {
        let is_creation = clause.is_creation();
        let has_props = props.is_some_and(|p| !p.is_empty());

        if !is_creation && !has_props {
            return String::new();
        }

        let mut result = props.cloned().unwrap_or_default();

        if is_creation {
            result.insert_if_absent(&self.config.id_property, || self.ids.generate());

            let needs_time = !result.contains_key(&self.config.created_at_property)
                || !result.contains_key(&self.config.updated_at_property);
            if needs_time {
                let now = self.clock.now_millis().to_string();
                result.insert_if_absent(&self.config.created_at_property, || now.clone());
                result.insert_if_absent(&self.config.updated_at_property, || now);
            }
        }

        format!(" {}", map_literal(&MapValue::from(result)))
    }
}

impl fmt::Debug for Decorator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decorator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// A node pattern: `(name {props})`.
#[derive(Debug, Clone)]
pub struct NodePattern {
    name: String,
    props: Option<Props>,
    decorator: Decorator,
}

impl NodePattern {
    pub(crate) fn new(name: String, props: Option<Props>, decorator: Decorator) -> Self {
        Self {
            name,
            props,
            decorator,
        }
    }
}

impl Pattern for NodePattern {
    fn render(&self, clause: &Clause) -> String {
        format!(
            "({}{})",
            self.name,
            self.decorator.decorate(clause, self.props.as_ref())
        )
    }
}

/// Relationship direction markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// `-[..]-`
    #[default]
    Undirected,
    /// `<-[..]-`
    Left,
    /// `-[..]->`
    Right,
}

/// A relationship pattern such as `-[r:KNOWS {since: 2020}]->`.
#[derive(Debug, Clone)]
pub struct RelationPattern {
    name: String,
    props: Option<Props>,
    direction: Direction,
    decorator: Decorator,
}

impl RelationPattern {
    pub(crate) fn new(
        name: String,
        props: Option<Props>,
        direction: Direction,
        decorator: Decorator,
    ) -> Self {
        Self {
            name,
            props,
            direction,
            decorator,
        }
    }
}

impl Pattern for RelationPattern {
    fn render(&self, clause: &Clause) -> String {
        let prefix = if self.direction == Direction::Left { "<" } else { "" };
        let suffix = if self.direction == Direction::Right { ">" } else { "" };
        format!(
            "{}-[{}{}]-{}",
            prefix,
            self.name,
            self.decorator.decorate(clause, self.props.as_ref()),
            suffix
        )
    }
}

/// One element of a clause body.
pub enum ClausePart {
    /// Literal text.
    Text(String),
    /// A pattern rendered against the enclosing clause.
    Pattern(Box<dyn Pattern>),
}

impl ClausePart {
    /// Render this part inside `clause`.
    pub fn render(&self, clause: &Clause) -> String {
        match self {
            ClausePart::Text(text) => text.clone(),
            ClausePart::Pattern(pattern) => pattern.render(clause),
        }
    }

    /// Wrap any pattern.
    pub fn pattern(pattern: impl Pattern + 'static) -> Self {
        ClausePart::Pattern(Box::new(pattern))
    }
}

impl fmt::Debug for ClausePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClausePart::Text(text) => f.debug_tuple("Text").field(text).finish(),
            ClausePart::Pattern(_) => f.write_str("Pattern(..)"),
        }
    }
}

impl From<&str> for ClausePart {
    fn from(v: &str) -> Self {
        ClausePart::Text(v.to_string())
    }
}

impl From<String> for ClausePart {
    fn from(v: String) -> Self {
        ClausePart::Text(v)
    }
}

impl From<NodePattern> for ClausePart {
    fn from(v: NodePattern) -> Self {
        ClausePart::pattern(v)
    }
}

impl From<RelationPattern> for ClausePart {
    fn from(v: RelationPattern) -> Self {
        ClausePart::pattern(v)
    }
}

/// The body of a clause: a single string or an ordered sequence of parts.
#[derive(Debug)]
pub enum ClauseParts {
    /// Body text used as is.
    Text(String),
    /// Parts rendered in order and joined with a separator.
    Parts(Vec<ClausePart>),
}

impl ClauseParts {
    /// Render the clause body.
    pub fn render(&self, clause: &Clause, separator: &str) -> String {
        match self {
            ClauseParts::Text(text) => text.clone(),
            ClauseParts::Parts(parts) => parts
                .iter()
                .map(|part| part.render(clause))
                .collect::<Vec<_>>()
                .join(separator),
        }
    }
}

impl From<&str> for ClauseParts {
    fn from(v: &str) -> Self {
        ClauseParts::Text(v.to_string())
    }
}

impl From<String> for ClauseParts {
    fn from(v: String) -> Self {
        ClauseParts::Text(v)
    }
}

impl From<Vec<ClausePart>> for ClauseParts {
    fn from(v: Vec<ClausePart>) -> Self {
        ClauseParts::Parts(v)
    }
}

impl<const N: usize> From<[&str; N]> for ClauseParts {
    fn from(v: [&str; N]) -> Self {
        ClauseParts::Parts(v.into_iter().map(ClausePart::from).collect())
    }
}

impl TryFrom<Value> for ClauseParts {
    type Error = ShapeError;

    /// Accept a JSON string or an array of JSON strings.
    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(text) => Ok(ClauseParts::Text(text)),
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(text) => Ok(ClausePart::Text(text)),
                    other => Err(ShapeError::InvalidClauseShape(format!(
                        "array element {}",
                        json_kind(&other)
                    ))),
                })
                .collect::<Result<Vec<_>>>()
                .map(ClauseParts::Parts),
            other => Err(ShapeError::InvalidClauseShape(json_kind(&other).to_string())),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Build a `Vec<ClausePart>` from strings and patterns.
///
/// ```
/// # use graphshape::{parts, ClauseBuilder};
/// let mut q = ClauseBuilder::new();
/// let body = parts![q.node("u:User", None), q.relation_right(":PLAYED", None), "(g)"];
/// q.match_(body);
/// assert_eq!(q.render(), "MATCH (u:User)-[:PLAYED]->(g)");
/// ```
#[macro_export]
macro_rules! parts {
    ($($part:expr),* $(,)?) => {
        vec![$($crate::cypher::ClausePart::from($part)),*]
    };
}
