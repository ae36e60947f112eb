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

//! The fluent clause builder.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::expr::{self, CaseBranch, Projection};
use super::generate::{Clock, IdGenerator, SystemClock, UuidV4};
use super::pattern::{
    Clause, ClauseParts, Decorator, Direction, NodePattern, RelationPattern,
};
use super::props::{MapValue, Props};
use crate::config::BuilderConfig;
use crate::error::Result;

/// Accumulates clause rows and renders them into one query string.
///
/// Every clause method appends exactly one row and returns the builder so
/// calls chain. Rows are joined with single spaces by [`render`](Self::render).
///
/// # Examples
///
/// ```
/// # use graphshape::ClauseBuilder;
/// let query = ClauseBuilder::new()
///     .match_("(u:User)")
///     .where_("u.name = \"Marko\"")
///     .add_raw("RETURN u")
///     .render();
/// assert_eq!(query, "MATCH (u:User) WHERE u.name = \"Marko\" RETURN u");
/// ```
#[derive(Clone)]
pub struct ClauseBuilder {
    rows: Vec<String>,
    decorator: Decorator,
}

impl Default for ClauseBuilder {
    fn default() -> Self {
        Self::with_config(BuilderConfig::default())
    }
}

impl ClauseBuilder {
    /// Create an empty builder with default configuration, random UUIDs and
    /// the system clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty builder with a custom configuration.
    pub fn with_config(config: BuilderConfig) -> Self {
        Self {
            rows: Vec::new(),
            decorator: Decorator::new(config, Arc::new(UuidV4), Arc::new(SystemClock)),
        }
    }

    /// Replace the identifier generator.
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.decorator.set_ids(Arc::new(ids));
        self
    }

    /// Replace the timestamp source.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.decorator.set_clock(Arc::new(clock));
        self
    }

    /// Replace the configuration, keeping rows and sources.
    pub fn set_config(&mut self, config: BuilderConfig) -> &mut Self {
        self.decorator.set_config(config);
        self
    }

    /// Replace the identifier generator in place.
    pub fn set_id_generator(&mut self, ids: Arc<dyn IdGenerator>) -> &mut Self {
        self.decorator.set_ids(ids);
        self
    }

    /// Replace the timestamp source in place.
    pub fn set_clock(&mut self, clock: Arc<dyn Clock>) -> &mut Self {
        self.decorator.set_clock(clock);
        self
    }

    /// An empty builder sharing this builder's configuration and sources.
    pub fn fork(&self) -> Self {
        Self {
            rows: Vec::new(),
            decorator: self.decorator.clone(),
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &BuilderConfig {
        self.decorator.config()
    }

    // ------------------------------------------------------------------
    // Rows and clauses
    // ------------------------------------------------------------------

    /// Append a row verbatim.
    pub fn add_raw(&mut self, text: impl Into<String>) -> &mut Self {
        self.rows.push(text.into());
        self
    }

    /// Append `keyword parts`, with parts joined by nothing.
    pub fn add_clause(
        &mut self,
        keyword: impl Into<Clause>,
        parts: impl Into<ClauseParts>,
    ) -> &mut Self {
        self.add_clause_with_separator(keyword, parts, "")
    }

    /// Append `keyword parts`, with parts joined by `separator`.
    ///
    /// Patterns among the parts are rendered against `keyword`.
    pub fn add_clause_with_separator(
        &mut self,
        keyword: impl Into<Clause>,
        parts: impl Into<ClauseParts>,
        separator: &str,
    ) -> &mut Self {
        let clause = keyword.into();
        let body = parts.into().render(&clause, separator);
        self.add_raw(format!("{} {}", clause, body))
    }

    /// Append a clause whose parts come from a dynamic JSON description.
    ///
    /// # Errors
    ///
    /// Returns `ShapeError::InvalidClauseShape` when `parts` is neither a
    /// string nor an array of strings. No row is appended in that case.
    pub fn add_clause_value(
        &mut self,
        keyword: impl Into<Clause>,
        parts: Value,
        separator: &str,
    ) -> Result<&mut Self> {
        let parts = ClauseParts::try_from(parts)?;
        Ok(self.add_clause_with_separator(keyword, parts, separator))
    }

    /// `MATCH ...`
    pub fn match_(&mut self, parts: impl Into<ClauseParts>) -> &mut Self {
        self.add_clause(Clause::Match, parts)
    }

    /// `OPTIONAL MATCH ...`
    pub fn optional_match(&mut self, parts: impl Into<ClauseParts>) -> &mut Self {
        self.add_clause(Clause::OptionalMatch, parts)
    }

    /// `WHERE ...`
    pub fn where_(&mut self, parts: impl Into<ClauseParts>) -> &mut Self {
        self.add_clause(Clause::Where, parts)
    }

    /// `WHERE NOT ...`
    pub fn where_not(&mut self, parts: impl Into<ClauseParts>) -> &mut Self {
        self.add_clause(Clause::WhereNot, parts)
    }

    /// `CREATE ...`; patterns get audit fields stamped.
    pub fn create(&mut self, parts: impl Into<ClauseParts>) -> &mut Self {
        self.add_clause(Clause::Create, parts)
    }

    /// `SET var.k = v, ..., var.updatedAt = <now>`.
    ///
    /// The update timestamp is always written. A caller-supplied value for it
    /// is overwritten in place.
    pub fn set_properties(&mut self, variable: &str, props: &Props) -> &mut Self {
        let mut props = props.clone();
        props.insert(
            self.config().updated_at_property.clone(),
            self.decorator.now_millis().to_string(),
        );

        let body = props
            .iter()
            .map(|(k, v)| format!("{}.{} = {}", variable, k, v))
            .collect::<Vec<_>>()
            .join(", ");

        self.add_clause(Clause::Set, body)
    }

    /// `WITH a, b, expr as c`
    pub fn with_projection<I, P>(&mut self, parts: I) -> &mut Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Projection>,
    {
        self.add_result_clause(Clause::With, parts)
    }

    /// `RETURN a, b, expr as c`
    pub fn return_projection<I, P>(&mut self, parts: I) -> &mut Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Projection>,
    {
        self.add_result_clause(Clause::Return, parts)
    }

    /// Append `keyword` followed by projections joined with `", "`.
    pub fn add_result_clause<I, P>(&mut self, keyword: impl Into<Clause>, parts: I) -> &mut Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Projection>,
    {
        let body = parts
            .into_iter()
            .map(|p| p.into().render())
            .collect::<Vec<_>>()
            .join(", ");
        let clause = keyword.into();
        self.add_raw(format!("{} {}", clause, body))
    }

    /// `WITH COUNT(*) as count`, separating write pipelines.
    pub fn next(&mut self) -> &mut Self {
        self.with_projection(["COUNT(*) as count"])
    }

    // ------------------------------------------------------------------
    // Expressions
    // ------------------------------------------------------------------

    /// Render a map literal. See [`expr::map_literal`].
    pub fn map_literal(&self, value: impl Into<MapValue>) -> String {
        expr::map_literal(&value.into())
    }

    /// Render a `CASE` expression. See [`expr::conditional`].
    pub fn conditional(&self, branches: &[CaseBranch], else_expr: Option<&str>) -> String {
        expr::conditional(branches, else_expr)
    }

    /// Render the collect-or-empty idiom. See [`expr::collect_or_empty`].
    pub fn collect_or_empty(&self, condition_var: &str, expr: &str) -> String {
        expr::collect_or_empty(condition_var, expr)
    }

    // ------------------------------------------------------------------
    // Patterns
    // ------------------------------------------------------------------

    /// A node pattern `(name {props})`, decorated by the clause it lands in.
    pub fn node(&self, name: impl Into<String>, props: impl Into<Option<Props>>) -> NodePattern {
        NodePattern::new(name.into(), props.into(), self.decorator.clone())
    }

    /// A bare reference to an already bound node: `(name)`.
    pub fn existing_node(&self, name: &str) -> String {
        format!("({})", name)
    }

    /// A relationship pattern with an explicit direction.
    pub fn relation_pattern(
        &self,
        name: impl Into<String>,
        props: impl Into<Option<Props>>,
        direction: Direction,
    ) -> RelationPattern {
        RelationPattern::new(name.into(), props.into(), direction, self.decorator.clone())
    }

    /// `-[name {props}]-`
    pub fn relation(
        &self,
        name: impl Into<String>,
        props: impl Into<Option<Props>>,
    ) -> RelationPattern {
        self.relation_pattern(name, props, Direction::Undirected)
    }

    /// `<-[name {props}]-`
    pub fn relation_left(
        &self,
        name: impl Into<String>,
        props: impl Into<Option<Props>>,
    ) -> RelationPattern {
        self.relation_pattern(name, props, Direction::Left)
    }

    /// `-[name {props}]->`
    pub fn relation_right(
        &self,
        name: impl Into<String>,
        props: impl Into<Option<Props>>,
    ) -> RelationPattern {
        self.relation_pattern(name, props, Direction::Right)
    }

    /// Render a property block for `clause`. See [`Decorator::decorate`].
    pub fn decorate_params(&self, clause: &Clause, props: Option<&Props>) -> String {
        self.decorator.decorate(clause, props)
    }

    // ------------------------------------------------------------------
    // Output
    // ------------------------------------------------------------------

    /// Rows appended so far.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check whether no rows were appended.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The final query text.
    pub fn render(&self) -> String {
        self.rows.join(" ")
    }
}

impl fmt::Debug for ClauseBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClauseBuilder")
            .field("rows", &self.rows)
            .field("decorator", &self.decorator)
            .finish()
    }
}

impl fmt::Display for ClauseBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Build a query with a fresh builder and return its text.
///
/// # Examples
///
/// ```
/// # use graphshape::{build, parts, BuilderConfig};
/// let query = build(BuilderConfig::default(), |q| {
///     let user = q.node("u:User", None);
///     q.match_(parts![user]).return_projection(["u"]);
/// });
/// assert_eq!(query, "MATCH (u:User) RETURN u");
/// ```
pub fn build<F>(config: BuilderConfig, f: F) -> String
where
    F: FnOnce(&mut ClauseBuilder),
{
    let mut builder = ClauseBuilder::with_config(config);
    f(&mut builder);
    builder.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cypher::generate::{FixedClock, FixedId};
    use crate::parts;

    fn fixed() -> ClauseBuilder {
        ClauseBuilder::new()
            .with_id_generator(FixedId::new("\"1\""))
            .with_clock(FixedClock(100))
    }

    #[test]
    fn test_add_raw_rows() {
        let mut q = fixed();
        q.add_raw("Test 1").add_raw("Test 2");
        assert_eq!(q.render(), "Test 1 Test 2");
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn test_render_two_rows() {
        let mut q = fixed();
        q.add_raw("MATCH (a)").add_raw("RETURN a");
        assert_eq!(q.render(), "MATCH (a) RETURN a");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(fixed().render(), "");
        assert!(fixed().is_empty());
    }

    #[test]
    fn test_add_clause_string() {
        let mut q = fixed();
        q.add_clause("TEST", "test parts");
        assert_eq!(q.render(), "TEST test parts");
    }

    #[test]
    fn test_add_clause_array_of_strings() {
        let mut q = fixed();
        q.add_clause("TEST", ["1", "2", "3"]);
        assert_eq!(q.render(), "TEST 123");
    }

    #[test]
    fn test_add_clause_tools_and_strings() {
        let mut q = fixed();
        let tool = crate::cypher::ClausePart::pattern(|clause: &Clause| {
            format!("{}-tool", clause.as_str().to_lowercase())
        });
        q.add_clause("TEST", vec![tool, "1".into(), "2".into()]);
        assert_eq!(q.render(), "TEST test-tool12");
    }

    #[test]
    fn test_add_clause_custom_separator() {
        let mut q = fixed();
        q.add_clause_with_separator("TEST", ["1", "2", "3"], ", ");
        assert_eq!(q.render(), "TEST 1, 2, 3");
    }

    #[test]
    fn test_add_clause_value_rejects_number() {
        let mut q = fixed();
        let result = q.add_clause_value("TEST", serde_json::json!(5), "");
        assert!(result.is_err());
        assert!(q.is_empty());
    }

    #[test]
    fn test_add_result_clause() {
        let mut q = fixed();
        q.add_result_clause(
            "TEST",
            vec![
                Projection::from("a"),
                Projection::from("b"),
                Projection::aliased("c", "d"),
            ],
        );
        assert_eq!(q.render(), "TEST a, b, c as d");
    }

    #[test]
    fn test_set_properties_adds_updated_at() {
        let mut q = fixed();
        q.set_properties("user", &Props::from([("name", "\"Test\""), ("score", "10")]));
        assert_eq!(
            q.render(),
            "SET user.name = \"Test\", user.score = 10, user.updatedAt = 100"
        );
    }

    #[test]
    fn test_set_properties_overwrites_given_updated_at() {
        let mut q = fixed();
        q.set_properties("n", &Props::from([("updatedAt", "1"), ("a", "2")]));
        assert_eq!(q.render(), "SET n.updatedAt = 100, n.a = 2");
    }

    #[test]
    fn test_node_with_params() {
        let q = fixed();
        let node = q.node("u:User", Props::from([("name", "\"Test\""), ("score", "10")]));
        let clause = Clause::from("TEST");
        assert_eq!(
            crate::cypher::Pattern::render(&node, &clause),
            "(u:User {name: \"Test\", score: 10})"
        );
    }

    #[test]
    fn test_node_without_params() {
        let q = fixed();
        let node = q.node("u:User", None);
        assert_eq!(
            crate::cypher::Pattern::render(&node, &Clause::from("TEST")),
            "(u:User)"
        );
    }

    #[test]
    fn test_node_in_create_gets_audit_fields() {
        let q = fixed();
        let node = q.node("u:User", Props::from([("name", "\"Test\""), ("score", "10")]));
        assert_eq!(
            crate::cypher::Pattern::render(&node, &Clause::Create),
            "(u:User {name: \"Test\", score: 10, uuid: \"1\", createdAt: 100, updatedAt: 100})"
        );
    }

    #[test]
    fn test_relation_right_variants() {
        let q = fixed();
        let with_params = q.relation_right(":TAGGED", Props::from([("param", "\"test\"")]));
        let bare = q.relation_right(":TAGGED", None);
        let test = Clause::from("TEST");
        use crate::cypher::Pattern;
        assert_eq!(with_params.render(&test), "-[:TAGGED {param: \"test\"}]->");
        assert_eq!(bare.render(&test), "-[:TAGGED]->");
        assert_eq!(
            bare.render(&Clause::Create),
            "-[:TAGGED {uuid: \"1\", createdAt: 100, updatedAt: 100}]->"
        );
    }

    #[test]
    fn test_full_query() {
        let mut q = fixed();
        let body = parts![
            q.node("u:User", Props::from([("name", "\"Marko\""), ("age", "10")])),
            q.relation_right(":PLAYED", None),
            q.node("g:Game", None),
        ];
        let created = parts![
            q.existing_node("u"),
            q.relation_right(":TAGGED", None),
            q.node(":Tag", Props::from([("label", "\"Interesting\"")])),
        ];
        q.match_(body).where_("g.score > 100").create(created);

        assert_eq!(
            q.render(),
            "MATCH (u:User {name: \"Marko\", age: 10})-[:PLAYED]->(g:Game) \
             WHERE g.score > 100 \
             CREATE (u)-[:TAGGED {uuid: \"1\", createdAt: 100, updatedAt: 100}]->\
             (:Tag {label: \"Interesting\", uuid: \"1\", createdAt: 100, updatedAt: 100})"
        );
    }

    #[test]
    fn test_next_separator() {
        let mut q = fixed();
        q.create("(a)").next().create("(b)");
        assert_eq!(q.render(), "CREATE (a) WITH COUNT(*) as count CREATE (b)");
    }

    #[test]
    fn test_fork_shares_sources_not_rows() {
        let mut q = fixed();
        q.add_raw("MATCH (n)");
        let forked = q.fork();
        assert!(forked.is_empty());
        assert_eq!(
            forked.decorate_params(&Clause::Create, None),
            " {uuid: \"1\", createdAt: 100, updatedAt: 100}"
        );
    }

    #[test]
    fn test_custom_config_property_names() {
        let config = BuilderConfig::builder()
            .id_property("id")
            .created_at_property("created")
            .updated_at_property("modified")
            .build();
        let mut q = ClauseBuilder::with_config(config)
            .with_id_generator(FixedId::new("7"))
            .with_clock(FixedClock(9));
        let node = q.node("n", None);
        q.create(parts![node]).set_properties("n", &Props::new());
        assert_eq!(
            q.render(),
            "CREATE (n {id: 7, created: 9, modified: 9}) SET n.modified = 9"
        );
    }
}
