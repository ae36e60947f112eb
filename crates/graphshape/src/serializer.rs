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

//! Compile nested result shapes into a chain of projections.
//!
//! Cypher cannot build a nested document in a single `RETURN` when the nested
//! parts need aggregation. The serializer folds the tree bottom-up instead:
//! every nested node becomes one `WITH` that binds its map (or its collected
//! list of maps) to the node's variable, and the parent then refers to that
//! variable. The fully collapsed root is returned last.
//!
//! # Example
//!
//! ```
//! # use graphshape::{ClauseBuilder, Serializer, ShapeNode, ShapeRoot};
//! let mut q = ClauseBuilder::new();
//! let mut root = ShapeRoot::from(
//!     ShapeNode::new("root")
//!         .field("a", "root.a")
//!         .field("b", ShapeNode::new("b").field("x", "b.x").field("y", "b.y")),
//! );
//!
//! Serializer::new(&mut q).serialize(&mut root, &[] as &[&str])?;
//! assert_eq!(
//!     q.render(),
//!     "WITH root, {x: b.x, y: b.y} as b RETURN {a: root.a, b: b}"
//! );
//! # Ok::<(), graphshape::ShapeError>(())
//! ```

use tracing::debug;

use crate::cypher::{collect_or_empty, map_literal, ClauseBuilder, Projection};
use crate::error::{Result, ShapeError};
use crate::shape::{FieldValue, PathTarget, ShapeNode, ShapeRoot};

/// Whether a collapsed node yields one map or a list of maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvableKind {
    /// A single map.
    Object,
    /// `COLLECT` of maps, or `[]` when nothing matched.
    Array,
}

/// A node scheduled for collapse into its variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolvable {
    /// Object or one-to-many.
    pub kind: ResolvableKind,
    /// The variable the collapsed value is bound to.
    pub variable: String,
    /// Field names leading from the root to the node; empty for the root.
    pub path: Vec<String>,
}

impl Resolvable {
    /// Nesting depth of the node.
    pub fn depth(&self) -> usize {
        self.path.len()
    }
}

/// Drives a [`ClauseBuilder`] to emit the collapse chain for a shape.
pub struct Serializer<'a> {
    builder: &'a mut ClauseBuilder,
}

impl<'a> Serializer<'a> {
    /// Create a serializer writing into `builder`.
    pub fn new(builder: &'a mut ClauseBuilder) -> Self {
        Self { builder }
    }

    /// The sink builder.
    pub fn builder(&mut self) -> &mut ClauseBuilder {
        self.builder
    }

    /// List nested nodes in discovery order.
    ///
    /// Children are recorded before the field that holds them, and the root
    /// comes last.
    pub fn discover(root: &ShapeRoot) -> Vec<Resolvable> {
        let mut found = Vec::new();
        let mut path = Vec::new();
        discover_fields(root.node(), &mut path, &mut found);

        let kind = if root.is_array() {
            ResolvableKind::Array
        } else {
            ResolvableKind::Object
        };
        found.push(Resolvable {
            kind,
            variable: root.node().variable().to_string(),
            path: Vec::new(),
        });
        found
    }

    /// List nested nodes deepest first.
    ///
    /// The sort is stable, so nodes at the same depth keep discovery order and
    /// every child precedes its parent. The root is always last.
    pub fn find_resolvables(root: &ShapeRoot) -> Vec<Resolvable> {
        let mut resolvables = Self::discover(root);
        sort_deepest_first(&mut resolvables);
        resolvables
    }

    /// The expression a node collapses into.
    pub fn resolved_expr(kind: ResolvableKind, node: &ShapeNode) -> String {
        let map = map_literal(&node.to_map_value());
        match kind {
            ResolvableKind::Object => map,
            ResolvableKind::Array => collect_or_empty(node.variable(), &map),
        }
    }

    /// Emit the collapse chain for `root`, then `trailing` rows, then the
    /// final `RETURN`.
    ///
    /// `root` is rewritten in place: every nested field ends up holding the
    /// variable its value was bound to.
    ///
    /// # Errors
    ///
    /// Returns `ShapeError::InvalidPath` if a discovered path stops resolving
    /// to a node while the tree is rewritten. This cannot happen for trees
    /// built through the public API.
    pub fn serialize<S: AsRef<str>>(&mut self, root: &mut ShapeRoot, trailing: &[S]) -> Result<()> {
        let discovered = Self::discover(root);

        // Seeded before sorting; tie order between siblings depends on it.
        let mut variables: Vec<String> = discovered.iter().map(|r| r.variable.clone()).collect();

        let mut pending = discovered;
        sort_deepest_first(&mut pending);
        let root_resolvable = pending.pop().ok_or_else(|| {
            ShapeError::InvalidShape("a shape always has a root".to_string())
        })?;

        debug!(
            "Serializing shape '{}': {} nested node(s)",
            root_resolvable.variable,
            pending.len()
        );

        for resolvable in pending {
            let (absorbed, expr) = {
                let node = node_at(root, &resolvable.path)?;
                let absorbed: Vec<String> = node.expr_values().map(str::to_string).collect();
                (absorbed, Self::resolved_expr(resolvable.kind, node))
            };

            variables.retain(|v| !absorbed.contains(v));
            if let Some(pos) = variables.iter().position(|v| *v == resolvable.variable) {
                variables.remove(pos);
            }

            let mut parts: Vec<Projection> = variables.iter().map(Projection::from).collect();
            parts.push(Projection::aliased(expr, resolvable.variable.clone()));

            debug!(
                "Collapsing '{}' at depth {} with {} carried variable(s)",
                resolvable.variable,
                resolvable.depth(),
                variables.len()
            );
            self.builder.with_projection(parts);

            root.node_mut().replace_at_path(
                &resolvable.path,
                FieldValue::Expr(resolvable.variable.clone()),
            )?;
            variables.push(resolvable.variable);
        }

        for row in trailing {
            self.builder.add_raw(row.as_ref());
        }

        let final_expr = Self::resolved_expr(root_resolvable.kind, root.node());
        self.builder.return_projection([final_expr]);
        Ok(())
    }
}

fn discover_fields(node: &ShapeNode, path: &mut Vec<String>, found: &mut Vec<Resolvable>) {
    for (name, value) in node.fields() {
        let (kind, child) = match value {
            FieldValue::Expr(_) => continue,
            FieldValue::Node(child) => (ResolvableKind::Object, child),
            FieldValue::Many(child) => (ResolvableKind::Array, child),
        };

        path.push(name.clone());
        discover_fields(child, path, found);
        found.push(Resolvable {
            kind,
            variable: child.variable().to_string(),
            path: path.clone(),
        });
        path.pop();
    }
}

fn sort_deepest_first(resolvables: &mut [Resolvable]) {
    resolvables.sort_by(|a, b| b.depth().cmp(&a.depth()));
}

fn node_at<'t>(root: &'t ShapeRoot, path: &[String]) -> Result<&'t ShapeNode> {
    match root.node().get_at_path(path) {
        Some(PathTarget::Node(node)) => Ok(node),
        _ => Err(ShapeError::InvalidPath(path.join("."))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(segments: &[&str]) -> Vec<String> {
        segments.iter().map(|s| s.to_string()).collect()
    }

    fn resolvable(kind: ResolvableKind, variable: &str, segments: &[&str]) -> Resolvable {
        Resolvable {
            kind,
            variable: variable.to_string(),
            path: path(segments),
        }
    }

    fn main_shape() -> ShapeNode {
        let c = ShapeNode::new("c").field("x", "1");
        let dyq = ShapeNode::new("dyq").field("w", "12");
        let dy = ShapeNode::new("dy").field("p", "3").field("q", [dyq]);
        let d = ShapeNode::new("d").field("x", "1").field("y", dy);

        ShapeNode::new("test")
            .field("a", "1")
            .field("b", "2")
            .field("c", c)
            .field("d", [d])
    }

    fn serialize(mut root: ShapeRoot) -> String {
        let mut q = ClauseBuilder::new();
        Serializer::new(&mut q)
            .serialize(&mut root, &[] as &[&str])
            .unwrap();
        q.render()
    }

    #[test]
    fn test_discover_order() {
        let found = Serializer::discover(&ShapeRoot::from(main_shape()));
        let variables: Vec<&str> = found.iter().map(|r| r.variable.as_str()).collect();
        assert_eq!(variables, vec!["c", "dyq", "dy", "d", "test"]);
    }

    #[test]
    fn test_find_resolvables_in_object() {
        let result = Serializer::find_resolvables(&ShapeRoot::from(main_shape()));
        assert_eq!(
            result,
            vec![
                resolvable(ResolvableKind::Array, "dyq", &["d", "y", "q"]),
                resolvable(ResolvableKind::Object, "dy", &["d", "y"]),
                resolvable(ResolvableKind::Object, "c", &["c"]),
                resolvable(ResolvableKind::Array, "d", &["d"]),
                resolvable(ResolvableKind::Object, "test", &[]),
            ]
        );
    }

    #[test]
    fn test_find_resolvables_in_array() {
        let result = Serializer::find_resolvables(&ShapeRoot::from([main_shape()]));
        assert_eq!(
            result.last(),
            Some(&resolvable(ResolvableKind::Array, "test", &[]))
        );
        assert_eq!(result.len(), 5);
    }

    #[test]
    fn test_flat_object() {
        let root = ShapeRoot::from(ShapeNode::new("test").field("a", "test.a").field("b", "test.b"));
        assert_eq!(serialize(root), "RETURN {a: test.a, b: test.b}");
    }

    #[test]
    fn test_flat_array() {
        let root = ShapeRoot::from([ShapeNode::new("t").field("name", "t.name")]);
        assert_eq!(
            serialize(root),
            "RETURN CASE WHEN t IS NOT NULL THEN COLLECT({name: t.name}) ELSE [] END"
        );
    }

    #[test]
    fn test_siblings_at_same_depth() {
        let root = ShapeRoot::from(main_shape());
        assert_eq!(
            serialize(root),
            "WITH c, dy, d, test, CASE WHEN dyq IS NOT NULL THEN COLLECT({w: 12}) ELSE [] END as dyq \
             WITH c, d, test, {p: 3, q: dyq} as dy \
             WITH d, test, dy, {x: 1} as c \
             WITH test, c, CASE WHEN d IS NOT NULL THEN COLLECT({x: 1, y: dy}) ELSE [] END as d \
             RETURN {a: 1, b: 2, c: c, d: d}"
        );
    }

    #[test]
    fn test_tree_is_rewritten_in_place() {
        let mut root = ShapeRoot::from(main_shape());
        let mut q = ClauseBuilder::new();
        Serializer::new(&mut q).serialize(&mut root, &[] as &[&str]).unwrap();

        assert!(!root.node().has_nested());
        assert_eq!(root.node().get("c"), Some(&FieldValue::Expr("c".to_string())));
        assert_eq!(root.node().get("d"), Some(&FieldValue::Expr("d".to_string())));
    }

    #[test]
    fn test_trailing_rows_before_return() {
        let mut root = ShapeRoot::from(
            ShapeNode::new("u")
                .field("name", "u.name")
                .field("tags", [ShapeNode::new("t").field("label", "t.label")]),
        );
        let mut q = ClauseBuilder::new();
        q.match_("(u:User)").optional_match("(u)-[:TAGGED]->(t:Tag)");
        Serializer::new(&mut q)
            .serialize(&mut root, &["ORDER BY u.name", "LIMIT 10"])
            .unwrap();

        assert_eq!(
            q.render(),
            "MATCH (u:User) OPTIONAL MATCH (u)-[:TAGGED]->(t:Tag) \
             WITH u, CASE WHEN t IS NOT NULL THEN COLLECT({label: t.label}) ELSE [] END as t \
             ORDER BY u.name LIMIT 10 \
             RETURN {name: u.name, tags: t}"
        );
    }
}
