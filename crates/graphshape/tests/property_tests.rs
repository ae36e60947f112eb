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

//! Property-based tests for the builder and the serializer.
//!
//! Test coverage:
//! - Collapse chain length and ordering
//! - Collapse of branching trees
//! - Path replacement and lookup
//! - Creation stamping never overrides supplied values
//! - Quoting and identifier validation

use graphshape::cypher::{escape_string, is_valid_identifier, quote_string, FixedClock, FixedId};
use graphshape::{
    parts, ClauseBuilder, FieldValue, PathTarget, Props, Serializer, ShapeNode, ShapeRoot,
};
use proptest::prelude::*;

fn fixed() -> ClauseBuilder {
    ClauseBuilder::new()
        .with_id_generator(FixedId::new("\"1\""))
        .with_clock(FixedClock(100))
}

/// `root -> n1 -> n2 -> ... -> n{depth}`, each node holding one expression.
fn chain(depth: usize, array: bool) -> ShapeNode {
    let mut node = ShapeNode::new(format!("n{}", depth)).field("v", format!("n{}.v", depth));
    for level in (1..depth).rev() {
        let child: FieldValue = if array { [node].into() } else { node.into() };
        node = ShapeNode::new(format!("n{}", level))
            .field("v", format!("n{}.v", level))
            .field("next", child);
    }
    if depth == 0 {
        return ShapeNode::new("root").field("v", "root.v");
    }
    ShapeNode::new("root").field("v", "root.v").field("next", node)
}

/// Shape of a generated tree: each child is nested as an object or an array.
#[derive(Debug, Clone)]
struct Tree {
    children: Vec<(bool, Tree)>,
}

fn tree() -> impl Strategy<Value = Tree> {
    let leaf = Just(Tree { children: vec![] });
    leaf.prop_recursive(4, 24, 3, |inner| {
        prop::collection::vec((any::<bool>(), inner), 0..4).prop_map(|children| Tree { children })
    })
}

/// Builds the shape for `tree`, naming nodes `n0`, `n1`, ... in pre-order
/// and recording each node's parent.
fn grow(tree: &Tree, parent: Option<&str>, names: &mut Vec<(String, Option<String>)>) -> ShapeNode {
    let var = format!("n{}", names.len());
    names.push((var.clone(), parent.map(str::to_string)));

    let mut node = ShapeNode::new(var.clone()).field("v", format!("{}.v", var));
    for (i, (array, child)) in tree.children.iter().enumerate() {
        let child = grow(child, Some(&var), names);
        let value: FieldValue = if *array { [child].into() } else { child.into() };
        node = node.field(format!("c{}", i), value);
    }
    node
}

/// Bare variables carried by a WITH row, before its aliased expression.
fn carried(row: &str) -> Vec<&str> {
    row.trim_start_matches("WITH ")
        .split(", ")
        .take_while(|t| t.len() > 1 && t.starts_with('n') && t[1..].chars().all(|c| c.is_ascii_digit()))
        .collect()
}

fn ident() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}"
}

// ============================================================================
// Serializer Properties
// ============================================================================

proptest! {
    /// A chain of `depth` nested nodes needs exactly `depth` WITH rows.
    #[test]
    fn prop_chain_emits_one_with_per_nested_node(depth in 0usize..8, array in any::<bool>()) {
        let mut root = ShapeRoot::from(chain(depth, array));
        let mut q = ClauseBuilder::new();
        Serializer::new(&mut q).serialize(&mut root, &[] as &[&str]).unwrap();

        let withs = q.rows().iter().filter(|r| r.starts_with("WITH ")).count();
        prop_assert_eq!(withs, depth);
        prop_assert_eq!(q.len(), depth + 1);
        prop_assert!(q.rows().last().unwrap().starts_with("RETURN "));
    }

    /// The deepest node collapses first and the root is never aliased.
    #[test]
    fn prop_chain_collapses_deepest_first(depth in 1usize..8) {
        let mut root = ShapeRoot::from(chain(depth, false));
        let mut q = ClauseBuilder::new();
        Serializer::new(&mut q).serialize(&mut root, &[] as &[&str]).unwrap();

        let deepest_alias = format!(" as n{}", depth);
        prop_assert!(q.rows()[0].ends_with(&deepest_alias));
        prop_assert!(q.rows().iter().all(|r| !r.ends_with(" as root")));
        prop_assert!(!root.node().has_nested());
    }

    /// Resolvables are sorted by non-increasing depth with the root last.
    #[test]
    fn prop_resolvables_sorted(depth in 0usize..8, array in any::<bool>()) {
        let root = ShapeRoot::from(chain(depth, array));
        let found = Serializer::find_resolvables(&root);

        prop_assert_eq!(found.len(), depth + 1);
        prop_assert!(found.windows(2).all(|w| w[0].depth() >= w[1].depth()));
        prop_assert_eq!(found.last().unwrap().depth(), 0);
    }

    /// Trailing rows sit between the collapse chain and the RETURN.
    #[test]
    fn prop_trailing_rows_precede_return(rows in prop::collection::vec("LIMIT [0-9]{1,3}", 0..4)) {
        let mut root = ShapeRoot::from(chain(2, true));
        let mut q = ClauseBuilder::new();
        Serializer::new(&mut q).serialize(&mut root, &rows).unwrap();

        let n = q.len();
        prop_assert_eq!(&q.rows()[n - 1 - rows.len()..n - 1], rows.as_slice());
    }
}

proptest! {
    /// Every nested node of a branching tree gets exactly one WITH, before
    /// its parent's, and stops being carried once its parent absorbs it.
    #[test]
    fn prop_branching_tree_collapses_each_node_once(tree in tree()) {
        let mut names = Vec::new();
        let mut root = ShapeRoot::from(grow(&tree, None, &mut names));
        let mut q = ClauseBuilder::new();
        Serializer::new(&mut q).serialize(&mut root, &[] as &[&str]).unwrap();

        let rows = q.rows();
        let last = rows.len() - 1;
        prop_assert_eq!(rows.iter().filter(|r| r.starts_with("WITH ")).count(), names.len() - 1);
        prop_assert_eq!(rows.iter().filter(|r| r.starts_with("RETURN ")).count(), 1);
        prop_assert!(rows[last].starts_with("RETURN "));

        let alias_row = |var: &str| {
            let suffix = format!(" as {}", var);
            rows.iter().position(|r| r.starts_with("WITH ") && r.ends_with(&suffix))
        };

        for (var, parent) in names.iter().skip(1) {
            let own = alias_row(var);
            prop_assert!(own.is_some(), "{} never collapsed", var);
            let own = own.unwrap();

            let parent_row = match parent.as_deref() {
                Some("n0") => last,
                Some(p) => alias_row(p).unwrap(),
                None => unreachable!(),
            };
            prop_assert!(own < parent_row);

            let in_map = format!(": {},", var);
            let in_map_end = format!(": {}}}", var);
            prop_assert!(rows[parent_row].contains(&in_map) || rows[parent_row].contains(&in_map_end));

            for row in rows[parent_row..].iter().filter(|r| r.starts_with("WITH ")) {
                prop_assert!(!carried(row).contains(&var.as_str()), "{} carried in {}", var, row);
            }
        }
        prop_assert!(!root.node().has_nested());
    }
}

// ============================================================================
// Path Properties
// ============================================================================

proptest! {
    /// A replaced field reads back as the new expression.
    #[test]
    fn prop_replace_then_get(depth in 1usize..6, expr in "[a-z]{1,6}\\.[a-z]{1,6}") {
        let mut node = chain(depth, false);
        let path: Vec<&str> = std::iter::repeat("next").take(depth).collect();

        node.replace_at_path(&path, expr.as_str()).unwrap();
        prop_assert_eq!(node.get_at_path(&path), Some(PathTarget::Expr(expr.as_str())));
    }

    /// Paths through missing fields never resolve.
    #[test]
    fn prop_missing_path_is_none(name in "[A-Z]{1,6}") {
        let node = chain(3, true);
        prop_assert!(node.get_at_path(&[name.as_str()]).is_none());
        prop_assert!(node.get_at_path(&["next", name.as_str(), "v"]).is_none());
    }
}

// ============================================================================
// Builder Properties
// ============================================================================

proptest! {
    /// Supplied audit values survive CREATE stamping.
    #[test]
    fn prop_create_keeps_supplied_id(id in "[0-9]{1,6}") {
        let mut q = fixed();
        let node = q.node("n", Props::from([("uuid", id.clone())]));
        q.create(parts![node]);

        let expected = format!("CREATE (n {{uuid: {}, createdAt: 100, updatedAt: 100}})", id);
        prop_assert_eq!(q.render(), expected);
    }

    /// Non-create clauses render exactly the given properties.
    #[test]
    fn prop_match_renders_props_verbatim(keys in prop::collection::btree_set(ident(), 1..5)) {
        let props: Props = keys.iter().map(|k| (k.clone(), format!("${}", k))).collect();
        let mut q = fixed();
        let node = q.node("n", props);
        q.match_(parts![node]);

        let body = keys
            .iter()
            .map(|k| format!("{}: ${}", k, k))
            .collect::<Vec<_>>()
            .join(", ");
        prop_assert_eq!(q.render(), format!("MATCH (n {{{}}})", body));
    }

    /// SET always ends with the update timestamp.
    #[test]
    fn prop_set_ends_with_timestamp(keys in prop::collection::btree_set(ident(), 0..5)) {
        let props: Props = keys.iter().map(|k| (k.clone(), "1")).collect();
        let mut q = fixed();
        q.set_properties("n", &props);

        let rendered = q.render();
        prop_assert!(rendered.starts_with("SET "));
        let suffix_ok = rendered.ends_with("n.updatedAt = 100") || keys.contains("updatedAt");
        prop_assert!(suffix_ok);
    }
}

// ============================================================================
// Escaping Properties
// ============================================================================

proptest! {
    /// Quoted strings are wrapped in double quotes.
    #[test]
    fn prop_quote_string_format(s in ".*") {
        let quoted = quote_string(&s);
        prop_assert!(quoted.starts_with('"'));
        prop_assert!(quoted.ends_with('"'));
    }

    /// Safe strings pass through unchanged.
    #[test]
    fn prop_escape_safe_string_unchanged(s in "[a-zA-Z0-9 ]*") {
        let escaped = escape_string(&s);
        prop_assert_eq!(escaped.as_ref(), s.as_str());
    }

    /// Generated identifiers validate.
    #[test]
    fn prop_identifiers_valid(s in ident()) {
        prop_assert!(is_valid_identifier(&s));
    }

    /// Leading digits never validate.
    #[test]
    fn prop_leading_digit_invalid(s in "[0-9][a-z0-9]{0,6}") {
        prop_assert!(!is_valid_identifier(&s));
    }
}
