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

//! Expression renderers: map literals, `CASE` expressions and projections.

use super::props::MapValue;

/// Render a map literal such as `{a: 1, b: {x: 2}}`.
///
/// Nested maps recurse; expression values are emitted unescaped. A bare
/// expression renders as itself.
pub fn map_literal(value: &MapValue) -> String {
    match value {
        MapValue::Expr(expr) => expr.clone(),
        MapValue::Map(entries) => {
            let pairs: Vec<String> = entries
                .iter()
                .map(|(k, v)| format!("{}: {}", k, map_literal(v)))
                .collect();
            format!("{{{}}}", pairs.join(", "))
        }
    }
}

/// One `WHEN .. THEN ..` branch of a `CASE` expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseBranch {
    /// Condition expression.
    pub when: String,
    /// Result expression.
    pub then: String,
}

impl CaseBranch {
    /// Create a new branch.
    pub fn new(when: impl Into<String>, then: impl Into<String>) -> Self {
        Self {
            when: when.into(),
            then: then.into(),
        }
    }
}

/// Render `CASE WHEN w THEN t ... ELSE e END`.
///
/// The `ELSE` part is omitted when `else_expr` is `None`.
pub fn conditional(branches: &[CaseBranch], else_expr: Option<&str>) -> String {
    let mut body = branches
        .iter()
        .map(|b| format!("WHEN {} THEN {}", b.when, b.then))
        .collect::<Vec<_>>()
        .join(" ");

    if let Some(else_expr) = else_expr {
        body.push_str(" ELSE ");
        body.push_str(else_expr);
    }

    format!("CASE {} END", body)
}

/// Aggregate `expr` into a list, or yield `[]` when `condition_var` is null.
///
/// This is the idiom that turns an `OPTIONAL MATCH` on a one-to-many
/// relationship into a possibly empty list.
pub fn collect_or_empty(condition_var: &str, expr: &str) -> String {
    conditional(
        &[CaseBranch::new(
            format!("{} IS NOT NULL", condition_var),
            format!("COLLECT({})", expr),
        )],
        Some("[]"),
    )
}

/// One item of a `WITH` or `RETURN` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Projection {
    /// Literal projection text, e.g. a variable name.
    Expr(String),
    /// `expr as alias`.
    Aliased {
        /// Projected expression.
        expr: String,
        /// Name bound to the expression.
        alias: String,
    },
}

impl Projection {
    /// Create an `expr as alias` projection.
    pub fn aliased(expr: impl Into<String>, alias: impl Into<String>) -> Self {
        Projection::Aliased {
            expr: expr.into(),
            alias: alias.into(),
        }
    }

    /// The name a later clause uses to refer to this projection.
    pub fn binding(&self) -> &str {
        match self {
            Projection::Expr(expr) => expr,
            Projection::Aliased { alias, .. } => alias,
        }
    }

    /// Render the projection text.
    pub fn render(&self) -> String {
        match self {
            Projection::Expr(expr) => expr.clone(),
            Projection::Aliased { expr, alias } => format!("{} as {}", expr, alias),
        }
    }
}

impl From<&str> for Projection {
    fn from(v: &str) -> Self {
        Projection::Expr(v.to_string())
    }
}

impl From<String> for Projection {
    fn from(v: String) -> Self {
        Projection::Expr(v)
    }
}

impl From<&String> for Projection {
    fn from(v: &String) -> Self {
        Projection::Expr(v.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_literal_nested() {
        let value = MapValue::map([
            ("a", MapValue::from(1)),
            ("b", MapValue::from(2)),
            (
                "c",
                MapValue::map([
                    ("x", MapValue::from("\"3\"")),
                    ("y", MapValue::map([("p", 4), ("q", 5)])),
                ]),
            ),
        ]);
        assert_eq!(
            map_literal(&value),
            "{a: 1, b: 2, c: {x: \"3\", y: {p: 4, q: 5}}}"
        );
    }

    #[test]
    fn test_map_literal_empty() {
        assert_eq!(map_literal(&MapValue::Map(Vec::new())), "{}");
    }

    #[test]
    fn test_map_literal_bare_expression() {
        assert_eq!(map_literal(&MapValue::from("n.name")), "n.name");
    }

    #[test]
    fn test_conditional() {
        let result = conditional(
            &[CaseBranch::new("1", "2"), CaseBranch::new("3", "4")],
            Some("5"),
        );
        assert_eq!(result, "CASE WHEN 1 THEN 2 WHEN 3 THEN 4 ELSE 5 END");
    }

    #[test]
    fn test_conditional_without_else() {
        let result = conditional(&[CaseBranch::new("a", "b")], None);
        assert_eq!(result, "CASE WHEN a THEN b END");
    }

    #[test]
    fn test_collect_or_empty() {
        assert_eq!(
            collect_or_empty("test", "test.name"),
            "CASE WHEN test IS NOT NULL THEN COLLECT(test.name) ELSE [] END"
        );
    }

    #[test]
    fn test_projection_render() {
        assert_eq!(Projection::from("a").render(), "a");
        assert_eq!(Projection::aliased("c", "d").render(), "c as d");
        assert_eq!(Projection::aliased("c", "d").binding(), "d");
    }
}
