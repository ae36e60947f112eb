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

//! Result-shape trees.
//!
//! A [`ShapeNode`] names a bound pattern variable and describes the fields the
//! caller wants back for it. Fields hold plain expressions, nested nodes, or a
//! one-to-many template:
//!
//! ```
//! # use graphshape::{ShapeNode, PathTarget};
//! let shape = ShapeNode::new("user")
//!     .field("name", "user.name")
//!     .field("address", ShapeNode::new("address").field("city", "address.city"))
//!     .field("posts", [ShapeNode::new("post").field("title", "post.title")]);
//!
//! assert_eq!(
//!     shape.get_at_path(&["posts", "title"]),
//!     Some(PathTarget::Expr("post.title"))
//! );
//! ```
//!
//! Trees own their children, so sharing and cycles cannot be expressed.

use serde_json::Value;

use crate::cypher::escape::is_valid_identifier;
use crate::cypher::MapValue;
use crate::error::{Result, ShapeError};

/// The value of one output field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Expression text, e.g. `user.name`.
    Expr(String),
    /// A nested object bound to its own variable.
    Node(ShapeNode),
    /// A one-to-many field; the node is the template for each element.
    Many(ShapeNode),
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Expr(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Expr(v)
    }
}

impl From<ShapeNode> for FieldValue {
    fn from(v: ShapeNode) -> Self {
        FieldValue::Node(v)
    }
}

impl From<[ShapeNode; 1]> for FieldValue {
    fn from([v]: [ShapeNode; 1]) -> Self {
        FieldValue::Many(v)
    }
}

/// What a path resolves to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathTarget<'a> {
    /// A node, either a nested object or the template of a one-to-many field.
    Node(&'a ShapeNode),
    /// An expression field.
    Expr(&'a str),
}

/// A bound variable plus the ordered fields to project for it.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeNode {
    variable: String,
    fields: Vec<(String, FieldValue)>,
}

impl ShapeNode {
    /// Create a node with no fields.
    pub fn new(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            fields: Vec::new(),
        }
    }

    /// Add or replace a field, returning the node.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Add a field, or overwrite it in place when the name exists.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    /// The pattern variable this node is bound to.
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[(String, FieldValue)] {
        &self.fields
    }

    /// Look up a field by name.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut FieldValue> {
        self.fields
            .iter_mut()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    /// Expression texts held directly by this node's fields.
    pub fn expr_values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().filter_map(|(_, v)| match v {
            FieldValue::Expr(e) => Some(e.as_str()),
            _ => None,
        })
    }

    /// Whether any field holds a nested node or a one-to-many template.
    pub fn has_nested(&self) -> bool {
        self.fields
            .iter()
            .any(|(_, v)| !matches!(v, FieldValue::Expr(_)))
    }

    /// Resolve a path of field names.
    ///
    /// The empty path yields this node. One-to-many fields are stepped
    /// through into their template. A path that continues past an expression
    /// field, or names a missing field, yields `None`.
    pub fn get_at_path<S: AsRef<str>>(&self, path: &[S]) -> Option<PathTarget<'_>> {
        let Some((first, rest)) = path.split_first() else {
            return Some(PathTarget::Node(self));
        };

        match self.get(first.as_ref())? {
            FieldValue::Node(node) | FieldValue::Many(node) => node.get_at_path(rest),
            FieldValue::Expr(expr) if rest.is_empty() => Some(PathTarget::Expr(expr)),
            FieldValue::Expr(_) => None,
        }
    }

    fn node_at_path_mut<S: AsRef<str>>(&mut self, path: &[S]) -> Option<&mut ShapeNode> {
        let Some((first, rest)) = path.split_first() else {
            return Some(self);
        };

        match self.get_mut(first.as_ref())? {
            FieldValue::Node(node) | FieldValue::Many(node) => node.node_at_path_mut(rest),
            FieldValue::Expr(_) => None,
        }
    }

    /// Overwrite the field addressed by `path`.
    ///
    /// The parent is resolved from all but the last segment; the last segment
    /// is then set on it. The root itself cannot be replaced.
    ///
    /// # Errors
    ///
    /// Returns `ShapeError::InvalidPath` for an empty path or when the parent
    /// does not resolve to a node.
    pub fn replace_at_path<S: AsRef<str>>(
        &mut self,
        path: &[S],
        value: impl Into<FieldValue>,
    ) -> Result<()> {
        let Some((last, parent)) = path.split_last() else {
            return Err(ShapeError::InvalidPath(
                "cannot replace the root of a shape".to_string(),
            ));
        };

        let node = self
            .node_at_path_mut(parent)
            .ok_or_else(|| ShapeError::InvalidPath(display_path(path)))?;
        node.insert(last.as_ref(), value);
        Ok(())
    }

    /// The map-literal value of this node's fields.
    ///
    /// Nested nodes and templates are inlined as nested maps; after
    /// serialization has collapsed them only expressions remain.
    pub fn to_map_value(&self) -> MapValue {
        MapValue::Map(
            self.fields
                .iter()
                .map(|(k, v)| {
                    let value = match v {
                        FieldValue::Expr(e) => MapValue::Expr(e.clone()),
                        FieldValue::Node(n) | FieldValue::Many(n) => n.to_map_value(),
                    };
                    (k.clone(), value)
                })
                .collect(),
        )
    }

    /// Parse a node from its JSON description.
    ///
    /// The expected form is `{"variable": "name", "fields": {...}}` where each
    /// field is a string expression, a scalar (used as literal text), a nested
    /// node object, or a one-element array holding a node object.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(mut object) = value else {
            return Err(ShapeError::InvalidShape(
                "a shape node must be a JSON object".to_string(),
            ));
        };

        let variable = match object.remove("variable") {
            Some(Value::String(v)) if is_valid_identifier(&v) => v,
            Some(Value::String(v)) => {
                return Err(ShapeError::InvalidShape(format!(
                    "'{}' is not a valid variable name",
                    v
                )))
            }
            _ => {
                return Err(ShapeError::InvalidShape(
                    "a shape node needs a string 'variable'".to_string(),
                ))
            }
        };

        let mut node = ShapeNode::new(variable);
        match object.remove("fields") {
            None => {}
            Some(Value::Object(fields)) => {
                for (name, value) in fields {
                    let field = field_from_value(&name, value)?;
                    node.fields.push((name, field));
                }
            }
            Some(_) => {
                return Err(ShapeError::InvalidShape(format!(
                    "'fields' of '{}' must be an object",
                    node.variable
                )))
            }
        }

        Ok(node)
    }
}

fn field_from_value(name: &str, value: Value) -> Result<FieldValue> {
    match value {
        Value::String(expr) => Ok(FieldValue::Expr(expr)),
        Value::Number(n) => Ok(FieldValue::Expr(n.to_string())),
        Value::Bool(b) => Ok(FieldValue::Expr(b.to_string())),
        Value::Null => Ok(FieldValue::Expr("null".to_string())),
        Value::Object(_) => Ok(FieldValue::Node(ShapeNode::from_value(value)?)),
        Value::Array(mut items) => {
            if items.len() != 1 {
                return Err(ShapeError::InvalidShape(format!(
                    "array field '{}' must hold exactly one template, found {}",
                    name,
                    items.len()
                )));
            }
            Ok(FieldValue::Many(ShapeNode::from_value(items.remove(0))?))
        }
    }
}

fn display_path<S: AsRef<str>>(path: &[S]) -> String {
    path.iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join(".")
}

/// The top of a shape: a single object or a one-to-many result.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeRoot {
    /// Return one object.
    Object(ShapeNode),
    /// Collect the root into a list.
    Array(ShapeNode),
}

impl ShapeRoot {
    /// The root node.
    pub fn node(&self) -> &ShapeNode {
        match self {
            ShapeRoot::Object(node) | ShapeRoot::Array(node) => node,
        }
    }

    /// The root node, mutably.
    pub fn node_mut(&mut self) -> &mut ShapeNode {
        match self {
            ShapeRoot::Object(node) | ShapeRoot::Array(node) => node,
        }
    }

    /// Consume the root and return its node.
    pub fn into_node(self) -> ShapeNode {
        match self {
            ShapeRoot::Object(node) | ShapeRoot::Array(node) => node,
        }
    }

    /// Whether the result is a list.
    pub fn is_array(&self) -> bool {
        matches!(self, ShapeRoot::Array(_))
    }

    /// Parse a root from JSON text: a node object, or a one-element array
    /// holding a node object.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(s)?;
        Self::try_from(value)
    }
}

impl TryFrom<Value> for ShapeRoot {
    type Error = ShapeError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Array(mut items) => {
                if items.len() != 1 {
                    return Err(ShapeError::InvalidShape(format!(
                        "an array root must hold exactly one template, found {}",
                        items.len()
                    )));
                }
                Ok(ShapeRoot::Array(ShapeNode::from_value(items.remove(0))?))
            }
            other => Ok(ShapeRoot::Object(ShapeNode::from_value(other)?)),
        }
    }
}

impl From<ShapeNode> for ShapeRoot {
    fn from(node: ShapeNode) -> Self {
        ShapeRoot::Object(node)
    }
}

impl From<[ShapeNode; 1]> for ShapeRoot {
    fn from([node]: [ShapeNode; 1]) -> Self {
        ShapeRoot::Array(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn nested() -> ShapeNode {
        ShapeNode::new("test")
            .field("a", "1")
            .field(
                "b",
                ShapeNode::new("test").field("c", ShapeNode::new("test").field("d", "test-d")),
            )
            .field(
                "e",
                [ShapeNode::new("test").field("f", [ShapeNode::new("test").field("g", "test-g")])],
            )
    }

    #[test]
    fn test_get_direct_property() {
        let node = ShapeNode::new("test").field("a", "1").field("b", "2");
        assert_eq!(node.get_at_path(&["a"]), Some(PathTarget::Expr("1")));
    }

    #[test]
    fn test_get_nested_properties() {
        let node = nested();
        assert_eq!(
            node.get_at_path(&["b", "c", "d"]),
            Some(PathTarget::Expr("test-d"))
        );
        assert_eq!(
            node.get_at_path(&["e", "f", "g"]),
            Some(PathTarget::Expr("test-g"))
        );
    }

    #[test]
    fn test_get_empty_path_is_self() {
        let node = nested();
        let empty: [&str; 0] = [];
        assert_eq!(node.get_at_path(&empty), Some(PathTarget::Node(&node)));
    }

    #[test]
    fn test_get_past_expression_is_none() {
        let node = nested();
        assert_eq!(node.get_at_path(&["a", "x"]), None);
        assert_eq!(node.get_at_path(&["missing"]), None);
    }

    #[test]
    fn test_replace_direct_property() {
        let mut node = ShapeNode::new("test").field("a", "1").field("b", "2");
        node.replace_at_path(&["a"], "3").unwrap();
        assert_eq!(node.get_at_path(&["a"]), Some(PathTarget::Expr("3")));
        assert_eq!(node.fields()[0].0, "a");
    }

    #[test]
    fn test_replace_nested_property() {
        let mut node = nested();
        node.replace_at_path(&["b", "c", "d"], "TEST-D").unwrap();
        assert_eq!(
            node.get_at_path(&["b", "c", "d"]),
            Some(PathTarget::Expr("TEST-D"))
        );
    }

    #[test]
    fn test_replace_subtree_with_reference() {
        let mut node = nested();
        node.replace_at_path(&["e", "f"], "f").unwrap();
        assert_eq!(node.get_at_path(&["e", "f"]), Some(PathTarget::Expr("f")));
        assert!(node.get_at_path(&["e", "f", "g"]).is_none());
    }

    #[test]
    fn test_replace_root_is_rejected() {
        let mut node = nested();
        let empty: [&str; 0] = [];
        assert!(matches!(
            node.replace_at_path(&empty, "x"),
            Err(ShapeError::InvalidPath(_))
        ));
    }

    #[test]
    fn test_replace_below_expression_is_rejected() {
        let mut node = nested();
        let err = node.replace_at_path(&["a", "x"], "y").unwrap_err();
        assert!(err.to_string().contains("a.x"));
    }

    #[test]
    fn test_expr_values() {
        let node = ShapeNode::new("z")
            .field("p", "z.p")
            .field("r", [ShapeNode::new("r")])
            .field("q", "z.q");
        assert_eq!(node.expr_values().collect::<Vec<_>>(), vec!["z.p", "z.q"]);
        assert!(node.has_nested());
    }

    #[test]
    fn test_from_json_keeps_field_order() {
        let root = ShapeRoot::try_from(json!({
            "variable": "root",
            "fields": {
                "z": "root.z",
                "a": "root.a",
                "b": {"variable": "b", "fields": {"x": "b.x"}},
                "tags": [{"variable": "t", "fields": {"name": "t.name"}}],
                "n": 3
            }
        }))
        .unwrap();

        assert!(!root.is_array());
        let names: Vec<&str> = root.node().fields().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, vec!["z", "a", "b", "tags", "n"]);
        assert_eq!(
            root.node().get_at_path(&["tags", "name"]),
            Some(PathTarget::Expr("t.name"))
        );
        assert_eq!(root.node().get("n"), Some(&FieldValue::Expr("3".to_string())));
    }

    #[test]
    fn test_from_json_array_root() {
        let root = ShapeRoot::from_json_str(r#"[{"variable": "u", "fields": {"a": "u.a"}}]"#)
            .unwrap();
        assert!(root.is_array());
        assert_eq!(root.node().variable(), "u");
    }

    #[test]
    fn test_from_json_rejects_bad_arrays() {
        let err = ShapeRoot::try_from(json!({
            "variable": "root",
            "fields": {"items": []}
        }))
        .unwrap_err();
        assert!(matches!(err, ShapeError::InvalidShape(_)));

        let err = ShapeRoot::try_from(json!([
            {"variable": "a"},
            {"variable": "b"}
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("found 2"));
    }

    #[test]
    fn test_from_json_rejects_bad_variable() {
        let err = ShapeRoot::try_from(json!({"variable": "not valid"})).unwrap_err();
        assert!(err.to_string().contains("not valid"));

        let err = ShapeRoot::try_from(json!({"fields": {}})).unwrap_err();
        assert!(err.to_string().contains("variable"));
    }
}
