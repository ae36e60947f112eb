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

//! Ordered property maps and map-literal values.
//!
//! Values held here are pre-formatted Cypher expression text (`"\"Alice\""`,
//! `"10"`, `"{name}"`, `"u.name"`). Nothing in this module quotes or escapes.

/// An insertion-ordered map from property name to expression text.
///
/// Rendered output follows insertion order, which keeps generated queries
/// byte-stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Props {
    entries: Vec<(String, String)>,
}

impl Props {
    /// Create an empty property map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a property, returning the map.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add a property, replacing the value in place when the key exists.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Append a property only when the key is not present yet.
    ///
    /// Returns `true` when the value was inserted.
    pub fn insert_if_absent(&mut self, key: &str, value: impl FnOnce() -> String) -> bool {
        if self.contains_key(key) {
            return false;
        }
        self.entries.push((key.to_string(), value()));
        true
    }

    /// Get the expression stored for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Check whether a key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the map holds no properties.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, expression)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Props::new();
        for (k, v) in iter {
            props.insert(k, v);
        }
        props
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Props {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

/// A value inside a map literal: either expression text or a nested map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapValue {
    /// Expression text, emitted verbatim.
    Expr(String),
    /// Nested map, rendered recursively.
    Map(Vec<(String, MapValue)>),
}

impl MapValue {
    /// Build a nested map value from ordered entries.
    ///
    /// # Examples
    ///
    /// ```
    /// # use graphshape::cypher::{map_literal, MapValue};
    /// let value = MapValue::map([("a", MapValue::from(1)), ("b", MapValue::map([("x", 2)]))]);
    /// assert_eq!(map_literal(&value), "{a: 1, b: {x: 2}}");
    /// ```
    pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<MapValue>,
    {
        MapValue::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<&str> for MapValue {
    fn from(v: &str) -> Self {
        MapValue::Expr(v.to_string())
    }
}

impl From<String> for MapValue {
    fn from(v: String) -> Self {
        MapValue::Expr(v)
    }
}

impl From<i64> for MapValue {
    fn from(v: i64) -> Self {
        MapValue::Expr(v.to_string())
    }
}

impl From<i32> for MapValue {
    fn from(v: i32) -> Self {
        MapValue::Expr(v.to_string())
    }
}

impl From<bool> for MapValue {
    fn from(v: bool) -> Self {
        MapValue::Expr(v.to_string())
    }
}

impl From<Props> for MapValue {
    fn from(props: Props) -> Self {
        MapValue::Map(
            props
                .entries
                .into_iter()
                .map(|(k, v)| (k, MapValue::Expr(v)))
                .collect(),
        )
    }
}

impl From<&Props> for MapValue {
    fn from(props: &Props) -> Self {
        props.clone().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_order() {
        let props = Props::new().with("name", "\"A\"").with("age", "10");
        let keys: Vec<&str> = props.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["name", "age"]);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut props = Props::from([("a", "1"), ("b", "2")]);
        props.insert("a", "3");
        assert_eq!(props.iter().collect::<Vec<_>>(), vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_insert_if_absent() {
        let mut props = Props::from([("uuid", "\"given\"")]);
        assert!(!props.insert_if_absent("uuid", || "\"generated\"".to_string()));
        assert!(props.insert_if_absent("createdAt", || "100".to_string()));
        assert_eq!(props.get("uuid"), Some("\"given\""));
        assert_eq!(props.get("createdAt"), Some("100"));
    }

    #[test]
    fn test_map_value_from_props() {
        let value: MapValue = Props::from([("x", "b.x")]).into();
        assert_eq!(
            value,
            MapValue::Map(vec![("x".to_string(), MapValue::Expr("b.x".to_string()))])
        );
    }
}
