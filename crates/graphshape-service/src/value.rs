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

//! Values exchanged with a graph session.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Query parameters, keyed by placeholder name.
pub type Params = BTreeMap<String, GraphValue>;

/// A parameter or result value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GraphValue {
    /// Null value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// String value.
    String(String),
    /// List value.
    List(Vec<GraphValue>),
    /// Map value.
    Map(BTreeMap<String, GraphValue>),
}

impl From<bool> for GraphValue {
    fn from(v: bool) -> Self {
        GraphValue::Bool(v)
    }
}

impl From<i64> for GraphValue {
    fn from(v: i64) -> Self {
        GraphValue::Int(v)
    }
}

impl From<i32> for GraphValue {
    fn from(v: i32) -> Self {
        GraphValue::Int(v as i64)
    }
}

impl From<f64> for GraphValue {
    fn from(v: f64) -> Self {
        GraphValue::Float(v)
    }
}

impl From<String> for GraphValue {
    fn from(v: String) -> Self {
        GraphValue::String(v)
    }
}

impl From<&str> for GraphValue {
    fn from(v: &str) -> Self {
        GraphValue::String(v.to_string())
    }
}

impl<T: Into<GraphValue>> From<Vec<T>> for GraphValue {
    fn from(v: Vec<T>) -> Self {
        GraphValue::List(v.into_iter().map(|x| x.into()).collect())
    }
}

impl<T: Into<GraphValue>> From<Option<T>> for GraphValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(x) => x.into(),
            None => GraphValue::Null,
        }
    }
}

impl From<Value> for GraphValue {
    /// Integral numbers become `Int`, all other numbers `Float`.
    fn from(v: Value) -> Self {
        match v {
            Value::Null => GraphValue::Null,
            Value::Bool(b) => GraphValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => GraphValue::Int(i),
                None => GraphValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => GraphValue::String(s),
            Value::Array(items) => GraphValue::List(items.into_iter().map(Into::into).collect()),
            Value::Object(map) => {
                GraphValue::Map(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl From<GraphValue> for Value {
    /// Non-finite floats become `null`.
    fn from(v: GraphValue) -> Self {
        match v {
            GraphValue::Null => Value::Null,
            GraphValue::Bool(b) => Value::Bool(b),
            GraphValue::Int(i) => Value::Number(i.into()),
            GraphValue::Float(f) => Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null),
            GraphValue::String(s) => Value::String(s),
            GraphValue::List(items) => Value::Array(items.into_iter().map(Into::into).collect()),
            GraphValue::Map(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl GraphValue {
    /// Convert to a JSON value.
    pub fn to_json(&self) -> Value {
        self.clone().into()
    }

    /// Check if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, GraphValue::Null)
    }

    /// Try to get as a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            GraphValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            GraphValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as a float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            GraphValue::Float(f) => Some(*f),
            GraphValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Look up a key of a map value.
    pub fn get(&self, key: &str) -> Option<&GraphValue> {
        match self {
            GraphValue::Map(map) => map.get(key),
            _ => None,
        }
    }
}

/// One row returned by a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Returned columns, in projection order.
    pub fields: Vec<GraphValue>,
}

impl Record {
    /// Create a record from its columns.
    pub fn new(fields: Vec<GraphValue>) -> Self {
        Self { fields }
    }

    /// The first column.
    pub fn first(&self) -> Option<&GraphValue> {
        self.fields.first()
    }
}

/// All rows returned by one query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    /// Returned rows.
    pub records: Vec<Record>,
}

impl QueryResult {
    /// A result with no rows.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A result with a single one-column row.
    pub fn single(value: impl Into<GraphValue>) -> Self {
        Self {
            records: vec![Record::new(vec![value.into()])],
        }
    }

    /// The first column of the first row.
    pub fn first_field(&self) -> Option<&GraphValue> {
        self.records.first().and_then(Record::first)
    }
}
