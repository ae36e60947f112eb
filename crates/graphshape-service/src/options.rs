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

//! Option structs for node operations.
//!
//! Every struct deserializes with missing fields filled from its `Default`,
//! and `props` always defaults to `["uuid"]`. Attribute maps keep the order
//! in which keys were inserted, which is the order their placeholders and
//! assignments appear in the query.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::value::{GraphValue, Params};

/// Node attributes in insertion order.
pub type Attrs = Map<String, Value>;

/// Convert attributes into session parameters.
pub fn to_params(attrs: &Attrs) -> Params {
    attrs
        .iter()
        .map(|(k, v)| (k.clone(), GraphValue::from(v.clone())))
        .collect()
}

fn default_props() -> Vec<String> {
    vec!["uuid".to_string()]
}

/// Options for [`NodeService::find_node`](crate::NodeService::find_node).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FindOptions {
    /// Property values the node must have.
    pub filter: Attrs,
    /// Properties to return.
    pub props: Vec<String>,
}

impl Default for FindOptions {
    fn default() -> Self {
        Self {
            filter: Attrs::new(),
            props: default_props(),
        }
    }
}

impl FindOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `key` to equal `value`.
    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter.insert(key.into(), value.into());
        self
    }

    /// Replace the returned properties.
    pub fn with_props<I, S>(mut self, props: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.props = props.into_iter().map(Into::into).collect();
        self
    }
}

/// Options for [`NodeService::create_node`](crate::NodeService::create_node).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateOptions {
    /// Properties to store on the new node.
    pub attrs: Attrs,
    /// Properties to return.
    pub props: Vec<String>,
}

impl Default for CreateOptions {
    fn default() -> Self {
        Self {
            attrs: Attrs::new(),
            props: default_props(),
        }
    }
}

impl CreateOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `key` with `value`.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Replace the returned properties.
    pub fn with_props<I, S>(mut self, props: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.props = props.into_iter().map(Into::into).collect();
        self
    }
}

/// Options for [`NodeService::update_node`](crate::NodeService::update_node).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateOptions {
    /// Identifier of the node to update. Required.
    pub uuid: Option<String>,
    /// Properties to overwrite.
    pub attrs: Attrs,
    /// Properties to return.
    pub props: Vec<String>,
}

impl Default for UpdateOptions {
    fn default() -> Self {
        Self {
            uuid: None,
            attrs: Attrs::new(),
            props: default_props(),
        }
    }
}

impl UpdateOptions {
    /// Create options targeting the node with `uuid`.
    pub fn new(uuid: impl Into<String>) -> Self {
        Self {
            uuid: Some(uuid.into()),
            ..Self::default()
        }
    }

    /// Overwrite `key` with `value`.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Replace the returned properties.
    pub fn with_props<I, S>(mut self, props: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.props = props.into_iter().map(Into::into).collect();
        self
    }
}
