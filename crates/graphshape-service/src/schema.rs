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

//! Index and uniqueness-constraint DDL from a label/property configuration.
//!
//! The JSON form maps labels (with leading colon) to property settings:
//!
//! ```json
//! { ":User": { "email": { "unique": true }, "name": { "index": true } } }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::error::{Result, ServiceError};
use crate::session::Session;
use crate::value::Params;

/// Index settings for one property.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertySchema {
    /// Create a plain index.
    pub index: bool,
    /// Create a uniqueness constraint. Implies an index.
    pub unique: bool,
}

impl PropertySchema {
    /// A plain index.
    pub fn indexed() -> Self {
        Self {
            index: true,
            unique: false,
        }
    }

    /// A uniqueness constraint.
    pub fn unique() -> Self {
        Self {
            index: false,
            unique: true,
        }
    }
}

/// Property settings of one label, in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelSchema {
    /// Label with leading colon, e.g. `:User`.
    pub label: String,
    /// Property name and settings pairs.
    pub properties: Vec<(String, PropertySchema)>,
}

/// Ordered schema configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaConfig {
    labels: Vec<LabelSchema>,
}

impl SchemaConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a label with its property settings.
    pub fn label<I, K>(mut self, label: impl Into<String>, properties: I) -> Self
    where
        I: IntoIterator<Item = (K, PropertySchema)>,
        K: Into<String>,
    {
        self.labels.push(LabelSchema {
            label: label.into(),
            properties: properties.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        });
        self
    }

    /// Configured labels.
    pub fn labels(&self) -> &[LabelSchema] {
        &self.labels
    }

    /// Parse a configuration from JSON text.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(s)?;
        Self::try_from(value)
    }
}

impl TryFrom<Value> for SchemaConfig {
    type Error = ServiceError;

    fn try_from(value: Value) -> Result<Self> {
        let labels: Map<String, Value> = serde_json::from_value(value)?;

        let mut config = SchemaConfig::new();
        for (label, properties) in labels {
            let properties: Map<String, Value> = serde_json::from_value(properties)?;
            let properties = properties
                .into_iter()
                .map(|(name, settings)| Ok((name, serde_json::from_value(settings)?)))
                .collect::<Result<Vec<(String, PropertySchema)>>>()?;
            config.labels.push(LabelSchema { label, properties });
        }
        Ok(config)
    }
}

/// Emits and runs schema statements.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    config: SchemaConfig,
}

impl Schema {
    /// Create a schema from its configuration.
    pub fn new(config: SchemaConfig) -> Self {
        Self { config }
    }

    /// The configuration.
    pub fn config(&self) -> &SchemaConfig {
        &self.config
    }

    /// DDL statements in configuration order.
    ///
    /// A unique property yields only its constraint; an indexed, non-unique
    /// property yields an index; other properties yield nothing.
    pub fn statements(&self) -> Vec<String> {
        let mut statements = Vec::new();
        for label in &self.config.labels {
            for (property, settings) in &label.properties {
                if settings.index && !settings.unique {
                    statements.push(format!("CREATE INDEX ON {}({})", label.label, property));
                }
                if settings.unique {
                    statements.push(format!(
                        "CREATE CONSTRAINT ON (node{}) ASSERT node.{} IS UNIQUE",
                        label.label, property
                    ));
                }
            }
        }
        statements
    }

    /// Run every statement, logging failures and continuing.
    ///
    /// Returns the number of statements that succeeded.
    pub async fn setup<S: Session + ?Sized>(&self, session: &S) -> usize {
        let statements = self.statements();
        let total = statements.len();
        let params = Params::new();
        let mut succeeded = 0;

        for statement in &statements {
            info!("Schema: {}", statement);
            match session.run(statement, &params).await {
                Ok(_) => succeeded += 1,
                Err(e) => warn!("Schema statement failed: {}: {}", statement, e),
            }
        }

        info!("Schema setup: {}/{} statement(s) applied", succeeded, total);
        succeeded
    }
}
