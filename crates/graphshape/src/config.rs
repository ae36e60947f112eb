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

//! Configuration for clause building.

use serde::{Deserialize, Serialize};

/// Configuration for [`ClauseBuilder`](crate::ClauseBuilder) property decoration.
///
/// Names the audit fields that are stamped onto patterns rendered inside a
/// `CREATE` clause and onto every `SET` clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Property holding the generated node identifier (default: "uuid").
    pub id_property: String,

    /// Property holding the creation timestamp (default: "createdAt").
    pub created_at_property: String,

    /// Property holding the last-update timestamp (default: "updatedAt").
    pub updated_at_property: String,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            id_property: "uuid".to_string(),
            created_at_property: "createdAt".to_string(),
            updated_at_property: "updatedAt".to_string(),
        }
    }
}

/// Builder for BuilderConfig.
///
/// # Examples
///
/// ```
/// # use graphshape::BuilderConfig;
/// let config = BuilderConfig::builder()
///     .id_property("id")
///     .updated_at_property("modified")
///     .build();
/// assert_eq!(config.created_at_property, "createdAt");
/// ```
#[derive(Debug, Default)]
pub struct BuilderConfigBuilder {
    id_property: Option<String>,
    created_at_property: Option<String>,
    updated_at_property: Option<String>,
}

impl BuilderConfigBuilder {
    /// Create a new builder with no values set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the identifier property name.
    pub fn id_property(mut self, name: impl Into<String>) -> Self {
        self.id_property = Some(name.into());
        self
    }

    /// Set the creation timestamp property name.
    pub fn created_at_property(mut self, name: impl Into<String>) -> Self {
        self.created_at_property = Some(name.into());
        self
    }

    /// Set the update timestamp property name.
    pub fn updated_at_property(mut self, name: impl Into<String>) -> Self {
        self.updated_at_property = Some(name.into());
        self
    }

    /// Build the BuilderConfig instance.
    ///
    /// All unset fields will use their default values.
    pub fn build(self) -> BuilderConfig {
        let defaults = BuilderConfig::default();
        BuilderConfig {
            id_property: self.id_property.unwrap_or(defaults.id_property),
            created_at_property: self
                .created_at_property
                .unwrap_or(defaults.created_at_property),
            updated_at_property: self
                .updated_at_property
                .unwrap_or(defaults.updated_at_property),
        }
    }
}

impl BuilderConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for BuilderConfig.
    pub fn builder() -> BuilderConfigBuilder {
        BuilderConfigBuilder::default()
    }

    /// Set the identifier property name.
    pub fn with_id_property(mut self, name: impl Into<String>) -> Self {
        self.id_property = name.into();
        self
    }

    /// Set both timestamp property names.
    pub fn with_timestamp_properties(
        mut self,
        created_at: impl Into<String>,
        updated_at: impl Into<String>,
    ) -> Self {
        self.created_at_property = created_at.into();
        self.updated_at_property = updated_at.into();
        self
    }
}
