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

//! Node CRUD on top of a [`Session`].
//!
//! Labels are passed with their leading colon (`":User"`) and are appended to
//! the fixed variable `node`. Attribute values always travel as parameters;
//! the query text only carries `{key}` placeholders.

use graphshape::cypher::placeholder;
use graphshape::{parts, BuilderConfig, ClauseBuilder, MapValue, Props};
use tracing::{debug, info};

use crate::error::{Result, ServiceError};
use crate::options::{to_params, Attrs, CreateOptions, FindOptions, UpdateOptions};
use crate::session::Session;
use crate::value::{GraphValue, Params};

const NODE: &str = "node";

fn node_name(label: &str) -> String {
    format!("{}{}", NODE, label)
}

/// `{key: {key}, ...}` for every attribute, in insertion order.
fn placeholders(attrs: &Attrs) -> Props {
    attrs.keys().map(|k| (k.clone(), placeholder(k))).collect()
}

/// `{name: node.name, ...}` for every returned property.
fn projection(props: &[String]) -> MapValue {
    MapValue::map(props.iter().map(|p| (p.clone(), format!("{}.{}", NODE, p))))
}

/// Runs node-level queries through a session.
///
/// Each query starts from a fork of the service's template builder, so the
/// configured property names, identifier generator and clock apply to every
/// operation.
pub struct NodeService<S> {
    session: S,
    template: ClauseBuilder,
}

impl<S: Session> NodeService<S> {
    /// Create a service with the default builder configuration.
    pub fn new(session: S) -> Self {
        Self {
            session,
            template: ClauseBuilder::new(),
        }
    }

    /// Replace the builder configuration.
    pub fn with_config(mut self, config: BuilderConfig) -> Self {
        self.template.set_config(config);
        self
    }

    /// Replace the template builder, including its value sources.
    pub fn with_builder(mut self, builder: ClauseBuilder) -> Self {
        self.template = builder.fork();
        self
    }

    /// The underlying session.
    pub fn session(&self) -> &S {
        &self.session
    }

    /// Build a query with a fresh builder, run it with `params` and return
    /// the first column of the first row.
    pub async fn run_query<F>(&self, params: &Params, f: F) -> Result<Option<GraphValue>>
    where
        F: FnOnce(&mut ClauseBuilder),
    {
        let mut builder = self.template.fork();
        f(&mut builder);
        let query = builder.render();

        debug!("Running query with {} parameter(s): {}", params.len(), query);
        let result = self.session.run(&query, params).await?;
        Ok(result.first_field().cloned())
    }

    /// Find a node with `label` whose properties match `options.filter`.
    pub async fn find_node(&self, label: &str, options: FindOptions) -> Result<Option<GraphValue>> {
        let filter = placeholders(&options.filter);
        let returned = projection(&options.props);

        self.run_query(&to_params(&options.filter), |q| {
            let node = q.node(node_name(label), filter);
            let body = q.map_literal(returned);
            q.match_(parts![node]).return_projection([body]);
        })
        .await
    }

    /// Create a node with `label` and `options.attrs`.
    ///
    /// The identifier and both timestamps are stamped unless supplied.
    pub async fn create_node(
        &self,
        label: &str,
        options: CreateOptions,
    ) -> Result<Option<GraphValue>> {
        let attrs = placeholders(&options.attrs);
        let returned = projection(&options.props);

        let created = self
            .run_query(&to_params(&options.attrs), |q| {
                let node = q.node(node_name(label), attrs);
                let body = q.map_literal(returned);
                q.create(parts![node]).return_projection([body]);
            })
            .await?;

        info!("Created node with label '{}'", label);
        Ok(created)
    }

    /// Return the node matching `options.attrs`, creating it when absent.
    pub async fn find_or_create_node(
        &self,
        label: &str,
        options: CreateOptions,
    ) -> Result<Option<GraphValue>> {
        let find = FindOptions {
            filter: options.attrs.clone(),
            props: options.props.clone(),
        };

        match self.find_node(label, find).await? {
            Some(found) if !found.is_null() => {
                debug!("Found existing node with label '{}'", label);
                Ok(Some(found))
            }
            _ => self.create_node(label, options).await,
        }
    }

    /// Overwrite `options.attrs` on the node identified by `options.uuid`.
    ///
    /// The update timestamp is always refreshed.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::MissingOption` when no identifier is given.
    pub async fn update_node(
        &self,
        label: &str,
        options: UpdateOptions,
    ) -> Result<Option<GraphValue>> {
        let uuid = options.uuid.ok_or(ServiceError::MissingOption("uuid"))?;

        let mut assignments = placeholders(&options.attrs);
        assignments.insert("uuid", placeholder("uuid"));
        let mut params = to_params(&options.attrs);
        params.insert("uuid".to_string(), GraphValue::String(uuid));
        let returned = projection(&options.props);

        self.run_query(&params, |q| {
            let node = q.node(node_name(label), Props::new().with("uuid", placeholder("uuid")));
            let body = q.map_literal(returned);
            q.match_(parts![node])
                .set_properties(NODE, &assignments)
                .return_projection([body]);
        })
        .await
    }

    /// Delete the node identified by `uuid` together with its relationships.
    ///
    /// Returns `{uuid: ...}` of the deleted node, or `None` when nothing
    /// matched.
    pub async fn delete_node(
        &self,
        label: &str,
        uuid: impl Into<String>,
    ) -> Result<Option<GraphValue>> {
        let mut params = Params::new();
        params.insert("uuid".to_string(), GraphValue::String(uuid.into()));

        let deleted = self
            .run_query(&params, |q| {
                let node = q.node(node_name(label), Props::new().with("uuid", placeholder("uuid")));
                let related = parts![
                    q.existing_node(NODE),
                    q.relation("relation", None),
                    q.node("", None),
                ];
                let body = q.map_literal(MapValue::map([("uuid", "uuid")]));

                q.match_(parts![node])
                    .optional_match(related)
                    .with_projection([
                        NODE.to_string(),
                        format!("{}.uuid as uuid", NODE),
                        "relation".to_string(),
                    ])
                    .add_raw(format!("DELETE relation, {}", NODE))
                    .return_projection([body]);
            })
            .await?;

        info!("Deleted node with label '{}'", label);
        Ok(deleted)
    }
}
