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

//! The seam between query text and a database driver.
//!
//! Drivers implement [`Session`]. [`MemorySession`] records what it is asked
//! to run and answers from a queue of canned results, which is enough to
//! drive the services in tests and dry runs.

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::debug;

use crate::error::{Result, ServiceError};
use crate::value::{Params, QueryResult};

/// Runs query text with parameters against a graph database.
///
/// Implementations coerce driver-specific value wrappers into plain
/// [`GraphValue`](crate::GraphValue)s before returning.
#[async_trait]
pub trait Session: Send + Sync {
    /// Run `query` with `params` and collect every returned row.
    async fn run(&self, query: &str, params: &Params) -> Result<QueryResult>;
}

#[async_trait]
impl<T: Session + ?Sized> Session for std::sync::Arc<T> {
    async fn run(&self, query: &str, params: &Params) -> Result<QueryResult> {
        (**self).run(query, params).await
    }
}

/// One call seen by a [`MemorySession`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedQuery {
    /// Query text.
    pub query: String,
    /// Parameters passed with it.
    pub params: Params,
}

/// An in-process session that records queries and replays queued results.
#[derive(Debug, Default)]
pub struct MemorySession {
    calls: Mutex<Vec<RecordedQuery>>,
    responses: Mutex<VecDeque<std::result::Result<QueryResult, String>>>,
}

impl MemorySession {
    /// Create a session with an empty response queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a result for the next unanswered call.
    pub fn push_result(&self, result: QueryResult) -> &Self {
        self.responses.lock().push_back(Ok(result));
        self
    }

    /// Queue a failure for the next unanswered call.
    pub fn push_error(&self, message: impl Into<String>) -> &Self {
        self.responses.lock().push_back(Err(message.into()));
        self
    }

    /// Every call so far, oldest first.
    pub fn calls(&self) -> Vec<RecordedQuery> {
        self.calls.lock().clone()
    }

    /// Query text of every call so far.
    pub fn queries(&self) -> Vec<String> {
        self.calls.lock().iter().map(|c| c.query.clone()).collect()
    }

    /// The most recent call.
    pub fn last_call(&self) -> Option<RecordedQuery> {
        self.calls.lock().last().cloned()
    }
}

#[async_trait]
impl Session for MemorySession {
    async fn run(&self, query: &str, params: &Params) -> Result<QueryResult> {
        debug!("MemorySession run: {}", query);
        self.calls.lock().push(RecordedQuery {
            query: query.to_string(),
            params: params.clone(),
        });

        match self.responses.lock().pop_front() {
            Some(Ok(result)) => Ok(result),
            Some(Err(message)) => Err(ServiceError::Session(message)),
            None => Ok(QueryResult::empty()),
        }
    }
}
