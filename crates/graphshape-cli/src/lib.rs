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

//! graphshape CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **serialize**: print the query for a JSON result shape
//! - **plan**: list the collapse order of a JSON result shape
//! - **schema**: print index and constraint DDL for a schema configuration
//!
//! Inputs larger than `GRAPHSHAPE_MAX_FILE_SIZE` bytes (default 64 MB) are
//! rejected before reading.

pub mod cli;
pub mod commands;
pub mod error;

pub use error::CliError;
