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

//! Schema command - print index and constraint DDL

use graphshape_service::{Schema, SchemaConfig};
use tracing::info;

use super::{read_file, write_output};
use crate::error::CliError;

/// Print one DDL statement per line for the schema configuration in `file`.
pub fn schema(file: &str, output: Option<&str>) -> Result<(), CliError> {
    let content = read_file(file)?;
    let config = SchemaConfig::from_json_str(&content)?;
    let statements = Schema::new(config).statements();

    info!("Schema {}: {} statement(s)", file, statements.len());

    let mut text = statements.join("\n");
    if !text.is_empty() {
        text.push('\n');
    }
    write_output(&text, output)
}
