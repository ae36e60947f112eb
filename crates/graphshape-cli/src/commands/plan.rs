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

//! Plan command - list the collapse order of a JSON shape

use graphshape::{ResolvableKind, Serializer, ShapeRoot};
use serde_json::json;

use super::{read_file, write_output};
use crate::error::CliError;

fn kind_name(kind: ResolvableKind) -> &'static str {
    match kind {
        ResolvableKind::Object => "object",
        ResolvableKind::Array => "array",
    }
}

/// Print the nested nodes of the shape in `file`, deepest first.
///
/// Text output has one `depth kind variable path` line per node; the root's
/// path is `.`. JSON output is an array of objects with the same fields.
pub fn plan(file: &str, as_json: bool, output: Option<&str>) -> Result<(), CliError> {
    let content = read_file(file)?;
    let shape = ShapeRoot::from_json_str(&content)?;
    let resolvables = Serializer::find_resolvables(&shape);

    let text = if as_json {
        let entries: Vec<_> = resolvables
            .iter()
            .map(|r| {
                json!({
                    "variable": r.variable,
                    "kind": kind_name(r.kind),
                    "depth": r.depth(),
                    "path": r.path,
                })
            })
            .collect();
        let mut text = serde_json::to_string_pretty(&entries)?;
        text.push('\n');
        text
    } else {
        resolvables
            .iter()
            .map(|r| {
                let path = if r.path.is_empty() {
                    ".".to_string()
                } else {
                    r.path.join(".")
                };
                format!("{} {} {} {}\n", r.depth(), kind_name(r.kind), r.variable, path)
            })
            .collect()
    };

    write_output(&text, output)
}
