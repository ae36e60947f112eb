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

//! Serialize command - print the collapse chain for a JSON shape

use graphshape::{ClauseBuilder, Serializer, ShapeRoot};
use tracing::info;

use super::{read_file, write_output};
use crate::error::CliError;

/// Serialize the shape in `file` and write the resulting query.
///
/// `prefix` rows are emitted first and `trailing` rows between the collapse
/// chain and the final `RETURN`. With `lines`, every row is printed on its
/// own line instead of being joined with spaces.
pub fn serialize(
    file: &str,
    prefix: &[String],
    trailing: &[String],
    lines: bool,
    output: Option<&str>,
) -> Result<(), CliError> {
    let content = read_file(file)?;
    let mut shape = ShapeRoot::from_json_str(&content)?;

    let mut builder = ClauseBuilder::new();
    for row in prefix {
        builder.add_raw(row.as_str());
    }
    Serializer::new(&mut builder).serialize(&mut shape, trailing)?;

    info!("Serialized {} into {} row(s)", file, builder.len());

    let mut text = if lines {
        builder.rows().join("\n")
    } else {
        builder.render()
    };
    text.push('\n');
    write_output(&text, output)
}
