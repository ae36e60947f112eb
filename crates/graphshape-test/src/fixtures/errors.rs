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

//! Invalid inputs for error-path tests.

use serde_json::{json, Value};

/// Well-formed JSON that does not describe a shape.
///
/// Each tuple contains (name, json_text).
pub fn invalid_shape_samples() -> Vec<(&'static str, &'static str)> {
    vec![
        ("number_root", "42"),
        ("missing_variable", r#"{"fields": {"a": "n.a"}}"#),
        ("numeric_variable", r#"{"variable": 1}"#),
        ("bad_identifier", r#"{"variable": "1abc"}"#),
        ("fields_not_object", r#"{"variable": "n", "fields": ["n.a"]}"#),
        ("empty_array_root", "[]"),
        ("two_element_root", r#"[{"variable": "a"}, {"variable": "b"}]"#),
        (
            "two_element_field",
            r#"{"variable": "n", "fields": {"xs": [{"variable": "a"}, {"variable": "b"}]}}"#,
        ),
    ]
}

/// Text that is not JSON at all.
pub fn malformed_json_samples() -> Vec<(&'static str, &'static str)> {
    vec![
        ("empty", ""),
        ("unclosed_object", "{\"variable\": \"n\""),
        ("trailing_comma", "{\"variable\": \"n\",}"),
    ]
}

/// Dynamic clause parts that are neither a string nor an array of strings.
pub fn invalid_clause_parts() -> Vec<(&'static str, Value)> {
    vec![
        ("null", Value::Null),
        ("number", json!(5)),
        ("boolean", json!(true)),
        ("object", json!({"a": 1})),
        ("array_with_number", json!(["(a)", 1])),
    ]
}
