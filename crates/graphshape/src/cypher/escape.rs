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

//! Helpers for producing expression text before it reaches the builder.
//!
//! The builder emits property values verbatim. Callers that embed string
//! literals use [`quote_string`]; callers that bind driver parameters use
//! [`placeholder`] or [`parameter`].

use std::borrow::Cow;

#[inline]
fn needs_escaping(s: &str) -> bool {
    s.chars()
        .any(|ch| matches!(ch, '\\' | '\'' | '"' | '\n' | '\r' | '\t' | '\x00'))
}

/// Escape a string value for use inside a Cypher string literal.
///
/// Returns `Cow::Borrowed` when nothing needs escaping.
///
/// # Examples
///
/// ```
/// # use graphshape::cypher::escape_string;
/// assert!(matches!(escape_string("user_name"), std::borrow::Cow::Borrowed(_)));
/// assert_eq!(escape_string("say \"hi\""), "say \\\"hi\\\"");
/// ```
pub fn escape_string(s: &str) -> Cow<'_, str> {
    if !needs_escaping(s) {
        return Cow::Borrowed(s);
    }

    let mut escaped = String::with_capacity(s.len() + 10);
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\x00' => escaped.push_str("\\u0000"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Quote a string value as a double-quoted Cypher literal.
pub fn quote_string(s: &str) -> String {
    format!("\"{}\"", escape_string(s))
}

/// Legacy brace placeholder for a driver parameter: `{name}`.
pub fn placeholder(name: &str) -> String {
    format!("{{{}}}", name)
}

/// Dollar-prefixed driver parameter: `$name`.
pub fn parameter(name: &str) -> String {
    format!("${}", name)
}

/// Check if a string is a valid Cypher variable name.
///
/// Valid names start with a letter or underscore and contain only ASCII
/// letters, digits and underscores.
pub fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return false,
    };

    if !first.is_ascii_alphabetic() && first != '_' {
        return false;
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
