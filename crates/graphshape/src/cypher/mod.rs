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

//! Cypher query building utilities.
//!
//! This module provides the clause builder together with the patterns,
//! expression renderers and value sources it works with.

pub mod builder;
pub mod escape;
pub mod expr;
pub mod generate;
pub mod pattern;
pub mod props;

pub use builder::{build, ClauseBuilder};
pub use escape::{escape_string, is_valid_identifier, parameter, placeholder, quote_string};
pub use expr::{collect_or_empty, conditional, map_literal, CaseBranch, Projection};
pub use generate::{Clock, FixedClock, FixedId, IdGenerator, SystemClock, UuidV4};
pub use pattern::{
    Clause, ClausePart, ClauseParts, Decorator, Direction, NodePattern, Pattern, RelationPattern,
};
pub use props::{MapValue, Props};
