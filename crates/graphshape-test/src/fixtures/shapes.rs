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

//! Shape trees and the collapse chains they serialize to.

use graphshape::{ShapeNode, ShapeRoot};

/// `{a: test.a, b: test.b}`: no nesting.
pub fn flat() -> ShapeRoot {
    ShapeRoot::from(ShapeNode::new("test").field("a", "test.a").field("b", "test.b"))
}

/// Root with one nested object.
pub fn two_level() -> ShapeRoot {
    ShapeRoot::from(
        ShapeNode::new("root")
            .field("a", "root.a")
            .field("b", ShapeNode::new("b").field("x", "b.x").field("y", "b.y")),
    )
}

fn nested_node() -> ShapeNode {
    ShapeNode::new("root").field("a", "root.a").field(
        "b",
        ShapeNode::new("b").field("x", "b.x").field("y", "b.y").field(
            "z",
            [ShapeNode::new("z")
                .field("p", "z.p")
                .field("q", "z.q")
                .field("r", [ShapeNode::new("r").field("m", "r.m").field("n", "r.n")])],
        ),
    )
}

/// Object root with an object holding a list holding a list.
pub fn nested() -> ShapeRoot {
    ShapeRoot::from(nested_node())
}

/// [`nested`] with an array root.
pub fn nested_array() -> ShapeRoot {
    ShapeRoot::from([nested_node()])
}

/// Sibling nested fields at equal depth, with literal values.
pub fn siblings() -> ShapeRoot {
    let c = ShapeNode::new("c").field("x", "1");
    let dyq = ShapeNode::new("dyq").field("w", "12");
    let dy = ShapeNode::new("dy").field("p", "3").field("q", [dyq]);
    let d = ShapeNode::new("d").field("x", "1").field("y", dy);

    ShapeRoot::from(
        ShapeNode::new("test")
            .field("a", "1")
            .field("b", "2")
            .field("c", c)
            .field("d", [d]),
    )
}

/// A user with an optional list of posts.
pub fn user_with_posts() -> ShapeRoot {
    ShapeRoot::from(
        ShapeNode::new("u")
            .field("name", "u.name")
            .field("posts", [ShapeNode::new("p").field("title", "p.title")]),
    )
}

/// Every shape fixture with the query its serialization must produce.
pub fn cases() -> Vec<(&'static str, fn() -> ShapeRoot, &'static str)> {
    vec![
        ("flat", flat, "RETURN {a: test.a, b: test.b}"),
        (
            "two_level",
            two_level,
            "WITH root, {x: b.x, y: b.y} as b RETURN {a: root.a, b: b}",
        ),
        (
            "nested",
            nested,
            "WITH z, b, root, CASE WHEN r IS NOT NULL THEN COLLECT({m: r.m, n: r.n}) ELSE [] END as r \
             WITH b, root, CASE WHEN z IS NOT NULL THEN COLLECT({p: z.p, q: z.q, r: r}) ELSE [] END as z \
             WITH root, {x: b.x, y: b.y, z: z} as b \
             RETURN {a: root.a, b: b}",
        ),
        (
            "nested_array",
            nested_array,
            "WITH z, b, root, CASE WHEN r IS NOT NULL THEN COLLECT({m: r.m, n: r.n}) ELSE [] END as r \
             WITH b, root, CASE WHEN z IS NOT NULL THEN COLLECT({p: z.p, q: z.q, r: r}) ELSE [] END as z \
             WITH root, {x: b.x, y: b.y, z: z} as b \
             RETURN CASE WHEN root IS NOT NULL THEN COLLECT({a: root.a, b: b}) ELSE [] END",
        ),
        (
            "siblings",
            siblings,
            "WITH c, dy, d, test, CASE WHEN dyq IS NOT NULL THEN COLLECT({w: 12}) ELSE [] END as dyq \
             WITH c, d, test, {p: 3, q: dyq} as dy \
             WITH d, test, dy, {x: 1} as c \
             WITH test, c, CASE WHEN d IS NOT NULL THEN COLLECT({x: 1, y: dy}) ELSE [] END as d \
             RETURN {a: 1, b: 2, c: c, d: d}",
        ),
        (
            "user_with_posts",
            user_with_posts,
            "WITH u, CASE WHEN p IS NOT NULL THEN COLLECT({title: p.title}) ELSE [] END as p \
             RETURN {name: u.name, posts: p}",
        ),
    ]
}
