// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # adjgraph
//!
//! A small directed graph built on adjacency lists, following the interface contract of
//! the Boost Graph Library's `adjacency_list<setS, vecS, directedS>`.
//!
//! ## Features
//!
//! - **Dense descriptors** - vertices and edges are numbered from zero in creation order
//!   and are never reused or invalidated
//! - **Simple digraph** - at most one edge per ordered `(source, target)` pair, self-loops allowed
//! - **Stable iteration** - adjacency, vertex and edge views follow insertion order
//! - **Checked access** - out-of-range descriptors are rejected with [`Error`] instead of
//!   touching unrelated storage
//! - **Algorithms** - traversal, cycle detection and topological ordering over any
//!   [`graph::Successors`] implementation
//!
//! ## Quick Start
//!
//! ```rust
//! use adjgraph::prelude::*;
//!
//! let mut graph = DirectedGraph::new();
//! let a = graph.add_vertex();
//! let b = graph.add_vertex();
//! let c = graph.add_vertex();
//!
//! let (ab, inserted) = graph.add_edge(a, b)?;
//! assert!(inserted);
//! graph.add_edge(a, c)?;
//!
//! // Re-adding an existing edge returns the original descriptor
//! assert_eq!(graph.add_edge(a, b)?, (ab, false));
//!
//! let adjacent: Vec<VertexId> = graph.adjacent_vertices(a)?.collect();
//! assert_eq!(adjacent, vec![b, c]);
//! assert_eq!(graph.source(ab)?, a);
//! assert_eq!(graph.target(ab)?, b);
//! # Ok::<(), adjgraph::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`graph`] - the [`graph::DirectedGraph`] container, descriptors, iterators and traits
//! - [`graph::algorithms`] - generic graph algorithms
//! - [`prelude`] - convenient re-exports
//! - [`Error`] and [`Result`] - error handling

#[macro_use]
pub(crate) mod error;
pub(crate) mod utils;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use adjgraph::prelude::*;
///
/// let mut graph = DirectedGraph::new();
/// let v = graph.add_vertex();
/// assert_eq!(graph.vertex(0)?, v);
/// # Ok::<(), adjgraph::Error>(())
/// ```
pub mod prelude;

/// Directed adjacency-list graph and its supporting types.
///
/// # Key Types
///
/// - [`graph::DirectedGraph`] - the graph container
/// - [`graph::VertexId`] / [`graph::EdgeId`] - strongly-typed descriptors
/// - [`graph::EdgeRecord`] - a stored edge
/// - [`graph::GraphConfig`] - construction-time configuration
/// - [`graph::IndexedGraph`] - a wrapper keyed by user labels
pub mod graph;

/// `adjgraph` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
/// This is used consistently throughout the crate for all fallible operations.
///
/// # Examples
///
/// ```rust
/// use adjgraph::{graph::{DirectedGraph, VertexId}, Result};
///
/// fn fan_out(graph: &mut DirectedGraph, width: usize) -> Result<VertexId> {
///     let root = graph.add_vertex();
///     for _ in 0..width {
///         let leaf = graph.add_vertex();
///         graph.add_edge(root, leaf)?;
///     }
///     Ok(root)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `adjgraph` Error type
///
/// Returned whenever an operation references a vertex or edge descriptor that does not
/// exist in the graph.
///
/// # Examples
///
/// ```rust
/// use adjgraph::{graph::{DirectedGraph, EdgeId}, Error};
///
/// let graph = DirectedGraph::new();
/// match graph.source(EdgeId::new(0)) {
///     Err(Error::InvalidEdge { edge, count }) => assert_eq!((edge, count), (0, 0)),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
pub use error::Error;

pub use graph::{DirectedGraph, EdgeId, VertexId};
