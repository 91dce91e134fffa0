//! Vertex descriptor implementation for directed graphs.
//!
//! This module provides the [`VertexId`] type, a strongly-typed descriptor for vertices
//! within a [`DirectedGraph`](crate::graph::DirectedGraph). The newtype wrapper prevents
//! accidental confusion between vertex descriptors, edge descriptors and plain integers.

use std::fmt;

/// A strongly-typed descriptor for vertices within a directed graph.
///
/// `VertexId` wraps a `usize` index. Descriptors are assigned densely starting from 0 in
/// the order vertices are created, and they are never reused or invalidated because graphs
/// only grow. A `VertexId` can therefore double as an index into any per-vertex side table.
///
/// # Usage
///
/// Vertex descriptors are handed out by
/// [`DirectedGraph::add_vertex`](crate::graph::DirectedGraph::add_vertex). They are used to:
///
/// - Reference endpoints when adding edges
/// - Query adjacency relationships
/// - Index analysis results stored outside the graph
///
/// # Examples
///
/// ```rust
/// use adjgraph::graph::{DirectedGraph, VertexId};
///
/// let mut graph = DirectedGraph::new();
/// let a: VertexId = graph.add_vertex();
/// let b: VertexId = graph.add_vertex();
///
/// assert_ne!(a, b);
/// assert_eq!(a.index(), 0);
/// assert_eq!(b.index(), 1);
/// ```
///
/// # Thread Safety
///
/// `VertexId` is [`Copy`], [`Send`], and [`Sync`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    /// Creates a new `VertexId` from a raw index value.
    ///
    /// Mostly useful in tests and when reconstructing descriptors from side tables.
    /// Normal usage should obtain descriptors from
    /// [`DirectedGraph::add_vertex`](crate::graph::DirectedGraph::add_vertex).
    ///
    /// # Arguments
    ///
    /// * `index` - The raw vertex index (0-based)
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        VertexId(index)
    }

    /// Returns the raw index value of this vertex descriptor.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.0)
    }
}

impl fmt::Display for VertexId {
    /// Compact `v<index>` form, also used as the node identifier in DOT output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl From<usize> for VertexId {
    #[inline]
    fn from(index: usize) -> Self {
        VertexId(index)
    }
}

impl From<VertexId> for usize {
    #[inline]
    fn from(vertex: VertexId) -> Self {
        vertex.0
    }
}
