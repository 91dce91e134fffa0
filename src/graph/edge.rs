//! Edge descriptor and edge record types for directed graphs.
//!
//! This module provides [`EdgeId`], a strongly-typed descriptor for edges, and
//! [`EdgeRecord`], the value a graph stores for every edge it owns.

use std::fmt;

use crate::graph::VertexId;

/// A strongly-typed descriptor for edges within a directed graph.
///
/// `EdgeId` wraps a `usize` index. Edge descriptors are numbered independently of vertex
/// descriptors: the first edge added to a graph is `EdgeId(0)`, the next `EdgeId(1)`, and so
/// on, in global insertion order. Rejected duplicate edges do not consume a descriptor.
///
/// # Examples
///
/// ```rust
/// use adjgraph::graph::{DirectedGraph, EdgeId};
///
/// let mut graph = DirectedGraph::new();
/// let a = graph.add_vertex();
/// let b = graph.add_vertex();
/// let (edge, _) = graph.add_edge(a, b)?;
///
/// assert_eq!(edge, EdgeId::new(0));
/// assert_eq!(graph.edge_endpoints(edge)?, (a, b));
/// # Ok::<(), adjgraph::Error>(())
/// ```
///
/// # Thread Safety
///
/// `EdgeId` is [`Copy`], [`Send`], and [`Sync`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Creates a new `EdgeId` from a raw index value.
    ///
    /// # Arguments
    ///
    /// * `index` - The raw edge index (0-based)
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        EdgeId(index)
    }

    /// Returns the raw index value of this edge descriptor.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

impl From<usize> for EdgeId {
    #[inline]
    fn from(index: usize) -> Self {
        EdgeId(index)
    }
}

impl From<EdgeId> for usize {
    #[inline]
    fn from(edge: EdgeId) -> Self {
        edge.0
    }
}

/// A directed edge as stored by [`DirectedGraph`](crate::graph::DirectedGraph).
///
/// The record carries its own descriptor so that adjacency lists, which hold copies of the
/// record, can report the edge they describe without a second lookup. Records are never
/// mutated after insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeRecord {
    /// Descriptor of this edge
    pub edge_no: EdgeId,
    /// Vertex the edge leaves
    pub source: VertexId,
    /// Vertex the edge enters
    pub target: VertexId,
}

impl EdgeRecord {
    /// Returns `true` if the edge starts and ends at the same vertex.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl fmt::Display for EdgeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} -> {}", self.edge_no, self.source, self.target)
    }
}
