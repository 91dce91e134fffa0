//! Graph access traits.
//!
//! The algorithms in [`crate::graph::algorithms`] are written against these traits instead
//! of a concrete container, so any type that can enumerate its vertices and report the
//! successors of a vertex can reuse them.

use crate::graph::VertexId;

/// Basic structural information about a graph.
pub trait GraphBase {
    /// Returns the number of vertices. Vertex descriptors are expected to be dense,
    /// i.e. every descriptor lies in `0..vertex_count()`.
    fn vertex_count(&self) -> usize;

    /// Returns an iterator over all vertex descriptors in ascending order.
    fn vertex_ids(&self) -> impl Iterator<Item = VertexId>;
}

/// Forward adjacency access.
pub trait Successors: GraphBase {
    /// Returns the targets of all outgoing edges of `vertex`, in the order the edges
    /// were added.
    ///
    /// Implementations must not fail: a vertex outside the graph has no successors.
    fn successors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId>;
}
