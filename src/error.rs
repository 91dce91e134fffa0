use thiserror::Error;

macro_rules! invalid_vertex {
    ($vertex:expr, $count:expr) => {{
        let vertex: usize = $vertex.into();
        let count: usize = $count;
        tracing::debug!(vertex, count, "rejected vertex descriptor");
        crate::Error::InvalidVertex { vertex, count }
    }};
}

macro_rules! invalid_edge {
    ($edge:expr, $count:expr) => {{
        let edge: usize = $edge.into();
        let count: usize = $count;
        tracing::debug!(edge, count, "rejected edge descriptor");
        crate::Error::InvalidEdge { edge, count }
    }};
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Graphs only ever grow, so the sole failure mode is a descriptor that was never handed out
/// by the graph it is used with. Both variants carry the offending raw index together with
/// the number of valid descriptors at the time of the call.
///
/// # Error Categories
///
/// - [`Error::InvalidVertex`] - Vertex descriptor outside `[0, num_vertices)`
/// - [`Error::InvalidEdge`] - Edge descriptor outside `[0, num_edges)`
///
/// # Examples
///
/// ```rust
/// use adjgraph::{graph::{DirectedGraph, VertexId}, Error};
///
/// let mut graph = DirectedGraph::new();
/// let a = graph.add_vertex();
///
/// match graph.add_edge(a, VertexId::new(7)) {
///     Err(Error::InvalidVertex { vertex, count }) => {
///         eprintln!("vertex {vertex} does not exist ({count} vertices)");
///     }
///     Err(e) => eprintln!("Other error: {e}"),
///     Ok(_) => unreachable!(),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A vertex descriptor did not refer to an existing vertex.
    ///
    /// # Fields
    ///
    /// * `vertex` - The raw descriptor that was rejected
    /// * `count` - The number of vertices in the graph when the call was made
    #[error("Invalid vertex descriptor {vertex} - graph has {count} vertices")]
    InvalidVertex {
        /// The rejected vertex index
        vertex: usize,
        /// Number of vertices at the time of the call
        count: usize,
    },

    /// An edge descriptor did not refer to an existing edge.
    ///
    /// # Fields
    ///
    /// * `edge` - The raw descriptor that was rejected
    /// * `count` - The number of edges in the graph when the call was made
    #[error("Invalid edge descriptor {edge} - graph has {count} edges")]
    InvalidEdge {
        /// The rejected edge index
        edge: usize,
        /// Number of edges at the time of the call
        count: usize,
    },
}
