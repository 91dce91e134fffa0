//! Construction-time configuration for [`DirectedGraph`](crate::graph::DirectedGraph).

use strum::{Display, EnumIter};

/// Strategy used to find an existing edge between two vertices.
///
/// The choice only affects cost: both strategies return the same descriptors, reject the
/// same duplicates and leave iteration order untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum EdgeLookup {
    /// Scan the source vertex's adjacency list. O(out-degree), no extra memory.
    #[default]
    #[strum(serialize = "scan")]
    Scan,
    /// Keep a hash index keyed by `(source, target)`. O(1) expected, one map entry per edge.
    #[strum(serialize = "hashed")]
    Hashed,
}

/// Configuration applied when a graph is created.
///
/// # Examples
///
/// ```rust
/// use adjgraph::graph::{DirectedGraph, EdgeLookup, GraphConfig};
///
/// let config = GraphConfig::hashed().with_vertex_capacity(1024);
/// let graph = DirectedGraph::with_config(config);
/// assert_eq!(graph.config().edge_lookup, EdgeLookup::Hashed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphConfig {
    /// Number of vertices to reserve storage for up front
    pub vertex_capacity: usize,
    /// Number of edges to reserve storage for up front
    pub edge_capacity: usize,
    /// How `add_edge` and `edge` locate an existing `(source, target)` edge
    pub edge_lookup: EdgeLookup,
}

impl GraphConfig {
    /// Default configuration: no pre-allocation, linear adjacency scans.
    #[must_use]
    pub fn scan() -> Self {
        Self::default()
    }

    /// Configuration using the `(source, target)` hash index.
    ///
    /// Worth it for graphs with high out-degree vertices.
    #[must_use]
    pub fn hashed() -> Self {
        Self {
            edge_lookup: EdgeLookup::Hashed,
            ..Self::default()
        }
    }

    /// Sets the vertex capacity hint.
    #[must_use]
    pub fn with_vertex_capacity(mut self, capacity: usize) -> Self {
        self.vertex_capacity = capacity;
        self
    }

    /// Sets the edge capacity hint.
    #[must_use]
    pub fn with_edge_capacity(mut self, capacity: usize) -> Self {
        self.edge_capacity = capacity;
        self
    }

    /// Sets the edge lookup strategy.
    #[must_use]
    pub fn with_edge_lookup(mut self, edge_lookup: EdgeLookup) -> Self {
        self.edge_lookup = edge_lookup;
        self
    }
}
