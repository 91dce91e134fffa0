//! # adjgraph Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the adjgraph library.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all adjgraph operations
pub use crate::Error;

/// The result type used throughout adjgraph
pub use crate::Result;

// ================================================================================================
// Graph Container and Descriptors
// ================================================================================================

/// The directed adjacency-list graph
pub use crate::graph::DirectedGraph;

/// Label-keyed wrapper around [`DirectedGraph`]
pub use crate::graph::IndexedGraph;

/// Vertex and edge descriptors
pub use crate::graph::{EdgeId, EdgeRecord, VertexId};

/// Construction-time configuration
pub use crate::graph::{EdgeLookup, GraphConfig};

/// Traits the algorithms are written against
pub use crate::graph::{GraphBase, Successors};

// ================================================================================================
// Algorithms
// ================================================================================================

/// Common graph algorithms
pub use crate::graph::algorithms::{
    bfs, dfs, find_cycle, has_cycle, postorder, reverse_postorder, topological_sort,
};
