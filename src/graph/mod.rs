//! Directed adjacency-list graph.
//!
//! This module contains the [`DirectedGraph`] container together with the descriptor types,
//! iterator views and traits built around it.
//!
//! # Architecture
//!
//! - [`DirectedGraph`] - the container; owns all vertex and edge records
//! - [`VertexId`] / [`EdgeId`] - dense descriptors, assigned in creation order
//! - [`EdgeRecord`] - the stored form of an edge
//! - [`VertexIter`] / [`EdgeIter`] / [`AdjacencyIter`] - lazy views
//! - [`GraphBase`] / [`Successors`] - traits consumed by [`algorithms`]
//! - [`GraphConfig`] / [`EdgeLookup`] - construction-time options
//! - [`IndexedGraph`] - maps user keys onto vertex descriptors
//!
//! # Examples
//!
//! ```rust
//! use adjgraph::graph::{algorithms, DirectedGraph};
//!
//! let mut graph = DirectedGraph::new();
//! let a = graph.add_vertex();
//! let b = graph.add_vertex();
//! let c = graph.add_vertex();
//! graph.add_edge(a, b)?;
//! graph.add_edge(b, c)?;
//!
//! assert_eq!(algorithms::topological_sort(&graph), Some(vec![a, b, c]));
//! # Ok::<(), adjgraph::Error>(())
//! ```

pub mod algorithms;
mod config;
mod directed;
mod edge;
mod indexed;
mod iter;
mod traits;
mod vertex;

pub use config::{EdgeLookup, GraphConfig};
pub use directed::DirectedGraph;
pub use edge::{EdgeId, EdgeRecord};
pub use indexed::IndexedGraph;
pub use iter::{AdjacencyIter, EdgeIter, VertexIter};
pub use traits::{GraphBase, Successors};
pub use vertex::VertexId;
