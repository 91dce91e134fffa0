//! Graph algorithms.
//!
//! Every algorithm is generic over [`Successors`](crate::graph::Successors), so it works
//! with [`DirectedGraph`](crate::graph::DirectedGraph),
//! [`IndexedGraph`](crate::graph::IndexedGraph) or any other implementation.
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`dfs`] - Depth-first search traversal
//! - [`bfs`] - Breadth-first search traversal
//! - [`postorder`] - Postorder traversal
//! - [`reverse_postorder`] - Reverse postorder traversal
//!
//! ## Cycle Detection
//!
//! - [`has_cycle`] - Check if a graph contains any cycle
//! - [`find_cycle`] - Find a cycle reachable from a vertex
//!
//! ## Topological Ordering
//!
//! - [`topological_sort`] - Deterministic topological ordering of all vertices
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | DFS/BFS | O(V + E) | General traversal |
//! | Cycle detection | O(V + E) | Validating dependency graphs |
//! | Topological Sort | O((V + E) log V) | Dependency ordering |
//!
//! # Examples
//!
//! ```rust
//! use adjgraph::graph::{algorithms, DirectedGraph, VertexId};
//!
//! let mut graph = DirectedGraph::new();
//! let a = graph.add_vertex();
//! let b = graph.add_vertex();
//! let c = graph.add_vertex();
//! graph.add_edge(a, b)?;
//! graph.add_edge(b, c)?;
//!
//! let order: Vec<VertexId> = algorithms::dfs(&graph, a).collect();
//! assert_eq!(order, vec![a, b, c]);
//! assert!(!algorithms::has_cycle(&graph));
//!
//! graph.add_edge(c, a)?;
//! assert_eq!(algorithms::find_cycle(&graph, a), Some(vec![a, b, c, a]));
//! # Ok::<(), adjgraph::Error>(())
//! ```

mod cycles;
mod topological;
mod traversal;

pub use cycles::{find_cycle, has_cycle};
pub use topological::topological_sort;
pub use traversal::{bfs, dfs, postorder, reverse_postorder, BfsIterator, DfsIterator};
