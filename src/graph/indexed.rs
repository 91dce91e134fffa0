//! Indexed graph wrapper for keyed vertices.
//!
//! This module provides [`IndexedGraph`], a convenience wrapper around [`DirectedGraph`]
//! that maps caller-supplied keys (names, ids, paths, ...) to [`VertexId`]s.
//!
//! Graph algorithms work on descriptors; callers usually think in keys. `IndexedGraph`
//! builds the graph from keys and maps algorithm results back, so that bookkeeping is
//! not repeated at every call site.
//!
//! # Examples
//!
//! ```rust
//! use adjgraph::graph::IndexedGraph;
//!
//! let mut graph: IndexedGraph<&str> = IndexedGraph::new();
//! graph.add_edge("core", "io")?;
//! graph.add_edge("io", "app")?;
//! graph.add_edge("core", "app")?;
//!
//! assert_eq!(graph.topological_sort(), Some(vec!["core", "io", "app"]));
//! # Ok::<(), adjgraph::Error>(())
//! ```

use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

use crate::{
    graph::{algorithms, DirectedGraph, EdgeId, GraphBase, Successors, VertexId},
    Result,
};

/// A graph wrapper that maps domain keys to vertex descriptors.
///
/// Every key owns exactly one vertex. Vertices are created on first use, so descriptors
/// follow the order in which keys are first seen. Edge semantics are those of
/// [`DirectedGraph`]: one edge per ordered pair, self-loops allowed.
///
/// # Type Parameters
///
/// * `K` - The key type for vertices
#[derive(Debug, Clone)]
pub struct IndexedGraph<K>
where
    K: Hash + Eq + Clone,
{
    /// The underlying graph
    graph: DirectedGraph,
    /// Key -> descriptor
    key_to_vertex: HashMap<K, VertexId>,
    /// Descriptor -> key; position == descriptor index
    vertex_to_key: Vec<K>,
}

impl<K> Default for IndexedGraph<K>
where
    K: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> IndexedGraph<K>
where
    K: Hash + Eq + Clone,
{
    /// Creates a new empty indexed graph.
    #[must_use]
    pub fn new() -> Self {
        Self::from_graph(DirectedGraph::new(), 0)
    }

    /// Creates a new indexed graph with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(vertex_capacity: usize, edge_capacity: usize) -> Self {
        Self::from_graph(
            DirectedGraph::with_capacity(vertex_capacity, edge_capacity),
            vertex_capacity,
        )
    }

    fn from_graph(graph: DirectedGraph, capacity: usize) -> Self {
        Self {
            graph,
            key_to_vertex: HashMap::with_capacity(capacity),
            vertex_to_key: Vec::with_capacity(capacity),
        }
    }

    /// Adds a vertex for `key`, or returns the existing descriptor if the key is known.
    pub fn add_vertex(&mut self, key: K) -> VertexId {
        if let Some(&vertex) = self.key_to_vertex.get(&key) {
            return vertex;
        }

        let vertex = self.graph.add_vertex();
        self.key_to_vertex.insert(key.clone(), vertex);
        self.vertex_to_key.push(key);
        vertex
    }

    /// Adds the edge `from -> to`, creating missing vertices first.
    ///
    /// # Returns
    ///
    /// * `(new_edge, true)` if the edge was inserted
    /// * `(existing_edge, false)` if the edge was already present
    ///
    /// # Errors
    ///
    /// Propagates errors from the underlying [`DirectedGraph::add_edge`].
    pub fn add_edge(&mut self, from: K, to: K) -> Result<(EdgeId, bool)> {
        let from_vertex = self.add_vertex(from);
        let to_vertex = self.add_vertex(to);
        self.graph.add_edge(from_vertex, to_vertex)
    }

    /// Returns the descriptor for `key`, if it has one.
    #[must_use]
    pub fn vertex_id(&self, key: &K) -> Option<VertexId> {
        self.key_to_vertex.get(key).copied()
    }

    /// Returns the key for `vertex`, if it exists.
    #[must_use]
    pub fn key(&self, vertex: VertexId) -> Option<&K> {
        self.vertex_to_key.get(vertex.index())
    }

    /// Returns `true` if the edge `from -> to` exists.
    #[must_use]
    pub fn contains_edge(&self, from: &K, to: &K) -> bool {
        match (self.vertex_id(from), self.vertex_id(to)) {
            (Some(from), Some(to)) => self.graph.contains_edge(from, to),
            _ => false,
        }
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.graph.num_vertices()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.graph.num_edges()
    }

    /// Returns `true` if the graph contains no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Returns the underlying [`DirectedGraph`].
    #[must_use]
    pub fn inner(&self) -> &DirectedGraph {
        &self.graph
    }

    /// Returns all keys in descriptor order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.vertex_to_key.iter()
    }

    /// Maps descriptors back to keys. Descriptors without a key are skipped.
    #[must_use]
    pub fn map_vertices_to_keys(&self, vertices: &[VertexId]) -> Vec<K> {
        vertices
            .iter()
            .filter_map(|&vertex| self.key(vertex).cloned())
            .collect()
    }
}

// Algorithm convenience methods
impl<K> IndexedGraph<K>
where
    K: Hash + Eq + Clone,
{
    /// Finds a cycle reachable from `start`, as keys. The first key is repeated at the end.
    #[must_use]
    pub fn find_cycle_from(&self, start: &K) -> Option<Vec<K>> {
        let start_vertex = self.vertex_id(start)?;
        let cycle = algorithms::find_cycle(&self.graph, start_vertex)?;
        Some(self.map_vertices_to_keys(&cycle))
    }

    /// Returns `true` if the graph contains any cycle.
    #[must_use]
    pub fn has_cycle(&self) -> bool {
        algorithms::has_cycle(&self.graph)
    }

    /// Computes a topological ordering of the keys.
    ///
    /// Returns `None` if the graph contains a cycle.
    #[must_use]
    pub fn topological_sort(&self) -> Option<Vec<K>> {
        let order = algorithms::topological_sort(&self.graph)?;
        Some(self.map_vertices_to_keys(&order))
    }
}

impl<K> IndexedGraph<K>
where
    K: Hash + Eq + Clone + Display,
{
    /// Renders the graph in Graphviz DOT format, labelling vertices with their keys.
    #[must_use]
    pub fn to_dot(&self, name: &str) -> String {
        self.graph.render_dot(name, |vertex| {
            self.key(vertex).map(ToString::to_string).unwrap_or_default()
        })
    }
}

impl<K> GraphBase for IndexedGraph<K>
where
    K: Hash + Eq + Clone,
{
    fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        self.graph.vertex_ids()
    }
}

impl<K> Successors for IndexedGraph<K>
where
    K: Hash + Eq + Clone,
{
    fn successors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> {
        self.graph.successors(vertex)
    }
}
