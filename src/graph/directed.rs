//! The directed adjacency-list graph.
//!
//! [`DirectedGraph`] stores one adjacency list per vertex plus a global edge list. The
//! adjacency lists drive duplicate detection and [`DirectedGraph::adjacent_vertices`];
//! the global list drives [`DirectedGraph::edges`] and O(1) descriptor lookups for
//! [`DirectedGraph::source`] and [`DirectedGraph::target`].
//!
//! # Descriptor Invariants
//!
//! - Vertex descriptors are exactly `0..num_vertices()`, in creation order
//! - Edge descriptors are exactly `0..num_edges()`, in creation order
//! - At most one edge exists per ordered `(source, target)` pair; self-loops are allowed
//! - Nothing is ever removed, so a descriptor stays valid for the life of the graph

use std::collections::HashMap;

use crate::{
    graph::{
        AdjacencyIter, EdgeId, EdgeIter, EdgeLookup, EdgeRecord, GraphBase, GraphConfig,
        Successors, VertexId, VertexIter,
    },
    utils::DotWriter,
    Result,
};

/// A simple directed graph backed by adjacency lists.
///
/// Vertices carry no payload; they are identified purely by their [`VertexId`]. Edges are
/// identified by [`EdgeId`] and stored as [`EdgeRecord`]s.
///
/// All operations that take a descriptor check it and return [`Error::InvalidVertex`] or
/// [`Error::InvalidEdge`] instead of reading out of range. Failed calls never modify the
/// graph.
///
/// [`Error::InvalidVertex`]: crate::Error::InvalidVertex
/// [`Error::InvalidEdge`]: crate::Error::InvalidEdge
///
/// # Examples
///
/// ```rust
/// use adjgraph::graph::{DirectedGraph, EdgeId, VertexId};
///
/// let mut graph = DirectedGraph::new();
/// let a = graph.add_vertex();
/// let b = graph.add_vertex();
/// let c = graph.add_vertex();
///
/// graph.add_edge(a, b)?;
/// graph.add_edge(a, c)?;
///
/// let adjacent: Vec<VertexId> = graph.adjacent_vertices(a)?.collect();
/// assert_eq!(adjacent, vec![b, c]);
/// assert_eq!(graph.num_edges(), 2);
/// assert_eq!(graph.source(EdgeId::new(1))?, a);
/// assert_eq!(graph.target(EdgeId::new(1))?, c);
/// # Ok::<(), adjgraph::Error>(())
/// ```
///
/// # Thread Safety
///
/// `DirectedGraph` is [`Send`] and [`Sync`]. Mutation requires `&mut self`, so sharing
/// across threads needs external synchronization.
#[derive(Debug, Clone, Default)]
pub struct DirectedGraph {
    /// Outgoing edges per vertex, in insertion order
    adjacency: Vec<Vec<EdgeRecord>>,
    /// All edges, in global insertion order; position == descriptor
    edges: Vec<EdgeRecord>,
    /// `(source, target)` index, present only for [`EdgeLookup::Hashed`]
    pair_index: Option<HashMap<(VertexId, VertexId), EdgeId>>,
    config: GraphConfig,
}

impl DirectedGraph {
    /// Creates a new empty graph with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty graph with pre-allocated storage.
    #[must_use]
    pub fn with_capacity(vertex_capacity: usize, edge_capacity: usize) -> Self {
        Self::with_config(
            GraphConfig::scan()
                .with_vertex_capacity(vertex_capacity)
                .with_edge_capacity(edge_capacity),
        )
    }

    /// Creates a new empty graph using the given configuration.
    #[must_use]
    pub fn with_config(config: GraphConfig) -> Self {
        let pair_index = match config.edge_lookup {
            EdgeLookup::Scan => None,
            EdgeLookup::Hashed => Some(HashMap::with_capacity(config.edge_capacity)),
        };

        DirectedGraph {
            adjacency: Vec::with_capacity(config.vertex_capacity),
            edges: Vec::with_capacity(config.edge_capacity),
            pair_index,
            config,
        }
    }

    /// Returns the configuration this graph was created with.
    #[must_use]
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Adds a vertex and returns its descriptor.
    ///
    /// The n-th call on a graph returns `VertexId(n - 1)`.
    pub fn add_vertex(&mut self) -> VertexId {
        let vertex = VertexId::new(self.adjacency.len());
        self.adjacency.push(Vec::new());
        tracing::trace!(%vertex, "added vertex");
        vertex
    }

    /// Adds the edge `source -> target` unless it already exists.
    ///
    /// # Arguments
    ///
    /// * `source` - Vertex the edge leaves
    /// * `target` - Vertex the edge enters (may equal `source`)
    ///
    /// # Returns
    ///
    /// * `(new_edge, true)` if the edge was inserted
    /// * `(existing_edge, false)` if an edge `source -> target` was already present; the
    ///   graph is left unchanged
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidVertex`] if either endpoint is not a vertex of this graph.
    pub fn add_edge(&mut self, source: VertexId, target: VertexId) -> Result<(EdgeId, bool)> {
        self.check_vertex(source)?;
        self.check_vertex(target)?;

        if let Some(existing) = self.find_edge(source, target) {
            tracing::trace!(%source, %target, edge = %existing, "duplicate edge rejected");
            return Ok((existing, false));
        }

        let record = EdgeRecord {
            edge_no: EdgeId::new(self.edges.len()),
            source,
            target,
        };

        if let Some(out_edges) = self.adjacency.get_mut(source.index()) {
            out_edges.push(record);
        }
        self.edges.push(record);
        if let Some(index) = self.pair_index.as_mut() {
            index.insert((source, target), record.edge_no);
        }

        tracing::trace!(%source, %target, edge = %record.edge_no, "added edge");
        Ok((record.edge_no, true))
    }

    /// Returns the targets of all outgoing edges of `vertex`, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidVertex`] if `vertex` is not a vertex of this graph.
    pub fn adjacent_vertices(&self, vertex: VertexId) -> Result<AdjacencyIter<'_>> {
        Ok(AdjacencyIter::new(self.out_edges(vertex)?))
    }

    /// Returns the outgoing edge records of `vertex`, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidVertex`] if `vertex` is not a vertex of this graph.
    pub fn out_edges(&self, vertex: VertexId) -> Result<&[EdgeRecord]> {
        self.adjacency
            .get(vertex.index())
            .map(Vec::as_slice)
            .ok_or_else(|| invalid_vertex!(vertex, self.adjacency.len()))
    }

    /// Returns the number of outgoing edges of `vertex`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidVertex`] if `vertex` is not a vertex of this graph.
    pub fn out_degree(&self, vertex: VertexId) -> Result<usize> {
        Ok(self.out_edges(vertex)?.len())
    }

    /// Looks up the edge `source -> target` without modifying the graph.
    ///
    /// Direction matters: `edge(a, b)` says nothing about `edge(b, a)`.
    ///
    /// # Returns
    ///
    /// `Some(edge)` if the edge exists, `None` otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidVertex`] if either endpoint is not a vertex of this graph.
    pub fn edge(&self, source: VertexId, target: VertexId) -> Result<Option<EdgeId>> {
        self.check_vertex(source)?;
        self.check_vertex(target)?;
        Ok(self.find_edge(source, target))
    }

    /// Returns `true` if the edge `source -> target` exists.
    ///
    /// Unlike [`DirectedGraph::edge`] this never fails; unknown vertices simply have no edges.
    #[must_use]
    pub fn contains_edge(&self, source: VertexId, target: VertexId) -> bool {
        self.find_edge(source, target).is_some()
    }

    /// Returns all edge descriptors in the order the edges were added.
    #[must_use]
    pub fn edges(&self) -> EdgeIter<'_> {
        EdgeIter::new(&self.edges)
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns `true` if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns the stored record for `edge`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidEdge`] if `edge` is not an edge of this graph.
    pub fn edge_record(&self, edge: EdgeId) -> Result<&EdgeRecord> {
        self.edges
            .get(edge.index())
            .ok_or_else(|| invalid_edge!(edge, self.edges.len()))
    }

    /// Returns the source vertex of `edge`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidEdge`] if `edge` is not an edge of this graph.
    pub fn source(&self, edge: EdgeId) -> Result<VertexId> {
        Ok(self.edge_record(edge)?.source)
    }

    /// Returns the target vertex of `edge`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidEdge`] if `edge` is not an edge of this graph.
    pub fn target(&self, edge: EdgeId) -> Result<VertexId> {
        Ok(self.edge_record(edge)?.target)
    }

    /// Returns `(source, target)` of `edge`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidEdge`] if `edge` is not an edge of this graph.
    pub fn edge_endpoints(&self, edge: EdgeId) -> Result<(VertexId, VertexId)> {
        let record = self.edge_record(edge)?;
        Ok((record.source, record.target))
    }

    /// Returns the `n`-th vertex of the graph.
    ///
    /// Descriptors are dense, so this is `VertexId(n)` whenever `n < num_vertices()`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidVertex`] if `n >= num_vertices()`.
    pub fn vertex(&self, n: usize) -> Result<VertexId> {
        let vertex = VertexId::new(n);
        self.check_vertex(vertex)?;
        Ok(vertex)
    }

    /// Returns all vertex descriptors in ascending order.
    #[must_use]
    pub fn vertices(&self) -> VertexIter {
        VertexIter::new(self.adjacency.len())
    }

    /// Renders the graph in Graphviz DOT format.
    ///
    /// Vertices are emitted in descriptor order and labelled with their descriptor, edges in
    /// insertion order and labelled with theirs.
    #[must_use]
    pub fn to_dot(&self, name: &str) -> String {
        self.render_dot(name, |vertex| vertex.to_string())
    }

    pub(crate) fn render_dot<F>(&self, name: &str, label: F) -> String
    where
        F: Fn(VertexId) -> String,
    {
        let mut writer = DotWriter::new(name);
        for vertex in self.vertices() {
            writer.node(&vertex.to_string(), &label(vertex));
        }
        for record in &self.edges {
            writer.edge(
                &record.source.to_string(),
                &record.target.to_string(),
                &record.edge_no.to_string(),
            );
        }
        writer.finish()
    }

    fn check_vertex(&self, vertex: VertexId) -> Result<()> {
        if vertex.index() < self.adjacency.len() {
            Ok(())
        } else {
            Err(invalid_vertex!(vertex, self.adjacency.len()))
        }
    }

    fn find_edge(&self, source: VertexId, target: VertexId) -> Option<EdgeId> {
        match &self.pair_index {
            Some(index) => index.get(&(source, target)).copied(),
            None => self
                .adjacency
                .get(source.index())?
                .iter()
                .find(|record| record.target == target)
                .map(|record| record.edge_no),
        }
    }
}

impl GraphBase for DirectedGraph {
    fn vertex_count(&self) -> usize {
        self.num_vertices()
    }

    fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        self.vertices()
    }
}

impl Successors for DirectedGraph {
    fn successors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> {
        self.adjacent_vertices(vertex)
            .unwrap_or_else(|_| AdjacencyIter::empty())
    }
}
