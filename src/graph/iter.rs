//! Lazy views over the vertices, edges and adjacency lists of a graph.
//!
//! Each view borrows the graph's storage and keeps its own cursor, so creating one
//! allocates nothing and calling the producing method again starts a fresh pass.
//! The range a view covers is fixed when it is created. Because views hold a shared
//! borrow, the graph cannot be mutated while one is alive.

use std::iter::FusedIterator;
use std::ops::Range;
use std::slice;

use crate::graph::{EdgeId, EdgeRecord, VertexId};

/// Iterator over all vertex descriptors of a graph in ascending order.
///
/// Returned by [`DirectedGraph::vertices`](crate::graph::DirectedGraph::vertices).
#[derive(Debug, Clone)]
pub struct VertexIter {
    range: Range<usize>,
}

impl VertexIter {
    pub(crate) fn new(count: usize) -> Self {
        VertexIter { range: 0..count }
    }
}

impl Iterator for VertexIter {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().map(VertexId::new)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl DoubleEndedIterator for VertexIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.range.next_back().map(VertexId::new)
    }
}

impl ExactSizeIterator for VertexIter {}

impl FusedIterator for VertexIter {}

/// Iterator over all edge descriptors of a graph in global insertion order.
///
/// Returned by [`DirectedGraph::edges`](crate::graph::DirectedGraph::edges). Use
/// [`EdgeIter::records`] to walk the full records instead of just the descriptors.
#[derive(Debug, Clone)]
pub struct EdgeIter<'g> {
    inner: slice::Iter<'g, EdgeRecord>,
}

impl<'g> EdgeIter<'g> {
    pub(crate) fn new(edges: &'g [EdgeRecord]) -> Self {
        EdgeIter {
            inner: edges.iter(),
        }
    }

    /// Converts this view into one that yields the remaining edge records.
    pub fn records(self) -> slice::Iter<'g, EdgeRecord> {
        self.inner
    }
}

impl Iterator for EdgeIter<'_> {
    type Item = EdgeId;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|record| record.edge_no)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for EdgeIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|record| record.edge_no)
    }
}

impl ExactSizeIterator for EdgeIter<'_> {}

impl FusedIterator for EdgeIter<'_> {}

/// Iterator over the targets of a vertex's outgoing edges, in the order those edges
/// were added.
///
/// Returned by
/// [`DirectedGraph::adjacent_vertices`](crate::graph::DirectedGraph::adjacent_vertices).
#[derive(Debug, Clone)]
pub struct AdjacencyIter<'g> {
    inner: slice::Iter<'g, EdgeRecord>,
}

impl<'g> AdjacencyIter<'g> {
    pub(crate) fn new(out_edges: &'g [EdgeRecord]) -> Self {
        AdjacencyIter {
            inner: out_edges.iter(),
        }
    }

    pub(crate) fn empty() -> Self {
        AdjacencyIter::new(&[])
    }
}

impl Iterator for AdjacencyIter<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|record| record.target)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for AdjacencyIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|record| record.target)
    }
}

impl ExactSizeIterator for AdjacencyIter<'_> {}

impl FusedIterator for AdjacencyIter<'_> {}
