//! Graph traversal algorithms.
//!
//! - [`dfs`] - Iterative depth-first search (pre-order)
//! - [`bfs`] - Breadth-first search
//! - [`postorder`] - Depth-first search with post-order visitation
//! - [`reverse_postorder`] - Reverse post-order
//!
//! [`dfs`] and [`bfs`] return lazy iterators. [`postorder`] and [`reverse_postorder`]
//! return vectors since the order requires a full traversal anyway.
//!
//! All traversals visit successors in adjacency order, i.e. the order in which the edges
//! were added, which makes their output deterministic.

use std::collections::VecDeque;

use crate::graph::{Successors, VertexId};

/// Depth-first search iterator over graph vertices.
///
/// Visits each vertex reachable from the start exactly once, in pre-order.
///
/// # Type Parameters
///
/// * `'g` - Lifetime of the graph reference
/// * `G` - Graph type implementing [`Successors`]
pub struct DfsIterator<'g, G: Successors> {
    graph: &'g G,
    stack: Vec<VertexId>,
    visited: Vec<bool>,
}

impl<'g, G: Successors> DfsIterator<'g, G> {
    fn new(graph: &'g G, start: VertexId) -> Self {
        let vertex_count = graph.vertex_count();
        if start.index() >= vertex_count {
            return DfsIterator {
                graph,
                stack: Vec::new(),
                visited: Vec::new(),
            };
        }

        let mut visited = vec![false; vertex_count];
        visited[start.index()] = true;

        DfsIterator {
            graph,
            stack: vec![start],
            visited,
        }
    }
}

impl<G: Successors> Iterator for DfsIterator<'_, G> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        let vertex = self.stack.pop()?;

        // Reverse so the first successor ends on top of the stack
        let successors: Vec<VertexId> = self.graph.successors(vertex).collect();
        for &succ in successors.iter().rev() {
            if let Some(seen) = self.visited.get_mut(succ.index()) {
                if !*seen {
                    *seen = true;
                    self.stack.push(succ);
                }
            }
        }

        Some(vertex)
    }
}

/// Returns a depth-first search iterator starting from `start`.
///
/// Vertices not reachable from `start` are not visited. A `start` outside the graph
/// yields nothing.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
///
/// # Examples
///
/// ```rust
/// use adjgraph::graph::{algorithms::dfs, DirectedGraph, VertexId};
///
/// let mut graph = DirectedGraph::new();
/// let a = graph.add_vertex();
/// let b = graph.add_vertex();
/// let c = graph.add_vertex();
/// graph.add_edge(a, b)?;
/// graph.add_edge(b, c)?;
///
/// let reachable: Vec<VertexId> = dfs(&graph, a).collect();
/// assert_eq!(reachable, vec![a, b, c]);
/// # Ok::<(), adjgraph::Error>(())
/// ```
pub fn dfs<G: Successors>(graph: &G, start: VertexId) -> DfsIterator<'_, G> {
    DfsIterator::new(graph, start)
}

/// Breadth-first search iterator over graph vertices.
///
/// Visits every vertex at distance `d` from the start before any vertex at distance `d + 1`.
pub struct BfsIterator<'g, G: Successors> {
    graph: &'g G,
    queue: VecDeque<VertexId>,
    visited: Vec<bool>,
}

impl<'g, G: Successors> BfsIterator<'g, G> {
    fn new(graph: &'g G, start: VertexId) -> Self {
        let vertex_count = graph.vertex_count();
        if start.index() >= vertex_count {
            return BfsIterator {
                graph,
                queue: VecDeque::new(),
                visited: Vec::new(),
            };
        }

        let mut visited = vec![false; vertex_count];
        visited[start.index()] = true;

        BfsIterator {
            graph,
            queue: VecDeque::from([start]),
            visited,
        }
    }
}

impl<G: Successors> Iterator for BfsIterator<'_, G> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        let vertex = self.queue.pop_front()?;

        for succ in self.graph.successors(vertex) {
            if let Some(seen) = self.visited.get_mut(succ.index()) {
                if !*seen {
                    *seen = true;
                    self.queue.push_back(succ);
                }
            }
        }

        Some(vertex)
    }
}

/// Returns a breadth-first search iterator starting from `start`.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
pub fn bfs<G: Successors>(graph: &G, start: VertexId) -> BfsIterator<'_, G> {
    BfsIterator::new(graph, start)
}

/// Returns the vertices reachable from `start` in depth-first post-order.
///
/// A vertex appears after all vertices reachable from it that were first discovered
/// through it.
#[must_use]
pub fn postorder<G: Successors>(graph: &G, start: VertexId) -> Vec<VertexId> {
    let vertex_count = graph.vertex_count();
    if start.index() >= vertex_count {
        return Vec::new();
    }

    let mut order = Vec::with_capacity(vertex_count);
    let mut visited = vec![false; vertex_count];
    // (vertex, its successors, next successor to look at)
    let mut stack: Vec<(VertexId, Vec<VertexId>, usize)> = Vec::new();

    visited[start.index()] = true;
    stack.push((start, graph.successors(start).collect(), 0));

    while let Some((vertex, successors, cursor)) = stack.last_mut() {
        if let Some(&succ) = successors.get(*cursor) {
            *cursor += 1;
            if let Some(seen) = visited.get_mut(succ.index()) {
                if !*seen {
                    *seen = true;
                    stack.push((succ, graph.successors(succ).collect(), 0));
                }
            }
        } else {
            order.push(*vertex);
            stack.pop();
        }
    }

    order
}

/// Returns the vertices reachable from `start` in reverse post-order.
///
/// For an acyclic graph this is a topological order of the reachable subgraph.
#[must_use]
pub fn reverse_postorder<G: Successors>(graph: &G, start: VertexId) -> Vec<VertexId> {
    let mut order = postorder(graph, start);
    order.reverse();
    order
}
