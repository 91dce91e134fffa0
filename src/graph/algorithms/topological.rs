//! Topological ordering using Kahn's algorithm.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::graph::{Successors, VertexId};

/// Computes a topological ordering of all vertices.
///
/// Among the vertices that are ready at any point, the one with the smallest descriptor is
/// emitted first, so the result is the lexicographically smallest valid order and does not
/// depend on hashing or traversal details.
///
/// # Returns
///
/// `Some(order)` containing every vertex exactly once, or `None` if the graph has a cycle
/// (including a self-loop).
///
/// # Complexity
///
/// - Time: O((V + E) log V)
/// - Space: O(V)
///
/// # Examples
///
/// ```rust
/// use adjgraph::graph::{algorithms::topological_sort, DirectedGraph};
///
/// let mut graph = DirectedGraph::new();
/// let shirt = graph.add_vertex();
/// let tie = graph.add_vertex();
/// let jacket = graph.add_vertex();
/// graph.add_edge(tie, jacket)?;
/// graph.add_edge(shirt, tie)?;
///
/// assert_eq!(topological_sort(&graph), Some(vec![shirt, tie, jacket]));
/// # Ok::<(), adjgraph::Error>(())
/// ```
#[must_use]
pub fn topological_sort<G: Successors>(graph: &G) -> Option<Vec<VertexId>> {
    let vertex_count = graph.vertex_count();
    let mut in_degree = vec![0usize; vertex_count];
    for vertex in graph.vertex_ids() {
        for succ in graph.successors(vertex) {
            if let Some(degree) = in_degree.get_mut(succ.index()) {
                *degree += 1;
            }
        }
    }

    let mut ready: BinaryHeap<Reverse<VertexId>> = graph
        .vertex_ids()
        .filter(|v| in_degree.get(v.index()) == Some(&0))
        .map(Reverse)
        .collect();

    let mut order = Vec::with_capacity(vertex_count);
    while let Some(Reverse(vertex)) = ready.pop() {
        order.push(vertex);
        for succ in graph.successors(vertex) {
            if let Some(degree) = in_degree.get_mut(succ.index()) {
                *degree -= 1;
                if *degree == 0 {
                    ready.push(Reverse(succ));
                }
            }
        }
    }

    if order.len() == vertex_count {
        Some(order)
    } else {
        tracing::debug!(
            ordered = order.len(),
            vertex_count,
            "topological sort found a cycle"
        );
        None
    }
}
