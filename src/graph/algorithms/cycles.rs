//! Cycle detection.
//!
//! Both functions run an iterative three-colour depth-first search: a vertex is white
//! until discovered, grey while it is on the current DFS path and black once all its
//! successors are finished. An edge into a grey vertex closes a cycle. Self-loops count.

use crate::graph::{Successors, VertexId};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Grey,
    Black,
}

/// Outcome of one DFS run from a root.
enum Search {
    /// Every reachable vertex was finished without meeting a grey vertex
    Acyclic,
    /// The DFS path at the time the back edge was found, and the vertex it points to
    BackEdge(Vec<VertexId>, VertexId),
}

fn search_from<G: Successors>(graph: &G, root: VertexId, colors: &mut [Color]) -> Search {
    if colors.get(root.index()) != Some(&Color::White) {
        return Search::Acyclic;
    }

    // (vertex, its successors, next successor to look at)
    let mut stack: Vec<(VertexId, Vec<VertexId>, usize)> = Vec::new();
    colors[root.index()] = Color::Grey;
    stack.push((root, graph.successors(root).collect(), 0));

    while let Some((vertex, successors, cursor)) = stack.last_mut() {
        let Some(&succ) = successors.get(*cursor) else {
            colors[vertex.index()] = Color::Black;
            stack.pop();
            continue;
        };
        *cursor += 1;

        match colors.get(succ.index()) {
            Some(Color::White) => {
                colors[succ.index()] = Color::Grey;
                stack.push((succ, graph.successors(succ).collect(), 0));
            }
            Some(Color::Grey) => {
                let path = stack.iter().map(|(v, _, _)| *v).collect();
                return Search::BackEdge(path, succ);
            }
            Some(Color::Black) | None => {}
        }
    }

    Search::Acyclic
}

/// Returns `true` if the graph contains a directed cycle anywhere.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
///
/// # Examples
///
/// ```rust
/// use adjgraph::graph::{algorithms::has_cycle, DirectedGraph};
///
/// let mut graph = DirectedGraph::new();
/// let a = graph.add_vertex();
/// let b = graph.add_vertex();
/// graph.add_edge(a, b)?;
/// assert!(!has_cycle(&graph));
///
/// graph.add_edge(b, a)?;
/// assert!(has_cycle(&graph));
/// # Ok::<(), adjgraph::Error>(())
/// ```
#[must_use]
pub fn has_cycle<G: Successors>(graph: &G) -> bool {
    let mut colors = vec![Color::White; graph.vertex_count()];
    graph
        .vertex_ids()
        .any(|root| matches!(search_from(graph, root, &mut colors), Search::BackEdge(..)))
}

/// Finds a cycle reachable from `start`.
///
/// # Returns
///
/// The vertices of the cycle in edge order, with the first vertex repeated at the end
/// (`[a, b, c, a]` for `a -> b -> c -> a`, `[a, a]` for a self-loop), or `None` if no cycle
/// is reachable from `start` or `start` is not in the graph.
#[must_use]
pub fn find_cycle<G: Successors>(graph: &G, start: VertexId) -> Option<Vec<VertexId>> {
    let mut colors = vec![Color::White; graph.vertex_count()];
    match search_from(graph, start, &mut colors) {
        Search::Acyclic => None,
        Search::BackEdge(path, entry) => {
            let from = path.iter().position(|&v| v == entry)?;
            let mut cycle = path[from..].to_vec();
            cycle.push(entry);
            Some(cycle)
        }
    }
}
