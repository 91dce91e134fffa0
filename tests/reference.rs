//! Differential tests against `petgraph`.
//!
//! Random sequences of vertex and edge insertions are replayed against `DirectedGraph`
//! (with both lookup strategies), against `petgraph::Graph` using `update_edge`, which
//! has the same "one edge per ordered pair" semantics, and against a plain list of
//! accepted edges. All three must agree after every step.

use adjgraph::{
    graph::{algorithms, DirectedGraph, EdgeId, EdgeLookup, GraphConfig, VertexId},
    Error,
};
use petgraph::graph::{DiGraph, NodeIndex};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    AddVertex,
    AddEdge(usize, usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        1 => Just(Op::AddVertex),
        4 => (0usize..12, 0usize..12).prop_map(|(s, t)| Op::AddEdge(s, t)),
    ]
}

struct Harness {
    ours: DirectedGraph,
    reference: DiGraph<(), ()>,
    accepted: Vec<(usize, usize)>,
}

impl Harness {
    fn new(lookup: EdgeLookup) -> Self {
        Harness {
            ours: DirectedGraph::with_config(GraphConfig::default().with_edge_lookup(lookup)),
            reference: DiGraph::new(),
            accepted: Vec::new(),
        }
    }

    fn apply(&mut self, op: &Op) -> Result<(), TestCaseError> {
        match *op {
            Op::AddVertex => {
                let ours = self.ours.add_vertex();
                let reference = self.reference.add_node(());
                prop_assert_eq!(ours.index(), reference.index());
            }
            Op::AddEdge(s, t) => {
                let vertex_count = self.ours.num_vertices();
                let edges_before = self.ours.num_edges();
                let result = self.ours.add_edge(VertexId::new(s), VertexId::new(t));

                if s >= vertex_count || t >= vertex_count {
                    let bad = if s >= vertex_count { s } else { t };
                    prop_assert_eq!(
                        result,
                        Err(Error::InvalidVertex {
                            vertex: bad,
                            count: vertex_count
                        })
                    );
                    prop_assert_eq!(self.ours.num_edges(), edges_before);
                    return Ok(());
                }

                let (edge, inserted) = result.map_err(|e| TestCaseError::fail(e.to_string()))?;
                let existing = self.accepted.iter().position(|&pair| pair == (s, t));
                let reference = self
                    .reference
                    .update_edge(NodeIndex::new(s), NodeIndex::new(t), ());

                prop_assert_eq!(edge.index(), reference.index());
                match existing {
                    Some(index) => {
                        prop_assert!(!inserted);
                        prop_assert_eq!(edge, EdgeId::new(index));
                    }
                    None => {
                        prop_assert!(inserted);
                        prop_assert_eq!(edge, EdgeId::new(self.accepted.len()));
                        self.accepted.push((s, t));
                    }
                }
            }
        }
        Ok(())
    }

    fn check(&self) -> Result<(), TestCaseError> {
        let g = &self.ours;
        prop_assert_eq!(g.num_vertices(), self.reference.node_count());
        prop_assert_eq!(g.num_edges(), self.reference.edge_count());
        prop_assert_eq!(g.num_edges(), self.accepted.len());

        let vertices: Vec<usize> = g.vertices().map(VertexId::index).collect();
        prop_assert_eq!(vertices, (0..g.num_vertices()).collect::<Vec<_>>());

        let edges: Vec<usize> = g.edges().map(EdgeId::index).collect();
        prop_assert_eq!(edges, (0..g.num_edges()).collect::<Vec<_>>());

        for (index, &(s, t)) in self.accepted.iter().enumerate() {
            let edge = EdgeId::new(index);
            prop_assert_eq!(
                g.edge_endpoints(edge).ok(),
                Some((VertexId::new(s), VertexId::new(t)))
            );
            let reference = self
                .reference
                .edge_endpoints(petgraph::graph::EdgeIndex::new(index))
                .map(|(a, b)| (a.index(), b.index()));
            prop_assert_eq!(reference, Some((s, t)));
        }

        for vertex in g.vertices() {
            let expected: Vec<VertexId> = self
                .accepted
                .iter()
                .filter(|&&(s, _)| s == vertex.index())
                .map(|&(_, t)| VertexId::new(t))
                .collect();
            let adjacent: Vec<VertexId> = g
                .adjacent_vertices(vertex)
                .map_err(|e| TestCaseError::fail(e.to_string()))?
                .collect();
            prop_assert_eq!(&adjacent, &expected);

            let mut ours_sorted: Vec<usize> = adjacent.iter().map(|v| v.index()).collect();
            let mut reference_sorted: Vec<usize> = self
                .reference
                .neighbors(NodeIndex::new(vertex.index()))
                .map(|n| n.index())
                .collect();
            ours_sorted.sort_unstable();
            reference_sorted.sort_unstable();
            prop_assert_eq!(ours_sorted, reference_sorted);

            for target in g.vertices() {
                let ours = g.edge(vertex, target).ok().flatten().map(EdgeId::index);
                let reference = self
                    .reference
                    .find_edge(NodeIndex::new(vertex.index()), NodeIndex::new(target.index()))
                    .map(|e| e.index());
                prop_assert_eq!(ours, reference);
            }
        }

        prop_assert_eq!(
            algorithms::has_cycle(g),
            petgraph::algo::is_cyclic_directed(&self.reference)
        );

        match algorithms::topological_sort(g) {
            Some(order) => {
                prop_assert!(petgraph::algo::toposort(&self.reference, None).is_ok());
                prop_assert_eq!(order.len(), g.num_vertices());
                let mut position = vec![0usize; order.len()];
                for (i, v) in order.iter().enumerate() {
                    position[v.index()] = i;
                }
                for &(s, t) in &self.accepted {
                    prop_assert!(position[s] < position[t]);
                }
            }
            None => {
                prop_assert!(petgraph::algo::toposort(&self.reference, None).is_err());
            }
        }

        Ok(())
    }
}

proptest! {
    #[test]
    fn matches_reference_with_scan(ops in proptest::collection::vec(op(), 0..80)) {
        let mut harness = Harness::new(EdgeLookup::Scan);
        for op in &ops {
            harness.apply(op)?;
            harness.check()?;
        }
    }

    #[test]
    fn matches_reference_with_hash_index(ops in proptest::collection::vec(op(), 0..80)) {
        let mut harness = Harness::new(EdgeLookup::Hashed);
        for op in &ops {
            harness.apply(op)?;
            harness.check()?;
        }
    }

    #[test]
    fn lookup_strategies_agree(ops in proptest::collection::vec(op(), 0..80)) {
        let mut scan = DirectedGraph::with_config(GraphConfig::scan());
        let mut hashed = DirectedGraph::with_config(GraphConfig::hashed());
        for op in &ops {
            match *op {
                Op::AddVertex => {
                    prop_assert_eq!(scan.add_vertex(), hashed.add_vertex());
                }
                Op::AddEdge(s, t) => {
                    let (s, t) = (VertexId::new(s), VertexId::new(t));
                    prop_assert_eq!(scan.add_edge(s, t), hashed.add_edge(s, t));
                }
            }
        }
        prop_assert_eq!(scan.edges().collect::<Vec<_>>(), hashed.edges().collect::<Vec<_>>());
        prop_assert_eq!(scan.to_dot("g"), hashed.to_dot("g"));
    }
}
