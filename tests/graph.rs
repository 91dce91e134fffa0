//! Contract tests for `DirectedGraph`.
//!
//! These tests exercise the public API only and check the guarantees callers rely on:
//! 1. Dense, creation-ordered vertex and edge descriptors
//! 2. At most one edge per ordered pair, duplicates returning the original descriptor
//! 3. Adjacency, vertex and edge views in insertion order
//! 4. Checked access for out-of-range descriptors
//!
//! Every scenario runs against both edge lookup strategies.

use adjgraph::{
    graph::{DirectedGraph, EdgeId, EdgeLookup, GraphConfig, VertexId},
    Error, Result,
};

/// Runs `scenario` once per edge lookup strategy.
fn for_each_lookup(scenario: impl Fn(DirectedGraph) -> Result<()>) -> Result<()> {
    for lookup in [EdgeLookup::Scan, EdgeLookup::Hashed] {
        scenario(DirectedGraph::with_config(
            GraphConfig::default().with_edge_lookup(lookup),
        ))?;
    }
    Ok(())
}

#[test]
fn test_add_edge_single() -> Result<()> {
    for_each_lookup(|mut g| {
        let a = g.add_vertex();
        let b = g.add_vertex();

        let (_, inserted) = g.add_edge(a, b)?;
        assert!(inserted);
        assert_eq!(g.num_edges(), 1);
        Ok(())
    })
}

#[test]
fn test_add_edge_both_directions() -> Result<()> {
    for_each_lookup(|mut g| {
        let a = g.add_vertex();
        let b = g.add_vertex();

        assert!(g.add_edge(a, b)?.1);
        assert!(g.add_edge(b, a)?.1);
        assert_eq!(g.num_edges(), 2);
        Ok(())
    })
}

#[test]
fn test_add_edge_shared_target() -> Result<()> {
    for_each_lookup(|mut g| {
        let a = g.add_vertex();
        let b = g.add_vertex();
        let c = g.add_vertex();

        assert!(g.add_edge(a, b)?.1);
        assert!(g.add_edge(c, b)?.1);
        assert_eq!(g.num_edges(), 2);
        Ok(())
    })
}

#[test]
fn test_add_edge_twice_returns_original() -> Result<()> {
    for_each_lookup(|mut g| {
        let a = g.add_vertex();
        let b = g.add_vertex();

        let (first, inserted) = g.add_edge(a, b)?;
        assert!(inserted);

        let (second, inserted) = g.add_edge(a, b)?;
        assert!(!inserted);
        assert_eq!(second, first);
        assert_eq!(g.num_edges(), 1);
        Ok(())
    })
}

#[test]
fn test_add_vertex_counts() -> Result<()> {
    for_each_lookup(|mut g| {
        assert_eq!(g.num_vertices(), 0);
        let a = g.add_vertex();
        assert_eq!(g.num_vertices(), 1);
        let b = g.add_vertex();
        g.add_edge(a, b)?;
        assert_eq!(g.num_vertices(), 2);

        g.add_vertex();
        g.add_vertex();
        assert_eq!(g.num_vertices(), 4);

        g.add_vertex();
        g.add_vertex();
        assert_eq!(g.num_vertices(), 6);
        Ok(())
    })
}

#[test]
fn test_add_vertex_descriptors_follow_creation_order() -> Result<()> {
    for_each_lookup(|mut g| {
        for k in 1..=20 {
            let vertex = g.add_vertex();
            assert_eq!(vertex, VertexId::new(k - 1));
            assert_eq!(g.num_vertices(), k);
        }
        Ok(())
    })
}

#[test]
fn test_adjacent_vertices_two_targets() -> Result<()> {
    for_each_lookup(|mut g| {
        let a = g.add_vertex();
        let b = g.add_vertex();
        let c = g.add_vertex();

        assert!(g.add_edge(b, a)?.1);
        assert!(g.add_edge(b, c)?.1);
        assert_eq!(g.num_edges(), 2);

        let mut adjacent = g.adjacent_vertices(b)?;
        assert_eq!(adjacent.next(), Some(a));
        assert_eq!(adjacent.next(), Some(c));
        assert_eq!(adjacent.next(), None);
        Ok(())
    })
}

#[test]
fn test_adjacent_vertices_only_outgoing() -> Result<()> {
    for_each_lookup(|mut g| {
        let a = g.add_vertex();
        let b = g.add_vertex();
        let c = g.add_vertex();

        g.add_edge(b, a)?;
        g.add_edge(c, b)?;

        let adjacent: Vec<VertexId> = g.adjacent_vertices(b)?.collect();
        assert_eq!(adjacent, vec![a]);
        Ok(())
    })
}

#[test]
fn test_adjacent_vertices_self_loop() -> Result<()> {
    for_each_lookup(|mut g| {
        let _a = g.add_vertex();
        let b = g.add_vertex();
        let _c = g.add_vertex();

        assert!(g.add_edge(b, b)?.1);
        assert_eq!(g.num_edges(), 1);

        let adjacent: Vec<VertexId> = g.adjacent_vertices(b)?.collect();
        assert_eq!(adjacent, vec![b]);
        Ok(())
    })
}

#[test]
fn test_fan_out_scenario() -> Result<()> {
    for_each_lookup(|mut g| {
        let a = g.add_vertex();
        let b = g.add_vertex();
        let c = g.add_vertex();
        assert_eq!((a.index(), b.index(), c.index()), (0, 1, 2));

        g.add_edge(a, b)?;
        g.add_edge(a, c)?;

        let adjacent: Vec<usize> = g.adjacent_vertices(a)?.map(VertexId::index).collect();
        assert_eq!(adjacent, vec![1, 2]);
        assert_eq!(g.num_edges(), 2);
        assert_eq!(g.source(EdgeId::new(0))?, VertexId::new(0));
        assert_eq!(g.target(EdgeId::new(0))?, VertexId::new(1));
        assert_eq!(g.source(EdgeId::new(1))?, VertexId::new(0));
        assert_eq!(g.target(EdgeId::new(1))?, VertexId::new(2));
        Ok(())
    })
}

#[test]
fn test_edge_found_after_add() -> Result<()> {
    for_each_lookup(|mut g| {
        let a = g.add_vertex();
        let b = g.add_vertex();

        let (ab, _) = g.add_edge(a, b)?;
        assert_eq!(g.add_edge(a, b)?, (ab, false));
        assert_eq!(g.edge(a, b)?, Some(ab));
        assert_eq!(g.num_edges(), 1);
        assert_eq!(g.source(ab)?, a);
        assert_eq!(g.target(ab)?, b);
        Ok(())
    })
}

#[test]
fn test_edge_missing() -> Result<()> {
    for_each_lookup(|mut g| {
        let a = g.add_vertex();
        let b = g.add_vertex();
        let c = g.add_vertex();

        let (ab, _) = g.add_edge(a, b)?;
        assert_eq!(g.edge(a, b)?, Some(ab));
        assert_eq!(g.edge(a, c)?, None);
        assert_eq!(g.edge(b, a)?, None);
        Ok(())
    })
}

#[test]
fn test_edge_distinguishes_targets() -> Result<()> {
    for_each_lookup(|mut g| {
        let a = g.add_vertex();
        let b = g.add_vertex();
        let c = g.add_vertex();

        let (ab, _) = g.add_edge(a, b)?;
        let (ac, _) = g.add_edge(a, c)?;
        assert_ne!(ab, ac);

        assert_eq!(g.add_edge(a, b)?, (ab, false));
        assert_eq!(g.edge(a, b)?, Some(ab));
        assert_eq!(g.edge(a, c)?, Some(ac));
        Ok(())
    })
}

#[test]
fn test_edges_in_insertion_order() -> Result<()> {
    for_each_lookup(|mut g| {
        let a = g.add_vertex();
        let b = g.add_vertex();
        let c = g.add_vertex();

        let (ab, _) = g.add_edge(a, b)?;
        let (ac, _) = g.add_edge(a, c)?;
        let (bc, _) = g.add_edge(b, c)?;

        let edges: Vec<EdgeId> = g.edges().collect();
        assert_eq!(edges, vec![ab, ac, bc]);
        Ok(())
    })
}

#[test]
fn test_edges_empty() -> Result<()> {
    for_each_lookup(|mut g| {
        g.add_vertex();
        g.add_vertex();
        g.add_vertex();

        assert_eq!(g.edges().next(), None);
        Ok(())
    })
}

#[test]
fn test_many_isolated_vertices() -> Result<()> {
    for_each_lookup(|mut g| {
        for _ in 0..100 {
            g.add_vertex();
        }

        assert_eq!(g.num_vertices(), 100);
        assert_eq!(g.num_edges(), 0);
        assert_eq!(g.edges().count(), 0);
        Ok(())
    })
}

#[test]
fn test_self_loop_scenario() -> Result<()> {
    for_each_lookup(|mut g| {
        let a = g.add_vertex();

        let (edge, inserted) = g.add_edge(a, a)?;
        assert!(inserted);
        assert_eq!(g.add_edge(a, a)?, (edge, false));
        assert_eq!(g.source(edge)?, a);
        assert_eq!(g.target(edge)?, a);
        Ok(())
    })
}

#[test]
fn test_vertex_positions() -> Result<()> {
    for_each_lookup(|mut g| {
        let a = g.add_vertex();
        let b = g.add_vertex();
        let c = g.add_vertex();

        assert_eq!(g.vertex(0)?, a);
        assert_eq!(g.vertex(1)?, b);
        assert_eq!(g.vertex(2)?, c);
        assert!(matches!(g.vertex(3), Err(Error::InvalidVertex { .. })));
        Ok(())
    })
}

#[test]
fn test_vertices_ascending() -> Result<()> {
    for_each_lookup(|mut g| {
        let a = g.add_vertex();
        let b = g.add_vertex();
        g.add_edge(b, a)?;
        let c = g.add_vertex();

        let vertices: Vec<VertexId> = g.vertices().collect();
        assert_eq!(vertices, vec![a, b, c]);
        Ok(())
    })
}

#[test]
fn test_invalid_descriptors_are_rejected() -> Result<()> {
    for_each_lookup(|mut g| {
        let a = g.add_vertex();
        let ghost = VertexId::new(1);

        assert_eq!(
            g.add_edge(a, ghost),
            Err(Error::InvalidVertex {
                vertex: 1,
                count: 1
            })
        );
        assert!(g.adjacent_vertices(ghost).is_err());
        assert!(g.edge(ghost, a).is_err());
        assert_eq!(
            g.source(EdgeId::new(0)),
            Err(Error::InvalidEdge { edge: 0, count: 0 })
        );
        assert!(g.target(EdgeId::new(0)).is_err());

        assert_eq!(g.num_vertices(), 1);
        assert_eq!(g.num_edges(), 0);
        Ok(())
    })
}

#[test]
fn test_error_messages() {
    let g = DirectedGraph::new();
    let err = g.vertex(0).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid vertex descriptor 0 - graph has 0 vertices"
    );
}
