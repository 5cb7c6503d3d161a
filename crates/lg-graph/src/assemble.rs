//! Graph assembler: validate, annotate lengths, freeze.

use std::collections::HashMap;

use rayon::prelude::*;

use lg_core::{EdgeId, NodeId};
use lg_geom::Crs;

use crate::error::GraphResult;
use crate::graph::{Edge, Graph, Node};
use crate::validate;

/// Combine the node set and the deduplicated edge set into an immutable
/// `Graph`.
///
/// Every edge is annotated with the arc length of its full geometry under
/// the metric implied by the CRS. Fails with `DanglingReference` if any
/// edge endpoint is outside the node set. Length annotation is per-edge
/// with no shared state, so it runs data-parallel; the output does not
/// depend on scheduling.
pub fn assemble(nodes: Vec<Node>, mut edges: Vec<Edge>, crs: Crs) -> GraphResult<Graph> {
    validate::validate_refs(&nodes, &edges)?;

    let metric = crs.metric();
    edges.par_iter_mut().for_each(|edge| {
        edge.length = metric.polyline_length(&edge.geometry);
    });

    let (node_edge_offsets, node_edges) = build_adjacency(&nodes, &edges);

    Ok(Graph {
        crs,
        nodes,
        edges,
        node_edge_offsets,
        node_edges,
    })
}

/// Build compact adjacency lists: for each node, its outgoing edge ids.
fn build_adjacency(nodes: &[Node], edges: &[Edge]) -> (Vec<usize>, Vec<EdgeId>) {
    let mut node_to_edges: HashMap<NodeId, Vec<EdgeId>> = HashMap::new();
    for (i, edge) in edges.iter().enumerate() {
        node_to_edges
            .entry(edge.u)
            .or_default()
            .push(EdgeId::from_index(i as u32));
    }

    // Sort each node's edge list for determinism
    for edge_list in node_to_edges.values_mut() {
        edge_list.sort_by_key(|e| e.index());
    }

    let mut offsets = Vec::with_capacity(nodes.len() + 1);
    let mut flat_edges = Vec::with_capacity(edges.len());
    offsets.push(0);

    for node in nodes {
        if let Some(edge_list) = node_to_edges.get(&node.id) {
            flat_edges.extend_from_slice(edge_list);
        }
        offsets.push(flat_edges.len());
    }

    (offsets, flat_edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use crate::record::Attrs;
    use lg_core::{Coordinate, Id};

    fn c(x: f64, y: f64) -> Coordinate {
        Coordinate::new(x, y)
    }

    fn node(index: u32, coord: Coordinate) -> Node {
        Node {
            id: Id::from_index(index),
            x: coord.x,
            y: coord.y,
        }
    }

    fn edge(u: u32, v: u32, geometry: Vec<Coordinate>) -> Edge {
        Edge {
            u: Id::from_index(u),
            v: Id::from_index(v),
            key: 0,
            geometry,
            attrs: Attrs::new(),
            length: 0.0,
        }
    }

    fn planar() -> Crs {
        Crs::Projected { epsg: None }
    }

    #[test]
    fn lengths_are_arc_lengths() {
        let nodes = vec![node(0, c(0.0, 0.0)), node(1, c(3.0, 4.0))];
        let edges = vec![edge(0, 1, vec![c(0.0, 0.0), c(3.0, 0.0), c(3.0, 4.0)])];

        let graph = assemble(nodes, edges, planar()).unwrap();
        assert_eq!(graph.edges()[0].length, 7.0); // 3 + 4, not the 5.0 chord
    }

    #[test]
    fn dangling_reference_fails_assembly() {
        let nodes = vec![node(0, c(0.0, 0.0))];
        let edges = vec![edge(0, 3, vec![c(0.0, 0.0), c(1.0, 0.0)])];

        let err = assemble(nodes, edges, planar()).unwrap_err();
        assert_eq!(
            err,
            GraphError::DanglingReference {
                u: Id::from_index(0),
                v: Id::from_index(3),
            }
        );
    }

    #[test]
    fn adjacency_lists_outgoing_edges() {
        // 0 -> 1, 0 -> 2, 1 -> 2
        let nodes = vec![
            node(0, c(0.0, 0.0)),
            node(1, c(1.0, 0.0)),
            node(2, c(2.0, 0.0)),
        ];
        let edges = vec![
            edge(0, 1, vec![c(0.0, 0.0), c(1.0, 0.0)]),
            edge(0, 2, vec![c(0.0, 0.0), c(2.0, 0.0)]),
            edge(1, 2, vec![c(1.0, 0.0), c(2.0, 0.0)]),
        ];

        let graph = assemble(nodes, edges, planar()).unwrap();

        let n0 = Id::from_index(0);
        let out: Vec<u32> = graph.out_edges(n0).iter().map(|e| e.index()).collect();
        assert_eq!(out, vec![0, 1]);
        assert_eq!(graph.out_edges(Id::from_index(1)).len(), 1);
        assert_eq!(graph.out_edges(Id::from_index(2)).len(), 0);
        assert_eq!(graph.out_edges(Id::from_index(99)).len(), 0);
    }

    #[test]
    fn empty_graph_assembles() {
        let graph = assemble(vec![], vec![], planar()).unwrap();
        assert!(graph.nodes().is_empty());
        assert!(graph.edges().is_empty());
        assert_eq!(graph.total_length(), 0.0);
    }
}
