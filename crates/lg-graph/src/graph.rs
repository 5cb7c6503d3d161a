//! Core graph data structures.

use lg_core::{Coordinate, EdgeId, NodeId};
use lg_geom::Crs;

use crate::record::Attrs;

/// A graph vertex: one distinct endpoint location.
///
/// Nodes are created once during the deduplication pass and never mutated
/// or removed afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub id: NodeId,
    pub x: f64,
    pub y: f64,
}

impl Node {
    /// The node's location as a coordinate value.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.x, self.y)
    }
}

/// A directed edge between two nodes, derived from one input line.
///
/// The full original vertex sequence is retained so `length` can be the
/// polyline arc length rather than the endpoint chord. After assembly the
/// edge is immutable.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    /// Source node id.
    pub u: NodeId,
    /// Target node id.
    pub v: NodeId,
    /// Parallel-edge disambiguator; constant 0 in this core.
    pub key: u32,
    /// Full original vertex sequence of the source line.
    pub geometry: Vec<Coordinate>,
    /// Pass-through attributes from the source feature.
    #[cfg_attr(feature = "serde", serde(default))]
    pub attrs: Attrs,
    /// Arc length along `geometry`, annotated at assembly.
    pub length: f64,
}

impl Edge {
    /// The identity of this edge within the multigraph, used for
    /// deduplication: exact integer equality on (u, v, key).
    pub fn composite_key(&self) -> (NodeId, NodeId, u32) {
        (self.u, self.v, self.key)
    }
}

/// The assembled graph: a validated, immutable directed multigraph.
///
/// Self-loops are permitted (a line starting and ending on the same
/// coordinate). The CRS descriptor of the input collection is carried
/// through unchanged.
#[derive(Debug, Clone)]
pub struct Graph {
    pub(crate) crs: Crs,
    pub(crate) nodes: Vec<Node>,
    pub(crate) edges: Vec<Edge>,

    /// Offsets for node->edge adjacency: node i's outgoing edges are in
    /// node_edges[node_edge_offsets[i]..node_edge_offsets[i+1]].
    pub(crate) node_edge_offsets: Vec<usize>,

    /// Flat list of outgoing edge ids per node (sorted by edge id for
    /// determinism).
    pub(crate) node_edges: Vec<EdgeId>,
}

impl Graph {
    /// The coordinate reference frame of all node and edge coordinates.
    pub fn crs(&self) -> Crs {
        self.crs
    }

    /// Return all nodes.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Return all edges.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Get a node by id (returns None if out of bounds).
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index() as usize)
    }

    /// Get an edge by id (returns None if out of bounds).
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index() as usize)
    }

    /// Iterate over the ids of all edges leaving a given node.
    pub fn out_edges(&self, node_id: NodeId) -> &[EdgeId] {
        let idx = node_id.index() as usize;
        if idx >= self.nodes.len() {
            return &[];
        }
        let start = self.node_edge_offsets[idx];
        let end = self.node_edge_offsets[idx + 1];
        &self.node_edges[start..end]
    }

    /// Sum of all edge lengths.
    pub fn total_length(&self) -> f64 {
        self.edges.iter().map(|e| e.length).sum()
    }
}
