//! Conversion error types.
//!
//! Every error aborts the whole conversion: a graph with silently dropped
//! nodes or edges would be a worse failure mode than an explicit abort, and
//! the transformation is deterministic, so there is nothing to retry.

use lg_core::{Coordinate, LgError, NodeId};
use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

/// Errors raised while converting a line collection into a graph.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// A line record has fewer than the 2 coordinates needed for an edge.
    #[error("line {index} has {count} coordinate(s), need at least 2")]
    MalformedGeometry { index: usize, count: usize },

    /// An edge endpoint coordinate is missing from the node interner.
    /// Internal invariant violation: unreachable when the interner was
    /// built from the same line sequence.
    #[error("line {index} endpoint {coordinate} has no interned node id")]
    UnresolvedEndpoint { index: usize, coordinate: Coordinate },

    /// An edge references a node id outside the node set at assembly time.
    #[error("edge ({u} -> {v}) references a node id outside the node set")]
    DanglingReference { u: NodeId, v: NodeId },
}

impl From<GraphError> for LgError {
    fn from(err: GraphError) -> Self {
        LgError::Invariant {
            what: err.to_string(),
        }
    }
}
