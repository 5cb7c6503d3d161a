//! Graph validation logic.

use crate::error::{GraphError, GraphResult};
use crate::graph::{Edge, Node};

/// Check that every edge endpoint references an existing node id.
///
/// Graph consumers rely on this holding unconditionally, so it is checked
/// at the assembly boundary even though correct upstream wiring cannot
/// produce a violation.
pub(crate) fn validate_refs(nodes: &[Node], edges: &[Edge]) -> GraphResult<()> {
    let node_count = nodes.len();
    for edge in edges {
        if edge.u.index() as usize >= node_count || edge.v.index() as usize >= node_count {
            return Err(GraphError::DanglingReference {
                u: edge.u,
                v: edge.v,
            });
        }
    }
    Ok(())
}
