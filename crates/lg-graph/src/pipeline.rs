//! The conversion pipeline, as explicit function composition.

use tracing::debug;

use crate::assemble;
use crate::builder;
use crate::dedupe;
use crate::error::GraphResult;
use crate::extract;
use crate::graph::Graph;
use crate::record::LineCollection;

/// Convert a line collection into a routable graph.
///
/// Single pass: extract endpoints, intern distinct coordinates as nodes,
/// rewrite lines into node-id edges, drop duplicate (u, v, key) edges
/// (first seen wins), then assemble with per-edge arc lengths under the
/// collection's CRS. Any failure aborts the whole conversion; no partial
/// graph is produced.
pub fn graph_from_lines(collection: &LineCollection) -> GraphResult<Graph> {
    let pairs = extract::endpoints(&collection.lines)?;
    let interner = dedupe::dedupe_endpoints(&pairs);
    debug!(
        lines = collection.lines.len(),
        nodes = interner.len(),
        "interned endpoint coordinates"
    );

    let candidates = builder::build_edges(&collection.lines, &interner)?;
    let edges = builder::dedupe_edges(candidates);
    debug!(edges = edges.len(), "deduplicated parallel edges");

    assemble::assemble(interner.into_nodes(), edges, collection.crs)
}
