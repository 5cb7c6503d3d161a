//! Edge builder: rewrite lines into node-id edges, drop duplicates.

use std::collections::HashSet;

use crate::dedupe::NodeInterner;
use crate::error::{GraphError, GraphResult};
use crate::graph::Edge;
use crate::record::LineRecord;

/// Parallel-edge disambiguator used for every edge in this core.
/// Multi-edge support beyond the constant key is not exercised.
pub const DEFAULT_KEY: u32 = 0;

/// Build one edge candidate per line, resolving endpoints through the
/// interner.
///
/// A missing endpoint is an internal invariant violation
/// (`UnresolvedEndpoint`): it cannot happen when the interner was built
/// from the same line sequence. Lengths are annotated later, at assembly.
///
/// Lines with fewer than 2 coordinates fail with `MalformedGeometry`.
/// The pipeline has already rejected them during extraction; the check
/// here guards direct callers that skip `extract::endpoints`.
pub fn build_edges(lines: &[LineRecord], interner: &NodeInterner) -> GraphResult<Vec<Edge>> {
    let mut edges = Vec::with_capacity(lines.len());
    for (index, line) in lines.iter().enumerate() {
        let count = line.geometry.len();
        if count < 2 {
            return Err(GraphError::MalformedGeometry { index, count });
        }
        let start = line.geometry[0];
        let end = line.geometry[count - 1];

        let u = interner
            .resolve(start)
            .ok_or(GraphError::UnresolvedEndpoint {
                index,
                coordinate: start,
            })?;
        let v = interner
            .resolve(end)
            .ok_or(GraphError::UnresolvedEndpoint {
                index,
                coordinate: end,
            })?;

        edges.push(Edge {
            u,
            v,
            key: DEFAULT_KEY,
            geometry: line.geometry.clone(),
            attrs: line.attrs.clone(),
            length: 0.0,
        });
    }
    Ok(edges)
}

/// Collapse edges sharing a composite key (u, v, key) to one survivor.
///
/// The first edge encountered in input order wins; the comparison is exact
/// integer equality on the key triple, never on geometry.
pub fn dedupe_edges(edges: Vec<Edge>) -> Vec<Edge> {
    let mut seen: HashSet<_> = HashSet::with_capacity(edges.len());
    edges
        .into_iter()
        .filter(|edge| seen.insert(edge.composite_key()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dedupe::dedupe_endpoints;
    use crate::extract::endpoints;
    use lg_core::Coordinate;

    fn c(x: f64, y: f64) -> Coordinate {
        Coordinate::new(x, y)
    }

    fn lines_to_edges(lines: &[LineRecord]) -> Vec<Edge> {
        let pairs = endpoints(lines).unwrap();
        let interner = dedupe_endpoints(&pairs);
        build_edges(lines, &interner).unwrap()
    }

    #[test]
    fn endpoints_resolve_to_interned_ids() {
        let lines = vec![
            LineRecord::new(vec![c(0.0, 0.0), c(1.0, 1.0)]),
            LineRecord::new(vec![c(1.0, 1.0), c(2.0, 2.0)]),
        ];
        let edges = lines_to_edges(&lines);

        assert_eq!(edges.len(), 2);
        // Shared coordinate (1,1) is v of edge 0 and u of edge 1.
        assert_eq!(edges[0].v, edges[1].u);
        assert_eq!(edges[0].u.index(), 0);
        assert_eq!(edges[0].v.index(), 1);
        assert_eq!(edges[1].v.index(), 2);
        assert!(edges.iter().all(|e| e.key == DEFAULT_KEY));
    }

    #[test]
    fn malformed_line_is_rejected_without_prior_extraction() {
        // Direct call with a 1-coordinate line, bypassing the extractor.
        let lines = vec![LineRecord::new(vec![c(0.0, 0.0)])];
        let err = build_edges(&lines, &NodeInterner::new()).unwrap_err();
        assert_eq!(err, GraphError::MalformedGeometry { index: 0, count: 1 });
    }

    #[test]
    fn unresolved_endpoint_with_foreign_interner() {
        let lines = vec![LineRecord::new(vec![c(0.0, 0.0), c(1.0, 1.0)])];
        let empty = NodeInterner::new();
        let err = build_edges(&lines, &empty).unwrap_err();
        assert_eq!(
            err,
            GraphError::UnresolvedEndpoint {
                index: 0,
                coordinate: c(0.0, 0.0),
            }
        );
    }

    #[test]
    fn duplicate_edges_keep_the_first_seen() {
        let mut first = LineRecord::new(vec![c(0.0, 0.0), c(1.0, 0.0)]);
        first.attrs.insert("name".into(), "original".into());
        let mut second = LineRecord::new(vec![c(0.0, 0.0), c(1.0, 0.0)]);
        second.attrs.insert("name".into(), "copy".into());

        let edges = dedupe_edges(lines_to_edges(&[first, second]));
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].attrs["name"], "original");
    }

    #[test]
    fn reversed_direction_is_not_a_duplicate() {
        let lines = vec![
            LineRecord::new(vec![c(0.0, 0.0), c(1.0, 0.0)]),
            LineRecord::new(vec![c(1.0, 0.0), c(0.0, 0.0)]),
        ];
        let edges = dedupe_edges(lines_to_edges(&lines));
        assert_eq!(edges.len(), 2);
    }

    #[test]
    fn self_loop_is_permitted() {
        let lines = vec![LineRecord::new(vec![c(2.0, 2.0), c(3.0, 3.0), c(2.0, 2.0)])];
        let edges = lines_to_edges(&lines);
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].u, edges[0].v);
    }

    #[test]
    fn dedupe_is_idempotent_on_unique_keys() {
        let lines = vec![
            LineRecord::new(vec![c(0.0, 0.0), c(1.0, 0.0)]),
            LineRecord::new(vec![c(1.0, 0.0), c(2.0, 0.0)]),
            LineRecord::new(vec![c(0.0, 0.0), c(1.0, 0.0)]),
        ];
        let once = dedupe_edges(lines_to_edges(&lines));
        let twice = dedupe_edges(once.clone());
        assert_eq!(once, twice);
    }
}
