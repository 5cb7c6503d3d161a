//! Geometry extractor: (start, end) coordinate pair per line.

use lg_core::Coordinate;

use crate::error::{GraphError, GraphResult};
use crate::record::LineRecord;

/// Extract the endpoint pair of every line, in input order.
///
/// Intermediate vertices are ignored here; they stay on the edge geometry
/// for length computation. A line with fewer than 2 coordinates fails the
/// whole run with `MalformedGeometry`.
pub fn endpoints(lines: &[LineRecord]) -> GraphResult<Vec<(Coordinate, Coordinate)>> {
    let mut pairs = Vec::with_capacity(lines.len());
    for (index, line) in lines.iter().enumerate() {
        let count = line.geometry.len();
        if count < 2 {
            return Err(GraphError::MalformedGeometry { index, count });
        }
        pairs.push((line.geometry[0], line.geometry[count - 1]));
    }
    Ok(pairs)
}
