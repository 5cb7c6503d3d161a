//! Distance metrics over coordinates.
//!
//! The actual geodesy lives in the `geo` crate; this module only adapts it
//! to our `Coordinate` type and adds polyline arc length. Arc length is the
//! sum over consecutive vertex pairs, so for any split point P on the vertex
//! list, `length(A..P) + length(P..B) == length(A..B)` holds exactly (same
//! operations in the same order).

use geo::line_measures::Distance;
use geo::{Euclidean, Haversine, Point};

use lg_core::Coordinate;

/// How to measure distance between two coordinates of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Straight-line distance in the frame's linear unit.
    Euclidean,
    /// Great-circle distance in meters over lon/lat degrees.
    Haversine,
}

impl Metric {
    /// Distance between two coordinates.
    pub fn distance(self, a: Coordinate, b: Coordinate) -> f64 {
        let pa = Point::new(a.x, a.y);
        let pb = Point::new(b.x, b.y);
        match self {
            Metric::Euclidean => Euclidean.distance(pa, pb),
            Metric::Haversine => Haversine.distance(pa, pb),
        }
    }

    /// Arc length of a polyline: pairwise distances over consecutive
    /// vertices, not the endpoint-to-endpoint chord.
    ///
    /// Fewer than 2 vertices yields 0.0.
    pub fn polyline_length(self, coords: &[Coordinate]) -> f64 {
        coords.windows(2).map(|w| self.distance(w[0], w[1])).sum()
    }
}
