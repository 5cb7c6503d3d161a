//! lg-geom: the geometry collaborator boundary for linegraph.
//!
//! Provides:
//! - `Crs`: the coordinate reference descriptor propagated through the
//!   pipeline (opaque to the graph core beyond metric selection)
//! - `Metric`: pairwise distance and polyline arc length, delegating the
//!   actual geodesy to the `geo` crate

pub mod crs;
pub mod metric;

// Re-exports for ergonomics
pub use crs::Crs;
pub use metric::Metric;
