//! Input boundary types.
//!
//! Parsing the source file format is an upstream concern; by the time a
//! `LineCollection` reaches this crate, multi-part geometries have been
//! exploded and every line is a flat, simple coordinate sequence.

use lg_core::Coordinate;
use lg_geom::Crs;

/// Pass-through attribute fields of a source feature. Not interpreted by
/// the conversion core; copied verbatim onto the resulting edge.
pub type Attrs = serde_json::Map<String, serde_json::Value>;

/// One simple line feature: an ordered coordinate sequence plus attributes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineRecord {
    /// Ordered vertices; a valid record has at least 2.
    pub geometry: Vec<Coordinate>,
    /// Arbitrary source attributes, passed through to the edge.
    #[cfg_attr(feature = "serde", serde(default))]
    pub attrs: Attrs,
}

impl LineRecord {
    pub fn new(geometry: Vec<Coordinate>) -> Self {
        Self {
            geometry,
            attrs: Attrs::new(),
        }
    }

    pub fn with_attrs(geometry: Vec<Coordinate>, attrs: Attrs) -> Self {
        Self { geometry, attrs }
    }
}

/// A batch of line records sharing one coordinate reference frame.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineCollection {
    pub lines: Vec<LineRecord>,
    pub crs: Crs,
}

impl LineCollection {
    pub fn new(lines: Vec<LineRecord>, crs: Crs) -> Self {
        Self { lines, crs }
    }
}
