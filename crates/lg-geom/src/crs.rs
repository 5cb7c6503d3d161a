//! Coordinate reference descriptor.
//!
//! The graph core treats the CRS as opaque: it is carried from the input
//! collection onto the output graph unchanged, and its only interpreted
//! aspect is which distance metric applies. Reprojection is out of scope;
//! all coordinates of one collection are assumed to share one frame.

use core::fmt;
use core::str::FromStr;

use lg_core::LgError;

use crate::metric::Metric;

/// The coordinate reference frame of a line collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Crs {
    /// Geographic longitude/latitude on WGS84 (the GeoJSON default).
    /// Distances are great-circle, in meters.
    Wgs84,
    /// A projected planar frame. Distances are Euclidean, in the frame's
    /// linear unit. The EPSG code, when known, is informational only.
    Projected { epsg: Option<u32> },
}

impl Crs {
    /// The distance metric appropriate for this frame.
    pub fn metric(self) -> Metric {
        match self {
            Crs::Wgs84 => Metric::Haversine,
            Crs::Projected { .. } => Metric::Euclidean,
        }
    }
}

impl Default for Crs {
    fn default() -> Self {
        Crs::Wgs84
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Crs::Wgs84 => write!(f, "wgs84"),
            Crs::Projected { epsg: Some(code) } => write!(f, "epsg:{code}"),
            Crs::Projected { epsg: None } => write!(f, "planar"),
        }
    }
}

impl FromStr for Crs {
    type Err = LgError;

    /// Accepts `wgs84`, `planar`, or `epsg:<code>` (case-insensitive).
    /// `epsg:4326` is recognized as WGS84.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "wgs84" | "epsg:4326" => Ok(Crs::Wgs84),
            "planar" => Ok(Crs::Projected { epsg: None }),
            other => match other.strip_prefix("epsg:") {
                Some(code) => {
                    let code: u32 = code.parse().map_err(|_| LgError::InvalidArg {
                        what: format!("unparseable EPSG code in CRS '{s}'"),
                    })?;
                    Ok(Crs::Projected { epsg: Some(code) })
                }
                None => Err(LgError::InvalidArg {
                    what: format!("unknown CRS '{s}' (expected wgs84, planar, or epsg:<code>)"),
                }),
            },
        }
    }
}
