//! Exact-equality coordinate value type.
//!
//! `Coordinate` is the key type of the node deduplication map, so its
//! equality and hash must agree. Both are defined over the raw bit
//! patterns of the two `f64` components: no tolerance, no rounding.
//! Consequences worth knowing:
//! - `0.0` and `-0.0` are *different* coordinates (different bits),
//! - two NaN payloads are different coordinates,
//! - coordinates that differ by floating-point noise are distinct nodes.
//!
//! The last point is a deliberate scope limitation (no spatial snapping),
//! not a defect.

use core::fmt;
use core::hash::{Hash, Hasher};

use crate::error::LgError;

/// An (x, y) position in one consistent coordinate reference frame.
#[derive(Debug, Clone, Copy)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both components as raw bit patterns, the basis of Eq and Hash.
    fn to_bits(self) -> (u64, u64) {
        (self.x.to_bits(), self.y.to_bits())
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        self.to_bits() == other.to_bits()
    }
}

impl Eq for Coordinate {}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_bits().hash(state);
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Coordinate {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.x, self.y).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Coordinate {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (x, y) = <(f64, f64)>::deserialize(deserializer)?;
        Ok(Self { x, y })
    }
}

/// Boundary guard for values entering the system from parsed input.
pub fn ensure_finite(v: f64, what: &'static str) -> Result<f64, LgError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(LgError::NonFinite { what, value: v })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(c: Coordinate) -> u64 {
        let mut h = DefaultHasher::new();
        c.hash(&mut h);
        h.finish()
    }

    proptest! {
        #[test]
        fn eq_implies_same_hash(x in any::<f64>(), y in any::<f64>()) {
            let a = Coordinate::new(x, y);
            let b = Coordinate::new(x, y);
            prop_assert_eq!(a, b);
            prop_assert_eq!(hash_of(a), hash_of(b));
        }
    }
}
