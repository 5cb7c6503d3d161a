use core::fmt;
use core::num::NonZeroU32;

/// Compact identifier for graph objects (nodes, edges).
///
/// Node ids are assigned sequentially from 0 during deduplication, so a
/// `u32` index is all an id ever holds. The `NonZero` representation makes
/// `Option<Id>` the same size as `Id`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(NonZeroU32);

impl Id {
    /// Create an Id from a 0-based index by storing index+1.
    pub fn from_index(index: u32) -> Self {
        // index+1 must be nonzero
        Self(NonZeroU32::new(index + 1).expect("index+1 is nonzero"))
    }

    /// Recover the 0-based index.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.index())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Id {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.index())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Id {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let index = u32::deserialize(deserializer)?;
        Ok(Id::from_index(index))
    }
}

/// Domain-specific ID aliases for clarity (no runtime cost).
pub type NodeId = Id;
pub type EdgeId = Id;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_survives_the_offset_encoding() {
        for i in [0_u32, 1, 2, 42, 10_000] {
            assert_eq!(Id::from_index(i).index(), i);
        }
    }

    #[test]
    fn option_id_costs_nothing_extra() {
        // The niche left by NonZero lets Option<Id> reuse Id's 4 bytes.
        assert_eq!(
            core::mem::size_of::<Id>(),
            core::mem::size_of::<Option<Id>>()
        );
    }

    #[test]
    fn ids_order_by_index() {
        assert!(Id::from_index(3) < Id::from_index(7));
        assert_eq!(Id::from_index(5), Id::from_index(5));
    }
}
