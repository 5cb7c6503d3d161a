//! Node deduplicator: coordinate -> sequential id interning.

use std::collections::HashMap;

use lg_core::{Coordinate, NodeId};

use crate::graph::Node;

/// Interner assigning each distinct coordinate a sequential node id.
///
/// Ids are 0-based, contiguous and in first-occurrence order over the input
/// scan, so the node set is a bijection with the distinct endpoint
/// coordinates. Coordinate matching is exact; nearby-but-unequal
/// coordinates intern as distinct nodes.
#[derive(Debug, Default)]
pub struct NodeInterner {
    ids: HashMap<Coordinate, NodeId>,
    /// First-occurrence order; a coordinate's position is its id index.
    coords: Vec<Coordinate>,
}

impl NodeInterner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the coordinate's id, interning it first if it is new.
    pub fn intern(&mut self, coord: Coordinate) -> NodeId {
        if let Some(&id) = self.ids.get(&coord) {
            return id;
        }
        let id = NodeId::from_index(self.coords.len() as u32);
        self.ids.insert(coord, id);
        self.coords.push(coord);
        id
    }

    /// Look up an already-interned coordinate.
    pub fn resolve(&self, coord: Coordinate) -> Option<NodeId> {
        self.ids.get(&coord).copied()
    }

    /// Number of distinct coordinates interned so far.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// The unique coordinates in id order.
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coords
    }

    /// Freeze the interner into the node set, one node per coordinate.
    pub fn into_nodes(self) -> Vec<Node> {
        self.coords
            .into_iter()
            .enumerate()
            .map(|(i, coord)| Node {
                id: NodeId::from_index(i as u32),
                x: coord.x,
                y: coord.y,
            })
            .collect()
    }
}

/// Intern the start and end of every extracted endpoint pair, in scan order.
pub fn dedupe_endpoints(pairs: &[(Coordinate, Coordinate)]) -> NodeInterner {
    let mut interner = NodeInterner::new();
    for &(start, end) in pairs {
        interner.intern(start);
        interner.intern(end);
    }
    interner
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn coord_strategy() -> impl Strategy<Value = Coordinate> {
        // Small grid so collisions actually happen.
        (-3i32..4, -3i32..4).prop_map(|(x, y)| Coordinate::new(f64::from(x), f64::from(y)))
    }

    proptest! {
        #[test]
        fn node_count_equals_distinct_coordinate_count(
            pairs in prop::collection::vec((coord_strategy(), coord_strategy()), 0..40)
        ) {
            let interner = dedupe_endpoints(&pairs);

            let distinct: HashSet<Coordinate> = pairs
                .iter()
                .flat_map(|&(a, b)| [a, b])
                .collect();
            prop_assert_eq!(interner.len(), distinct.len());

            // Ids are contiguous 0..n and every coordinate resolves to its
            // position in the unique sequence.
            for (i, &coord) in interner.coordinates().iter().enumerate() {
                prop_assert_eq!(interner.resolve(coord).unwrap().index() as usize, i);
            }
        }
    }
}
