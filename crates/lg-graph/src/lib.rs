//! lg-graph: line features to routable graph.
//!
//! Provides:
//! - Input boundary types (LineRecord, LineCollection)
//! - The conversion core: endpoint extraction, coordinate-to-node
//!   deduplication, edge building with parallel-edge removal, and
//!   assembly into an immutable `Graph` with per-edge arc lengths
//! - Compact outgoing-edge adjacency on the assembled graph
//!
//! # Example
//!
//! ```
//! use lg_core::Coordinate;
//! use lg_geom::Crs;
//! use lg_graph::{LineCollection, LineRecord, graph_from_lines};
//!
//! let lines = vec![
//!     LineRecord::new(vec![Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 1.0)]),
//!     LineRecord::new(vec![Coordinate::new(1.0, 1.0), Coordinate::new(2.0, 2.0)]),
//! ];
//! let collection = LineCollection::new(lines, Crs::Projected { epsg: None });
//! let graph = graph_from_lines(&collection).unwrap();
//!
//! assert_eq!(graph.nodes().len(), 3); // (1,1) is shared
//! assert_eq!(graph.edges().len(), 2);
//! ```

pub mod assemble;
pub mod builder;
pub mod dedupe;
pub mod error;
pub mod extract;
pub mod graph;
pub mod pipeline;
pub mod record;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::DEFAULT_KEY;
pub use dedupe::NodeInterner;
pub use error::{GraphError, GraphResult};
pub use graph::{Edge, Graph, Node};
pub use pipeline::graph_from_lines;
pub use record::{Attrs, LineCollection, LineRecord};
