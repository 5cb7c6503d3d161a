//! lg-core: stable foundation for linegraph.
//!
//! Contains:
//! - coord (exact-equality coordinate value type, usable as a map key)
//! - ids (stable compact IDs for graph objects)
//! - error (shared error types)

pub mod coord;
pub mod error;
pub mod ids;

// Re-exports: nice ergonomics for downstream crates
pub use coord::{Coordinate, ensure_finite};
pub use error::{LgError, LgResult};
pub use ids::*;
