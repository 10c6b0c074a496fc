//! In-memory star graph model.
//!
//! A star graph holds one local vertex, its (possibly multi-valued)
//! properties with their meta-properties, and the edges incident to it
//! grouped by direction and label. Remote endpoints are never materialized:
//! an edge only knows the id of the vertex on its far side.

pub mod direction;
pub mod edge;
pub mod graph;
pub mod id;
pub mod properties;
pub mod vertex;

pub use direction::Direction;
pub use edge::StarEdge;
pub use graph::StarGraph;
pub use id::{AdjacentVertex, OpaqueId};
pub use properties::Properties;
pub use vertex::{StarVertex, StarVertexProperty};
