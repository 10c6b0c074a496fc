//! Star graphs: one vertex and its incident edges, decoded from schema-less
//! wire records.
//!
//! A star graph is the unit a distributed graph computation ships between
//! tasks: a single vertex, its properties (possibly multi-valued, possibly
//! carrying meta-properties) and the edges incident to it, grouped by
//! direction and label. The receiving side needs no graph instance or schema
//! to rebuild it.
//!
//! # Quick Start
//!
//! ```rust
//! use star_graph::{decode_star_graph, Direction, OpaqueId, Record, Scalar};
//!
//! let record = Record::new()
//!     .with("id", 1)
//!     .with("label", "person")
//!     .with(
//!         "properties",
//!         Record::new().with("name", vec![Record::new().with("id", 0).with("value", "marko")]),
//!     )
//!     .with(
//!         "outE",
//!         Record::new().with(
//!             "knows",
//!             vec![Record::new()
//!                 .with("id", 7)
//!                 .with("in", 2)
//!                 .with("properties", Record::new().with("weight", 0.5))],
//!         ),
//!     );
//!
//! let graph = decode_star_graph(&record).unwrap();
//! let vertex = graph.vertex().unwrap();
//! assert_eq!(vertex.value("name"), Some(&Scalar::from("marko")));
//!
//! let knows = graph.edges(Direction::Out, "knows");
//! assert_eq!(knows[0].other_vertex_id(), &OpaqueId::from(2));
//! assert_eq!(knows[0].property("weight"), Some(&Scalar::from(0.5)));
//! ```
//!
//! # Modules
//!
//! - [`wire`]: The input shape (scalars, sequences, records) and the JSON adapter
//! - [`model`]: Star graph, vertex, vertex property and edge types
//! - [`codec`]: Vertex and edge decoders, decode options, the attach hook
//! - [`validate`]: Structural checks for assembled graphs
//! - [`tokens`]: Wire field names
//! - [`limits`]: Opt-in decode limits
//! - [`error`]: Error types
//!
//! # Wire Format
//!
//! ```text
//! { "id": <any>, "label": <string>,
//!   "properties": { <key>: [ { "id": <any>, "value": <scalar>,
//!                              "properties": { <key>: <scalar> } } ] },
//!   "outE": { <label>: [ { "id": <any>, "in":  <any>, "properties": { <key>: <scalar> } } ] },
//!   "inE":  { <label>: [ { "id": <any>, "out": <any>, "properties": { <key>: <scalar> } } ] } }
//! ```
//!
//! Unknown fields are ignored. Decoding stops at the first structural
//! violation and reports its path, e.g. `properties.name[0].id`.

pub mod codec;
pub mod error;
pub mod limits;
pub mod model;
pub mod tokens;
pub mod validate;
pub mod wire;

// Re-export commonly used types at crate root
pub use codec::{
    AttachEdge, DecodeOptions, Detached, decode_edges, decode_edges_attached,
    decode_edges_with_options, decode_star_graph, decode_star_graph_attached,
    decode_star_graph_with_options, decode_vertex, decode_vertex_with_options,
};
pub use error::{DecodeError, ErrorKind, FieldPath, StarGraphError, ValidationError};
pub use model::{
    AdjacentVertex, Direction, OpaqueId, Properties, StarEdge, StarGraph, StarVertex,
    StarVertexProperty,
};
pub use validate::validate_star_graph;
pub use wire::{Record, Scalar, WireValue};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
