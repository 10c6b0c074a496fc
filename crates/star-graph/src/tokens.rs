//! Field names of the star graph wire record.
//!
//! These are a stable contract with the encoding side: renaming any of them
//! breaks every record already written.

/// Identity of a vertex, edge or vertex property.
pub const ID: &str = "id";

/// Vertex or edge label.
pub const LABEL: &str = "label";

/// Vertex properties, edge properties, or meta-properties depending on nesting.
pub const PROPERTIES: &str = "properties";

/// Value of a vertex property.
pub const VALUE: &str = "value";

/// Edges whose tail is the local vertex.
pub const OUT_E: &str = "outE";

/// Edges whose head is the local vertex.
pub const IN_E: &str = "inE";

/// Remote endpoint of an `outE` edge.
pub const IN: &str = "in";

/// Remote endpoint of an `inE` edge.
pub const OUT: &str = "out";
