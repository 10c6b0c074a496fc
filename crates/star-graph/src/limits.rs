//! Opt-in decode limits.
//!
//! Each constant bounds one container of a star graph record.
//! [`crate::DecodeOptions::bounded`] uses these values; the default options
//! place no bound.

/// Maximum distinct property keys on one vertex.
pub const MAX_PROPERTY_KEYS: usize = 4_096;

/// Maximum values under one vertex property key.
pub const MAX_VALUES_PER_PROPERTY: usize = 65_536;

/// Maximum meta-properties on one vertex property.
pub const MAX_META_PROPERTIES: usize = 1_024;

/// Maximum edge labels in one direction.
pub const MAX_EDGE_LABELS: usize = 4_096;

/// Maximum edges under one (direction, label) pair.
pub const MAX_EDGES_PER_LABEL: usize = 1 << 20;

/// Maximum properties on one edge.
pub const MAX_EDGE_PROPERTIES: usize = 1_024;
