//! Decoding of star graph wire records.
//!
//! [`decode_vertex`] builds the graph and its local vertex; [`decode_edges`]
//! adds one direction group to an existing graph. [`decode_star_graph`] runs
//! both for a complete record (one line of an adjacency-list file).

pub mod attach;
pub mod edge;
pub(crate) mod fields;
pub mod vertex;

pub use attach::{AttachEdge, Detached};
pub use edge::{decode_edges, decode_edges_attached, decode_edges_with_options};
pub use vertex::{decode_vertex, decode_vertex_with_options};

use crate::error::DecodeError;
use crate::limits::{
    MAX_EDGE_LABELS, MAX_EDGE_PROPERTIES, MAX_EDGES_PER_LABEL, MAX_META_PROPERTIES,
    MAX_PROPERTY_KEYS, MAX_VALUES_PER_PROPERTY,
};
use crate::model::{Direction, StarGraph};
use crate::wire::Record;

/// Options for decoding star graph records.
///
/// Every field bounds one container of the wire record; exceeding a bound
/// fails with [`DecodeError::LengthExceedsLimit`]. The default places no
/// bound, so a key with N wire entries always yields N values.
/// [`DecodeOptions::bounded`] applies the limits in [`crate::limits`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Distinct keys under the vertex `properties` field.
    pub max_property_keys: usize,
    /// Values under one vertex property key.
    pub max_values_per_property: usize,
    /// Meta-properties on one vertex property.
    pub max_meta_properties: usize,
    /// Labels in one direction group.
    pub max_edge_labels: usize,
    /// Edges under one label.
    pub max_edges_per_label: usize,
    /// Properties on one edge.
    pub max_edge_properties: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl DecodeOptions {
    /// Creates options with no limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options with no limits.
    pub fn unbounded() -> Self {
        Self {
            max_property_keys: usize::MAX,
            max_values_per_property: usize::MAX,
            max_meta_properties: usize::MAX,
            max_edge_labels: usize::MAX,
            max_edges_per_label: usize::MAX,
            max_edge_properties: usize::MAX,
        }
    }

    /// Creates options with the limits from [`crate::limits`], for records
    /// from peers that should not be trusted with unbounded sizes.
    pub fn bounded() -> Self {
        Self {
            max_property_keys: MAX_PROPERTY_KEYS,
            max_values_per_property: MAX_VALUES_PER_PROPERTY,
            max_meta_properties: MAX_META_PROPERTIES,
            max_edge_labels: MAX_EDGE_LABELS,
            max_edges_per_label: MAX_EDGES_PER_LABEL,
            max_edge_properties: MAX_EDGE_PROPERTIES,
        }
    }
}

/// Decodes a complete star graph record: the vertex, then its `outE` and
/// `inE` groups.
pub fn decode_star_graph(record: &Record) -> Result<StarGraph, DecodeError> {
    decode_star_graph_with_options(record, &DecodeOptions::default(), None::<&mut Detached>)
}

/// Decodes a complete star graph record, invoking `attach` for every edge.
pub fn decode_star_graph_attached<A: AttachEdge>(
    record: &Record,
    attach: &mut A,
) -> Result<StarGraph, A::Error> {
    decode_star_graph_with_options(record, &DecodeOptions::default(), Some(attach))
}

/// Decodes a complete star graph record with explicit options.
pub fn decode_star_graph_with_options<A: AttachEdge>(
    record: &Record,
    options: &DecodeOptions,
    mut attach: Option<&mut A>,
) -> Result<StarGraph, A::Error> {
    let mut graph = decode_vertex_with_options(record, options)?;
    for direction in Direction::ALL {
        decode_edges_with_options(&mut graph, record, direction, options, attach.as_deref_mut())?;
    }
    Ok(graph)
}
