//! Vertex decoding: the local vertex, its properties and meta-properties.

use tracing::{debug, trace};

use crate::codec::DecodeOptions;
use crate::codec::fields::{
    Cursor, check_len, expect_record, expect_scalar, expect_sequence, required, required_scalar,
    required_str,
};
use crate::error::DecodeError;
use crate::model::{OpaqueId, StarGraph};
use crate::tokens;
use crate::wire::{Record, WireValue};

/// Decodes a vertex record into a new star graph with no edges.
pub fn decode_vertex(record: &Record) -> Result<StarGraph, DecodeError> {
    decode_vertex_with_options(record, &DecodeOptions::default())
}

/// Decodes a vertex record with explicit limits.
///
/// Required fields are `id` and `label`. `properties`, when present, maps
/// each key to a sequence of property records; sequence order is the order
/// of the values under that key.
pub fn decode_vertex_with_options(
    record: &Record,
    options: &DecodeOptions,
) -> Result<StarGraph, DecodeError> {
    let root = Cursor::Root;
    let id = required(record, tokens::ID, &root)?;
    let label = required_str(record, tokens::LABEL, &root)?;

    let mut graph = StarGraph::open();
    graph.add_vertex(OpaqueId::from(id.clone()), label)?;

    if let Some(properties) = record.get(tokens::PROPERTIES) {
        let at = root.key(tokens::PROPERTIES);
        let properties = expect_record(properties, &at)?;
        check_len(&at, properties.len(), options.max_property_keys)?;

        for (key, entries) in properties.iter() {
            let at = at.key(key);
            let entries = expect_sequence(entries, &at)?;
            check_len(&at, entries.len(), options.max_values_per_property)?;

            for (index, entry) in entries.iter().enumerate() {
                decode_vertex_property(&mut graph, key, entry, &at.index(index), options)?;
            }
        }
    }

    debug!(
        vertex = %id,
        label,
        properties = graph.vertex().map_or(0, |v| v.property_count()),
        "decoded star vertex"
    );
    Ok(graph)
}

fn decode_vertex_property(
    graph: &mut StarGraph,
    key: &str,
    entry: &WireValue,
    at: &Cursor<'_>,
    options: &DecodeOptions,
) -> Result<(), DecodeError> {
    let entry = expect_record(entry, at)?;
    let value = required_scalar(entry, tokens::VALUE, at)?;
    let id = required(entry, tokens::ID, at)?;

    let property = graph.add_property(key, value.clone(), OpaqueId::from(id.clone()))?;

    if let Some(meta) = entry.get(tokens::PROPERTIES) {
        let at = at.key(tokens::PROPERTIES);
        let meta = expect_record(meta, &at)?;
        check_len(&at, meta.len(), options.max_meta_properties)?;

        for (meta_key, meta_value) in meta.iter() {
            // Meta-properties nest exactly one level: values must be scalars.
            let meta_value = expect_scalar(meta_value, &at.key(meta_key))?;
            property.set_property(meta_key, meta_value.clone());
        }
    }

    trace!(key, property = %property.id(), "decoded vertex property");
    Ok(())
}
