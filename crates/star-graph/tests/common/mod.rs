//! Shared helpers for integration tests: a reference encoder producing the
//! wire shape the decoders consume, and proptest strategies for star graphs.

#![allow(dead_code)]

use proptest::collection::vec;
use proptest::prelude::*;

use star_graph::{Direction, OpaqueId, Properties, Record, Scalar, StarGraph, WireValue};

fn encode_properties(properties: &Properties) -> Record {
    properties
        .iter()
        .map(|(key, value)| (key, WireValue::Scalar(value.clone())))
        .collect()
}

/// Encodes a star graph into its wire record.
///
/// Labels within a direction are sorted so that the output is deterministic;
/// the adjacency table itself is unordered across labels.
pub fn encode_star_graph(graph: &StarGraph) -> Record {
    let vertex = graph.vertex().expect("graph has a local vertex");
    let mut record = Record::new()
        .with("id", vertex.id().as_wire().clone())
        .with("label", vertex.label());

    if vertex.property_count() > 0 {
        let mut properties = Record::new();
        for (key, values) in vertex.iter_properties() {
            let entries: Vec<Record> = values
                .iter()
                .map(|p| {
                    let mut entry = Record::new()
                        .with("id", p.id().as_wire().clone())
                        .with("value", p.value().clone());
                    if !p.properties().is_empty() {
                        entry.push("properties", encode_properties(p.properties()));
                    }
                    entry
                })
                .collect();
            properties.push(key, entries);
        }
        record.push("properties", properties);
    }

    for direction in Direction::ALL {
        let mut labels: Vec<&str> = graph.edge_labels(direction).collect();
        if labels.is_empty() {
            continue;
        }
        labels.sort_unstable();

        let mut group = Record::new();
        for label in labels {
            let entries: Vec<Record> = graph
                .edges(direction, label)
                .iter()
                .map(|edge| {
                    let mut entry = Record::new()
                        .with("id", edge.id().as_wire().clone())
                        .with(direction.endpoint_field(), edge.other_vertex_id().as_wire().clone());
                    if !edge.properties().is_empty() {
                        entry.push("properties", encode_properties(edge.properties()));
                    }
                    entry
                })
                .collect();
            group.push(label, entries);
        }
        record.push(direction.token(), group);
    }

    record
}

/// Builds the record for a single-property vertex.
pub fn person(id: i64, name: &str) -> Record {
    Record::new().with("id", id).with("label", "person").with(
        "properties",
        Record::new().with("name", vec![Record::new().with("id", 0).with("value", name)]),
    )
}

pub fn scalar() -> impl Strategy<Value = Scalar> {
    prop_oneof![
        Just(Scalar::Null),
        any::<bool>().prop_map(Scalar::Bool),
        any::<i64>().prop_map(Scalar::Int),
        ((1u64 << 63)..=u64::MAX).prop_map(Scalar::UInt),
        (-1.0e9f64..1.0e9).prop_map(Scalar::Float),
        "[a-z ]{0,12}".prop_map(Scalar::String),
    ]
}

pub fn opaque_id() -> impl Strategy<Value = OpaqueId> {
    prop_oneof![
        any::<i64>().prop_map(OpaqueId::from),
        "[a-f0-9]{1,16}".prop_map(OpaqueId::from),
        (any::<i64>(), "[a-z]{1,4}").prop_map(|(n, s)| {
            OpaqueId::from(Record::new().with("relationId", n).with("key", s))
        }),
    ]
}

fn key() -> impl Strategy<Value = String> {
    "[a-z]{1,6}"
}

fn flat_properties() -> impl Strategy<Value = Vec<(String, Scalar)>> {
    vec((key(), scalar()), 0..4)
}

#[derive(Debug, Clone)]
struct PropertySeed {
    key: String,
    id: OpaqueId,
    value: Scalar,
    meta: Vec<(String, Scalar)>,
}

#[derive(Debug, Clone)]
struct EdgeSeed {
    direction: Direction,
    label: String,
    id: OpaqueId,
    other: OpaqueId,
    properties: Vec<(String, Scalar)>,
}

fn property_seed() -> impl Strategy<Value = PropertySeed> {
    ("[a-c]", opaque_id(), scalar(), flat_properties())
        .prop_map(|(key, id, value, meta)| PropertySeed { key, id, value, meta })
}

fn edge_seed() -> impl Strategy<Value = EdgeSeed> {
    (
        prop_oneof![Just(Direction::Out), Just(Direction::In)],
        "(knows|created|likes)",
        opaque_id(),
        opaque_id(),
        flat_properties(),
    )
        .prop_map(|(direction, label, id, other, properties)| EdgeSeed {
            direction,
            label,
            id,
            other,
            properties,
        })
}

/// Arbitrary star graphs built through the model API.
pub fn arb_star_graph() -> impl Strategy<Value = StarGraph> {
    (
        opaque_id(),
        "[a-z]{1,8}",
        vec(property_seed(), 0..8),
        vec(edge_seed(), 0..12),
    )
        .prop_map(|(id, label, properties, edges)| {
            let mut graph = StarGraph::with_vertex(id, label);
            for seed in properties {
                let property = graph
                    .add_property(&seed.key, seed.value, seed.id)
                    .expect("vertex present");
                for (key, value) in seed.meta {
                    property.set_property(key, value);
                }
            }
            for seed in edges {
                let edge = graph
                    .add_edge(seed.direction, &seed.label, seed.other, seed.id)
                    .expect("vertex present");
                for (key, value) in seed.properties {
                    edge.set_property(key, value);
                }
            }
            graph
        })
}
