//! Edge decoding: one direction group of a vertex record at a time.

use tracing::{debug, trace};

use crate::codec::DecodeOptions;
use crate::codec::attach::{AttachEdge, Detached};
use crate::codec::fields::{Cursor, check_len, expect_record, expect_scalar, expect_sequence, required};
use crate::error::DecodeError;
use crate::model::{Direction, OpaqueId, StarEdge, StarGraph};
use crate::tokens;
use crate::wire::{Record, WireValue};

/// Decodes the `direction` group of `record` (`outE` or `inE`) into `graph`.
///
/// A missing group means no edges in that direction. Edges are appended, so
/// calling this once per direction accumulates both.
pub fn decode_edges(
    graph: &mut StarGraph,
    record: &Record,
    direction: Direction,
) -> Result<(), DecodeError> {
    decode_edges_with_options(graph, record, direction, &DecodeOptions::default(), None::<&mut Detached>)
}

/// Like [`decode_edges`], invoking `attach` for each edge once it is fully
/// built.
pub fn decode_edges_attached<A: AttachEdge>(
    graph: &mut StarGraph,
    record: &Record,
    direction: Direction,
    attach: &mut A,
) -> Result<(), A::Error> {
    decode_edges_with_options(graph, record, direction, &DecodeOptions::default(), Some(attach))
}

/// Decodes one direction group with explicit limits and an optional attacher.
///
/// The group is a record mapping each label to a sequence of edge records.
/// `outE` entries need `id` and `in`; `inE` entries need `id` and `out`.
/// Decoding stops at the first malformed entry or attacher error; edges
/// decoded before that point stay in `graph`.
pub fn decode_edges_with_options<A: AttachEdge>(
    graph: &mut StarGraph,
    record: &Record,
    direction: Direction,
    options: &DecodeOptions,
    mut attach: Option<&mut A>,
) -> Result<(), A::Error> {
    let Some(group) = record.get(direction.token()) else {
        trace!(%direction, "no edges in direction");
        return Ok(());
    };

    let root = Cursor::Root;
    let at = root.key(direction.token());
    let group = expect_record(group, &at)?;
    check_len(&at, group.len(), options.max_edge_labels)?;

    let mut count = 0usize;
    for (label, entries) in group.iter() {
        let at = at.key(label);
        let entries = expect_sequence(entries, &at)?;
        check_len(&at, entries.len(), options.max_edges_per_label)?;

        for (index, entry) in entries.iter().enumerate() {
            let edge = decode_edge(graph, direction, label, entry, &at.index(index), options)?;
            if let Some(attach) = attach.as_deref_mut() {
                attach.attach(edge)?;
            }
            count += 1;
        }
    }

    debug!(%direction, edges = count, labels = group.len(), "decoded star edges");
    Ok(())
}

fn decode_edge<'g>(
    graph: &'g mut StarGraph,
    direction: Direction,
    label: &str,
    entry: &WireValue,
    at: &Cursor<'_>,
    options: &DecodeOptions,
) -> Result<&'g StarEdge, DecodeError> {
    let entry = expect_record(entry, at)?;
    let id = required(entry, tokens::ID, at)?;
    let other = required(entry, direction.endpoint_field(), at)?;

    let other = graph.add_adjacent_vertex(OpaqueId::from(other.clone()));
    let edge = graph.add_edge(direction, label, other, OpaqueId::from(id.clone()))?;

    if let Some(properties) = entry.get(tokens::PROPERTIES) {
        let at = at.key(tokens::PROPERTIES);
        let properties = expect_record(properties, &at)?;
        check_len(&at, properties.len(), options.max_edge_properties)?;

        for (key, value) in properties.iter() {
            let value = expect_scalar(value, &at.key(key))?;
            edge.set_property(key, value.clone());
        }
    }

    trace!(
        %direction,
        label,
        edge = %edge.id(),
        other = %edge.other_vertex_id(),
        "decoded star edge"
    );
    Ok(edge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode_vertex;
    use crate::error::{ErrorKind, FieldPath};
    use crate::wire::Scalar;

    fn person() -> Record {
        Record::new().with("id", 1).with("label", "person")
    }

    fn out_edge(id: i64, other: i64) -> Record {
        Record::new().with("id", id).with("in", other)
    }

    fn in_edge(id: i64, other: i64) -> Record {
        Record::new().with("id", id).with("out", other)
    }

    #[test]
    fn test_decode_out_edges() {
        let record = person().with(
            "outE",
            Record::new().with(
                "knows",
                vec![out_edge(7, 2).with("properties", Record::new().with("weight", 0.5))],
            ),
        );
        let mut graph = decode_vertex(&record).unwrap();
        decode_edges(&mut graph, &record, Direction::Out).unwrap();

        let knows = graph.edges(Direction::Out, "knows");
        assert_eq!(knows.len(), 1);
        assert_eq!(knows[0].id(), &OpaqueId::from(7));
        assert_eq!(knows[0].other_vertex_id(), &OpaqueId::from(2));
        assert_eq!(knows[0].local_vertex_id(), &OpaqueId::from(1));
        assert_eq!(knows[0].direction(), Direction::Out);
        assert_eq!(knows[0].property("weight"), Some(&Scalar::from(0.5)));
    }

    #[test]
    fn test_missing_group_is_empty() {
        let record = person();
        let mut graph = decode_vertex(&record).unwrap();
        decode_edges(&mut graph, &record, Direction::Out).unwrap();
        decode_edges(&mut graph, &record, Direction::In).unwrap();
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_endpoint_field_depends_on_direction() {
        // an outE entry carrying `out` instead of `in`
        let record = person().with("outE", Record::new().with("knows", vec![in_edge(7, 2)]));
        let mut graph = decode_vertex(&record).unwrap();
        let err = decode_edges(&mut graph, &record, Direction::Out).unwrap_err();
        assert_eq!(
            err,
            DecodeError::MissingField {
                path: FieldPath::root().key("outE").key("knows").index(0).key("in")
            }
        );

        let record = person().with("inE", Record::new().with("knows", vec![out_edge(8, 3)]));
        let mut graph = decode_vertex(&record).unwrap();
        let err = decode_edges(&mut graph, &record, Direction::In).unwrap_err();
        assert_eq!(err.path().unwrap().to_string(), "inE.knows[0].out");
    }

    #[test]
    fn test_edge_requires_id() {
        let record = person().with(
            "outE",
            Record::new().with("knows", vec![out_edge(7, 2), Record::new().with("in", 3)]),
        );
        let mut graph = decode_vertex(&record).unwrap();
        let err = decode_edges(&mut graph, &record, Direction::Out).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingField);
        assert_eq!(err.path().unwrap().to_string(), "outE.knows[1].id");
    }

    #[test]
    fn test_edge_property_must_be_scalar() {
        let record = person().with(
            "outE",
            Record::new().with(
                "knows",
                vec![out_edge(7, 2).with("properties", Record::new().with("weight", vec![0.5]))],
            ),
        );
        let mut graph = decode_vertex(&record).unwrap();
        let err = decode_edges(&mut graph, &record, Direction::Out).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        assert_eq!(err.path().unwrap().to_string(), "outE.knows[0].properties.weight");
    }

    #[test]
    fn test_group_must_be_record() {
        let record = person().with("inE", vec![in_edge(8, 3)]);
        let mut graph = decode_vertex(&record).unwrap();
        let err = decode_edges(&mut graph, &record, Direction::In).unwrap_err();
        assert_eq!(
            err,
            DecodeError::TypeMismatch {
                path: FieldPath::root().key("inE"),
                expected: "record",
                found: "sequence",
            }
        );
    }

    #[test]
    fn test_empty_and_absent_edge_properties_match() {
        let record = person().with(
            "outE",
            Record::new().with(
                "knows",
                vec![
                    out_edge(7, 2),
                    out_edge(8, 3).with("properties", Record::new()),
                ],
            ),
        );
        let mut graph = decode_vertex(&record).unwrap();
        decode_edges(&mut graph, &record, Direction::Out).unwrap();

        let knows = graph.edges(Direction::Out, "knows");
        assert!(knows[0].properties().is_empty());
        assert!(knows[1].properties().is_empty());
        assert_eq!(knows[0].properties(), knows[1].properties());
    }

    #[test]
    fn test_attach_called_per_edge_with_properties() {
        let record = person().with(
            "outE",
            Record::new()
                .with(
                    "knows",
                    vec![
                        out_edge(7, 2).with("properties", Record::new().with("weight", 0.5)),
                        out_edge(8, 4),
                    ],
                )
                .with("created", vec![out_edge(9, 3)]),
        );
        let mut graph = decode_vertex(&record).unwrap();

        let mut seen = Vec::new();
        let mut attach = |edge: &StarEdge| -> Result<usize, DecodeError> {
            seen.push((edge.id().clone(), edge.property("weight").cloned()));
            Ok(seen.len())
        };
        decode_edges_attached(&mut graph, &record, Direction::Out, &mut attach).unwrap();

        assert_eq!(
            seen,
            vec![
                (OpaqueId::from(7), Some(Scalar::from(0.5))),
                (OpaqueId::from(8), None),
                (OpaqueId::from(9), None),
            ]
        );
    }

    #[derive(Debug, PartialEq)]
    enum HostError {
        Rejected(String),
        Decode(DecodeError),
    }

    impl From<DecodeError> for HostError {
        fn from(err: DecodeError) -> Self {
            HostError::Decode(err)
        }
    }

    #[test]
    fn test_attach_error_propagates_unchanged() {
        let record = person().with(
            "outE",
            Record::new().with("knows", vec![out_edge(7, 2), out_edge(8, 4)]),
        );
        let mut graph = decode_vertex(&record).unwrap();

        let mut calls = 0;
        let mut attach = |edge: &StarEdge| -> Result<(), HostError> {
            calls += 1;
            Err(HostError::Rejected(edge.id().to_string()))
        };
        let err = decode_edges_attached(&mut graph, &record, Direction::Out, &mut attach).unwrap_err();
        assert_eq!(err, HostError::Rejected("7".to_string()));
        assert_eq!(calls, 1);

        let malformed = person().with("outE", Record::new().with("knows", vec![Record::new()]));
        let mut graph = decode_vertex(&malformed).unwrap();
        let mut attach = |_: &StarEdge| -> Result<(), HostError> { Ok(()) };
        let err = decode_edges_attached(&mut graph, &malformed, Direction::Out, &mut attach)
            .unwrap_err();
        assert!(matches!(err, HostError::Decode(DecodeError::MissingField { .. })));
    }

    #[test]
    fn test_edge_limits() {
        let record = person().with(
            "outE",
            Record::new().with("knows", vec![out_edge(7, 2), out_edge(8, 3)]),
        );
        let mut graph = decode_vertex(&record).unwrap();
        let options = DecodeOptions {
            max_edges_per_label: 1,
            ..DecodeOptions::default()
        };
        let err = decode_edges_with_options(
            &mut graph,
            &record,
            Direction::Out,
            &options,
            None::<&mut Detached>,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LimitExceeded);
    }
}
