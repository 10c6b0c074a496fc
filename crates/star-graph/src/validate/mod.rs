//! Structural validation of assembled star graphs.
//!
//! Decoding already rejects malformed records. This module checks graphs
//! that were built or modified through the model API, before they are
//! shipped or attached elsewhere.
//!
//! **Note:** identity uniqueness is not checked. Duplicate vertex-property
//! or edge ids are legal in a star graph.

use crate::error::ValidationError;
use crate::model::StarGraph;

/// Validates the structural invariants of a star graph:
/// - it has a local vertex
/// - every edge's local vertex is that vertex
/// - every edge is stored under its own direction and label
/// - no property, meta-property or edge property has an empty key
pub fn validate_star_graph(graph: &StarGraph) -> Result<(), ValidationError> {
    let vertex = graph.vertex().ok_or(ValidationError::MissingVertex)?;

    for (key, values) in vertex.iter_properties() {
        if key.is_empty() {
            return Err(ValidationError::EmptyPropertyKey { owner: "vertex" });
        }
        if values.iter().any(|p| p.properties().keys().any(str::is_empty)) {
            return Err(ValidationError::EmptyPropertyKey {
                owner: "vertex property",
            });
        }
    }

    for (direction, label, edges) in graph.buckets() {
        for edge in edges {
            if edge.local_vertex_id() != vertex.id() {
                return Err(ValidationError::ForeignLocalVertex {
                    edge: edge.id().clone(),
                    expected: vertex.id().clone(),
                    found: edge.local_vertex_id().clone(),
                });
            }
            if edge.direction() != direction || edge.label() != label {
                return Err(ValidationError::MisfiledEdge {
                    edge: edge.id().clone(),
                    direction: edge.direction(),
                    label: edge.label().to_owned(),
                    bucket_direction: direction,
                    bucket_label: label.to_owned(),
                });
            }
            if edge.properties().keys().any(str::is_empty) {
                return Err(ValidationError::EmptyPropertyKey { owner: "edge" });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Direction, OpaqueId};
    use crate::wire::Scalar;

    #[test]
    fn test_validate_empty_graph() {
        assert_eq!(
            validate_star_graph(&StarGraph::open()),
            Err(ValidationError::MissingVertex)
        );
    }

    #[test]
    fn test_validate_built_graph() {
        let mut graph = StarGraph::with_vertex(OpaqueId::from(1), "person");
        graph
            .add_property("name", Scalar::from("marko"), OpaqueId::from(0))
            .unwrap()
            .set_property("since", Scalar::from(2010));
        graph
            .add_edge(Direction::Out, "knows", OpaqueId::from(2), OpaqueId::from(7))
            .unwrap();
        graph
            .add_edge(Direction::In, "knows", OpaqueId::from(2), OpaqueId::from(7))
            .unwrap();

        // duplicate edge ids are allowed
        assert!(validate_star_graph(&graph).is_ok());
    }

    #[test]
    fn test_validate_empty_keys() {
        let mut graph = StarGraph::with_vertex(OpaqueId::from(1), "person");
        graph
            .add_property("", Scalar::from("x"), OpaqueId::from(0))
            .unwrap();
        assert_eq!(
            validate_star_graph(&graph),
            Err(ValidationError::EmptyPropertyKey { owner: "vertex" })
        );

        let mut graph = StarGraph::with_vertex(OpaqueId::from(1), "person");
        graph
            .add_edge(Direction::Out, "knows", OpaqueId::from(2), OpaqueId::from(7))
            .unwrap()
            .set_property("", Scalar::from(1));
        assert_eq!(
            validate_star_graph(&graph),
            Err(ValidationError::EmptyPropertyKey { owner: "edge" })
        );
    }
}
