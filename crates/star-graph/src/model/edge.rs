//! Edges incident to the local vertex.

use crate::model::{AdjacentVertex, Direction, OpaqueId, Properties};
use crate::wire::Scalar;

/// An edge seen from the local vertex.
///
/// `direction` says which end the local vertex is on; the other end is an
/// [`AdjacentVertex`] known only by id. Edge properties are single-valued and
/// carry no meta-properties.
#[derive(Debug, Clone, PartialEq)]
pub struct StarEdge {
    id: OpaqueId,
    label: String,
    direction: Direction,
    local_vertex_id: OpaqueId,
    other_vertex: AdjacentVertex,
    properties: Properties,
}

impl StarEdge {
    pub(crate) fn new(
        id: OpaqueId,
        label: String,
        direction: Direction,
        local_vertex_id: OpaqueId,
        other_vertex: AdjacentVertex,
    ) -> Self {
        Self {
            id,
            label,
            direction,
            local_vertex_id,
            other_vertex,
            properties: Properties::new(),
        }
    }

    pub fn id(&self) -> &OpaqueId {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn local_vertex_id(&self) -> &OpaqueId {
        &self.local_vertex_id
    }

    pub fn other_vertex(&self) -> &AdjacentVertex {
        &self.other_vertex
    }

    pub fn other_vertex_id(&self) -> &OpaqueId {
        self.other_vertex.id()
    }

    /// Id of the tail vertex.
    pub fn out_vertex_id(&self) -> &OpaqueId {
        match self.direction {
            Direction::Out => &self.local_vertex_id,
            Direction::In => self.other_vertex.id(),
        }
    }

    /// Id of the head vertex.
    pub fn in_vertex_id(&self) -> &OpaqueId {
        match self.direction {
            Direction::Out => self.other_vertex.id(),
            Direction::In => &self.local_vertex_id,
        }
    }

    pub fn property(&self, key: &str) -> Option<&Scalar> {
        self.properties.get(key)
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Sets an edge property, returning the value it replaced.
    pub fn set_property(&mut self, key: impl Into<String>, value: Scalar) -> Option<Scalar> {
        self.properties.set(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_follow_direction() {
        let out = StarEdge::new(
            OpaqueId::from(7),
            "knows".to_string(),
            Direction::Out,
            OpaqueId::from(1),
            AdjacentVertex::new(OpaqueId::from(2)),
        );
        assert_eq!(out.out_vertex_id(), &OpaqueId::from(1));
        assert_eq!(out.in_vertex_id(), &OpaqueId::from(2));

        let incoming = StarEdge::new(
            OpaqueId::from(8),
            "knows".to_string(),
            Direction::In,
            OpaqueId::from(1),
            AdjacentVertex::new(OpaqueId::from(3)),
        );
        assert_eq!(incoming.out_vertex_id(), &OpaqueId::from(3));
        assert_eq!(incoming.in_vertex_id(), &OpaqueId::from(1));
        assert_eq!(incoming.other_vertex_id(), &OpaqueId::from(3));
    }
}
