//! The star graph container.

use rustc_hash::FxHashMap;

use crate::error::StarGraphError;
use crate::model::{AdjacentVertex, Direction, OpaqueId, StarEdge, StarVertex, StarVertexProperty};
use crate::wire::Scalar;

type Adjacency = FxHashMap<String, Vec<StarEdge>>;

/// One vertex plus the edges incident to it.
///
/// A graph starts empty ([`StarGraph::open`]) and accepts exactly one local
/// vertex. Properties and edges can only be added after that vertex. Edges
/// are bucketed by (direction, label); each bucket keeps insertion order.
/// Identity uniqueness is not checked anywhere.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StarGraph {
    vertex: Option<StarVertex>,
    out_edges: Adjacency,
    in_edges: Adjacency,
}

impl StarGraph {
    /// Creates a graph with no local vertex.
    pub fn open() -> Self {
        Self::default()
    }

    /// Creates a graph centered on a new vertex.
    pub fn with_vertex(id: OpaqueId, label: impl Into<String>) -> Self {
        Self {
            vertex: Some(StarVertex::new(id, label.into())),
            ..Self::default()
        }
    }

    /// Adds the local vertex. Fails if the graph already has one.
    pub fn add_vertex(
        &mut self,
        id: OpaqueId,
        label: impl Into<String>,
    ) -> Result<&StarVertex, StarGraphError> {
        if let Some(existing) = &self.vertex {
            return Err(StarGraphError::AlreadyInitialized {
                existing: existing.id().clone(),
            });
        }
        Ok(self.vertex.insert(StarVertex::new(id, label.into())))
    }

    pub fn is_initialized(&self) -> bool {
        self.vertex.is_some()
    }

    pub fn vertex(&self) -> Option<&StarVertex> {
        self.vertex.as_ref()
    }

    /// Appends a property value to the local vertex.
    pub fn add_property(
        &mut self,
        key: &str,
        value: Scalar,
        id: OpaqueId,
    ) -> Result<&mut StarVertexProperty, StarGraphError> {
        let vertex = self.vertex.as_mut().ok_or(StarGraphError::NotInitialized)?;
        Ok(vertex.push_property(key, value, id))
    }

    /// Creates the placeholder for the far endpoint of an edge. It carries
    /// only the id; the graph itself is left unchanged, and the placeholder
    /// is stored only inside the edge it is passed to.
    pub fn add_adjacent_vertex(&self, id: OpaqueId) -> AdjacentVertex {
        AdjacentVertex::new(id)
    }

    /// Appends an edge to the (direction, label) bucket.
    pub fn add_edge(
        &mut self,
        direction: Direction,
        label: &str,
        other: impl Into<AdjacentVertex>,
        id: OpaqueId,
    ) -> Result<&mut StarEdge, StarGraphError> {
        let local = self
            .vertex
            .as_ref()
            .ok_or(StarGraphError::NotInitialized)?
            .id()
            .clone();
        let edge = StarEdge::new(id, label.to_owned(), direction, local, other.into());

        let bucket = match direction {
            Direction::Out => &mut self.out_edges,
            Direction::In => &mut self.in_edges,
        }
        .entry(label.to_owned())
        .or_default();
        bucket.push(edge);
        let last = bucket.len() - 1;
        Ok(&mut bucket[last])
    }

    fn adjacency(&self, direction: Direction) -> &Adjacency {
        match direction {
            Direction::Out => &self.out_edges,
            Direction::In => &self.in_edges,
        }
    }

    /// Edges in one (direction, label) bucket, in insertion order.
    pub fn edges(&self, direction: Direction, label: &str) -> &[StarEdge] {
        self.adjacency(direction)
            .get(label)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All edges in one direction. Labels come in no particular order;
    /// edges within a label keep insertion order.
    pub fn edges_in(&self, direction: Direction) -> impl Iterator<Item = &StarEdge> {
        self.adjacency(direction).values().flatten()
    }

    /// Labels with at least one edge in `direction`, in no particular order.
    pub fn edge_labels(&self, direction: Direction) -> impl Iterator<Item = &str> {
        self.adjacency(direction).keys().map(String::as_str)
    }

    /// Every bucket of the graph as (direction, label, edges).
    pub fn buckets(&self) -> impl Iterator<Item = (Direction, &str, &[StarEdge])> {
        Direction::ALL.into_iter().flat_map(move |direction| {
            self.adjacency(direction)
                .iter()
                .map(move |(label, edges)| (direction, label.as_str(), edges.as_slice()))
        })
    }

    pub fn edge_count(&self) -> usize {
        self.out_edges
            .values()
            .chain(self.in_edges.values())
            .map(Vec::len)
            .sum()
    }
}
