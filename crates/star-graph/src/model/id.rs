//! Opaque identities.

use std::fmt;

use crate::wire::{Record, Scalar, WireValue};

/// Identity of a vertex, edge or property as it appeared on the wire.
///
/// Ids are compared structurally and never interpreted: a number, a string
/// or a composite record are all valid ids.
#[derive(Debug, Clone, PartialEq)]
pub struct OpaqueId(WireValue);

impl OpaqueId {
    pub fn new(value: impl Into<WireValue>) -> Self {
        Self(value.into())
    }

    pub fn as_wire(&self) -> &WireValue {
        &self.0
    }

    pub fn into_wire(self) -> WireValue {
        self.0
    }
}

impl fmt::Display for OpaqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<WireValue> for OpaqueId {
    fn from(v: WireValue) -> Self {
        Self(v)
    }
}

impl From<Scalar> for OpaqueId {
    fn from(v: Scalar) -> Self {
        Self(WireValue::Scalar(v))
    }
}

impl From<Record> for OpaqueId {
    fn from(v: Record) -> Self {
        Self(WireValue::Record(v))
    }
}

impl From<i32> for OpaqueId {
    fn from(v: i32) -> Self {
        Self::new(v)
    }
}

impl From<i64> for OpaqueId {
    fn from(v: i64) -> Self {
        Self::new(v)
    }
}

impl From<&str> for OpaqueId {
    fn from(v: &str) -> Self {
        Self::new(v)
    }
}

impl From<String> for OpaqueId {
    fn from(v: String) -> Self {
        Self::new(v)
    }
}

/// Placeholder for the far endpoint of a star edge. Only the id is known.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacentVertex {
    id: OpaqueId,
}

impl AdjacentVertex {
    pub fn new(id: OpaqueId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> &OpaqueId {
        &self.id
    }
}

impl From<OpaqueId> for AdjacentVertex {
    fn from(id: OpaqueId) -> Self {
        Self::new(id)
    }
}
