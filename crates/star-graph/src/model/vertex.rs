//! The local vertex of a star graph and its properties.

use crate::model::{OpaqueId, Properties};
use crate::wire::Scalar;

/// One value of a vertex property, with its own identity and meta-properties.
#[derive(Debug, Clone, PartialEq)]
pub struct StarVertexProperty {
    id: OpaqueId,
    key: String,
    value: Scalar,
    properties: Properties,
}

impl StarVertexProperty {
    pub fn new(id: OpaqueId, key: impl Into<String>, value: Scalar) -> Self {
        Self {
            id,
            key: key.into(),
            value,
            properties: Properties::new(),
        }
    }

    pub fn id(&self) -> &OpaqueId {
        &self.id
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &Scalar {
        &self.value
    }

    /// Returns a meta-property value.
    pub fn property(&self, key: &str) -> Option<&Scalar> {
        self.properties.get(key)
    }

    /// Meta-properties in insertion order.
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Sets a meta-property, returning the value it replaced. Meta-properties
    /// are scalars, so they cannot carry further nesting.
    pub fn set_property(&mut self, key: impl Into<String>, value: Scalar) -> Option<Scalar> {
        self.properties.set(key, value)
    }
}

/// The vertex a star graph is centered on.
///
/// Properties are grouped by key in first-seen order. A key holding one
/// value is single-valued; a key holding several is list-valued. There is no
/// separate cardinality marker.
#[derive(Debug, Clone, PartialEq)]
pub struct StarVertex {
    id: OpaqueId,
    label: String,
    properties: Vec<(String, Vec<StarVertexProperty>)>,
}

impl StarVertex {
    pub(crate) fn new(id: OpaqueId, label: String) -> Self {
        Self {
            id,
            label,
            properties: Vec::new(),
        }
    }

    pub fn id(&self) -> &OpaqueId {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Appends a value under `key`. Never overwrites.
    pub(crate) fn push_property(
        &mut self,
        key: &str,
        value: Scalar,
        id: OpaqueId,
    ) -> &mut StarVertexProperty {
        let index = match self.properties.iter().position(|(k, _)| k == key) {
            Some(index) => index,
            None => {
                self.properties.push((key.to_owned(), Vec::new()));
                self.properties.len() - 1
            }
        };
        let values = &mut self.properties[index].1;
        values.push(StarVertexProperty::new(id, key, value));
        let last = values.len() - 1;
        &mut values[last]
    }

    /// All values under `key`, in wire order. Empty if the key is absent.
    pub fn properties(&self, key: &str) -> &[StarVertexProperty] {
        self.properties
            .iter()
            .find_map(|(k, values)| (k == key).then_some(values.as_slice()))
            .unwrap_or(&[])
    }

    /// The first value under `key`.
    pub fn value(&self, key: &str) -> Option<&Scalar> {
        self.properties(key).first().map(StarVertexProperty::value)
    }

    /// All values under `key`, in wire order.
    pub fn values<'a>(&'a self, key: &str) -> impl Iterator<Item = &'a Scalar> + use<'a> {
        self.properties(key).iter().map(StarVertexProperty::value)
    }

    /// Whether `key` holds more than one value.
    pub fn is_multi_valued(&self, key: &str) -> bool {
        self.properties(key).len() > 1
    }

    pub fn property_keys(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(|(k, _)| k.as_str())
    }

    /// Property groups in first-seen key order.
    pub fn iter_properties(&self) -> impl Iterator<Item = (&str, &[StarVertexProperty])> {
        self.properties
            .iter()
            .map(|(k, values)| (k.as_str(), values.as_slice()))
    }

    /// Total number of property values across all keys.
    pub fn property_count(&self) -> usize {
        self.properties.iter().map(|(_, values)| values.len()).sum()
    }
}
