//! Wire values: the already-parsed, schema-less input to the decoders.
//!
//! A wire record is a tree of three shapes: scalars, ordered sequences and
//! ordered records. It carries no type information beyond that shape, so the
//! decoders in [`crate::codec`] match on it exhaustively and report every
//! shape they did not expect.

#[cfg(feature = "json")]
pub mod json;

use std::fmt;

/// A leaf value on the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    /// An integer above `i64::MAX`. Integers that fit `i64` are always `Int`.
    UInt(u64),
    Float(f64),
    String(String),
}

impl Scalar {
    /// Returns the string payload, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer payload, if this is an integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Scalar::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the integer payload as `u64`, if it is a non-negative integer.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Scalar::Int(v) => u64::try_from(*v).ok(),
            Scalar::UInt(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as a float, widening integers.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Float(v) => Some(*v),
            Scalar::Int(v) => Some(*v as f64),
            Scalar::UInt(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Returns the boolean payload, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    /// Short name of the scalar's type, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::Null => "null",
            Scalar::Bool(_) => "boolean",
            Scalar::Int(_) | Scalar::UInt(_) => "integer",
            Scalar::Float(_) => "float",
            Scalar::String(_) => "string",
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => f.write_str("null"),
            Scalar::Bool(v) => write!(f, "{v}"),
            Scalar::Int(v) => write!(f, "{v}"),
            Scalar::UInt(v) => write!(f, "{v}"),
            Scalar::Float(v) => write!(f, "{v:?}"),
            Scalar::String(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::Int(i64::from(v))
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int(v)
    }
}

impl From<u64> for Scalar {
    fn from(v: u64) -> Self {
        i64::try_from(v).map_or(Scalar::UInt(v), Scalar::Int)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::String(v.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::String(v)
    }
}

/// A node of a parsed wire record.
#[derive(Debug, Clone, PartialEq)]
pub enum WireValue {
    Scalar(Scalar),
    Sequence(Vec<WireValue>),
    Record(Record),
}

impl WireValue {
    /// Describes the value for error messages. Scalars report their own
    /// type so that a number where a string was required is distinguishable.
    pub fn type_name(&self) -> &'static str {
        match self {
            WireValue::Scalar(s) => s.type_name(),
            WireValue::Sequence(_) => "sequence",
            WireValue::Record(_) => "record",
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            WireValue::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[WireValue]> {
        match self {
            WireValue::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            WireValue::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Consumes the value, returning the record it holds.
    pub fn into_record(self) -> Result<Record, WireValue> {
        match self {
            WireValue::Record(r) => Ok(r),
            other => Err(other),
        }
    }
}

impl fmt::Display for WireValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireValue::Scalar(s) => s.fmt(f),
            WireValue::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    item.fmt(f)?;
                }
                f.write_str("]")
            }
            WireValue::Record(record) => record.fmt(f),
        }
    }
}

impl From<Scalar> for WireValue {
    fn from(v: Scalar) -> Self {
        WireValue::Scalar(v)
    }
}

impl From<Record> for WireValue {
    fn from(v: Record) -> Self {
        WireValue::Record(v)
    }
}

impl<T: Into<WireValue>> From<Vec<T>> for WireValue {
    fn from(items: Vec<T>) -> Self {
        WireValue::Sequence(items.into_iter().map(Into::into).collect())
    }
}

macro_rules! scalar_into_wire {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for WireValue {
                fn from(v: $ty) -> Self {
                    WireValue::Scalar(Scalar::from(v))
                }
            }
        )*
    };
}

scalar_into_wire!(bool, i32, i64, u64, f64, &str, String);

/// An insertion-ordered mapping of string keys to wire values.
///
/// Lookups return the first entry for a key. Duplicate keys coming from a
/// permissive parser are kept and iterated in wire order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    entries: Vec<(String, WireValue)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry and returns the record (builder style).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<WireValue>) -> Self {
        self.push(key, value);
        self
    }

    /// Appends an entry.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<WireValue>) {
        self.entries.push((key.into(), value.into()));
    }

    pub fn get(&self, key: &str) -> Option<&WireValue> {
        self.entries
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in wire order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &WireValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key:?}: {value}")?;
        }
        f.write_str("}")
    }
}

impl<K: Into<String>, V: Into<WireValue>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Record {
    type Item = (String, WireValue);
    type IntoIter = std::vec::IntoIter<(String, WireValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
