//! Adapter from parsed JSON into wire values.
//!
//! Star graph records travel as JSON objects, one per line in adjacency-list
//! files. Parsing stays with `serde_json`; this module only reshapes its
//! output. Object key order is kept (the `preserve_order` feature), since key
//! order is the order properties and edge labels are decoded in.

use serde_json::{Number, Value};
use thiserror::Error;

use crate::wire::{Record, Scalar, WireValue};

/// Error turning JSON text into a wire record.
#[derive(Debug, Error)]
pub enum JsonError {
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("expected a JSON object at the top level, found {found}")]
    NotARecord { found: &'static str },
}

impl WireValue {
    /// Parses JSON text into a wire value.
    pub fn from_json_str(text: &str) -> Result<WireValue, JsonError> {
        let value: Value = serde_json::from_str(text)?;
        Ok(value.into())
    }

    /// Parses JSON bytes into a wire value.
    pub fn from_json_slice(bytes: &[u8]) -> Result<WireValue, JsonError> {
        let value: Value = serde_json::from_slice(bytes)?;
        Ok(value.into())
    }
}

impl Record {
    /// Parses a JSON object into a record.
    pub fn from_json_str(text: &str) -> Result<Record, JsonError> {
        WireValue::from_json_str(text)?
            .into_record()
            .map_err(|other| JsonError::NotARecord {
                found: other.type_name(),
            })
    }
}

impl From<Value> for WireValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => WireValue::Scalar(Scalar::Null),
            Value::Bool(b) => WireValue::Scalar(Scalar::Bool(b)),
            Value::Number(n) => WireValue::Scalar(number(&n)),
            Value::String(s) => WireValue::Scalar(Scalar::String(s)),
            Value::Array(items) => {
                WireValue::Sequence(items.into_iter().map(WireValue::from).collect())
            }
            Value::Object(map) => WireValue::Record(map.into_iter().collect()),
        }
    }
}

// Integers stay exact (`Int`, or `UInt` above i64::MAX); only fractions and
// exponents become floats.
fn number(n: &Number) -> Scalar {
    if let Some(v) = n.as_i64() {
        Scalar::Int(v)
    } else if let Some(v) = n.as_u64() {
        Scalar::UInt(v)
    } else {
        n.as_f64().map_or(Scalar::Null, Scalar::Float)
    }
}
