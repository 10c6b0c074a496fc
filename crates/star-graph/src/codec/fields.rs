//! Field access over wire records with path-aware errors.
//!
//! Decoders walk the record with a [`Cursor`], a borrowed chain of path
//! segments that costs nothing until an error needs a [`FieldPath`].

use crate::error::{DecodeError, FieldPath, PathSegment};
use crate::wire::{Record, Scalar, WireValue};

/// Position inside the record currently being decoded.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Cursor<'a> {
    Root,
    Key(&'a Cursor<'a>, &'a str),
    Index(&'a Cursor<'a>, usize),
}

impl<'a> Cursor<'a> {
    pub(crate) fn key<'b>(&'b self, key: &'b str) -> Cursor<'b> {
        Cursor::Key(self, key)
    }

    pub(crate) fn index(&self, index: usize) -> Cursor<'_> {
        Cursor::Index(self, index)
    }

    pub(crate) fn to_path(&self) -> FieldPath {
        let mut segments = Vec::new();
        let mut at = self;
        loop {
            match at {
                Cursor::Root => break,
                Cursor::Key(parent, key) => {
                    segments.push(PathSegment::Key((*key).to_owned()));
                    at = *parent;
                }
                Cursor::Index(parent, index) => {
                    segments.push(PathSegment::Index(*index));
                    at = *parent;
                }
            }
        }
        segments.reverse();
        FieldPath::from_segments(segments)
    }
}

fn mismatch(at: &Cursor<'_>, expected: &'static str, found: &WireValue) -> DecodeError {
    DecodeError::TypeMismatch {
        path: at.to_path(),
        expected,
        found: found.type_name(),
    }
}

/// Returns `record[key]`, failing `MissingField` if absent.
pub(crate) fn required<'r>(
    record: &'r Record,
    key: &str,
    at: &Cursor<'_>,
) -> Result<&'r WireValue, DecodeError> {
    record.get(key).ok_or_else(|| DecodeError::MissingField {
        path: at.key(key).to_path(),
    })
}

/// Returns `record[key]` as a scalar.
pub(crate) fn required_scalar<'r>(
    record: &'r Record,
    key: &str,
    at: &Cursor<'_>,
) -> Result<&'r Scalar, DecodeError> {
    let value = required(record, key, at)?;
    expect_scalar(value, &at.key(key))
}

/// Returns `record[key]` as a string.
pub(crate) fn required_str<'r>(
    record: &'r Record,
    key: &str,
    at: &Cursor<'_>,
) -> Result<&'r str, DecodeError> {
    let value = required(record, key, at)?;
    match value {
        WireValue::Scalar(Scalar::String(s)) => Ok(s),
        other => Err(mismatch(&at.key(key), "string", other)),
    }
}

pub(crate) fn expect_scalar<'v>(
    value: &'v WireValue,
    at: &Cursor<'_>,
) -> Result<&'v Scalar, DecodeError> {
    match value {
        WireValue::Scalar(s) => Ok(s),
        WireValue::Sequence(_) | WireValue::Record(_) => Err(mismatch(at, "scalar", value)),
    }
}

pub(crate) fn expect_sequence<'v>(
    value: &'v WireValue,
    at: &Cursor<'_>,
) -> Result<&'v [WireValue], DecodeError> {
    match value {
        WireValue::Sequence(items) => Ok(items),
        WireValue::Scalar(_) | WireValue::Record(_) => Err(mismatch(at, "sequence", value)),
    }
}

pub(crate) fn expect_record<'v>(
    value: &'v WireValue,
    at: &Cursor<'_>,
) -> Result<&'v Record, DecodeError> {
    match value {
        WireValue::Record(record) => Ok(record),
        WireValue::Scalar(_) | WireValue::Sequence(_) => Err(mismatch(at, "record", value)),
    }
}

/// Fails `LengthExceedsLimit` if `len > max`.
pub(crate) fn check_len(at: &Cursor<'_>, len: usize, max: usize) -> Result<(), DecodeError> {
    if len > max {
        return Err(DecodeError::LengthExceedsLimit {
            path: at.to_path(),
            len,
            max,
        });
    }
    Ok(())
}
