//! Error types for star graph decoding, construction and validation.

use std::fmt;

use thiserror::Error;

use crate::model::{Direction, OpaqueId};

/// Coarse classification of decode failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required field is absent.
    MissingField,
    /// A field is present but has the wrong shape.
    TypeMismatch,
    /// A direction token other than `outE`/`inE`.
    UnsupportedDirection,
    /// A second local vertex was added to one star graph.
    AlreadyInitialized,
    /// A property or edge was added before the local vertex.
    NotInitialized,
    /// A container exceeded a configured decode limit.
    LimitExceeded,
}

impl ErrorKind {
    /// Returns the kind's name (e.g., "MissingField").
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::MissingField => "MissingField",
            ErrorKind::TypeMismatch => "TypeMismatch",
            ErrorKind::UnsupportedDirection => "UnsupportedDirection",
            ErrorKind::AlreadyInitialized => "AlreadyInitialized",
            ErrorKind::NotInitialized => "NotInitialized",
            ErrorKind::LimitExceeded => "LimitExceeded",
        }
    }
}

/// One step of a [`FieldPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

/// Location of a field inside a wire record, rendered like
/// `properties.name[0].id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// The path of the record being decoded.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn from_segments(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    /// Returns this path extended by a record key.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.segments.push(PathSegment::Key(key.into()));
        self
    }

    /// Returns this path extended by a sequence index.
    pub fn index(mut self, index: usize) -> Self {
        self.segments.push(PathSegment::Index(index));
        self
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("<root>");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if i == 0 => f.write_str(key)?,
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

/// Error while building a star graph in memory.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StarGraphError {
    #[error("star graph already holds local vertex {existing}")]
    AlreadyInitialized { existing: OpaqueId },

    #[error("star graph has no local vertex")]
    NotInitialized,
}

/// Error while decoding a wire record into a star graph.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("missing required field `{path}`")]
    MissingField { path: FieldPath },

    #[error("type mismatch at `{path}`: expected {expected}, found {found}")]
    TypeMismatch {
        path: FieldPath,
        expected: &'static str,
        found: &'static str,
    },

    #[error("unsupported direction {token:?} (expected `outE` or `inE`)")]
    UnsupportedDirection { token: String },

    #[error("`{path}` has {len} entries, exceeding the limit of {max}")]
    LengthExceedsLimit {
        path: FieldPath,
        len: usize,
        max: usize,
    },

    #[error(transparent)]
    Graph(#[from] StarGraphError),
}

impl DecodeError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DecodeError::MissingField { .. } => ErrorKind::MissingField,
            DecodeError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            DecodeError::UnsupportedDirection { .. } => ErrorKind::UnsupportedDirection,
            DecodeError::LengthExceedsLimit { .. } => ErrorKind::LimitExceeded,
            DecodeError::Graph(StarGraphError::AlreadyInitialized { .. }) => {
                ErrorKind::AlreadyInitialized
            }
            DecodeError::Graph(StarGraphError::NotInitialized) => ErrorKind::NotInitialized,
        }
    }

    /// Returns the wire path the error points at, if it has one.
    pub fn path(&self) -> Option<&FieldPath> {
        match self {
            DecodeError::MissingField { path }
            | DecodeError::TypeMismatch { path, .. }
            | DecodeError::LengthExceedsLimit { path, .. } => Some(path),
            DecodeError::UnsupportedDirection { .. } | DecodeError::Graph(_) => None,
        }
    }
}

/// Error during structural validation of an assembled star graph.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("star graph has no local vertex")]
    MissingVertex,

    #[error("edge {edge} names local vertex {found}, but the star graph's vertex is {expected}")]
    ForeignLocalVertex {
        edge: OpaqueId,
        expected: OpaqueId,
        found: OpaqueId,
    },

    #[error("edge {edge} ({direction} {label:?}) is stored under ({bucket_direction} {bucket_label:?})")]
    MisfiledEdge {
        edge: OpaqueId,
        direction: Direction,
        label: String,
        bucket_direction: Direction,
        bucket_label: String,
    },

    #[error("empty property key on {owner}")]
    EmptyPropertyKey { owner: &'static str },
}
