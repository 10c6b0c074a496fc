//! Edge direction relative to the local vertex.

use std::fmt;
use std::str::FromStr;

use crate::error::DecodeError;
use crate::tokens;

/// Which end of an edge the local vertex sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// The local vertex is the tail.
    Out,
    /// The local vertex is the head.
    In,
}

impl Direction {
    /// Both directions, in the order a full star graph is decoded.
    pub const ALL: [Direction; 2] = [Direction::Out, Direction::In];

    /// Field of the vertex record holding this direction's edges.
    pub fn token(self) -> &'static str {
        match self {
            Direction::Out => tokens::OUT_E,
            Direction::In => tokens::IN_E,
        }
    }

    /// Field of an edge record holding the remote endpoint id.
    pub fn endpoint_field(self) -> &'static str {
        match self {
            Direction::Out => tokens::IN,
            Direction::In => tokens::OUT,
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Out => Direction::In,
            Direction::In => Direction::Out,
        }
    }

    /// Parses a direction token. Accepts the wire field names (`outE`,
    /// `inE`) and the conventional `OUT`/`IN` spellings.
    pub fn from_token(token: &str) -> Result<Direction, DecodeError> {
        match token {
            tokens::OUT_E | "OUT" => Ok(Direction::Out),
            tokens::IN_E | "IN" => Ok(Direction::In),
            _ => Err(DecodeError::UnsupportedDirection {
                token: token.to_owned(),
            }),
        }
    }
}

impl FromStr for Direction {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::from_token(s)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Out => "OUT",
            Direction::In => "IN",
        })
    }
}
