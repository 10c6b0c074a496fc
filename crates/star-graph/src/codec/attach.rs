//! Hook for registering decoded edges into an external graph.

use crate::error::DecodeError;
use crate::model::StarEdge;

/// Caller-supplied strategy invoked once for every decoded edge, after the
/// edge and its properties are in place.
///
/// The handle an attacher returns is dropped by the decoder. An attacher
/// error aborts decoding and reaches the caller unchanged, which is why the
/// decoders return `Result<_, A::Error>`; decode failures are converted into
/// that type through `From<DecodeError>`.
///
/// Closures `FnMut(&StarEdge) -> Result<H, E>` are attachers.
pub trait AttachEdge {
    /// What attaching produces (e.g. the edge in the host graph).
    type Handle;
    type Error: From<DecodeError>;

    fn attach(&mut self, edge: &StarEdge) -> Result<Self::Handle, Self::Error>;
}

impl<F, H, E> AttachEdge for F
where
    F: FnMut(&StarEdge) -> Result<H, E>,
    E: From<DecodeError>,
{
    type Handle = H;
    type Error = E;

    fn attach(&mut self, edge: &StarEdge) -> Result<H, E> {
        self(edge)
    }
}

/// Attacher type for decoding without a callback, e.g.
/// `decode_star_graph_with_options(&record, &options, None::<&mut Detached>)`.
pub type Detached = fn(&StarEdge) -> Result<(), DecodeError>;
