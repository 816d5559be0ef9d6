//! Error types for the graphkit library.

use std::fmt;

use thiserror::Error;

/// All errors that can occur in the graphkit library.
///
/// Every failure is surfaced to the caller immediately; nothing is retried
/// or swallowed internally. Mutation preconditions fail before any state
/// change, so a failed add or remove leaves the graph untouched.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Referenced vertex is not a member of the graph.
    #[error("vertex {0} not found in graph")]
    UnknownVertex(String),

    /// Referenced edge is not tracked by the graph.
    #[error("edge {0} not found in graph")]
    UnknownEdge(String),

    /// Operation requires a capability this graph does not carry.
    #[error("{operation} requires a {required} graph")]
    CapabilityMismatch {
        operation: &'static str,
        required: &'static str,
    },

    /// Self-loop rejected by the simple-graph policy.
    #[error("self-loops are not allowed on vertex {0}")]
    SelfLoop(String),

    /// Writing to the output sink failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The export pipeline could not initialize its writer.
    #[error("exporter configuration error: {0}")]
    Configuration(String),
}

impl From<quick_xml::Error> for GraphError {
    fn from(err: quick_xml::Error) -> Self {
        match err {
            quick_xml::Error::Io(inner) => {
                Self::Io(std::io::Error::new(inner.kind(), inner.to_string()))
            }
            other => Self::Configuration(other.to_string()),
        }
    }
}

impl GraphError {
    pub(crate) fn unknown_vertex<V: fmt::Debug + ?Sized>(vertex: &V) -> Self {
        Self::UnknownVertex(format!("{vertex:?}"))
    }

    pub(crate) fn unknown_edge<E: fmt::Debug + ?Sized>(edge: &E) -> Self {
        Self::UnknownEdge(format!("{edge:?}"))
    }
}

/// Convenience result type for graphkit operations.
pub type GraphResult<T> = Result<T, GraphError>;
