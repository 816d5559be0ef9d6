//! Capability tags carried by every graph instance.
//!
//! Direction and weight behavior are explicit tags queried through typed
//! accessors, never inferred from the concrete type of a graph. Operations
//! gated on a capability check the tag at invocation time and fail with
//! [`GraphError::CapabilityMismatch`](crate::GraphError::CapabilityMismatch)
//! when it is absent.

use std::fmt;

/// Weight reported for every edge of an unweighted graph.
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

/// Whether a graph's edges are ordered or unordered vertex pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Directed,
    Undirected,
}

impl Direction {
    pub fn is_directed(self) -> bool {
        matches!(self, Self::Directed)
    }

    /// Value written to the GraphML `edgedefault` attribute.
    pub fn edgedefault(self) -> &'static str {
        match self {
            Self::Directed => "directed",
            Self::Undirected => "undirected",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.edgedefault())
    }
}

/// Whether a graph carries per-edge weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weighting {
    Weighted,
    Unweighted,
}

impl Weighting {
    pub fn is_weighted(self) -> bool {
        matches!(self, Self::Weighted)
    }
}

impl fmt::Display for Weighting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Weighted => "weighted",
            Self::Unweighted => "unweighted",
        })
    }
}
