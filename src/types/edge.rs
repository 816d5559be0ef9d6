//! Default edge values and the rendering contract for edges.
//!
//! Edges are opaque values; connectivity and weight live in the graph that
//! tracks them. The default edge types here exist for callers who do not
//! care about edge identity beyond uniqueness: each factory mints values
//! with a per-factory serial so no two minted edges compare equal.

use crate::graph::EdgeFactory;

/// Rendering contract used by the canonical `"(V, E)"` graph form.
pub trait EdgeLabel {
    /// Text rendered before an edge's endpoint pair, or `None` for anonymous
    /// edges, which render as the bare pair.
    fn label(&self) -> Option<String>;
}

/// Anonymous edge value minted by [`DefaultEdgeFactory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DefaultEdge {
    serial: u64,
}

impl DefaultEdge {
    fn new(serial: u64) -> Self {
        Self { serial }
    }
}

impl EdgeLabel for DefaultEdge {
    fn label(&self) -> Option<String> {
        None
    }
}

/// Anonymous edge value minted by [`DefaultWeightedEdgeFactory`].
///
/// Identical to [`DefaultEdge`] apart from its type; the weight itself is
/// tracked by the graph, not the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DefaultWeightedEdge {
    serial: u64,
}

impl DefaultWeightedEdge {
    fn new(serial: u64) -> Self {
        Self { serial }
    }
}

impl EdgeLabel for DefaultWeightedEdge {
    fn label(&self) -> Option<String> {
        None
    }
}

/// Caller-identifiable edges rendered with a `label=` prefix.
impl EdgeLabel for String {
    fn label(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl EdgeLabel for &str {
    fn label(&self) -> Option<String> {
        Some((*self).to_string())
    }
}

/// Mints unique [`DefaultEdge`] values.
#[derive(Debug, Default, Clone)]
pub struct DefaultEdgeFactory {
    next: u64,
}

impl<V> EdgeFactory<V, DefaultEdge> for DefaultEdgeFactory {
    fn create_edge(&mut self, _source: &V, _target: &V) -> DefaultEdge {
        let edge = DefaultEdge::new(self.next);
        self.next += 1;
        edge
    }
}

/// Mints unique [`DefaultWeightedEdge`] values.
#[derive(Debug, Default, Clone)]
pub struct DefaultWeightedEdgeFactory {
    next: u64,
}

impl<V> EdgeFactory<V, DefaultWeightedEdge> for DefaultWeightedEdgeFactory {
    fn create_edge(&mut self, _source: &V, _target: &V) -> DefaultWeightedEdge {
        let edge = DefaultWeightedEdge::new(self.next);
        self.next += 1;
        edge
    }
}
