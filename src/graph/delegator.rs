//! Transparent forwarding view over a backing graph.

use std::fmt;

use crate::graph::contract::{Graph, MutableGraph};
use crate::types::{Direction, GraphResult, Weighting};

/// A stateless view that forwards every call verbatim to the backing graph
/// fixed at construction.
///
/// Capability-gated operations are forwarded as-is: whether the backing
/// graph carries the required capability is checked at invocation time by
/// the backing graph itself, never statically by this type. Useful as a
/// base for wrapping a graph with cross-cutting behavior (read-only views,
/// change notification) without re-implementing the mutable contract.
///
/// Equality of delegators is structural, not reference identity: two
/// delegators compare equal iff their backing graphs compare equal. This is
/// deliberate and covered by a dedicated test.
#[derive(Debug, Clone)]
pub struct GraphDelegator<G> {
    delegate: G,
}

impl<G> GraphDelegator<G> {
    /// Wrap `delegate`; the backing graph is fixed for the delegator's life.
    pub fn new(delegate: G) -> Self {
        Self { delegate }
    }

    /// Shared access to the backing graph.
    pub fn inner(&self) -> &G {
        &self.delegate
    }

    /// Mutable access to the backing graph.
    pub fn inner_mut(&mut self) -> &mut G {
        &mut self.delegate
    }

    /// Unwrap into the backing graph.
    pub fn into_inner(self) -> G {
        self.delegate
    }
}

impl<V, E, G> Graph<V, E> for GraphDelegator<G>
where
    G: Graph<V, E>,
{
    fn direction(&self) -> Direction {
        self.delegate.direction()
    }

    fn weighting(&self) -> Weighting {
        self.delegate.weighting()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        self.delegate.vertices()
    }

    fn vertex_count(&self) -> usize {
        self.delegate.vertex_count()
    }

    fn edges(&self) -> Box<dyn Iterator<Item = &E> + '_> {
        self.delegate.edges()
    }

    fn edge_count(&self) -> usize {
        self.delegate.edge_count()
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.delegate.contains_vertex(vertex)
    }

    fn contains_edge(&self, edge: &E) -> bool {
        self.delegate.contains_edge(edge)
    }

    fn get_all_edges(&self, source: &V, target: &V) -> Option<Vec<&E>> {
        self.delegate.get_all_edges(source, target)
    }

    fn get_edge(&self, source: &V, target: &V) -> Option<&E> {
        self.delegate.get_edge(source, target)
    }

    fn contains_edge_between(&self, source: &V, target: &V) -> bool {
        self.delegate.contains_edge_between(source, target)
    }

    fn edges_of(&self, vertex: &V) -> GraphResult<Vec<&E>> {
        self.delegate.edges_of(vertex)
    }

    fn edge_source(&self, edge: &E) -> GraphResult<&V> {
        self.delegate.edge_source(edge)
    }

    fn edge_target(&self, edge: &E) -> GraphResult<&V> {
        self.delegate.edge_target(edge)
    }

    fn edge_weight(&self, edge: &E) -> GraphResult<f64> {
        self.delegate.edge_weight(edge)
    }

    fn degree_of(&self, vertex: &V) -> GraphResult<usize> {
        self.delegate.degree_of(vertex)
    }

    fn in_degree_of(&self, vertex: &V) -> GraphResult<usize> {
        self.delegate.in_degree_of(vertex)
    }

    fn out_degree_of(&self, vertex: &V) -> GraphResult<usize> {
        self.delegate.out_degree_of(vertex)
    }

    fn incoming_edges_of(&self, vertex: &V) -> GraphResult<Vec<&E>> {
        self.delegate.incoming_edges_of(vertex)
    }

    fn outgoing_edges_of(&self, vertex: &V) -> GraphResult<Vec<&E>> {
        self.delegate.outgoing_edges_of(vertex)
    }
}

impl<V, E, G> MutableGraph<V, E> for GraphDelegator<G>
where
    G: MutableGraph<V, E>,
{
    fn add_vertex(&mut self, vertex: V) -> bool {
        self.delegate.add_vertex(vertex)
    }

    fn add_edge(&mut self, source: &V, target: &V) -> GraphResult<Option<E>> {
        self.delegate.add_edge(source, target)
    }

    fn add_edge_with(&mut self, source: &V, target: &V, edge: E) -> GraphResult<bool> {
        self.delegate.add_edge_with(source, target, edge)
    }

    fn remove_vertex(&mut self, vertex: &V) -> bool {
        self.delegate.remove_vertex(vertex)
    }

    fn remove_edge(&mut self, edge: &E) -> bool {
        self.delegate.remove_edge(edge)
    }

    fn remove_edge_between(&mut self, source: &V, target: &V) -> Option<E> {
        self.delegate.remove_edge_between(source, target)
    }

    fn set_edge_weight(&mut self, edge: &E, weight: f64) -> GraphResult<()> {
        self.delegate.set_edge_weight(edge, weight)
    }
}

impl<G: PartialEq> PartialEq for GraphDelegator<G> {
    fn eq(&self, other: &Self) -> bool {
        self.delegate == other.delegate
    }
}

impl<G: fmt::Display> fmt::Display for GraphDelegator<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.delegate.fmt(f)
    }
}
