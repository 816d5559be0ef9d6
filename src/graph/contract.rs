//! Read and mutation contracts implemented by every graph.

use crate::types::{Direction, GraphResult, Weighting};

/// Read contract over a graph with vertex values `V` and edge values `E`.
///
/// Vertices and edges are opaque caller-supplied values with their own
/// equality; the graph tracks each edge's endpoints and weight itself.
/// Iteration order of the vertex and edge sets is the backing store's own
/// deterministic order. Mutating the graph while an iterator is live is
/// prevented by borrowing.
pub trait Graph<V, E> {
    /// Direction capability tag of this graph.
    fn direction(&self) -> Direction;

    /// Weight capability tag of this graph.
    fn weighting(&self) -> Weighting;

    /// All vertices, in the backing set's iteration order.
    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_>;

    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// All edges, in the backing set's iteration order.
    fn edges(&self) -> Box<dyn Iterator<Item = &E> + '_>;

    /// Number of edges.
    fn edge_count(&self) -> usize;

    /// Whether an equal vertex is a member of this graph.
    fn contains_vertex(&self, vertex: &V) -> bool;

    /// Whether an equal edge is tracked by this graph.
    fn contains_edge(&self, edge: &E) -> bool;

    /// All edges connecting `source` to `target`.
    ///
    /// `None` if either endpoint is not a member; an empty vec if both are
    /// members but unconnected. In an undirected graph an edge between
    /// `target` and `source` counts.
    fn get_all_edges(&self, source: &V, target: &V) -> Option<Vec<&E>>;

    /// One edge connecting `source` to `target`, or `None`.
    fn get_edge(&self, source: &V, target: &V) -> Option<&E>;

    /// Whether any edge connects `source` to `target`.
    fn contains_edge_between(&self, source: &V, target: &V) -> bool {
        self.get_edge(source, target).is_some()
    }

    /// All edges touching `vertex`.
    fn edges_of(&self, vertex: &V) -> GraphResult<Vec<&E>>;

    /// Source vertex of `edge`.
    ///
    /// For an undirected graph, source and target are distinguishable
    /// designations without mathematical meaning.
    fn edge_source(&self, edge: &E) -> GraphResult<&V>;

    /// Target vertex of `edge`.
    fn edge_target(&self, edge: &E) -> GraphResult<&V>;

    /// Weight of `edge`. Unweighted graphs report
    /// [`DEFAULT_EDGE_WEIGHT`](crate::DEFAULT_EDGE_WEIGHT), so weighted
    /// algorithms apply to them where meaningful.
    fn edge_weight(&self, edge: &E) -> GraphResult<f64>;

    /// Number of edges touching `vertex`. Undirected capability.
    fn degree_of(&self, vertex: &V) -> GraphResult<usize>;

    /// Number of edges ending at `vertex`. Directed capability.
    fn in_degree_of(&self, vertex: &V) -> GraphResult<usize>;

    /// Number of edges starting at `vertex`. Directed capability.
    fn out_degree_of(&self, vertex: &V) -> GraphResult<usize>;

    /// All edges ending at `vertex`. Directed capability.
    fn incoming_edges_of(&self, vertex: &V) -> GraphResult<Vec<&E>>;

    /// All edges starting at `vertex`. Directed capability.
    fn outgoing_edges_of(&self, vertex: &V) -> GraphResult<Vec<&E>>;
}

/// Mutation contract on top of [`Graph`].
///
/// Preconditions fail fast before any state change, so single add and
/// remove operations are atomic.
pub trait MutableGraph<V, E>: Graph<V, E> {
    /// Add `vertex`; false if an equal vertex is already present.
    fn add_vertex(&mut self, vertex: V) -> bool;

    /// Create an edge from `source` to `target` through the edge factory.
    ///
    /// Fails with `UnknownVertex` if either endpoint is absent. Returns
    /// `Ok(None)` when the graph's edge policy refuses the pair (a parallel
    /// edge in a simple graph); the factory is not invoked in that case.
    fn add_edge(&mut self, source: &V, target: &V) -> GraphResult<Option<E>>;

    /// Add the caller-supplied `edge` from `source` to `target`; false if an
    /// equal edge is already tracked or the pair is refused by policy.
    fn add_edge_with(&mut self, source: &V, target: &V, edge: E) -> GraphResult<bool>;

    /// Remove `vertex` and every edge touching it; false if absent.
    fn remove_vertex(&mut self, vertex: &V) -> bool;

    /// Remove `edge`; false if untracked.
    fn remove_edge(&mut self, edge: &E) -> bool;

    /// Remove and return one edge connecting `source` to `target`.
    fn remove_edge_between(&mut self, source: &V, target: &V) -> Option<E>;

    /// Set `edge`'s weight. Weighted capability only.
    fn set_edge_weight(&mut self, edge: &E, weight: f64) -> GraphResult<()>;
}

/// Mints new edge values for factory-mediated edge additions.
///
/// Invoked exactly once per accepted source/target pair.
pub trait EdgeFactory<V, E> {
    fn create_edge(&mut self, source: &V, target: &V) -> E;
}
