//! Insertion-ordered simple-graph store.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use log::trace;

use crate::graph::behavior::{assert_vertex_exists, format_graph, structural_eq};
use crate::graph::contract::{EdgeFactory, Graph, MutableGraph};
use crate::types::{
    DefaultEdge, DefaultEdgeFactory, Direction, EdgeLabel, GraphError, GraphResult, Weighting,
    DEFAULT_EDGE_WEIGHT,
};

/// Connectivity record for one tracked edge.
#[derive(Debug, Clone)]
struct EdgeEntry<V, E> {
    edge: E,
    source: V,
    target: V,
    weight: f64,
}

/// A simple graph: no parallel edges, no self-loops.
///
/// Vertices and edges iterate in insertion order, which keeps rendering and
/// export reproducible. Connectivity queries are linear scans over the edge
/// list; one full pass over vertices and edges is the intended cost model.
///
/// Equality is structural (see [`structural_eq`]); not safe for concurrent
/// mutation from multiple threads without external synchronization.
#[derive(Debug, Clone)]
pub struct SimpleGraph<V, E = DefaultEdge, F = DefaultEdgeFactory> {
    direction: Direction,
    weighting: Weighting,
    vertices: Vec<V>,
    vertex_set: HashSet<V>,
    entries: Vec<EdgeEntry<V, E>>,
    edge_set: HashSet<E>,
    factory: F,
}

impl<V, E, F> SimpleGraph<V, E, F>
where
    V: Eq + Hash + Clone + fmt::Debug,
    E: Eq + Hash + Clone + fmt::Debug,
{
    /// Empty graph with the given capability tags and a default factory.
    pub fn new(direction: Direction, weighting: Weighting) -> Self
    where
        F: Default,
    {
        Self::with_factory(direction, weighting, F::default())
    }

    /// Empty undirected, unweighted graph.
    pub fn undirected() -> Self
    where
        F: Default,
    {
        Self::new(Direction::Undirected, Weighting::Unweighted)
    }

    /// Empty directed, unweighted graph.
    pub fn directed() -> Self
    where
        F: Default,
    {
        Self::new(Direction::Directed, Weighting::Unweighted)
    }

    /// Empty graph using `factory` for factory-mediated edge additions.
    pub fn with_factory(direction: Direction, weighting: Weighting, factory: F) -> Self {
        Self {
            direction,
            weighting,
            vertices: Vec::new(),
            vertex_set: HashSet::new(),
            entries: Vec::new(),
            edge_set: HashSet::new(),
            factory,
        }
    }

    fn entry(&self, edge: &E) -> Option<&EdgeEntry<V, E>> {
        self.entries.iter().find(|entry| entry.edge == *edge)
    }

    fn entry_mut(&mut self, edge: &E) -> Option<&mut EdgeEntry<V, E>> {
        self.entries.iter_mut().find(|entry| entry.edge == *edge)
    }

    /// Whether `entry` connects `source` to `target`, honoring orientation
    /// only for directed graphs.
    fn connects(&self, entry: &EdgeEntry<V, E>, source: &V, target: &V) -> bool {
        (entry.source == *source && entry.target == *target)
            || (!self.direction.is_directed()
                && entry.source == *target
                && entry.target == *source)
    }
}

impl<V, E, F> Graph<V, E> for SimpleGraph<V, E, F>
where
    V: Eq + Hash + Clone + fmt::Debug,
    E: Eq + Hash + Clone + fmt::Debug,
{
    fn direction(&self) -> Direction {
        self.direction
    }

    fn weighting(&self) -> Weighting {
        self.weighting
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.vertices.iter())
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edges(&self) -> Box<dyn Iterator<Item = &E> + '_> {
        Box::new(self.entries.iter().map(|entry| &entry.edge))
    }

    fn edge_count(&self) -> usize {
        self.entries.len()
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.vertex_set.contains(vertex)
    }

    fn contains_edge(&self, edge: &E) -> bool {
        self.edge_set.contains(edge)
    }

    fn get_all_edges(&self, source: &V, target: &V) -> Option<Vec<&E>> {
        if !self.contains_vertex(source) || !self.contains_vertex(target) {
            return None;
        }
        Some(
            self.entries
                .iter()
                .filter(|entry| self.connects(entry, source, target))
                .map(|entry| &entry.edge)
                .collect(),
        )
    }

    fn get_edge(&self, source: &V, target: &V) -> Option<&E> {
        self.entries
            .iter()
            .find(|entry| self.connects(entry, source, target))
            .map(|entry| &entry.edge)
    }

    fn edges_of(&self, vertex: &V) -> GraphResult<Vec<&E>> {
        assert_vertex_exists(self, vertex)?;
        Ok(self
            .entries
            .iter()
            .filter(|entry| entry.source == *vertex || entry.target == *vertex)
            .map(|entry| &entry.edge)
            .collect())
    }

    fn edge_source(&self, edge: &E) -> GraphResult<&V> {
        self.entry(edge)
            .map(|entry| &entry.source)
            .ok_or_else(|| GraphError::unknown_edge(edge))
    }

    fn edge_target(&self, edge: &E) -> GraphResult<&V> {
        self.entry(edge)
            .map(|entry| &entry.target)
            .ok_or_else(|| GraphError::unknown_edge(edge))
    }

    fn edge_weight(&self, edge: &E) -> GraphResult<f64> {
        self.entry(edge)
            .map(|entry| entry.weight)
            .ok_or_else(|| GraphError::unknown_edge(edge))
    }

    fn degree_of(&self, vertex: &V) -> GraphResult<usize> {
        if self.direction.is_directed() {
            return Err(GraphError::CapabilityMismatch {
                operation: "degree_of",
                required: "undirected",
            });
        }
        Ok(self.edges_of(vertex)?.len())
    }

    fn in_degree_of(&self, vertex: &V) -> GraphResult<usize> {
        Ok(self.incoming_edges_of(vertex)?.len())
    }

    fn out_degree_of(&self, vertex: &V) -> GraphResult<usize> {
        Ok(self.outgoing_edges_of(vertex)?.len())
    }

    fn incoming_edges_of(&self, vertex: &V) -> GraphResult<Vec<&E>> {
        if !self.direction.is_directed() {
            return Err(GraphError::CapabilityMismatch {
                operation: "incoming_edges_of",
                required: "directed",
            });
        }
        assert_vertex_exists(self, vertex)?;
        Ok(self
            .entries
            .iter()
            .filter(|entry| entry.target == *vertex)
            .map(|entry| &entry.edge)
            .collect())
    }

    fn outgoing_edges_of(&self, vertex: &V) -> GraphResult<Vec<&E>> {
        if !self.direction.is_directed() {
            return Err(GraphError::CapabilityMismatch {
                operation: "outgoing_edges_of",
                required: "directed",
            });
        }
        assert_vertex_exists(self, vertex)?;
        Ok(self
            .entries
            .iter()
            .filter(|entry| entry.source == *vertex)
            .map(|entry| &entry.edge)
            .collect())
    }
}

impl<V, E, F> MutableGraph<V, E> for SimpleGraph<V, E, F>
where
    V: Eq + Hash + Clone + fmt::Debug,
    E: Eq + Hash + Clone + fmt::Debug,
    F: EdgeFactory<V, E>,
{
    fn add_vertex(&mut self, vertex: V) -> bool {
        if self.vertex_set.contains(&vertex) {
            return false;
        }
        trace!("add vertex {vertex:?}");
        self.vertex_set.insert(vertex.clone());
        self.vertices.push(vertex);
        true
    }

    fn add_edge(&mut self, source: &V, target: &V) -> GraphResult<Option<E>> {
        assert_vertex_exists(self, source)?;
        assert_vertex_exists(self, target)?;
        if source == target {
            return Err(GraphError::SelfLoop(format!("{source:?}")));
        }
        if self.contains_edge_between(source, target) {
            // Simple-graph policy: refuse the parallel edge, factory unused.
            return Ok(None);
        }

        let edge = self.factory.create_edge(source, target);
        trace!("add edge {edge:?}: {source:?} -> {target:?}");
        self.edge_set.insert(edge.clone());
        self.entries.push(EdgeEntry {
            edge: edge.clone(),
            source: source.clone(),
            target: target.clone(),
            weight: DEFAULT_EDGE_WEIGHT,
        });
        Ok(Some(edge))
    }

    fn add_edge_with(&mut self, source: &V, target: &V, edge: E) -> GraphResult<bool> {
        assert_vertex_exists(self, source)?;
        assert_vertex_exists(self, target)?;
        if source == target {
            return Err(GraphError::SelfLoop(format!("{source:?}")));
        }
        if self.edge_set.contains(&edge) || self.contains_edge_between(source, target) {
            return Ok(false);
        }

        trace!("add edge {edge:?}: {source:?} -> {target:?}");
        self.edge_set.insert(edge.clone());
        self.entries.push(EdgeEntry {
            edge,
            source: source.clone(),
            target: target.clone(),
            weight: DEFAULT_EDGE_WEIGHT,
        });
        Ok(true)
    }

    fn remove_vertex(&mut self, vertex: &V) -> bool {
        if !self.vertex_set.contains(vertex) {
            return false;
        }
        trace!("remove vertex {vertex:?} and touching edges");

        // Cascade: drop every edge touching the vertex in the same step.
        let mut removed = Vec::new();
        self.entries.retain(|entry| {
            if entry.source == *vertex || entry.target == *vertex {
                removed.push(entry.edge.clone());
                false
            } else {
                true
            }
        });
        for edge in &removed {
            self.edge_set.remove(edge);
        }

        self.vertex_set.remove(vertex);
        self.vertices.retain(|v| v != vertex);
        true
    }

    fn remove_edge(&mut self, edge: &E) -> bool {
        let Some(position) = self.entries.iter().position(|entry| entry.edge == *edge) else {
            return false;
        };
        trace!("remove edge {edge:?}");
        self.entries.remove(position);
        self.edge_set.remove(edge);
        true
    }

    fn remove_edge_between(&mut self, source: &V, target: &V) -> Option<E> {
        let position = self
            .entries
            .iter()
            .position(|entry| self.connects(entry, source, target))?;
        let entry = self.entries.remove(position);
        self.edge_set.remove(&entry.edge);
        trace!("remove edge {:?}: {source:?} -> {target:?}", entry.edge);
        Some(entry.edge)
    }

    fn set_edge_weight(&mut self, edge: &E, weight: f64) -> GraphResult<()> {
        if !self.weighting.is_weighted() {
            return Err(GraphError::CapabilityMismatch {
                operation: "set_edge_weight",
                required: "weighted",
            });
        }
        let entry = self
            .entry_mut(edge)
            .ok_or_else(|| GraphError::unknown_edge(edge))?;
        entry.weight = weight;
        Ok(())
    }
}

impl<V, E, F> fmt::Display for SimpleGraph<V, E, F>
where
    V: Eq + Hash + Clone + fmt::Debug + fmt::Display,
    E: Eq + Hash + Clone + fmt::Debug + EdgeLabel,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_graph(self))
    }
}

impl<V, E, F> PartialEq for SimpleGraph<V, E, F>
where
    V: Eq + Hash + Clone + fmt::Debug,
    E: Eq + Hash + Clone + fmt::Debug,
{
    fn eq(&self, other: &Self) -> bool {
        structural_eq(self, other)
    }
}
