//! Generic in-memory graphs with deterministic GraphML export.
//!
//! A graph owns a set of vertices and a set of edge values; each edge's
//! endpoints and weight are tracked by the graph itself, so vertex and edge
//! types stay opaque caller-supplied values with their own equality.
//! Vertices and edges iterate in insertion order, which makes rendering and
//! export reproducible.
//!
//! [`SimpleGraph`] is the insertion-ordered backing store (no parallel
//! edges, no self-loops); [`GraphDelegator`] wraps any graph with verbatim
//! forwarding; [`GraphMlExporter`] streams a graph to any
//! [`std::io::Write`] sink with pluggable identity and attribute
//! strategies.

pub mod export;
pub mod graph;
pub mod types;

// Re-export commonly used items at the crate root
pub use export::{
    AttributeProvider, EmptyAttributeProvider, FnAttributeProvider, FnIdProvider, GraphMlExporter,
    IdProvider, SequentialIdProvider, GRAPHML_NS,
};
pub use graph::{
    assert_vertex_exists, format_graph, structural_eq, structural_hash, EdgeFactory, Graph,
    GraphDelegator, MutableGraph, SimpleGraph,
};
pub use types::{
    DefaultEdge, DefaultEdgeFactory, DefaultWeightedEdge, DefaultWeightedEdgeFactory, Direction,
    EdgeLabel, GraphError, GraphResult, Weighting, DEFAULT_EDGE_WEIGHT,
};
