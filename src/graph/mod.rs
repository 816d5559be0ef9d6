//! In-memory graph structures: contracts, shared behavior, store, views.

pub mod behavior;
pub mod contract;
pub mod delegator;
pub mod simple;

pub use behavior::{assert_vertex_exists, format_graph, structural_eq, structural_hash};
pub use contract::{EdgeFactory, Graph, MutableGraph};
pub use delegator::GraphDelegator;
pub use simple::SimpleGraph;
