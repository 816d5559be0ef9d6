//! All data types for the graphkit library.

pub mod capability;
pub mod edge;
pub mod error;

pub use capability::{Direction, Weighting, DEFAULT_EDGE_WEIGHT};
pub use edge::{
    DefaultEdge, DefaultEdgeFactory, DefaultWeightedEdge, DefaultWeightedEdgeFactory, EdgeLabel,
};
pub use error::{GraphError, GraphResult};
