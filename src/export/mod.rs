//! Export pipeline: identity/attribute providers plus the GraphML writer.

pub mod graphml;
pub mod providers;

pub use graphml::{GraphMlExporter, GRAPHML_NS};
pub use providers::{
    AttributeProvider, EmptyAttributeProvider, FnAttributeProvider, FnIdProvider, IdProvider,
    SequentialIdProvider,
};
