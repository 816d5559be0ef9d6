//! GraphML document writer.

use std::collections::{BTreeMap, BTreeSet};
use std::hash::Hash;
use std::io::Write;

use log::debug;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::export::providers::{
    AttributeProvider, EmptyAttributeProvider, IdProvider, SequentialIdProvider,
};
use crate::graph::contract::Graph;
use crate::types::GraphResult;

/// Namespace of the GraphML document root.
pub const GRAPHML_NS: &str = "http://graphml.graphdrawing.org/xmlns";

const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
const SCHEMA_LOCATION: &str =
    "http://graphml.graphdrawing.org/xmlns http://graphml.graphdrawing.org/xmlns/1.0/graphml.xsd";

/// Streams a graph to a sink as one well-formed GraphML document.
///
/// Element order is fixed and reproducible: key declarations sorted by
/// attribute name, then nodes and edges in the graph's own iteration order.
/// The exporter holds no state between calls and is safely reusable
/// sequentially.
///
/// Provider-issued IDs are written as-is. A provider that issues duplicate
/// IDs produces a syntactically valid but semantically broken document;
/// uniqueness is the provider's contract, not validated here.
#[derive(Debug, Default, Clone, Copy)]
pub struct GraphMlExporter;

impl GraphMlExporter {
    pub fn new() -> Self {
        Self
    }

    /// Export with sequential integer ID providers and no attributes.
    pub fn export_default<W, G, V, E>(&self, sink: &mut W, graph: &G) -> GraphResult<()>
    where
        W: Write,
        G: Graph<V, E> + ?Sized,
        V: Eq + Hash + Clone,
        E: Eq + Hash + Clone,
    {
        let mut vertex_ids = SequentialIdProvider::<V>::new();
        let mut edge_ids = SequentialIdProvider::<E>::new();
        self.export(
            sink,
            graph,
            &mut vertex_ids,
            &EmptyAttributeProvider,
            &mut edge_ids,
            &EmptyAttributeProvider,
        )
    }

    /// Export `graph` to `sink` with the given identity and attribute
    /// strategies.
    ///
    /// Performs three full passes: attribute-key collection, node emission,
    /// edge emission. The sink is flushed on completion but never closed;
    /// its lifetime stays with the caller. A write error propagates
    /// immediately and may leave a truncated partial document in the sink,
    /// which is the caller's to discard.
    pub fn export<W, G, V, E>(
        &self,
        sink: &mut W,
        graph: &G,
        vertex_ids: &mut dyn IdProvider<V>,
        vertex_attrs: &dyn AttributeProvider<V>,
        edge_ids: &mut dyn IdProvider<E>,
        edge_attrs: &dyn AttributeProvider<E>,
    ) -> GraphResult<()>
    where
        W: Write,
        G: Graph<V, E> + ?Sized,
    {
        debug!(
            "exporting graph: {} vertices, {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );

        let mut writer = Writer::new(&mut *sink);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let mut root = BytesStart::new("graphml");
        root.push_attribute(("xmlns", GRAPHML_NS));
        root.push_attribute(("xmlns:xsi", XSI_NS));
        root.push_attribute(("xsi:schemaLocation", SCHEMA_LOCATION));
        writer.write_event(Event::Start(root))?;

        // Pass 1: collect attribute keys, sorted by name for reproducibility.
        let node_keys: BTreeSet<String> = graph
            .vertices()
            .flat_map(|v| vertex_attrs.attributes_of(v).into_keys())
            .collect();
        let edge_keys: BTreeSet<String> = graph
            .edges()
            .flat_map(|e| edge_attrs.attributes_of(e).into_keys())
            .collect();
        for key in &node_keys {
            write_key(&mut writer, key, "node")?;
        }
        for key in &edge_keys {
            write_key(&mut writer, key, "edge")?;
        }

        let mut graph_el = BytesStart::new("graph");
        graph_el.push_attribute(("edgedefault", graph.direction().edgedefault()));
        writer.write_event(Event::Start(graph_el))?;

        // Pass 2: nodes, in the vertex set's iteration order.
        for vertex in graph.vertices() {
            let attributes = vertex_attrs.attributes_of(vertex);
            let mut node = BytesStart::new("node");
            node.push_attribute(("id", vertex_ids.id_of(vertex).as_str()));
            if attributes.is_empty() {
                writer.write_event(Event::Empty(node))?;
            } else {
                writer.write_event(Event::Start(node))?;
                write_data(&mut writer, &attributes)?;
                writer.write_event(Event::End(BytesEnd::new("node")))?;
            }
        }

        // Pass 3: edges, in the edge set's iteration order.
        for edge in graph.edges() {
            let attributes = edge_attrs.attributes_of(edge);
            let mut element = BytesStart::new("edge");
            element.push_attribute(("id", edge_ids.id_of(edge).as_str()));
            element.push_attribute(("source", vertex_ids.id_of(graph.edge_source(edge)?).as_str()));
            element.push_attribute(("target", vertex_ids.id_of(graph.edge_target(edge)?).as_str()));
            if attributes.is_empty() {
                writer.write_event(Event::Empty(element))?;
            } else {
                writer.write_event(Event::Start(element))?;
                write_data(&mut writer, &attributes)?;
                writer.write_event(Event::End(BytesEnd::new("edge")))?;
            }
        }

        writer.write_event(Event::End(BytesEnd::new("graph")))?;
        writer.write_event(Event::End(BytesEnd::new("graphml")))?;
        drop(writer);
        sink.flush()?;
        Ok(())
    }
}

/// `<key id=".." for=".." attr.name=".." attr.type="string"/>`
fn write_key<W: Write>(writer: &mut Writer<W>, key: &str, domain: &str) -> GraphResult<()> {
    let mut element = BytesStart::new("key");
    element.push_attribute(("id", key));
    element.push_attribute(("for", domain));
    element.push_attribute(("attr.name", key));
    element.push_attribute(("attr.type", "string"));
    writer.write_event(Event::Empty(element))?;
    Ok(())
}

/// One `<data key="..">value</data>` child per attribute entry, in the
/// mapping's own order.
fn write_data<W: Write>(
    writer: &mut Writer<W>,
    attributes: &BTreeMap<String, String>,
) -> GraphResult<()> {
    for (key, value) in attributes {
        let mut element = BytesStart::new("data");
        element.push_attribute(("key", key.as_str()));
        writer.write_event(Event::Start(element))?;
        writer.write_event(Event::Text(BytesText::new(value)))?;
        writer.write_event(Event::End(BytesEnd::new("data")))?;
    }
    Ok(())
}
