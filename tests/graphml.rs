//! GraphML export tests: document structure, providers, failure modes.

use std::collections::BTreeMap;
use std::io::{Read, Write};

use pretty_assertions::assert_eq;

use graphkit::{
    DefaultEdge, EmptyAttributeProvider, FnAttributeProvider, FnIdProvider, GraphDelegator,
    GraphMlExporter, IdProvider, MutableGraph, SequentialIdProvider, SimpleGraph,
};

fn v(name: &str) -> String {
    name.to_string()
}

/// Capture exporter debug lines under RUST_LOG; safe to call repeatedly.
fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Undirected graph with vertices v1..v3 and edges (v1,v2), (v3,v1).
fn triangle_path() -> SimpleGraph<String> {
    init_logging();
    let mut graph: SimpleGraph<String> = SimpleGraph::undirected();
    graph.add_vertex(v("v1"));
    graph.add_vertex(v("v2"));
    graph.add_edge(&v("v1"), &v("v2")).unwrap();
    graph.add_vertex(v("v3"));
    graph.add_edge(&v("v3"), &v("v1")).unwrap();
    graph
}

fn export_default_to_string(graph: &SimpleGraph<String>) -> String {
    let mut out = Vec::new();
    GraphMlExporter::new()
        .export_default(&mut out, graph)
        .unwrap();
    String::from_utf8(out).unwrap()
}

const PROLOG: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8"?>"#,
    r#"<graphml xmlns="http://graphml.graphdrawing.org/xmlns""#,
    r#" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance""#,
    r#" xsi:schemaLocation="http://graphml.graphdrawing.org/xmlns"#,
    r#" http://graphml.graphdrawing.org/xmlns/1.0/graphml.xsd">"#,
);

// ==================== Document Structure ====================

#[test]
fn test_undirected_default_export() {
    let expected = format!(
        concat!(
            "{}",
            r#"<graph edgedefault="undirected">"#,
            r#"<node id="1"/>"#,
            r#"<node id="2"/>"#,
            r#"<node id="3"/>"#,
            r#"<edge id="1" source="1" target="2"/>"#,
            r#"<edge id="2" source="3" target="1"/>"#,
            "</graph></graphml>",
        ),
        PROLOG
    );
    assert_eq!(export_default_to_string(&triangle_path()), expected);
}

#[test]
fn test_directed_edgedefault() {
    let mut graph: SimpleGraph<String> = SimpleGraph::directed();
    graph.add_vertex(v("a"));
    graph.add_vertex(v("b"));
    graph.add_edge(&v("a"), &v("b")).unwrap();
    let document = export_default_to_string(&graph);
    assert!(document.contains(r#"<graph edgedefault="directed">"#));
    assert!(document.contains(r#"<edge id="1" source="1" target="2"/>"#));
}

#[test]
fn test_empty_graph_export() {
    let graph: SimpleGraph<String> = SimpleGraph::undirected();
    let expected = format!(
        "{}{}",
        PROLOG,
        r#"<graph edgedefault="undirected"></graph></graphml>"#
    );
    assert_eq!(export_default_to_string(&graph), expected);
}

#[test]
fn test_export_through_delegator() {
    // The exporter reads through the Graph contract, so a view exports the
    // same document as its backing graph.
    let graph = triangle_path();
    let delegator = GraphDelegator::new(graph.clone());
    let mut out = Vec::new();
    GraphMlExporter::new()
        .export_default(&mut out, &delegator)
        .unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        export_default_to_string(&graph)
    );
}

// ==================== Attributes ====================

fn vertex_attrs() -> FnAttributeProvider<impl Fn(&String) -> BTreeMap<String, String>> {
    FnAttributeProvider(|vertex: &String| {
        let mut attrs = BTreeMap::new();
        if vertex == "v1" {
            attrs.insert("key-1".to_string(), format!("{vertex}-val-1"));
        }
        attrs.insert("key-2".to_string(), format!("{vertex}-val-2"));
        attrs
    })
}

#[test]
fn test_vertex_attributes_and_key_declarations() {
    let graph = triangle_path();
    let mut out = Vec::new();
    let mut vertex_ids = SequentialIdProvider::<String>::new();
    let mut edge_ids = SequentialIdProvider::<DefaultEdge>::new();
    GraphMlExporter::new()
        .export(
            &mut out,
            &graph,
            &mut vertex_ids,
            &vertex_attrs(),
            &mut edge_ids,
            &EmptyAttributeProvider,
        )
        .unwrap();

    let expected = format!(
        concat!(
            "{}",
            r#"<key id="key-1" for="node" attr.name="key-1" attr.type="string"/>"#,
            r#"<key id="key-2" for="node" attr.name="key-2" attr.type="string"/>"#,
            r#"<graph edgedefault="undirected">"#,
            r#"<node id="1">"#,
            r#"<data key="key-1">v1-val-1</data>"#,
            r#"<data key="key-2">v1-val-2</data>"#,
            "</node>",
            r#"<node id="2"><data key="key-2">v2-val-2</data></node>"#,
            r#"<node id="3"><data key="key-2">v3-val-2</data></node>"#,
            r#"<edge id="1" source="1" target="2"/>"#,
            r#"<edge id="2" source="3" target="1"/>"#,
            "</graph></graphml>",
        ),
        PROLOG
    );
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[test]
fn test_edge_attributes_declared_for_edge_domain() {
    let graph = triangle_path();
    let mut out = Vec::new();
    let mut vertex_ids = SequentialIdProvider::<String>::new();
    let mut edge_ids = SequentialIdProvider::<DefaultEdge>::new();
    let edge_attrs = FnAttributeProvider(|_edge: &DefaultEdge| {
        let mut attrs = BTreeMap::new();
        attrs.insert("relation".to_string(), "linked".to_string());
        attrs
    });
    GraphMlExporter::new()
        .export(
            &mut out,
            &graph,
            &mut vertex_ids,
            &EmptyAttributeProvider,
            &mut edge_ids,
            &edge_attrs,
        )
        .unwrap();

    let document = String::from_utf8(out).unwrap();
    assert!(document
        .contains(r#"<key id="relation" for="edge" attr.name="relation" attr.type="string"/>"#));
    assert!(document
        .contains(r#"<edge id="1" source="1" target="2"><data key="relation">linked</data></edge>"#));
}

#[test]
fn test_attribute_values_are_escaped() {
    let mut graph: SimpleGraph<String> = SimpleGraph::undirected();
    graph.add_vertex(v("a"));
    let attrs = FnAttributeProvider(|_vertex: &String| {
        let mut map = BTreeMap::new();
        map.insert("label".to_string(), "a<b&c".to_string());
        map
    });
    let mut out = Vec::new();
    let mut vertex_ids = SequentialIdProvider::<String>::new();
    let mut edge_ids = SequentialIdProvider::<DefaultEdge>::new();
    GraphMlExporter::new()
        .export(
            &mut out,
            &graph,
            &mut vertex_ids,
            &attrs,
            &mut edge_ids,
            &EmptyAttributeProvider,
        )
        .unwrap();
    let document = String::from_utf8(out).unwrap();
    assert!(document.contains(r#"<data key="label">a&lt;b&amp;c</data>"#));
}

// ==================== Providers ====================

#[test]
fn test_sequential_provider_memoizes() {
    let mut provider = SequentialIdProvider::<String>::new();
    assert_eq!(provider.id_of(&v("x")), "1");
    assert_eq!(provider.id_of(&v("y")), "2");
    // Stable for repeated queries.
    assert_eq!(provider.id_of(&v("x")), "1");
    assert_eq!(provider.id_of(&v("y")), "2");
    // Never reuses an ID for a distinct component.
    assert_eq!(provider.id_of(&v("z")), "3");
}

#[test]
fn test_custom_id_provider() {
    let graph = triangle_path();
    let mut out = Vec::new();
    let mut vertex_ids = FnIdProvider(|vertex: &String| format!("n-{vertex}"));
    let mut edge_ids = SequentialIdProvider::<DefaultEdge>::new();
    GraphMlExporter::new()
        .export(
            &mut out,
            &graph,
            &mut vertex_ids,
            &EmptyAttributeProvider,
            &mut edge_ids,
            &EmptyAttributeProvider,
        )
        .unwrap();
    let document = String::from_utf8(out).unwrap();
    assert!(document.contains(r#"<node id="n-v1"/>"#));
    assert!(document.contains(r#"<edge id="1" source="n-v1" target="n-v2"/>"#));
}

#[test]
fn test_duplicate_ids_are_not_validated() {
    // A misbehaving provider yields a syntactically valid document; the
    // pipeline does not guard against semantic breakage.
    let graph = triangle_path();
    let mut out = Vec::new();
    let mut vertex_ids = FnIdProvider(|_vertex: &String| "x".to_string());
    let mut edge_ids = SequentialIdProvider::<DefaultEdge>::new();
    GraphMlExporter::new()
        .export(
            &mut out,
            &graph,
            &mut vertex_ids,
            &EmptyAttributeProvider,
            &mut edge_ids,
            &EmptyAttributeProvider,
        )
        .unwrap();
    let document = String::from_utf8(out).unwrap();
    assert_eq!(document.matches(r#"<node id="x"/>"#).count(), 3);
}

#[test]
fn test_exporter_reusable_with_fresh_providers() {
    let graph = triangle_path();
    let exporter = GraphMlExporter::new();
    let mut first = Vec::new();
    let mut second = Vec::new();
    exporter.export_default(&mut first, &graph).unwrap();
    exporter.export_default(&mut second, &graph).unwrap();
    assert_eq!(first, second);
}

// ==================== Sinks and Failure Modes ====================

#[test]
fn test_export_to_file_sink() {
    let graph = triangle_path();
    let file = tempfile::NamedTempFile::new().unwrap();
    {
        let mut writer = std::io::BufWriter::new(file.reopen().unwrap());
        GraphMlExporter::new()
            .export_default(&mut writer, &graph)
            .unwrap();
    }
    let mut contents = String::new();
    file.reopen()
        .unwrap()
        .read_to_string(&mut contents)
        .unwrap();
    assert_eq!(contents, export_default_to_string(&graph));
}

/// Sink that fails after a fixed number of writes.
struct FailingSink {
    remaining: usize,
}

impl Write for FailingSink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if self.remaining == 0 {
            return Err(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "sink closed",
            ));
        }
        self.remaining -= 1;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_write_error_propagates_immediately() {
    let graph = triangle_path();
    let mut sink = FailingSink { remaining: 2 };
    let result = GraphMlExporter::new().export_default(&mut sink, &graph);
    assert!(matches!(result, Err(graphkit::GraphError::Io(_))));
}
