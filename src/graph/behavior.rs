//! Shared graph behavior: canonical rendering, structural hash and equality.
//!
//! These are free functions over any [`Graph`] so concrete stores and views
//! can reuse them for their `Display`, `PartialEq` and hashing needs without
//! an inheritance hierarchy.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::graph::contract::Graph;
use crate::types::{EdgeLabel, GraphError, GraphResult, DEFAULT_EDGE_WEIGHT};

/// Ensure `vertex` is a member of `graph`.
///
/// Every mutating operation that references an existing vertex calls this
/// before changing any state.
pub fn assert_vertex_exists<V, E, G>(graph: &G, vertex: &V) -> GraphResult<()>
where
    G: Graph<V, E> + ?Sized,
    V: fmt::Debug,
{
    if graph.contains_vertex(vertex) {
        Ok(())
    } else {
        Err(GraphError::unknown_vertex(vertex))
    }
}

/// Canonical `"(V, E)"` rendering of a graph.
///
/// The vertex set renders as `[v1, v2, ...]`. Each edge renders as
/// `(src,tgt)` for directed graphs or `{src,tgt}` for undirected ones,
/// prefixed with `label=` only when the edge value is caller-identifiable
/// (see [`EdgeLabel`]); anonymous default edges render as the bare pair.
pub fn format_graph<V, E, G>(graph: &G) -> String
where
    G: Graph<V, E> + ?Sized,
    V: fmt::Display,
    E: EdgeLabel,
{
    let directed = graph.direction().is_directed();
    let vertices: Vec<String> = graph.vertices().map(|v| v.to_string()).collect();

    let mut rendered = Vec::with_capacity(graph.edge_count());
    for edge in graph.edges() {
        // Endpoints come from the graph's own edge set, so the lookups hold.
        let (source, target) = match (graph.edge_source(edge), graph.edge_target(edge)) {
            (Ok(s), Ok(t)) => (s, t),
            _ => continue,
        };
        let mut text = String::new();
        if let Some(label) = edge.label() {
            text.push_str(&label);
            text.push('=');
        }
        let (open, close) = if directed { ("(", ")") } else { ("{", "}") };
        text.push_str(open);
        text.push_str(&source.to_string());
        text.push(',');
        text.push_str(&target.to_string());
        text.push_str(close);
        rendered.push(text);
    }

    format!("([{}], [{}])", vertices.join(", "), rendered.join(", "))
}

/// Stable 32-bit element hash: fixed-state hasher, truncated.
///
/// Stable within one process run, which is the scope the structural hash
/// contract requires.
fn element_hash<T: Hash + ?Sized>(value: &T) -> i32 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish() as i32
}

/// Structural hash of a graph over vertex/edge content and weights.
///
/// The combination formula is fixed and must stay bit-for-bit stable for
/// consumers relying on it: the vertex set contributes the wrapping sum of
/// element hashes, and each edge contributes
///
/// ```text
/// part = 27 * hash(e) + cantor(hash(source), hash(target))
/// part = 27 * part + low32(w ^ (w >>> 32))      w = weight truncated to i64
/// ```
///
/// with `cantor(s, t) = (s + t)(s + t + 1)/2 + t`, all in wrapping 32-bit
/// signed arithmetic. Equal graphs (by [`structural_eq`]) hash equal.
pub fn structural_hash<V, E, G>(graph: &G) -> i32
where
    G: Graph<V, E> + ?Sized,
    V: Hash,
    E: Hash,
{
    let mut hash: i32 = 0;
    for vertex in graph.vertices() {
        hash = hash.wrapping_add(element_hash(vertex));
    }

    for edge in graph.edges() {
        let (source, target) = match (graph.edge_source(edge), graph.edge_target(edge)) {
            (Ok(s), Ok(t)) => (s, t),
            _ => continue,
        };

        let mut part = element_hash(edge);

        let s = element_hash(source);
        let t = element_hash(target);
        let sum = s.wrapping_add(t);
        let pairing = (sum.wrapping_mul(sum.wrapping_add(1)) / 2).wrapping_add(t);
        part = part.wrapping_mul(27).wrapping_add(pairing);

        let weight = graph.edge_weight(edge).unwrap_or(DEFAULT_EDGE_WEIGHT) as i64;
        let folded = (weight ^ ((weight as u64) >> 32) as i64) as i32;
        part = part.wrapping_mul(27).wrapping_add(folded);

        hash = hash.wrapping_add(part);
    }

    hash
}

/// Structural equality over graph content.
///
/// True iff both graphs carry identical direction and weight capability
/// tags, identical vertex sets, edge sets of equal size, and every edge of
/// `a` is tracked by `b` (by the edge's own value equality) with matching
/// endpoints and weight within `1e-6`.
///
/// This is value equality of edges plus connectivity agreement, not
/// topological isomorphism: two graphs connecting identical vertex pairs
/// through different edge objects are unequal.
pub fn structural_eq<V, E, A, B>(a: &A, b: &B) -> bool
where
    A: Graph<V, E> + ?Sized,
    B: Graph<V, E> + ?Sized,
    V: Eq + Hash,
    E: Eq,
{
    if a.direction() != b.direction() || a.weighting() != b.weighting() {
        return false;
    }
    if a.vertex_count() != b.vertex_count() || a.edge_count() != b.edge_count() {
        return false;
    }

    let b_vertices: HashSet<&V> = b.vertices().collect();
    if !a.vertices().all(|v| b_vertices.contains(v)) {
        return false;
    }

    for edge in a.edges() {
        if !b.contains_edge(edge) {
            return false;
        }
        let ((Ok(sa), Ok(ta)), (Ok(sb), Ok(tb))) = (
            (a.edge_source(edge), a.edge_target(edge)),
            (b.edge_source(edge), b.edge_target(edge)),
        ) else {
            return false;
        };
        if sa != sb || ta != tb {
            return false;
        }
        let (Ok(wa), Ok(wb)) = (a.edge_weight(edge), b.edge_weight(edge)) else {
            return false;
        };
        if (wa - wb).abs() > 1e-6 {
            return false;
        }
    }

    true
}
