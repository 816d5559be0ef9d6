//! Pluggable identity and attribute strategies for export.
//!
//! Providers are small strategy objects injected into the export pipeline;
//! no other component depends on their concrete form. Any memoization state
//! a provider holds belongs to one export pass: hand the exporter a fresh
//! instance per call, or reuse one only when repeating IDs across documents
//! is what you want.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// Maps a component (vertex or edge) to a stable string ID.
///
/// Within one export pass the mapping must be injective, and repeated calls
/// for the same component must return the same ID.
pub trait IdProvider<T> {
    fn id_of(&mut self, component: &T) -> String;
}

/// Sequential integer IDs (`"1"`, `"2"`, ...) in first-encountered order.
///
/// Memoized per instance: querying a component again returns its assigned
/// ID, and no ID is ever reused for a distinct component.
#[derive(Debug, Clone)]
pub struct SequentialIdProvider<T> {
    next: u64,
    assigned: HashMap<T, String>,
}

impl<T> SequentialIdProvider<T> {
    pub fn new() -> Self {
        Self {
            next: 1,
            assigned: HashMap::new(),
        }
    }
}

impl<T> Default for SequentialIdProvider<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash + Clone> IdProvider<T> for SequentialIdProvider<T> {
    fn id_of(&mut self, component: &T) -> String {
        if let Some(id) = self.assigned.get(component) {
            return id.clone();
        }
        let id = self.next.to_string();
        self.next += 1;
        self.assigned.insert(component.clone(), id.clone());
        id
    }
}

/// Adapter turning a closure into an [`IdProvider`].
///
/// The closure carries the injectivity and stability obligations itself.
pub struct FnIdProvider<F>(pub F);

impl<T, F: FnMut(&T) -> String> IdProvider<T> for FnIdProvider<F> {
    fn id_of(&mut self, component: &T) -> String {
        (self.0)(component)
    }
}

/// Maps a component to an ordered string-keyed attribute mapping.
pub trait AttributeProvider<T> {
    fn attributes_of(&self, component: &T) -> BTreeMap<String, String>;
}

/// Returns an empty mapping for every component.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyAttributeProvider;

impl<T> AttributeProvider<T> for EmptyAttributeProvider {
    fn attributes_of(&self, _component: &T) -> BTreeMap<String, String> {
        BTreeMap::new()
    }
}

/// Adapter turning a closure into an [`AttributeProvider`].
pub struct FnAttributeProvider<F>(pub F);

impl<T, F: Fn(&T) -> BTreeMap<String, String>> AttributeProvider<T> for FnAttributeProvider<F> {
    fn attributes_of(&self, component: &T) -> BTreeMap<String, String> {
        (self.0)(component)
    }
}
