//! Vertex representation in the road network

use super::edge::Adjacency;
use serde::Serialize;

/// Stable handle to a vertex slot in the graph arena.
///
/// Slots are never reused, so a handle to a deleted vertex resolves to
/// nothing instead of to whichever vertex was added next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct VertexId(usize);

impl VertexId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position in the arena
    pub fn index(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Fold a label to the form used for lookup and ordering
pub(crate) fn fold_label(label: &str) -> String {
    label.to_lowercase()
}

/// A labelled vertex carrying an application payload
#[derive(Debug, Clone)]
pub struct Vertex<V> {
    id: VertexId,
    label: String,
    /// Case-folded label
    key: String,
    value: V,
    /// Sorted by neighbour label
    adjacency: Vec<Adjacency>,
}

impl<V> Vertex<V> {
    pub(crate) fn new(id: VertexId, label: String, value: V) -> Self {
        let key = fold_label(&label);
        Self {
            id,
            label,
            key,
            value,
            adjacency: Vec::new(),
        }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Label as it was given on insert
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    pub(crate) fn into_value(self) -> V {
        self.value
    }

    /// Neighbours in ascending label order
    pub fn adjacency(&self) -> &[Adjacency] {
        &self.adjacency
    }

    pub fn degree(&self) -> usize {
        self.adjacency.len()
    }

    /// Weight of the edge to `neighbor`, if any
    pub fn weight_to(&self, neighbor: VertexId) -> Option<f64> {
        self.adjacency
            .iter()
            .find(|entry| entry.neighbor == neighbor)
            .map(|entry| entry.weight)
    }

    /// Ordering key: folded label first, exact label as tie-break
    pub(crate) fn sort_key(&self) -> (&str, &str) {
        (&self.key, &self.label)
    }

    pub(crate) fn lookup_key(&self) -> &str {
        &self.key
    }

    pub(crate) fn insert_adjacent(&mut self, position: usize, entry: Adjacency) {
        self.adjacency.insert(position, entry);
    }

    /// Drop the entry for `neighbor`, returning its weight
    pub(crate) fn remove_adjacent(&mut self, neighbor: VertexId) -> Option<f64> {
        let position = self
            .adjacency
            .iter()
            .position(|entry| entry.neighbor == neighbor)?;
        Some(self.adjacency.remove(position).weight)
    }
}

impl<V: std::fmt::Display> std::fmt::Display for Vertex<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}
