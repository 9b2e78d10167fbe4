//! GraphStore: vertex and edge storage for the road network

use super::edge::{is_valid_weight, Adjacency};
use super::vertex::{fold_label, Vertex, VertexId};
use crate::heap::HeapError;
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur in graph operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("Vertex already exists: {0}")]
    VertexExists(String),

    #[error("Vertex not found: {0}")]
    VertexNotFound(String),

    #[error("Edge already exists: {0} - {1}")]
    EdgeExists(String, String),

    #[error("Edge does not exist: {0} - {1}")]
    EdgeNotFound(String, String),

    #[error("Edge from vertex to itself: {0}")]
    EdgeToSameVertex(String),

    #[error("Invalid edge weight: {0}")]
    InvalidWeight(f64),

    #[error("Graph is empty")]
    GraphEmpty,

    #[error("No path from {from} to {to}")]
    PathNotFound { from: String, to: String },

    #[error("Priority queue error: {0}")]
    Heap(#[from] HeapError),
}

/// Result type for graph operations
pub type GraphResult<T> = Result<T, GraphError>;

/// Weighted undirected simple graph.
///
/// Vertices live in an arena and are addressed by [`VertexId`]; adjacency
/// entries hold ids, never references. Labels are unique case-insensitively
/// and every lookup folds case. Vertices iterate in ascending label order.
#[derive(Debug, Clone)]
pub struct GraphStore<V> {
    arena: Vec<Option<Vertex<V>>>,
    /// Live vertex ids sorted by label
    order: Vec<VertexId>,
    /// Folded label -> id
    index: HashMap<String, VertexId>,
}

impl<V> Default for GraphStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> GraphStore<V> {
    /// Create an empty graph
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            order: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Resolve a label to its vertex id
    pub fn resolve(&self, label: &str) -> Option<VertexId> {
        self.index.get(&fold_label(label)).copied()
    }

    pub(crate) fn require(&self, label: &str) -> GraphResult<VertexId> {
        self.resolve(label)
            .ok_or_else(|| GraphError::VertexNotFound(label.to_string()))
    }

    /// Get a vertex by label
    pub fn vertex(&self, label: &str) -> Option<&Vertex<V>> {
        self.resolve(label).and_then(|id| self.vertex_by_id(id))
    }

    /// Get a vertex by id; `None` once the vertex has been deleted
    pub fn vertex_by_id(&self, id: VertexId) -> Option<&Vertex<V>> {
        self.arena.get(id.index()).and_then(Option::as_ref)
    }

    /// Mutable access to a vertex payload
    pub fn value_mut(&mut self, label: &str) -> GraphResult<&mut V> {
        let id = self.require(label)?;
        self.slot_mut(id)
            .map(Vertex::value_mut)
            .ok_or_else(|| GraphError::VertexNotFound(label.to_string()))
    }

    fn slot_mut(&mut self, id: VertexId) -> Option<&mut Vertex<V>> {
        self.arena.get_mut(id.index()).and_then(Option::as_mut)
    }

    fn sort_key(&self, id: VertexId) -> (&str, &str) {
        self.vertex_by_id(id)
            .map(Vertex::sort_key)
            .unwrap_or_default()
    }

    fn label_of(&self, id: VertexId) -> String {
        self.vertex_by_id(id)
            .map(|v| v.label().to_string())
            .unwrap_or_default()
    }

    /// Add a vertex, keeping the store sorted by label.
    ///
    /// Fails with `VertexExists` if the label is taken, ignoring case.
    pub fn add_vertex(&mut self, label: impl Into<String>, value: V) -> GraphResult<VertexId> {
        let label = label.into();
        if self.index.contains_key(&fold_label(&label)) {
            return Err(GraphError::VertexExists(label));
        }

        let id = VertexId::new(self.arena.len());
        let vertex = Vertex::new(id, label, value);
        let position = self
            .order
            .partition_point(|&other| self.sort_key(other) < vertex.sort_key());

        debug!(label = vertex.label(), %id, position, "adding vertex");
        self.index.insert(vertex.lookup_key().to_string(), id);
        self.order.insert(position, id);
        self.arena.push(Some(vertex));
        Ok(id)
    }

    /// Remove a vertex and every edge touching it, returning its payload.
    pub fn delete_vertex(&mut self, label: &str) -> GraphResult<V> {
        let id = self.require(label)?;

        let neighbors: Vec<VertexId> = self
            .vertex_by_id(id)
            .map(|v| v.adjacency().iter().map(|entry| entry.neighbor).collect())
            .unwrap_or_default();
        for neighbor in neighbors {
            if let Some(vertex) = self.slot_mut(neighbor) {
                vertex.remove_adjacent(id);
            }
        }

        let vertex = self
            .arena
            .get_mut(id.index())
            .and_then(Option::take)
            .ok_or_else(|| GraphError::VertexNotFound(label.to_string()))?;
        self.order.retain(|&other| other != id);
        self.index.remove(vertex.lookup_key());

        debug!(label = vertex.label(), %id, "deleted vertex");
        Ok(vertex.into_value())
    }

    /// Connect two vertices with an undirected weighted edge.
    pub fn add_edge(&mut self, label1: &str, label2: &str, weight: f64) -> GraphResult<()> {
        let from = self.require(label1)?;
        let to = self.require(label2)?;
        if from == to {
            return Err(GraphError::EdgeToSameVertex(label1.to_string()));
        }
        if self.ids_adjacent(from, to) {
            return Err(GraphError::EdgeExists(
                label1.to_string(),
                label2.to_string(),
            ));
        }
        if !is_valid_weight(weight) {
            return Err(GraphError::InvalidWeight(weight));
        }

        self.link(from, to, weight);
        self.link(to, from, weight);
        debug!(from = label1, to = label2, weight, "added edge");
        Ok(())
    }

    /// Insert `neighbor` into `at`'s adjacency list at its sorted position
    fn link(&mut self, at: VertexId, neighbor: VertexId, weight: f64) {
        let position = match self.vertex_by_id(at) {
            Some(vertex) => {
                let target = self.sort_key(neighbor);
                vertex
                    .adjacency()
                    .partition_point(|entry| self.sort_key(entry.neighbor) < target)
            }
            None => return,
        };
        if let Some(vertex) = self.slot_mut(at) {
            vertex.insert_adjacent(position, Adjacency::new(neighbor, weight));
        }
    }

    /// Remove the edge between two vertices, returning its weight.
    pub fn delete_edge(&mut self, label1: &str, label2: &str) -> GraphResult<f64> {
        let from = self.require(label1)?;
        let to = self.require(label2)?;
        if from == to {
            return Err(GraphError::EdgeToSameVertex(label1.to_string()));
        }

        let weight = self
            .slot_mut(from)
            .and_then(|vertex| vertex.remove_adjacent(to))
            .ok_or_else(|| GraphError::EdgeNotFound(label1.to_string(), label2.to_string()))?;
        if let Some(vertex) = self.slot_mut(to) {
            vertex.remove_adjacent(from);
        }

        debug!(from = label1, to = label2, "deleted edge");
        Ok(weight)
    }

    pub fn has_vertex(&self, label: &str) -> bool {
        self.resolve(label).is_some()
    }

    /// Number of live vertices
    pub fn get_vertex_count(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.vertices().map(Vertex::degree).sum::<usize>() / 2
    }

    /// Live vertex ids in store order
    pub fn ids(&self) -> &[VertexId] {
        &self.order
    }

    /// Vertices in ascending label order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<V>> {
        self.order.iter().filter_map(|&id| self.vertex_by_id(id))
    }

    /// Neighbours of a vertex with edge weights, in ascending label order
    pub fn get_adjacent(&self, label: &str) -> GraphResult<Vec<(&Vertex<V>, f64)>> {
        let vertex = self
            .vertex(label)
            .ok_or_else(|| GraphError::VertexNotFound(label.to_string()))?;
        Ok(vertex
            .adjacency()
            .iter()
            .filter_map(|entry| self.vertex_by_id(entry.neighbor).map(|n| (n, entry.weight)))
            .collect())
    }

    /// Whether `label2` appears in `label1`'s adjacency list
    pub fn is_adjacent(&self, label1: &str, label2: &str) -> GraphResult<bool> {
        let from = self.require(label1)?;
        let to = self.require(label2)?;
        Ok(self.ids_adjacent(from, to))
    }

    pub(crate) fn ids_adjacent(&self, from: VertexId, to: VertexId) -> bool {
        self.vertex_by_id(from)
            .map(|v| v.weight_to(to).is_some())
            .unwrap_or(false)
    }

    /// Total number of adjacency entries (twice the edge count)
    pub(crate) fn adjacency_entries(&self) -> usize {
        self.vertices().map(Vertex::degree).sum()
    }

    /// Labels for a run of ids, skipping any that are no longer live
    pub(crate) fn labels(&self, ids: &[VertexId]) -> Vec<String> {
        ids.iter()
            .filter(|&&id| self.vertex_by_id(id).is_some())
            .map(|&id| self.label_of(id))
            .collect()
    }
}
