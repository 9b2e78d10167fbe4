//! Query types and result structures

use crate::graph::VertexId;
use serde::Serialize;

/// Visit order for traversals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Level by level from the origin
    #[default]
    BreadthFirst,
    /// Follow the first unvisited neighbour until stuck, then backtrack
    DepthFirst,
}

/// A vertex reached during a traversal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Visit {
    pub id: VertexId,
    pub label: String,
    /// Hops from the origin along the traversal tree
    pub depth: usize,
}

/// Result of a traversal query
#[derive(Debug, Clone, Serialize)]
pub struct TraversalResult {
    /// Starting vertex
    pub origin: VertexId,
    pub strategy: Strategy,
    /// Vertices in the order they were first reached, origin included
    pub visits: Vec<Visit>,
}

impl TraversalResult {
    pub fn new(origin: VertexId, strategy: Strategy) -> Self {
        Self {
            origin,
            strategy,
            visits: Vec::new(),
        }
    }

    /// Labels in visit order
    pub fn labels(&self) -> Vec<&str> {
        self.visits.iter().map(|v| v.label.as_str()).collect()
    }

    /// Number of vertices reached
    pub fn len(&self) -> usize {
        self.visits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    /// Deepest visit
    pub fn max_depth(&self) -> usize {
        self.visits.iter().map(|v| v.depth).max().unwrap_or(0)
    }
}

/// Result of a shortest-path query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    /// Sum of edge weights along the path
    pub distance: f64,
    /// Vertex ids from source to target (inclusive)
    pub vertices: Vec<VertexId>,
    /// Labels from source to target (inclusive)
    pub path: Vec<String>,
}

impl PathResult {
    /// Path length in edges
    pub fn hops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }
}
