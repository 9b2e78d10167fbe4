//! Shortest paths (Dijkstra) and reachability

use super::types::PathResult;
use crate::graph::{GraphError, GraphResult, GraphStore, VertexId};
use crate::heap::{HeapEntry, PriorityHeap};
use std::collections::HashMap;
use tracing::debug;

/// Query for the minimum-weight path between two vertices
#[derive(Debug, Clone)]
pub struct ShortestPathQuery {
    /// Source vertex label
    pub source: String,
    /// Target vertex label
    pub target: String,
}

impl ShortestPathQuery {
    /// Create a new path query between two labels
    pub fn between(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Run Dijkstra's algorithm over the graph.
    ///
    /// The priority queue is bounded. Entries are pushed on every successful
    /// relaxation and stale ones are skipped, so each adjacency entry pushes
    /// at most once; the queue is sized to that bound.
    pub fn execute<V>(&self, graph: &GraphStore<V>) -> GraphResult<PathResult> {
        if graph.is_empty() {
            return Err(GraphError::GraphEmpty);
        }
        let start = graph.require(&self.source)?;
        let end = graph.require(&self.target)?;

        let capacity = graph.get_vertex_count().max(1 + graph.adjacency_entries());
        let mut queue = PriorityHeap::new(capacity);
        // absent = infinity
        let mut distances: HashMap<VertexId, f64> = HashMap::new();
        let mut predecessors: HashMap<VertexId, VertexId> = HashMap::new();

        distances.insert(start, 0.0);
        queue.insert(0.0, start)?;

        let mut reached = None;
        while let Ok(HeapEntry {
            priority: distance,
            payload: current,
        }) = queue.extract_min()
        {
            let recorded = distances.get(&current).copied().unwrap_or(f64::INFINITY);
            if distance > recorded {
                continue;
            }
            if current == end {
                reached = Some(distance);
                break;
            }

            let Some(vertex) = graph.vertex_by_id(current) else {
                continue;
            };
            for entry in vertex.adjacency() {
                let candidate = distance + entry.weight;
                let known = distances
                    .get(&entry.neighbor)
                    .copied()
                    .unwrap_or(f64::INFINITY);
                if candidate < known {
                    distances.insert(entry.neighbor, candidate);
                    predecessors.insert(entry.neighbor, current);
                    queue.insert(candidate, entry.neighbor)?;
                }
            }
        }

        let Some(distance) = reached else {
            debug!(from = %self.source, to = %self.target, "no path");
            return Err(GraphError::PathNotFound {
                from: self.source.clone(),
                to: self.target.clone(),
            });
        };

        let mut vertices = vec![end];
        let mut current = end;
        while let Some(&previous) = predecessors.get(&current) {
            vertices.push(previous);
            current = previous;
        }
        vertices.reverse();

        debug!(from = %self.source, to = %self.target, distance, hops = vertices.len() - 1, "path found");
        Ok(PathResult {
            distance,
            path: graph.labels(&vertices),
            vertices,
        })
    }
}

impl<V> GraphStore<V> {
    /// Minimum-weight path between two vertices
    pub fn dijkstra(&self, start_label: &str, end_label: &str) -> GraphResult<PathResult> {
        ShortestPathQuery::between(start_label, end_label).execute(self)
    }

    /// Weighted-distance reachability.
    ///
    /// Returns the shortest distance when a path exists and `None` when the
    /// search exhausts without reaching `end_label`. Missing vertices and an
    /// empty graph are still errors.
    pub fn is_path(&self, start_label: &str, end_label: &str) -> GraphResult<Option<f64>> {
        match self.dijkstra(start_label, end_label) {
            Ok(result) => Ok(Some(result.distance)),
            Err(GraphError::PathNotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
