//! Graph traversal operations

use super::types::{Strategy, TraversalResult, Visit};
use crate::graph::{GraphError, GraphResult, GraphStore, VertexId};
use std::collections::{HashSet, VecDeque};

/// Query for walking the graph from a starting vertex
#[derive(Debug, Clone)]
pub struct TraverseQuery {
    /// Starting vertex label
    pub origin: String,
    /// Maximum depth to traverse (`None` = unbounded)
    pub max_depth: Option<usize>,
    pub strategy: Strategy,
}

impl TraverseQuery {
    /// Create a new breadth-first traversal from a starting vertex
    pub fn from(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            max_depth: None,
            strategy: Strategy::BreadthFirst,
        }
    }

    /// Set the maximum traversal depth
    pub fn depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Set the visit order
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Execute the traversal against a graph
    pub fn execute<V>(&self, graph: &GraphStore<V>) -> GraphResult<TraversalResult> {
        if graph.is_empty() {
            return Err(GraphError::GraphEmpty);
        }
        let origin = graph.require(&self.origin)?;
        let mut result = TraversalResult::new(origin, self.strategy);

        match self.strategy {
            Strategy::BreadthFirst => self.breadth_first(graph, origin, &mut result),
            Strategy::DepthFirst => self.depth_first(graph, origin, &mut result),
        }
        Ok(result)
    }

    fn within_depth(&self, depth: usize) -> bool {
        self.max_depth.map_or(true, |max| depth < max)
    }

    fn visit<V>(graph: &GraphStore<V>, id: VertexId, depth: usize, result: &mut TraversalResult) {
        if let Some(vertex) = graph.vertex_by_id(id) {
            result.visits.push(Visit {
                id,
                label: vertex.label().to_string(),
                depth,
            });
        }
    }

    fn breadth_first<V>(&self, graph: &GraphStore<V>, origin: VertexId, result: &mut TraversalResult) {
        let mut visited: HashSet<VertexId> = HashSet::new();
        let mut queue: VecDeque<(VertexId, usize)> = VecDeque::new();

        visited.insert(origin);
        queue.push_back((origin, 0));
        Self::visit(graph, origin, 0, result);

        while let Some((current, depth)) = queue.pop_front() {
            if !self.within_depth(depth) {
                continue;
            }
            let Some(vertex) = graph.vertex_by_id(current) else {
                continue;
            };
            for entry in vertex.adjacency() {
                if visited.insert(entry.neighbor) {
                    Self::visit(graph, entry.neighbor, depth + 1, result);
                    queue.push_back((entry.neighbor, depth + 1));
                }
            }
        }
    }

    fn depth_first<V>(&self, graph: &GraphStore<V>, origin: VertexId, result: &mut TraversalResult) {
        let mut visited: HashSet<VertexId> = HashSet::new();
        // (vertex, next adjacency position to try)
        let mut stack: Vec<(VertexId, usize)> = Vec::new();

        visited.insert(origin);
        stack.push((origin, 0));
        Self::visit(graph, origin, 0, result);

        while let Some(&(current, mut cursor)) = stack.last() {
            let depth = stack.len() - 1;
            let adjacency = graph
                .vertex_by_id(current)
                .map(|v| v.adjacency())
                .unwrap_or(&[]);

            let mut next = None;
            if self.within_depth(depth) {
                while cursor < adjacency.len() {
                    let neighbor = adjacency[cursor].neighbor;
                    cursor += 1;
                    if visited.insert(neighbor) {
                        next = Some(neighbor);
                        break;
                    }
                }
            }
            if let Some(top) = stack.last_mut() {
                top.1 = cursor;
            }

            match next {
                Some(neighbor) => {
                    Self::visit(graph, neighbor, depth + 1, result);
                    stack.push((neighbor, 0));
                }
                None => {
                    stack.pop();
                }
            }
        }
    }
}

impl<V> GraphStore<V> {
    /// Breadth-first visit order from the first vertex in store order
    pub fn breadth_first(&self) -> GraphResult<TraversalResult> {
        self.traverse_from_first(Strategy::BreadthFirst)
    }

    /// Depth-first visit order from the first vertex in store order
    pub fn depth_first(&self) -> GraphResult<TraversalResult> {
        self.traverse_from_first(Strategy::DepthFirst)
    }

    fn traverse_from_first(&self, strategy: Strategy) -> GraphResult<TraversalResult> {
        let first = self.vertices().next().ok_or(GraphError::GraphEmpty)?;
        TraverseQuery::from(first.label()).strategy(strategy).execute(self)
    }
}
