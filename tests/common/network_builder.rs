//! Synthetic network builders

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use routegraph::GraphStore;
use std::collections::HashMap;

/// Configuration for a random network
#[derive(Debug, Clone)]
pub struct RandomNetworkConfig {
    pub vertices: usize,
    /// Probability that any given pair is connected
    pub edge_probability: f64,
    /// Upper bound (exclusive) for road lengths
    pub max_weight: f64,
    pub seed: u64,
}

impl Default for RandomNetworkConfig {
    fn default() -> Self {
        Self {
            vertices: 20,
            edge_probability: 0.15,
            max_weight: 25.0,
            seed: 1,
        }
    }
}

impl RandomNetworkConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_vertices(mut self, vertices: usize) -> Self {
        self.vertices = vertices;
        self
    }

    pub fn with_edge_probability(mut self, probability: f64) -> Self {
        self.edge_probability = probability;
        self
    }
}

/// Label for the i-th synthetic vertex; zero-padded so label order is index order
pub fn label(i: usize) -> String {
    format!("n{:03}", i)
}

/// Random simple graph; vertex payload is the vertex index
pub fn random_network(config: &RandomNetworkConfig) -> GraphStore<usize> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut graph = GraphStore::new();
    for i in 0..config.vertices {
        graph.add_vertex(label(i), i).unwrap();
    }
    for i in 0..config.vertices {
        for j in (i + 1)..config.vertices {
            if rng.gen_bool(config.edge_probability) {
                let weight = rng.gen_range(0.0..config.max_weight);
                graph.add_edge(&label(i), &label(j), weight).unwrap();
            }
        }
    }
    graph
}

/// `rows x cols` grid with unit-length roads; labels are `r{row}c{col}`
pub fn grid_network(rows: usize, cols: usize) -> GraphStore<(usize, usize)> {
    let mut graph = GraphStore::new();
    let name = |r: usize, c: usize| format!("r{}c{}", r, c);
    for r in 0..rows {
        for c in 0..cols {
            graph.add_vertex(name(r, c), (r, c)).unwrap();
        }
    }
    for r in 0..rows {
        for c in 0..cols {
            if r + 1 < rows {
                graph.add_edge(&name(r, c), &name(r + 1, c), 1.0).unwrap();
            }
            if c + 1 < cols {
                graph.add_edge(&name(r, c), &name(r, c + 1), 1.0).unwrap();
            }
        }
    }
    graph
}

/// Floyd-Warshall over the whole graph, keyed by label pair
pub fn all_pairs_distances<V>(graph: &GraphStore<V>) -> HashMap<(String, String), f64> {
    let labels: Vec<String> = graph.vertices().map(|v| v.label().to_string()).collect();
    let n = labels.len();
    let position: HashMap<&str, usize> = labels
        .iter()
        .enumerate()
        .map(|(i, l)| (l.as_str(), i))
        .collect();

    let mut dist = vec![vec![f64::INFINITY; n]; n];
    for (i, vertex) in graph.vertices().enumerate() {
        dist[i][i] = 0.0;
        for (neighbor, weight) in graph.get_adjacent(vertex.label()).unwrap() {
            let j = position[neighbor.label()];
            dist[i][j] = dist[i][j].min(weight);
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                let through = dist[i][k] + dist[k][j];
                if through < dist[i][j] {
                    dist[i][j] = through;
                }
            }
        }
    }

    let mut out = HashMap::new();
    for i in 0..n {
        for j in 0..n {
            out.insert((labels[i].clone(), labels[j].clone()), dist[i][j]);
        }
    }
    out
}
