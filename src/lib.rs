//! routegraph: In-Memory Road-Network Graph Engine
//!
//! A weighted undirected graph with sorted adjacency lists, Dijkstra
//! shortest paths, and the two structures that support it: a bounded binary
//! min-heap and a linear-probing hash table used to index vehicle records.
//!
//! # Core Concepts
//!
//! - **Vertices**: labelled locations, unique ignoring case, kept in label order
//! - **Edges**: undirected roads with non-negative lengths
//! - **Fleet**: vehicle records indexed by id, referring to locations by label
//!
//! # Example
//!
//! ```
//! use routegraph::GraphStore;
//!
//! let mut graph = GraphStore::new();
//! graph.add_vertex("A", 1).unwrap();
//! graph.add_vertex("B", 2).unwrap();
//! graph.add_vertex("C", 3).unwrap();
//! graph.add_edge("A", "B", 1.0).unwrap();
//! graph.add_edge("B", "C", 2.0).unwrap();
//!
//! let route = graph.dijkstra("A", "C").unwrap();
//! assert_eq!(route.distance, 3.0);
//! assert_eq!(route.path, vec!["A", "B", "C"]);
//! ```

pub mod config;
pub mod fleet;
mod graph;
pub mod heap;
pub mod index;
pub mod query;

pub use config::{ConfigError, ConfigResult, Network, NetworkSpec};
pub use fleet::{Fleet, FleetError, FleetResult, Vehicle};
pub use graph::{Adjacency, GraphError, GraphResult, GraphStore, Vertex, VertexId};
pub use heap::{HeapEntry, HeapError, HeapResult, PriorityHeap};
pub use index::{ProbingTable, TableError, TableResult};
pub use query::{PathResult, ShortestPathQuery, Strategy, TraversalResult, TraverseQuery};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
