//! Query system for road networks
//!
//! Provides shortest paths, reachability, and traversal orders over a
//! [`GraphStore`](crate::graph::GraphStore).

mod path;
mod traverse;
mod types;

pub use path::ShortestPathQuery;
pub use traverse::TraverseQuery;
pub use types::{PathResult, Strategy, TraversalResult, Visit};
