//! Core graph data structures

mod display;
mod edge;
mod engine;
mod vertex;


pub use edge::Adjacency;
pub use engine::{GraphError, GraphResult, GraphStore};
pub use vertex::{Vertex, VertexId};
