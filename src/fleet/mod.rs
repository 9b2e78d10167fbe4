//! Application records: vehicles moving over the road network
//!
//! Vehicles are indexed by id in a [`ProbingTable`](crate::index::ProbingTable)
//! and refer to graph vertices by label only.

mod roster;
mod vehicle;

use crate::graph::GraphError;
use crate::heap::HeapError;
use crate::index::TableError;
use thiserror::Error;

pub use roster::{Fleet, DEFAULT_ROSTER_CAPACITY};
pub use vehicle::{Vehicle, MAX_BATTERY_LEVEL};

/// Errors that can occur in fleet operations
#[derive(Debug, Error)]
pub enum FleetError {
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Roster error: {0}")]
    Table(#[from] TableError),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Priority queue error: {0}")]
    Heap(#[from] HeapError),
}

/// Result type for fleet operations
pub type FleetResult<T> = Result<T, FleetError>;
