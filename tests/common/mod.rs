//! Common test utilities for routing scenarios
//!
//! Builders for synthetic road networks and a brute-force distance oracle
//! to check Dijkstra against.

#![allow(dead_code)]

pub mod network_builder;

pub use network_builder::{all_pairs_distances, grid_network, random_network, RandomNetworkConfig};
