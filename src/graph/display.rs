//! Text renderings of the adjacency structure
//!
//! Both forms walk vertices in store order. They return strings so callers
//! decide where output goes.

use super::engine::GraphStore;
use super::vertex::VertexId;
use std::collections::HashMap;
use std::fmt::{Display, Write};

impl<V: Display> GraphStore<V> {
    /// One line per vertex: `label: value -> neighbour (weight) -> ...`
    pub fn display_as_list(&self) -> String {
        let mut out = String::new();
        for vertex in self.vertices() {
            let _ = write!(out, "{}", vertex);
            for entry in vertex.adjacency() {
                if let Some(neighbor) = self.vertex_by_id(entry.neighbor) {
                    let _ = write!(out, " -> {} ({})", neighbor.label(), entry.weight);
                }
            }
            out.push('\n');
        }
        out
    }
}

impl<V> GraphStore<V> {
    /// N x N 0/1 adjacency indicator in store order
    pub fn adjacency_matrix(&self) -> Vec<Vec<u8>> {
        let positions: HashMap<VertexId, usize> = self
            .ids()
            .iter()
            .enumerate()
            .map(|(row, &id)| (id, row))
            .collect();

        let size = positions.len();
        let mut matrix = vec![vec![0u8; size]; size];
        for (row, vertex) in self.vertices().enumerate() {
            for entry in vertex.adjacency() {
                if let Some(&col) = positions.get(&entry.neighbor) {
                    matrix[row][col] = 1;
                }
            }
        }
        matrix
    }

    /// Tab-separated matrix with a label header row and label column
    pub fn display_as_matrix(&self) -> String {
        let mut out = String::from("\t");
        for vertex in self.vertices() {
            let _ = write!(out, "{}\t", vertex.label());
        }
        out.push('\n');

        for (vertex, row) in self.vertices().zip(self.adjacency_matrix()) {
            let _ = write!(out, "{}\t", vertex.label());
            for cell in row {
                let _ = write!(out, "{}\t", cell);
            }
            out.push('\n');
        }
        out
    }
}
