//! Adjacency entries

use super::vertex::VertexId;

/// One side of an undirected edge: a non-owning link to a neighbour.
///
/// Every entry has a mirror entry on the neighbour with the same weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjacency {
    pub neighbor: VertexId,
    /// Road length; finite and non-negative
    pub weight: f64,
}

impl Adjacency {
    pub fn new(neighbor: VertexId, weight: f64) -> Self {
        Self { neighbor, weight }
    }
}

/// Weights must be finite and non-negative for Dijkstra to be sound
pub fn is_valid_weight(weight: f64) -> bool {
    weight.is_finite() && weight >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_validation() {
        assert!(is_valid_weight(0.0));
        assert!(is_valid_weight(12.5));
        assert!(!is_valid_weight(-1.0));
        assert!(!is_valid_weight(f64::NAN));
        assert!(!is_valid_weight(f64::INFINITY));
    }
}
