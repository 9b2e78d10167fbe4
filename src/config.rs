//! Declarative network files
//!
//! A network file lists locations, the roads between them, and the vehicles
//! on them. YAML and JSON are accepted, chosen by file extension:
//!
//! ```yaml
//! table_capacity: 50
//! locations:
//!   - label: Depot
//!     name: Central depot
//!   - label: Mall
//! roads:
//!   - { from: Depot, to: Mall, length: 4.5 }
//! vehicles:
//!   - { id: V1, battery: 80, location: Depot, destination: Mall }
//! ```

use crate::fleet::{Fleet, FleetError, Vehicle, DEFAULT_ROSTER_CAPACITY, MAX_BATTERY_LEVEL};
use crate::graph::{GraphError, GraphStore};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors that can occur while loading a network file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported network file format: {0}")]
    UnsupportedFormat(String),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Fleet error: {0}")]
    Fleet(#[from] FleetError),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

fn default_table_capacity() -> usize {
    DEFAULT_ROSTER_CAPACITY
}

fn default_battery() -> u8 {
    MAX_BATTERY_LEVEL
}

/// A location (vertex)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationSpec {
    pub label: String,
    /// Display name; defaults to the label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A road (undirected edge)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadSpec {
    pub from: String,
    pub to: String,
    pub length: f64,
}

/// A vehicle record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleSpec {
    pub id: String,
    #[serde(default = "default_battery")]
    pub battery: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
}

/// Full description of a road network and its fleet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Initial capacity of the vehicle roster
    #[serde(default = "default_table_capacity")]
    pub table_capacity: usize,
    #[serde(default)]
    pub locations: Vec<LocationSpec>,
    #[serde(default)]
    pub roads: Vec<RoadSpec>,
    #[serde(default)]
    pub vehicles: Vec<VehicleSpec>,
}

impl Default for NetworkSpec {
    fn default() -> Self {
        Self {
            table_capacity: default_table_capacity(),
            locations: Vec::new(),
            roads: Vec::new(),
            vehicles: Vec::new(),
        }
    }
}

/// A built network: the graph plus the vehicles on it
#[derive(Debug, Clone)]
pub struct Network {
    /// Vertex payloads are location display names
    pub graph: GraphStore<String>,
    pub fleet: Fleet,
}

/// Default network file (`<config dir>/routegraph/network.yaml`)
pub fn default_network_path() -> PathBuf {
    let config_dir = dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_default().join(".config"));
    config_dir.join("routegraph").join("network.yaml")
}

impl NetworkSpec {
    /// Load a network file, picking the parser from the extension
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let contents = std::fs::read_to_string(path)?;
        match extension.as_str() {
            "yaml" | "yml" => Self::from_yaml_str(&contents),
            "json" => Self::from_json_str(&contents),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    pub fn from_yaml_str(contents: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(contents)?)
    }

    pub fn from_json_str(contents: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Build the graph and fleet.
    ///
    /// Vehicles with both a location and a destination are dispatched, so an
    /// unreachable destination fails the whole build.
    pub fn build(&self) -> ConfigResult<Network> {
        let mut graph = GraphStore::new();
        for location in &self.locations {
            let name = location
                .name
                .clone()
                .unwrap_or_else(|| location.label.clone());
            graph.add_vertex(location.label.clone(), name)?;
        }
        for road in &self.roads {
            graph.add_edge(&road.from, &road.to, road.length)?;
        }

        let mut fleet = Fleet::with_capacity(self.table_capacity);
        for spec in &self.vehicles {
            fleet.register(Vehicle::new(spec.id.clone(), spec.battery)?)?;
            match (&spec.location, &spec.destination) {
                (Some(location), Some(destination)) => {
                    fleet.dispatch(&graph, &spec.id, location, destination)?;
                }
                (Some(location), None) => {
                    let label = graph
                        .vertex(location)
                        .ok_or_else(|| GraphError::VertexNotFound(location.clone()))?
                        .label()
                        .to_string();
                    fleet.get_mut(&spec.id)?.set_location(label);
                }
                (None, Some(_)) => {
                    return Err(FleetError::InvalidValue(format!(
                        "vehicle {} has a destination but no location",
                        spec.id
                    ))
                    .into());
                }
                (None, None) => {}
            }
        }

        info!(
            locations = graph.get_vertex_count(),
            roads = graph.edge_count(),
            vehicles = fleet.len(),
            "built network"
        );
        Ok(Network { graph, fleet })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
locations:
  - label: A
    name: Airport
  - label: B
  - label: C
roads:
  - { from: A, to: B, length: 1.0 }
  - { from: B, to: C, length: 2.0 }
vehicles:
  - { id: V1, battery: 80, location: A, destination: C }
  - { id: V2, location: b }
  - { id: V3 }
"#;

    #[test]
    fn test_parse_yaml_defaults() {
        let spec = NetworkSpec::from_yaml_str(SAMPLE).unwrap();
        assert_eq!(spec.table_capacity, DEFAULT_ROSTER_CAPACITY);
        assert_eq!(spec.locations.len(), 3);
        assert_eq!(spec.locations[1].name, None);
        assert_eq!(spec.vehicles[1].battery, MAX_BATTERY_LEVEL);
    }

    #[test]
    fn test_build_network() {
        let network = NetworkSpec::from_yaml_str(SAMPLE).unwrap().build().unwrap();
        assert_eq!(network.graph.get_vertex_count(), 3);
        assert_eq!(network.graph.edge_count(), 2);
        assert_eq!(
            network.graph.vertex("A").map(|v| v.value().as_str()),
            Some("Airport")
        );
        assert_eq!(network.graph.vertex("B").map(|v| v.value().as_str()), Some("B"));

        let v1 = network.fleet.get("V1").unwrap();
        assert_eq!(v1.distance_to_destination(), 3.0);
        assert_eq!(v1.battery_level(), 80);
        assert_eq!(network.fleet.get("V2").unwrap().location(), Some("B"));
        assert_eq!(network.fleet.get("V3").unwrap().location(), None);
    }

    #[test]
    fn test_json_matches_yaml() {
        let yaml = NetworkSpec::from_yaml_str(SAMPLE).unwrap();
        let json = serde_json::to_string(&yaml).unwrap();
        assert_eq!(NetworkSpec::from_json_str(&json).unwrap(), yaml);
    }

    #[test]
    fn test_build_rejects_bad_roads() {
        let spec = NetworkSpec::from_yaml_str(
            "locations: [{label: A}]\nroads: [{from: A, to: Z, length: 1.0}]\n",
        )
        .unwrap();
        assert!(matches!(
            spec.build(),
            Err(ConfigError::Graph(GraphError::VertexNotFound(_)))
        ));
    }

    #[test]
    fn test_build_rejects_destination_without_location() {
        let spec = NetworkSpec::from_yaml_str(
            "locations: [{label: A}]\nvehicles: [{id: V1, destination: A}]\n",
        )
        .unwrap();
        assert!(matches!(
            spec.build(),
            Err(ConfigError::Fleet(FleetError::InvalidValue(_)))
        ));
    }

    #[test]
    fn test_build_rejects_battery_out_of_range() {
        let spec = NetworkSpec::from_yaml_str("vehicles: [{id: V1, battery: 120}]\n").unwrap();
        assert!(matches!(
            spec.build(),
            Err(ConfigError::Fleet(FleetError::InvalidValue(_)))
        ));
    }

    #[test]
    fn test_default_network_path() {
        let path = default_network_path();
        assert!(path.ends_with("routegraph/network.yaml"));
    }
}
