//! Loading network files from disk

use routegraph::{ConfigError, FleetError, GraphError, NetworkSpec};
use std::fs;
use tempfile::TempDir;

const CITY_YAML: &str = r#"
table_capacity: 7
locations:
  - { label: Depot, name: Central depot }
  - { label: Mall }
  - { label: Park }
  - { label: Harbor }
  - { label: Island }
roads:
  - { from: Depot, to: Mall, length: 4.0 }
  - { from: Mall, to: Park, length: 2.5 }
  - { from: Depot, to: Park, length: 8.0 }
  - { from: park, to: HARBOR, length: 1.0 }
vehicles:
  - { id: V1, battery: 40, location: depot, destination: harbor }
  - { id: V2, battery: 95, location: Mall, destination: Park }
  - { id: V3, battery: 70, location: Island }
"#;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_yaml_network() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "city.yaml", CITY_YAML);

    let spec = NetworkSpec::from_path(&path).unwrap();
    assert_eq!(spec.table_capacity, 7);

    let network = spec.build().unwrap();
    assert_eq!(network.graph.get_vertex_count(), 5);
    assert_eq!(network.graph.edge_count(), 4);
    assert_eq!(network.fleet.len(), 3);

    let v1 = network.fleet.get("V1").unwrap();
    assert_eq!(v1.location(), Some("Depot"));
    assert_eq!(v1.destination(), Some("Harbor"));
    assert_eq!(v1.distance_to_destination(), 7.5);

    let nearest = network.fleet.nearest().unwrap().unwrap();
    assert_eq!(nearest.id(), "V3");
    assert_eq!(network.fleet.highest_battery().unwrap().id(), "V2");
}

#[test]
fn test_json_and_yaml_agree() {
    let dir = tempfile::tempdir().unwrap();
    let yaml = NetworkSpec::from_yaml_str(CITY_YAML).unwrap();
    let path = write_file(&dir, "city.JSON", &serde_json::to_string_pretty(&yaml).unwrap());

    let json = NetworkSpec::from_path(&path).unwrap();
    assert_eq!(json, yaml);

    let a = yaml.build().unwrap();
    let b = json.build().unwrap();
    assert_eq!(a.graph.display_as_list(), b.graph.display_as_list());
}

#[test]
fn test_yml_extension_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "tiny.yml", "locations: [{label: A}]\n");
    let network = NetworkSpec::from_path(&path).unwrap().build().unwrap();
    assert!(network.graph.has_vertex("a"));
}

#[test]
fn test_unsupported_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "city.toml", "locations = []\n");
    assert!(matches!(
        NetworkSpec::from_path(&path),
        Err(ConfigError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");
    assert!(matches!(NetworkSpec::from_path(&path), Err(ConfigError::Io(_))));
}

#[test]
fn test_malformed_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "broken.yaml", "roads: [{from: A, to: B, length: far}]\n");
    assert!(matches!(NetworkSpec::from_path(&path), Err(ConfigError::Yaml(_))));
}

#[test]
fn test_unreachable_destination_fails_build() {
    let spec = NetworkSpec::from_yaml_str(
        "locations: [{label: A}, {label: B}]\nvehicles: [{id: V1, location: A, destination: B}]\n",
    )
    .unwrap();
    assert!(matches!(
        spec.build(),
        Err(ConfigError::Fleet(FleetError::Graph(GraphError::PathNotFound { .. })))
    ));
}

#[test]
fn test_duplicate_location_fails_build() {
    let spec = NetworkSpec::from_yaml_str("locations: [{label: A}, {label: a}]\n").unwrap();
    assert!(matches!(
        spec.build(),
        Err(ConfigError::Graph(GraphError::VertexExists(_)))
    ));
}
