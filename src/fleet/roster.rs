//! Fleet roster: vehicles indexed by id in a probing table

use super::vehicle::Vehicle;
use super::FleetResult;
use crate::graph::{GraphError, GraphStore};
use crate::heap::PriorityHeap;
use crate::index::ProbingTable;
use tracing::{debug, info};

/// Initial roster capacity when none is configured
pub const DEFAULT_ROSTER_CAPACITY: usize = 50;

/// All vehicles, keyed by exact (case-sensitive) id
#[derive(Debug, Clone)]
pub struct Fleet {
    table: ProbingTable<Vehicle>,
}

impl Default for Fleet {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_ROSTER_CAPACITY)
    }
}

impl Fleet {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            table: ProbingTable::new(capacity),
        }
    }

    /// Add a vehicle; fails with a duplicate-key error if the id is taken
    pub fn register(&mut self, vehicle: Vehicle) -> FleetResult<()> {
        let id = vehicle.id().to_string();
        self.table.put(id.clone(), vehicle)?;
        debug!(%id, vehicles = self.table.len(), "registered vehicle");
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> FleetResult<Vehicle> {
        let vehicle = self.table.remove(id)?;
        debug!(%id, vehicles = self.table.len(), "removed vehicle");
        Ok(vehicle)
    }

    pub fn get(&self, id: &str) -> FleetResult<&Vehicle> {
        Ok(self.table.get(id)?)
    }

    pub fn get_mut(&mut self, id: &str) -> FleetResult<&mut Vehicle> {
        Ok(self.table.get_mut(id)?)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.table.has_key(id)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn load_factor(&self) -> f64 {
        self.table.get_load_factor()
    }

    /// Vehicles in table slot order
    pub fn vehicles(&self) -> Vec<&Vehicle> {
        self.table.export_to_sequence()
    }

    /// Route a vehicle from `location` to `destination`.
    ///
    /// Nothing on the vehicle changes unless both locations exist and a path
    /// connects them. Returns the route distance.
    pub fn dispatch<V>(
        &mut self,
        graph: &GraphStore<V>,
        id: &str,
        location: &str,
        destination: &str,
    ) -> FleetResult<f64> {
        self.table.get(id)?;
        let from = graph
            .vertex(location)
            .ok_or_else(|| GraphError::VertexNotFound(location.to_string()))?
            .label()
            .to_string();
        let to = graph
            .vertex(destination)
            .ok_or_else(|| GraphError::VertexNotFound(destination.to_string()))?
            .label()
            .to_string();

        let route = graph.dijkstra(&from, &to)?;

        let vehicle = self.table.get_mut(id)?;
        vehicle.set_distance_to_destination(route.distance)?;
        vehicle.set_location(from);
        vehicle.set_destination(to);
        info!(%id, distance = route.distance, hops = route.hops(), "dispatched vehicle");
        Ok(route.distance)
    }

    /// Vehicles ordered by ascending distance to destination (heap sort)
    pub fn by_distance(&self) -> FleetResult<Vec<&Vehicle>> {
        let vehicles = self.vehicles();
        let heap = PriorityHeap::from_entries(
            vehicles.len(),
            vehicles
                .into_iter()
                .map(|v| (v.distance_to_destination(), v)),
        )?;
        Ok(heap.into_sorted_vec().into_iter().map(|e| e.payload).collect())
    }

    /// Vehicle closest to its destination
    pub fn nearest(&self) -> FleetResult<Option<&Vehicle>> {
        Ok(self.by_distance()?.into_iter().next())
    }

    /// Vehicles ordered by descending battery level; ties keep slot order
    pub fn by_battery(&self) -> Vec<&Vehicle> {
        let mut vehicles = self.vehicles();
        vehicles.sort_by(|a, b| b.battery_level().cmp(&a.battery_level()));
        vehicles
    }

    pub fn highest_battery(&self) -> Option<&Vehicle> {
        self.by_battery().into_iter().next()
    }
}
