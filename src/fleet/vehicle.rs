//! Vehicle records

use super::{FleetError, FleetResult};
use serde::{Deserialize, Serialize};

/// Highest battery percentage a vehicle can report
pub const MAX_BATTERY_LEVEL: u8 = 100;

/// An autonomous vehicle in the fleet.
///
/// `location` and `destination` are vertex labels, not handles: a record
/// never owns or mutates the graph it points into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    id: String,
    location: Option<String>,
    destination: Option<String>,
    distance_to_destination: f64,
    battery_level: u8,
}

impl Vehicle {
    /// Create a parked vehicle with the given charge
    pub fn new(id: impl Into<String>, battery_level: u8) -> FleetResult<Self> {
        let mut vehicle = Self {
            id: id.into(),
            location: None,
            destination: None,
            distance_to_destination: 0.0,
            battery_level: MAX_BATTERY_LEVEL,
        };
        vehicle.set_battery_level(battery_level)?;
        Ok(vehicle)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn destination(&self) -> Option<&str> {
        self.destination.as_deref()
    }

    pub fn distance_to_destination(&self) -> f64 {
        self.distance_to_destination
    }

    pub fn battery_level(&self) -> u8 {
        self.battery_level
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = Some(location.into());
    }

    pub fn set_destination(&mut self, destination: impl Into<String>) {
        self.destination = Some(destination.into());
    }

    /// Fails with `InvalidValue` outside 0-100
    pub fn set_battery_level(&mut self, battery_level: u8) -> FleetResult<()> {
        if battery_level > MAX_BATTERY_LEVEL {
            return Err(FleetError::InvalidValue(format!(
                "battery level must be between 0 and {}, got {}",
                MAX_BATTERY_LEVEL, battery_level
            )));
        }
        self.battery_level = battery_level;
        Ok(())
    }

    /// Fails with `InvalidValue` for negative or non-finite distances
    pub fn set_distance_to_destination(&mut self, distance: f64) -> FleetResult<()> {
        if !distance.is_finite() || distance < 0.0 {
            return Err(FleetError::InvalidValue(format!(
                "distance to destination must be non-negative, got {}",
                distance
            )));
        }
        self.distance_to_destination = distance;
        Ok(())
    }

    /// One-line description with every field
    pub fn summary(&self) -> String {
        format!(
            "{} | Battery Level: {} | Location: {} | Destination: {} | Distance to Destination: {}",
            self,
            self.battery_level,
            self.location.as_deref().unwrap_or("-"),
            self.destination.as_deref().unwrap_or("-"),
            self.distance_to_destination
        )
    }
}

impl std::fmt::Display for Vehicle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ID: {}", self.id)
    }
}
