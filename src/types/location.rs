//! Location types

use serde::{Deserialize, Serialize};

/// Declared role of a location.
///
/// Only `Depot` is meaningful to route construction; pickup and delivery
/// points are routed exactly like plain customers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    Depot,
    Customer,
    Pickup,
    Delivery,
}

/// Service hours window, in hours of the day (0-24)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationTimeWindow {
    pub start: f64,
    pub end: f64,
}

/// A point on the normalized planning square
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    /// Normalized coordinate, 0-1
    pub x: f64,
    /// Normalized coordinate, 0-1
    pub y: f64,
    #[serde(default)]
    pub demand: f64,
    #[serde(rename = "type")]
    pub location_type: LocationType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_window: Option<LocationTimeWindow>,
}

impl Location {
    pub fn is_depot(&self) -> bool {
        self.location_type == LocationType::Depot
    }
}
