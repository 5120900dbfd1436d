//! Fixed Manhattan demo dataset, as served by the "SAP import" button

use crate::services::workspace::{default_config, WorkspaceData};
use crate::types::{Location, LocationType, Vehicle, VehicleType};

/// Bounding box that maps Manhattan onto the normalized square
#[derive(Debug, Clone, Copy)]
pub struct GeoBounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

pub const MANHATTAN_BOUNDS: GeoBounds = GeoBounds {
    north: 40.7831,
    south: 40.7047,
    east: -73.9441,
    west: -74.0200,
};

impl GeoBounds {
    /// Project lat/lng to `(x, y)` in `[0, 1]`, north at `y = 0`.
    /// Points outside the box are clamped to its edge.
    pub fn normalize(&self, lat: f64, lng: f64) -> (f64, f64) {
        let x = (lng - self.west) / (self.east - self.west);
        let y = (self.north - lat) / (self.north - self.south);
        (x.clamp(0.0, 1.0), y.clamp(0.0, 1.0))
    }
}

const NYC_LOCATIONS: &[(i64, &str, f64, f64, f64, LocationType)] = &[
    (0, "NYC Distribution Center", 40.7505, -73.9890, 0.0, LocationType::Depot),
    // north of the depot
    (1, "Macy's Herald Square", 40.7508, -73.9876, 3.0, LocationType::Customer),
    (2, "42nd & 7th Ave", 40.7548, -73.9876, 2.0, LocationType::Pickup),
    (3, "Times Square Plaza", 40.7550, -73.9851, 4.0, LocationType::Customer),
    (4, "Bryant Park Cafe", 40.7536, -73.9832, 2.0, LocationType::Customer),
    (5, "40th & Broadway", 40.7533, -73.9877, 3.0, LocationType::Customer),
    // east
    (6, "34th & Park Ave", 40.7485, -73.9844, 2.0, LocationType::Customer),
    (7, "38th & Lexington", 40.7514, -73.9810, 3.0, LocationType::Delivery),
    (8, "Murray Hill", 40.7478, -73.9789, 2.0, LocationType::Customer),
    (9, "42nd & Park Ave", 40.7521, -73.9844, 4.0, LocationType::Customer),
    (10, "Grand Central South", 40.7505, -73.9772, 3.0, LocationType::Pickup),
    // south
    (11, "Empire State South", 40.7470, -73.9857, 3.0, LocationType::Customer),
    (12, "Koreatown 32nd", 40.7478, -73.9857, 2.0, LocationType::Customer),
    (13, "30th & Broadway", 40.7461, -73.9881, 3.0, LocationType::Delivery),
    (14, "28th & 6th Ave", 40.7443, -73.9882, 2.0, LocationType::Customer),
    (15, "Madison Square Park", 40.7425, -73.9873, 3.0, LocationType::Customer),
    // west
    (16, "42nd & 9th Ave", 40.7574, -73.9913, 2.0, LocationType::Customer),
    (17, "38th & 9th Ave", 40.7534, -73.9943, 3.0, LocationType::Pickup),
    (18, "34th & 9th Ave", 40.7505, -73.9970, 2.0, LocationType::Customer),
    (19, "30th & 10th Ave", 40.7478, -73.9995, 3.0, LocationType::Customer),
    (20, "Hudson Yards South", 40.7520, -74.0020, 4.0, LocationType::Delivery),
    // around Penn Station
    (21, "Madison Square Garden", 40.7505, -73.9934, 4.0, LocationType::Customer),
    (22, "Penn Plaza East", 40.7495, -73.9920, 2.0, LocationType::Customer),
    (23, "Penn Plaza West", 40.7495, -73.9948, 3.0, LocationType::Customer),
    (24, "33rd & 7th Ave", 40.7495, -73.9901, 2.0, LocationType::Customer),
    (25, "Home Depot Manhattan", 40.7510, -73.9890, 5.0, LocationType::Delivery),
];

const NYC_VEHICLES: &[(i64, &str, f64, f64, f64, VehicleType)] = &[
    (1, "NYC-001", 50.0, 1.2, 150.0, VehicleType::Truck),
    (2, "NYC-002", 45.0, 1.1, 180.0, VehicleType::Truck),
    (3, "NYC-003", 60.0, 1.3, 200.0, VehicleType::Truck),
    (4, "NYC-004", 40.0, 1.0, 160.0, VehicleType::Truck),
    (5, "DRONE-001", 5.0, 0.3, 25.0, VehicleType::Drone),
    (6, "DRONE-002", 3.0, 0.2, 20.0, VehicleType::Drone),
];

/// Midtown delivery network with a mixed truck and drone fleet
pub fn nyc_sample() -> WorkspaceData {
    let locations = NYC_LOCATIONS
        .iter()
        .map(|&(id, name, lat, lng, demand, location_type)| {
            let (x, y) = MANHATTAN_BOUNDS.normalize(lat, lng);
            Location {
                id,
                name: name.to_string(),
                x,
                y,
                demand,
                location_type,
                time_window: None,
            }
        })
        .collect();

    let vehicles = NYC_VEHICLES
        .iter()
        .map(|&(id, name, capacity, cost_per_km, max_distance, vehicle_type)| Vehicle {
            id,
            name: name.to_string(),
            capacity,
            cost_per_km,
            max_distance: Some(max_distance),
            vehicle_type: Some(vehicle_type),
        })
        .collect();

    WorkspaceData {
        locations,
        vehicles,
        config: default_config(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::validation::validate;

    #[test]
    fn test_normalize_corners() {
        let (x, y) = MANHATTAN_BOUNDS.normalize(40.7831, -74.0200);
        assert!(x.abs() < 1e-9 && y.abs() < 1e-9);

        let (x, y) = MANHATTAN_BOUNDS.normalize(40.7047, -73.9441);
        assert!((x - 1.0).abs() < 1e-9 && (y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_normalize_clamps_outside_points() {
        let (x, y) = MANHATTAN_BOUNDS.normalize(40.90, -74.10);
        assert_eq!((x, y), (0.0, 0.0));

        let (x, y) = MANHATTAN_BOUNDS.normalize(40.60, -73.80);
        assert_eq!((x, y), (1.0, 1.0));
    }

    #[test]
    fn test_sample_shape() {
        let sample = nyc_sample();

        assert_eq!(sample.locations.len(), 26);
        assert_eq!(sample.vehicles.len(), 6);
        assert_eq!(sample.locations.iter().filter(|l| l.is_depot()).count(), 1);
        assert_eq!(
            sample.vehicles.iter().filter(|v| v.vehicle_type == Some(VehicleType::Drone)).count(),
            2
        );
        for location in &sample.locations {
            assert!((0.0..=1.0).contains(&location.x));
            assert!((0.0..=1.0).contains(&location.y));
        }
    }

    #[test]
    fn test_sample_is_a_valid_request() {
        assert!(validate(&nyc_sample()).is_ok());
    }

    #[test]
    fn test_depot_projection() {
        let sample = nyc_sample();
        let depot = &sample.locations[0];

        let expected_x = (-73.9890 - -74.0200) / (-73.9441 - -74.0200);
        let expected_y = (40.7831 - 40.7505) / (40.7831 - 40.7047);
        assert!((depot.x - expected_x).abs() < 1e-12);
        assert!((depot.y - expected_y).abs() < 1e-12);
    }
}
