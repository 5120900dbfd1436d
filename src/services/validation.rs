//! Request preconditions checked before route construction

use thiserror::Error;

use crate::types::OptimizeRequest;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("At least 2 locations required")]
    TooFewLocations,
    #[error("At least 1 vehicle required")]
    NoVehicles,
    #[error("At least one depot location required")]
    NoDepot,
}

impl ValidationError {
    /// Request field the failure refers to
    pub const fn field(&self) -> &'static str {
        match self {
            ValidationError::TooFewLocations | ValidationError::NoDepot => "locations",
            ValidationError::NoVehicles => "vehicles",
        }
    }
}

/// Check an optimize request. The first failing rule wins.
pub fn validate(request: &OptimizeRequest) -> Result<(), ValidationError> {
    if request.locations.len() < 2 {
        return Err(ValidationError::TooFewLocations);
    }

    if request.vehicles.is_empty() {
        return Err(ValidationError::NoVehicles);
    }

    if !request.locations.iter().any(|l| l.is_depot()) {
        return Err(ValidationError::NoDepot);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Location, LocationType, Vehicle};

    fn location(id: i64, location_type: LocationType) -> Location {
        Location {
            id,
            name: String::new(),
            x: 0.5,
            y: 0.5,
            demand: 1.0,
            location_type,
            time_window: None,
        }
    }

    fn request(locations: Vec<Location>, vehicle_count: i64) -> OptimizeRequest {
        OptimizeRequest {
            locations,
            vehicles: (1..=vehicle_count)
                .map(|id| Vehicle {
                    id,
                    name: String::new(),
                    capacity: 10.0,
                    cost_per_km: 1.0,
                    max_distance: None,
                    vehicle_type: None,
                })
                .collect(),
            config: Default::default(),
        }
    }

    #[test]
    fn test_valid_request() {
        let req = request(
            vec![location(0, LocationType::Customer), location(1, LocationType::Depot)],
            1,
        );
        assert_eq!(validate(&req), Ok(()));
    }

    #[test]
    fn test_too_few_locations() {
        let req = request(vec![location(0, LocationType::Depot)], 1);
        let err = validate(&req).unwrap_err();
        assert_eq!(err, ValidationError::TooFewLocations);
        assert_eq!(err.to_string(), "At least 2 locations required");
        assert_eq!(err.field(), "locations");
    }

    #[test]
    fn test_no_vehicles() {
        let req = request(
            vec![location(0, LocationType::Depot), location(1, LocationType::Customer)],
            0,
        );
        let err = validate(&req).unwrap_err();
        assert_eq!(err, ValidationError::NoVehicles);
        assert_eq!(err.to_string(), "At least 1 vehicle required");
        assert_eq!(err.field(), "vehicles");
    }

    #[test]
    fn test_no_depot() {
        let req = request(
            vec![location(0, LocationType::Pickup), location(1, LocationType::Delivery)],
            2,
        );
        let err = validate(&req).unwrap_err();
        assert_eq!(err, ValidationError::NoDepot);
        assert_eq!(err.to_string(), "At least one depot location required");
    }

    #[test]
    fn test_location_count_checked_before_vehicles() {
        let req = request(vec![], 0);
        assert_eq!(validate(&req), Err(ValidationError::TooFewLocations));
    }
}
