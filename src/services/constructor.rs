//! Route construction
//!
//! Fabricates one route per vehicle: customers are dealt out to vehicles
//! round-robin by input position, each vehicle visits its share in input
//! order and returns to the depot. Distance is straight-line on the
//! normalized square, time is derived from distance, and load only ever
//! accumulates.

use thiserror::Error;
use tracing::debug;

use crate::defaults::REPORTED_SOLVE_TIME_SECONDS;
use crate::services::geo::{planar_distance, travel_time_hours};
use crate::types::{
    Location, OptimizationConfig, OptimizationResult, OptimizedRoute, RouteStop, Vehicle,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConstructionError {
    #[error("no locations to route")]
    NoLocations,
}

/// Index of the depot: the first depot-typed location, or the first
/// location when none is typed as depot. `None` only for an empty slice.
pub fn select_depot(locations: &[Location]) -> Option<usize> {
    if locations.is_empty() {
        return None;
    }
    Some(locations.iter().position(Location::is_depot).unwrap_or(0))
}

/// Deal `item_count` positions into `bucket_count` buckets, position `i`
/// going to bucket `i % bucket_count`. Buckets keep ascending order.
/// With no buckets nothing is assigned.
pub fn partition_round_robin(item_count: usize, bucket_count: usize) -> Vec<Vec<usize>> {
    let mut buckets = vec![Vec::new(); bucket_count];
    if bucket_count == 0 {
        return buckets;
    }

    for i in 0..item_count {
        buckets[i % bucket_count].push(i);
    }

    buckets
}

/// Build routes for the whole fleet.
///
/// Callers are expected to have validated the request; the only input this
/// rejects is an empty location list, where no depot exists.
pub fn construct_routes(
    locations: &[Location],
    vehicles: &[Vehicle],
    config: &OptimizationConfig,
) -> Result<OptimizationResult, ConstructionError> {
    let depot_index = select_depot(locations).ok_or(ConstructionError::NoLocations)?;
    let depot = &locations[depot_index];

    let customers: Vec<&Location> = locations
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != depot_index)
        .map(|(_, location)| location)
        .collect();

    let assignment = partition_round_robin(customers.len(), vehicles.len());

    let routes: Vec<OptimizedRoute> = vehicles
        .iter()
        .zip(&assignment)
        .map(|(vehicle, assigned)| {
            build_route(depot, assigned.iter().map(|&i| customers[i]), vehicle)
        })
        .collect();

    let total_cost = routes.iter().map(|r| r.total_cost).sum();
    let total_distance = routes.iter().map(|r| r.total_distance).sum();
    let total_time = routes.iter().map(|r| r.total_time).sum();

    Ok(OptimizationResult {
        routes,
        total_cost,
        total_distance,
        total_time,
        solve_time: REPORTED_SOLVE_TIME_SECONDS,
        algorithm: config.algorithm,
    })
}

fn build_route<'a>(
    depot: &'a Location,
    customers: impl Iterator<Item = &'a Location>,
    vehicle: &Vehicle,
) -> OptimizedRoute {
    let mut current = depot;
    let mut total_distance = 0.0;
    let mut total_time = 0.0;
    let mut load = 0.0;

    let mut stops = vec![RouteStop {
        location_id: depot.id,
        arrival_time: 0.0,
        load: 0.0,
        distance: 0.0,
    }];

    for customer in customers {
        let distance = planar_distance(current, customer);
        total_distance += distance;
        total_time += travel_time_hours(distance);
        // never unloaded: every stop adds to what the vehicle carries
        load += customer.demand;

        stops.push(RouteStop {
            location_id: customer.id,
            arrival_time: total_time,
            load,
            distance: total_distance,
        });

        current = customer;
    }

    let return_distance = planar_distance(current, depot);
    total_distance += return_distance;
    total_time += travel_time_hours(return_distance);

    stops.push(RouteStop {
        location_id: depot.id,
        arrival_time: total_time,
        load: 0.0,
        distance: total_distance,
    });

    debug!(
        "Route for vehicle {}: {} stops, {:.3} distance, {:.3} h",
        vehicle.id,
        stops.len(),
        total_distance,
        total_time
    );

    OptimizedRoute {
        vehicle_id: vehicle.id,
        stops,
        total_distance,
        total_cost: total_distance * vehicle.cost_per_km,
        total_time,
    }
}
