//! Planar distance and travel-time estimates on the normalized square

use crate::defaults::{DISTANCE_SCALE, HOURS_PER_DISTANCE_UNIT};
use crate::types::Location;

/// Straight-line distance between two locations in route units
pub fn planar_distance(from: &Location, to: &Location) -> f64 {
    let dx = from.x - to.x;
    let dy = from.y - to.y;
    (dx.powi(2) + dy.powi(2)).sqrt() * DISTANCE_SCALE
}

/// Travel time in hours for a given route distance
pub fn travel_time_hours(distance: f64) -> f64 {
    distance * HOURS_PER_DISTANCE_UNIT
}
