/// Scale from normalized coordinate distance to the km-like route unit.
pub const DISTANCE_SCALE: f64 = 100.0;

/// Hours spent per route distance unit.
pub const HOURS_PER_DISTANCE_UNIT: f64 = 0.6;

/// Solver runtime reported in every result, in seconds.
pub const REPORTED_SOLVE_TIME_SECONDS: f64 = 2.1;

pub const DEFAULT_HTTP_ADDR: &str = "0.0.0.0:3001";

pub const DEFAULT_EXPORT_FILE: &str = "mtvrp-nyc-data.json";
