//! Optimize operation shared by every transport

use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::services::constructor::{construct_routes, ConstructionError};
use crate::services::validation::{validate, ValidationError};
use crate::types::{OptimizationResult, OptimizeRequest};

#[derive(Debug, Error)]
pub enum OptimizeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Public message stays generic; the cause is only logged.
    #[error("Optimization failed")]
    Construction(#[from] ConstructionError),
}

impl OptimizeError {
    pub const fn code(&self) -> &'static str {
        match self {
            OptimizeError::Validation(_) => "VALIDATION_ERROR",
            OptimizeError::Construction(_) => "OPTIMIZATION_FAILED",
        }
    }

    /// Whether the caller sent something it should fix
    pub const fn is_client_error(&self) -> bool {
        matches!(self, OptimizeError::Validation(_))
    }
}

/// Validates requests and builds routes
#[derive(Debug, Clone)]
pub struct OptimizeService {
    simulated_delay: Duration,
}

impl OptimizeService {
    pub fn new(simulated_delay: Duration) -> Self {
        Self { simulated_delay }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.simulated_solve_delay)
    }

    pub async fn optimize(&self, request: &OptimizeRequest) -> Result<OptimizationResult, OptimizeError> {
        validate(request)?;

        info!(
            "Optimizing {} locations with {} vehicles using {}",
            request.locations.len(),
            request.vehicles.len(),
            request.config.algorithm.as_str(),
        );

        if !self.simulated_delay.is_zero() {
            debug!("Simulating solver latency of {:?}", self.simulated_delay);
            tokio::time::sleep(self.simulated_delay).await;
        }

        let started_at = Instant::now();
        let result = construct_routes(&request.locations, &request.vehicles, &request.config)
            .inspect_err(|e| error!("Route construction failed: {}", e))?;

        info!(
            "Constructed {} routes: {:.2} distance, {:.2} cost, {:.2} h in {:?}",
            result.routes.len(),
            result.total_distance,
            result.total_cost,
            result.total_time,
            started_at.elapsed(),
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::workspace::default_workspace;
    use crate::types::{Location, LocationType};

    fn customer(id: i64, x: f64, y: f64) -> Location {
        Location {
            id,
            name: format!("Customer {}", id),
            x,
            y,
            demand: 2.0,
            location_type: LocationType::Customer,
            time_window: None,
        }
    }

    #[tokio::test]
    async fn test_optimize_valid_request() {
        let mut request = default_workspace();
        request.locations.push(customer(1, 0.6, 0.5));

        let service = OptimizeService::new(Duration::ZERO);
        let result = service.optimize(&request).await.unwrap();

        assert_eq!(result.routes.len(), 1);
        assert!((result.total_distance - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_optimize_rejects_invalid_request() {
        let service = OptimizeService::new(Duration::ZERO);
        let request = default_workspace();

        let err = tokio_test::block_on(service.optimize(&request)).unwrap_err();

        assert!(err.is_client_error());
        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert_eq!(err.to_string(), "At least 2 locations required");
    }

    #[tokio::test(start_paused = true)]
    async fn test_optimize_waits_simulated_delay() {
        let mut request = default_workspace();
        request.locations.push(customer(1, 0.5, 0.6));

        let service = OptimizeService::new(Duration::from_millis(2000));
        let started = tokio::time::Instant::now();
        service.optimize(&request).await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(2000));
    }

    #[test]
    fn test_construction_error_message_is_generic() {
        let err = OptimizeError::from(ConstructionError::NoLocations);
        assert!(!err.is_client_error());
        assert_eq!(err.code(), "OPTIMIZATION_FAILED");
        assert_eq!(err.to_string(), "Optimization failed");
    }
}
