//! Optimization request/result types

use serde::{Deserialize, Serialize};

use super::{Location, Vehicle};

/// Algorithm label chosen in the workspace. Echoed back, never interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    #[default]
    AttentionModel,
    Pomo,
    Classical,
}

impl Algorithm {
    pub const fn as_str(self) -> &'static str {
        match self {
            Algorithm::AttentionModel => "attention_model",
            Algorithm::Pomo => "pomo",
            Algorithm::Classical => "classical",
        }
    }
}

/// Optimization settings from the workspace.
///
/// Only `algorithm` is read. Training knobs are kept as raw JSON and the
/// remaining fields land in `extra`, so any value the workspace sends is
/// accepted and an exported workspace round-trips.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationConfig {
    #[serde(default)]
    pub algorithm: Algorithm,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_epochs: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<serde_json::Value>,
    #[serde(default, rename = "useGPU", skip_serializing_if = "Option::is_none")]
    pub use_gpu: Option<serde_json::Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Body of an optimize call; also the import/export document shape
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeRequest {
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
    #[serde(default)]
    pub config: OptimizationConfig,
}

/// A visit on a constructed route. All quantities are cumulative from the
/// route start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStop {
    pub location_id: i64,
    /// Hours since departure
    pub arrival_time: f64,
    pub load: f64,
    pub distance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizedRoute {
    pub vehicle_id: i64,
    pub stops: Vec<RouteStop>,
    pub total_distance: f64,
    pub total_cost: f64,
    pub total_time: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    pub routes: Vec<OptimizedRoute>,
    pub total_cost: f64,
    pub total_distance: f64,
    pub total_time: f64,
    /// Reported solver runtime in seconds
    pub solve_time: f64,
    pub algorithm: Algorithm,
}
