//! Workspace documents: the `{locations, vehicles, config}` JSON that users
//! edit, export and import.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::types::{
    Algorithm, Location, LocationType, OptimizationConfig, OptimizeRequest, Vehicle,
};

/// Exported workspace. Same shape as an optimize request body.
pub type WorkspaceData = OptimizeRequest;

/// Starting workspace: a single NYC depot and one truck
pub fn default_workspace() -> WorkspaceData {
    WorkspaceData {
        locations: vec![Location {
            id: 0,
            name: "NYC Distribution Center".to_string(),
            x: 0.5,
            y: 0.5,
            demand: 0.0,
            location_type: LocationType::Depot,
            time_window: None,
        }],
        vehicles: vec![Vehicle {
            id: 1,
            name: "NYC-001".to_string(),
            capacity: 50.0,
            cost_per_km: 1.0,
            max_distance: Some(200.0),
            vehicle_type: None,
        }],
        config: default_config(),
    }
}

pub fn default_config() -> OptimizationConfig {
    let extra = json!({
        "learningRate": "0.001",
        "earlyStoping": false,
        "optimizationPolicy": "balanced",
        "features": {
            "weather": false,
            "traffic": false,
            "carbonOptimal": false,
            "customerSatisfaction": false,
            "priorityDelivery": false,
            "dynamicRouting": false
        },
        "weights": {
            "cost": 40,
            "time": 30,
            "satisfaction": 20,
            "environment": 10
        }
    });

    OptimizationConfig {
        algorithm: Algorithm::AttentionModel,
        max_epochs: Some(json!(50)),
        batch_size: Some(json!(64)),
        use_gpu: Some(json!(true)),
        extra: match extra {
            serde_json::Value::Object(map) => map,
            _ => serde_json::Map::new(),
        },
    }
}

/// An imported document. Sections that are missing or `null` leave the
/// current workspace untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceImport {
    #[serde(default)]
    pub locations: Option<Vec<Location>>,
    #[serde(default)]
    pub vehicles: Option<Vec<Vehicle>>,
    #[serde(default)]
    pub config: Option<OptimizationConfig>,
}

impl WorkspaceImport {
    pub fn apply_to(self, workspace: &mut WorkspaceData) {
        if let Some(locations) = self.locations {
            workspace.locations = locations;
        }
        if let Some(vehicles) = self.vehicles {
            workspace.vehicles = vehicles;
        }
        if let Some(config) = self.config {
            workspace.config = config;
        }
    }
}

pub fn load_import(path: &Path) -> Result<WorkspaceImport> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read workspace file {}", path.display()))?;
    let import = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid workspace file {}", path.display()))?;
    Ok(import)
}

pub fn save(path: &Path, workspace: &WorkspaceData) -> Result<()> {
    let json = serde_json::to_string_pretty(workspace)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write workspace file {}", path.display()))?;
    info!(
        "Exported workspace to {}: {} locations, {} vehicles",
        path.display(),
        workspace.locations.len(),
        workspace.vehicles.len(),
    );
    Ok(())
}
