use serde::{Deserialize, Serialize};

use crate::core::grid::GridDimensions;
use crate::domain::error::LifeError;
use crate::systems::factory::ClusterSeeding;

pub const DEFAULT_ROWS: u32 = 20;
pub const DEFAULT_COLS: u32 = 20;
pub const DEFAULT_NUM_CLUSTERS: u32 = 5;
pub const DEFAULT_CLUSTER_SIZE: u32 = 3;
pub const DEFAULT_TICK_INTERVAL_MS: u32 = 100;

/// Simulation settings supplied by the UI, usually as JSON.
///
/// Every field is optional in JSON; missing ones take the defaults the
/// browser app starts with (20x20, five clusters of three, 100 ms ticks).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub rows: u32,
    pub cols: u32,
    pub num_clusters: u32,
    pub cluster_size: u32,
    pub tick_interval_ms: u32,
    pub heatmap: bool,
    /// Fixed seed for cluster placement; `None` draws one from the platform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            num_clusters: DEFAULT_NUM_CLUSTERS,
            cluster_size: DEFAULT_CLUSTER_SIZE,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            heatmap: false,
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn from_json(json: &str) -> Result<Self, LifeError> {
        let config: SimulationConfig =
            serde_json::from_str(json).map_err(|e| LifeError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        // A struct of plain integers and bools always serializes.
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), LifeError> {
        GridDimensions::new(self.rows, self.cols)?;
        if self.tick_interval_ms == 0 {
            return Err(LifeError::InvalidConfig(
                "tick_interval_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn dimensions(&self) -> Result<GridDimensions, LifeError> {
        GridDimensions::new(self.rows, self.cols)
    }

    pub fn seeding(&self) -> ClusterSeeding {
        ClusterSeeding::new(self.num_clusters, self.cluster_size)
    }
}
