use crate::coord::ProjectionEngine;
use crate::error::EaseError;
use crate::grid::EaseGrid;
use crate::index::{GridDefinition, ProjectionKind};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serializable description of an EASE grid.
///
/// ```
/// use ease_grid_rs::GridConfig;
///
/// # fn main() -> Result<(), ease_grid_rs::EaseError> {
/// let config = GridConfig::from_json_str(r#"{ "resolution_m": 36000, "projection": "Global" }"#)?;
/// assert_eq!(config.definition()?.number_cols(), 964);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Grid resolution in meters (a multiple of 3000)
    pub resolution_m: u32,
    /// Projection name: NorthHemi, SouthHemi or Global
    pub projection: String,
}

impl GridConfig {
    pub fn new(resolution_m: u32, projection: ProjectionKind) -> Self {
        Self {
            resolution_m,
            projection: projection.to_string(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, EaseError> {
        serde_json::from_str(json).map_err(|e| EaseError::ConfigError(e.to_string()))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EaseError> {
        let text =
            std::fs::read_to_string(path).map_err(|e| EaseError::ConfigError(e.to_string()))?;
        Self::from_json_str(&text)
    }

    pub fn to_json_string(&self) -> Result<String, EaseError> {
        serde_json::to_string_pretty(self).map_err(|e| EaseError::ConfigError(e.to_string()))
    }

    pub fn projection_kind(&self) -> Result<ProjectionKind, EaseError> {
        self.projection.parse()
    }

    /// Validates the configuration and derives the grid dimensions.
    pub fn definition(&self) -> Result<GridDefinition, EaseError> {
        GridDefinition::new(self.resolution_m, self.projection_kind()?)
    }

    pub fn build(&self) -> Result<EaseGrid, EaseError> {
        EaseGrid::new(self.resolution_m, self.projection_kind()?)
    }

    pub fn build_with_engine<E: ProjectionEngine>(&self, engine: E) -> Result<EaseGrid<E>, EaseError> {
        EaseGrid::with_engine(self.resolution_m, self.projection_kind()?, engine)
    }
}
