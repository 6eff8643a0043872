//! # ease-grid-rs
//!
//! Conversions between geodetic coordinates and the EASE-Grid 2.0 equal-area
//! grids (Northern Hemisphere, Southern Hemisphere and Global).
//!
//! Three coordinate spaces are involved:
//!
//! - geodetic `(lat, lon)` in degrees
//! - projected `(x, y)` in meters (EPSG:6931, EPSG:6932 or EPSG:6933)
//! - grid index `(col, row)`, with row 0 at the top of the grid
//!
//! ### 1. `EaseGrid` - Conversions
//!
//! ```no_run
//! use ease_grid_rs::{EaseGrid, ProjectionKind};
//!
//! # fn main() -> Result<(), ease_grid_rs::EaseError> {
//! let grid = EaseGrid::new(36000, ProjectionKind::Global)?;
//!
//! let ((col, row), (x, y)) = grid.geodetic_to_ease(48.579, 17.365)?;
//! let (lat, lon) = grid.ease_index_to_geodetic(col, row)?;
//! println!("cell ({col}, {row}) at {x}, {y}; center {lat}, {lon}");
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `GridDefinition` - Grid Arithmetic Only
//!
//! ```
//! use ease_grid_rs::{GridDefinition, ProjectionKind};
//!
//! # fn main() -> Result<(), ease_grid_rs::EaseError> {
//! let def = GridDefinition::new(12000, ProjectionKind::NorthHemi)?;
//! assert_eq!(def.projected_to_index(&(68037.02, -554117.08))?, (755, 796));
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `GridConfig` - Grids From JSON
//!
//! ```no_run
//! use ease_grid_rs::GridConfig;
//!
//! # fn main() -> Result<(), ease_grid_rs::EaseError> {
//! let grid = GridConfig::from_path("grid.json")?.build()?;
//! let lookup = grid.geodetic_lookup()?;
//! # Ok(())
//! # }
//! ```
//!

pub mod cell;
pub mod config;
pub mod coord;
pub mod error;
pub mod grid;
pub mod index;
pub mod lookup;

pub use cell::EaseCell;
pub use config::GridConfig;
pub use coord::{Coordinate, ProjEngine, ProjectionEngine};
pub use error::EaseError;
pub use grid::{EaseGrid, EaseGridBuilder, EaseLocation};
pub use index::{
    BASE_RESOLUTION_M, GEODETIC_CRS, GLOBAL_EXTENT, GridDefinition, HEMI_EXTENT, ProjectionKind,
    REFERENCE_TABLE_VERSION, ReferenceExtent,
};
pub use lookup::GeodeticLookup;

pub use geo_types;
