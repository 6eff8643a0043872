pub mod constants;
mod definition;

pub use constants::{
    BASE_RESOLUTION_M, GEODETIC_CRS, GLOBAL_EXTENT, HEMI_EXTENT, ProjectionKind,
    REFERENCE_TABLE_VERSION, ReferenceExtent,
};
pub use definition::GridDefinition;
