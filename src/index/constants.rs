use crate::error::EaseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Version of the reference constant table below.
pub const REFERENCE_TABLE_VERSION: u8 = 1;

/// Base resolution in meters; every grid resolution is a multiple of it.
pub const BASE_RESOLUTION_M: u32 = 3000;

/// Geodetic CRS all grids project from.
pub const GEODETIC_CRS: &str = "EPSG:4326";

/// Fixed reference extent and base dimensions of one projection.
///
/// The valid domain is `[x_min, -x_min] x [-y_max, y_max]` in projected meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceExtent {
    /// Left edge of the grid (meters)
    pub x_min: f64,
    /// Top edge of the grid (meters)
    pub y_max: f64,
    /// Column count at `BASE_RESOLUTION_M`
    pub base_cols: u32,
    /// Row count at `BASE_RESOLUTION_M`
    pub base_rows: u32,
}

/// Northern and Southern Hemisphere Lambert Azimuthal grids.
pub const HEMI_EXTENT: ReferenceExtent = ReferenceExtent {
    x_min: -9_000_000.0,
    y_max: 9_000_000.0,
    base_cols: 6000,
    base_rows: 6000,
};

/// Global cylindrical equal-area grid (valid for |lat| <= ~84 degrees).
pub const GLOBAL_EXTENT: ReferenceExtent = ReferenceExtent {
    x_min: -17_367_530.45,
    y_max: 7_314_540.83,
    base_cols: 11568,
    base_rows: 4872,
};

/// The three EASE-Grid 2.0 projections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectionKind {
    NorthHemi,
    SouthHemi,
    Global,
}

impl ProjectionKind {
    pub const ALL: [ProjectionKind; 3] = [
        ProjectionKind::NorthHemi,
        ProjectionKind::SouthHemi,
        ProjectionKind::Global,
    ];

    pub const fn reference(self) -> ReferenceExtent {
        match self {
            ProjectionKind::NorthHemi | ProjectionKind::SouthHemi => HEMI_EXTENT,
            ProjectionKind::Global => GLOBAL_EXTENT,
        }
    }

    /// EPSG identifier of the projected CRS.
    pub const fn epsg_code(self) -> &'static str {
        match self {
            ProjectionKind::NorthHemi => "EPSG:6931",
            ProjectionKind::SouthHemi => "EPSG:6932",
            ProjectionKind::Global => "EPSG:6933",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            ProjectionKind::NorthHemi => "EASE Northern Hemisphere, Lambert Azimuthal projection",
            ProjectionKind::SouthHemi => "EASE Southern Hemisphere, Lambert Azimuthal projection",
            ProjectionKind::Global => "EASE Global, Equal-Area projection",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ProjectionKind::NorthHemi => "NorthHemi",
            ProjectionKind::SouthHemi => "SouthHemi",
            ProjectionKind::Global => "Global",
        }
    }
}

impl fmt::Display for ProjectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProjectionKind {
    type Err = EaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectionKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| EaseError::InvalidProjection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_names() -> Result<(), EaseError> {
        assert_eq!("NorthHemi".parse::<ProjectionKind>()?, ProjectionKind::NorthHemi);
        assert_eq!("SouthHemi".parse::<ProjectionKind>()?, ProjectionKind::SouthHemi);
        assert_eq!("Global".parse::<ProjectionKind>()?, ProjectionKind::Global);
        Ok(())
    }

    #[test]
    fn test_parse_rejects_abbreviation() {
        let result = "SH".parse::<ProjectionKind>();
        assert_eq!(result, Err(EaseError::InvalidProjection("SH".into())));
    }

    #[test]
    fn test_display_matches_parse() -> Result<(), EaseError> {
        for kind in ProjectionKind::ALL {
            assert_eq!(kind.to_string().parse::<ProjectionKind>()?, kind);
        }
        Ok(())
    }

    #[test]
    fn test_serde_uses_canonical_names() {
        let json = serde_json::to_string(&ProjectionKind::Global).unwrap();
        assert_eq!(json, "\"Global\"");
        let kind: ProjectionKind = serde_json::from_str("\"SouthHemi\"").unwrap();
        assert_eq!(kind, ProjectionKind::SouthHemi);
    }

    #[test]
    fn test_base_dimensions_scale_cleanly() {
        for kind in ProjectionKind::ALL {
            let r = kind.reference();
            assert!(r.x_min < 0.0 && r.y_max > 0.0);
            // 3, 9, 12 and 36 km all divide the base grids exactly
            for scale in [1, 3, 4, 12] {
                assert_eq!(r.base_cols % scale, 0);
                assert_eq!(r.base_rows % scale, 0);
            }
        }
    }
}
