use crate::error::EaseError;
use crate::index::{GEODETIC_CRS, ProjectionKind};
use proj::Proj;
use std::fmt;

/// Forward and inverse transforms between geodetic and projected coordinates.
///
/// Arguments and results use the engine axis order: `(lon, lat)` in degrees
/// and `(x, y)` in meters.
pub trait ProjectionEngine {
    /// Geodetic `(lon, lat)` to projected `(x, y)`.
    fn to_projected(&self, lon: f64, lat: f64) -> Result<(f64, f64), EaseError>;

    /// Projected `(x, y)` to geodetic `(lon, lat)`.
    fn to_geodetic(&self, x: f64, y: f64) -> Result<(f64, f64), EaseError>;

    /// Transforms `(lon, lat)` pairs to `(x, y)` in place.
    fn to_projected_batch(&self, points: &mut [(f64, f64)]) -> Result<(), EaseError> {
        for p in points.iter_mut() {
            *p = self.to_projected(p.0, p.1)?;
        }
        Ok(())
    }

    /// Transforms `(x, y)` pairs to `(lon, lat)` in place.
    fn to_geodetic_batch(&self, points: &mut [(f64, f64)]) -> Result<(), EaseError> {
        for p in points.iter_mut() {
            *p = self.to_geodetic(p.0, p.1)?;
        }
        Ok(())
    }
}

/// `ProjectionEngine` backed by PROJ, between EPSG:4326 and the EASE-Grid 2.0
/// CRS of one projection kind.
///
/// A `Proj` handle is `Send` but not `Sync`; threads that need their own
/// transforms should build their own engine.
pub struct ProjEngine {
    kind: ProjectionKind,
    forward: Proj,
    inverse: Proj,
}

impl ProjEngine {
    pub fn new(kind: ProjectionKind) -> Result<Self, EaseError> {
        let forward = Proj::new_known_crs(GEODETIC_CRS, kind.epsg_code(), None)
            .map_err(|e| EaseError::ProjectionError(e.to_string()))?;
        let inverse = Proj::new_known_crs(kind.epsg_code(), GEODETIC_CRS, None)
            .map_err(|e| EaseError::ProjectionError(e.to_string()))?;

        Ok(Self {
            kind,
            forward,
            inverse,
        })
    }

    pub fn kind(&self) -> ProjectionKind {
        self.kind
    }
}

impl fmt::Debug for ProjEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjEngine")
            .field("from", &GEODETIC_CRS)
            .field("to", &self.kind.epsg_code())
            .finish()
    }
}

impl ProjectionEngine for ProjEngine {
    fn to_projected(&self, lon: f64, lat: f64) -> Result<(f64, f64), EaseError> {
        self.forward
            .convert((lon, lat))
            .map_err(|e| EaseError::ProjectionError(e.to_string()))
    }

    fn to_geodetic(&self, x: f64, y: f64) -> Result<(f64, f64), EaseError> {
        self.inverse
            .convert((x, y))
            .map_err(|e| EaseError::ProjectionError(e.to_string()))
    }

    fn to_projected_batch(&self, points: &mut [(f64, f64)]) -> Result<(), EaseError> {
        self.forward
            .convert_array(points)
            .map_err(|e| EaseError::ProjectionError(e.to_string()))?;
        Ok(())
    }

    fn to_geodetic_batch(&self, points: &mut [(f64, f64)]) -> Result<(), EaseError> {
        self.inverse
            .convert_array(points)
            .map_err(|e| EaseError::ProjectionError(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;

    /// Analytic engine: `x = lon * sx`, `y = lat * sy`.
    #[derive(Debug, Clone, Copy)]
    pub(crate) struct LinearEngine {
        pub sx: f64,
        pub sy: f64,
    }

    impl Default for LinearEngine {
        fn default() -> Self {
            Self {
                sx: 40_000.0,
                sy: 80_000.0,
            }
        }
    }

    impl ProjectionEngine for LinearEngine {
        fn to_projected(&self, lon: f64, lat: f64) -> Result<(f64, f64), EaseError> {
            Ok((lon * self.sx, lat * self.sy))
        }

        fn to_geodetic(&self, x: f64, y: f64) -> Result<(f64, f64), EaseError> {
            Ok((x / self.sx, y / self.sy))
        }
    }

    /// Engine whose transforms always fail.
    #[derive(Debug, Clone, Copy)]
    pub(crate) struct FailingEngine;

    impl ProjectionEngine for FailingEngine {
        fn to_projected(&self, _lon: f64, _lat: f64) -> Result<(f64, f64), EaseError> {
            Err(EaseError::ProjectionError("forward failed".into()))
        }

        fn to_geodetic(&self, _x: f64, _y: f64) -> Result<(f64, f64), EaseError> {
            Err(EaseError::ProjectionError("inverse failed".into()))
        }
    }
}
