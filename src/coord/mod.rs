mod engine;

pub use engine::{ProjEngine, ProjectionEngine};

#[cfg(test)]
pub(crate) use engine::mock;

use geo_types::{Coord, Point};

/// A planar pair in engine axis order.
///
/// For projected inputs this is `(x, y)` in meters. For geodetic inputs it
/// is `(lon, lat)` in degrees, the same order `geo_types` and PROJ use.
pub trait Coordinate {
    /// Projected x, or longitude.
    fn x(&self) -> f64;
    /// Projected y, or latitude.
    fn y(&self) -> f64;

    fn xy(&self) -> (f64, f64) {
        (self.x(), self.y())
    }
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}

impl Coordinate for Coord<f64> {
    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }
}
