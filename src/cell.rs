use crate::index::GridDefinition;
use geo_types::{Point, Polygon, Rect, coord};

/// A single cell of an EASE grid.
///
/// # Example
///
/// ```no_run
/// use ease_grid_rs::{EaseGrid, ProjectionKind};
///
/// # fn main() -> Result<(), ease_grid_rs::EaseError> {
/// let grid = EaseGrid::new(36000, ProjectionKind::Global)?;
/// let cell = grid.cell_at(48.579, 17.365)?;
/// println!("({}, {}) centered at {}, {}", cell.col, cell.row, cell.lat, cell.lon);
/// let polygon = cell.to_polygon();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EaseCell {
    /// Column index, growing with projected x
    pub col: i64,
    /// Row index, growing with decreasing projected y
    pub row: i64,
    /// Cell center in projected meters
    pub center: Point<f64>,
    /// Latitude of the cell center (degrees)
    pub lat: f64,
    /// Longitude of the cell center (degrees)
    pub lon: f64,
    /// Cell width in projected meters
    pub width: f64,
    /// Cell height in projected meters
    pub height: f64,
}

impl EaseCell {
    pub(crate) fn new(
        col: i64,
        row: i64,
        (x, y): (f64, f64),
        (lat, lon): (f64, f64),
        definition: &GridDefinition,
    ) -> Self {
        Self {
            col,
            row,
            center: Point::new(x, y),
            lat,
            lon,
            width: definition.cell_size_x(),
            height: definition.cell_size_y(),
        }
    }

    pub fn x(&self) -> f64 {
        self.center.x()
    }

    pub fn y(&self) -> f64 {
        self.center.y()
    }

    /// Cell extent in projected coordinates.
    pub fn bounds(&self) -> Rect<f64> {
        let (hw, hh) = (self.width / 2.0, self.height / 2.0);
        Rect::new(
            coord! { x: self.x() - hw, y: self.y() - hh },
            coord! { x: self.x() + hw, y: self.y() + hh },
        )
    }

    /// Cell outline in projected coordinates.
    pub fn to_polygon(&self) -> Polygon<f64> {
        self.bounds().to_polygon()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EaseError;
    use crate::index::ProjectionKind;

    #[test]
    fn test_bounds_match_grid_edges() -> Result<(), EaseError> {
        let def = GridDefinition::new(12000, ProjectionKind::NorthHemi)?;
        let center = def.index_to_projected(0, 0);
        let cell = EaseCell::new(0, 0, center, (0.0, 0.0), &def);

        let bounds = cell.bounds();
        assert!((bounds.min().x - def.x_min()).abs() < 1e-6);
        assert!((bounds.max().y - def.y_max()).abs() < 1e-6);
        assert!((bounds.width() - 12000.0).abs() < 1e-6);
        Ok(())
    }

    #[test]
    fn test_to_polygon() -> Result<(), EaseError> {
        let def = GridDefinition::new(36000, ProjectionKind::Global)?;
        let center = def.index_to_projected(528, 50);
        let cell = EaseCell::new(528, 50, center, (48.6, 17.4), &def);

        let polygon = cell.to_polygon();
        let exterior = polygon.exterior();
        assert_eq!(exterior.coords().count(), 5); // 4 corners + 1 to close
        assert_eq!(exterior.0[0], exterior.0[4]);
        Ok(())
    }
}
