use crate::coord::Coordinate;
use crate::error::EaseError;
use crate::index::constants::{BASE_RESOLUTION_M, ProjectionKind};
use serde::Serialize;

/// The regular grid laid over one projection's reference extent.
///
/// Columns grow with projected x. Rows grow with *decreasing* projected y, so
/// row 0 is the top of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridDefinition {
    resolution_m: u32,
    projection: ProjectionKind,
    x_min: f64,
    y_max: f64,
    number_cols: u32,
    number_rows: u32,
    cell_size_x: f64,
    cell_size_y: f64,
}

impl GridDefinition {
    /// Derives the grid dimensions for a resolution and projection.
    ///
    /// # Example
    /// ```
    /// use ease_grid_rs::{GridDefinition, ProjectionKind};
    ///
    /// # fn main() -> Result<(), ease_grid_rs::EaseError> {
    /// let def = GridDefinition::new(36000, ProjectionKind::Global)?;
    /// assert_eq!(def.number_cols(), 964);
    /// assert_eq!(def.number_rows(), 406);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(resolution_m: u32, projection: ProjectionKind) -> Result<Self, EaseError> {
        if resolution_m == 0 || resolution_m % BASE_RESOLUTION_M != 0 {
            return Err(EaseError::InvalidResolution(resolution_m));
        }

        let scale = resolution_m / BASE_RESOLUTION_M;
        let reference = projection.reference();
        let number_cols = reference.base_cols / scale;
        let number_rows = reference.base_rows / scale;

        // Coarser than the whole extent
        if number_cols == 0 || number_rows == 0 {
            return Err(EaseError::InvalidResolution(resolution_m));
        }

        let cell_size_x = (reference.x_min * 2.0).abs() / number_cols as f64;
        let cell_size_y = (reference.y_max * 2.0).abs() / number_rows as f64;

        Ok(Self {
            resolution_m,
            projection,
            x_min: reference.x_min,
            y_max: reference.y_max,
            number_cols,
            number_rows,
            cell_size_x,
            cell_size_y,
        })
    }

    pub fn resolution_m(&self) -> u32 {
        self.resolution_m
    }

    pub fn projection(&self) -> ProjectionKind {
        self.projection
    }

    pub fn number_cols(&self) -> u32 {
        self.number_cols
    }

    pub fn number_rows(&self) -> u32 {
        self.number_rows
    }

    /// Cell width in projected meters.
    pub fn cell_size_x(&self) -> f64 {
        self.cell_size_x
    }

    /// Cell height in projected meters.
    pub fn cell_size_y(&self) -> f64 {
        self.cell_size_y
    }

    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    pub fn x_max(&self) -> f64 {
        -self.x_min
    }

    pub fn y_min(&self) -> f64 {
        -self.y_max
    }

    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    /// Total number of cells in the grid.
    pub fn cell_count(&self) -> usize {
        self.number_cols as usize * self.number_rows as usize
    }

    /// Returns true when `(x, y)` lies inside the closed reference extent.
    ///
    /// NaN coordinates are never contained.
    pub fn contains_projected(&self, x: f64, y: f64) -> bool {
        x >= self.x_min() && x <= self.x_max() && y >= self.y_min() && y <= self.y_max()
    }

    /// Returns true when `(col, row)` addresses a cell of this grid.
    pub fn contains_index(&self, col: i64, row: i64) -> bool {
        (0..self.number_cols as i64).contains(&col) && (0..self.number_rows as i64).contains(&row)
    }

    /// Buckets a projected coordinate into its `(col, row)` cell.
    ///
    /// Cells are half-open: a point on a shared edge belongs to the cell to its
    /// right / below. Points on the outer max-x or min-y edge fall into the last
    /// column / row, so every returned index satisfies `contains_index`.
    pub fn projected_to_index<C: Coordinate>(&self, coord: &C) -> Result<(i64, i64), EaseError> {
        let (x, y) = (coord.x(), coord.y());
        if !self.contains_projected(x, y) {
            return Err(EaseError::OutOfGridBounds { x, y });
        }

        // Both quotients are non-negative here, so the cast floors
        let col = ((x - self.x_min) / self.cell_size_x) as i64;
        let row = ((self.y_max - y) / self.cell_size_y) as i64;

        Ok((
            col.min(self.number_cols as i64 - 1),
            row.min(self.number_rows as i64 - 1),
        ))
    }

    /// Projected coordinate of the center of cell `(col, row)`.
    ///
    /// Indices are not range checked.
    pub fn index_to_projected(&self, col: i64, row: i64) -> (f64, f64) {
        let x = (col as f64 + 0.5) * self.cell_size_x + self.x_min;
        let y = self.y_max - (row as f64 + 0.5) * self.cell_size_y;
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::Point;

    #[test]
    fn test_dimensions_all_valid_pairs() -> Result<(), EaseError> {
        for kind in ProjectionKind::ALL {
            for resolution in [3000, 9000, 12000, 24000, 36000] {
                let def = GridDefinition::new(resolution, kind)?;
                assert!(def.number_cols() > 0);
                assert!(def.number_rows() > 0);
                assert!(def.cell_size_x().is_finite() && def.cell_size_x() > 0.0);
                assert!(def.cell_size_y().is_finite() && def.cell_size_y() > 0.0);
            }
        }
        Ok(())
    }

    #[test]
    fn test_north_hemi_12km() -> Result<(), EaseError> {
        let def = GridDefinition::new(12000, ProjectionKind::NorthHemi)?;
        assert_eq!(def.number_cols(), 1500);
        assert_eq!(def.number_rows(), 1500);
        assert!((def.cell_size_x() - 12000.0).abs() < 1e-9);
        assert!((def.cell_size_y() - 12000.0).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_global_cells_nearly_square() -> Result<(), EaseError> {
        let def = GridDefinition::new(36000, ProjectionKind::Global)?;
        assert!((def.cell_size_x() - 36032.22).abs() < 0.01);
        assert!((def.cell_size_x() - def.cell_size_y()).abs() < 0.01);
        assert!((def.y_max() - 7314540.83).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_invalid_resolution() {
        for resolution in [0, 1000, 11000, 12500] {
            let result = GridDefinition::new(resolution, ProjectionKind::NorthHemi);
            assert_eq!(result, Err(EaseError::InvalidResolution(resolution)));
        }
    }

    #[test]
    fn test_resolution_coarser_than_extent() {
        let result = GridDefinition::new(3000 * 6001, ProjectionKind::SouthHemi);
        assert!(matches!(result, Err(EaseError::InvalidResolution(_))));
    }

    #[test]
    fn test_bucketing_origin_and_axes() -> Result<(), EaseError> {
        let def = GridDefinition::new(12000, ProjectionKind::NorthHemi)?;

        assert_eq!(def.projected_to_index(&(-9_000_000.0, 9_000_000.0))?, (0, 0));
        assert_eq!(def.projected_to_index(&(0.0, 0.0))?, (750, 750));
        // Just left of / above the center lines
        assert_eq!(def.projected_to_index(&(-0.001, 0.001))?, (749, 749));
        assert_eq!(def.projected_to_index(&Point::new(68037.02, -554117.08))?, (755, 796));
        Ok(())
    }

    #[test]
    fn test_outer_edge_folds_into_last_cell() -> Result<(), EaseError> {
        let def = GridDefinition::new(21000, ProjectionKind::NorthHemi)?;
        let last_col = def.number_cols() as i64 - 1;
        let last_row = def.number_rows() as i64 - 1;

        let (col, row) = def.projected_to_index(&(def.x_max(), def.y_min()))?;
        assert_eq!((col, row), (last_col, last_row));
        assert!(def.contains_index(col, row));
        Ok(())
    }

    #[test]
    fn test_outside_extent() -> Result<(), EaseError> {
        let def = GridDefinition::new(12000, ProjectionKind::NorthHemi)?;

        let result = def.projected_to_index(&(9_000_000.5, 0.0));
        assert!(matches!(result, Err(EaseError::OutOfGridBounds { .. })));
        let result = def.projected_to_index(&(0.0, -9_000_000.5));
        assert!(matches!(result, Err(EaseError::OutOfGridBounds { .. })));
        let result = def.projected_to_index(&(f64::NAN, 0.0));
        assert!(matches!(result, Err(EaseError::OutOfGridBounds { .. })));
        Ok(())
    }

    #[test]
    fn test_center_buckets_back_to_same_index() -> Result<(), EaseError> {
        let def = GridDefinition::new(9000, ProjectionKind::Global)?;

        for col in (0..def.number_cols() as i64).step_by(97) {
            for row in (0..def.number_rows() as i64).step_by(53) {
                let center = def.index_to_projected(col, row);
                assert_eq!(def.projected_to_index(&center)?, (col, row));
            }
        }
        Ok(())
    }

    #[test]
    fn test_contains_index() -> Result<(), EaseError> {
        let def = GridDefinition::new(36000, ProjectionKind::NorthHemi)?;
        assert!(def.contains_index(0, 0));
        assert!(def.contains_index(499, 499));
        assert!(!def.contains_index(500, 0));
        assert!(!def.contains_index(0, -1));
        Ok(())
    }
}
