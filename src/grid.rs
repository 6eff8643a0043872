use crate::cell::EaseCell;
use crate::coord::{Coordinate, ProjEngine, ProjectionEngine};
use crate::error::EaseError;
use crate::index::{GridDefinition, ProjectionKind};
use crate::lookup::GeodeticLookup;
use tracing::debug;

/// Grid index `(col, row)` together with the projected `(x, y)` it came from.
pub type EaseLocation = ((i64, i64), (f64, f64));

/// An EASE-Grid 2.0 grid: a `GridDefinition` plus the projection engine used
/// to move between geodetic and projected coordinates.
///
/// The public axis order is always `(lat, lon)`. The engine is called with
/// `(lon, lat)`.
///
/// # Example
///
/// ```no_run
/// use ease_grid_rs::{EaseGrid, ProjectionKind};
///
/// # fn main() -> Result<(), ease_grid_rs::EaseError> {
/// let grid = EaseGrid::new(12000, ProjectionKind::NorthHemi)?;
/// let ((col, row), (x, y)) = grid.geodetic_to_ease(85.0, 7.0)?;
/// assert_eq!((col, row), (755, 796));
///
/// let (lat, lon) = grid.ease_coord_to_geodetic(x, y)?;
/// assert!((lat - 85.0).abs() < 1e-6 && (lon - 7.0).abs() < 1e-6);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct EaseGrid<E = ProjEngine> {
    definition: GridDefinition,
    engine: E,
}

impl EaseGrid<ProjEngine> {
    /// Creates a grid using PROJ transforms for the projection.
    pub fn new(resolution_m: u32, projection: ProjectionKind) -> Result<Self, EaseError> {
        let definition = GridDefinition::new(resolution_m, projection)?;
        let engine = ProjEngine::new(projection)?;
        Ok(Self::from_parts(definition, engine))
    }

    /// Creates a grid from a projection name (`NorthHemi`, `SouthHemi` or `Global`).
    pub fn from_name(resolution_m: u32, projection: &str) -> Result<Self, EaseError> {
        Self::new(resolution_m, projection.parse()?)
    }

    pub fn builder() -> EaseGridBuilder {
        EaseGridBuilder::new()
    }

    /// Computes the geodetic center of every cell.
    pub fn geodetic_lookup(&self) -> Result<GeodeticLookup, EaseError> {
        let projection = self.projection();
        GeodeticLookup::build(&self.definition, || ProjEngine::new(projection))
    }
}

impl<E: ProjectionEngine> EaseGrid<E> {
    /// Creates a grid that uses the given engine for all transforms.
    ///
    /// The engine must implement the projection named by `projection`.
    pub fn with_engine(
        resolution_m: u32,
        projection: ProjectionKind,
        engine: E,
    ) -> Result<Self, EaseError> {
        let definition = GridDefinition::new(resolution_m, projection)?;
        Ok(Self::from_parts(definition, engine))
    }

    fn from_parts(definition: GridDefinition, engine: E) -> Self {
        debug!(
            projection = definition.projection().description(),
            resolution_m = definition.resolution_m(),
            number_cols = definition.number_cols(),
            number_rows = definition.number_rows(),
            cell_size_x = definition.cell_size_x(),
            cell_size_y = definition.cell_size_y(),
            "created EASE grid"
        );
        Self { definition, engine }
    }

    pub fn definition(&self) -> &GridDefinition {
        &self.definition
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn resolution_m(&self) -> u32 {
        self.definition.resolution_m()
    }

    pub fn projection(&self) -> ProjectionKind {
        self.definition.projection()
    }

    pub fn number_cols(&self) -> u32 {
        self.definition.number_cols()
    }

    pub fn number_rows(&self) -> u32 {
        self.definition.number_rows()
    }

    pub fn cell_size_x(&self) -> f64 {
        self.definition.cell_size_x()
    }

    pub fn cell_size_y(&self) -> f64 {
        self.definition.cell_size_y()
    }

    pub fn contains_index(&self, col: i64, row: i64) -> bool {
        self.definition.contains_index(col, row)
    }

    /// Grid index and projected coordinate of a geodetic point.
    ///
    /// Fails with `InvalidLatitude` when `|lat| > 90` (or `lat` is not finite)
    /// and with `OutOfGridBounds` when the projected point is outside the
    /// grid's reference extent.
    pub fn geodetic_to_ease(&self, lat: f64, lon: f64) -> Result<EaseLocation, EaseError> {
        check_latitude(lat)?;
        let (x, y) = self.engine.to_projected(lon, lat)?;
        let index = self.definition.projected_to_index(&(x, y))?;
        Ok((index, (x, y)))
    }

    /// Geodetic `(lat, lon)` of a projected coordinate.
    ///
    /// No bounds are imposed; the engine's answer is returned as is.
    pub fn ease_coord_to_geodetic(&self, x: f64, y: f64) -> Result<(f64, f64), EaseError> {
        let (lon, lat) = self.engine.to_geodetic(x, y)?;
        Ok((lat, lon))
    }

    /// Geodetic `(lat, lon)` of the center of cell `(col, row)`.
    ///
    /// Only meaningful for indices produced at this grid's resolution and
    /// projection. Indices outside the grid are not rejected.
    pub fn ease_index_to_geodetic(&self, col: i64, row: i64) -> Result<(f64, f64), EaseError> {
        let (x, y) = self.definition.index_to_projected(col, row);
        self.ease_coord_to_geodetic(x, y)
    }

    /// Element-wise `geodetic_to_ease`. Fails as a whole if any element is invalid.
    pub fn geodetic_to_ease_batch(
        &self,
        lats: &[f64],
        lons: &[f64],
    ) -> Result<Vec<EaseLocation>, EaseError> {
        check_lengths(lats.len(), lons.len())?;
        for &lat in lats {
            check_latitude(lat)?;
        }

        let mut points: Vec<(f64, f64)> = lons.iter().copied().zip(lats.iter().copied()).collect();
        self.engine.to_projected_batch(&mut points)?;

        points
            .into_iter()
            .map(|xy| -> Result<EaseLocation, EaseError> {
                Ok((self.definition.projected_to_index(&xy)?, xy))
            })
            .collect()
    }

    /// Element-wise `ease_coord_to_geodetic`.
    pub fn ease_coord_to_geodetic_batch(
        &self,
        xs: &[f64],
        ys: &[f64],
    ) -> Result<Vec<(f64, f64)>, EaseError> {
        check_lengths(xs.len(), ys.len())?;
        let mut points: Vec<(f64, f64)> = xs.iter().copied().zip(ys.iter().copied()).collect();
        self.to_lat_lon(&mut points)?;
        Ok(points)
    }

    /// Element-wise `ease_index_to_geodetic`.
    pub fn ease_index_to_geodetic_batch(
        &self,
        cols: &[i64],
        rows: &[i64],
    ) -> Result<Vec<(f64, f64)>, EaseError> {
        check_lengths(cols.len(), rows.len())?;
        let mut points: Vec<(f64, f64)> = cols
            .iter()
            .zip(rows)
            .map(|(&col, &row)| self.definition.index_to_projected(col, row))
            .collect();
        self.to_lat_lon(&mut points)?;
        Ok(points)
    }

    /// The cell containing a geodetic point.
    pub fn cell_at(&self, lat: f64, lon: f64) -> Result<EaseCell, EaseError> {
        let ((col, row), _) = self.geodetic_to_ease(lat, lon)?;
        self.cell(col, row)
    }

    /// `geodetic_to_ease` for a `(lon, lat)` point, e.g. a `geo_types::Point`.
    pub fn geodetic_point_to_ease<C: Coordinate>(&self, lonlat: &C) -> Result<EaseLocation, EaseError> {
        self.geodetic_to_ease(lonlat.y(), lonlat.x())
    }

    /// `cell_at` for a `(lon, lat)` point.
    pub fn cell_at_point<C: Coordinate>(&self, lonlat: &C) -> Result<EaseCell, EaseError> {
        self.cell_at(lonlat.y(), lonlat.x())
    }

    /// The cell at `(col, row)`, with its centers filled in.
    pub fn cell(&self, col: i64, row: i64) -> Result<EaseCell, EaseError> {
        let (x, y) = self.definition.index_to_projected(col, row);
        if !self.contains_index(col, row) {
            return Err(EaseError::OutOfGridBounds { x, y });
        }
        let (lat, lon) = self.ease_coord_to_geodetic(x, y)?;
        Ok(EaseCell::new(col, row, (x, y), (lat, lon), &self.definition))
    }

    /// Like `geodetic_lookup`, with a fresh engine from `make_engine` per worker thread.
    pub fn geodetic_lookup_with<F, T>(&self, make_engine: F) -> Result<GeodeticLookup, EaseError>
    where
        F: Fn() -> Result<T, EaseError> + Sync + Send,
        T: ProjectionEngine,
    {
        GeodeticLookup::build(&self.definition, make_engine)
    }

    // (x, y) in, (lat, lon) out
    fn to_lat_lon(&self, points: &mut [(f64, f64)]) -> Result<(), EaseError> {
        self.engine.to_geodetic_batch(points)?;
        for p in points.iter_mut() {
            *p = (p.1, p.0);
        }
        Ok(())
    }
}

fn check_latitude(lat: f64) -> Result<(), EaseError> {
    if lat.abs() <= 90.0 {
        Ok(())
    } else {
        Err(EaseError::InvalidLatitude(lat))
    }
}

fn check_lengths(left: usize, right: usize) -> Result<(), EaseError> {
    if left == right {
        Ok(())
    } else {
        Err(EaseError::LengthMismatch { left, right })
    }
}

#[derive(Debug, Default)]
pub struct EaseGridBuilder {
    resolution_m: Option<u32>,
    projection: Option<ProjectionKind>,
}

impl EaseGridBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolution(mut self, resolution_m: u32) -> Self {
        self.resolution_m = Some(resolution_m);
        self
    }

    pub fn projection(mut self, projection: ProjectionKind) -> Self {
        self.projection = Some(projection);
        self
    }

    pub fn build(self) -> Result<EaseGrid, EaseError> {
        let (resolution_m, projection) = self.parts()?;
        EaseGrid::new(resolution_m, projection)
    }

    pub fn build_with_engine<E: ProjectionEngine>(self, engine: E) -> Result<EaseGrid<E>, EaseError> {
        let (resolution_m, projection) = self.parts()?;
        EaseGrid::with_engine(resolution_m, projection, engine)
    }

    fn parts(&self) -> Result<(u32, ProjectionKind), EaseError> {
        let resolution_m = self
            .resolution_m
            .ok_or_else(|| EaseError::ConfigError("resolution must be set".into()))?;
        let projection = self
            .projection
            .ok_or_else(|| EaseError::ConfigError("projection must be set".into()))?;
        Ok((resolution_m, projection))
    }
}
