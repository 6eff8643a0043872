use crate::coord::ProjectionEngine;
use crate::error::EaseError;
use crate::index::GridDefinition;
use rayon::prelude::*;
use tracing::debug;

/// Geodetic center of every cell of a grid, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct GeodeticLookup {
    number_cols: u32,
    number_rows: u32,
    lats: Vec<f64>,
    lons: Vec<f64>,
}

impl GeodeticLookup {
    /// Builds the table in parallel, one row per task.
    ///
    /// `make_engine` runs at least once per worker thread, and again for each
    /// job rayon splits off, so it may build more engines than there are
    /// threads. Each engine is only used by the job that created it.
    pub fn build<F, E>(definition: &GridDefinition, make_engine: F) -> Result<Self, EaseError>
    where
        F: Fn() -> Result<E, EaseError> + Sync + Send,
        E: ProjectionEngine,
    {
        let number_cols = definition.number_cols();
        let number_rows = definition.number_rows();

        let rows: Vec<Vec<(f64, f64)>> = (0..number_rows as i64)
            .into_par_iter()
            .map_init(&make_engine, |engine, row| -> Result<Vec<(f64, f64)>, EaseError> {
                let engine = engine.as_ref().map_err(Clone::clone)?;
                let mut points: Vec<(f64, f64)> = (0..number_cols as i64)
                    .map(|col| definition.index_to_projected(col, row))
                    .collect();
                engine.to_geodetic_batch(&mut points)?;
                Ok(points)
            })
            .collect::<Result<_, EaseError>>()?;

        let mut lats = Vec::with_capacity(definition.cell_count());
        let mut lons = Vec::with_capacity(definition.cell_count());
        for (lon, lat) in rows.into_iter().flatten() {
            lats.push(lat);
            lons.push(lon);
        }

        debug!(
            projection = %definition.projection(),
            resolution_m = definition.resolution_m(),
            cells = lats.len(),
            "built geodetic lookup"
        );

        Ok(Self {
            number_cols,
            number_rows,
            lats,
            lons,
        })
    }

    pub fn number_cols(&self) -> u32 {
        self.number_cols
    }

    pub fn number_rows(&self) -> u32 {
        self.number_rows
    }

    pub fn len(&self) -> usize {
        self.lats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lats.is_empty()
    }

    /// Cell-center latitudes, row-major.
    pub fn lats(&self) -> &[f64] {
        &self.lats
    }

    /// Cell-center longitudes, row-major.
    pub fn lons(&self) -> &[f64] {
        &self.lons
    }

    /// `(lat, lon)` of cell `(col, row)`, or `None` outside the grid.
    pub fn get(&self, col: i64, row: i64) -> Option<(f64, f64)> {
        if !(0..self.number_cols as i64).contains(&col) || !(0..self.number_rows as i64).contains(&row)
        {
            return None;
        }
        let i = row as usize * self.number_cols as usize + col as usize;
        Some((self.lats[i], self.lons[i]))
    }

    /// Iterates `((col, row), (lat, lon))` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = ((i64, i64), (f64, f64))> + '_ {
        let cols = self.number_cols as usize;
        self.lats
            .iter()
            .zip(&self.lons)
            .enumerate()
            .map(move |(i, (&lat, &lon))| (((i % cols) as i64, (i / cols) as i64), (lat, lon)))
    }
}
