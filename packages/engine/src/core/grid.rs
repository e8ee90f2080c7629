//! Grid - row-major storage for boards and age maps
//!
//! A board is logically a sequence of `rows` rows of `cols` cells. Both
//! `Board` and `AgeMap` keep that as one flat `Vec` indexed by
//! `row * cols + col`, so JS can view them as a `Uint8Array` and a
//! `Uint32Array` without copying.
//!
//! Neither type can change its dimensions; a resize builds new values.

use crate::domain::cell::Cell;
use crate::domain::error::LifeError;

mod indexing;
mod accessors;

/// Validated `{rows, cols}`; both are always positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridDimensions {
    rows: u32,
    cols: u32,
}

impl GridDimensions {
    pub fn new(rows: u32, cols: u32) -> Result<Self, LifeError> {
        if rows == 0 || cols == 0 {
            return Err(LifeError::InvalidDimensions { rows, cols });
        }
        Ok(Self { rows, cols })
    }
}

/// The live/dead state of every cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    dims: GridDimensions,
    cells: Vec<Cell>,
}

/// Consecutive live generations per cell, paired with a `Board` of the
/// same dimensions. A non-zero age implies the cell is alive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AgeMap {
    dims: GridDimensions,
    ages: Vec<u32>,
}

impl Board {
    /// All-dead board.
    pub fn new(dims: GridDimensions) -> Self {
        Self {
            dims,
            cells: vec![Cell::Dead; dims.size()],
        }
    }

    /// Build from explicit rows. Rows must be non-empty and all the same
    /// length.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, LifeError> {
        let dims = ragged_dims(&rows)?;
        Ok(Self {
            dims,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Build from a flat row-major byte buffer (non-zero = alive).
    pub fn from_bytes(dims: GridDimensions, bytes: &[u8]) -> Result<Self, LifeError> {
        if bytes.len() != dims.size() {
            return Err(LifeError::InvalidConfig(format!(
                "expected {} cells for a {}x{} board, got {}",
                dims.size(),
                dims.rows(),
                dims.cols(),
                bytes.len()
            )));
        }
        Ok(Self {
            dims,
            cells: bytes.iter().map(|&b| Cell::from_byte(b)).collect(),
        })
    }

    pub(crate) fn from_cells(dims: GridDimensions, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), dims.size());
        Self { dims, cells }
    }
}

impl AgeMap {
    /// All-zero ages.
    pub fn new(dims: GridDimensions) -> Self {
        Self {
            dims,
            ages: vec![0; dims.size()],
        }
    }

    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, LifeError> {
        let dims = ragged_dims(&rows)?;
        Ok(Self {
            dims,
            ages: rows.into_iter().flatten().collect(),
        })
    }

    pub fn from_slice(dims: GridDimensions, ages: &[u32]) -> Result<Self, LifeError> {
        if ages.len() != dims.size() {
            return Err(LifeError::InvalidConfig(format!(
                "expected {} ages for a {}x{} grid, got {}",
                dims.size(),
                dims.rows(),
                dims.cols(),
                ages.len()
            )));
        }
        Ok(Self {
            dims,
            ages: ages.to_vec(),
        })
    }

    pub(crate) fn from_ages(dims: GridDimensions, ages: Vec<u32>) -> Self {
        debug_assert_eq!(ages.len(), dims.size());
        Self { dims, ages }
    }

    /// True when every non-zero age sits on a live cell of `board` and the
    /// shapes match.
    pub fn is_consistent_with(&self, board: &Board) -> bool {
        self.dims == board.dims
            && self
                .ages
                .iter()
                .zip(board.cells.iter())
                .all(|(&age, cell)| age == 0 || cell.is_alive())
    }
}

/// Board and ages must describe the same grid.
pub fn ensure_same_shape(board: &Board, ages: &AgeMap) -> Result<GridDimensions, LifeError> {
    if board.dims != ages.dims {
        return Err(LifeError::ShapeMismatch {
            board_rows: board.rows(),
            board_cols: board.cols(),
            ages_rows: ages.rows(),
            ages_cols: ages.cols(),
        });
    }
    Ok(board.dims)
}

fn ragged_dims<T>(rows: &[Vec<T>]) -> Result<GridDimensions, LifeError> {
    let cols = rows.first().map_or(0, Vec::len);
    if rows.iter().any(|row| row.len() != cols) {
        return Err(LifeError::InvalidConfig("rows have different lengths".to_string()));
    }
    let too_large = || LifeError::InvalidDimensions {
        rows: u32::try_from(rows.len()).unwrap_or(u32::MAX),
        cols: u32::try_from(cols).unwrap_or(u32::MAX),
    };
    let row_count = u32::try_from(rows.len()).map_err(|_| too_large())?;
    let col_count = u32::try_from(cols).map_err(|_| too_large())?;
    GridDimensions::new(row_count, col_count)
}
