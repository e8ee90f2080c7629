//! Stateless exports for callers that keep their own state in JS and only
//! want the two core operations. The `Life` class wraps the stateful
//! controller.

use wasm_bindgen::prelude::*;

use crate::core::grid::{AgeMap, Board, GridDimensions};
use crate::domain::error::LifeError;
use crate::systems::factory::GridFactory;
use crate::systems::life::LifeEngine;

pub use crate::simulation::{GridLayout, Life, StepStats};

/// A board and its ages as flat row-major arrays.
#[wasm_bindgen]
pub struct GridBuffers {
    rows: u32,
    cols: u32,
    cells: Vec<u8>,
    ages: Vec<u32>,
}

#[wasm_bindgen]
impl GridBuffers {
    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 { self.rows }
    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> u32 { self.cols }
    /// Copied out as a `Uint8Array` (1 = alive).
    #[wasm_bindgen(getter)]
    pub fn cells(&self) -> Vec<u8> { self.cells.clone() }
    /// Copied out as a `Uint32Array`.
    #[wasm_bindgen(getter)]
    pub fn ages(&self) -> Vec<u32> { self.ages.clone() }
}

impl GridBuffers {
    fn from_pair(board: &Board, ages: &AgeMap) -> Self {
        Self {
            rows: board.rows(),
            cols: board.cols(),
            cells: board.to_bytes(),
            ages: ages.as_slice().to_vec(),
        }
    }
}

/// New board of `rows x cols` with `num_clusters` random clusters.
pub fn create_grid_buffers(
    rows: u32,
    cols: u32,
    num_clusters: u32,
    cluster_size: u32,
) -> Result<GridBuffers, LifeError> {
    let (board, ages) = GridFactory::create(rows, cols, num_clusters, cluster_size)?;
    Ok(GridBuffers::from_pair(&board, &ages))
}

/// One generation from flat buffers. `cells` and `ages` must both hold
/// `rows * cols` entries.
pub fn next_generation_buffers(
    rows: u32,
    cols: u32,
    cells: &[u8],
    ages: &[u32],
) -> Result<GridBuffers, LifeError> {
    let dims = GridDimensions::new(rows, cols)?;
    let board = Board::from_bytes(dims, cells)?;
    let ages = AgeMap::from_slice(dims, ages)?;
    let (next, next_ages) = LifeEngine::step(&board, &ages)?;
    Ok(GridBuffers::from_pair(&next, &next_ages))
}

#[wasm_bindgen]
pub fn create_grid(
    rows: u32,
    cols: u32,
    num_clusters: u32,
    cluster_size: u32,
) -> Result<GridBuffers, JsValue> {
    create_grid_buffers(rows, cols, num_clusters, cluster_size)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub fn next_generation(rows: u32, cols: u32, cells: &[u8], ages: &[u32]) -> Result<GridBuffers, JsValue> {
    next_generation_buffers(rows, cols, cells, ages).map_err(|e| JsValue::from_str(&e.to_string()))
}
