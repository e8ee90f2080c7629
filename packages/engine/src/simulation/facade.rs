use wasm_bindgen::prelude::*;

use super::perf_stats::StepStats;
use super::LifeController;

/// Where the three per-cell buffers live in wasm memory. JS rebuilds its
/// typed-array views from this after every resize.
#[wasm_bindgen]
pub struct GridLayout {
    rows: u32,
    cols: u32,
    cells_ptr: u32,
    ages_ptr: u32,
    colors_ptr: u32,
    len_elements: u32,
}

#[wasm_bindgen]
impl GridLayout {
    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 { self.rows }
    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> u32 { self.cols }
    /// `Uint8Array`, one byte per cell (1 = alive).
    #[wasm_bindgen(getter)]
    pub fn cells_ptr(&self) -> u32 { self.cells_ptr }
    /// `Uint32Array`, one age per cell.
    #[wasm_bindgen(getter)]
    pub fn ages_ptr(&self) -> u32 { self.ages_ptr }
    /// `Uint32Array` of ABGR pixels, one per cell.
    #[wasm_bindgen(getter)]
    pub fn colors_ptr(&self) -> u32 { self.colors_ptr }
    #[wasm_bindgen(getter)]
    pub fn len_elements(&self) -> u32 { self.len_elements }
}

/// JS handle to a `LifeController`.
#[wasm_bindgen]
pub struct Life {
    core: LifeController,
}

#[wasm_bindgen]
impl Life {
    /// Default settings on a `rows x cols` board seeded with clusters.
    #[wasm_bindgen(constructor)]
    pub fn new(rows: u32, cols: u32) -> Result<Life, JsValue> {
        let core = LifeController::new(rows, cols).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str) -> Result<Life, JsValue> {
        let core = LifeController::from_config_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 { self.core.rows() }

    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> u32 { self.core.cols() }

    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u64 { self.core.generation() }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool { self.core.is_running() }

    #[wasm_bindgen(getter)]
    pub fn live_count(&self) -> u32 { self.core.live_count() }

    #[wasm_bindgen(getter)]
    pub fn heatmap(&self) -> bool { self.core.heatmap() }

    #[wasm_bindgen(setter)]
    pub fn set_heatmap(&mut self, enabled: bool) { self.core.set_heatmap(enabled); }

    #[wasm_bindgen(getter)]
    pub fn tick_interval(&self) -> u32 { self.core.tick_interval() }

    #[wasm_bindgen(js_name = setTickInterval)]
    pub fn set_tick_interval(&mut self, interval_ms: u32) -> Result<(), JsValue> {
        self.core
            .set_tick_interval(interval_ms)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = setClusters)]
    pub fn set_clusters(&mut self, num_clusters: u32, cluster_size: u32) {
        self.core.set_clusters(num_clusters, cluster_size);
    }

    #[wasm_bindgen(js_name = configJson)]
    pub fn config_json(&self) -> String {
        self.core.config_json()
    }

    pub fn play(&mut self) -> bool {
        self.core.play()
    }

    pub fn pause(&mut self) -> bool {
        self.core.pause()
    }

    #[wasm_bindgen(js_name = toggleRunning)]
    pub fn toggle_running(&mut self) -> bool {
        self.core.toggle_running()
    }

    /// Call from `requestAnimationFrame` with `performance.now()`.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.core.tick(now_ms)
    }

    #[wasm_bindgen(js_name = tickNow)]
    pub fn tick_now(&mut self) -> bool {
        self.core.tick_now()
    }

    pub fn step(&mut self) {
        self.core.step();
    }

    pub fn reset(&mut self) {
        self.core.reset();
    }

    pub fn resize(&mut self, rows: u32, cols: u32) -> Result<(), JsValue> {
        self.core
            .resize(rows, cols)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = toggleCell)]
    pub fn toggle_cell(&mut self, row: u32, col: u32) -> bool {
        self.core.toggle_cell(row, col)
    }

    #[wasm_bindgen(js_name = applyPattern)]
    pub fn apply_pattern(&mut self, name: &str) -> Result<(), JsValue> {
        self.core
            .apply_pattern(name)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = isAlive)]
    pub fn is_alive(&self, row: u32, col: u32) -> bool {
        self.core
            .board()
            .try_get(row, col)
            .is_some_and(|cell| cell.is_alive())
    }

    /// 0 for dead or off-grid cells.
    pub fn age(&self, row: u32, col: u32) -> u32 {
        if row < self.core.rows() && col < self.core.cols() {
            self.core.ages().get(row, col)
        } else {
            0
        }
    }

    #[wasm_bindgen(js_name = stepStats)]
    pub fn step_stats(&self) -> StepStats {
        self.core.get_step_stats()
    }

    pub fn cells_ptr(&self) -> *const u8 {
        self.core.cells_ptr()
    }

    pub fn ages_ptr(&self) -> *const u32 {
        self.core.ages_ptr()
    }

    pub fn colors_ptr(&self) -> *const u32 {
        self.core.colors_ptr()
    }

    pub fn cell_count(&self) -> usize {
        self.core.cell_count()
    }

    pub fn layout(&self) -> GridLayout {
        GridLayout {
            rows: self.core.rows(),
            cols: self.core.cols(),
            cells_ptr: self.core.cells_ptr() as u32,
            ages_ptr: self.core.ages_ptr() as u32,
            colors_ptr: self.core.colors_ptr() as u32,
            len_elements: self.core.cell_count() as u32,
        }
    }
}
