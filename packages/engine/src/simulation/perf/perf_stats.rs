use wasm_bindgen::prelude::*;

use crate::systems::life::StepOutcome;

/// Snapshot of the last generation, read by the UI's status bar.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepStats {
    pub(super) step_ms: f64,
    pub(super) generation: u64,
    pub(super) live_cells: u32,
    pub(super) births: u32,
    pub(super) deaths: u32,
    pub(super) oldest_age: u32,
}

impl StepStats {
    pub(super) fn record(generation: u64, outcome: &StepOutcome, step_ms: f64) -> Self {
        StepStats {
            step_ms,
            generation,
            live_cells: outcome.live_cells,
            births: outcome.births,
            deaths: outcome.deaths,
            oldest_age: outcome.oldest_age,
        }
    }

    /// Stats for a board that was just built or edited rather than stepped.
    pub(super) fn at_rest(generation: u64, live_cells: u32, oldest_age: u32) -> Self {
        StepStats {
            generation,
            live_cells,
            oldest_age,
            ..StepStats::default()
        }
    }
}

#[wasm_bindgen]
impl StepStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u64 { self.generation }
    #[wasm_bindgen(getter)]
    pub fn live_cells(&self) -> u32 { self.live_cells }
    #[wasm_bindgen(getter)]
    pub fn births(&self) -> u32 { self.births }
    #[wasm_bindgen(getter)]
    pub fn deaths(&self) -> u32 { self.deaths }
    #[wasm_bindgen(getter)]
    pub fn oldest_age(&self) -> u32 { self.oldest_age }
}
