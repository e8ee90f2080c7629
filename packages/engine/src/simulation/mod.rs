//! LifeController - the one owner of the running game
//!
//! Holds the current `(Board, AgeMap, generation, running)` snapshot and
//! the transitions the UI triggers:
//! - play/pause arm and disarm the single ticker
//! - step/tick replace the snapshot with `LifeEngine`'s next generation
//! - reset/resize/apply_pattern stop the game and rebuild through
//!   `GridFactory`, restarting the generation count
//! - toggle_cell flips one cell in place
//!
//! The color buffer is refreshed after every change so JS can draw
//! straight from `colors_ptr`.

use crate::core::grid::{AgeMap, Board, GridDimensions};
use crate::domain::config::SimulationConfig;
use crate::domain::error::LifeError;
use crate::systems::rng::SeedRng;

#[path = "perf/clock.rs"]
mod clock;
#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "ticker/ticker.rs"]
mod ticker;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "render/render_extract.rs"]
pub mod render_extract;
mod facade;

pub use facade::{GridLayout, Life};
pub use perf_stats::StepStats;

use render_extract::RenderBuffers;
use ticker::Ticker;

pub struct LifeController {
    config: SimulationConfig,
    dims: GridDimensions,
    board: Board,
    ages: AgeMap,
    generation: u64,
    ticker: Ticker,
    rng: SeedRng,
    render: RenderBuffers,
    stats: StepStats,
}

impl LifeController {
    /// Default settings on a `rows x cols` board.
    pub fn new(rows: u32, cols: u32) -> Result<Self, LifeError> {
        Self::from_config(SimulationConfig {
            rows,
            cols,
            ..SimulationConfig::default()
        })
    }

    pub fn from_config(config: SimulationConfig) -> Result<Self, LifeError> {
        init::create_controller(config)
    }

    pub fn from_config_json(json: &str) -> Result<Self, LifeError> {
        let config = SimulationConfig::from_json(json).inspect_err(|e| {
            crate::logging::warn(&format!("life: config rejected: {e}"));
        })?;
        Self::from_config(config)
    }

    // === Snapshot ===

    pub fn rows(&self) -> u32 { self.dims.rows() }

    pub fn cols(&self) -> u32 { self.dims.cols() }

    pub fn dims(&self) -> GridDimensions { self.dims }

    pub fn board(&self) -> &Board { &self.board }

    pub fn ages(&self) -> &AgeMap { &self.ages }

    pub fn generation(&self) -> u64 { self.generation }

    pub fn is_running(&self) -> bool { self.ticker.is_armed() }

    pub fn live_count(&self) -> u32 { self.board.live_count() }

    pub fn config(&self) -> &SimulationConfig { &self.config }

    /// Active settings as JSON, dimensions included.
    pub fn config_json(&self) -> String {
        self.config.to_json()
    }

    pub fn get_step_stats(&self) -> StepStats { self.stats }

    // === Running state ===

    /// Start ticking. A no-op returning false when already running.
    pub fn play(&mut self) -> bool {
        commands::play(self)
    }

    /// Stop ticking. Returns false when already stopped.
    pub fn pause(&mut self) -> bool {
        commands::pause(self)
    }

    pub fn toggle_running(&mut self) -> bool {
        if self.is_running() {
            self.pause();
        } else {
            self.play();
        }
        self.is_running()
    }

    /// Called from the UI's animation loop. Steps at most once, and only
    /// while running and after a full interval.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        step::tick(self, now_ms)
    }

    /// `tick` with the engine's own clock.
    pub fn tick_now(&mut self) -> bool {
        self.tick(clock::now_ms())
    }

    /// Advance one generation now, running or not.
    pub fn step(&mut self) {
        step::step(self);
    }

    // === Edits ===

    pub fn toggle_cell(&mut self, row: u32, col: u32) -> bool {
        commands::toggle_cell(self, row, col)
    }

    pub fn reset(&mut self) {
        commands::reset(self);
    }

    pub fn resize(&mut self, rows: u32, cols: u32) -> Result<(), LifeError> {
        commands::resize(self, rows, cols)
    }

    pub fn apply_pattern(&mut self, name: &str) -> Result<(), LifeError> {
        commands::apply_pattern(self, name)
    }

    // === Settings ===

    pub fn set_heatmap(&mut self, enabled: bool) {
        settings::set_heatmap(self, enabled);
    }

    pub fn heatmap(&self) -> bool {
        settings::get_heatmap(self)
    }

    pub fn set_tick_interval(&mut self, interval_ms: u32) -> Result<(), LifeError> {
        settings::set_tick_interval(self, interval_ms)
    }

    pub fn tick_interval(&self) -> u32 {
        settings::get_tick_interval(self)
    }

    /// Cluster parameters used by the next `reset`.
    pub fn set_clusters(&mut self, num_clusters: u32, cluster_size: u32) {
        settings::set_clusters(self, num_clusters, cluster_size);
    }

    // === Buffers for JS rendering ===

    pub fn cells_ptr(&self) -> *const u8 { self.board.as_ptr() }

    pub fn ages_ptr(&self) -> *const u32 { self.ages.as_ptr() }

    pub fn colors_ptr(&self) -> *const u32 { self.render.colors.as_ptr() }

    pub fn colors(&self) -> &[u32] { &self.render.colors }

    /// Element count shared by the cell, age and color buffers.
    pub fn cell_count(&self) -> usize { self.dims.size() }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;

// Private helpers shared by the command modules
impl LifeController {
    /// Install a freshly built snapshot: generation 0, stats and colors
    /// rebuilt.
    fn replace_snapshot(&mut self, board: Board, ages: AgeMap) {
        self.board = board;
        self.ages = ages;
        self.generation = 0;
        self.refresh_view();
    }

    fn refresh_view(&mut self) {
        self.stats = StepStats::at_rest(self.generation, self.board.live_count(), self.ages.oldest());
        self.render.refresh(&self.board, &self.ages, self.config.heatmap);
    }
}
