//! Life Engine - Conway's Game of Life core for the browser UI
//!
//! The JS app (pages, controls, canvas) calls in through `wasm-bindgen`;
//! everything here is plain Rust underneath.
//!
//! Architecture:
//! - core/       - Dimensions, boards, age maps
//! - domain/     - Cells, config, errors, preset patterns
//! - systems/    - GridFactory (seeding) and LifeEngine (generations)
//! - simulation/ - LifeController state holder and its JS facade
//! - api/        - Public JS API

// Safety macros first so `fast!` is visible to every later module.
#[macro_use]
pub mod core;
pub mod logging;
pub mod domain;
pub mod systems;
pub mod simulation;
pub mod api;

pub use crate::core::grid::{AgeMap, Board, GridDimensions};
pub use crate::domain::cell::Cell;
pub use crate::domain::config::SimulationConfig;
pub use crate::domain::error::LifeError;
pub use crate::simulation::LifeController;
pub use crate::systems::factory::{ClusterSeeding, GridFactory};
pub use crate::systems::life::{LifeEngine, StepOutcome};
pub use crate::systems::rng::SeedRng;

use wasm_bindgen::prelude::*;

// Re-export the JS-facing types
pub use crate::api::wasm::{GridBuffers, GridLayout, Life, StepStats};

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    logging::info(&format!("life engine {} initialized", version()));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Names accepted by `Life.applyPattern`.
#[wasm_bindgen]
pub fn pattern_names() -> Vec<String> {
    domain::patterns::names().map(str::to_string).collect()
}
