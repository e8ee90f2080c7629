//! Core storage shared by every system: validated dimensions, boards
//! and age maps.

// Macros first so `fast!` is in scope for the grid modules.
#[macro_use]
pub mod utils;
pub mod grid;
