//! Domain types: cell states, configuration, errors and preset patterns.

pub mod cell;
pub mod config;
pub mod error;
pub mod patterns;
