//! # Niwa - headless driver
//!
//! Runs either sandbox variant without a window: paint a few brushes, tick,
//! and print the grid as text.

pub mod headless;

pub use niwa_core::{config, materials, simulation, world};
