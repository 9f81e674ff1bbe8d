//! # Niwa core
//!
//! Grid engine shared by the granular and ecology sandboxes: rule sets, the
//! world they act on, the tick scheduler and paint tools.

pub mod config;
pub mod error;
pub mod simulation;
pub mod tools;
pub mod world;

// Re-export from niwa-simulation so callers need a single dependency
pub mod materials {
    pub use niwa_simulation::*;
}
