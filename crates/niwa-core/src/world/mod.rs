//! World management - grid, side state and the per-tick plumbing

mod grid;
mod lifespan;
pub mod rng_trait;
pub mod stats;
#[allow(clippy::module_inception)]
mod world;

pub use grid::{Grid, ORTHOGONAL};
pub use lifespan::{IMMORTAL, LifespanMap, LifespanViolation};
pub use rng_trait::WorldRng;
pub use stats::{NoopStats, SimStats, TickStats};
pub use world::World;
