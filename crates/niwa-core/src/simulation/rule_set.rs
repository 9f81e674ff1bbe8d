//! Rule set trait - the pluggable part of the engine

use std::fmt::Debug;

use crate::config::GridConfig;
use crate::error::Result;
use crate::materials::Material;
use crate::world::{Grid, SimStats, WorldRng};

/// A fixed family of local transition rules plus the side state they need
///
/// The engine (world, scheduler, paint tools) is generic over this trait; each
/// sandbox variant supplies one implementation.
pub trait RuleSet {
    /// Cell material tag of this variant
    type Material: Material;

    /// Per-world state carried alongside the grid (e.g. plant lifespans)
    type State: Clone + Debug + Default;

    /// Display name for logs
    fn name(&self) -> &'static str;

    /// Viewport and cell size the grid is built from
    fn grid_config(&self) -> GridConfig;

    /// Whether a fresh scheduler should tick without an explicit start
    fn starts_running(&self) -> bool {
        true
    }

    /// Grid contents at startup and after a reset
    fn initial_grid<R: WorldRng + ?Sized>(
        &self,
        rows: usize,
        cols: usize,
        rng: &mut R,
    ) -> Grid<Self::Material>;

    /// Advance the grid and state by exactly one tick
    fn tick<R: WorldRng + ?Sized>(
        &self,
        grid: &mut Grid<Self::Material>,
        state: &mut Self::State,
        rng: &mut R,
        stats: &mut dyn SimStats,
    );

    /// Placement predicate for the paint interface
    ///
    /// `current` is the in-bounds cell being painted over.
    fn check_placement(
        &self,
        _current: Self::Material,
        _x: i32,
        _y: i32,
        _material: Self::Material,
    ) -> Result<()> {
        Ok(())
    }

    /// Update side state after a successful placement
    fn on_placed(&self, _state: &mut Self::State, _x: usize, _y: usize, _material: Self::Material) {
    }
}
