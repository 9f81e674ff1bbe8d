//! Granular/liquid physics rules - sand, soil, water and seeds
//!
//! All rules mutate the live grid in place. Each rule scans rows bottom to
//! top (from the second-to-last row up to row 0) and columns left to right.
//! That order is part of the rules' semantics, not an optimisation: a cell
//! that falls lands in a row that has already been scanned, so it is not
//! processed twice by the same pass. Sideways water flow is not protected
//! this way and can carry a water cell several columns right in one pass.

use crate::config::{GranularConfig, GridConfig};
use crate::materials::GranularMaterial;
use crate::simulation::RuleSet;
use crate::world::{Grid, SimStats, WorldRng};

use GranularMaterial::*;

/// Falling-sand rule set
#[derive(Debug, Clone, Default)]
pub struct GranularRules {
    config: GranularConfig,
}

impl GranularRules {
    pub fn new(config: GranularConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GranularConfig {
        &self.config
    }

    /// Sand falls, sinks through water, or slides diagonally
    pub fn update_sand(grid: &mut Grid<GranularMaterial>, stats: &mut dyn SimStats) {
        let (rows, cols) = grid.dimensions();
        for y in scan_rows(rows) {
            for x in 0..cols {
                if grid.at(x, y) != Sand {
                    continue;
                }

                // Straight down into air, or swap with water below
                if matches!(grid.at(x, y + 1), Empty | Water) {
                    grid.swap((x, y), (x, y + 1));
                    stats.record_cell_moved();
                    continue;
                }

                // Down-left first, then down-right
                for dx in [-1, 1] {
                    if let Some(target) = grid.offset(x, y, dx, 1)
                        && grid.at(target.0, target.1) == Empty
                    {
                        grid.swap((x, y), target);
                        stats.record_cell_moved();
                        break;
                    }
                }
            }
        }
    }

    /// Soil (dry or wet) falls straight down into air
    pub fn update_soil(grid: &mut Grid<GranularMaterial>, stats: &mut dyn SimStats) {
        let (rows, cols) = grid.dimensions();
        for y in scan_rows(rows) {
            for x in 0..cols {
                if grid.at(x, y).is_soil() && grid.at(x, y + 1) == Empty {
                    grid.swap((x, y), (x, y + 1));
                    stats.record_cell_moved();
                }
            }
        }
    }

    /// One water pass: fall, wet the dry soil below, or flow sideways
    pub fn update_water<R: WorldRng + ?Sized>(
        grid: &mut Grid<GranularMaterial>,
        rng: &mut R,
        stats: &mut dyn SimStats,
    ) {
        let (rows, cols) = grid.dimensions();
        for y in scan_rows(rows) {
            for x in 0..cols {
                if grid.at(x, y) != Water {
                    continue;
                }

                match grid.at(x, y + 1) {
                    Empty => {
                        grid.swap((x, y), (x, y + 1));
                        stats.record_cell_moved();
                    }
                    SoilDry => {
                        // Absorbed: the soil gets wet, the water stays put
                        grid.put(x, y + 1, SoilWet);
                        stats.record_state_change();
                    }
                    _ => {
                        let dx = rng.gen_direction();
                        if let Some(target) = grid.offset(x, y, dx, 0)
                            && grid.at(target.0, target.1) == Empty
                        {
                            grid.swap((x, y), target);
                            stats.record_cell_moved();
                        }
                    }
                }
            }
        }
    }

    /// Seeds fall into air, or sprout into grass on wet soil
    pub fn update_seeds(grid: &mut Grid<GranularMaterial>, stats: &mut dyn SimStats) {
        let (rows, cols) = grid.dimensions();
        // Seeds on the bottom row have nothing below them
        for y in scan_rows(rows) {
            for x in 0..cols {
                if grid.at(x, y) != Seed {
                    continue;
                }

                match grid.at(x, y + 1) {
                    Empty => {
                        grid.swap((x, y), (x, y + 1));
                        stats.record_cell_moved();
                    }
                    SoilWet => {
                        grid.put(x, y, Grass);
                        stats.record_state_change();
                    }
                    _ => {}
                }
            }
        }
    }
}

impl RuleSet for GranularRules {
    type Material = GranularMaterial;
    type State = ();

    fn name(&self) -> &'static str {
        "granular"
    }

    fn grid_config(&self) -> GridConfig {
        self.config.grid
    }

    fn initial_grid<R: WorldRng + ?Sized>(
        &self,
        rows: usize,
        cols: usize,
        _rng: &mut R,
    ) -> Grid<GranularMaterial> {
        Grid::new(rows, cols)
    }

    fn tick<R: WorldRng + ?Sized>(
        &self,
        grid: &mut Grid<GranularMaterial>,
        _state: &mut (),
        rng: &mut R,
        stats: &mut dyn SimStats,
    ) {
        Self::update_sand(grid, stats);
        Self::update_soil(grid, stats);
        for _ in 0..self.config.water_passes {
            Self::update_water(grid, rng, stats);
        }
        Self::update_seeds(grid, stats);
    }
}

/// Row indices from `rows - 2` down to 0
fn scan_rows(rows: usize) -> impl Iterator<Item = usize> {
    (0..rows.saturating_sub(1)).rev()
}
